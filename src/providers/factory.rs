use crate::config::{AppConfig, ProviderConfig};
use crate::error::SuggestError;
use crate::providers::{GoogleProvider, OpenAIProvider, SuggestionProvider};

pub struct ProviderFactory;

impl ProviderFactory {
    /// Create a provider instance from configuration
    pub fn create(
        provider_name: &str,
        config: &ProviderConfig,
    ) -> Result<Box<dyn SuggestionProvider>, SuggestError> {
        if !config.enabled {
            return Err(SuggestError::ProviderDisabled(provider_name.to_string()));
        }

        match provider_name {
            "google" => Ok(Box::new(GoogleProvider::new(config)?)),
            "openai" => Ok(Box::new(OpenAIProvider::new(config)?)),
            _ => Err(SuggestError::UnknownProvider(provider_name.to_string())),
        }
    }

    /// Get the default provider from configuration
    pub fn get_default_provider(
        config: &AppConfig,
    ) -> Result<Box<dyn SuggestionProvider>, SuggestError> {
        let provider_name = &config.default_provider;
        let provider_config = config
            .providers
            .get(provider_name)
            .ok_or_else(|| SuggestError::ProviderNotConfigured(provider_name.clone()))?;

        Self::create(provider_name, provider_config)
    }

    /// List all available provider names
    pub fn available_providers() -> Vec<&'static str> {
        vec!["google", "openai"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn create_test_provider_config() -> ProviderConfig {
        ProviderConfig {
            enabled: true,
            model: "test-model".to_string(),
            temperature: 0.7,
            max_tokens: 2000,
            timeout: 30,
            api_key: Some("test-key".to_string()),
            base_url: None,
        }
    }

    #[test]
    fn test_create_google_provider() {
        let config = create_test_provider_config();
        let provider = ProviderFactory::create("google", &config).unwrap();
        assert_eq!(provider.provider_name(), "google");
    }

    #[test]
    fn test_create_openai_provider() {
        let config = create_test_provider_config();
        let provider = ProviderFactory::create("openai", &config).unwrap();
        assert_eq!(provider.provider_name(), "openai");
    }

    #[test]
    fn test_create_unknown_provider() {
        let config = create_test_provider_config();
        let result = ProviderFactory::create("anthropic", &config);
        assert!(matches!(result, Err(SuggestError::UnknownProvider(_))));
    }

    #[test]
    fn test_create_disabled_provider() {
        let mut config = create_test_provider_config();
        config.enabled = false;

        let result = ProviderFactory::create("google", &config);
        assert!(matches!(result, Err(SuggestError::ProviderDisabled(_))));
    }

    #[test]
    fn test_get_default_provider() {
        let mut providers = HashMap::new();
        providers.insert("google".to_string(), create_test_provider_config());

        let app_config = AppConfig {
            default_provider: "google".to_string(),
            providers,
            ..Default::default()
        };

        let provider = ProviderFactory::get_default_provider(&app_config).unwrap();
        assert_eq!(provider.provider_name(), "google");
    }

    #[test]
    fn test_get_default_provider_not_found() {
        let app_config = AppConfig {
            default_provider: "google".to_string(),
            ..Default::default()
        };

        let result = ProviderFactory::get_default_provider(&app_config);
        assert!(matches!(
            result,
            Err(SuggestError::ProviderNotConfigured(_))
        ));
    }

    #[test]
    fn test_available_providers() {
        let providers = ProviderFactory::available_providers();
        assert_eq!(providers.len(), 2);
        assert!(providers.contains(&"google"));
        assert!(providers.contains(&"openai"));
    }
}

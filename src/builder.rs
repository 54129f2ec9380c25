use std::time::Duration;

use crate::config::{AppConfig, ImageConfig, ProviderConfig};
use crate::error::SuggestError;
use crate::images::ImageClient;
use crate::providers::{FallbackProvider, ProviderFactory, SuggestionProvider};
use crate::suggestions::RecipeSuggester;

/// Which text-generation backend to construct
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Google,
    OpenAI,
}

impl ProviderKind {
    /// Convert to the provider name string used by the factory
    fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Google => "google",
            ProviderKind::OpenAI => "openai",
        }
    }

    fn default_model(&self) -> &'static str {
        match self {
            ProviderKind::Google => "gemini-2.0-flash",
            ProviderKind::OpenAI => "gpt-4o-mini",
        }
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = SuggestError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "google" | "gemini" => Ok(ProviderKind::Google),
            "openai" => Ok(ProviderKind::OpenAI),
            other => Err(SuggestError::UnknownProvider(other.to_string())),
        }
    }
}

/// Builder for configuring a [`RecipeSuggester`].
///
/// Everything the original surface looked up ambiently (API keys stashed in
/// browser storage, hard-coded endpoints) is explicit here; fields left
/// unset fall back to file/environment configuration.
#[derive(Debug, Default)]
pub struct RecipeSuggesterBuilder {
    provider: Option<ProviderKind>,
    api_key: Option<String>,
    model: Option<String>,
    base_url: Option<String>,
    image_api_key: Option<String>,
    image_base_url: Option<String>,
    max_suggestions: Option<usize>,
    timeout: Option<Duration>,
    images_disabled: bool,
}

impl RecipeSuggesterBuilder {
    /// Select a specific text-generation backend instead of the configured
    /// default.
    ///
    /// # Example
    /// ```
    /// use recipe_suggest::{ProviderKind, RecipeSuggester};
    ///
    /// let builder = RecipeSuggester::builder()
    ///     .provider(ProviderKind::Google)
    ///     .api_key("your-api-key");
    /// ```
    pub fn provider(mut self, provider: ProviderKind) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Set the API key for the selected provider directly instead of relying
    /// on environment variables or config files.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the model name for the selected provider
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set a timeout for provider HTTP requests
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Cap how many suggestions one request returns (default 3)
    pub fn max_suggestions(mut self, limit: usize) -> Self {
        self.max_suggestions = Some(limit);
        self
    }

    /// Set the API key for the image lookup service
    pub fn image_api_key(mut self, key: impl Into<String>) -> Self {
        self.image_api_key = Some(key.into());
        self
    }

    /// Skip image enrichment entirely; suggestions keep `image_url: None`
    pub fn without_images(mut self) -> Self {
        self.images_disabled = true;
        self
    }

    #[doc(hidden)]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    #[doc(hidden)]
    pub fn image_base_url(mut self, url: impl Into<String>) -> Self {
        self.image_base_url = Some(url.into());
        self
    }

    /// Build the configured suggester.
    ///
    /// With a provider kind set, the provider is constructed from the
    /// builder fields (plus environment variables for a missing key).
    /// Without one, configuration is loaded from `config.toml` / `SUGGEST__`
    /// environment variables and the configured default or fallback chain is
    /// used.
    ///
    /// # Errors
    /// Returns `SuggestError` if the provider cannot be constructed, e.g.
    /// when no API key is available or the configured default provider has
    /// no entry.
    pub fn build(self) -> Result<RecipeSuggester, SuggestError> {
        let config = match self.provider {
            // An explicit provider choice does not need the config file
            Some(_) => AppConfig::default(),
            None => AppConfig::load()?,
        };

        let provider: Box<dyn SuggestionProvider> = match self.provider {
            Some(kind) => {
                let provider_config = ProviderConfig {
                    enabled: true,
                    model: self
                        .model
                        .unwrap_or_else(|| kind.default_model().to_string()),
                    temperature: 0.7,
                    max_tokens: 2000,
                    timeout: self.timeout.map_or(30, |d| d.as_secs().max(1)),
                    api_key: self.api_key,
                    base_url: self.base_url,
                };
                ProviderFactory::create(kind.as_str(), &provider_config)?
            }
            None => Box::new(FallbackProvider::new(&config)?),
        };

        let images_enabled = !self.images_disabled && config.images.enabled;
        let images = images_enabled.then(|| {
            ImageClient::new(&ImageConfig {
                enabled: true,
                api_key: self.image_api_key.or_else(|| config.images.api_key.clone()),
                base_url: self
                    .image_base_url
                    .or_else(|| config.images.base_url.clone()),
            })
        });

        Ok(RecipeSuggester::new(
            provider,
            images,
            self.max_suggestions.unwrap_or(config.max_suggestions),
        ))
    }
}

use crate::config::AppConfig;
use crate::error::SuggestError;
use crate::providers::{ProviderFactory, SuggestionProvider};
use async_trait::async_trait;
use log::{debug, info, warn};
use std::time::Duration;
use tokio::time::sleep;

/// Ordered provider chain with per-provider retry. Retries cover transport
/// and API failures only; a parse failure downstream is never retried here.
pub struct FallbackProvider {
    providers: Vec<Box<dyn SuggestionProvider>>,
    retry_attempts: u32,
    retry_delay_ms: u64,
}

impl FallbackProvider {
    /// Create a new fallback provider from configuration
    pub fn new(config: &AppConfig) -> Result<Self, SuggestError> {
        if !config.fallback.enabled {
            // If fallback is disabled, just use the default provider
            let default_provider = ProviderFactory::get_default_provider(config)?;
            return Ok(FallbackProvider {
                providers: vec![default_provider],
                retry_attempts: 1,
                retry_delay_ms: 0,
            });
        }

        let mut providers = Vec::new();

        // Create providers in fallback order
        for provider_name in &config.fallback.order {
            if let Some(provider_config) = config.providers.get(provider_name) {
                if provider_config.enabled {
                    match ProviderFactory::create(provider_name, provider_config) {
                        Ok(provider) => {
                            info!("Added '{}' to fallback chain", provider_name);
                            providers.push(provider);
                        }
                        Err(e) => {
                            warn!("Failed to initialize provider '{}': {}", provider_name, e);
                        }
                    }
                }
            } else {
                warn!(
                    "Provider '{}' in fallback order not found in configuration",
                    provider_name
                );
            }
        }

        if providers.is_empty() {
            return Err(SuggestError::AllProvidersFailed(
                "no providers available in fallback configuration".to_string(),
            ));
        }

        Ok(FallbackProvider {
            providers,
            retry_attempts: config.fallback.retry_attempts,
            retry_delay_ms: config.fallback.retry_delay_ms,
        })
    }

    /// Try a provider with exponential backoff retry logic
    async fn try_provider_with_retry(
        &self,
        provider: &dyn SuggestionProvider,
        prompt: &str,
    ) -> Result<String, String> {
        let mut last_error = None;

        for attempt in 1..=self.retry_attempts {
            debug!(
                "Requesting suggestions from {} (attempt {}/{})",
                provider.provider_name(),
                attempt,
                self.retry_attempts
            );

            match provider.generate(prompt).await {
                Ok(text) => {
                    info!(
                        "Received suggestion text from {}",
                        provider.provider_name()
                    );
                    return Ok(text);
                }
                Err(e) => {
                    let error_msg = format!("{}", e);
                    warn!(
                        "Provider {} failed (attempt {}/{}): {}",
                        provider.provider_name(),
                        attempt,
                        self.retry_attempts,
                        error_msg
                    );
                    last_error = Some(error_msg);

                    if attempt < self.retry_attempts {
                        // Exponential backoff: delay increases with each attempt
                        let delay = Duration::from_millis(self.retry_delay_ms * attempt as u64);
                        debug!("Waiting {:?} before retry", delay);
                        sleep(delay).await;
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| "no attempts made".to_string()))
    }
}

#[async_trait]
impl SuggestionProvider for FallbackProvider {
    fn provider_name(&self) -> &str {
        "fallback"
    }

    async fn generate(&self, prompt: &str) -> Result<String, SuggestError> {
        let mut all_errors: Vec<String> = Vec::new();

        for provider in &self.providers {
            match self.try_provider_with_retry(provider.as_ref(), prompt).await {
                Ok(text) => return Ok(text),
                Err(e) => {
                    all_errors.push(format!("{}: {}", provider.provider_name(), e));
                }
            }
        }

        Err(SuggestError::AllProvidersFailed(all_errors.join("\n")))
    }
}

use crate::config::ProviderConfig;
use crate::error::SuggestError;
use crate::providers::SuggestionProvider;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Google Gemini `generateContent` backend, the default suggestion source.
pub struct GoogleProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl GoogleProvider {
    /// Create a new Gemini provider from configuration
    pub fn new(config: &ProviderConfig) -> Result<Self, SuggestError> {
        // Try config first, then fall back to environment variable
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .ok_or(SuggestError::MissingApiKey("GEMINI_API_KEY"))?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(GoogleProvider {
            client,
            api_key,
            base_url,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String, model: String) -> Self {
        GoogleProvider {
            client: Client::new(),
            api_key,
            base_url,
            model,
            temperature: 0.7,
            max_tokens: 2000,
        }
    }
}

#[async_trait]
impl SuggestionProvider for GoogleProvider {
    fn provider_name(&self) -> &str {
        "google"
    }

    async fn generate(&self, prompt: &str) -> Result<String, SuggestError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&json!({
                "contents": [{
                    "parts": [{ "text": prompt }]
                }],
                "generationConfig": {
                    "temperature": self.temperature,
                    "maxOutputTokens": self.max_tokens
                }
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SuggestError::InvalidResponse(format!(
                "Gemini request failed with status {}",
                response.status()
            )));
        }

        let response_body: Value = response.json().await?;
        debug!("{:?}", response_body);

        let text = response_body["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| {
                SuggestError::InvalidResponse(
                    "no candidate text in Gemini response".to_string(),
                )
            })?
            .to_string();

        Ok(text)
    }
}

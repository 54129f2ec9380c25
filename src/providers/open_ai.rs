use crate::config::ProviderConfig;
use crate::error::SuggestError;
use crate::providers::SuggestionProvider;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.openai.com";

pub struct OpenAIProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAIProvider {
    /// Create a new OpenAI provider from configuration
    pub fn new(config: &ProviderConfig) -> Result<Self, SuggestError> {
        // Try config first, then fall back to environment variable
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
            .ok_or(SuggestError::MissingApiKey("OPENAI_API_KEY"))?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(OpenAIProvider {
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
        OpenAIProvider {
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
impl SuggestionProvider for OpenAIProvider {
    fn provider_name(&self) -> &str {
        "openai"
    }

    async fn generate(&self, prompt: &str) -> Result<String, SuggestError> {
        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&json!({
                "model": self.model,
                "messages": [
                    {"role": "user", "content": prompt}
                ],
                "temperature": self.temperature,
                "max_tokens": self.max_tokens
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SuggestError::InvalidResponse(format!(
                "OpenAI request failed with status {}",
                response.status()
            )));
        }

        let response_body: Value = response.json().await?;
        debug!("{:?}", response_body);

        let text = response_body["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| {
                SuggestError::InvalidResponse(
                    "no completion content in OpenAI response".to_string(),
                )
            })?
            .to_string();

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn test_generate() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "choices": [{
                        "message": {
                            "content": "Recipe Name: Miso Ramen\nDifficulty Level: Advanced"
                        }
                    }]
                }"#,
            )
            .create();

        let provider = OpenAIProvider::with_base_url(
            "fake_api_key".to_string(),
            server.url(),
            "gpt-4o-mini".to_string(),
        );

        let text = provider.generate("some prompt").await.unwrap();
        assert!(text.contains("Miso Ramen"));
        mock.assert();
    }

    #[tokio::test]
    async fn test_generate_api_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error": "Invalid request"}"#)
            .create();

        let provider = OpenAIProvider::with_base_url(
            "fake_api_key".to_string(),
            server.url(),
            "gpt-4o-mini".to_string(),
        );

        let result = provider.generate("some prompt").await;
        assert!(result.is_err());
        mock.assert();
    }

    #[tokio::test]
    async fn test_provider_name() {
        let provider = OpenAIProvider::with_base_url(
            "fake_api_key".to_string(),
            "http://localhost".to_string(),
            "gpt-4o-mini".to_string(),
        );
        assert_eq!(provider.provider_name(), "openai");
    }
}

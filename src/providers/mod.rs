mod factory;
mod fallback;
mod google;
mod open_ai;
mod prompt;

pub use factory::ProviderFactory;
pub use fallback::FallbackProvider;
pub use google::GoogleProvider;
pub use open_ai::OpenAIProvider;
pub use prompt::{build_suggestions_prompt, SUGGESTIONS_PROMPT};

use crate::error::SuggestError;
use async_trait::async_trait;

/// Unified trait for all text-generation providers
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    /// Get the provider name (e.g., "google", "openai")
    fn provider_name(&self) -> &str;

    /// Produce the raw suggestion text for one prompt
    async fn generate(&self, prompt: &str) -> Result<String, SuggestError>;
}

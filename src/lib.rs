pub mod config;
pub mod error;
pub mod extractor;
pub mod images;
pub mod model;
pub mod providers;

mod builder;
mod suggestions;

pub use builder::{ProviderKind, RecipeSuggesterBuilder};
pub use config::AppConfig;
pub use error::SuggestError;
pub use extractor::extract_recipes;
pub use images::ImageClient;
pub use model::{SuggestedRecipe, UserPreferences};
pub use providers::{FallbackProvider, SuggestionProvider};
pub use suggestions::{RecipeSuggester, MAX_SUGGESTIONS};

/// Generate suggestions using file/environment configuration.
///
/// Convenience wrapper over [`RecipeSuggester::builder`] for callers that
/// keep everything in `config.toml` / `SUGGEST__` environment variables.
pub async fn suggest_recipes(
    preferences: &UserPreferences,
) -> Result<Vec<SuggestedRecipe>, SuggestError> {
    RecipeSuggester::builder().build()?.suggest(preferences).await
}

/// Generate suggestions from an already-loaded configuration.
pub async fn suggest_recipes_with_config(
    config: &AppConfig,
    preferences: &UserPreferences,
) -> Result<Vec<SuggestedRecipe>, SuggestError> {
    let provider = FallbackProvider::new(config)?;
    let images = config
        .images
        .enabled
        .then(|| ImageClient::new(&config.images));

    RecipeSuggester::new(Box::new(provider), images, config.max_suggestions)
        .suggest(preferences)
        .await
}

use crate::builder::RecipeSuggesterBuilder;
use crate::error::SuggestError;
use crate::extractor::extract_recipes;
use crate::images::ImageClient;
use crate::model::{SuggestedRecipe, UserPreferences};
use crate::providers::{build_suggestions_prompt, SuggestionProvider};
use log::{debug, info};

/// How many suggestions survive to display by default. The extractor itself
/// never caps its output; this limit is applied here, after parsing.
pub const MAX_SUGGESTIONS: usize = 3;

/// End-to-end suggestion pipeline: prompt, generate, parse, enrich.
pub struct RecipeSuggester {
    provider: Box<dyn SuggestionProvider>,
    images: Option<ImageClient>,
    max_suggestions: usize,
}

impl RecipeSuggester {
    /// Assemble a suggester from parts. Most callers want [`Self::builder`]
    /// instead.
    pub fn new(
        provider: Box<dyn SuggestionProvider>,
        images: Option<ImageClient>,
        max_suggestions: usize,
    ) -> Self {
        RecipeSuggester {
            provider,
            images,
            max_suggestions,
        }
    }

    /// Creates a new builder for configuring a suggester
    pub fn builder() -> RecipeSuggesterBuilder {
        RecipeSuggesterBuilder::default()
    }

    /// Generate personalized recipe suggestions for the given preferences.
    ///
    /// # Errors
    /// - [`SuggestError::EmptyPreferences`] when no preference is set at all
    /// - [`SuggestError::EmptyResponse`] when the provider answers with a
    ///   blank completion
    /// - [`SuggestError::NoRecipesFound`] when nothing parseable came back;
    ///   the caller owns retry, this pipeline does not loop
    pub async fn suggest(
        &self,
        preferences: &UserPreferences,
    ) -> Result<Vec<SuggestedRecipe>, SuggestError> {
        if preferences.is_empty() {
            return Err(SuggestError::EmptyPreferences);
        }

        let prompt = build_suggestions_prompt(preferences);
        debug!(
            "Requesting suggestions from {}",
            self.provider.provider_name()
        );

        let raw = self.provider.generate(&prompt).await?;
        if raw.trim().is_empty() {
            return Err(SuggestError::EmptyResponse);
        }

        let mut recipes = extract_recipes(&raw)?;
        info!("Parsed {} recipe suggestions", recipes.len());
        recipes.truncate(self.max_suggestions);

        if let Some(images) = &self.images {
            for recipe in &mut recipes {
                recipe.image_url = Some(images.image_for(&recipe.name).await);
            }
        }

        Ok(recipes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct StubProvider {
        response: String,
    }

    #[async_trait]
    impl SuggestionProvider for StubProvider {
        fn provider_name(&self) -> &str {
            "stub"
        }

        async fn generate(&self, _prompt: &str) -> Result<String, SuggestError> {
            Ok(self.response.clone())
        }
    }

    fn suggester_with(response: &str) -> RecipeSuggester {
        RecipeSuggester::new(
            Box::new(StubProvider {
                response: response.to_string(),
            }),
            None,
            MAX_SUGGESTIONS,
        )
    }

    fn some_preferences() -> UserPreferences {
        UserPreferences {
            favorite_cuisines: vec!["Italian".to_string()],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_truncates_to_limit() {
        let response: String = (1..=5)
            .map(|i| format!("Recipe Name: Dish Variant {}\n\n", i))
            .collect();
        let suggester = suggester_with(&response);

        let recipes = suggester.suggest(&some_preferences()).await.unwrap();
        assert_eq!(recipes.len(), MAX_SUGGESTIONS);
        assert_eq!(recipes[0].name, "Dish Variant 1");
        assert_eq!(recipes[2].name, "Dish Variant 3");
    }

    #[tokio::test]
    async fn test_rejects_empty_preferences() {
        let suggester = suggester_with("Recipe Name: Anything\n");
        let result = suggester.suggest(&UserPreferences::default()).await;
        assert!(matches!(result, Err(SuggestError::EmptyPreferences)));
    }

    #[tokio::test]
    async fn test_rejects_blank_completion() {
        let suggester = suggester_with("   \n  ");
        let result = suggester.suggest(&some_preferences()).await;
        assert!(matches!(result, Err(SuggestError::EmptyResponse)));
    }

    #[tokio::test]
    async fn test_unparseable_text_is_no_recipes() {
        // Non-blank chatter with no recoverable block name
        let suggester = suggester_with("Recipe Name: Recipe 1\n");
        let result = suggester.suggest(&some_preferences()).await;
        assert!(matches!(result, Err(SuggestError::NoRecipesFound)));
    }

    #[tokio::test]
    async fn test_no_image_client_leaves_urls_unset() {
        let suggester = suggester_with("Recipe Name: Plain Toast\n");
        let recipes = suggester.suggest(&some_preferences()).await.unwrap();
        assert!(recipes[0].image_url.is_none());
    }
}

use serde::{Deserialize, Serialize};

/// One structured recipe suggestion recovered from provider text.
///
/// Field names serialize in camelCase, the shape the web frontend expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedRecipe {
    pub name: String,
    pub description: String,
    pub difficulty: String,
    /// Free text such as "45 minutes"; never parsed into a duration.
    pub cooking_time: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// The preferences a suggestion request is personalized with.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub dietary_preferences: Vec<String>,
    pub favorite_cuisines: Vec<String>,
    pub cooking_skill_level: Option<String>,
}

impl UserPreferences {
    /// True when no preference of any kind has been set.
    pub fn is_empty(&self) -> bool {
        self.dietary_preferences.is_empty()
            && self.favorite_cuisines.is_empty()
            && self
                .cooking_skill_level
                .as_deref()
                .map_or(true, |level| level.trim().is_empty())
    }
}

use crate::model::UserPreferences;

/// The instruction block sent ahead of the user's preferences.
///
/// It names the exact field labels the extractor later looks for, and asks
/// the model to leave out the markdown emphasis and numbering the extractor
/// would otherwise have to strip.
///
/// The text is loaded from `prompt.txt` at compile time using the
/// `include_str!` macro, making it easy to edit without dealing with
/// Rust string syntax.
pub const SUGGESTIONS_PROMPT: &str = include_str!("prompt.txt");

/// Build the full prompt for one suggestion request.
pub fn build_suggestions_prompt(preferences: &UserPreferences) -> String {
    format!(
        "{}\nUser preferences:\n- Dietary Preferences: {}\n- Favorite Cuisines: {}\n- Cooking Skill Level: {}",
        SUGGESTIONS_PROMPT,
        join_or_unspecified(&preferences.dietary_preferences),
        join_or_unspecified(&preferences.favorite_cuisines),
        preferences
            .cooking_skill_level
            .as_deref()
            .unwrap_or("Intermediate"),
    )
}

fn join_or_unspecified(values: &[String]) -> String {
    if values.is_empty() {
        "None specified".to_string()
    } else {
        values.join(", ")
    }
}

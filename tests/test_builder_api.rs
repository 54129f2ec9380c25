use mockito::{Matcher, Server};
use recipe_suggest::{suggest_recipes, ProviderKind, RecipeSuggester, UserPreferences};

fn test_preferences() -> UserPreferences {
    UserPreferences {
        favorite_cuisines: vec!["Japanese".to_string()],
        ..Default::default()
    }
}

#[tokio::test]
async fn test_builder_with_mock_endpoints() {
    let mut gemini = Server::new_async().await;
    let mut images = Server::new_async().await;

    let _generate = gemini
        .mock("POST", "/v1beta/models/gemini-2.0-flash:generateContent")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            serde_json::json!({
                "candidates": [{
                    "content": { "parts": [{
                        "text": "Recipe Name: Miso Ramen\nDifficulty Level: Advanced\n"
                    }] }
                }]
            })
            .to_string(),
        )
        .create();

    let _lookup = images
        .mock("GET", "/recipes/complexSearch")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"results": [{"image": "https://img.example.com/ramen.jpg"}]}"#)
        .create();

    let suggester = RecipeSuggester::builder()
        .provider(ProviderKind::Google)
        .api_key("fake_gemini_key")
        .base_url(gemini.url())
        .image_api_key("fake_image_key")
        .image_base_url(images.url())
        .build()
        .unwrap();

    let recipes = suggester.suggest(&test_preferences()).await.unwrap();
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].name, "Miso Ramen");
    assert_eq!(recipes[0].difficulty, "Advanced");
    assert_eq!(
        recipes[0].image_url.as_deref(),
        Some("https://img.example.com/ramen.jpg")
    );
}

#[tokio::test]
async fn test_builder_custom_suggestion_cap() {
    let mut gemini = Server::new_async().await;

    let text: String = (1..=4)
        .map(|i| format!("Recipe Name: Bowl Number {}\n\n", i))
        .collect();
    let _generate = gemini
        .mock("POST", "/v1beta/models/gemini-2.0-flash:generateContent")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            serde_json::json!({
                "candidates": [{ "content": { "parts": [{ "text": text }] } }]
            })
            .to_string(),
        )
        .create();

    let suggester = RecipeSuggester::builder()
        .provider(ProviderKind::Google)
        .api_key("fake_gemini_key")
        .base_url(gemini.url())
        .without_images()
        .max_suggestions(2)
        .build()
        .unwrap();

    let recipes = suggester.suggest(&test_preferences()).await.unwrap();
    assert_eq!(recipes.len(), 2);
}

#[test]
fn test_builder_requires_some_api_key() {
    // Guard against ambient credentials leaking into the test
    if std::env::var("GEMINI_API_KEY").is_ok() {
        return;
    }

    let result = RecipeSuggester::builder()
        .provider(ProviderKind::Google)
        .without_images()
        .build();

    assert!(result.is_err());
}

/// This test is ignored by default since it requires a real Gemini API key
#[tokio::test]
#[ignore]
async fn test_suggest_against_live_api() {
    let recipes = suggest_recipes(&UserPreferences {
        dietary_preferences: vec!["vegetarian".to_string()],
        favorite_cuisines: vec!["Italian".to_string()],
        cooking_skill_level: Some("Beginner".to_string()),
    })
    .await
    .unwrap();

    assert!(!recipes.is_empty());
    assert!(recipes.len() <= 3);
}

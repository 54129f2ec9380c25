use crate::config::ImageConfig;
use log::{debug, warn};
use reqwest::Client;
use serde_json::Value;

const DEFAULT_BASE_URL: &str = "https://api.spoonacular.com";

/// Looks up a representative photo for a suggestion by recipe name.
///
/// Lookup is strictly best-effort: a failed or empty search degrades to a
/// deterministic stock-photo URL, so enrichment can never fail a request.
pub struct ImageClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl ImageClient {
    /// Create a new image client from configuration. A missing API key is
    /// allowed; without one every lookup resolves to the stock fallback.
    pub fn new(config: &ImageConfig) -> Self {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("SPOONACULAR_API_KEY").ok());

        if api_key.is_none() {
            debug!("No image API key configured; using stock photo fallback");
        }

        ImageClient {
            client: Client::new(),
            api_key,
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        ImageClient {
            client: Client::new(),
            api_key: Some(api_key),
            base_url,
        }
    }

    /// Find an image URL for a recipe name. Tries an exact-name search, then
    /// a simplified-name search, then falls back to a stock photo URL.
    pub async fn image_for(&self, recipe_name: &str) -> String {
        match self.search_image(recipe_name).await {
            Ok(Some(url)) => return url,
            Ok(None) => debug!("No image match for '{}'", recipe_name),
            Err(e) => warn!("Image lookup failed for '{}': {}", recipe_name, e),
        }

        let simplified = simplify_recipe_name(recipe_name);
        if simplified != recipe_name {
            debug!("Retrying image search with '{}'", simplified);
            if let Ok(Some(url)) = self.search_image(&simplified).await {
                return url;
            }
        }

        fallback_image_url(recipe_name)
    }

    async fn search_image(&self, query: &str) -> Result<Option<String>, reqwest::Error> {
        let Some(api_key) = &self.api_key else {
            return Ok(None);
        };

        let response = self
            .client
            .get(format!("{}/recipes/complexSearch", self.base_url))
            .query(&[("query", query), ("apiKey", api_key), ("number", "1")])
            .send()
            .await?;

        if !response.status().is_success() {
            warn!("Image search returned status {}", response.status());
            return Ok(None);
        }

        let body: Value = response.json().await?;
        Ok(body["results"][0]["image"].as_str().map(String::from))
    }
}

/// Deterministic stock-photo URL keyed on the first words of the name.
pub fn fallback_image_url(recipe_name: &str) -> String {
    let keywords: Vec<&str> = recipe_name.split_whitespace().take(2).collect();
    format!(
        "https://source.unsplash.com/featured/800x600/?food,{},dish,meal",
        keywords.join(",")
    )
}

/// Reduce a compound recipe name to its main food item for a looser search,
/// e.g. "Butternut Squash Curry with Naan" becomes "Squash Curry".
fn simplify_recipe_name(name: &str) -> String {
    let main = name
        .split(" and ")
        .next()
        .and_then(|part| part.split(" with ").next())
        .and_then(|part| part.split('(').next())
        .unwrap_or(name)
        .trim();

    let words: Vec<&str> = main.split_whitespace().collect();
    let tail = if words.len() > 2 {
        &words[words.len() - 2..]
    } else {
        &words[..]
    };

    let simplified = tail.join(" ");
    if simplified.is_empty() {
        name.to_string()
    } else {
        simplified
    }
}

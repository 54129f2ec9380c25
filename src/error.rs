use thiserror::Error;

/// Errors that can occur while generating recipe suggestions
#[derive(Error, Debug)]
pub enum SuggestError {
    /// The provider response contained no parseable recipe
    #[error("Could not parse any recipes from the response")]
    NoRecipesFound,

    /// The provider returned a blank completion
    #[error("Received an empty response from the provider")]
    EmptyResponse,

    /// No dietary preferences, cuisines, or skill level were supplied
    #[error("No preferences set; add dietary preferences, favorite cuisines, or a skill level")]
    EmptyPreferences,

    /// HTTP request to a provider or the image API failed
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider answered with an unexpected JSON shape
    #[error("Unexpected provider response: {0}")]
    InvalidResponse(String),

    /// API key missing from both configuration and environment
    #[error("{0} not found in config or environment")]
    MissingApiKey(&'static str),

    /// Requested provider name is not known to the factory
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    /// Requested provider exists but is disabled in configuration
    #[error("Provider '{0}' is not enabled in configuration")]
    ProviderDisabled(String),

    /// Provider named in configuration has no entry in the providers table
    #[error("Provider '{0}' not found in configuration")]
    ProviderNotConfigured(String),

    /// Every provider in the fallback chain failed
    #[error("All providers failed:\n{0}")]
    AllProvidersFailed(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

mod client;
pub mod prompts;

pub use client::OpenRouterClient;

/// Chat-completion provider interface
#[async_trait::async_trait]
pub trait TutorService: Send + Sync {
    /// Send a single-user-message prompt and return the generated text
    async fn complete(&self, prompt: &str) -> Result<String, AiError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API key missing: set the OPENROUTER_API_KEY environment variable")]
    MissingApiKey,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    Authentication,
}

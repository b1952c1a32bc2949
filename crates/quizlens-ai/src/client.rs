use async_trait::async_trait;
use quizlens_config::ai::AiConfig;

use crate::{AiError, TutorService};

/// OpenRouter chat-completion client
#[derive(Clone)]
pub struct OpenRouterClient {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    model: String,
}

impl OpenRouterClient {
    /// Build a client from configuration; a missing key is a hard
    /// precondition failure for every AI-dependent operation.
    pub fn from_config(config: &AiConfig) -> Result<Self, AiError> {
        if config.api_key.is_empty() {
            return Err(AiError::MissingApiKey);
        }

        Ok(Self {
            client: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            api_url: config.api_url.clone(),
            model: config.model.clone(),
        })
    }
}

#[async_trait]
impl TutorService for OpenRouterClient {
    async fn complete(&self, prompt: &str) -> Result<String, AiError> {
        let body = serde_json::json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
        });

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await?;

        if response.status() == 429 {
            return Err(AiError::RateLimitExceeded);
        }

        if response.status() == 401 || response.status() == 403 {
            return Err(AiError::Authentication);
        }

        if !response.status().is_success() {
            return Err(AiError::Api(format!("HTTP {}", response.status())));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiError::Api(format!("Failed to parse response: {}", e)))?;

        let content = json["choices"]
            .get(0)
            .and_then(|c| c["message"]["content"].as_str())
            .ok_or_else(|| AiError::Api("No completion in response".to_string()))?;

        Ok(content.trim().to_string())
    }
}

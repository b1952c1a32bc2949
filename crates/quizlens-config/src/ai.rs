use std::env;

use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://openrouter.ai/api/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "google/gemini-2.0-flash-001".to_string()
}

fn default_practice_count() -> usize {
    10
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AiConfig {
    /// OpenRouter API key; empty means AI features are unavailable
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_practice_count")]
    pub practice_count: usize,
}

impl AiConfig {
    pub fn new() -> Self {
        let api_key = env::var("OPENROUTER_API_KEY").unwrap_or_default();

        let api_url = env::var("OPENROUTER_API_URL").unwrap_or_else(|_| default_api_url());

        let model = env::var("QUIZLENS_MODEL").unwrap_or_else(|_| default_model());

        let practice_count = env::var("QUIZLENS_PRACTICE_COUNT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_practice_count);

        Self {
            api_key,
            api_url,
            model,
            practice_count,
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: default_api_url(),
            model: default_model(),
            practice_count: default_practice_count(),
        }
    }
}

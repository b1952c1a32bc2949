use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_language() -> String {
    "eng".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct OcrConfig {
    #[serde(default = "default_language")]
    pub language: String,
    /// Explicit path to the tesseract binary, skipping discovery
    pub engine_path: Option<PathBuf>,
}

impl OcrConfig {
    pub fn new() -> Self {
        let language = env::var("QUIZLENS_OCR_LANG").unwrap_or_else(|_| default_language());

        let engine_path = env::var("QUIZLENS_TESSERACT").ok().map(PathBuf::from);

        Self {
            language,
            engine_path,
        }
    }
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            engine_path: None,
        }
    }
}

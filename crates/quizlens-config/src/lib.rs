use serde::{Deserialize, Serialize};

use self::ai::AiConfig;
use self::ocr::OcrConfig;
use self::storage::StorageConfig;

pub mod ai;
pub mod ocr;
pub mod storage;

#[derive(Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ai: AiConfig,
    pub ocr: OcrConfig,
    pub storage: StorageConfig,
}

impl Config {
    pub fn new() -> Self {
        Config {
            ai: AiConfig::new(),
            ocr: OcrConfig::new(),
            storage: StorageConfig::new(),
        }
    }
}

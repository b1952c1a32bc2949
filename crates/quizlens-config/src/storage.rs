use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_history_file() -> String {
    "history.json".to_string()
}

fn default_export_file() -> String {
    "quizlens_practice.txt".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    /// Override for the application data directory
    pub data_dir: Option<PathBuf>,
    #[serde(default = "default_history_file")]
    pub history_file: String,
    #[serde(default = "default_export_file")]
    pub export_file: String,
}

impl StorageConfig {
    pub fn new() -> Self {
        let data_dir = env::var("QUIZLENS_DATA_DIR").ok().map(PathBuf::from);

        Self {
            data_dir,
            history_file: default_history_file(),
            export_file: default_export_file(),
        }
    }

    /// Platform data directory for quizlens
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("quizlens")
        })
    }

    pub fn history_path(&self) -> PathBuf {
        self.data_dir().join(&self.history_file)
    }

    /// Fixed-name export target in a user-visible location
    pub fn export_path(&self) -> PathBuf {
        dirs::desktop_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(&self.export_file)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            history_file: default_history_file(),
            export_file: default_export_file(),
        }
    }
}

use std::env;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use anyhow::{Context, Result};

/// Common install locations checked after $PATH
const WELL_KNOWN_PATHS: &[&str] = &[
    "/usr/local/bin/tesseract",
    "/opt/homebrew/bin/tesseract",
    "/usr/bin/tesseract",
];

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("recognition engine unavailable: tesseract not found on PATH or in known locations")]
    NotFound,
}

/// Locate the tesseract binary: $PATH first, then well-known install paths
pub fn find_tesseract() -> Option<PathBuf> {
    if let Some(paths) = env::var_os("PATH") {
        for dir in env::split_paths(&paths) {
            let candidate = dir.join("tesseract");
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }

    WELL_KNOWN_PATHS
        .iter()
        .map(PathBuf::from)
        .find(|p| p.is_file())
}

/// Handle to an external tesseract binary
#[derive(Debug, Clone)]
pub struct TesseractEngine {
    binary: PathBuf,
    language: String,
}

impl TesseractEngine {
    /// Discover the engine, honoring an explicit path override
    pub fn discover(engine_path: Option<&Path>, language: &str) -> Result<Self, EngineError> {
        let binary = match engine_path {
            Some(path) if path.is_file() => path.to_path_buf(),
            _ => find_tesseract().ok_or(EngineError::NotFound)?,
        };

        tracing::info!("Using tesseract at {}", binary.display());

        Ok(Self {
            binary,
            language: language.to_string(),
        })
    }

    /// Recognize text from PNG image bytes by piping them through tesseract
    pub fn recognize(&self, image_bytes: &[u8]) -> Result<String> {
        let mut child = Command::new(&self.binary)
            .args(["stdin", "stdout", "-l", &self.language, "--oem", "3", "--psm", "6"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .context("Failed to spawn tesseract")?;

        child
            .stdin
            .take()
            .context("Failed to open tesseract stdin")?
            .write_all(image_bytes)
            .context("Failed to write image to tesseract")?;

        let output = child
            .wait_with_output()
            .context("Failed to wait for tesseract")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("tesseract exited with {}: {}", output.status, stderr.trim());
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use quizlens_types::Mode;
use serde::{Deserialize, Serialize};

/// One captured question. Never mutated or deleted after the first write.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub question: String,
    pub mode: Mode,
    #[serde(default)]
    pub timestamp: u64,
}

/// Durable, de-duplicated question log backed by a single JSON file.
///
/// The whole store is loaded at open and the whole file rewritten on each
/// append, so it must stay single-writer: one process, one owner.
pub struct HistoryStore {
    path: PathBuf,
    entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    /// Open the store at `path`. A missing or unparsable file is treated as
    /// empty history, never as an error.
    pub fn open(path: PathBuf) -> Self {
        let entries = match fs::read_to_string(&path) {
            Ok(data) => match serde_json::from_str(&data) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!(
                        "History file {} is unreadable, starting empty: {}",
                        path.display(),
                        e
                    );
                    Vec::new()
                }
            },
            Err(_) => Vec::new(),
        };

        Self { path, entries }
    }

    /// Append a question unless it already exists verbatim (first write
    /// wins), then rewrite the backing file. Write errors propagate.
    pub fn save_question(&mut self, question: &str, mode: Mode) -> Result<()> {
        if self.entries.iter().any(|e| e.question == question) {
            return Ok(());
        }

        self.entries.push(HistoryEntry {
            question: question.to_string(),
            mode,
            timestamp: unix_timestamp(),
        });

        self.persist()
    }

    /// Questions in the order they were first saved, oldest first
    pub fn get_all_questions(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.question.clone()).collect()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let data = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, data)
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }
}

/// Best-effort capture time, 0 when the clock is unavailable
fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> HistoryStore {
        HistoryStore::open(dir.path().join("history.json"))
    }

    #[test]
    fn saves_and_orders_questions() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        store.save_question("B", Mode::Solve).unwrap();
        store.save_question("A", Mode::Hint).unwrap();
        store.save_question("C", Mode::Solve).unwrap();

        assert_eq!(store.get_all_questions(), vec!["B", "A", "C"]);
    }

    #[test]
    fn duplicate_questions_are_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        store.save_question("What is 2+2?", Mode::Solve).unwrap();
        store.save_question("What is 2+2?", Mode::Solve).unwrap();

        assert_eq!(store.len(), 1);
    }

    #[test]
    fn first_write_wins_across_modes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, r#"[{"question":"A","mode":"solve"}]"#).unwrap();

        let mut store = HistoryStore::open(path);
        store.save_question("A", Mode::Hint).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.entries()[0].mode, Mode::Solve);
    }

    #[test]
    fn reload_preserves_order_and_dedup() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut store = store_in(&dir);
            store.save_question("first", Mode::Solve).unwrap();
            store.save_question("second", Mode::Hint).unwrap();
        }

        let mut reloaded = store_in(&dir);
        assert_eq!(reloaded.get_all_questions(), vec!["first", "second"]);

        reloaded.save_question("first", Mode::Hint).unwrap();
        assert_eq!(reloaded.len(), 2);
    }

    #[test]
    fn corrupt_file_starts_empty_and_recovers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, "{not json").unwrap();

        let mut store = HistoryStore::open(path.clone());
        assert!(store.get_all_questions().is_empty());

        store.save_question("fresh", Mode::Solve).unwrap();

        let reloaded = HistoryStore::open(path);
        assert_eq!(reloaded.get_all_questions(), vec!["fresh"]);
    }

    #[test]
    fn missing_file_is_empty_history() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.is_empty());
    }
}

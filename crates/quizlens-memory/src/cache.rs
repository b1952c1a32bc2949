use std::collections::HashMap;

/// Process-lifetime question -> answer cache. Write-through only: the
/// pipeline populates it after every successful answer but always re-queries
/// the service, so a mode switch never serves a stale answer.
#[derive(Default)]
pub struct AnswerCache {
    entries: HashMap<String, String>,
}

impl AnswerCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, question: &str) -> Option<&str> {
        self.entries.get(question).map(String::as_str)
    }

    /// Last write wins
    pub fn store(&mut self, question: &str, answer: &str) {
        self.entries
            .insert(question.to_string(), answer.to_string());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_and_retrieves() {
        let mut cache = AnswerCache::new();
        assert_eq!(cache.get("q"), None);

        cache.store("q", "a");
        assert_eq!(cache.get("q"), Some("a"));
    }

    #[test]
    fn last_write_wins() {
        let mut cache = AnswerCache::new();
        cache.store("q", "first");
        cache.store("q", "second");
        assert_eq!(cache.get("q"), Some("second"));
        assert_eq!(cache.len(), 1);
    }
}

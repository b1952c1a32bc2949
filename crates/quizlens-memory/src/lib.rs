mod cache;
mod history;

pub use cache::AnswerCache;
pub use history::{HistoryEntry, HistoryStore};

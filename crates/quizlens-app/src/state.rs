use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use quizlens_config::Config;
use quizlens_memory::{AnswerCache, HistoryStore};
use quizlens_ocr::RawImage;
use quizlens_types::Mode;
use tokio::sync::{Mutex, RwLock};

use crate::session::Session;

/// Full-screen raster held between capture and the user's region selection
pub struct PendingCapture {
    pub image: RawImage,
    pub mode: Mode,
}

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    /// Single-writer discipline: the store rewrites its whole backing file
    /// on every append and must only ever be mutated through this lock.
    pub history: Mutex<HistoryStore>,
    pub cache: Mutex<AnswerCache>,
    pub session: Mutex<Session>,
    pub pending: Mutex<Option<PendingCapture>>,
    pub last_practice: Mutex<Option<String>>,
    pub capture_running: AtomicBool,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let history = HistoryStore::open(config.storage.history_path());
        tracing::info!("Loaded {} history entries", history.len());

        Self {
            config: Arc::new(RwLock::new(config)),
            history: Mutex::new(history),
            cache: Mutex::new(AnswerCache::new()),
            session: Mutex::new(Session::new()),
            pending: Mutex::new(None),
            last_practice: Mutex::new(None),
            capture_running: AtomicBool::new(false),
        }
    }
}

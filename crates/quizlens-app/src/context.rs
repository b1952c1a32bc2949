use std::sync::Arc;

use kanal::AsyncSender;
use quizlens_ai::TutorService;
use quizlens_ocr::TesseractEngine;
use quizlens_types::AppEvent;

use crate::state::AppState;

/// Bundles the shared dependencies of every event handler: app state, the
/// sender towards the presentation layer, and the optional service handles.
///
/// `service` and `engine` are `None` when their precondition (API key,
/// tesseract binary) was not met at startup; handlers surface that as a
/// message instead of crashing.
pub struct TutorContext {
    pub state: Arc<AppState>,
    pub event_tx: AsyncSender<AppEvent>,
    pub service: Option<Arc<dyn TutorService>>,
    pub engine: Option<TesseractEngine>,
}

impl TutorContext {
    pub fn new(
        state: Arc<AppState>,
        event_tx: AsyncSender<AppEvent>,
        service: Option<Arc<dyn TutorService>>,
        engine: Option<TesseractEngine>,
    ) -> Self {
        Self {
            state,
            event_tx,
            service,
            engine,
        }
    }
}

impl Clone for TutorContext {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            event_tx: self.event_tx.clone(),
            service: self.service.clone(),
            engine: self.engine.clone(),
        }
    }
}

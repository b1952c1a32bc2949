use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use quizlens_ai::TutorService;
use quizlens_ocr::TesseractEngine;
use quizlens_types::AppEvent;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::context::TutorContext;
use crate::events::event_loop;
use crate::state::AppState;

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            app_to_ui: kanal::bounded_async(64),
            ui_to_app: kanal::bounded_async(64),
        }
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Channel ends for the embedding presentation layer: a sender for its
    /// events and a receiver for output/status updates.
    pub fn ui_handles(&self) -> (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>) {
        (
            self.channels.ui_to_app.0.clone(),
            self.channels.app_to_ui.1.clone(),
        )
    }

    pub fn spawn_tasks(
        &self,
        service: Option<Arc<dyn TutorService>>,
        engine: Option<TesseractEngine>,
    ) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        let ctx = TutorContext::new(
            self.state.clone(),
            self.channels.app_to_ui.0.clone(),
            service,
            engine,
        );

        tasks.spawn(event_loop(
            ctx,
            self.channels.ui_to_app.1.clone(),
            self.cancel_token.child_token(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}

use std::sync::Arc;

use quizlens_ai::{OpenRouterClient, TutorService};
use quizlens_app::controller::AppController;
use quizlens_app::state::AppState;
use quizlens_config::Config;
use quizlens_ocr::TesseractEngine;
use tokio::signal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::new();

    let service: Option<Arc<dyn TutorService>> = match OpenRouterClient::from_config(&config.ai) {
        Ok(client) => Some(Arc::new(client)),
        Err(e) => {
            tracing::warn!("AI service disabled: {e}");
            None
        }
    };

    let engine = match TesseractEngine::discover(
        config.ocr.engine_path.as_deref(),
        &config.ocr.language,
    ) {
        Ok(engine) => Some(engine),
        Err(e) => {
            tracing::warn!("{e}");
            None
        }
    };

    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(Arc::clone(&state));

    // The presentation layer attaches to these; holding them here keeps the
    // channels open for the lifetime of the process.
    let (_ui_tx, _ui_rx) = controller.ui_handles();

    let mut tasks = controller.spawn_tasks(service, engine);

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
            controller.shutdown();
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::warn!("event loop exited"),
                Some(Ok(Err(e))) => tracing::error!("event loop failed: {e}"),
                Some(Err(e)) => tracing::error!("event loop panicked: {e}"),
                None => {}
            }
        }
    }
}

use kanal::AsyncReceiver;
use quizlens_types::AppEvent;
use tokio_util::sync::CancellationToken;

use crate::context::TutorContext;

pub mod answer;
pub mod capture;
pub mod practice;

/// App's main loop: drains presentation-layer events until cancelled
pub async fn event_loop(
    ctx: TutorContext,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    tracing::info!("Event loop started, waiting for events");

    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Event loop stopping");
                return Ok(());
            }
            event = ui_to_app_rx.recv() => event?,
        };

        tracing::debug!("Event received: {:?}", std::mem::discriminant(&event));
        handle_event(&ctx, event).await?;
    }
}

async fn handle_event(ctx: &TutorContext, event: AppEvent) -> anyhow::Result<()> {
    match event {
        AppEvent::TriggerCapture(mode) => {
            capture::handle_capture_trigger(ctx, mode).await?;
        }
        AppEvent::SelectionMade { rect, display } => {
            capture::handle_selection(ctx, rect, display).await?;
        }
        AppEvent::SelectionCancelled => {
            capture::handle_selection_cancelled(ctx).await;
        }
        AppEvent::SwitchMode => {
            answer::handle_switch_mode(ctx).await?;
        }
        AppEvent::AskFromHistory { question, mode } => {
            answer::request_answer(ctx, question, mode).await?;
        }
        AppEvent::GeneratePractice => {
            practice::handle_generate(ctx).await?;
        }
        AppEvent::ExportPractice => {
            practice::handle_export(ctx).await?;
        }
        // app -> UI events, nothing to do in the backend
        AppEvent::SelectRegion { .. }
        | AppEvent::ShowOutput(_)
        | AppEvent::StatusUpdate { .. } => {}
    }

    Ok(())
}

pub(crate) async fn show(ctx: &TutorContext, text: String) {
    let _ = ctx.event_tx.send(AppEvent::ShowOutput(text)).await;
}

pub(crate) async fn status(ctx: &TutorContext, status: &str, busy: bool) {
    let _ = ctx
        .event_tx
        .send(AppEvent::StatusUpdate {
            status: status.to_string(),
            busy,
        })
        .await;
}

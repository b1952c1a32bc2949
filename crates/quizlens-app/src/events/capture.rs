use std::sync::atomic::Ordering;

use quizlens_types::{AppEvent, DisplaySize, Mode, SelectionRect};

use crate::context::TutorContext;
use crate::events::{show, status};
use crate::state::PendingCapture;

/// Start the capture pipeline: grab the full primary screen and hand the
/// raster to the presentation layer for interactive region selection.
pub async fn handle_capture_trigger(ctx: &TutorContext, mode: Mode) -> anyhow::Result<()> {
    if ctx.state.capture_running.swap(true, Ordering::SeqCst) {
        tracing::warn!("Capture already in progress, ignoring trigger");
        return Ok(());
    }

    status(ctx, "CAPTURING SCREEN", true).await;

    let result = tokio::task::spawn_blocking(quizlens_ocr::capture_primary_screen_raw).await;

    match result {
        Ok(Ok(image)) => {
            tracing::debug!("Captured {}x{} raster", image.width, image.height);
            let (image_width, image_height) = (image.width, image.height);
            *ctx.state.pending.lock().await = Some(PendingCapture { image, mode });

            let _ = ctx
                .event_tx
                .send(AppEvent::SelectRegion {
                    image_width,
                    image_height,
                })
                .await;
        }
        Ok(Err(e)) => {
            ctx.state.capture_running.store(false, Ordering::SeqCst);
            show(ctx, format!("Capture error: {e}")).await;
            status(ctx, "ERROR", false).await;
        }
        Err(e) => {
            ctx.state.capture_running.store(false, Ordering::SeqCst);
            show(ctx, format!("Capture error: {e}")).await;
            status(ctx, "ERROR", false).await;
        }
    }

    Ok(())
}

/// Resume the pipeline with the user's selection: scale-correct, crop,
/// recognize, then append to history and dispatch to the AI service.
pub async fn handle_selection(
    ctx: &TutorContext,
    rect: SelectionRect,
    display: DisplaySize,
) -> anyhow::Result<()> {
    let Some(PendingCapture { image, mode }) = ctx.state.pending.lock().await.take() else {
        tracing::warn!("Selection without a pending capture, ignoring");
        return Ok(());
    };
    // Interactive step is over; the rest of the pipeline runs inline.
    ctx.state.capture_running.store(false, Ordering::SeqCst);

    let region = quizlens_ocr::pixel_region(rect, display, image.width, image.height);

    // Degenerate selection is a cancellation, not an error
    if quizlens_ocr::is_too_small(&region) {
        tracing::debug!("Selection too small ({:?}), cancelling", region);
        status(ctx, "SELECTION TOO SMALL", false).await;
        return Ok(());
    }

    let Some(engine) = ctx.engine.clone() else {
        show(
            ctx,
            "Recognition engine unavailable: install tesseract or set QUIZLENS_TESSERACT."
                .to_string(),
        )
        .await;
        status(ctx, "ERROR", false).await;
        return Ok(());
    };

    status(ctx, "EXTRACTING TEXT", true).await;

    let result = tokio::task::spawn_blocking(move || {
        let png = quizlens_ocr::crop_to_png(&image, region)?;
        engine.recognize(&png)
    })
    .await;

    let raw_text = match result {
        Ok(Ok(text)) => text,
        Ok(Err(e)) => {
            tracing::error!("Capture pipeline failed: {e}");
            show(ctx, format!("Capture error: {e}")).await;
            status(ctx, "ERROR", false).await;
            return Ok(());
        }
        Err(e) => {
            tracing::error!("Capture task panicked: {e}");
            show(ctx, format!("Capture error: {e}")).await;
            status(ctx, "ERROR", false).await;
            return Ok(());
        }
    };

    process_recognized(ctx, &raw_text, mode).await
}

/// Recognition adapter, history append and AI hand-off. Split from the
/// capture half so the text path runs without a screen.
pub async fn process_recognized(
    ctx: &TutorContext,
    raw_text: &str,
    mode: Mode,
) -> anyhow::Result<()> {
    let Some(question) = quizlens_ocr::canonical_question(raw_text) else {
        tracing::debug!("No usable text in recognition output");
        show(
            ctx,
            "Scanner failed to detect characters. Try selecting a larger or clearer area."
                .to_string(),
        )
        .await;
        status(ctx, "SCAN FAILED", false).await;
        return Ok(());
    };

    // History persistence happens-before the AI dispatch, so every question
    // that ever reaches the service is on record even if the call fails.
    if let Err(e) = ctx
        .state
        .history
        .lock()
        .await
        .save_question(&question, mode)
    {
        tracing::error!("Failed to persist history: {e}");
        show(ctx, format!("Capture error: {e}")).await;
        status(ctx, "ERROR", false).await;
        return Ok(());
    }

    crate::events::answer::request_answer(ctx, question, mode).await
}

pub async fn handle_selection_cancelled(ctx: &TutorContext) {
    ctx.state.pending.lock().await.take();
    ctx.state.capture_running.store(false, Ordering::SeqCst);
    status(ctx, "READY", false).await;
}

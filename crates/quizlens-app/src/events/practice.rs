use quizlens_ai::AiError;
use quizlens_ai::prompts;

use crate::context::TutorContext;
use crate::events::{show, status};

/// Synthesize a fresh practice set from the full question history
pub async fn handle_generate(ctx: &TutorContext) -> anyhow::Result<()> {
    let questions = ctx.state.history.lock().await.get_all_questions();

    if questions.is_empty() {
        show(
            ctx,
            "Capture a few questions first to build your history.".to_string(),
        )
        .await;
        status(ctx, "EMPTY HISTORY", false).await;
        return Ok(());
    }

    let Some(service) = ctx.service.as_ref() else {
        show(ctx, AiError::MissingApiKey.to_string()).await;
        status(ctx, "ERROR", false).await;
        return Ok(());
    };

    let count = ctx.state.config.read().await.ai.practice_count;

    status(ctx, "GENERATING PRACTICE SET", true).await;

    match service
        .complete(&prompts::practice_prompt(&questions, count))
        .await
    {
        Ok(text) => {
            // Kept verbatim; export writes these exact bytes
            *ctx.state.last_practice.lock().await = Some(text.clone());
            show(ctx, text).await;
            status(ctx, "PRACTICE READY", false).await;
        }
        Err(e) => {
            tracing::error!("Practice generation failed: {e}");
            show(ctx, format!("AI failure: {e}")).await;
            status(ctx, "ERROR", false).await;
        }
    }

    Ok(())
}

/// Write the most recent practice set byte-for-byte to the export file
pub async fn handle_export(ctx: &TutorContext) -> anyhow::Result<()> {
    let Some(text) = ctx.state.last_practice.lock().await.clone() else {
        status(ctx, "NOTHING TO EXPORT", false).await;
        return Ok(());
    };

    let path = ctx.state.config.read().await.storage.export_path();

    match tokio::fs::write(&path, &text).await {
        Ok(()) => {
            tracing::info!("Exported practice set to {}", path.display());
            status(ctx, &format!("EXPORTED TO {}", path.display()), false).await;
        }
        Err(e) => {
            tracing::error!("Export failed: {e}");
            show(ctx, format!("Export failed: {e}")).await;
            status(ctx, "ERROR", false).await;
        }
    }

    Ok(())
}

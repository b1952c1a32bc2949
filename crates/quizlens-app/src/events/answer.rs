use quizlens_ai::AiError;
use quizlens_ai::prompts;
use quizlens_types::Mode;

use crate::context::TutorContext;
use crate::events::{show, status};
use crate::session::format_response;

/// Ask the AI service for an answer to `question` in `mode`.
///
/// The session transitions to the new question/mode before the call, so a
/// failed request still leaves the question active for a later retry or
/// mode switch.
pub async fn request_answer(
    ctx: &TutorContext,
    question: String,
    mode: Mode,
) -> anyhow::Result<()> {
    ctx.state.session.lock().await.begin(&question, mode);

    let Some(service) = ctx.service.as_ref() else {
        show(ctx, AiError::MissingApiKey.to_string()).await;
        status(ctx, "ERROR", false).await;
        return Ok(());
    };

    status(ctx, &format!("PROCESSING {}", mode.label()), true).await;

    let prompt = match mode {
        Mode::Solve => prompts::solve_prompt(&question),
        Mode::Hint => prompts::hint_prompt(&question),
    };

    match service.complete(&prompt).await {
        Ok(answer) => {
            ctx.state.cache.lock().await.store(&question, &answer);
            show(ctx, format_response(&question, mode, &answer)).await;
            status(ctx, "READY", false).await;
        }
        Err(e) => {
            tracing::error!("AI request failed: {e}");
            show(ctx, format!("AI failure: {e}")).await;
            status(ctx, "ERROR", false).await;
        }
    }

    Ok(())
}

/// Flip solve/hint and re-ask for the same question. No-op when idle.
pub async fn handle_switch_mode(ctx: &TutorContext) -> anyhow::Result<()> {
    let switched = ctx.state.session.lock().await.switch();

    match switched {
        Some((question, mode)) => request_answer(ctx, question, mode).await,
        None => {
            tracing::debug!("Mode switch with no active question, ignoring");
            Ok(())
        }
    }
}

use quizlens_types::Mode;

/// Mode state machine: `Idle` until a question is active, then
/// `HasQuestion` with the mode of the most recent request. Transient,
/// reset on restart.
#[derive(Default)]
pub struct Session {
    last_question: Option<String>,
    current_mode: Option<Mode>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the active question and mode. Valid from any state; the
    /// transition happens even when the subsequent AI call fails.
    pub fn begin(&mut self, question: &str, mode: Mode) {
        self.last_question = Some(question.to_string());
        self.current_mode = Some(mode);
    }

    /// Flip solve/hint for the active question. Returns the question and
    /// the new mode, or `None` when no question is active.
    pub fn switch(&mut self) -> Option<(String, Mode)> {
        let question = self.last_question.clone()?;
        let mode = self.current_mode?.toggle();
        self.current_mode = Some(mode);
        Some((question, mode))
    }

    pub fn last_question(&self) -> Option<&str> {
        self.last_question.as_deref()
    }

    pub fn current_mode(&self) -> Option<Mode> {
        self.current_mode
    }
}

/// Fixed three-part output block: question, separator, mode-labeled answer.
/// Downstream consumers never re-derive structure from free text.
pub fn format_response(question: &str, mode: Mode, answer: &str) -> String {
    format!(
        "QUESTION:\n{question}\n\n---\n\n{}:\n{answer}",
        mode.label()
    )
}

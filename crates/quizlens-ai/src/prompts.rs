//! Prompt templates for the tutoring modes. Solve asks for a complete
//! stepwise solution ending in an explicit final-answer marker; hint gives
//! at most two guiding steps and forbids a final answer.

pub fn solve_prompt(question: &str) -> String {
    format!(
        "You are a school tutor for students (grades 6-12).\n\
         \n\
         TASK:\n\
         Solve ONLY the core question.\n\
         \n\
         RULES:\n\
         - Ignore surrounding text\n\
         - Step-by-step\n\
         - Plain text only\n\
         - End with: FINAL ANSWER: <answer>\n\
         \n\
         QUESTION:\n\
         {question}"
    )
}

pub fn hint_prompt(question: &str) -> String {
    format!(
        "You are a helpful tutor.\n\
         \n\
         TASK:\n\
         Give ONLY a hint.\n\
         \n\
         RULES:\n\
         - No full solution\n\
         - No final answer\n\
         - 1-2 short guiding steps\n\
         \n\
         QUESTION:\n\
         {question}"
    )
}

pub fn practice_prompt(history: &[String], count: usize) -> String {
    let history_text = history
        .iter()
        .map(|q| format!("- {q}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are an expert educational content creator.\n\
         \n\
         USER HISTORY:\n\
         {history_text}\n\
         \n\
         TASK:\n\
         Generate exactly {count} practice questions similar in difficulty \
         and topic to the history above.\n\
         \n\
         RULES:\n\
         1. Do not provide answers.\n\
         2. Format as a clean numbered list.\n\
         3. Ensure variety.\n\
         4. Topic should be strictly related to the history."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solve_asks_for_final_answer() {
        let prompt = solve_prompt("What is 2+2?");
        assert!(prompt.contains("FINAL ANSWER:"));
        assert!(prompt.contains("What is 2+2?"));
    }

    #[test]
    fn hint_forbids_final_answer() {
        let prompt = hint_prompt("What is 2+2?");
        assert!(prompt.contains("No final answer"));
        assert!(!prompt.contains("FINAL ANSWER:"));
    }

    #[test]
    fn practice_embeds_history_and_count() {
        let history = vec!["Solve x+1=3".to_string(), "Factor x^2-1".to_string()];
        let prompt = practice_prompt(&history, 10);
        assert!(prompt.contains("- Solve x+1=3"));
        assert!(prompt.contains("- Factor x^2-1"));
        assert!(prompt.contains("exactly 10 practice questions"));
    }
}

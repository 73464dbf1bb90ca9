//! Grammar check flow.

use scroller_models::GrammarCheckOutput;

use crate::error::{AiError, Result};
use crate::flows::complete_json;
use crate::llm::LlmClient;

const SYSTEM: &str = "You are an expert editor. \
Respond with a single JSON object and nothing else.";

/// Check a text for grammatical errors, spelling mistakes and awkward
/// phrasing. Returns the fully corrected text plus the list of specific
/// corrections; no ordering guarantee is imposed on the corrections.
pub async fn check_grammar(client: &dyn LlmClient, content: &str) -> Result<GrammarCheckOutput> {
    if content.trim().is_empty() {
        return Err(AiError::InvalidInput(
            "content is required for grammar checking".to_string(),
        ));
    }

    let prompt = format!(
        "Please review the following text for any grammatical errors, \
         spelling mistakes, or awkward phrasing.\n\n\
         Provide a fully corrected version of the text. Also, provide a list \
         of the specific corrections you made and a brief explanation for \
         each one to help the user learn.\n\n\
         Respond as JSON: {{\"correctedContent\": \"...\", \"corrections\": \
         [{{\"original\": \"...\", \"corrected\": \"...\", \"explanation\": \"...\"}}]}}\n\n\
         Original Text: {content}"
    );

    complete_json(client, SYSTEM, prompt).await
}

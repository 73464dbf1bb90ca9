//! AI assist flows.
//!
//! Each flow validates its input, renders a prompt template, makes exactly
//! one completion call and parses the JSON output into a typed result. A
//! provider failure propagates to the caller as-is; nothing here retries.

mod grammar;
mod simplify;
mod titles;

pub use grammar::check_grammar;
pub use simplify::simplify_paragraph;
pub use titles::suggest_titles;

use serde::de::DeserializeOwned;

use crate::error::{AiError, Result};
use crate::llm::{CompletionRequest, CompletionResponse, LlmClient, Message};

/// Run a single prompt expecting a JSON object back, tolerating code fences
/// and prose around the object.
pub(crate) async fn complete_json<T: DeserializeOwned>(
    client: &dyn LlmClient,
    system: &str,
    prompt: String,
) -> Result<T> {
    let request = CompletionRequest::new(vec![Message::system(system), Message::user(prompt)])
        .with_temperature(0.2)
        .with_json_output();

    let response: CompletionResponse = client.complete(request).await?;
    let content = response
        .content
        .ok_or_else(|| AiError::Llm("Empty response from model".to_string()))?;

    let json = extract_json(&content)
        .ok_or_else(|| AiError::InvalidFormat("No JSON object in model output".to_string()))?;
    serde_json::from_str(json)
        .map_err(|e| AiError::InvalidFormat(format!("Malformed model output: {}", e)))
}

/// Locate the outermost JSON object in model output, stripping markdown
/// code fences if present.
pub(crate) fn extract_json(content: &str) -> Option<&str> {
    let trimmed = content.trim();
    let inner = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .unwrap_or(trimmed);

    let start = inner.find('{')?;
    let end = inner.rfind('}')?;
    (start < end).then(|| &inner[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_json_passes_bare_objects_through() {
        assert_eq!(extract_json(r#"{"a": 1}"#), Some(r#"{"a": 1}"#));
    }

    #[test]
    fn extract_json_strips_code_fences() {
        let fenced = "```json\n{\"a\": 1}\n```";
        assert_eq!(extract_json(fenced), Some("{\"a\": 1}"));
    }

    #[test]
    fn extract_json_skips_surrounding_prose() {
        let chatty = "Here you go: {\"a\": 1} hope that helps";
        assert_eq!(extract_json(chatty), Some("{\"a\": 1}"));
    }

    #[test]
    fn extract_json_rejects_objectless_output() {
        assert!(extract_json("no object here").is_none());
    }
}

//! Paragraph simplification flow.

use serde::Deserialize;

use crate::error::{AiError, Result};
use crate::flows::complete_json;
use crate::llm::LlmClient;

const SYSTEM: &str = "You are an expert at simplifying complex topics. \
Respond with a single JSON object and nothing else.";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SimplifyOutput {
    simplified_paragraph: String,
}

/// Simplify a complex paragraph into language that is easy for students to
/// understand.
pub async fn simplify_paragraph(client: &dyn LlmClient, paragraph: &str) -> Result<String> {
    if paragraph.trim().is_empty() {
        return Err(AiError::InvalidInput(
            "paragraph is required for simplification".to_string(),
        ));
    }

    let prompt = format!(
        "Please simplify the following paragraph, using language and \
         terminology that is easy for students to understand.\n\n\
         Respond as JSON: {{\"simplifiedParagraph\": \"...\"}}\n\n\
         Original Paragraph: {paragraph}"
    );

    let output: SimplifyOutput = complete_json(client, SYSTEM, prompt).await?;
    Ok(output.simplified_paragraph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::MockLlmClient;

    #[tokio::test]
    async fn returns_simplified_text() {
        let client =
            MockLlmClient::always(r#"{"simplifiedParagraph": "Water goes up, then falls."}"#);
        let simplified = simplify_paragraph(&client, "The hydrological cycle...")
            .await
            .unwrap();
        assert_eq!(simplified, "Water goes up, then falls.");
    }

    #[tokio::test]
    async fn empty_paragraph_is_rejected() {
        let client = MockLlmClient::always("{}");
        let err = simplify_paragraph(&client, "").await.unwrap_err();
        assert!(matches!(err, AiError::InvalidInput(_)));
    }
}

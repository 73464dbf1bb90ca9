//! Title suggestion flow.

use serde::Deserialize;

use crate::error::{AiError, Result};
use crate::flows::complete_json;
use crate::llm::LlmClient;

const SYSTEM: &str = "You are a helpful writing assistant for a blog platform. \
Respond with a single JSON object and nothing else.";

const EXPECTED_TITLES: usize = 3;

#[derive(Deserialize)]
struct TitlesOutput {
    titles: Vec<String>,
}

/// Suggest exactly three distinct titles for the given post content.
pub async fn suggest_titles(client: &dyn LlmClient, content: &str) -> Result<Vec<String>> {
    if content.trim().is_empty() {
        return Err(AiError::InvalidInput(
            "content is required for title generation".to_string(),
        ));
    }

    let prompt = format!(
        "Based on the following blog post content, suggest 3 short, catchy, \
         and descriptive titles.\n\n\
         Respond as JSON: {{\"titles\": [\"...\", \"...\", \"...\"]}}\n\n\
         Content: {content}"
    );

    let output: TitlesOutput = complete_json(client, SYSTEM, prompt).await?;

    if output.titles.len() != EXPECTED_TITLES {
        return Err(AiError::InvalidFormat(format!(
            "Expected {} titles, got {}",
            EXPECTED_TITLES,
            output.titles.len()
        )));
    }
    for (i, title) in output.titles.iter().enumerate() {
        if output.titles[..i].contains(title) {
            return Err(AiError::InvalidFormat(format!(
                "Duplicate title suggestion: {title:?}"
            )));
        }
    }

    Ok(output.titles)
}

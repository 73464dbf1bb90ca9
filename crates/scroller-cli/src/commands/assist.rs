//! AI assist commands.

use anyhow::Result;
use colored::Colorize;
use scroller_ai::{
    GeminiClient, check_grammar, highlight_corrections, simplify_paragraph, suggest_titles,
};

use crate::cli::AssistCommands;
use crate::output;

/// Minimum content length before a grammar check is dispatched.
const MIN_GRAMMAR_LEN: usize = 20;

pub async fn run(command: AssistCommands) -> Result<()> {
    let Ok(api_key) = std::env::var("GEMINI_API_KEY") else {
        output::notify_error(
            "Missing API key",
            "Set GEMINI_API_KEY or add it to the scroller config file.",
        );
        return Ok(());
    };
    let client = GeminiClient::new(api_key);

    match command {
        AssistCommands::Titles { content } => {
            let titles = suggest_titles(&client, &content).await?;
            for (i, title) in titles.iter().enumerate() {
                println!("{}. {}", i + 1, title);
            }
        }
        AssistCommands::Grammar { content } => {
            if content.chars().count() < MIN_GRAMMAR_LEN {
                output::notify_error(
                    "Content too short",
                    "Please write at least 20 characters before checking grammar.",
                );
                return Ok(());
            }

            let result = check_grammar(&client, &content).await?;
            if result.corrections.is_empty() {
                println!("{} Looks good! No suggestions found.", "Grammar Checked".bold());
                return Ok(());
            }
            println!(
                "{} {} suggestions found.",
                "Grammar Checked".bold(),
                result.corrections.len()
            );

            let segments = highlight_corrections(&content, &result.corrections);
            println!("\n{}\n", output::render_segments(&segments));

            for correction in &result.corrections {
                println!(
                    "  {} -> {}  ({})",
                    correction.original.yellow(),
                    correction.corrected.green(),
                    correction.explanation
                );
            }
            println!("\nCorrected text:\n{}", result.corrected_content);
        }
        AssistCommands::Simplify { paragraph } => {
            let simplified = simplify_paragraph(&client, &paragraph).await?;
            println!("{}", simplified);
        }
    }
    Ok(())
}

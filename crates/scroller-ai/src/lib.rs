//! AI assist for Code Scroller.
//!
//! Three request/response flows wrap a generative-language provider: title
//! suggestion, grammar checking and paragraph simplification. The
//! [`highlight`] module reconciles grammar corrections back onto the
//! original text for inline rendering.

mod error;

pub mod flows;
pub mod highlight;
pub mod llm;

pub use error::{AiError, Result};
pub use flows::{check_grammar, simplify_paragraph, suggest_titles};
pub use highlight::{Segment, highlight_corrections};
pub use llm::{GeminiClient, LlmClient, MockLlmClient};

use serde::{Deserialize, Serialize};

/// A single correction proposed by the grammar checker. Ephemeral: produced
/// per invocation and discarded when the text changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GrammarCorrection {
    /// The original incorrect phrase, verbatim.
    pub original: String,
    /// The corrected phrase.
    pub corrected: String,
    /// A brief explanation of the correction.
    pub explanation: String,
}

/// Full result of a grammar check: the corrected text plus the list of
/// corrections that were applied. No ordering is imposed on the corrections
/// as returned by the model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GrammarCheckOutput {
    pub corrected_content: String,
    pub corrections: Vec<GrammarCorrection>,
}

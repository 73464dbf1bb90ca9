//! Grammar highlight reconciliation.
//!
//! Turns (original text, corrections) into an ordered sequence of segments
//! for rendering: plain slices interleaved with annotated spans that carry
//! the suggested fix and its explanation. Concatenating the segment texts
//! always reproduces the input exactly.

use scroller_models::GrammarCorrection;

/// One renderable piece of the checked text.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Unannotated text, possibly empty.
    Plain(String),
    /// A phrase the checker flagged, with its suggested replacement.
    Annotated {
        text: String,
        corrected: String,
        explanation: String,
    },
}

impl Segment {
    /// The underlying text of the segment, annotation ignored.
    pub fn text(&self) -> &str {
        match self {
            Self::Plain(text) => text,
            Self::Annotated { text, .. } => text,
        }
    }
}

/// Reconcile corrections against the text they were produced for.
///
/// Corrections are applied in order of their phrase's first occurrence
/// (stable for ties), scanning left to right with a cursor. A correction
/// whose phrase cannot be found at or after the cursor - a duplicate, an
/// overlap, or a phrase the model invented - is silently skipped and
/// contributes no segment.
pub fn highlight_corrections(text: &str, corrections: &[GrammarCorrection]) -> Vec<Segment> {
    if corrections.is_empty() {
        return vec![Segment::Plain(text.to_string())];
    }

    // First-occurrence order. Absent phrases yield None, which sorts ahead
    // of every real match and then falls out in the cursor scan below.
    let mut sorted: Vec<&GrammarCorrection> = corrections.iter().collect();
    sorted.sort_by_key(|c| text.find(&c.original));

    let mut segments = Vec::new();
    let mut cursor = 0;

    for correction in sorted {
        if correction.original.is_empty() {
            continue;
        }
        let Some(relative) = text[cursor..].find(&correction.original) else {
            continue;
        };
        let start = cursor + relative;

        segments.push(Segment::Plain(text[cursor..start].to_string()));
        segments.push(Segment::Annotated {
            text: correction.original.clone(),
            corrected: correction.corrected.clone(),
            explanation: correction.explanation.clone(),
        });
        cursor = start + correction.original.len();
    }

    segments.push(Segment::Plain(text[cursor..].to_string()));
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn correction(original: &str, corrected: &str) -> GrammarCorrection {
        GrammarCorrection {
            original: original.to_string(),
            corrected: corrected.to_string(),
            explanation: "test".to_string(),
        }
    }

    fn concat(segments: &[Segment]) -> String {
        segments.iter().map(Segment::text).collect()
    }

    #[test]
    fn no_corrections_yields_single_plain_segment() {
        let segments = highlight_corrections("hello world", &[]);
        assert_eq!(segments, vec![Segment::Plain("hello world".to_string())]);
    }

    #[test]
    fn leading_match_emits_empty_plain_prefix() {
        let segments =
            highlight_corrections("Teh cat sat.", &[correction("Teh", "The")]);
        assert_eq!(
            segments,
            vec![
                Segment::Plain(String::new()),
                Segment::Annotated {
                    text: "Teh".to_string(),
                    corrected: "The".to_string(),
                    explanation: "test".to_string(),
                },
                Segment::Plain(" cat sat.".to_string()),
            ]
        );
    }

    #[test]
    fn concatenation_reproduces_the_text() {
        let text = "Teh cat sat on teh mat, quitely.";
        let corrections = vec![
            correction("quitely", "quietly"),
            correction("Teh", "The"),
            correction("teh", "the"),
        ];
        let segments = highlight_corrections(text, &corrections);
        assert_eq!(concat(&segments), text);
    }

    #[test]
    fn corrections_apply_in_text_order_not_input_order() {
        let text = "aaa bbb ccc";
        let corrections = vec![correction("ccc", "C"), correction("aaa", "A")];
        let segments = highlight_corrections(text, &corrections);

        let annotated: Vec<&str> = segments
            .iter()
            .filter_map(|s| match s {
                Segment::Annotated { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(annotated, vec!["aaa", "ccc"]);
        assert_eq!(concat(&segments), text);
    }

    #[test]
    fn missing_phrase_is_skipped_without_error() {
        let text = "nothing to fix here";
        let segments = highlight_corrections(text, &[correction("absent", "x")]);
        assert_eq!(concat(&segments), text);
        assert!(segments
            .iter()
            .all(|s| matches!(s, Segment::Plain(_))));
    }

    #[test]
    fn missing_phrase_does_not_block_later_corrections() {
        let text = "Teh cat sat.";
        let corrections = vec![correction("absent", "x"), correction("Teh", "The")];
        let segments = highlight_corrections(text, &corrections);
        assert_eq!(concat(&segments), text);
        assert_eq!(
            segments
                .iter()
                .filter(|s| matches!(s, Segment::Annotated { .. }))
                .count(),
            1
        );
    }

    #[test]
    fn duplicate_corrections_annotate_successive_occurrences() {
        let text = "teh one and teh two";
        let corrections = vec![correction("teh", "the"), correction("teh", "the")];
        let segments = highlight_corrections(text, &corrections);
        assert_eq!(concat(&segments), text);
        assert_eq!(
            segments
                .iter()
                .filter(|s| matches!(s, Segment::Annotated { .. }))
                .count(),
            2
        );
    }

    #[test]
    fn occurrence_before_cursor_is_dropped() {
        // Both corrections resolve to the same first occurrence; after the
        // first consumes it there is nothing left for "b c" to match.
        let text = "a b c";
        let corrections = vec![correction("a b", "x"), correction("b c", "y")];
        let segments = highlight_corrections(text, &corrections);
        assert_eq!(concat(&segments), text);
        assert_eq!(
            segments
                .iter()
                .filter(|s| matches!(s, Segment::Annotated { .. }))
                .count(),
            1
        );
    }

    #[test]
    fn trailing_match_emits_empty_plain_suffix() {
        let text = "ends with teh";
        let segments = highlight_corrections(text, &[correction("teh", "the")]);
        assert_eq!(segments.last(), Some(&Segment::Plain(String::new())));
        assert_eq!(concat(&segments), text);
    }

    #[test]
    fn multibyte_text_slices_on_char_boundaries() {
        let text = "naïve approach, très naïve";
        let corrections = vec![correction("naïve", "cautious")];
        let segments = highlight_corrections(text, &corrections);
        assert_eq!(concat(&segments), text);
    }
}

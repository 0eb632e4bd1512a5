//! Output formatting module

use affixer_core::{Decomposition, SegmentKind};
use anyhow::Result;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single decomposition
    fn format_decomposition(&mut self, result: &Decomposition) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Placeholder shown for an empty field
pub const EMPTY_FIELD: &str = "—";

/// Field value, or the placeholder when empty
pub fn or_placeholder(value: &str) -> &str {
    if value.is_empty() {
        EMPTY_FIELD
    } else {
        value
    }
}

/// Render the segments of a decomposition on one line
///
/// Affixes carry their meaning in parentheses: `un(not) + happi + ness(state)`.
pub fn render_segments(result: &Decomposition) -> String {
    result
        .segments()
        .iter()
        .map(|segment| match (segment.kind, segment.meaning) {
            (SegmentKind::Prefix | SegmentKind::Suffix, Some(meaning)) if !meaning.is_empty() => {
                format!("{}({})", segment.text, meaning)
            }
            _ => segment.text.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" + ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use affixer_core::{split, AffixEntry, Lexicon};

    fn lexicon(pairs: &[(&str, &str)]) -> Lexicon {
        pairs
            .iter()
            .map(|(a, m)| AffixEntry::new(*a, *m).unwrap())
            .collect()
    }

    #[test]
    fn test_render_segments_full() {
        let result = split(
            "unhappiness",
            &lexicon(&[("un", "not")]),
            &lexicon(&[("ness", "state")]),
        );
        assert_eq!(render_segments(&result), "un(not) + happi + ness(state)");
    }

    #[test]
    fn test_render_segments_meaningless_affix() {
        let result = split("replay", &lexicon(&[("re", "")]), &Lexicon::empty());
        assert_eq!(render_segments(&result), "re + play");
    }

    #[test]
    fn test_render_segments_unmatched() {
        let result = split("Cat", &Lexicon::empty(), &Lexicon::empty());
        assert_eq!(render_segments(&result), "cat");
    }

    #[test]
    fn test_or_placeholder() {
        assert_eq!(or_placeholder(""), "—");
        assert_eq!(or_placeholder("un"), "un");
    }
}

//! Longest-match affix splitting
//!
//! The word is lowercased, then the prefix lexicon is scanned in stored order
//! and the first affix that starts the word wins. The suffix lexicon is
//! scanned the same way against what remains. Because lexicons are sorted
//! longest-first, the first hit is the longest one and equal-length hits fall
//! back to lexicon insertion order.

use crate::lexicon::{AffixEntry, Lexicon};
use serde::{Deserialize, Serialize};

/// Result of splitting one word
///
/// Empty strings mark an affix that did not match. `unmatched` always
/// carries the same text as `root`; consumers that read either field get the
/// same answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decomposition {
    /// The input exactly as supplied
    pub original: String,
    /// Matched prefix, lowercased
    pub prefix: String,
    /// Gloss of the matched prefix
    pub prefix_meaning: String,
    /// What is left after both affixes are stripped
    pub root: String,
    /// Matched suffix, lowercased
    pub suffix: String,
    /// Gloss of the matched suffix
    pub suffix_meaning: String,
    /// Same text as `root`
    pub unmatched: String,
}

/// Role of a piece of a decomposed word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Matched prefix
    Prefix,
    /// Remainder between the affixes
    Root,
    /// Matched suffix
    Suffix,
    /// Whole word when no affix matched
    Unmatched,
}

/// One displayable piece of a decomposition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Role of the piece
    pub kind: SegmentKind,
    /// Text of the piece
    pub text: &'a str,
    /// Gloss, present for affixes only
    pub meaning: Option<&'a str>,
}

impl Decomposition {
    /// True when a prefix was stripped
    pub fn has_prefix(&self) -> bool {
        !self.prefix.is_empty()
    }

    /// True when a suffix was stripped
    pub fn has_suffix(&self) -> bool {
        !self.suffix.is_empty()
    }

    /// Pieces in reading order, skipping empty ones
    ///
    /// A word with no matched affix is returned as a single
    /// [`SegmentKind::Unmatched`] piece instead of a root.
    pub fn segments(&self) -> Vec<Segment<'_>> {
        if !self.has_prefix() && !self.has_suffix() {
            if self.unmatched.is_empty() {
                return Vec::new();
            }
            return vec![Segment {
                kind: SegmentKind::Unmatched,
                text: &self.unmatched,
                meaning: None,
            }];
        }

        let mut segments = Vec::with_capacity(3);
        if self.has_prefix() {
            segments.push(Segment {
                kind: SegmentKind::Prefix,
                text: &self.prefix,
                meaning: Some(&self.prefix_meaning),
            });
        }
        if !self.root.is_empty() {
            segments.push(Segment {
                kind: SegmentKind::Root,
                text: &self.root,
                meaning: None,
            });
        }
        if self.has_suffix() {
            segments.push(Segment {
                kind: SegmentKind::Suffix,
                text: &self.suffix,
                meaning: Some(&self.suffix_meaning),
            });
        }
        segments
    }
}

fn strip_prefix<'w, 'l>(word: &'w str, lexicon: &'l Lexicon) -> (Option<&'l AffixEntry>, &'w str) {
    lexicon
        .iter()
        .find_map(|entry| word.strip_prefix(entry.affix()).map(|rest| (Some(entry), rest)))
        .unwrap_or((None, word))
}

fn strip_suffix<'w, 'l>(word: &'w str, lexicon: &'l Lexicon) -> (Option<&'l AffixEntry>, &'w str) {
    lexicon
        .iter()
        .find_map(|entry| word.strip_suffix(entry.affix()).map(|rest| (Some(entry), rest)))
        .unwrap_or((None, word))
}

fn affix_parts(entry: Option<&AffixEntry>) -> (String, String) {
    entry
        .map(|e| (e.affix().to_string(), e.meaning().to_string()))
        .unwrap_or_default()
}

/// Split `word` into prefix, root and suffix
///
/// Never fails: with empty lexicons the root is simply the lowercased word,
/// and a prefix and suffix that together cover the whole word leave an empty
/// root.
pub fn split(word: &str, prefixes: &Lexicon, suffixes: &Lexicon) -> Decomposition {
    let normalized = word.to_lowercase();

    let (prefix_entry, core_after_prefix) = strip_prefix(&normalized, prefixes);
    let (suffix_entry, root) = strip_suffix(core_after_prefix, suffixes);

    let (prefix, prefix_meaning) = affix_parts(prefix_entry);
    let (suffix, suffix_meaning) = affix_parts(suffix_entry);

    Decomposition {
        original: word.to_string(),
        prefix,
        prefix_meaning,
        root: root.to_string(),
        suffix,
        suffix_meaning,
        unmatched: root.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon(pairs: &[(&str, &str)]) -> Lexicon {
        pairs
            .iter()
            .map(|(affix, meaning)| AffixEntry::new(*affix, *meaning).unwrap())
            .collect()
    }

    #[test]
    fn test_prefix_root_suffix() {
        let prefixes = lexicon(&[("un", "not")]);
        let suffixes = lexicon(&[("ness", "state, quality")]);
        let result = split("unhappiness", &prefixes, &suffixes);

        assert_eq!(result.original, "unhappiness");
        assert_eq!(result.prefix, "un");
        assert_eq!(result.prefix_meaning, "not");
        assert_eq!(result.root, "happi");
        assert_eq!(result.suffix, "ness");
        assert_eq!(result.suffix_meaning, "state, quality");
        assert_eq!(result.unmatched, "happi");
    }

    #[test]
    fn test_empty_lexicons() {
        let result = split("Walking", &Lexicon::empty(), &Lexicon::empty());
        assert_eq!(result.original, "Walking");
        assert_eq!(result.prefix, "");
        assert_eq!(result.prefix_meaning, "");
        assert_eq!(result.suffix, "");
        assert_eq!(result.suffix_meaning, "");
        assert_eq!(result.root, "walking");
        assert_eq!(result.unmatched, "walking");
    }

    #[test]
    fn test_longest_prefix_wins() {
        let prefixes = lexicon(&[("un", "not"), ("under", "below")]);
        let result = split("undercut", &prefixes, &Lexicon::empty());
        assert_eq!(result.prefix, "under");
        assert_eq!(result.prefix_meaning, "below");
        assert_eq!(result.root, "cut");
    }

    #[test]
    fn test_equal_length_tie_goes_to_first_inserted() {
        let prefixes = lexicon(&[("re", "again"), ("re", "back")]);
        let result = split("return", &prefixes, &Lexicon::empty());
        assert_eq!(result.prefix_meaning, "again");

        let prefixes = lexicon(&[("re", "back"), ("re", "again")]);
        let result = split("return", &prefixes, &Lexicon::empty());
        assert_eq!(result.prefix_meaning, "back");
    }

    #[test]
    fn test_equal_length_suffix_tie_goes_to_first_inserted() {
        let suffixes = lexicon(&[("xy", "unused"), ("ed", "first"), ("ed", "second")]);
        let result = split("JUMPED", &Lexicon::empty(), &suffixes);
        assert_eq!(result.suffix, "ed");
        assert_eq!(result.suffix_meaning, "first");
        assert_eq!(result.root, "jump");

        let suffixes = lexicon(&[("xy", "unused"), ("ed", "second"), ("ed", "first")]);
        let result = split("JUMPED", &Lexicon::empty(), &suffixes);
        assert_eq!(result.suffix_meaning, "second");
    }

    #[test]
    fn test_suffix_matched_after_prefix_removed() {
        let prefixes = lexicon(&[("re", "again")]);
        let suffixes = lexicon(&[("ed", "past")]);
        let result = split("red", &prefixes, &suffixes);
        assert_eq!(result.prefix, "re");
        assert_eq!(result.root, "d");
        assert_eq!(result.suffix, "");
        assert_eq!(result.suffix_meaning, "");
    }

    #[test]
    fn test_full_consumption_leaves_empty_root() {
        let prefixes = lexicon(&[("un", "not")]);
        let suffixes = lexicon(&[("able", "can be done")]);
        let result = split("unable", &prefixes, &suffixes);
        assert_eq!(result.prefix, "un");
        assert_eq!(result.suffix, "able");
        assert_eq!(result.root, "");
        assert_eq!(result.unmatched, "");
    }

    #[test]
    fn test_prefix_can_consume_whole_word() {
        let prefixes = lexicon(&[("un", "not")]);
        let suffixes = lexicon(&[("n", "x")]);
        let result = split("un", &prefixes, &suffixes);
        assert_eq!(result.prefix, "un");
        assert_eq!(result.suffix, "");
        assert_eq!(result.root, "");
    }

    #[test]
    fn test_empty_word() {
        let prefixes = lexicon(&[("un", "not")]);
        let suffixes = lexicon(&[("ed", "past")]);
        let result = split("", &prefixes, &suffixes);
        assert_eq!(result, Decomposition::default());
    }

    #[test]
    fn test_single_character_word() {
        let prefixes = lexicon(&[("a", "not")]);
        let suffixes = lexicon(&[("a", "x")]);
        let result = split("A", &prefixes, &suffixes);
        assert_eq!(result.original, "A");
        assert_eq!(result.prefix, "a");
        assert_eq!(result.suffix, "");
        assert_eq!(result.root, "");
    }

    #[test]
    fn test_uppercase_input_is_normalized() {
        let prefixes = lexicon(&[("pre", "before")]);
        let suffixes = lexicon(&[("ing", "present participle")]);
        let lower = split("preheating", &prefixes, &suffixes);
        let upper = split("PREHEATING", &prefixes, &suffixes);
        assert_eq!(upper.original, "PREHEATING");
        assert_eq!(
            Decomposition {
                original: lower.original.clone(),
                ..upper
            },
            lower
        );
    }

    #[test]
    fn test_uppercase_lexicon_entries_do_not_match() {
        let prefixes = lexicon(&[("UN", "not")]);
        let result = split("undo", &prefixes, &Lexicon::empty());
        assert_eq!(result.prefix, "");
        assert_eq!(result.root, "undo");
    }

    #[test]
    fn test_non_ascii_word() {
        let prefixes = lexicon(&[("über", "over")]);
        let suffixes = lexicon(&[("ung", "-ing")]);
        let result = split("Überlegung", &prefixes, &suffixes);
        assert_eq!(result.prefix, "über");
        assert_eq!(result.root, "leg");
        assert_eq!(result.suffix, "ung");
    }

    #[test]
    fn test_lexicons_unchanged_by_split() {
        let prefixes = lexicon(&[("un", "not"), ("under", "below")]);
        let before = prefixes.clone();
        let _ = split("undercut", &prefixes, &Lexicon::empty());
        assert_eq!(prefixes, before);
    }

    #[test]
    fn test_serialized_field_names() {
        let prefixes = lexicon(&[("un", "not")]);
        let result = split("undo", &prefixes, &Lexicon::empty());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["prefixMeaning"], "not");
        assert_eq!(json["suffixMeaning"], "");
        assert_eq!(json["unmatched"], "do");
        assert!(json.get("prefix_meaning").is_none());
    }

    #[test]
    fn test_segments_with_affixes() {
        let prefixes = lexicon(&[("un", "not")]);
        let suffixes = lexicon(&[("ness", "state")]);
        let result = split("unhappiness", &prefixes, &suffixes);
        let segments = result.segments();

        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].kind, SegmentKind::Prefix);
        assert_eq!(segments[0].meaning, Some("not"));
        assert_eq!(segments[1].kind, SegmentKind::Root);
        assert_eq!(segments[1].text, "happi");
        assert_eq!(segments[2].kind, SegmentKind::Suffix);
    }

    #[test]
    fn test_segments_without_affixes() {
        let result = split("cat", &Lexicon::empty(), &Lexicon::empty());
        let segments = result.segments();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].kind, SegmentKind::Unmatched);
        assert_eq!(segments[0].text, "cat");
    }

    #[test]
    fn test_segments_skip_empty_root() {
        let prefixes = lexicon(&[("un", "not")]);
        let suffixes = lexicon(&[("able", "can be done")]);
        let result = split("unable", &prefixes, &suffixes);
        let kinds: Vec<SegmentKind> = result.segments().iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![SegmentKind::Prefix, SegmentKind::Suffix]);
    }

    #[test]
    fn test_segments_of_empty_word() {
        let result = split("", &Lexicon::empty(), &Lexicon::empty());
        assert!(result.segments().is_empty());
    }
}

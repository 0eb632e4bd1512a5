//! Affix lexicons
//!
//! A [`Lexicon`] is an immutable sequence of [`AffixEntry`] values kept in
//! descending affix length. Entries of equal length stay in the order they
//! were supplied, which makes the splitter's find-first scan return the
//! longest match with a deterministic tie-break.

mod entry;
pub mod loader;

pub use entry::AffixEntry;
pub(crate) use entry::RawAffixEntry;
pub use loader::{builtin_lexicons, load_entries, load_lexicon, parse_lexicon, LexiconFormat};

use crate::error::Result;
use crate::splitter::{split, Decomposition};
use std::path::Path;

/// Which end of a word a lexicon applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AffixKind {
    /// Matched at the start of a word
    Prefix,
    /// Matched at the end of a word
    Suffix,
}

impl AffixKind {
    /// Top-level key holding the entries in a lexicon document
    pub fn key(&self) -> &'static str {
        match self {
            AffixKind::Prefix => "prefixes",
            AffixKind::Suffix => "suffixes",
        }
    }

    /// Singular display name
    pub fn as_str(&self) -> &'static str {
        match self {
            AffixKind::Prefix => "prefix",
            AffixKind::Suffix => "suffix",
        }
    }
}

/// Affix entries sorted longest-first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    entries: Vec<AffixEntry>,
}

impl Lexicon {
    /// Build a lexicon from a copy of `entries`
    ///
    /// Sorting is stable, so equal-length affixes keep their input order.
    pub fn build(entries: &[AffixEntry]) -> Self {
        Self::from(entries.to_vec())
    }

    /// A lexicon that never matches
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when there is nothing to match against
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in matching order
    pub fn entries(&self) -> &[AffixEntry] {
        &self.entries
    }

    /// Iterate entries in matching order
    pub fn iter(&self) -> std::slice::Iter<'_, AffixEntry> {
        self.entries.iter()
    }

    /// The longest entry, if any
    pub fn longest(&self) -> Option<&AffixEntry> {
        self.entries.first()
    }

    /// First entry whose affix starts `word`
    pub fn find_prefix_of(&self, word: &str) -> Option<&AffixEntry> {
        self.entries.iter().find(|e| word.starts_with(e.affix()))
    }

    /// First entry whose affix ends `word`
    pub fn find_suffix_of(&self, word: &str) -> Option<&AffixEntry> {
        self.entries.iter().find(|e| word.ends_with(e.affix()))
    }
}

impl From<Vec<AffixEntry>> for Lexicon {
    fn from(mut entries: Vec<AffixEntry>) -> Self {
        entries.sort_by(|a, b| b.len().cmp(&a.len()));
        Self { entries }
    }
}

impl FromIterator<AffixEntry> for Lexicon {
    fn from_iter<I: IntoIterator<Item = AffixEntry>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a> IntoIterator for &'a Lexicon {
    type Item = &'a AffixEntry;
    type IntoIter = std::slice::Iter<'a, AffixEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The prefix and suffix lexicons a split runs against
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AffixLexicons {
    /// Lexicon scanned at the start of the word
    pub prefixes: Lexicon,
    /// Lexicon scanned at the end of the word
    pub suffixes: Lexicon,
}

impl AffixLexicons {
    /// Pair two lexicons
    pub fn new(prefixes: Lexicon, suffixes: Lexicon) -> Self {
        Self { prefixes, suffixes }
    }

    /// Load both lexicons from files, failing if either source is unusable
    pub fn from_files(prefix_path: &Path, suffix_path: &Path) -> Result<Self> {
        let prefixes = load_lexicon(prefix_path, AffixKind::Prefix)?;
        let suffixes = load_lexicon(suffix_path, AffixKind::Suffix)?;
        Ok(Self::new(prefixes, suffixes))
    }

    /// Lexicon for the given end of the word
    pub fn get(&self, kind: AffixKind) -> &Lexicon {
        match kind {
            AffixKind::Prefix => &self.prefixes,
            AffixKind::Suffix => &self.suffixes,
        }
    }

    /// Decompose `word` against this pair
    pub fn split(&self, word: &str) -> Decomposition {
        split(word, &self.prefixes, &self.suffixes)
    }
}

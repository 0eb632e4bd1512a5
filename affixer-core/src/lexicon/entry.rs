use crate::error::{LexiconError, Result};
use serde::{Deserialize, Serialize};

/// A known affix and its gloss
///
/// The affix string is never empty; every constructor checks it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AffixEntry {
    affix: String,
    meaning: String,
}

/// Unvalidated entry as it appears in a lexicon document
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawAffixEntry {
    pub affix: String,
    #[serde(default)]
    pub meaning: String,
}

impl AffixEntry {
    /// Create an entry, rejecting an empty affix
    ///
    /// A standalone entry reports index 0 on failure.
    pub fn new(affix: impl Into<String>, meaning: impl Into<String>) -> Result<Self> {
        Self::at(0, affix.into(), meaning.into())
    }

    pub(crate) fn at(index: usize, affix: String, meaning: String) -> Result<Self> {
        if affix.is_empty() {
            return Err(LexiconError::EmptyAffix { index });
        }
        Ok(Self { affix, meaning })
    }

    pub(crate) fn from_raw(index: usize, raw: RawAffixEntry) -> Result<Self> {
        Self::at(index, raw.affix, raw.meaning)
    }

    /// The affix string
    pub fn affix(&self) -> &str {
        &self.affix
    }

    /// The gloss attached to the affix
    pub fn meaning(&self) -> &str {
        &self.meaning
    }

    /// Affix length in characters, the key lexicons sort on
    pub fn len(&self) -> usize {
        self.affix.chars().count()
    }

    /// True when the affix string is empty, which a constructed entry never is
    pub fn is_empty(&self) -> bool {
        self.affix.is_empty()
    }
}

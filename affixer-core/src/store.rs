//! Swappable lexicon ownership
//!
//! Long-lived callers hold a [`LexiconStore`] and split against a snapshot.
//! Reloading builds a complete replacement first and swaps the reference
//! only when both lexicons loaded, so a split never observes a half-built
//! pair.

use crate::error::Result;
use crate::lexicon::AffixLexicons;
use crate::splitter::Decomposition;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

/// Owner of the current prefix/suffix lexicons
#[derive(Debug, Default)]
pub struct LexiconStore {
    current: RwLock<Arc<AffixLexicons>>,
}

impl LexiconStore {
    /// Create a store holding `lexicons`
    pub fn new(lexicons: AffixLexicons) -> Self {
        Self {
            current: RwLock::new(Arc::new(lexicons)),
        }
    }

    /// A store whose lexicons never match
    pub fn empty() -> Self {
        Self::default()
    }

    /// The lexicons in effect right now
    ///
    /// The snapshot stays valid after a later swap.
    pub fn snapshot(&self) -> Arc<AffixLexicons> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Install `lexicons`, returning the pair they replace
    pub fn replace(&self, lexicons: AffixLexicons) -> Arc<AffixLexicons> {
        let next = Arc::new(lexicons);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        tracing::info!(
            prefixes = next.prefixes.len(),
            suffixes = next.suffixes.len(),
            "swapped affix lexicons"
        );
        std::mem::replace(&mut *guard, next)
    }

    /// Load both lexicon files and swap them in
    ///
    /// On failure the current lexicons stay in place and the error is
    /// returned.
    pub fn reload(&self, prefix_path: &Path, suffix_path: &Path) -> Result<()> {
        let lexicons = AffixLexicons::from_files(prefix_path, suffix_path).inspect_err(|e| {
            tracing::warn!(error = %e, "lexicon reload failed, keeping current lexicons");
        })?;
        self.replace(lexicons);
        Ok(())
    }

    /// Split `word` against the current snapshot
    pub fn split(&self, word: &str) -> Decomposition {
        self.snapshot().split(word)
    }
}

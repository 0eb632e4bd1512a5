//! Prefix/suffix decomposition over affix lexicons
//!
//! A word is split into an optional prefix, a root and an optional suffix.
//! Each lexicon is kept sorted longest-first, so scanning for the first
//! matching affix yields the longest one, with ties settled by the order the
//! entries were supplied in.
//!
//! # Architecture
//!
//! - [`lexicon`]: immutable, sorted [`Lexicon`] values and their loaders
//! - [`splitter`]: the pure [`split`] function and its [`Decomposition`]
//! - [`store`]: [`LexiconStore`], an atomically swappable lexicon owner
//!
//! # Example
//!
//! ```rust
//! use affixer_core::{split, AffixEntry, Lexicon};
//!
//! let prefixes = Lexicon::build(&[
//!     AffixEntry::new("un", "not").unwrap(),
//!     AffixEntry::new("under", "below").unwrap(),
//! ]);
//! let suffixes = Lexicon::build(&[AffixEntry::new("ness", "state, quality").unwrap()]);
//!
//! let result = split("Unhappiness", &prefixes, &suffixes);
//! assert_eq!(result.prefix, "un");
//! assert_eq!(result.root, "happi");
//! assert_eq!(result.suffix, "ness");
//! assert_eq!(result.original, "Unhappiness");
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod lexicon;
pub mod splitter;
pub mod store;

pub use error::{LexiconError, Result};
pub use lexicon::{
    builtin_lexicons, load_entries, load_lexicon, parse_lexicon, AffixEntry, AffixKind,
    AffixLexicons, Lexicon, LexiconFormat,
};
pub use splitter::{split, Decomposition, Segment, SegmentKind};
pub use store::LexiconStore;

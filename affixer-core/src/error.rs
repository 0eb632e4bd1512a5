//! Lexicon loading errors
//!
//! Splitting itself cannot fail; everything here belongs to building
//! lexicons from external documents.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while constructing or loading affix lexicons
#[derive(Error, Debug)]
pub enum LexiconError {
    /// An entry carried an empty affix string
    #[error("entry {index} has an empty affix")]
    EmptyAffix {
        /// Position of the offending entry in the source sequence
        index: usize,
    },

    /// The lexicon source could not be read
    #[error("failed to read lexicon {path}: {source}")]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The document was not well-formed
    #[error("malformed {format} lexicon: {message}")]
    Parse {
        /// Document format being parsed
        format: &'static str,
        /// Parser diagnostic
        message: String,
    },

    /// The document lacks the top-level affix field
    #[error("lexicon document has no '{key}' field")]
    MissingKey {
        /// Expected top-level key
        key: &'static str,
    },

    /// The file extension does not name a supported format
    #[error("unsupported lexicon format: {}", path.display())]
    UnsupportedFormat {
        /// Offending path
        path: PathBuf,
    },
}

impl From<serde_json::Error> for LexiconError {
    fn from(err: serde_json::Error) -> Self {
        LexiconError::Parse {
            format: "JSON",
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for LexiconError {
    fn from(err: toml::de::Error) -> Self {
        LexiconError::Parse {
            format: "TOML",
            message: err.to_string(),
        }
    }
}

/// Result type for lexicon operations
pub type Result<T> = std::result::Result<T, LexiconError>;

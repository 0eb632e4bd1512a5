//! Lexicon documents
//!
//! A document holds its entries under a top-level `prefixes` or `suffixes`
//! field, as JSON or TOML. Entries are validated on the way in so a
//! [`Lexicon`] never contains an empty affix.

use super::{AffixEntry, AffixKind, AffixLexicons, Lexicon, RawAffixEntry};
use crate::error::{LexiconError, Result};
use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

static BUILTIN_LEXICONS: OnceLock<AffixLexicons> = OnceLock::new();

const BUILTIN_PREFIXES: &str = include_str!("../../data/prefixes.json");
const BUILTIN_SUFFIXES: &str = include_str!("../../data/suffixes.json");

/// Serialization format of a lexicon document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexiconFormat {
    /// `{"prefixes": [{"affix": "...", "meaning": "..."}]}`
    Json,
    /// `[[prefixes]]` array of tables
    Toml,
}

impl LexiconFormat {
    /// Infer the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("json") => Ok(LexiconFormat::Json),
            Some("toml") => Ok(LexiconFormat::Toml),
            _ => Err(LexiconError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// `None` only when the field is absent; an explicit `null` fails to parse
#[derive(Debug, Deserialize)]
struct LexiconDocument {
    #[serde(default, deserialize_with = "present_list")]
    prefixes: Option<Vec<RawAffixEntry>>,
    #[serde(default, deserialize_with = "present_list")]
    suffixes: Option<Vec<RawAffixEntry>>,
}

fn present_list<'de, D>(deserializer: D) -> std::result::Result<Option<Vec<RawAffixEntry>>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::deserialize(deserializer).map(Some)
}

impl LexiconDocument {
    fn take(self, kind: AffixKind) -> Option<Vec<RawAffixEntry>> {
        match kind {
            AffixKind::Prefix => self.prefixes,
            AffixKind::Suffix => self.suffixes,
        }
    }
}

/// Parse the `kind` entries of a document, in document order
pub fn parse_lexicon(text: &str, kind: AffixKind, format: LexiconFormat) -> Result<Vec<AffixEntry>> {
    let document: LexiconDocument = match format {
        LexiconFormat::Json => serde_json::from_str(text)?,
        LexiconFormat::Toml => toml::from_str(text)?,
    };

    let raw = document
        .take(kind)
        .ok_or(LexiconError::MissingKey { key: kind.key() })?;

    raw.into_iter()
        .enumerate()
        .map(|(index, entry)| AffixEntry::from_raw(index, entry))
        .collect()
}

/// Read and parse the `kind` entries of a lexicon file
pub fn load_entries(path: &Path, kind: AffixKind) -> Result<Vec<AffixEntry>> {
    let format = LexiconFormat::from_path(path)?;
    let text = fs::read_to_string(path).map_err(|source| LexiconError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let entries = parse_lexicon(&text, kind, format)?;
    tracing::debug!(
        path = %path.display(),
        kind = kind.as_str(),
        entries = entries.len(),
        "loaded lexicon entries"
    );
    if entries.is_empty() {
        tracing::warn!(path = %path.display(), "{} lexicon is empty", kind.as_str());
    }

    Ok(entries)
}

/// Load a lexicon file and sort it for matching
pub fn load_lexicon(path: &Path, kind: AffixKind) -> Result<Lexicon> {
    load_entries(path, kind).map(Lexicon::from)
}

fn load_builtin() -> Result<AffixLexicons> {
    let prefixes = parse_lexicon(BUILTIN_PREFIXES, AffixKind::Prefix, LexiconFormat::Json)?;
    let suffixes = parse_lexicon(BUILTIN_SUFFIXES, AffixKind::Suffix, LexiconFormat::Json)?;
    Ok(AffixLexicons::new(
        Lexicon::from(prefixes),
        Lexicon::from(suffixes),
    ))
}

/// English lexicons compiled into the crate, parsed on first use
pub fn builtin_lexicons() -> Result<&'static AffixLexicons> {
    if let Some(lexicons) = BUILTIN_LEXICONS.get() {
        return Ok(lexicons);
    }

    let lexicons = load_builtin()?;
    tracing::debug!(
        prefixes = lexicons.prefixes.len(),
        suffixes = lexicons.suffixes.len(),
        "parsed built-in lexicons"
    );
    Ok(BUILTIN_LEXICONS.get_or_init(|| lexicons))
}

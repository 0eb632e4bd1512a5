//! Lexicon source management for CLI

use crate::config::LexiconConfig;
use crate::error::CliError;
use affixer_core::{builtin_lexicons, load_lexicon, AffixKind, AffixLexicons, Lexicon};
use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};

/// Lexicon file flags shared by commands
#[derive(Debug, Clone, Default, Args)]
pub struct LexiconArgs {
    /// Prefix lexicon file (JSON or TOML)
    #[arg(long, value_name = "FILE", env = "AFFIXER_PREFIXES")]
    pub prefixes: Option<PathBuf>,

    /// Suffix lexicon file (JSON or TOML)
    #[arg(long, value_name = "FILE", env = "AFFIXER_SUFFIXES")]
    pub suffixes: Option<PathBuf>,
}

/// Source of one lexicon
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexiconSource {
    /// Lexicon compiled into the binary
    BuiltIn,
    /// External lexicon file
    External(PathBuf),
}

impl LexiconSource {
    /// Pick a source: flag first, then config, then built-in
    pub fn resolve(flag: Option<&Path>, configured: Option<&Path>) -> Self {
        flag.or(configured)
            .map(|path| LexiconSource::External(path.to_path_buf()))
            .unwrap_or(LexiconSource::BuiltIn)
    }

    /// Get the display name for the lexicon source
    pub fn display_name(&self) -> String {
        match self {
            LexiconSource::BuiltIn => "Built-in: English".to_string(),
            LexiconSource::External(path) => format!("External: {}", path.display()),
        }
    }

    /// Load the lexicon for `kind`
    ///
    /// A failing file is an error; it is never replaced with an empty
    /// lexicon.
    pub fn load(&self, kind: AffixKind) -> Result<Lexicon> {
        let lexicon = match self {
            LexiconSource::BuiltIn => builtin_lexicons()
                .map_err(|e| CliError::LexiconError(e.to_string()))?
                .get(kind)
                .clone(),
            LexiconSource::External(path) => load_lexicon(path, kind).map_err(|e| {
                CliError::LexiconError(format!("{} lexicon: {e}", kind.as_str()))
            })?,
        };

        log::info!(
            "Loaded {} {} entries ({})",
            lexicon.len(),
            kind.as_str(),
            self.display_name()
        );
        Ok(lexicon)
    }
}

/// Resolved sources for both lexicons
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconSources {
    /// Where prefixes come from
    pub prefixes: LexiconSource,
    /// Where suffixes come from
    pub suffixes: LexiconSource,
}

impl LexiconSources {
    /// Combine command-line flags with configured paths
    pub fn resolve(args: &LexiconArgs, config: &LexiconConfig) -> Self {
        Self {
            prefixes: LexiconSource::resolve(args.prefixes.as_deref(), config.prefixes.as_deref()),
            suffixes: LexiconSource::resolve(args.suffixes.as_deref(), config.suffixes.as_deref()),
        }
    }

    /// Source for `kind`
    pub fn get(&self, kind: AffixKind) -> &LexiconSource {
        match kind {
            AffixKind::Prefix => &self.prefixes,
            AffixKind::Suffix => &self.suffixes,
        }
    }

    /// Load both lexicons
    pub fn load(&self) -> Result<AffixLexicons> {
        Ok(AffixLexicons::new(
            self.prefixes.load(AffixKind::Prefix)?,
            self.suffixes.load(AffixKind::Suffix)?,
        ))
    }
}

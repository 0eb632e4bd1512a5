//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Lexicon sources
    #[serde(default)]
    pub lexicon: LexiconConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where lexicons come from when no flag overrides them
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct LexiconConfig {
    /// Prefix lexicon file
    pub prefixes: Option<PathBuf>,

    /// Suffix lexicon file
    pub suffixes: Option<PathBuf>,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load a TOML configuration file
    ///
    /// Relative lexicon paths are resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let mut config: CliConfig = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;

        if let Some(base) = path.parent() {
            config.lexicon.resolve_relative_to(base);
        }

        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load `path` if given, otherwise the defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

impl LexiconConfig {
    fn resolve_relative_to(&mut self, base: &Path) {
        for path in [&mut self.prefixes, &mut self.suffixes].into_iter().flatten() {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

//! Word list reading

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// File reader for word lists
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read the whitespace-separated words of a file
    pub fn read_words(path: &Path) -> Result<Vec<String>> {
        let content = Self::read_text(path)?;
        let words: Vec<String> = content.split_whitespace().map(str::to_string).collect();
        log::debug!("Read {} words from {}", words.len(), path.display());
        Ok(words)
    }
}

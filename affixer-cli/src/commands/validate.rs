//! Validate command implementation

use super::KindArg;
use affixer_core::{load_entries, AffixEntry, AffixKind, Lexicon};
use anyhow::Result;
use clap::Args;
use std::collections::HashSet;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Which lexicon the file holds
    #[arg(short, long, value_enum)]
    pub kind: KindArg,

    /// Path to the lexicon file to validate
    #[arg(value_name = "FILE")]
    pub lexicon: PathBuf,
}

/// Entries whose affix already appeared earlier in the file
fn count_duplicates(entries: &[AffixEntry]) -> usize {
    let mut seen = HashSet::new();
    entries.iter().filter(|e| !seen.insert(e.affix())).count()
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        let kind = AffixKind::from(self.kind);
        println!(
            "Validating {} lexicon: {}",
            kind.as_str(),
            self.lexicon.display()
        );

        match load_entries(&self.lexicon, kind) {
            Ok(entries) => {
                let duplicates = count_duplicates(&entries);
                let lexicon = Lexicon::from(entries);

                println!("✓ Lexicon is valid!");
                println!("  Entries: {}", lexicon.len());
                if let Some(longest) = lexicon.longest() {
                    println!("  Longest affix: {}", longest.affix());
                }
                if duplicates > 0 {
                    println!("  Duplicate affixes: {duplicates} (first listed wins)");
                }
                if lexicon.is_empty() {
                    log::warn!("{} lexicon has no entries", kind.as_str());
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Lexicon is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}

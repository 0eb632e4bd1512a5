//! Generate lexicon command implementation

use super::KindArg;
use affixer_core::{AffixEntry, AffixKind, LexiconFormat};
use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Arguments for the generate-lexicon command
#[derive(Debug, Args)]
pub struct GenerateLexiconArgs {
    /// Which lexicon to generate
    #[arg(short, long, value_enum)]
    pub kind: KindArg,

    /// Output file path; `.json` or `.toml` selects the format
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

#[derive(Serialize)]
struct TemplateDocument<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    prefixes: Option<&'a [AffixEntry]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    suffixes: Option<&'a [AffixEntry]>,
}

fn samples(kind: AffixKind) -> Result<Vec<AffixEntry>> {
    let pairs = match kind {
        AffixKind::Prefix => [("un", "not"), ("re", "again")],
        AffixKind::Suffix => [("ness", "state, quality"), ("ly", "in the manner of")],
    };
    pairs
        .into_iter()
        .map(|(affix, meaning)| Ok(AffixEntry::new(affix, meaning)?))
        .collect()
}

impl GenerateLexiconArgs {
    /// Execute the generate-lexicon command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        let kind = AffixKind::from(self.kind);
        let format = LexiconFormat::from_path(&self.output)?;

        println!("Generating {} lexicon template...", kind.as_str());
        println!("  Output file: {}", self.output.display());

        let template = generate_template(kind, format)?;
        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Lexicon template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Add your {} entries (lowercase affixes)", kind.as_str());
        println!("2. Validate the lexicon:");
        println!(
            "   affixer validate --kind {} {}",
            kind.as_str(),
            self.output.display()
        );
        println!("3. Use it for splitting:");
        println!(
            "   affixer split --{} {} WORD",
            kind.key(),
            self.output.display()
        );

        Ok(())
    }
}

/// Template document with a couple of sample entries
pub fn generate_template(kind: AffixKind, format: LexiconFormat) -> Result<String> {
    let entries = samples(kind)?;
    generate_document(kind, format, &entries)
}

/// Serialize `entries` as a lexicon document of `kind`
pub fn generate_document(
    kind: AffixKind,
    format: LexiconFormat,
    entries: &[AffixEntry],
) -> Result<String> {
    let document = match kind {
        AffixKind::Prefix => TemplateDocument {
            prefixes: Some(entries),
            suffixes: None,
        },
        AffixKind::Suffix => TemplateDocument {
            prefixes: None,
            suffixes: Some(entries),
        },
    };

    match format {
        LexiconFormat::Json => {
            let mut out = serde_json::to_string_pretty(&document)?;
            out.push('\n');
            Ok(out)
        }
        LexiconFormat::Toml => {
            let body = toml::to_string(&document)?;
            Ok(format!(
                "# {} lexicon\n# Longer affixes are tried first; equal lengths keep file order.\n\n{body}",
                kind.as_str()
            ))
        }
    }
}

//! CLI command implementations

use affixer_core::AffixKind;
use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::lexicon_source::LexiconSource;

pub mod generate_lexicon;
pub mod split;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split words into prefix, root and suffix
    Split(split::SplitArgs),

    /// Validate a lexicon file
    Validate(validate::ValidateArgs),

    /// Generate a lexicon template
    GenerateLexicon(generate_lexicon::GenerateLexiconArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List prefix entries in matching order
    Prefixes {
        /// Prefix lexicon file (default: built-in)
        #[arg(long, value_name = "FILE")]
        lexicon: Option<PathBuf>,
    },

    /// List suffix entries in matching order
    Suffixes {
        /// Suffix lexicon file (default: built-in)
        #[arg(long, value_name = "FILE")]
        lexicon: Option<PathBuf>,
    },

    /// List available output formats
    Formats,
}

/// Lexicon kind as a command-line value
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    /// Prefix lexicon
    Prefix,
    /// Suffix lexicon
    Suffix,
}

impl From<KindArg> for AffixKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Prefix => AffixKind::Prefix,
            KindArg::Suffix => AffixKind::Suffix,
        }
    }
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Split(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateLexicon(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}

impl ListCommands {
    /// Print the requested listing
    pub fn execute(&self) -> Result<()> {
        let (kind, lexicon) = match self {
            ListCommands::Prefixes { lexicon } => (AffixKind::Prefix, lexicon),
            ListCommands::Suffixes { lexicon } => (AffixKind::Suffix, lexicon),
            ListCommands::Formats => {
                println!("Available output formats:");
                for format in split::OutputFormat::value_variants() {
                    if let Some(value) = format.to_possible_value() {
                        let help = value.get_help().map(|h| h.to_string()).unwrap_or_default();
                        println!("  {:<10} {}", value.get_name(), help);
                    }
                }
                return Ok(());
            }
        };

        let source = LexiconSource::resolve(lexicon.as_deref(), None);
        let entries = source.load(kind)?;
        println!("{} ({} entries)", source.display_name(), entries.len());
        for entry in &entries {
            println!("  {:<12} {}", entry.affix(), entry.meaning());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_debug_format() {
        let split_cmd = Commands::Split(split::SplitArgs {
            words: vec!["unhappiness".to_string()],
            input: Vec::new(),
            output: None,
            format: Some(split::OutputFormat::Text),
            lexicon: Default::default(),
            config: None,
            parallel: false,
            quiet: false,
            verbose: 0,
        });

        let debug_str = format!("{:?}", split_cmd);
        assert!(debug_str.contains("Split"));
        assert!(debug_str.contains("unhappiness"));

        let list_cmd = Commands::List {
            subcommand: ListCommands::Formats,
        };

        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Formats"));
    }

    #[test]
    fn test_kind_arg_conversion() {
        assert_eq!(AffixKind::from(KindArg::Prefix), AffixKind::Prefix);
        assert_eq!(AffixKind::from(KindArg::Suffix), AffixKind::Suffix);
    }

    #[test]
    fn test_list_builtin_prefixes() {
        let cmd = ListCommands::Prefixes { lexicon: None };
        assert!(cmd.execute().is_ok());
    }

    #[test]
    fn test_list_missing_lexicon_file() {
        let cmd = ListCommands::Suffixes {
            lexicon: Some(PathBuf::from("/nonexistent/suffixes.json")),
        };
        assert!(cmd.execute().is_err());
    }
}

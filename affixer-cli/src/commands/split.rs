//! Split command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{clean_words, resolve_patterns, FileReader};
use crate::lexicon_source::{LexiconArgs, LexiconSources};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use affixer_core::{AffixLexicons, Decomposition};
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Words to split
    #[arg(value_name = "WORD")]
    pub words: Vec<String>,

    /// Word-list files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(flatten)]
    pub lexicon: LexiconArgs,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Split words in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Suppress progress and log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Segments and a detail line per word
    Text,
    /// JSON array of decompositions
    Json,
    /// Markdown table
    Markdown,
}

impl OutputFormat {
    /// Parse a configured format name
    pub fn parse(name: &str) -> Result<Self> {
        <Self as ValueEnum>::from_str(name, true)
            .map_err(|_| CliError::ConfigError(format!("unknown output format '{name}'")).into())
    }
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting affix splitting");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::parse(&config.output.default_format)?,
        };

        let sources = LexiconSources::resolve(&self.lexicon, &config.lexicon);
        let lexicons = sources.load()?;

        let words = self.collect_words()?;
        if words.is_empty() {
            anyhow::bail!("No words to split");
        }

        let results = split_all(&lexicons, &words, self.parallel);
        log::info!("Split {} words", results.len());

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        let mut formatter = create_formatter(format, writer, config.output.pretty_json);
        for result in &results {
            formatter.format_decomposition(result)?;
        }
        formatter.finish()?;

        Ok(())
    }

    /// Words from the command line followed by words from input files
    fn collect_words(&self) -> Result<Vec<String>> {
        let mut words = clean_words(&self.words);

        if !self.input.is_empty() {
            let files = resolve_patterns(&self.input)?;
            let mut progress = ProgressReporter::new(self.quiet);
            progress.init_files(files.len() as u64);

            for file in &files {
                words.extend(clean_words(FileReader::read_words(file)?));
                progress.file_completed(&file.display().to_string());
            }
            progress.finish();
        }

        Ok(words)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when run in-process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}

/// Split every word against one lexicon snapshot, preserving input order
pub fn split_all(lexicons: &AffixLexicons, words: &[String], parallel: bool) -> Vec<Decomposition> {
    if parallel {
        words.par_iter().map(|word| lexicons.split(word)).collect()
    } else {
        words.iter().map(|word| lexicons.split(word)).collect()
    }
}

/// Build the formatter for `format`
pub fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send + Sync>,
    pretty_json: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}

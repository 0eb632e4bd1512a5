//! Markdown output formatter

use super::{or_placeholder, OutputFormatter};
use affixer_core::Decomposition;
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs decompositions as a table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    word_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            word_count: 0,
        }
    }

    fn write_header(&mut self) -> Result<()> {
        writeln!(self.writer, "| Word | Prefix | Root | Suffix |")?;
        writeln!(self.writer, "|------|--------|------|--------|")?;
        Ok(())
    }
}

fn cell(value: &str) -> String {
    or_placeholder(value).replace('|', "\\|")
}

fn affix_cell(affix: &str, meaning: &str) -> String {
    if affix.is_empty() || meaning.is_empty() {
        cell(affix)
    } else {
        format!("{} ({})", cell(affix), cell(meaning))
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_decomposition(&mut self, result: &Decomposition) -> Result<()> {
        if self.word_count == 0 {
            self.write_header()?;
        }
        self.word_count += 1;
        writeln!(
            self.writer,
            "| {} | {} | {} | {} |",
            cell(&result.original),
            affix_cell(&result.prefix, &result.prefix_meaning),
            cell(&result.root),
            affix_cell(&result.suffix, &result.suffix_meaning),
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total words: {}*", self.word_count)?;
        self.writer.flush()?;
        Ok(())
    }
}

//! Plain text output formatter

use super::{or_placeholder, render_segments, OutputFormatter};
use affixer_core::Decomposition;
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - segments line followed by a detail line per word
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_decomposition(&mut self, result: &Decomposition) -> Result<()> {
        writeln!(self.writer, "{}: {}", result.original, render_segments(result))?;
        writeln!(
            self.writer,
            "  prefix: {} / meaning: {} / root: {} / suffix: {} / meaning: {}",
            or_placeholder(&result.prefix),
            or_placeholder(&result.prefix_meaning),
            or_placeholder(&result.root),
            or_placeholder(&result.suffix),
            or_placeholder(&result.suffix_meaning),
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

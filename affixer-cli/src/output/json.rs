//! JSON output formatter

use super::OutputFormatter;
use affixer_core::Decomposition;
use anyhow::Result;
use std::io::Write;

/// JSON formatter - outputs decompositions as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    results: Vec<Decomposition>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            results: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_decomposition(&mut self, result: &Decomposition) -> Result<()> {
        self.results.push(result.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.results)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.results)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

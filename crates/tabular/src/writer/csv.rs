//! Delimited text output.

use std::io;

use ::csv::{Terminator, WriterBuilder};
use serde::Deserialize;

use super::Writer;
use crate::dataset::Dataset;
use crate::error::{Result, TabularError};

/// Options for [`CsvWriter`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CsvOptions {
    /// Field separator. Must be a single ASCII character.
    pub delimiter: char,
    /// End records with `\r\n` instead of `\n`.
    pub use_crlf: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            use_crlf: false,
        }
    }
}

impl CsvOptions {
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_crlf(mut self, use_crlf: bool) -> Self {
        self.use_crlf = use_crlf;
        self
    }
}

/// Writes header titles (when present) followed by one record per row.
///
/// Fields containing the delimiter, quotes or line breaks are quoted.
#[derive(Debug, Clone, Default)]
pub struct CsvWriter {
    opts: CsvOptions,
}

impl CsvWriter {
    pub fn new(opts: CsvOptions) -> Self {
        Self { opts }
    }

    fn delimiter(&self) -> Result<u8> {
        let c = self.opts.delimiter;
        if !c.is_ascii() {
            return Err(TabularError::InvalidOption {
                writer: "csv",
                message: format!("delimiter {c:?} is not a single ASCII character"),
            });
        }
        Ok(c as u8)
    }
}

impl Writer for CsvWriter {
    fn name(&self) -> &str {
        "csv"
    }

    fn needs_headers(&self) -> bool {
        false
    }

    fn write(&self, dataset: &Dataset, sink: &mut dyn io::Write) -> Result<()> {
        let terminator = if self.opts.use_crlf {
            Terminator::CRLF
        } else {
            Terminator::Any(b'\n')
        };
        let mut buf = Vec::new();
        {
            let mut wtr = WriterBuilder::new()
                .delimiter(self.delimiter()?)
                .terminator(terminator)
                .flexible(true)
                .from_writer(&mut buf);

            if dataset.has_headers() {
                wtr.write_record(dataset.headers().iter().map(|h| h.title.as_str()))?;
            }
            for row in dataset.rows() {
                wtr.write_record(row.cells())?;
            }
            wtr.flush()?;
        }
        sink.write_all(&buf)?;
        Ok(())
    }
}

//! YAML output.

use std::io;

use super::{records, Writer};
use crate::dataset::Dataset;
use crate::error::Result;

/// Writes a sequence of mappings, one per row, keyed by header key.
///
/// Values stay strings, so cells that look like numbers or booleans come out
/// quoted (`age: '40'`).
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlWriter;

impl YamlWriter {
    pub fn new() -> Self {
        YamlWriter
    }
}

impl Writer for YamlWriter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn needs_headers(&self) -> bool {
        true
    }

    fn write(&self, dataset: &Dataset, sink: &mut dyn io::Write) -> Result<()> {
        let records = records(dataset)?;
        let text = serde_yaml::to_string(&records)?;
        sink.write_all(text.as_bytes())?;
        Ok(())
    }
}

//! JSON output.

use std::io;

use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};

use super::{records, Writer};
use crate::dataset::Dataset;
use crate::error::Result;

/// Options for [`JsonWriter`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct JsonOptions {
    /// Spaces per nesting level. 0 writes compact JSON.
    pub indent: usize,
}

impl JsonOptions {
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}

/// Writes an array of objects, one per row, keyed by header key.
///
/// Keys keep header order and every value is a JSON string. No trailing
/// newline is written.
#[derive(Debug, Clone, Default)]
pub struct JsonWriter {
    opts: JsonOptions,
}

impl JsonWriter {
    pub fn new(opts: JsonOptions) -> Self {
        Self { opts }
    }
}

impl Writer for JsonWriter {
    fn name(&self) -> &str {
        "json"
    }

    fn needs_headers(&self) -> bool {
        true
    }

    fn write(&self, dataset: &Dataset, sink: &mut dyn io::Write) -> Result<()> {
        let records = records(dataset)?;
        let mut buf = Vec::new();
        if self.opts.indent == 0 {
            serde_json::to_writer(&mut buf, &records)?;
        } else {
            let indent = " ".repeat(self.opts.indent);
            let formatter = PrettyFormatter::with_indent(indent.as_bytes());
            let mut ser = Serializer::with_formatter(&mut buf, formatter);
            records.serialize(&mut ser)?;
        }
        sink.write_all(&buf)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::Row;

    #[test]
    fn test_escapes_values() {
        let mut ds = Dataset::new();
        ds.add_header("quote", "Quote");
        ds.push(Row::new(["say \"hi\"\n"])).unwrap();
        let mut out = Vec::new();
        ds.write(&JsonWriter::default(), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            r#"[{"quote":"say \"hi\"\n"}]"#
        );
    }

    #[test]
    fn test_key_order_follows_headers() {
        let mut ds = Dataset::new();
        ds.add_header("z", "Z");
        ds.add_header("a", "A");
        ds.push(Row::new(["1", "2"])).unwrap();
        let mut out = Vec::new();
        ds.write(&JsonWriter::default(), &mut out).unwrap();
        assert_eq!(out, br#"[{"z":"1","a":"2"}]"#);
    }
}

//! XML output.

use std::io;

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use serde::Deserialize;

use super::{keyed_cells, Writer};
use crate::dataset::Dataset;
use crate::error::Result;
use crate::util::sanitize_xml_name;

/// Options for [`XmlWriter`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct XmlOptions {
    /// Spaces per nesting level. 0 writes everything on one line.
    pub indent: usize,
    /// Element wrapping each row.
    pub row_elem: String,
    /// Root element wrapping all rows.
    pub parent_elem: String,
}

impl Default for XmlOptions {
    fn default() -> Self {
        Self {
            indent: 0,
            row_elem: "row".to_string(),
            parent_elem: "rows".to_string(),
        }
    }
}

impl XmlOptions {
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_row_elem(mut self, name: impl Into<String>) -> Self {
        self.row_elem = name.into();
        self
    }

    pub fn with_parent_elem(mut self, name: impl Into<String>) -> Self {
        self.parent_elem = name.into();
        self
    }
}

/// Writes `<rows><row><key>cell</key>...</row>...</rows>`.
///
/// Element names are sanitized into valid XML names. No declaration and no
/// trailing newline are written. A row with more cells than headers fails
/// with [`TabularError::InvalidHeaderIndex`](crate::TabularError::InvalidHeaderIndex).
#[derive(Debug, Clone, Default)]
pub struct XmlWriter {
    opts: XmlOptions,
}

impl XmlWriter {
    pub fn new(opts: XmlOptions) -> Self {
        Self { opts }
    }
}

impl Writer for XmlWriter {
    fn name(&self) -> &str {
        "xml"
    }

    fn needs_headers(&self) -> bool {
        true
    }

    fn write(&self, dataset: &Dataset, sink: &mut dyn io::Write) -> Result<()> {
        let mut buf = Vec::new();
        let mut xml = if self.opts.indent > 0 {
            quick_xml::Writer::new_with_indent(&mut buf, b' ', self.opts.indent)
        } else {
            quick_xml::Writer::new(&mut buf)
        };

        let parent = sanitize_xml_name(&self.opts.parent_elem);
        let row_elem = sanitize_xml_name(&self.opts.row_elem);

        xml.write_event(Event::Start(BytesStart::new(parent.as_str())))?;
        for (index, row) in dataset.rows().iter().enumerate() {
            xml.write_event(Event::Start(BytesStart::new(row_elem.as_str())))?;
            for (key, cell) in keyed_cells(dataset, index, row)? {
                let name = sanitize_xml_name(key);
                xml.write_event(Event::Start(BytesStart::new(name.as_str())))?;
                xml.write_event(Event::Text(BytesText::new(cell)))?;
                xml.write_event(Event::End(BytesEnd::new(name.as_str())))?;
            }
            xml.write_event(Event::End(BytesEnd::new(row_elem.as_str())))?;
        }
        xml.write_event(Event::End(BytesEnd::new(parent.as_str())))?;
        sink.write_all(&buf)?;
        Ok(())
    }
}

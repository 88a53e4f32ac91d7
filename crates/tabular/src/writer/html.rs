//! HTML table output.

use std::io;

use serde::Deserialize;

use super::Writer;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::util::escape_html;

/// Options for [`HtmlWriter`].
///
/// Empty strings mean "not set": no caption, no `class` attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HtmlOptions {
    pub caption: String,
    /// Spaces per nesting level. 0 writes everything on one line.
    pub indent: usize,
    pub table_class: String,
    pub row_class: String,
    pub head_class: String,
    pub data_class: String,
}

impl HtmlOptions {
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_table_class(mut self, class: impl Into<String>) -> Self {
        self.table_class = class.into();
        self
    }

    pub fn with_row_class(mut self, class: impl Into<String>) -> Self {
        self.row_class = class.into();
        self
    }

    pub fn with_head_class(mut self, class: impl Into<String>) -> Self {
        self.head_class = class.into();
        self
    }

    pub fn with_data_class(mut self, class: impl Into<String>) -> Self {
        self.data_class = class.into();
        self
    }
}

/// Writes a `<table>` with a `<thead>` when headers are present.
///
/// Text and attribute values are HTML-escaped. With a non-zero indent each
/// element goes on its own line and the output ends with a newline.
#[derive(Debug, Clone, Default)]
pub struct HtmlWriter {
    opts: HtmlOptions,
}

impl HtmlWriter {
    pub fn new(opts: HtmlOptions) -> Self {
        Self { opts }
    }
}

impl Writer for HtmlWriter {
    fn name(&self) -> &str {
        "html"
    }

    fn needs_headers(&self) -> bool {
        false
    }

    fn write(&self, dataset: &Dataset, sink: &mut dyn io::Write) -> Result<()> {
        let mut table = HtmlTable {
            opts: &self.opts,
            out: String::new(),
        };
        table.render(dataset);
        sink.write_all(table.out.as_bytes())?;
        Ok(())
    }
}

struct HtmlTable<'a> {
    opts: &'a HtmlOptions,
    out: String,
}

impl HtmlTable<'_> {
    fn render(&mut self, dataset: &Dataset) {
        let opts = self.opts;
        self.open("table", 0, &opts.table_class);

        if !opts.caption.is_empty() {
            self.inline("caption", &opts.caption, "", 1);
        }

        if dataset.has_headers() {
            self.open("thead", 1, "");
            self.open("tr", 2, &opts.row_class);
            for header in dataset.headers() {
                self.inline("th", &header.title, &opts.head_class, 3);
            }
            self.close("tr", 2);
            self.close("thead", 1);
        }

        self.open("tbody", 1, "");
        for row in dataset.rows() {
            self.open("tr", 2, &opts.row_class);
            for cell in row.cells() {
                self.inline("td", cell, &opts.data_class, 3);
            }
            self.close("tr", 2);
        }
        self.close("tbody", 1);

        self.close("table", 0);
    }

    fn indent(&mut self, level: usize) {
        self.out.push_str(&" ".repeat(self.opts.indent * level));
    }

    fn newline(&mut self) {
        if self.opts.indent > 0 {
            self.out.push('\n');
        }
    }

    fn start_tag(&mut self, name: &str, level: usize, class: &str) {
        self.indent(level);
        self.out.push('<');
        self.out.push_str(name);
        if !class.is_empty() {
            self.out.push_str(" class=\"");
            self.out.push_str(&escape_html(class));
            self.out.push('"');
        }
        self.out.push('>');
    }

    fn open(&mut self, name: &str, level: usize, class: &str) {
        self.start_tag(name, level, class);
        self.newline();
    }

    fn close(&mut self, name: &str, level: usize) {
        self.indent(level);
        self.end_tag(name);
    }

    fn end_tag(&mut self, name: &str) {
        self.out.push_str("</");
        self.out.push_str(name);
        self.out.push('>');
        self.newline();
    }

    /// An element whose content stays on the opening line.
    fn inline(&mut self, name: &str, text: &str, class: &str, level: usize) {
        self.start_tag(name, level, class);
        self.out.push_str(&escape_html(text));
        self.end_tag(name);
    }
}

//! LaTeX table output.

use std::io;

use serde::Deserialize;

use super::Writer;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::util::{escape_latex, pad_right};

/// Options for [`LatexWriter`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LatexOptions {
    /// Emitted as `\caption{..}` after the tabular body when non-empty.
    pub caption: String,
    /// Adds `\centering`. Only applies to the fixed-width `tabular` mode.
    pub center: bool,
    /// Use `tabularx` with flexible `X` columns instead of `tabular`.
    pub tabularx: bool,
}

impl LatexOptions {
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    pub fn with_center(mut self, center: bool) -> Self {
        self.center = center;
        self
    }

    pub fn with_tabularx(mut self, tabularx: bool) -> Self {
        self.tabularx = tabularx;
        self
    }
}

/// Writes a `table` float holding a `tabular` (or `tabularx`) environment.
///
/// Every cell is right-padded to its column's effective width before
/// escaping, so the `&` separators line up in the source.
#[derive(Debug, Clone, Default)]
pub struct LatexWriter {
    opts: LatexOptions,
}

impl LatexWriter {
    pub fn new(opts: LatexOptions) -> Self {
        Self { opts }
    }

    fn environment(&self) -> &'static str {
        if self.opts.tabularx {
            "tabularx"
        } else {
            "tabular"
        }
    }
}

impl Writer for LatexWriter {
    fn name(&self) -> &str {
        "latex"
    }

    fn needs_headers(&self) -> bool {
        false
    }

    fn write(&self, dataset: &Dataset, sink: &mut dyn io::Write) -> Result<()> {
        let columns = dataset.columns();
        let env = self.environment();
        let column_spec = if self.opts.tabularx { "|X" } else { "|l" };

        let mut out = String::from("\\begin{table}[h]\n");
        if self.opts.center && !self.opts.tabularx {
            out.push_str("\\centering\n");
        }
        out.push_str(&format!("\\begin{{{env}}}{{{}|}}\n", column_spec.repeat(columns)));
        out.push_str("\\hline\n");

        if dataset.has_headers() {
            let titles = dataset.headers().iter().map(|h| h.title.as_str());
            push_line(&mut out, dataset, titles);
        }
        for row in dataset.rows() {
            push_line(&mut out, dataset, row.cells().iter().map(String::as_str));
        }

        out.push_str(&format!("\\end{{{env}}}\n"));
        if !self.opts.caption.is_empty() {
            out.push_str(&format!("\\caption{{{}}}\n", escape_latex(&self.opts.caption)));
        }
        out.push_str("\\end{table}\n");

        sink.write_all(out.as_bytes())?;
        Ok(())
    }
}

fn push_line<'a>(out: &mut String, dataset: &Dataset, cells: impl Iterator<Item = &'a str>) {
    let padded: Vec<String> = cells
        .enumerate()
        .map(|(idx, cell)| escape_latex(&pad_right(cell, dataset.idx_width(idx))))
        .collect();
    out.push_str(&padded.join(" & "));
    out.push_str(" \\\\ \\hline\n");
}

//! Output formats.
//!
//! Every format implements [`Writer`]. [`Dataset::write`] checks the shared
//! preconditions (rows present, headers present when the writer needs them)
//! and then hands the whole table to the writer.
//!
//! | Writer | Needs headers | Shape |
//! |--------|---------------|-------|
//! | [`CsvWriter`] | no | title row (if any) then one record per row |
//! | [`HtmlWriter`] | no | `<table>` with optional `<thead>` and caption |
//! | [`JsonWriter`] | yes | array of objects keyed by header key |
//! | [`XmlWriter`] | yes | parent element of row elements of key elements |
//! | [`YamlWriter`] | yes | list of mappings keyed by header key |
//! | [`LatexWriter`] | no | `tabular`/`tabularx` environment, padded columns |
//! | [`SqlWriter`] | yes | one `INSERT` per row inside a transaction |

use std::io;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::dataset::Dataset;
use crate::error::{Result, TabularError};
use crate::row::Row;

mod csv;
mod html;
mod json;
mod latex;
mod sql;
#[cfg(feature = "sqlite")]
mod sqlite;
mod xml;
mod yaml;

pub use self::csv::{CsvOptions, CsvWriter};
pub use html::{HtmlOptions, HtmlWriter};
pub use json::{JsonOptions, JsonWriter};
pub use latex::{LatexOptions, LatexWriter};
pub use sql::{InsertStatement, Placeholder, SqlExecutor, SqlOptions, SqlWriter};
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteExecutor;
pub use xml::{XmlOptions, XmlWriter};
pub use yaml::YamlWriter;

/// A dataset serializer for one output format.
pub trait Writer {
    /// Short identifier used in diagnostics, e.g. `"csv"`.
    fn name(&self) -> &str;

    /// Whether the format requires header keys or titles.
    fn needs_headers(&self) -> bool;

    /// Renders `dataset` into `sink`.
    ///
    /// Output is rendered in full before the first byte reaches `sink`, so a
    /// formatting error writes nothing and a failing sink surfaces as
    /// [`TabularError::Io`]. Callers normally go through [`Dataset::write`],
    /// which validates the dataset first.
    fn write(&self, dataset: &Dataset, sink: &mut dyn io::Write) -> Result<()>;
}

/// Checks the dataset-level preconditions of a write.
pub(crate) fn check_writable(dataset: &Dataset, name: &str, needs_headers: bool) -> Result<()> {
    if dataset.is_empty() {
        return Err(TabularError::EmptyDataset);
    }
    if needs_headers && !dataset.has_headers() {
        return Err(TabularError::HeadersRequired {
            writer: name.to_string(),
        });
    }
    Ok(())
}

/// Pairs each header key with the row's cell at the same index.
///
/// Extra cells have no key to live under and fail with
/// [`TabularError::InvalidHeaderIndex`]; missing cells fail with
/// [`TabularError::MissingCell`].
pub(crate) fn keyed_cells<'a>(
    dataset: &'a Dataset,
    index: usize,
    row: &'a Row,
) -> Result<Vec<(&'a str, &'a str)>> {
    let headers = dataset.headers();
    if row.len() > headers.len() {
        return Err(TabularError::InvalidHeaderIndex(headers.len()));
    }
    headers
        .iter()
        .enumerate()
        .map(|(column, header)| {
            row.get(column)
                .map(|cell| (header.key.as_str(), cell))
                .ok_or(TabularError::MissingCell { row: index, column })
        })
        .collect()
}

/// A row as an ordered key/value mapping for serde-based formats.
pub(crate) struct Record<'a> {
    fields: Vec<(&'a str, &'a str)>,
}

impl Serialize for Record<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Builds one [`Record`] per row, in row order.
pub(crate) fn records(dataset: &Dataset) -> Result<Vec<Record<'_>>> {
    dataset
        .rows()
        .iter()
        .enumerate()
        .map(|(index, row)| {
            keyed_cells(dataset, index, row).map(|fields| Record { fields })
        })
        .collect()
}

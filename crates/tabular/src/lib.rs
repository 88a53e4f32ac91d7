//! Tabular - In-memory tables with tag filtering and pluggable writers.
//!
//! A [`Dataset`] is a rectangular table of string cells with optional
//! `(key, title)` headers. Rows carry a [`TagSet`] used for filtering. The
//! dataset can be filtered, sorted and sliced in place, then rendered by any
//! [`Writer`]:
//!
//! - [`CsvWriter`]: delimited text
//! - [`HtmlWriter`]: an HTML `<table>`
//! - [`JsonWriter`]: an array of objects
//! - [`XmlWriter`]: nested elements named after header keys
//! - [`YamlWriter`]: a list of mappings
//! - [`LatexWriter`]: a padded `tabular` environment
//! - [`SqlWriter`]: `INSERT` statements in one transaction
//!
//! # Quick Start
//!
//! ```rust
//! use tabular::{CsvOptions, CsvWriter, Dataset, Row};
//!
//! let mut ds = Dataset::new();
//! ds.add_header("name", "First name");
//! ds.add_header("age", "Age");
//! ds.append([
//!     Row::new(["Julia", "40"]).with_tag("actress"),
//!     Row::new(["John", "42"]).with_tag("actor"),
//! ]).unwrap();
//!
//! ds.find("actress");
//!
//! let mut out = Vec::new();
//! ds.write(&CsvWriter::new(CsvOptions::default()), &mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "First name,Age\nJulia,40\n");
//! ```
//!
//! # Row width
//!
//! Headers fix the row width to the header count. Without headers the first
//! row fixes it. Rows of any other width, and empty rows, are rejected with
//! [`TabularError::InvalidRowWidth`].
//!
//! # Tags
//!
//! [`TagSet::has_all`] is a subset test and [`TagSet::has_any`] an
//! intersection test. Both are `false` for zero tags or an untagged row, so
//! an empty filter never matches every row.
//!
//! # Features
//!
//! - `sqlite`: adds `SqliteExecutor`, which runs [`SqlWriter::execute`]
//!   transactions against a SQLite database through `sqlx`.

mod dataset;
mod error;
mod header;
mod row;
mod sorter;
mod tags;
pub mod util;
pub mod writer;

// Re-export public API
pub use dataset::Dataset;
pub use error::{Result, TabularError};
pub use header::{Header, Headers};
pub use row::Row;
pub use sorter::{Dir, RowSorter};
pub use tags::TagSet;
pub use writer::{
    CsvOptions, CsvWriter, HtmlOptions, HtmlWriter, InsertStatement, JsonOptions, JsonWriter,
    LatexOptions, LatexWriter, Placeholder, SqlExecutor, SqlOptions, SqlWriter, Writer,
    XmlOptions, XmlWriter, YamlWriter,
};
#[cfg(feature = "sqlite")]
pub use writer::SqliteExecutor;

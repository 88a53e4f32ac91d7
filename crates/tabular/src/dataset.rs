//! The in-memory table.
//!
//! A [`Dataset`] owns an ordered header list and a sequence of rows. It
//! enforces a single row width and tracks, per column, the widest cell ever
//! appended so text-aligned writers can pad without rescanning.
//!
//! # Destructive transforms
//!
//! [`find`](Dataset::find), [`find_any`](Dataset::find_any),
//! [`find_all`](Dataset::find_all), [`slice`](Dataset::slice) and
//! [`sort`](Dataset::sort) replace the row sequence in place and return
//! `&mut Self` for chaining. Clone the dataset first to keep the unfiltered
//! rows:
//!
//! ```rust
//! use tabular::{Dataset, Row};
//!
//! let mut ds = Dataset::new();
//! ds.add_header("name", "Name");
//! ds.append([
//!     Row::new(["b"]).with_tag("keep"),
//!     Row::new(["a"]),
//! ]).unwrap();
//!
//! let mut kept = ds.clone();
//! kept.find("keep").sort("name", false);
//! assert_eq!(kept.len(), 1);
//! assert_eq!(ds.len(), 2);
//! ```

use std::io;

use crate::error::{Result, TabularError};
use crate::header::{Header, Headers};
use crate::row::Row;
use crate::sorter::{Dir, RowSorter};
use crate::util::display_width;
use crate::writer::{check_writable, Writer};

/// A rectangular table of string cells.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    headers: Headers,
    rows: Vec<Row>,
    columns: usize,
    lengths: Vec<usize>,
}

impl Dataset {
    /// Creates an empty dataset with no headers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a header and resets the expected row width to the header count.
    ///
    /// Adding a header after rows were appended makes the next append of the
    /// old width fail.
    pub fn add_header(&mut self, key: impl Into<String>, title: impl Into<String>) {
        self.headers.add(key, title);
        self.columns = self.headers.len();
    }

    pub fn header(&self, idx: usize) -> Option<&Header> {
        self.headers.get(idx)
    }

    pub fn headers(&self) -> &[Header] {
        self.headers.items()
    }

    pub fn header_count(&self) -> usize {
        self.headers.len()
    }

    pub fn has_headers(&self) -> bool {
        !self.headers.is_empty()
    }

    /// Expected row width.
    ///
    /// Set by the header count, or by the first row when there are no
    /// headers. Zero for a fresh dataset.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Appends rows in order, stopping at the first invalid one.
    ///
    /// Rows accepted before the failure stay appended.
    pub fn append<I>(&mut self, rows: I) -> Result<()>
    where
        I: IntoIterator<Item = Row>,
    {
        for row in rows {
            self.push(row)?;
        }
        Ok(())
    }

    /// Appends a single row.
    pub fn push(&mut self, row: Row) -> Result<()> {
        self.validate(&row)?;
        if !self.has_headers() {
            self.columns = row.len();
        }
        self.track_lengths(&row);
        self.rows.push(row);
        Ok(())
    }

    fn validate(&self, row: &Row) -> Result<()> {
        let actual = row.len();
        if actual == 0 {
            return Err(TabularError::InvalidRowWidth {
                actual,
                expected: 1,
            });
        }
        let established = !self.rows.is_empty() || self.has_headers();
        if established && actual != self.columns {
            return Err(TabularError::InvalidRowWidth {
                actual,
                expected: self.columns,
            });
        }
        Ok(())
    }

    fn track_lengths(&mut self, row: &Row) {
        if self.lengths.len() < row.len() {
            self.lengths.resize(row.len(), 0);
        }
        for (slot, cell) in self.lengths.iter_mut().zip(row.cells()) {
            *slot = (*slot).max(display_width(cell));
        }
    }

    fn column_index(&self, key: &str) -> Option<usize> {
        self.headers.position(key)
    }

    /// Returns `true` if a header with this key exists.
    pub fn has_col(&self, key: &str) -> bool {
        self.column_index(key).is_some()
    }

    /// Returns the cell at the column named `key` from every row, in row order.
    ///
    /// `None` if no header has that key. The result always has one entry per
    /// row: rows appended before the header was added can be shorter than the
    /// header list, and yield `None` in place of the missing cell.
    pub fn col_values(&self, key: &str) -> Option<Vec<Option<&str>>> {
        let idx = self.column_index(key)?;
        Some(self.rows.iter().map(|r| r.get(idx)).collect())
    }

    /// Effective display width of the column named `key`; 0 if unknown.
    pub fn key_width(&self, key: &str) -> usize {
        self.column_index(key)
            .map(|idx| self.idx_width(idx))
            .unwrap_or(0)
    }

    /// Effective display width of column `idx`.
    ///
    /// The larger of the widest cell ever appended at `idx` and the header
    /// title, if there is one. 0 when the dataset has no rows.
    pub fn idx_width(&self, idx: usize) -> usize {
        if self.rows.is_empty() {
            return 0;
        }
        let cells = self.lengths.get(idx).copied().unwrap_or(0);
        let title = self
            .headers
            .get(idx)
            .map(|h| display_width(&h.title))
            .unwrap_or(0);
        cells.max(title)
    }

    /// Keeps only rows tagged with `tag`.
    pub fn find(&mut self, tag: &str) -> &mut Self {
        self.rows.retain(|row| row.has_tag(tag));
        self
    }

    /// Keeps only rows carrying at least one of `tags`.
    pub fn find_any<S: AsRef<str>>(&mut self, tags: &[S]) -> &mut Self {
        self.rows.retain(|row| row.has_any_tags(tags));
        self
    }

    /// Keeps only rows carrying every one of `tags`.
    pub fn find_all<S: AsRef<str>>(&mut self, tags: &[S]) -> &mut Self {
        self.rows.retain(|row| row.has_all_tags(tags));
        self
    }

    /// Keeps only rows in `start..end`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end` or `end > self.len()`.
    pub fn slice(&mut self, start: usize, end: usize) -> &mut Self {
        let kept: Vec<Row> = self.rows.drain(start..end).collect();
        self.rows = kept;
        self
    }

    /// Sorts rows by the column named `key`, descending if `reverse`.
    ///
    /// An unknown key leaves the rows untouched.
    pub fn sort(&mut self, key: &str, reverse: bool) -> &mut Self {
        if let Some(idx) = self.column_index(key) {
            RowSorter::new(idx, Dir::from_reverse(reverse)).sort(&mut self.rows);
        }
        self
    }

    /// Renders the dataset with `writer`.
    ///
    /// Fails with [`TabularError::EmptyDataset`] when there are no rows, then
    /// with [`TabularError::HeadersRequired`] if the writer needs headers and
    /// none are set. Otherwise returns whatever the writer returns.
    pub fn write(&self, writer: &dyn Writer, sink: &mut dyn io::Write) -> Result<()> {
        check_writable(self, writer.name(), writer.needs_headers())?;
        writer.write(self, sink)
    }

    pub fn get(&self, idx: usize) -> Option<&Row> {
        self.rows.get(idx)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

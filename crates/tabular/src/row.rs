//! Table rows.

use crate::tags::TagSet;

/// An ordered sequence of string cells with an attached [`TagSet`].
///
/// Cells can be appended freely until the row is handed to a
/// [`Dataset`](crate::Dataset), which then owns it and fixes its width.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    cells: Vec<String>,
    tags: TagSet,
}

impl Row {
    /// Creates a row from its cells.
    pub fn new<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
            tags: TagSet::new(),
        }
    }

    /// Appends a cell.
    pub fn push(&mut self, cell: impl Into<String>) {
        self.cells.push(cell.into());
    }

    /// Appends a cell, builder style.
    pub fn add(mut self, cell: impl Into<String>) -> Self {
        self.push(cell);
        self
    }

    /// Returns the cell at `idx`.
    pub fn get(&self, idx: usize) -> Option<&str> {
        self.cells.get(idx).map(String::as_str)
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Tags the row, returning `true` if the tag is new.
    pub fn add_tag(&mut self, tag: impl Into<String>) -> bool {
        self.tags.add(tag)
    }

    /// Adds a tag, builder style.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.add(tag);
        self
    }

    /// Adds several tags, builder style.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for tag in tags {
            self.tags.add(tag);
        }
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.has(tag)
    }

    /// See [`TagSet::has_all`].
    pub fn has_all_tags<I, S>(&self, tags: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tags.has_all(tags)
    }

    /// See [`TagSet::has_any`].
    pub fn has_any_tags<I, S>(&self, tags: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tags.has_any(tags)
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }
}

impl From<Vec<String>> for Row {
    fn from(cells: Vec<String>) -> Self {
        Self {
            cells,
            tags: TagSet::new(),
        }
    }
}

impl<S: Into<String>> FromIterator<S> for Row {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Row::new(iter)
    }
}

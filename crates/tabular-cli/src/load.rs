//! Loading delimited text into a [`Dataset`].

use std::io;

use anyhow::{bail, Context, Result};
use tabular::{Dataset, Row};
use tracing::{debug, warn};

/// Separator between tags inside the tag column.
pub const TAG_SEPARATOR: char = '|';

#[derive(Debug, Clone)]
pub struct LoadOptions {
    pub delimiter: char,
    /// The first record holds column titles.
    pub has_header: bool,
    /// Key or title of the column holding row tags.
    pub tag_column: Option<String>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            has_header: true,
            tag_column: None,
        }
    }
}

/// Derives a column key from its title: lowercase, with every run of
/// non-alphanumeric characters collapsed to `_`.
///
/// `"First name"` becomes `first_name`. Titles with no usable characters
/// fall back to `col<N>` (1-based).
pub fn key_for_title(title: &str, idx: usize) -> String {
    let mut key = String::with_capacity(title.len());
    for c in title.trim().chars() {
        if c.is_alphanumeric() {
            key.extend(c.to_lowercase());
        } else if !key.ends_with('_') {
            key.push('_');
        }
    }
    let key = key.trim_matches('_');
    if key.is_empty() {
        format!("col{}", idx + 1)
    } else {
        key.to_string()
    }
}

/// Reads a delimited table.
///
/// Records whose width disagrees with the table are skipped with a warning.
pub fn load<R: io::Read>(reader: R, opts: &LoadOptions) -> Result<Dataset> {
    if !opts.delimiter.is_ascii() {
        bail!("delimiter {:?} is not a single ASCII character", opts.delimiter);
    }
    let mut records = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(opts.delimiter as u8)
        .from_reader(reader)
        .into_records();

    let mut ds = Dataset::new();
    let mut tag_idx = None;

    if opts.has_header {
        let Some(first) = records.next() else {
            return Ok(ds);
        };
        let titles = first.context("failed to read header line")?;
        tag_idx = match &opts.tag_column {
            Some(name) => Some(find_tag_column(&titles, name)?),
            None => None,
        };
        for (idx, title) in titles.iter().enumerate() {
            if Some(idx) != tag_idx {
                ds.add_header(key_for_title(title, idx), title);
            }
        }
        debug!(columns = ds.header_count(), "read header");
    } else if opts.tag_column.is_some() {
        bail!("--tag-column needs a header line to find the column");
    }

    let mut skipped = 0usize;
    for (line, record) in records.enumerate() {
        let record = record.with_context(|| format!("failed to read record {}", line + 1))?;
        let mut row = Row::default();
        for (idx, field) in record.iter().enumerate() {
            if Some(idx) == tag_idx {
                for tag in field.split(TAG_SEPARATOR).map(str::trim).filter(|t| !t.is_empty()) {
                    row.add_tag(tag);
                }
            } else {
                row.push(field);
            }
        }
        if let Err(err) = ds.push(row) {
            skipped += 1;
            warn!(record = line + 1, error = %err, "skipping record");
        }
    }

    debug!(rows = ds.len(), skipped, "loaded table");
    Ok(ds)
}

fn find_tag_column(titles: &csv::StringRecord, name: &str) -> Result<usize> {
    titles
        .iter()
        .enumerate()
        .position(|(idx, title)| title == name || key_for_title(title, idx) == name)
        .with_context(|| format!("tag column '{name}' not found"))
}

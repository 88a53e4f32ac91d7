//! Error types for the tabular crate.

use thiserror::Error;

/// Errors raised while building a dataset or writing it out.
#[derive(Debug, Error)]
pub enum TabularError {
    /// A row was rejected because its width disagrees with the dataset.
    ///
    /// Empty rows are always rejected and report an expected width of 1.
    #[error("invalid row width = {actual}, expected = {expected}")]
    InvalidRowWidth { actual: usize, expected: usize },

    /// The dataset holds no rows, so there is nothing to write.
    #[error("dataset is empty")]
    EmptyDataset,

    /// The writer requires headers but the dataset has none.
    #[error("writer {writer} needs headers")]
    HeadersRequired { writer: String },

    /// A row cell has no header to name it.
    #[error("invalid header index {0}")]
    InvalidHeaderIndex(usize),

    /// A row is shorter than the header list of a keyed writer.
    #[error("row {row} has no cell for column {column}")]
    MissingCell { row: usize, column: usize },

    /// A writer option has a value the format cannot use.
    #[error("invalid {writer} option: {message}")]
    InvalidOption { writer: &'static str, message: String },

    /// Writing to the sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV encoding failed.
    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),

    /// JSON encoding failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML encoding failed.
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// XML encoding failed.
    #[error("XML serialization failed: {0}")]
    Xml(#[from] quick_xml::Error),

    /// A SQL statement could not be built or executed.
    #[error("SQL error: {0}")]
    Sql(String),
}

impl TabularError {
    /// Returns `true` if this is the empty-dataset condition.
    pub fn is_empty_dataset(&self) -> bool {
        matches!(self, TabularError::EmptyDataset)
    }
}

/// Result type for tabular operations.
pub type Result<T> = std::result::Result<T, TabularError>;

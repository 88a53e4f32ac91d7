//! SQL insert output.
//!
//! [`SqlWriter`] turns every row into one `INSERT` and runs them all inside a
//! single transaction. Two ways to use it:
//!
//! - [`SqlWriter::execute`] drives a database through the [`SqlExecutor`]
//!   trait with parameterised statements, rolling back on the first failure.
//! - As a [`Writer`], it renders the same transaction as a plain SQL script
//!   with quoted literals. Nothing reaches the sink unless every statement
//!   builds.
//!
//! Script literals use standard SQL quoting: only `'` is escaped (as `''`)
//! and a backslash is an ordinary character. That is what PostgreSQL and
//! SQLite expect. MySQL treats `\` as an escape unless `NO_BACKSLASH_ESCAPES`
//! is set, so load MySQL data through [`SqlWriter::execute`], whose bound
//! parameters need no quoting.

use std::collections::HashMap;
use std::io;

use serde::Deserialize;

use super::{check_writable, keyed_cells, Writer};
use crate::dataset::Dataset;
use crate::error::{Result, TabularError};
use crate::row::Row;

/// Bind parameter style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placeholder {
    /// `?`, used by MySQL and SQLite.
    #[default]
    Question,
    /// `$1`, `$2`, ... used by PostgreSQL.
    Dollar,
}

impl Placeholder {
    /// Picks the placeholder style for a driver name.
    pub fn for_driver(driver: &str) -> Self {
        match driver {
            "postgres" | "postgresql" => Placeholder::Dollar,
            _ => Placeholder::Question,
        }
    }

    /// Renders the placeholder for the 1-based parameter `n`.
    pub fn render(self, n: usize) -> String {
        match self {
            Placeholder::Question => "?".to_string(),
            Placeholder::Dollar => format!("${n}"),
        }
    }
}

/// Options for [`SqlWriter`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SqlOptions {
    /// Target table. Required.
    pub table: String,
    /// Header key to column name. Unmapped keys are used as-is.
    pub column_mapping: HashMap<String, String>,
    pub placeholder: Placeholder,
}

impl SqlOptions {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ..Default::default()
        }
    }

    pub fn with_column(mut self, key: impl Into<String>, column: impl Into<String>) -> Self {
        self.column_mapping.insert(key.into(), column.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: Placeholder) -> Self {
        self.placeholder = placeholder;
        self
    }
}

/// A parameterised `INSERT` and its bind values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertStatement {
    pub sql: String,
    pub params: Vec<String>,
}

/// A database connection able to run statements in a transaction.
pub trait SqlExecutor {
    fn begin(&mut self) -> Result<()>;

    fn execute(&mut self, sql: &str, params: &[String]) -> Result<()>;

    fn commit(&mut self) -> Result<()>;

    fn rollback(&mut self) -> Result<()>;
}

/// Inserts every row into [`SqlOptions::table`].
#[derive(Debug, Clone, Default)]
pub struct SqlWriter {
    opts: SqlOptions,
}

impl SqlWriter {
    pub fn new(opts: SqlOptions) -> Self {
        Self { opts }
    }

    /// Target column names in header order, after mapping.
    pub fn columns(&self, dataset: &Dataset) -> Vec<String> {
        dataset
            .headers()
            .iter()
            .map(|h| {
                self.opts
                    .column_mapping
                    .get(&h.key)
                    .cloned()
                    .unwrap_or_else(|| h.key.clone())
            })
            .collect()
    }

    fn table(&self) -> Result<&str> {
        if self.opts.table.is_empty() {
            return Err(TabularError::InvalidOption {
                writer: "sql",
                message: "table name is required".to_string(),
            });
        }
        Ok(&self.opts.table)
    }

    fn insert_prefix(&self, dataset: &Dataset) -> Result<String> {
        Ok(format!(
            "INSERT INTO {} ({}) VALUES",
            self.table()?,
            self.columns(dataset).join(", ")
        ))
    }

    /// Builds the parameterised insert for `row`.
    pub fn insert_statement(
        &self,
        dataset: &Dataset,
        index: usize,
        row: &Row,
    ) -> Result<InsertStatement> {
        let params: Vec<String> = keyed_cells(dataset, index, row)?
            .into_iter()
            .map(|(_, cell)| cell.to_string())
            .collect();
        let placeholders: Vec<String> = (1..=params.len())
            .map(|n| self.opts.placeholder.render(n))
            .collect();
        Ok(InsertStatement {
            sql: format!(
                "{} ({})",
                self.insert_prefix(dataset)?,
                placeholders.join(", ")
            ),
            params,
        })
    }

    /// Inserts all rows through `executor` in one transaction.
    ///
    /// The first failing statement rolls the transaction back and its error
    /// is returned.
    pub fn execute(&self, dataset: &Dataset, executor: &mut dyn SqlExecutor) -> Result<()> {
        check_writable(dataset, self.name(), self.needs_headers())?;
        self.table()?;

        executor.begin()?;
        for (index, row) in dataset.rows().iter().enumerate() {
            let outcome = self
                .insert_statement(dataset, index, row)
                .and_then(|stmt| executor.execute(&stmt.sql, &stmt.params));
            if let Err(err) = outcome {
                // The statement error is the one worth reporting.
                let _ = executor.rollback();
                return Err(err);
            }
        }
        executor.commit()
    }

    fn script(&self, dataset: &Dataset) -> Result<String> {
        let prefix = self.insert_prefix(dataset)?;
        let mut out = String::from("BEGIN;\n");
        for (index, row) in dataset.rows().iter().enumerate() {
            let values: Vec<String> = keyed_cells(dataset, index, row)?
                .into_iter()
                .map(|(_, cell)| quote_literal(cell))
                .collect();
            out.push_str(&format!("{prefix} ({});\n", values.join(", ")));
        }
        out.push_str("COMMIT;\n");
        Ok(out)
    }
}

impl Writer for SqlWriter {
    fn name(&self) -> &str {
        "sql"
    }

    fn needs_headers(&self) -> bool {
        true
    }

    fn write(&self, dataset: &Dataset, sink: &mut dyn io::Write) -> Result<()> {
        let script = self.script(dataset)?;
        sink.write_all(script.as_bytes())?;
        Ok(())
    }
}

/// Quotes a string as a standard SQL literal, doubling embedded single
/// quotes. Backslashes pass through unchanged.
fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

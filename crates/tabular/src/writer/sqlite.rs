//! A [`SqlExecutor`] backed by an sqlx SQLite pool.
//!
//! [`SqlExecutor`] is synchronous, so the executor owns a current-thread
//! tokio runtime and blocks on each sqlx future. Do not call it from inside
//! another tokio runtime.

use std::future::Future;
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{Sqlite, Transaction};
use tokio::runtime::{Builder, Runtime};

use super::SqlExecutor;
use crate::error::{Result, TabularError};

/// Runs [`SqlWriter::execute`](super::SqlWriter::execute) transactions
/// against a SQLite database.
///
/// ```no_run
/// use tabular::{Dataset, Row, SqlOptions, SqlWriter, SqliteExecutor};
///
/// let mut ds = Dataset::new();
/// ds.add_header("name", "Name");
/// ds.push(Row::new(["Julia"]))?;
///
/// let mut db = SqliteExecutor::connect("sqlite://people.db")?;
/// SqlWriter::new(SqlOptions::new("people")).execute(&ds, &mut db)?;
/// # Ok::<(), tabular::TabularError>(())
/// ```
pub struct SqliteExecutor {
    tx: Option<Transaction<'static, Sqlite>>,
    pool: SqlitePool,
    // Dropped last, after the transaction and pool that run on it.
    runtime: Runtime,
}

impl SqliteExecutor {
    /// Opens `url` (e.g. `sqlite://people.db` or `sqlite::memory:`),
    /// creating the database file if it is missing.
    ///
    /// The pool holds a single connection so an in-memory database stays the
    /// same database across statements.
    pub fn connect(url: &str) -> Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        let options = SqliteConnectOptions::from_str(url)
            .map_err(sql_error)?
            .create_if_missing(true);
        let pool = runtime
            .block_on(
                SqlitePoolOptions::new()
                    .max_connections(1)
                    .connect_with(options),
            )
            .map_err(sql_error)?;
        Ok(Self {
            tx: None,
            pool,
            runtime,
        })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Runs `future` to completion on the executor's runtime.
    ///
    /// Useful for queries outside the insert transaction, such as creating
    /// the target table or reading rows back.
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }
}

impl SqlExecutor for SqliteExecutor {
    fn begin(&mut self) -> Result<()> {
        if self.tx.is_some() {
            return Err(TabularError::Sql("transaction already open".to_string()));
        }
        let tx = self.runtime.block_on(self.pool.begin()).map_err(sql_error)?;
        self.tx = Some(tx);
        Ok(())
    }

    fn execute(&mut self, sql: &str, params: &[String]) -> Result<()> {
        let tx = self
            .tx
            .as_mut()
            .ok_or_else(|| TabularError::Sql("no open transaction".to_string()))?;
        let mut query = sqlx::query(sql);
        for param in params {
            query = query.bind(param.as_str());
        }
        self.runtime
            .block_on(query.execute(&mut **tx))
            .map_err(sql_error)?;
        Ok(())
    }

    fn commit(&mut self) -> Result<()> {
        let tx = self
            .tx
            .take()
            .ok_or_else(|| TabularError::Sql("no open transaction".to_string()))?;
        self.runtime.block_on(tx.commit()).map_err(sql_error)
    }

    fn rollback(&mut self) -> Result<()> {
        match self.tx.take() {
            Some(tx) => self.runtime.block_on(tx.rollback()).map_err(sql_error),
            None => Ok(()),
        }
    }
}

fn sql_error(err: sqlx::Error) -> TabularError {
    TabularError::Sql(err.to_string())
}

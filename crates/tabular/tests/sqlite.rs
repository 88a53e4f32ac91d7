//! `SqlWriter::execute` against an in-memory SQLite database.

#![cfg(feature = "sqlite")]

use tabular::{
    Dataset, Row, SqlExecutor, SqlOptions, SqlWriter, SqliteExecutor, TabularError,
};

fn people() -> Dataset {
    let mut ds = Dataset::new();
    ds.add_header("id", "Id");
    ds.add_header("name", "First name");
    ds.append([Row::new(["1", "Julia"]), Row::new(["2", "O'Brien"])])
        .unwrap();
    ds
}

fn database() -> SqliteExecutor {
    let mut db = SqliteExecutor::connect("sqlite::memory:").unwrap();
    db.begin().unwrap();
    db.execute(
        "CREATE TABLE people (id INTEGER PRIMARY KEY, first_name TEXT NOT NULL)",
        &[],
    )
    .unwrap();
    db.commit().unwrap();
    db
}

fn names(db: &SqliteExecutor) -> Vec<String> {
    db.block_on(
        sqlx::query_scalar::<_, String>("SELECT first_name FROM people ORDER BY id")
            .fetch_all(db.pool()),
    )
    .unwrap()
}

fn writer() -> SqlWriter {
    SqlWriter::new(SqlOptions::new("people").with_column("name", "first_name"))
}

#[test]
fn test_commit_inserts_every_row() {
    let mut db = database();
    writer().execute(&people(), &mut db).unwrap();
    assert_eq!(names(&db), vec!["Julia", "O'Brien"]);
}

#[test]
fn test_failed_row_rolls_back_whole_batch() {
    let mut db = database();
    let mut ds = people();
    // Duplicate primary key on the last row.
    ds.push(Row::new(["1", "Emma"])).unwrap();

    let err = writer().execute(&ds, &mut db).unwrap_err();
    assert!(matches!(err, TabularError::Sql(_)));
    assert!(names(&db).is_empty());

    // The connection is usable again after the rollback.
    writer().execute(&people(), &mut db).unwrap();
    assert_eq!(names(&db).len(), 2);
}

#[test]
fn test_unknown_table_is_sql_error() {
    let mut db = database();
    let err = SqlWriter::new(SqlOptions::new("missing"))
        .execute(&people(), &mut db)
        .unwrap_err();
    assert!(matches!(err, TabularError::Sql(_)));
}

#[test]
fn test_execute_without_begin_fails() {
    let mut db = database();
    let err = db.execute("SELECT 1", &[]).unwrap_err();
    assert!(matches!(err, TabularError::Sql(_)));
    assert!(db.rollback().is_ok());
}

//! Transaction handling of `SqlWriter::execute` against a recording executor.

use tabular::{Dataset, Placeholder, Result, Row, SqlExecutor, SqlOptions, SqlWriter, TabularError};

#[derive(Default)]
struct Recorder {
    log: Vec<String>,
    executed: Vec<(String, Vec<String>)>,
    fail_on: Option<usize>,
}

impl SqlExecutor for Recorder {
    fn begin(&mut self) -> Result<()> {
        self.log.push("begin".into());
        Ok(())
    }

    fn execute(&mut self, sql: &str, params: &[String]) -> Result<()> {
        if self.fail_on == Some(self.executed.len()) {
            self.log.push("fail".into());
            return Err(TabularError::Sql("constraint violated".into()));
        }
        self.log.push("execute".into());
        self.executed.push((sql.to_string(), params.to_vec()));
        Ok(())
    }

    fn commit(&mut self) -> Result<()> {
        self.log.push("commit".into());
        Ok(())
    }

    fn rollback(&mut self) -> Result<()> {
        self.log.push("rollback".into());
        Ok(())
    }
}

fn people() -> Dataset {
    let mut ds = Dataset::new();
    ds.add_header("name", "First name");
    ds.add_header("age", "Age");
    ds.append([Row::new(["Julia", "40"]), Row::new(["John", "42"])])
        .unwrap();
    ds
}

fn postgres_writer() -> SqlWriter {
    SqlWriter::new(
        SqlOptions::new("people")
            .with_column("name", "first_name")
            .with_placeholder(Placeholder::for_driver("postgres")),
    )
}

#[test]
fn test_commits_all_rows() {
    let mut exec = Recorder::default();
    postgres_writer().execute(&people(), &mut exec).unwrap();

    assert_eq!(exec.log, vec!["begin", "execute", "execute", "commit"]);
    assert_eq!(
        exec.executed[1],
        (
            "INSERT INTO people (first_name, age) VALUES ($1, $2)".to_string(),
            vec!["John".to_string(), "42".to_string()]
        )
    );
}

#[test]
fn test_rolls_back_on_first_failure() {
    let mut exec = Recorder {
        fail_on: Some(1),
        ..Default::default()
    };
    let err = postgres_writer().execute(&people(), &mut exec).unwrap_err();

    assert!(matches!(err, TabularError::Sql(ref msg) if msg == "constraint violated"));
    assert_eq!(exec.log, vec!["begin", "execute", "fail", "rollback"]);
}

#[test]
fn test_question_placeholders_by_default() {
    let mut exec = Recorder::default();
    SqlWriter::new(SqlOptions::new("people"))
        .execute(&people(), &mut exec)
        .unwrap();
    assert_eq!(
        exec.executed[0].0,
        "INSERT INTO people (name, age) VALUES (?, ?)"
    );
}

#[test]
fn test_preconditions_checked_before_begin() {
    let mut exec = Recorder::default();
    let err = postgres_writer()
        .execute(&Dataset::new(), &mut exec)
        .unwrap_err();
    assert!(err.is_empty_dataset());
    assert!(exec.log.is_empty());

    let mut headerless = Dataset::new();
    headerless.push(Row::new(["x"])).unwrap();
    let err = postgres_writer()
        .execute(&headerless, &mut exec)
        .unwrap_err();
    assert!(matches!(err, TabularError::HeadersRequired { .. }));
    assert!(exec.log.is_empty());
}

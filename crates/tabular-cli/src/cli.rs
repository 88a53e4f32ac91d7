//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use serde::Deserialize;

use crate::logging::LogFormat;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "tabular",
    version,
    about = "Convert a delimited text table to CSV, HTML, JSON, XML, YAML, LaTeX or SQL",
    long_about = "Reads a delimited text table, optionally filters rows by tag, sorts and \
                  slices it, then writes it in the chosen format.\n\n\
                  Tags come from a column of `|`-separated labels named with --tag-column."
)]
pub struct Cli {
    /// Input file, or `-` for stdin.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output format (default: csv, or the config file's `format`).
    #[arg(short, long, value_enum)]
    pub format: Option<Format>,

    /// Input field delimiter (default: `,`).
    #[arg(short, long, value_name = "CHAR")]
    pub delimiter: Option<char>,

    /// Treat the first line as data rather than column titles.
    #[arg(long)]
    pub no_header: bool,

    /// Column holding `|`-separated row tags. It is removed from the table.
    #[arg(long, value_name = "KEY")]
    pub tag_column: Option<String>,

    /// Keep only rows with this tag.
    #[arg(long, value_name = "TAG")]
    pub find: Option<String>,

    /// Keep only rows with at least one of these tags.
    #[arg(long, value_name = "TAGS", value_delimiter = ',')]
    pub find_any: Vec<String>,

    /// Keep only rows with all of these tags.
    #[arg(long, value_name = "TAGS", value_delimiter = ',')]
    pub find_all: Vec<String>,

    /// Sort rows by this column key.
    #[arg(long, value_name = "KEY")]
    pub sort: Option<String>,

    /// Sort descending.
    #[arg(long, requires = "sort")]
    pub reverse: bool,

    /// Keep only rows START..END (after filtering and sorting).
    #[arg(long, value_name = "START:END", value_parser = parse_slice)]
    pub slice: Option<SliceRange>,

    /// Indentation for HTML, JSON and XML output.
    #[arg(long, value_name = "N")]
    pub indent: Option<usize>,

    /// Target table for SQL output.
    #[arg(long, value_name = "NAME")]
    pub table: Option<String>,

    /// Insert rows into this SQLite database (e.g. sqlite://people.db) in one
    /// transaction instead of writing SQL text. Needs the `sqlite` feature.
    #[arg(long, value_name = "URL", conflicts_with = "output")]
    pub database: Option<String>,

    /// Write output to a file instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// YAML file with writer options.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log output format.
    #[arg(long = "log-format", value_enum, default_value = "compact")]
    pub log_format: LogFormatArg,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Csv,
    Html,
    Json,
    Xml,
    Yaml,
    Latex,
    Sql,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

/// A half-open row range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceRange {
    pub start: usize,
    pub end: usize,
}

fn parse_slice(s: &str) -> Result<SliceRange, String> {
    let (start, end) = s
        .split_once(':')
        .ok_or_else(|| format!("expected START:END, got '{s}'"))?;
    let start: usize = start
        .trim()
        .parse()
        .map_err(|_| format!("invalid slice start '{start}'"))?;
    let end: usize = end
        .trim()
        .parse()
        .map_err(|_| format!("invalid slice end '{end}'"))?;
    if start > end {
        return Err(format!("slice start {start} is past end {end}"));
    }
    Ok(SliceRange { start, end })
}

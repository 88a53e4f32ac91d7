//! The load, transform and write pipeline behind the `tabular` binary.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use tabular::Dataset;
use tracing::{debug, info};

use crate::cli::Cli;
use crate::config::Config;
use crate::load::{load, LoadOptions};

/// Runs the command, writing to `stdout` unless `--output` is given.
pub fn run(cli: &Cli, stdout: &mut dyn Write) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    config.apply_cli(cli);
    debug!(format = ?config.format(), "resolved configuration");

    let opts = LoadOptions {
        delimiter: config.delimiter.unwrap_or(','),
        has_header: !cli.no_header,
        tag_column: config.tag_column.clone(),
    };
    let mut ds = read_input(&cli.input, &opts)?;
    info!(rows = ds.len(), columns = ds.columns(), "loaded input");

    transform(&mut ds, cli)?;
    info!(rows = ds.len(), "applied filters");

    if let Some(url) = &cli.database {
        return insert_into(&ds, &config, url);
    }

    let writer = config.writer();
    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut sink = BufWriter::new(file);
            ds.write(writer.as_ref(), &mut sink)?;
            sink.flush()?;
        }
        None => ds.write(writer.as_ref(), stdout)?,
    }
    info!(writer = writer.name(), "wrote output");
    Ok(())
}

#[cfg(feature = "sqlite")]
fn insert_into(ds: &Dataset, config: &Config, url: &str) -> Result<()> {
    let mut db = tabular::SqliteExecutor::connect(url)
        .with_context(|| format!("failed to open database {url}"))?;
    tabular::SqlWriter::new(config.sql.clone())
        .execute(ds, &mut db)
        .with_context(|| format!("failed to insert into {}", config.sql.table))?;
    info!(rows = ds.len(), table = %config.sql.table, "inserted rows");
    Ok(())
}

#[cfg(not(feature = "sqlite"))]
fn insert_into(_ds: &Dataset, _config: &Config, url: &str) -> Result<()> {
    bail!("cannot open {url}: tabular was built without the sqlite feature")
}

fn read_input(input: &Path, opts: &LoadOptions) -> Result<Dataset> {
    if input == Path::new("-") {
        return load(io::stdin().lock(), opts).context("failed to read stdin");
    }
    let file =
        File::open(input).with_context(|| format!("failed to open {}", input.display()))?;
    load(file, opts).with_context(|| format!("failed to read {}", input.display()))
}

/// Applies tag filters, then sorting, then slicing.
pub fn transform(ds: &mut Dataset, cli: &Cli) -> Result<()> {
    if let Some(tag) = &cli.find {
        ds.find(tag);
    }
    if !cli.find_any.is_empty() {
        ds.find_any(&cli.find_any);
    }
    if !cli.find_all.is_empty() {
        ds.find_all(&cli.find_all);
    }
    if let Some(key) = &cli.sort {
        if !ds.has_col(key) {
            bail!("cannot sort by unknown column '{key}'");
        }
        ds.sort(key, cli.reverse);
    }
    if let Some(range) = cli.slice {
        if range.end > ds.len() {
            bail!(
                "slice {}:{} is out of range for {} rows",
                range.start,
                range.end,
                ds.len()
            );
        }
        ds.slice(range.start, range.end);
    }
    Ok(())
}

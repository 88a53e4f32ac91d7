//! YAML configuration file.
//!
//! Every section is optional. Command-line flags win over file values.
//!
//! ```yaml
//! format: html
//! delimiter: ";"
//! tag_column: tags
//! html:
//!   indent: 2
//!   caption: People
//!   table_class: table
//! sql:
//!   table: people
//!   placeholder: dollar
//!   column_mapping:
//!     name: first_name
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tabular::{
    CsvOptions, CsvWriter, HtmlOptions, HtmlWriter, JsonOptions, JsonWriter, LatexOptions,
    LatexWriter, SqlOptions, SqlWriter, Writer, XmlOptions, XmlWriter, YamlWriter,
};

use crate::cli::{Cli, Format};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub format: Option<Format>,
    /// Input delimiter.
    pub delimiter: Option<char>,
    pub tag_column: Option<String>,
    pub csv: CsvOptions,
    pub html: HtmlOptions,
    pub json: JsonOptions,
    pub xml: XmlOptions,
    pub latex: LatexOptions,
    pub sql: SqlOptions,
}

impl Config {
    pub fn from_yaml(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_yaml(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Folds command-line overrides into the file values.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(format) = cli.format {
            self.format = Some(format);
        }
        if let Some(delimiter) = cli.delimiter {
            self.delimiter = Some(delimiter);
        }
        if let Some(tag_column) = &cli.tag_column {
            self.tag_column = Some(tag_column.clone());
        }
        if let Some(indent) = cli.indent {
            self.html.indent = indent;
            self.json.indent = indent;
            self.xml.indent = indent;
        }
        if let Some(table) = &cli.table {
            self.sql.table = table.clone();
        }
    }

    pub fn format(&self) -> Format {
        self.format.unwrap_or_default()
    }

    /// Builds the writer for the configured format.
    pub fn writer(&self) -> Box<dyn Writer> {
        match self.format() {
            Format::Csv => Box::new(CsvWriter::new(self.csv.clone())),
            Format::Html => Box::new(HtmlWriter::new(self.html.clone())),
            Format::Json => Box::new(JsonWriter::new(self.json.clone())),
            Format::Xml => Box::new(XmlWriter::new(self.xml.clone())),
            Format::Yaml => Box::new(YamlWriter::new()),
            Format::Latex => Box::new(LatexWriter::new(self.latex.clone())),
            Format::Sql => Box::new(SqlWriter::new(self.sql.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tabular::Placeholder;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(Config::from_yaml("{}").unwrap(), Config::default());
        assert_eq!(Config::default().format(), Format::Csv);
    }

    #[test]
    fn test_sections() {
        let config = Config::from_yaml(
            "format: sql\n\
             delimiter: ';'\n\
             csv:\n  use_crlf: true\n\
             xml:\n  row_elem: person\n\
             sql:\n  table: people\n  placeholder: dollar\n  column_mapping:\n    name: first_name\n",
        )
        .unwrap();
        assert_eq!(config.format(), Format::Sql);
        assert_eq!(config.delimiter, Some(';'));
        assert!(config.csv.use_crlf);
        assert_eq!(config.csv.delimiter, ',');
        assert_eq!(config.xml.row_elem, "person");
        assert_eq!(config.xml.parent_elem, "rows");
        assert_eq!(config.sql.placeholder, Placeholder::Dollar);
        assert_eq!(config.sql.column_mapping["name"], "first_name");
        assert_eq!(config.writer().name(), "sql");
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(Config::from_yaml("colour: blue\n").is_err());
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut config = Config::from_yaml("format: json\njson:\n  indent: 4\n").unwrap();
        let cli = Cli::parse_from(["tabular", "in.csv", "--format", "xml", "--indent", "2"]);
        config.apply_cli(&cli);
        assert_eq!(config.format(), Format::Xml);
        assert_eq!(config.xml.indent, 2);
        assert_eq!(config.json.indent, 2);
    }
}

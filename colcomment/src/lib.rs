//! Command-line interface for colcomment.
//!
//! Parses flags (with `COLCOMMENT_*` environment variable fallbacks) into a
//! [`Configuration`]. The binary itself lives in `main.rs`.

use clap::{Args, Parser};
use colcomment_core::config::{DEFAULT_AUTHOR, DEFAULT_OUTPUT_DIRECTORY};
use colcomment_core::{Configuration, InputSource};
use std::path::PathBuf;

/// CLI argument structure
#[derive(Parser, Debug)]
#[command(name = "colcomment")]
#[command(about = "Generate SQL column comments from Excel files")]
#[command(version)]
#[command(long_about = "
colcomment - Liquibase column comments from spreadsheets

Reads every {table_name}.xlsx workbook and writes {table_name}.sql with one
`comment on {schema}.{table_name}.{column} is '{description}';` statement per
row of the first sheet. The sheet needs 'Column' and 'Description' headers;
rows without a description are skipped.

Output uses Liquibase formatted-SQL notation. It runs as plain SQL and can be
added to a change-log later.

INPUT SELECTION:
  --directory DIR     every .xlsx file in DIR (default: input)
  --filename FILE     exactly FILE; only used together with --directory ''
  --directory ''      FILE if given, else every .xlsx file in the
                      current directory

EXAMPLES:
  colcomment --schema hr
  colcomment -s hr -a jdoe -d sheets -o changelog
  colcomment -s hr -d '' -f employees.xlsx
")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Changeset author
    #[arg(
        short,
        long,
        env = "COLCOMMENT_AUTHOR",
        default_value = DEFAULT_AUTHOR,
        help = "Author recorded in every changeset header"
    )]
    pub author: String,

    /// Single workbook to process
    #[arg(
        short,
        long,
        env = "COLCOMMENT_FILENAME",
        value_name = "FILE",
        help = "Specific Excel file to process when --directory is empty"
    )]
    pub filename: Option<String>,

    /// Directory scanned for workbooks
    #[arg(
        short,
        long,
        env = "COLCOMMENT_DIRECTORY",
        value_name = "DIR",
        help = "Directory containing Excel files [default: input]"
    )]
    pub directory: Option<String>,

    /// Directory the SQL files are written to
    #[arg(
        short = 'o',
        long = "output_directory",
        visible_alias = "output-directory",
        env = "COLCOMMENT_OUTPUT_DIRECTORY",
        value_name = "DIR",
        default_value = DEFAULT_OUTPUT_DIRECTORY,
        help = "Directory to save the generated SQL files"
    )]
    pub output_directory: PathBuf,

    /// Target schema
    #[arg(
        short,
        long,
        env = "COLCOMMENT_SCHEMA",
        help = "Target schema prefixed to every table name"
    )]
    pub schema: String,
}

/// Flags shared by every invocation
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Increase verbosity
    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        help = "Increase verbosity (-v, -vv)"
    )]
    pub verbose: u8,

    /// Suppress log output
    #[arg(short, long, help = "Suppress all log output except errors")]
    pub quiet: bool,
}

impl Cli {
    /// Resolves the parsed flags into the run configuration.
    pub fn configuration(&self) -> Configuration {
        let input = InputSource::resolve(self.directory.as_deref(), self.filename.as_deref());

        Configuration::new(self.schema.clone())
            .with_author(self.author.clone())
            .with_input(input)
            .with_output_directory(self.output_directory.clone())
    }
}

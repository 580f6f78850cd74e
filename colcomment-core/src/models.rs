//! Core data models for the comment generation pipeline.
//!
//! Values here are built, used and dropped within a single run. Only the
//! rendered [`OutputDocument`]s outlive the process, as `.sql` files.

use std::path::{Path, PathBuf};

use crate::error::{ColCommentError, Result};

/// First line of every generated change-log file.
pub const LIQUIBASE_HEADER: &str = "-- liquibase formatted sql";

/// A workbook to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    /// Workbook location as enumerated
    pub path: PathBuf,
    /// File stem, used as the table name in the generated SQL
    pub table_name: String,
}

impl InputFile {
    /// Creates an input file, deriving the table name from the file stem.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the path has no file name.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let table_name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .filter(|stem| !stem.is_empty())
            .ok_or_else(|| {
                ColCommentError::configuration(format!(
                    "Cannot derive a table name from '{}'",
                    path.display()
                ))
            })?;

        Ok(Self { path, table_name })
    }

    /// Path of the workbook
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// One data row of a workbook's first sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// 0-based position among the data rows (header row excluded)
    pub index: usize,
    /// Value of the `Column` cell
    pub column: String,
    /// Value of the `Description` cell, `None` when empty
    pub description: Option<String>,
}

impl Row {
    /// Creates a row, treating an empty description as absent. Whitespace
    /// is kept as written.
    pub fn new(index: usize, column: impl Into<String>, description: Option<String>) -> Self {
        Self {
            index,
            column: column.into(),
            description: description.filter(|d| !d.is_empty()),
        }
    }

    /// Whether the row carries a description
    pub fn is_described(&self) -> bool {
        self.description.is_some()
    }

    /// Change-log sequence number for this row.
    pub fn sequence(&self) -> usize {
        self.index.saturating_add(1)
    }
}

/// A single Liquibase changeset commenting one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeSet {
    /// Author half of the changeset id
    pub author: String,
    /// Numeric half of the changeset id
    pub sequence: usize,
    /// The `comment on ...;` statement
    pub statement: String,
}

impl ChangeSet {
    /// The `-- changeset author:id` line introducing the statement.
    pub fn header(&self) -> String {
        format!("-- changeset {}:{}", self.author, self.sequence)
    }
}

impl std::fmt::Display for ChangeSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.header())?;
        writeln!(f, "{}", self.statement)?;
        writeln!(f)
    }
}

/// The change-log generated for one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDocument {
    /// Table the comments belong to; also names the output file
    pub table_name: String,
    /// Changesets in sheet order
    pub changesets: Vec<ChangeSet>,
}

impl OutputDocument {
    /// Creates a document for `table_name`.
    pub fn new(table_name: impl Into<String>, changesets: Vec<ChangeSet>) -> Self {
        Self {
            table_name: table_name.into(),
            changesets,
        }
    }

    /// Renders the whole file: header, blank line, then one
    /// `(header, statement, blank)` triple per changeset.
    pub fn render(&self) -> String {
        let mut rendered = format!("{}\n\n", LIQUIBASE_HEADER);
        for changeset in &self.changesets {
            rendered.push_str(&changeset.to_string());
        }
        rendered
    }

    /// Number of comment statements in the document
    pub fn statement_count(&self) -> usize {
        self.changesets.len()
    }
}

/// What happened to one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// Workbook that was read
    pub input: PathBuf,
    /// `.sql` file that was written
    pub output: PathBuf,
    /// Comment statements written
    pub statements: usize,
    /// Rows dropped for lacking a description
    pub skipped_rows: usize,
}

/// Totals for a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// One report per processed file, in processing order
    pub files: Vec<FileReport>,
}

impl RunSummary {
    /// Records a processed file
    pub fn add_file(&mut self, report: FileReport) {
        self.files.push(report);
    }

    /// Number of files processed
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Total comment statements written across all files
    pub fn statement_count(&self) -> usize {
        self.files.iter().map(|f| f.statements).sum()
    }

    /// Total rows dropped across all files
    pub fn skipped_count(&self) -> usize {
        self.files.iter().map(|f| f.skipped_rows).sum()
    }
}

/// Result of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// No workbook matched the input source; nothing was written
    NoInputFiles,
    /// Every input file was processed
    Completed(RunSummary),
}

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;

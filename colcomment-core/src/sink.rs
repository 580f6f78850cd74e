//! Change-log file output.
//!
//! Each document is written to `{output_directory}/{table_name}.sql`,
//! truncating any previous file, and echoed to a second writer (stdout in
//! the binary) as it goes.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use tracing::info;

use crate::error::{ColCommentError, Result};
use crate::models::{LIQUIBASE_HEADER, OutputDocument};

/// Writes `document` into `out` and echoes each changeset to `echo`.
///
/// The file gets the two-line Liquibase header first; the echo only sees
/// the `(header, statement, blank)` triples.
///
/// # Errors
///
/// Propagates any write failure from either writer.
pub fn write_document<W, E>(
    document: &OutputDocument,
    out: &mut W,
    echo: &mut E,
) -> std::io::Result<()>
where
    W: Write,
    E: Write,
{
    writeln!(out, "{}", LIQUIBASE_HEADER)?;
    writeln!(out)?;

    for changeset in &document.changesets {
        let header = changeset.header();

        writeln!(echo, "{}", header)?;
        writeln!(echo, "{}", changeset.statement)?;
        writeln!(echo)?;

        writeln!(out, "{}", header)?;
        writeln!(out, "{}", changeset.statement)?;
        writeln!(out)?;
    }

    Ok(())
}

/// Writes documents as `.sql` files into one directory.
#[derive(Debug, Clone)]
pub struct SqlFileSink {
    output_directory: PathBuf,
}

impl SqlFileSink {
    /// Creates a sink writing into `output_directory`.
    pub fn new(output_directory: impl Into<PathBuf>) -> Self {
        Self {
            output_directory: output_directory.into(),
        }
    }

    /// Path the document for `table_name` is written to.
    pub fn path_for(&self, table_name: &str) -> PathBuf {
        self.output_directory.join(format!("{}.sql", table_name))
    }

    /// Writes `document`, creating the output directory if needed, and
    /// returns the path of the written file. The file is flushed and closed
    /// before this returns.
    ///
    /// # Errors
    ///
    /// Returns an I/O error naming the directory or file that could not be
    /// created or written.
    pub fn write<E: Write>(&self, document: &OutputDocument, echo: &mut E) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_directory).map_err(|e| {
            ColCommentError::io(
                format!(
                    "Failed to create output directory {}",
                    self.output_directory.display()
                ),
                e,
            )
        })?;

        let path = self.path_for(&document.table_name);
        let file = File::create(&path).map_err(|e| {
            ColCommentError::io(format!("Failed to create {}", path.display()), e)
        })?;

        let mut out = BufWriter::new(file);
        write_document(document, &mut out, echo)
            .and_then(|()| out.flush())
            .map_err(|e| ColCommentError::io(format!("Failed to write {}", path.display()), e))?;

        info!(
            "Wrote {} statement(s) to {}",
            document.statement_count(),
            path.display()
        );

        Ok(path)
    }
}

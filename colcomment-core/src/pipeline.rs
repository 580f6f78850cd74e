//! End-to-end run: enumerate, extract, format, write.
//!
//! Files are processed one after another. The first failure aborts the run;
//! files written before it are left in place.

use std::io::Write;

use tracing::{debug, info};

use crate::config::Configuration;
use crate::enumerate::enumerate_inputs;
use crate::error::{ColCommentError, Result};
use crate::extract::extract_rows;
use crate::format::build_document;
use crate::models::{FileReport, InputFile, RunOutcome, RunSummary};
use crate::sink::SqlFileSink;

/// Printed when the input source matches no workbook.
pub const NO_FILES_MESSAGE: &str = "No Excel files found to process.";

/// Runs the whole conversion for `config`, echoing generated SQL and
/// progress messages to `echo`.
///
/// When no workbook is found, [`NO_FILES_MESSAGE`] is echoed and nothing is
/// created on disk.
///
/// # Errors
///
/// Returns the first configuration, discovery, workbook or output error.
pub fn run<E: Write>(config: &Configuration, echo: &mut E) -> Result<RunOutcome> {
    config.validate()?;
    debug!("Resolved configuration: {:?}", config);

    let inputs = enumerate_inputs(&config.input)?;
    if inputs.is_empty() {
        info!("No workbooks matched {}", config.input);
        writeln!(echo, "{}", NO_FILES_MESSAGE)
            .map_err(|e| ColCommentError::io("Failed to write to standard output", e))?;
        return Ok(RunOutcome::NoInputFiles);
    }

    info!("Processing {} workbook(s) from {}", inputs.len(), config.input);

    let sink = SqlFileSink::new(&config.output_directory);
    let mut summary = RunSummary::default();
    for input in &inputs {
        summary.add_file(process_file(input, config, &sink, echo)?);
    }

    info!(
        "Generated {} statement(s) across {} file(s), skipped {} row(s) without description",
        summary.statement_count(),
        summary.file_count(),
        summary.skipped_count()
    );

    Ok(RunOutcome::Completed(summary))
}

/// Converts a single workbook into its `.sql` change-log.
///
/// # Errors
///
/// Returns workbook errors from extraction and I/O errors from the sink.
pub fn process_file<E: Write>(
    input: &InputFile,
    config: &Configuration,
    sink: &SqlFileSink,
    echo: &mut E,
) -> Result<FileReport> {
    debug!("Reading {}", input.path().display());

    let extracted = extract_rows(input)?;
    let document = build_document(&extracted.rows, &input.table_name, config);
    let output = sink.write(&document, echo)?;

    writeln!(echo, "SQL file generated: {}", output.display())
        .map_err(|e| ColCommentError::io("Failed to write to standard output", e))?;

    Ok(FileReport {
        input: input.path.clone(),
        output,
        statements: document.statement_count(),
        skipped_rows: extracted.skipped,
    })
}

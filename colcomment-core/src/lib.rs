//! Core pipeline for colcomment.
//!
//! Reads column descriptions from `.xlsx` workbooks and turns them into
//! Liquibase formatted-SQL change-logs of `comment on` statements, one
//! `.sql` file per workbook.
//!
//! # Pipeline
//! - [`enumerate`] expands the configured input into workbook paths
//! - [`extract`] loads the first sheet and drops rows without a description
//! - [`format`] turns each remaining row into a changeset
//! - [`sink`] writes the change-log and echoes it
//! - [`pipeline`] runs the stages file by file
//!
//! # Example
//! ```rust,no_run
//! use colcomment_core::{Configuration, RunOutcome, run};
//!
//! let config = Configuration::new("myschema").with_author("dba");
//! let mut stdout = std::io::stdout().lock();
//!
//! match run(&config, &mut stdout)? {
//!     RunOutcome::NoInputFiles => {}
//!     RunOutcome::Completed(summary) => {
//!         println!("{} statements", summary.statement_count());
//!     }
//! }
//! # Ok::<(), colcomment_core::ColCommentError>(())
//! ```

pub mod config;
pub mod enumerate;
pub mod error;
pub mod extract;
pub mod format;
pub mod logging;
pub mod models;
pub mod pipeline;
pub mod sink;

// Re-export commonly used types
pub use config::{Configuration, InputSource};
pub use error::{ColCommentError, Result};
pub use logging::init_logging;
pub use models::{ChangeSet, FileReport, InputFile, OutputDocument, Row, RunOutcome, RunSummary};
pub use pipeline::{NO_FILES_MESSAGE, run};

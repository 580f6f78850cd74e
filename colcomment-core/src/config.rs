//! Run configuration.
//!
//! A [`Configuration`] is resolved once at startup from command-line flags
//! (or their environment variable fallbacks) and is read-only afterwards.

use std::path::PathBuf;

use crate::error::{ColCommentError, Result};

/// Author recorded in changeset headers when none is supplied.
pub const DEFAULT_AUTHOR: &str = "generated";

/// Directory scanned for workbooks when no input flag is supplied.
pub const DEFAULT_INPUT_DIRECTORY: &str = "input";

/// Directory the generated SQL files are written to by default.
pub const DEFAULT_OUTPUT_DIRECTORY: &str = "output";

/// Where the workbooks to process come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Every workbook directly inside a directory
    Directory(PathBuf),
    /// Exactly one workbook
    File(PathBuf),
    /// Every workbook in the current working directory
    WorkingDirectory,
}

impl InputSource {
    /// Resolves the input source from the raw `--directory` and `--filename`
    /// values.
    ///
    /// An absent directory means `input`, and a directory always wins over
    /// the filename. Only an explicitly empty directory hands over to the
    /// filename, or to the working directory when no filename is given.
    pub fn resolve(directory: Option<&str>, filename: Option<&str>) -> Self {
        let directory = directory.unwrap_or(DEFAULT_INPUT_DIRECTORY);
        if !directory.is_empty() {
            return Self::Directory(PathBuf::from(directory));
        }

        match filename.filter(|f| !f.is_empty()) {
            Some(file) => Self::File(PathBuf::from(file)),
            None => Self::WorkingDirectory,
        }
    }
}

impl Default for InputSource {
    fn default() -> Self {
        Self::Directory(PathBuf::from(DEFAULT_INPUT_DIRECTORY))
    }
}

impl std::fmt::Display for InputSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Directory(dir) => write!(f, "directory {}", dir.display()),
            Self::File(file) => write!(f, "file {}", file.display()),
            Self::WorkingDirectory => write!(f, "current directory"),
        }
    }
}

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// Author written into every changeset header
    pub author: String,
    /// Target schema prefixed to every table name
    pub schema: String,
    /// Workbooks to read
    pub input: InputSource,
    /// Directory the `.sql` files are written to
    pub output_directory: PathBuf,
}

impl Configuration {
    /// Creates a configuration for `schema` with every other setting at its
    /// default.
    pub fn new(schema: impl Into<String>) -> Self {
        Self {
            author: DEFAULT_AUTHOR.to_string(),
            schema: schema.into(),
            input: InputSource::default(),
            output_directory: PathBuf::from(DEFAULT_OUTPUT_DIRECTORY),
        }
    }

    /// Sets the changeset author.
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Sets the input source.
    #[must_use]
    pub fn with_input(mut self, input: InputSource) -> Self {
        self.input = input;
        self
    }

    /// Sets the output directory. An empty path means the current working
    /// directory.
    #[must_use]
    pub fn with_output_directory(mut self, output_directory: impl Into<PathBuf>) -> Self {
        let output_directory = output_directory.into();
        self.output_directory = if output_directory.as_os_str().is_empty() {
            PathBuf::from(".")
        } else {
            output_directory
        };
        self
    }

    /// Checks the settings that clap cannot enforce on its own.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the schema or author is blank.
    pub fn validate(&self) -> Result<()> {
        if self.schema.trim().is_empty() {
            return Err(ColCommentError::configuration("Schema must not be empty"));
        }
        if self.author.trim().is_empty() {
            return Err(ColCommentError::configuration("Author must not be empty"));
        }
        Ok(())
    }
}

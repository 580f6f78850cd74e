//! Input discovery.
//!
//! Expands an [`InputSource`] into the concrete, ordered list of workbooks
//! to process.

use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use tracing::{debug, trace};

use crate::config::InputSource;
use crate::error::{ColCommentError, Result};
use crate::models::InputFile;

/// Extension of the workbooks picked up from a directory.
pub const WORKBOOK_EXTENSION: &str = "xlsx";

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Lists the workbooks named by `source`.
///
/// Directory sources are scanned non-recursively for `*.xlsx` files, hidden
/// files excluded, in lexicographic order. A file source yields exactly that
/// file whether or not it exists; reading it is the extractor's job.
///
/// # Errors
///
/// Returns an error when the directory path cannot be turned into a glob
/// pattern or a directory entry cannot be read.
pub fn enumerate_inputs(source: &InputSource) -> Result<Vec<InputFile>> {
    let paths = match source {
        InputSource::Directory(dir) => matching_workbooks(dir)?,
        InputSource::File(file) => vec![file.clone()],
        InputSource::WorkingDirectory => matching_workbooks(Path::new(""))?,
    };

    debug!("Found {} input file(s) in {}", paths.len(), source);

    paths.into_iter().map(InputFile::new).collect()
}

/// Builds the `*.xlsx` pattern for `dir`, escaping any glob metacharacters in
/// the directory name itself.
fn workbook_pattern(dir: &Path) -> Result<String> {
    let wildcard = format!("*.{}", WORKBOOK_EXTENSION);

    if dir.as_os_str().is_empty() {
        return Ok(wildcard);
    }

    let dir = dir.to_str().ok_or_else(|| {
        ColCommentError::configuration(format!(
            "Input directory '{}' is not valid UTF-8",
            dir.display()
        ))
    })?;

    Ok(format!(
        "{}{}{}",
        Pattern::escape(dir),
        std::path::MAIN_SEPARATOR,
        wildcard
    ))
}

fn matching_workbooks(dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = workbook_pattern(dir)?;
    trace!("Scanning with pattern {}", pattern);

    let entries =
        glob::glob_with(&pattern, MATCH_OPTIONS).map_err(|source| ColCommentError::Pattern {
            pattern: pattern.clone(),
            source,
        })?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| {
            let context = format!("Failed to read {}", e.path().display());
            ColCommentError::io(context, std::io::Error::from(e))
        })?;
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    Ok(paths)
}

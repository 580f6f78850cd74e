//! Row extraction from `.xlsx` workbooks.
//!
//! Only the first worksheet is read. Its first row names the columns; the
//! `Column` and `Description` headers must both be present. Every cell is
//! treated as text; date cells render as `YYYY-MM-DD HH:MM:SS`.

use std::path::Path;

use calamine::{Data, DataType, Range, Reader, Xlsx, open_workbook};
use tracing::debug;

use crate::error::{ColCommentError, Result};
use crate::models::{InputFile, Row};

/// Header of the column holding column names.
pub const COLUMN_HEADER: &str = "Column";

/// Header of the column holding column descriptions.
pub const DESCRIPTION_HEADER: &str = "Description";

/// Rows kept from one workbook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedRows {
    /// Described rows, in sheet order
    pub rows: Vec<Row>,
    /// Rows dropped for lacking a description
    pub skipped: usize,
}

/// Loads `input` and keeps the rows that carry a description.
///
/// # Errors
///
/// Fails when the workbook cannot be read, has no data, or lacks one of the
/// required headers.
pub fn extract_rows(input: &InputFile) -> Result<ExtractedRows> {
    let rows = load_rows(input.path())?;
    let extracted = retain_described(rows);

    debug!(
        "{}: kept {} row(s), skipped {} without description",
        input.path().display(),
        extracted.rows.len(),
        extracted.skipped
    );

    Ok(extracted)
}

/// Loads every data row of the first worksheet of `path`.
///
/// # Errors
///
/// See [`extract_rows`].
pub fn load_rows(path: &Path) -> Result<Vec<Row>> {
    let mut workbook: Xlsx<_> =
        open_workbook(path).map_err(|e| ColCommentError::workbook(path, e))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ColCommentError::empty_workbook(path))?
        .map_err(|e| ColCommentError::workbook(path, e))?;

    rows_from_range(path, &range)
}

/// Drops rows without a description, keeping the original indices.
pub fn retain_described(rows: Vec<Row>) -> ExtractedRows {
    let total = rows.len();
    let rows: Vec<Row> = rows.into_iter().filter(Row::is_described).collect();
    let skipped = total.saturating_sub(rows.len());

    ExtractedRows { rows, skipped }
}

fn rows_from_range(path: &Path, range: &Range<Data>) -> Result<Vec<Row>> {
    let mut sheet_rows = range.rows();
    let header = sheet_rows
        .next()
        .ok_or_else(|| ColCommentError::empty_workbook(path))?;

    let column_at = header_position(header, COLUMN_HEADER)
        .ok_or_else(|| ColCommentError::missing_field(path, COLUMN_HEADER))?;
    let description_at = header_position(header, DESCRIPTION_HEADER)
        .ok_or_else(|| ColCommentError::missing_field(path, DESCRIPTION_HEADER))?;

    let rows = sheet_rows
        .enumerate()
        .map(|(index, cells)| {
            Row::new(
                index,
                cell_text(cells.get(column_at)).unwrap_or_default(),
                cell_text(cells.get(description_at)),
            )
        })
        .collect();

    Ok(rows)
}

fn header_position(header: &[Data], name: &str) -> Option<usize> {
    header
        .iter()
        .position(|cell| cell_text(Some(cell)).is_some_and(|text| text.trim() == name))
}

/// Text of a cell. Empty and error cells have none.
fn cell_text(cell: Option<&Data>) -> Option<String> {
    match cell? {
        Data::Empty | Data::Error(_) => None,
        Data::String(text) => Some(text.clone()),
        date @ Data::DateTime(_) => Some(
            date.as_datetime()
                .map_or_else(|| date.to_string(), |dt| dt.to_string()),
        ),
        other => Some(other.to_string()),
    }
}

//! Shared workbook fixtures for integration tests.

#![allow(dead_code)]
#![allow(clippy::expect_used)]

use std::path::{Path, PathBuf};

use rust_xlsxwriter::Workbook;

/// Writes a single-sheet workbook. `None` cells are left blank.
pub fn write_workbook(path: &Path, rows: &[&[Option<&str>]]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (r, row) in rows.iter().enumerate() {
        let r = u32::try_from(r).expect("row index fits in u32");
        for (c, cell) in row.iter().enumerate() {
            let c = u16::try_from(c).expect("column index fits in u16");
            if let Some(text) = cell {
                worksheet
                    .write_string(r, c, *text)
                    .expect("Failed to write cell");
            }
        }
    }

    workbook.save(path).expect("Failed to save workbook");
}

/// Writes `{dir}/{table}.xlsx` with the standard headers and returns its path.
pub fn write_table(dir: &Path, table: &str, rows: &[(&str, Option<&str>)]) -> PathBuf {
    let mut cells: Vec<Vec<Option<&str>>> = vec![vec![Some("Column"), Some("Description")]];
    cells.extend(rows.iter().map(|(column, description)| vec![Some(*column), *description]));
    let cells: Vec<&[Option<&str>]> = cells.iter().map(Vec::as_slice).collect();

    let path = dir.join(format!("{}.xlsx", table));
    write_workbook(&path, &cells);
    path
}

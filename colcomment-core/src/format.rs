//! Changeset formatting.
//!
//! Values are interpolated verbatim: quotes inside a column name or
//! description are not escaped.

use crate::config::Configuration;
use crate::models::{ChangeSet, OutputDocument, Row};

/// Builds the `comment on` statement for one column.
pub fn comment_statement(
    schema: &str,
    table_name: &str,
    column: &str,
    description: &str,
) -> String {
    format!(
        "comment on {}.{}.{} is '{}';",
        schema, table_name, column, description
    )
}

/// Lazily maps described rows of `table_name` to changesets.
///
/// The sequence number is the row's original index plus one, so rows
/// dropped earlier leave gaps. Rows without a description are skipped.
pub fn format_rows<'a>(
    rows: &'a [Row],
    table_name: &'a str,
    config: &'a Configuration,
) -> impl Iterator<Item = ChangeSet> + 'a {
    rows.iter().filter_map(move |row| {
        let description = row.description.as_deref()?;
        Some(ChangeSet {
            author: config.author.clone(),
            sequence: row.sequence(),
            statement: comment_statement(&config.schema, table_name, &row.column, description),
        })
    })
}

/// Formats every described row into the document for `table_name`.
pub fn build_document(rows: &[Row], table_name: &str, config: &Configuration) -> OutputDocument {
    OutputDocument::new(table_name, format_rows(rows, table_name, config).collect())
}

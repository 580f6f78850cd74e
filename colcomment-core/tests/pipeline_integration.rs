//! Integration tests for the full workbook-to-changelog pipeline.
//!
//! Workbooks are generated on the fly into temporary directories.

#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

mod common;

use std::fs;

use colcomment_core::{ColCommentError, Configuration, InputSource, RunOutcome, run};
use common::{write_table, write_workbook};
use tempfile::TempDir;

fn config_for(temp: &TempDir) -> Configuration {
    Configuration::new("myschema")
        .with_input(InputSource::Directory(temp.path().join("input")))
        .with_output_directory(temp.path().join("output"))
}

fn setup() -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp dir");
    fs::create_dir(temp.path().join("input")).unwrap();
    temp
}

#[test]
fn test_integration_employees_scenario() {
    let temp = setup();
    write_table(
        &temp.path().join("input"),
        "employees",
        &[("id", None), ("name", Some("Full name"))],
    );

    let mut echo = Vec::new();
    let outcome = run(&config_for(&temp), &mut echo).unwrap();

    let output = temp.path().join("output").join("employees.sql");
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "-- liquibase formatted sql\n\n\
         -- changeset generated:2\n\
         comment on myschema.employees.name is 'Full name';\n\n"
    );

    let echo = String::from_utf8(echo).unwrap();
    assert_eq!(
        echo,
        format!(
            "-- changeset generated:2\n\
             comment on myschema.employees.name is 'Full name';\n\n\
             SQL file generated: {}\n",
            output.display()
        )
    );

    let RunOutcome::Completed(summary) = outcome else {
        panic!("expected a completed run");
    };
    assert_eq!(summary.file_count(), 1);
    assert_eq!(summary.statement_count(), 1);
    assert_eq!(summary.skipped_count(), 1);
}

#[test]
fn test_integration_multiple_files_in_name_order() {
    let temp = setup();
    let input = temp.path().join("input");
    write_table(&input, "orders", &[("total", Some("Order total"))]);
    write_table(&input, "customers", &[("email", Some("Contact email"))]);
    fs::write(input.join("readme.txt"), "not a workbook").unwrap();

    let mut echo = Vec::new();
    let outcome = run(&config_for(&temp).with_author("dba"), &mut echo).unwrap();

    let RunOutcome::Completed(summary) = outcome else {
        panic!("expected a completed run");
    };
    let outputs: Vec<String> = summary
        .files
        .iter()
        .map(|f| f.output.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(outputs, vec!["customers.sql", "orders.sql"]);

    let echo = String::from_utf8(echo).unwrap();
    let customers = echo.find("comment on myschema.customers.email").unwrap();
    let orders = echo.find("comment on myschema.orders.total").unwrap();
    assert!(customers < orders);
    assert_eq!(echo.matches("-- changeset dba:1").count(), 2);
    assert!(!temp.path().join("output").join("readme.sql").exists());
}

#[test]
fn test_integration_sequence_uses_original_row_index() {
    let temp = setup();
    write_table(
        &temp.path().join("input"),
        "people",
        &[
            ("id", Some("Surrogate key")),
            ("tmp", None),
            ("legacy", None),
            ("email", Some("Work email")),
        ],
    );

    run(&config_for(&temp), &mut std::io::sink()).unwrap();

    let sql = fs::read_to_string(temp.path().join("output").join("people.sql")).unwrap();
    let headers: Vec<&str> = sql
        .lines()
        .filter(|line| line.starts_with("-- changeset"))
        .collect();
    assert_eq!(
        headers,
        vec!["-- changeset generated:1", "-- changeset generated:4"]
    );
    assert!(!sql.contains("tmp"));
    assert!(!sql.contains("legacy"));
}

#[test]
fn test_integration_blank_interior_row_keeps_numbering() {
    let temp = setup();
    write_workbook(
        &temp.path().join("input").join("audit.xlsx"),
        &[
            &[Some("Column"), Some("Description")],
            &[Some("id"), Some("Key")],
            &[None, None],
            &[Some("at"), Some("Timestamp")],
        ],
    );

    run(&config_for(&temp), &mut std::io::sink()).unwrap();

    let sql = fs::read_to_string(temp.path().join("output").join("audit.sql")).unwrap();
    assert!(sql.contains("-- changeset generated:1\ncomment on myschema.audit.id is 'Key';"));
    assert!(sql.contains("-- changeset generated:3\ncomment on myschema.audit.at is 'Timestamp';"));
}

#[test]
fn test_integration_rerun_overwrites_with_identical_content() {
    let temp = setup();
    write_table(
        &temp.path().join("input"),
        "employees",
        &[("id", Some("Key")), ("name", Some("Full name"))],
    );
    let output = temp.path().join("output").join("employees.sql");

    run(&config_for(&temp), &mut std::io::sink()).unwrap();
    let first = fs::read_to_string(&output).unwrap();

    run(&config_for(&temp), &mut std::io::sink()).unwrap();
    let second = fs::read_to_string(&output).unwrap();

    assert_eq!(first, second);
    assert_eq!(second.matches("-- liquibase formatted sql").count(), 1);
}

#[test]
fn test_integration_explicit_file_source() {
    let temp = setup();
    let path = write_table(temp.path(), "single", &[("code", Some("Lookup code"))]);
    write_table(&temp.path().join("input"), "ignored", &[("x", Some("y"))]);

    let config = Configuration::new("ref")
        .with_input(InputSource::File(path))
        .with_output_directory(temp.path().join("output"));
    run(&config, &mut std::io::sink()).unwrap();

    let sql = fs::read_to_string(temp.path().join("output").join("single.sql")).unwrap();
    assert!(sql.contains("comment on ref.single.code is 'Lookup code';"));
    assert!(!temp.path().join("output").join("ignored.sql").exists());
}

#[test]
fn test_integration_quotes_pass_through_unescaped() {
    let temp = setup();
    write_table(
        &temp.path().join("input"),
        "people",
        &[("nick", Some("Person's nickname"))],
    );

    run(&config_for(&temp), &mut std::io::sink()).unwrap();

    let sql = fs::read_to_string(temp.path().join("output").join("people.sql")).unwrap();
    assert!(sql.contains("comment on myschema.people.nick is 'Person's nickname';"));
}

#[test]
fn test_integration_missing_header_aborts_batch() {
    let temp = setup();
    let input = temp.path().join("input");
    write_workbook(
        &input.join("a_broken.xlsx"),
        &[&[Some("Column"), Some("Notes")], &[Some("id"), Some("Key")]],
    );
    write_table(&input, "b_valid", &[("id", Some("Key"))]);

    let error = run(&config_for(&temp), &mut std::io::sink()).unwrap_err();

    assert!(matches!(
        error,
        ColCommentError::MissingField { ref field, .. } if field == "Description"
    ));
    assert!(!temp.path().join("output").join("b_valid.sql").exists());
}

#[test]
fn test_integration_header_only_workbook_writes_header_only() {
    let temp = setup();
    write_table(&temp.path().join("input"), "empty_table", &[]);

    run(&config_for(&temp), &mut std::io::sink()).unwrap();

    let sql = fs::read_to_string(temp.path().join("output").join("empty_table.sql")).unwrap();
    assert_eq!(sql, "-- liquibase formatted sql\n\n");
}

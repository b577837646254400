use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::tempdir;

mod common;

#[test]
fn test_cli_help_lists_options() {
    let mut cmd = Command::new(cargo_bin!("hhse"));
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--decay-period-secs"))
        .stdout(predicate::str::contains("--catalog"));
}

#[test]
fn test_zero_decay_period_is_rejected() {
    let mut cmd = Command::new(cargo_bin!("hhse"));
    cmd.arg("--decay-period-secs").arg("0").arg("--port").arg("0");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("decay period must be greater than zero"));
}

#[test]
fn test_missing_catalog_file_is_rejected() {
    let dir = tempdir().unwrap();
    let mut cmd = Command::new(cargo_bin!("hhse"));
    cmd.arg("--catalog")
        .arg(dir.path().join("missing.csv"))
        .arg("--port")
        .arg("0");

    cmd.assert().failure();
}

#[test]
fn test_duplicate_catalog_ids_are_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog.csv");
    common::write_catalog_csv(&path, &[(1, "Stella", 540), (1, "Peroni", 500)]).unwrap();

    let mut cmd = Command::new(cargo_bin!("hhse"));
    cmd.arg("--catalog").arg(&path).arg("--port").arg("0");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("duplicate product id 1"));
}

#[test]
fn test_malformed_catalog_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog.csv");
    std::fs::write(&path, "id, name, base_price\nabc, Stella, 540\n").unwrap();

    let mut cmd = Command::new(cargo_bin!("hhse"));
    cmd.arg("--catalog").arg(&path).arg("--port").arg("0");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("CSV error"));
}

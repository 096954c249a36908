#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A command isolated from the user's config and environment, run inside `dir`.
fn catalog_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("catalog"));
    cmd.current_dir(dir)
        .env("CATALOG_CONFIG_DIR", dir.join("config"))
        .env_remove("CATALOG_DATA_FILE")
        .env_remove("CATALOG_DATA_DIR")
        .env_remove("CATALOG_AUTOSAVE")
        .env_remove("RUST_LOG");
    cmd
}

fn add(dir: &Path, id: &str, name: &str, description: &str, category: &str) {
    catalog_cmd(dir)
        .args(["add", id, name, description, category])
        .assert()
        .success()
        .stdout(predicate::str::contains("Item added."));
}

#[test]
fn test_add_list_and_sorted_list() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    add(dir, "30", "Bolt", "M8 x 40", "Hardware");
    add(dir, "10", "Anvil", "Cast iron", "Tools");
    add(dir, "20", "Chisel", "25mm", "Tools");

    assert!(dir.join("catalog.json").is_file());

    let output = catalog_cmd(dir).args(["list"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let bolt = stdout.find("Bolt").unwrap();
    let anvil = stdout.find("Anvil").unwrap();
    assert!(bolt < anvil, "insertion order expected:\n{}", stdout);

    let output = catalog_cmd(dir).args(["list", "--sorted"]).output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let ids: Vec<&str> = stdout
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    assert_eq!(ids, vec!["10", "20", "30"]);
}

#[test]
fn test_duplicate_id_fails_with_exit_code() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), "1", "Pen", "Blue", "Office");

    catalog_cmd(temp.path())
        .args(["add", "1", "Pencil", "HB", "Office"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: ID must be unique"));

    catalog_cmd(temp.path())
        .args(["get", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pen"))
        .stdout(predicate::str::contains("Pencil").not());
}

#[test]
fn test_update_delete_and_not_found() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    add(dir, "5", "Lamp", "Desk", "Lighting");

    catalog_cmd(dir)
        .args(["update", "5", "Floor Lamp", "Tall", "Lighting"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Item updated."));
    catalog_cmd(dir)
        .args(["get", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Floor Lamp"));

    catalog_cmd(dir)
        .args(["rm", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Item deleted."));
    catalog_cmd(dir)
        .args(["delete", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Item not found: 5"));
    catalog_cmd(dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No items."));
}

#[test]
fn test_search_is_case_insensitive() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    add(dir, "1", "Hammer", "Claw", "Tools");
    add(dir, "2", "Nail", "50mm", "Hardware");

    catalog_cmd(dir)
        .args(["search", "TOOL"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hammer"))
        .stdout(predicate::str::contains("Nail").not());
    catalog_cmd(dir)
        .args(["search", "plumbing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No items match the search."));
}

#[test]
fn test_data_dir_and_file_flags() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    catalog_cmd(dir)
        .args(["--data-dir", "store", "--file", "shop.json"])
        .args(["add", "-3", "Rope", "10m", "Outdoor"])
        .assert()
        .success();
    assert!(dir.join("store").join("shop.json").is_file());
    assert!(!dir.join("catalog.json").exists());

    catalog_cmd(dir)
        .args(["get", "-3", "--data-dir", "store", "--file", "shop.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rope"));
}

#[test]
fn test_config_file_sets_data_file() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    fs::write(dir.join("catalog.toml"), "data_file = \"configured.json\"\n").unwrap();

    add(dir, "1", "Cup", "Mug", "Kitchen");
    assert!(dir.join("configured.json").is_file());
}

#[test]
fn test_corrupt_snapshot_is_reported() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("catalog.json"), "{ not json").unwrap();

    catalog_cmd(temp.path())
        .args(["list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Serialization error"));
    // The broken file is left as it was.
    assert_eq!(
        fs::read_to_string(temp.path().join("catalog.json")).unwrap(),
        "{ not json"
    );
}

#[test]
fn test_doctor_and_naked_invocation() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), "1", "Cup", "Mug", "Kitchen");

    catalog_cmd(temp.path())
        .args(["doctor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No inconsistencies found."));

    // Without a terminal on stdin, no command means list.
    catalog_cmd(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Cup"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let temp = TempDir::new().unwrap();
    catalog_cmd(temp.path())
        .args(["-v", "add", "1", "Cup", "Mug", "Kitchen"])
        .assert()
        .success()
        .stderr(predicate::str::contains("item added"))
        .stderr(predicate::str::contains("catalog saved"));
}

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_list_shows_builtin_catalog() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("nordvik")
        .env("NORDVIK_HOME", dir.path())
        .args(["links", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("studio"))
        .stdout(predicate::str::contains("warranty"))
        .stdout(predicate::str::contains("admin-panel"))
        .stdout(predicate::str::contains("sign-in"));
}

#[test]
fn test_list_filters_by_category() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("nordvik")
        .env("NORDVIK_HOME", dir.path())
        .args(["links", "list", "--category", "tools"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dimensions"))
        .stdout(predicate::str::contains("studio").not());
}

#[test]
fn test_list_rejects_unknown_category() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("nordvik")
        .env("NORDVIK_HOME", dir.path())
        .args(["links", "list", "--category", "bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category"));
}

#[test]
fn test_list_includes_config_extras() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        r#"
[[links]]
id = "intranet"
title = "Intranet"
description = "Internal knowledge base."
url = "https://intranet.example.com/"
category = "tools"
requires_auth = true
"#,
    )
    .unwrap();

    cargo_bin_cmd!("nordvik")
        .env("NORDVIK_HOME", dir.path())
        .args(["links", "list", "--category", "tools"])
        .assert()
        .success()
        .stdout(predicate::str::contains("intranet"))
        .stdout(predicate::str::contains("dimensions"));
}

#[test]
fn test_open_unknown_id_fails() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("nordvik")
        .env("NORDVIK_HOME", dir.path())
        .args(["links", "open", "no-such-link"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No catalog entry"));
}

#[test]
fn test_open_placeholder_fails() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("nordvik")
        .env("NORDVIK_HOME", dir.path())
        .args(["links", "open", "admin-panel"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no destination yet"));
}

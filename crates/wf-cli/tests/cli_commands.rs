//! Integration tests for the `wf` command-line interface.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn wf() -> Command {
    Command::cargo_bin("wf").unwrap()
}

/// Write a catalog file into a temp directory.
fn catalog_file(json: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(&path, json).unwrap();
    (dir, path)
}

/// A name followed by plenty of answers. Menus skip the "n" lines and
/// yes/no prompts skip the "3" lines, so this fits any sequence of events.
fn script() -> String {
    let mut input = String::from("Aria\n");
    for _ in 0..200 {
        input.push_str("3\nn\n");
    }
    input
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn zero_levels_is_immediate_victory() {
    wf().args(["play", "--levels", "0", "--pace-ms", "0"])
        .write_stdin("\nAria\n")
        .assert()
        .code(0)
        .stdout(
            predicate::str::contains("What is your name?")
                .and(predicate::str::contains("A fine warrior's name, Aria."))
                .and(predicate::str::contains("all 0 levels"))
                .and(predicate::str::contains("Victory!")),
        );
}

#[test]
fn trap_death_exits_with_two() {
    // Enemies die to the first hit and never strike back, so only traps kill.
    let (_dir, path) = catalog_file(
        r#"{
            "items": [{ "name": "Stick", "damage": 1 }],
            "enemies": [{ "name": "Moth", "damage": 1, "health": 1 }],
            "traps": [{ "name": "Pit", "damage": 5 }],
            "rest_spots": [{ "name": "Bench", "healing": 1 }]
        }"#,
    );
    wf().args(["play", "--levels", "40", "--seed", "7", "--pace-ms", "0"])
        .args(["--health", "3", "--catalog", path.to_str().unwrap()])
        .write_stdin(script())
        .assert()
        .code(2)
        .stdout(
            predicate::str::contains("the trap was the end of you")
                .and(predicate::str::contains("Game over."))
                .and(predicate::str::contains("Aria was killed by Pit")),
        );
}

#[test]
fn battle_death_exits_with_three() {
    // Traps only scratch; the first giant is fatal.
    let (_dir, path) = catalog_file(
        r#"{
            "items": [{ "name": "Stick", "damage": 1 }],
            "enemies": [{ "name": "Giant", "damage": 500, "health": 1000 }],
            "traps": [{ "name": "Nettle", "damage": 1 }],
            "rest_spots": [{ "name": "Bench", "healing": 1 }]
        }"#,
    );
    wf().args(["play", "--levels", "40", "--seed", "7", "--pace-ms", "0"])
        .args(["--catalog", path.to_str().unwrap()])
        .write_stdin(script())
        .assert()
        .code(3)
        .stdout(
            predicate::str::contains("The Giant killed you!")
                .and(predicate::str::contains("Aria was slain by Giant")),
        );
}

#[test]
fn closed_input_is_an_error() {
    wf().args(["play", "--levels", "3", "--seed", "1", "--pace-ms", "0"])
        .write_stdin("Aria\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("input closed"));
}

#[test]
fn out_of_range_hero_stats_are_rejected() {
    wf().args(["play", "--health", "2147483647"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "--health must be between 1 and 1000000, got 2147483647",
        ));
    wf().args(["play", "--damage", "0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--damage must be between 1"));
}

#[test]
fn huge_health_survives_rest_stops() {
    // Only rest spots: healing at the health ceiling must not kill the hero.
    let (_dir, path) = catalog_file(
        r#"{
            "items": [{ "name": "Stick", "damage": 1 }],
            "enemies": [{ "name": "Moth", "damage": 1, "health": 1 }],
            "traps": [{ "name": "Nettle", "damage": 1 }],
            "rest_spots": [{ "name": "Bench", "healing": 1000000 }]
        }"#,
    );
    wf().args(["play", "--levels", "20", "--seed", "5", "--pace-ms", "0"])
        .args(["--health", "1000000", "--catalog", path.to_str().unwrap()])
        .write_stdin(script())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Victory!"));
}

#[test]
fn invalid_catalog_is_rejected() {
    let (_dir, path) = catalog_file(
        r#"{
            "items": [{ "name": "Stick", "damage": 1 }],
            "enemies": [{ "name": "Ghost", "damage": 1, "health": 0 }],
            "traps": [{ "name": "Pit", "damage": 5 }],
            "rest_spots": [{ "name": "Bench", "healing": 1 }]
        }"#,
    );
    wf().args(["play", "--catalog", path.to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "invalid enemy \"Ghost\": health must be positive",
        ));
}

#[test]
fn missing_category_is_rejected() {
    let (_dir, path) = catalog_file(
        r#"{
            "items": [{ "name": "Stick", "damage": 1 }],
            "enemies": [{ "name": "Rat", "damage": 1, "health": 10 }],
            "traps": [{ "name": "Pit", "damage": 5 }]
        }"#,
    );
    wf().args(["world", "--catalog", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no rest spot templates"));
}

// ---------------------------------------------------------------------------
// catalog
// ---------------------------------------------------------------------------

#[test]
fn catalog_lists_builtin_templates() {
    wf().arg("catalog").assert().success().stdout(
        predicate::str::contains("Enemies")
            .and(predicate::str::contains("Ogre"))
            .and(predicate::str::contains("Breastplate"))
            .and(predicate::str::contains("Poison Ivy"))
            .and(predicate::str::contains("Campfire")),
    );
}

#[test]
fn catalog_json_can_be_loaded_back() {
    let output = wf().args(["catalog", "--json"]).output().unwrap();
    assert!(output.status.success());
    let json = String::from_utf8(output.stdout).unwrap();
    assert!(json.contains("\"rest_spots\""));

    let (_dir, path) = catalog_file(&json);
    wf().args(["catalog", "--catalog", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skeleton"));
}

// ---------------------------------------------------------------------------
// world
// ---------------------------------------------------------------------------

#[test]
fn oversized_world_is_an_error() {
    wf().args(["world", "--levels", "18446744073709551615"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "18446744073709551615 levels requested, at most 10000 supported",
        ));
}

#[test]
fn world_preview_is_reproducible() {
    let first = wf()
        .args(["world", "--levels", "10", "--seed", "3"])
        .output()
        .unwrap();
    let second = wf()
        .args(["world", "--levels", "10", "--seed", "3"])
        .output()
        .unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);

    let text = String::from_utf8(first.stdout).unwrap();
    assert!(text.contains("10 levels, seed 3"));
    assert!(text.contains("Level"));
}

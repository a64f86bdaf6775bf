use crate::cli::support::{lsr, write_network, TRIANGLE};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Add / remove / break tests
// ============================================================================

#[test]
fn test_add_creates_file_and_mirrors_links() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("net.txt");

    lsr()
        .args(["add", file.to_str().unwrap(), "A: B:4 C:2"])
        .assert()
        .success()
        .stdout("Added node A: B:4 C:2\n");

    let saved = fs::read_to_string(&file).unwrap();
    assert_eq!(saved, "A: B:4 C:2\nB: A:4\nC: A:2");
}

#[test]
fn test_add_keeps_existing_cost() {
    let dir = tempdir().unwrap();
    let file = write_network(dir.path(), "net.txt", TRIANGLE);

    lsr()
        .args(["add", file.to_str().unwrap(), "B: A:9 D:7"])
        .assert()
        .success();

    let saved = fs::read_to_string(&file).unwrap();
    assert_eq!(saved, "A: B:1 C:5\nB: A:1 C:2 D:7\nC: A:5 B:2\nD: B:7");
}

#[test]
fn test_add_malformed_line_leaves_file_untouched() {
    let dir = tempdir().unwrap();
    let file = write_network(dir.path(), "net.txt", TRIANGLE);

    lsr()
        .args(["add", file.to_str().unwrap(), "D: A:x"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("malformed line"));

    assert_eq!(fs::read_to_string(&file).unwrap(), TRIANGLE);
}

#[test]
fn test_add_empty_line() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("net.txt");

    lsr()
        .args(["add", file.to_str().unwrap(), "   "])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("empty field: line"));

    assert!(!file.exists());
}

#[test]
fn test_add_json() {
    let dir = tempdir().unwrap();
    let file = write_network(dir.path(), "net.txt", TRIANGLE);

    let output = lsr()
        .args(["--format", "json", "add", file.to_str().unwrap(), "D: A:3"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["added"], "D");
    assert_eq!(value["links"][0]["neighbor"], "A");
    assert_eq!(value["links"][0]["cost"], 3);
    assert_eq!(value["node_count"], 4);
}

#[test]
fn test_remove_node_detaches_neighbors() {
    let dir = tempdir().unwrap();
    let file = write_network(dir.path(), "net.txt", TRIANGLE);

    lsr()
        .args(["remove", file.to_str().unwrap(), "B"])
        .assert()
        .success()
        .stdout("Removed node B\n");

    assert_eq!(fs::read_to_string(&file).unwrap(), "A: C:5\nC: A:5");
}

#[test]
fn test_remove_missing_node_is_reported() {
    let dir = tempdir().unwrap();
    let file = write_network(dir.path(), "net.txt", TRIANGLE);

    lsr()
        .args(["remove", file.to_str().unwrap(), "Q"])
        .assert()
        .success()
        .stdout("Node Q does not exist\n");

    assert_eq!(fs::read_to_string(&file).unwrap(), TRIANGLE);
}

#[test]
fn test_remove_records() {
    let dir = tempdir().unwrap();
    let file = write_network(dir.path(), "net.txt", TRIANGLE);

    lsr()
        .args(["--format", "records", "remove", file.to_str().unwrap(), "C"])
        .assert()
        .success()
        .stdout("H lsr=1 command=remove node=C removed=true\n");
}

#[test]
fn test_break_chain() {
    let dir = tempdir().unwrap();
    let file = write_network(dir.path(), "net.txt", TRIANGLE);

    lsr()
        .args(["break", file.to_str().unwrap(), "A>B>Q"])
        .assert()
        .success()
        .stdout("Removed link A>B\nNo link B>Q\n");

    let saved = fs::read_to_string(&file).unwrap();
    assert_eq!(saved, "A: C:5\nB: C:2\nC: A:5 B:2");
}

#[test]
fn test_break_then_compute_reroutes() {
    let dir = tempdir().unwrap();
    let file = write_network(dir.path(), "net.txt", TRIANGLE);

    lsr()
        .args(["break", file.to_str().unwrap(), "B>C"])
        .assert()
        .success();

    lsr()
        .args(["compute", file.to_str().unwrap(), "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("C: Path: A>C Cost: 5"));
}

#[test]
fn test_break_json() {
    let dir = tempdir().unwrap();
    let file = write_network(dir.path(), "net.txt", TRIANGLE);

    let output = lsr()
        .args(["--format", "json", "break", file.to_str().unwrap(), "C>A"])
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value["links"],
        serde_json::json!([{ "from": "C", "to": "A", "removed": true }])
    );
}

#[test]
fn test_break_empty_chain() {
    let dir = tempdir().unwrap();
    let file = write_network(dir.path(), "net.txt", TRIANGLE);

    lsr()
        .args(["break", file.to_str().unwrap(), ""])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("empty field: link chain"));
}

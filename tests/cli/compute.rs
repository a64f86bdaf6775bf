use crate::cli::support::{lsr, stdout_of, write_network, SPLIT, TRIANGLE};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Compute command tests
// ============================================================================

#[test]
fn test_compute_all_summary() {
    let dir = tempdir().unwrap();
    let file = write_network(dir.path(), "net.txt", TRIANGLE);

    lsr()
        .args(["compute", file.to_str().unwrap(), "A"])
        .assert()
        .success()
        .stdout("Source A\nB: Path: A>B Cost: 1\nC: Path: A>B>C Cost: 3\n");
}

#[test]
fn test_compute_explicit_ca_mode() {
    let dir = tempdir().unwrap();
    let file = write_network(dir.path(), "net.txt", TRIANGLE);

    lsr()
        .args(["compute", file.to_str().unwrap(), "C", "--mode", "CA"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Source C"))
        .stdout(predicate::str::contains("A: Path: C>B>A Cost: 3"))
        .stdout(predicate::str::contains("Steps").not());
}

#[test]
fn test_compute_single_step_with_input() {
    let dir = tempdir().unwrap();
    let file = write_network(dir.path(), "net.txt", TRIANGLE);

    lsr()
        .args(["compute", file.to_str().unwrap(), "A", "--mode", "ss"])
        .write_stdin("\n\n\n")
        .assert()
        .success()
        .stdout(
            "Steps\n\
             Found B: Path: A>B Cost: 1\n\
             Found C: Path: A>C Cost: 5\n\
             Found C: Path: A>B>C Cost: 3\n\
             \n\
             Summary table\n\
             Source A\n\
             B: Path: A>B Cost: 1\n\
             C: Path: A>B>C Cost: 3\n",
        )
        .stderr(predicate::str::contains("[press enter to continue]"));
}

#[test]
fn test_compute_single_step_survives_closed_stdin() {
    let dir = tempdir().unwrap();
    let file = write_network(dir.path(), "net.txt", TRIANGLE);

    lsr()
        .args(["compute", file.to_str().unwrap(), "A", "--mode", "ss"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary table"));
}

#[test]
fn test_compute_single_step_no_pause() {
    let dir = tempdir().unwrap();
    let file = write_network(dir.path(), "net.txt", TRIANGLE);

    lsr()
        .args(["compute", file.to_str().unwrap(), "A", "-m", "ss", "--no-pause"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found C: Path: A>B>C Cost: 3"))
        .stderr(predicate::str::contains("press enter").not());
}

#[test]
fn test_compute_quiet_drops_headers() {
    let dir = tempdir().unwrap();
    let file = write_network(dir.path(), "net.txt", TRIANGLE);

    let out = stdout_of(lsr().args([
        "--quiet",
        "compute",
        file.to_str().unwrap(),
        "A",
        "--mode",
        "ss",
        "--no-pause",
    ]));
    assert!(!out.contains("Steps"));
    assert!(!out.contains("Summary table"));
    assert!(out.contains("Found B: Path: A>B Cost: 1"));
    assert!(out.contains("Source A"));
}

#[test]
fn test_compute_unreachable_node() {
    let dir = tempdir().unwrap();
    let file = write_network(dir.path(), "net.txt", SPLIT);

    lsr()
        .args(["compute", file.to_str().unwrap(), "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("C: Path:  Cost: unreachable"));
}

#[test]
fn test_compute_unknown_source() {
    let dir = tempdir().unwrap();
    let file = write_network(dir.path(), "net.txt", TRIANGLE);

    lsr()
        .args(["compute", file.to_str().unwrap(), "Z"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("source node not found: Z"));
}

#[test]
fn test_compute_json() {
    let dir = tempdir().unwrap();
    let file = write_network(dir.path(), "net.txt", SPLIT);

    let out = stdout_of(lsr().args(["--format", "json", "compute", file.to_str().unwrap(), "A"]));
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(value["source"], "A");
    assert_eq!(value["mode"], "ca");
    assert_eq!(value["routes"][0]["node"], "B");
    assert_eq!(value["routes"][0]["cost"], 1);
    assert!(value["routes"][1]["cost"].is_null());
    assert_eq!(value["routes"][1]["path"], serde_json::json!([]));
    assert!(value.get("events").is_none());
}

#[test]
fn test_compute_json_single_step_does_not_pause() {
    let dir = tempdir().unwrap();
    let file = write_network(dir.path(), "net.txt", TRIANGLE);

    let out = stdout_of(
        lsr()
            .args(["--format", "json", "compute", file.to_str().unwrap(), "A", "--mode", "ss"])
            .write_stdin(""),
    );
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    let events = value["events"].as_array().unwrap();
    assert_eq!(events.len(), 3);
    assert_eq!(events[0]["node"], "B");
    assert_eq!(events[2]["path"], serde_json::json!(["A", "B", "C"]));
    assert_eq!(value["stats"]["improvements"], 3);
}

#[test]
fn test_compute_records() {
    let dir = tempdir().unwrap();
    let file = write_network(dir.path(), "net.txt", TRIANGLE);

    lsr()
        .args(["--format", "records", "compute", file.to_str().unwrap(), "A"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H lsr=1 command=compute source=A mode=ca nodes=3 reachable=2",
        ))
        .stdout(predicate::str::contains("R node=C cost=3 path=\"A>B>C\""))
        .stdout(predicate::str::contains("E step=").not());
}

#[test]
fn test_compute_missing_file() {
    let dir = tempdir().unwrap();

    lsr()
        .args(["compute", dir.path().join("nope.txt").to_str().unwrap(), "A"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("network file not found"));
}

use crate::cli::support::{lsr, write_network, TRIANGLE};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Config file tests
// ============================================================================

#[test]
fn test_config_dir_sets_separator() {
    let dir = tempdir().unwrap();
    let file = write_network(dir.path(), "net.txt", TRIANGLE);
    let config_dir = dir.path().join("config");
    fs::create_dir(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[output]\nseparator = \" -> \"\n",
    )
    .unwrap();

    lsr()
        .env("LSR_CONFIG_DIR", &config_dir)
        .args(["compute", file.to_str().unwrap(), "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("C: Path: A -> B -> C Cost: 3"));
}

#[test]
fn test_config_format_is_overridden_by_flag() {
    let dir = tempdir().unwrap();
    let file = write_network(dir.path(), "net.txt", TRIANGLE);
    let config = dir.path().join("lsr.toml");
    fs::write(&config, "[output]\nformat = \"json\"\n").unwrap();

    lsr()
        .args(["--config", config.to_str().unwrap(), "nodes", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"nodes\""));

    lsr()
        .args([
            "--config",
            config.to_str().unwrap(),
            "--format",
            "human",
            "nodes",
            file.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout("A\nB\nC\n");
}

#[test]
fn test_config_disables_pause() {
    let dir = tempdir().unwrap();
    let file = write_network(dir.path(), "net.txt", TRIANGLE);
    let config = dir.path().join("lsr.toml");
    fs::write(&config, "[trace]\npause = false\n").unwrap();

    lsr()
        .env("LSR_CONFIG", &config)
        .args(["compute", file.to_str().unwrap(), "A", "--mode", "ss"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found B"))
        .stderr(predicate::str::contains("press enter").not());
}

#[test]
fn test_custom_prompt() {
    let dir = tempdir().unwrap();
    let file = write_network(dir.path(), "net.txt", TRIANGLE);
    let config = dir.path().join("lsr.toml");
    fs::write(&config, "[trace]\nprompt = \"next?\"\n").unwrap();

    lsr()
        .args(["--config", config.to_str().unwrap()])
        .args(["compute", file.to_str().unwrap(), "A", "--mode", "ss"])
        .write_stdin("\n\n\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("next?"));
}

#[test]
fn test_missing_explicit_config() {
    let dir = tempdir().unwrap();
    let file = write_network(dir.path(), "net.txt", TRIANGLE);

    lsr()
        .args(["--config", "/nonexistent/lsr.toml", "nodes", file.to_str().unwrap()])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn test_invalid_config() {
    let dir = tempdir().unwrap();
    let file = write_network(dir.path(), "net.txt", TRIANGLE);
    let config = dir.path().join("lsr.toml");
    fs::write(&config, "[output\n").unwrap();

    lsr()
        .args(["--config", config.to_str().unwrap(), "nodes", file.to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}

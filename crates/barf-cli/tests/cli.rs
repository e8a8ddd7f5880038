use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("barf"))
}

fn dump_to(path: &std::path::Path) {
    cmd()
        .arg("registry")
        .arg("dump")
        .arg("-o")
        .arg(path)
        .assert()
        .success();
}

#[test]
fn help_covers_registry_and_lookup() {
    cmd()
        .arg("registry")
        .arg("dump")
        .arg("--help")
        .assert()
        .success();
    cmd()
        .arg("registry")
        .arg("check")
        .arg("--help")
        .assert()
        .success();
    cmd().arg("lookup").arg("--help").assert().success();
}

#[test]
fn dump_stdout_outputs_json() {
    let assert = cmd()
        .arg("registry")
        .arg("dump")
        .arg("--stdout")
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let value: Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(value["registry"]["registry_version"], 1);
    assert_eq!(
        value["registry"]["commands"].as_array().map(Vec::len),
        Some(22)
    );
}

#[test]
fn dump_stdout_and_output_conflict() {
    let temp = TempDir::new().expect("tempdir");
    let output = temp.path().join("registry.json");

    cmd()
        .arg("registry")
        .arg("dump")
        .arg("--stdout")
        .arg("-o")
        .arg(output)
        .assert()
        .failure()
        .stderr(contains("error:"));
}

#[test]
fn dump_pretty_and_compact_conflict() {
    cmd()
        .arg("registry")
        .arg("dump")
        .arg("--stdout")
        .arg("--pretty")
        .arg("--compact")
        .assert()
        .failure()
        .stderr(contains("error:"));
}

#[test]
fn dump_quiet_suppresses_ok_message() {
    let temp = TempDir::new().expect("tempdir");
    let output = temp.path().join("registry.json");

    cmd()
        .arg("registry")
        .arg("dump")
        .arg("-o")
        .arg(output)
        .arg("--quiet")
        .assert()
        .success()
        .stderr(contains("OK:").not());
}

#[test]
fn check_accepts_a_fresh_dump() {
    let temp = TempDir::new().expect("tempdir");
    let snapshot = temp.path().join("registry.json");
    dump_to(&snapshot);

    cmd()
        .arg("registry")
        .arg("check")
        .arg(snapshot)
        .assert()
        .success()
        .stderr(contains("OK: snapshot matches registry"));
}

#[test]
fn check_rejects_a_doctored_snapshot() {
    let temp = TempDir::new().expect("tempdir");
    let snapshot = temp.path().join("registry.json");
    dump_to(&snapshot);

    let text = std::fs::read_to_string(&snapshot).expect("read snapshot");
    let doctored = text.replace("path_frament", "path_fragment");
    assert_ne!(text, doctored);
    std::fs::write(&snapshot, doctored).expect("write snapshot");

    cmd()
        .arg("registry")
        .arg("check")
        .arg(&snapshot)
        .arg("--list-mismatches")
        .assert()
        .failure()
        .stderr(
            contains("registry drift detected")
                .and(contains("Registry mismatches:"))
                .and(contains("BARF-REG-VALUE")),
        );
}

#[test]
fn check_missing_snapshot_shows_error_and_hint() {
    let temp = TempDir::new().expect("tempdir");
    let missing = temp.path().join("missing.json");

    cmd()
        .arg("registry")
        .arg("check")
        .arg(missing)
        .assert()
        .failure()
        .stderr(contains("error:").and(contains("hint:")));
}

#[test]
fn lookup_resolves_wire_values() {
    cmd()
        .arg("lookup")
        .arg("method")
        .arg("post")
        .assert()
        .success()
        .stdout("1\n");

    cmd()
        .arg("lookup")
        .arg("led-mode")
        .arg("gpio")
        .assert()
        .success()
        .stdout("4\n");

    // Logical name resolves to the historical wire spelling.
    cmd()
        .arg("lookup")
        .arg("command")
        .arg("path_fragment")
        .assert()
        .success()
        .stdout("path_frament\n");
}

#[test]
fn lookup_unknown_name_shows_error_and_hint() {
    cmd()
        .arg("lookup")
        .arg("method")
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(contains("unknown method name").and(contains("known methods: get, post")));
}

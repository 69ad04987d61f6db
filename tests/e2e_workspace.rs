mod common;
use common::cli::{IssWorkspace, run_iss};

#[test]
fn test_init_writes_config_template() {
    let workspace = IssWorkspace::new();
    let init = run_iss(&workspace, ["init"], "init");
    assert!(init.status.success(), "init failed: {}", init.stderr);
    assert!(workspace.root.join(".issues").join("config.yaml").exists());
    assert!(workspace.root.join(".issues").join(".gitignore").exists());

    // Template is all comments, so defaults still apply.
    let list = run_iss(&workspace, ["list", "--json"], "list_after_init");
    assert!(list.status.success(), "list failed: {}", list.stderr);
}

#[test]
fn test_invalid_config_reported() {
    let workspace = IssWorkspace::with_sample();
    std::fs::create_dir_all(workspace.root.join(".issues")).unwrap();
    std::fs::write(workspace.root.join(".issues").join("config.yaml"), "sauce: x\n").unwrap();

    let list = run_iss(&workspace, ["list"], "list_bad_config");
    assert!(!list.status.success());
    assert!(list.stderr.contains("Invalid config file"), "stderr: {}", list.stderr);
}

#[test]
fn test_parse_reports_skipped_lines() {
    let workspace = IssWorkspace::new();
    workspace.write_source(
        "# header\n1|Good|open|2024-01-01T00:00:00Z\nbroken line\n1|Dup|open|2024-01-01T00:00:00Z\n2|Bad status|done|2024-01-01T00:00:00Z\n3|Bad time|open|yesterday-ish|\n",
    );

    let parse = run_iss(&workspace, ["parse"], "parse");
    assert!(parse.status.success(), "parse failed: {}", parse.stderr);
    assert!(parse.stdout.contains("1 accepted, 4 rejected"), "stdout: {}", parse.stdout);
    assert!(parse.stdout.contains("line 3: expected 4 or 5 fields, found 1"));
    assert!(parse.stdout.contains("line 4: duplicate id '1'"));
    assert!(parse.stdout.contains("line 5: invalid status 'done'"));
    assert!(parse.stdout.contains("line 6: invalid timestamp 'yesterday-ish'"));
}

#[test]
fn test_parse_json_summary() {
    let workspace = IssWorkspace::with_sample();
    let parse = run_iss(&workspace, ["parse", "--json"], "parse_json");
    assert!(parse.status.success(), "parse failed: {}", parse.stderr);

    let value = parse.json();
    assert_eq!(value["accepted"], 4);
    // The header comment is the only skipped line.
    assert_eq!(value["skipped"], 1);
    assert_eq!(value["lines"][1]["id"], "1");
}

#[test]
fn test_parse_missing_file() {
    let workspace = IssWorkspace::new();
    let parse = run_iss(&workspace, ["parse", "--path", "nope.dat"], "parse_missing");
    assert!(!parse.status.success());
    assert!(parse.stderr.contains("nope.dat"), "stderr: {}", parse.stderr);
}

#[test]
fn test_completions_bash() {
    let workspace = IssWorkspace::new();
    let completions = run_iss(&workspace, ["completions", "bash"], "completions");
    assert!(completions.status.success());
    assert!(completions.stdout.contains("iss"));
}

#[test]
fn test_version_json() {
    let workspace = IssWorkspace::new();
    let version = run_iss(&workspace, ["version", "--json"], "version");
    assert!(version.status.success());
    assert_eq!(version.json()["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_help_lists_commands() {
    use assert_cmd::Command;
    use predicates::prelude::*;

    Command::cargo_bin("iss")
        .expect("iss binary")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list").and(predicate::str::contains("parse")));
}

#[test]
fn test_log_file_receives_diagnostics() {
    let workspace = IssWorkspace::with_sample();
    let list = run_iss(&workspace, ["list", "-vv", "--log-file", "iss.log"], "list_log_file");
    assert!(list.status.success(), "list failed: {}", list.stderr);

    let log = std::fs::read_to_string(workspace.root.join("iss.log")).expect("log file written");
    assert!(log.contains("Opened issue session"), "log: {log}");
    assert!(!list.stderr.contains("Opened issue session"));
}

mod common;
use common::cli::{IssWorkspace, run_iss};

fn ids(value: &serde_json::Value) -> Vec<String> {
    value["issues"]
        .as_array()
        .expect("issues array")
        .iter()
        .map(|issue| issue["id"].as_str().unwrap_or_default().to_string())
        .collect()
}

#[test]
fn test_list_defaults_to_newest_first() {
    let workspace = IssWorkspace::with_sample();
    let list = run_iss(&workspace, ["list", "--json"], "list");
    assert!(list.status.success(), "list failed: {}", list.stderr);

    let value = list.json();
    assert_eq!(ids(&value), ["4", "2", "1", "3"]);
    assert_eq!(value["count"], 4);
    assert_eq!(value["status"], "all");
    assert_eq!(value["sort"], "desc");
    assert_eq!(value["location"], "/?sort=desc");
}

#[test]
fn test_list_oldest_first() {
    let workspace = IssWorkspace::with_sample();
    let list = run_iss(&workspace, ["list", "--json", "--sort", "asc"], "list_asc");
    assert!(list.status.success(), "list failed: {}", list.stderr);
    assert_eq!(ids(&list.json()), ["3", "1", "2", "4"]);
}

#[test]
fn test_list_search_is_case_insensitive() {
    let workspace = IssWorkspace::with_sample();
    let list = run_iss(&workspace, ["list", "--json", "--search", "LOGIN"], "list_search");
    assert!(list.status.success(), "list failed: {}", list.stderr);

    let value = list.json();
    assert_eq!(ids(&value), ["4", "1"]);
    assert_eq!(value["location"], "/?q=LOGIN&sort=desc");
}

#[test]
fn test_list_status_filter() {
    let workspace = IssWorkspace::with_sample();
    let list = run_iss(&workspace, ["list", "--json", "--status", "closed"], "list_closed");
    assert!(list.status.success(), "list failed: {}", list.stderr);
    assert_eq!(ids(&list.json()), ["3"]);
}

#[test]
fn test_list_reads_view_from_location() {
    let workspace = IssWorkspace::with_sample();
    let list = run_iss(
        &workspace,
        ["list", "--json", "--location", "/?q=login&status=open&sort=asc"],
        "list_location",
    );
    assert!(list.status.success(), "list failed: {}", list.stderr);

    let value = list.json();
    assert_eq!(ids(&value), ["1", "4"]);
    assert_eq!(value["search"], "login");
    assert_eq!(value["status"], "open");
}

#[test]
fn test_list_invalid_location_values_fall_back() {
    let workspace = IssWorkspace::with_sample();
    let list = run_iss(
        &workspace,
        ["list", "--json", "--location", "/?status=bogus&sort=up"],
        "list_bogus",
    );
    assert!(list.status.success(), "list failed: {}", list.stderr);

    let value = list.json();
    assert_eq!(ids(&value), ["4", "2", "1", "3"]);
    assert_eq!(value["location"], "/?sort=desc");
}

#[test]
fn test_list_keeps_unrelated_location_params() {
    let workspace = IssWorkspace::with_sample();
    let list = run_iss(
        &workspace,
        [
            "list",
            "--location",
            "/board?tab=2&q=old",
            "--search",
            "login",
            "--status",
            "open",
        ],
        "list_params",
    );
    assert!(list.status.success(), "list failed: {}", list.stderr);
    assert!(
        list.stdout
            .contains("Location: /board?tab=2&q=login&status=open&sort=desc"),
        "unexpected output:\n{}",
        list.stdout
    );
}

#[test]
fn test_list_clearing_filters_removes_params() {
    let workspace = IssWorkspace::with_sample();
    let list = run_iss(
        &workspace,
        [
            "list",
            "--location",
            "/?q=login&status=closed",
            "--search",
            "",
            "--status",
            "all",
        ],
        "list_clear",
    );
    assert!(list.status.success(), "list failed: {}", list.stderr);
    assert!(list.stdout.contains("Location: /?sort=desc"));
}

#[test]
fn test_list_text_lines() {
    let workspace = IssWorkspace::with_sample();
    let list = run_iss(&workspace, ["list", "--status", "in_progress"], "list_text");
    assert!(list.status.success(), "list failed: {}", list.stderr);
    assert!(
        list.stdout
            .contains("◐ 2 [In Progress] Add dark mode  2024-03-05 09:30"),
        "unexpected output:\n{}",
        list.stdout
    );
    assert!(list.stdout.contains("1 issue(s), Newest first"));
}

#[test]
fn test_list_no_matches() {
    let workspace = IssWorkspace::with_sample();
    let list = run_iss(&workspace, ["list", "--search", "nothing like this"], "list_none");
    assert!(list.status.success(), "list failed: {}", list.stderr);
    assert!(list.stdout.contains("No issues found."));
}

#[test]
fn test_list_missing_source_is_empty() {
    let workspace = IssWorkspace::new();
    let list = run_iss(&workspace, ["list", "--json"], "list_missing");
    assert!(list.status.success(), "list failed: {}", list.stderr);
    assert_eq!(list.json()["count"], 0);
}

#[test]
fn test_list_rejects_unknown_sort_flag() {
    let workspace = IssWorkspace::with_sample();
    let list = run_iss(&workspace, ["list", "--sort", "sideways"], "list_bad_sort");
    assert!(!list.status.success());
    assert!(list.stderr.contains("invalid value"));
}

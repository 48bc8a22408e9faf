mod common;
use common::{run, stderr, stdout, TempDir};
use serde_json::Value;

#[test]
fn test_check_bootstraps_missing_baseline_then_passes() {
    let dir = TempDir::new("check_bootstrap");
    dir.write("hello.rs", "fn main() {}\n");

    let output = run(&["fixture", "check", "-s", dir.as_str()]);
    assert_eq!(output.status.code(), Some(3), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("fixture hello ... FAILED"));
    assert!(stdout(&output).contains("Expected tokens file doesn't exist"));
    assert!(dir.exists("hello.tokens"));

    let output = run(&["fixture", "check", "-s", dir.as_str()]);
    assert!(output.status.success(), "stdout: {}", stdout(&output));
    assert!(stdout(&output).contains("fixture hello ... ok"));
    assert!(stdout(&output).contains("fixture result: ok. 1 passed; 0 failed"));
}

#[test]
fn test_check_reports_garbage_without_baseline() {
    let dir = TempDir::new("check_garbage");
    dir.write("bad.rs", "let x = @@ 5;\n");

    let output = run(&["fixture", "check", "-s", dir.as_str()]);
    assert_eq!(output.status.code(), Some(2));
    let out = stdout(&output);
    assert!(out.contains("Found garbage tokens in bad"), "{out}");
    assert!(out.contains("line 1, column 9"), "{out}");
    assert!(!dir.exists("bad.tokens"));
    assert!(stderr(&output).contains("1 of 1 fixtures failed"));
}

#[test]
fn test_check_reports_mismatch() {
    let dir = TempDir::new("check_mismatch");
    dir.write("sum.rs", "a + b");
    dir.write(
        "sum.tokens",
        concat!(
            "{\"type\":\"Identifier\",\"value\":\"a\"}\n",
            "{\"type\":\"Whitespace\",\"value\":\" \"}\n",
            "{\"type\":\"Operator\",\"value\":\"-\"}\n",
            "{\"type\":\"Whitespace\",\"value\":\" \"}\n",
            "{\"type\":\"Identifier\",\"value\":\"b\"}\n",
        ),
    );

    let output = run(&["fixture", "check", "-s", dir.as_str()]);
    assert_eq!(output.status.code(), Some(6));
    let out = stdout(&output);
    assert!(out.contains("Tokenizing sum didn't produce expected tokens"), "{out}");
    assert!(out.contains("First difference at token 3"), "{out}");
}

#[test]
fn test_check_filter_and_json_output() {
    let dir = TempDir::new("check_filter");
    dir.write("one.rs", "1");
    dir.write("one.tokens", "{\"type\":\"Integer\",\"value\":\"1\"}\n");
    dir.write("two.rs", "@");

    let output = run(&["fixture", "check", "-s", dir.as_str(), "-f", "one", "-o", "json"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let summary: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(summary["passed"], 1);
    assert_eq!(summary["failed"], 0);
    assert_eq!(summary["results"][0]["name"], "one");
    assert_eq!(summary["results"][0]["status"], "ok");
}

#[test]
fn test_list_fixtures() {
    let dir = TempDir::new("list");
    dir.write("a.rs", "a");
    dir.write("a.tokens", "{\"type\":\"Identifier\",\"value\":\"a\"}\n");
    dir.write("nested/b.rs", "b");

    let output = run(&["fixture", "list", "-s", dir.as_str(), "-o", "json"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let list: Value = serde_json::from_str(&stdout(&output)).unwrap();
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["name"], "a");
    assert_eq!(list[0]["baseline"], true);
    assert_eq!(list[1]["name"], "nested_b");
    assert_eq!(list[1]["baseline"], false);
}

#[test]
fn test_list_empty_root() {
    let dir = TempDir::new("list_empty");
    let output = run(&["fixture", "list", "-s", dir.as_str()]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "No fixtures found\n");
}

#[test]
fn test_colliding_fixture_names_are_rejected() {
    let dir = TempDir::new("collide");
    dir.write("a/b.rs", "b");
    dir.write("a_b.rs", "b");

    let output = run(&["fixture", "list", "-s", dir.as_str()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Fixture name a_b is used by both"));
}

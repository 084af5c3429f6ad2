//! Integration tests for the `sieve` binary.

use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

fn sieve(args: &[&str]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_sieve"));
    for var in [
        "SIEVE_FUZZY_THRESHOLD",
        "SIEVE_NOISE_WORDS",
        "SIEVE_MAX_RECORDS",
        "SIEVE_MAX_MISMATCHES",
        "SIEVE_DEEP_CHECK",
        "SIEVE_MIN_MATCH_PERCENTAGE",
        "RUST_LOG",
    ] {
        command.env_remove(var);
    }
    command.args(args).output().expect("failed to run sieve")
}

fn write_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("failed to write temp file");
    file
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_verify_all_matching() {
    let records = write_file(
        r#"[{"title": "Breaking News Today"}, {"fullVisibleText": "Morning news 12:00"}]"#,
    );
    let path = records.path().to_str().unwrap();

    let output = sieve(&["verify", "--query", "news", "--records", path]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Total results checked: 2"));
    assert!(text.contains("All results contain the keyword"));
}

#[test]
fn test_verify_fails_on_unreadable_record() {
    let records = write_file(r#"[{"title": "Breaking News"}, {}]"#);
    let path = records.path().to_str().unwrap();

    let output = sieve(&["verify", "--query", "news", "--records", path]);

    assert!(!output.status.success());
    assert!(stdout(&output).contains("no metadata found"));
}

#[test]
fn test_verify_min_match_override() {
    let records = write_file(r#"[{"title": "Breaking News"}, {"title": "Pho Bowl"}]"#);
    let path = records.path().to_str().unwrap();

    let strict = sieve(&["verify", "-q", "news", "-r", path]);
    let lenient = sieve(&["verify", "-q", "news", "-r", path, "--min-match", "50"]);

    assert!(!strict.status.success());
    assert!(lenient.status.success());
}

#[test]
fn test_verify_json_output() {
    let records = write_file(r#"[{"title": "Breaking News"}, {"title": "Pho Bowl"}]"#);
    let path = records.path().to_str().unwrap();

    let output = sieve(&["--json", "verify", "-q", "news", "-r", path, "-t", "150"]);
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");

    assert_eq!(report["totalChecked"], 2);
    assert_eq!(report["matchedCount"], 1);
    assert_eq!(report["threshold"], 100);
    assert_eq!(report["mismatches"][0]["title"], "Pho Bowl");
}

#[test]
fn test_verify_missing_file() {
    let output = sieve(&["verify", "-q", "news", "-r", "/nonexistent/records.json"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to read"));
}

#[test]
fn test_verify_rejects_blank_query() {
    let records = write_file(r#"[{"title": "Breaking News"}]"#);
    let path = records.path().to_str().unwrap();

    let output = sieve(&["verify", "-q", "  ", "-r", path]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid query"));
}

#[test]
fn test_blocks_command() {
    let text = write_file("Breaking news\nnews\n12:30\nWorld News Tonight\n");
    let path = text.path().to_str().unwrap();

    let output = sieve(&["blocks", "--query", "news", "--text", path]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("found 3 times"));
}

#[test]
fn test_sort_command() {
    let records = write_file(
        r#"[{"title": "Alpha"}, {"title": "beta"}, {"title": "Gamma"}]"#,
    );
    let path = records.path().to_str().unwrap();

    let ascending = sieve(&["sort", "--mode", "Title (A-Z)", "--records", path]);
    let descending = sieve(&["sort", "--mode", "Title (Z-A)", "--records", path]);

    assert!(ascending.status.success());
    assert!(stdout(&ascending).contains("sorted (3 results checked)"));
    assert!(!descending.status.success());
    assert!(stdout(&descending).contains("not sorted"));
}

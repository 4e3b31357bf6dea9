use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

const JOB_DESCRIPTION: &str =
    "We need a Senior React Developer with AWS and Node.js experience";

/// Command with a nonexistent config path so user-level config files
/// cannot leak into test runs.
fn scout() -> Command {
    let mut cmd = Command::cargo_bin("scout").unwrap();
    cmd.env("SCOUT_CONFIG", "/nonexistent/scout-config.toml");
    cmd
}

#[test]
fn test_cli_help() {
    scout()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_cli_version() {
    scout()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_extract_human_output() {
    scout()
        .args(["extract", JOB_DESCRIPTION, "--no-delay"])
        .assert()
        .success()
        .stdout(predicate::str::contains("12 keywords for this role"))
        .stdout(predicate::str::contains("[React]"))
        .stdout(predicate::str::contains("[Technical Leadership]"));
}

#[test]
fn test_extract_canonical_keywords_robot() {
    let output = scout()
        .args(["--robot", "extract", JOB_DESCRIPTION, "--no-delay"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], Value::String("ok".into()));
    assert_eq!(json["data"]["count"], Value::from(12));

    let keywords: Vec<&str> = json["data"]["keywords"]
        .as_array()
        .unwrap()
        .iter()
        .map(|k| k.as_str().unwrap())
        .collect();
    assert_eq!(
        keywords,
        vec![
            "React",
            "Node.js",
            "AWS",
            "Senior",
            "UI/UX",
            "Responsive Design",
            "CSS",
            "HTML",
            "Mentoring",
            "Architecture",
            "Code Review",
            "Technical Leadership",
        ]
    );
}

#[test]
fn test_extract_empty_description_fails() {
    scout()
        .args(["extract", "   ", "--no-delay"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a job description"));
}

#[test]
fn test_extract_empty_description_robot_error() {
    scout()
        .args(["--robot", "extract", "", "--no-delay"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"error\":true"))
        .stdout(predicate::str::contains("Please enter a job description"));
}

#[test]
fn test_extract_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("role.txt");
    std::fs::write(&path, "Backend role: Python and Django services").unwrap();

    let output = scout()
        .args(["--robot", "extract", "--no-delay", "--file"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let keywords = json["data"]["keywords"].as_array().unwrap();
    assert!(keywords.iter().any(|k| k == "Python"));
    assert!(keywords.iter().any(|k| k == "Backend"));
    // "backend" also triggers the rule additions.
    assert!(keywords.iter().any(|k| k == "Microservices"));
}

#[test]
fn test_extract_reads_stdin_when_no_text() {
    let output = scout()
        .args(["--robot", "extract", "--no-delay"])
        .write_stdin("We use React heavily")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let keywords = json["data"]["keywords"].as_array().unwrap();
    assert!(keywords.iter().any(|k| k == "React"));
}

#[test]
fn test_extract_rejects_both_text_and_file() {
    scout()
        .args(["extract", "some text", "--file", "role.txt"])
        .assert()
        .failure();
}

#[test]
fn test_candidates_robot_lists_all_by_match() {
    let output = scout().args(["--robot", "candidates"]).output().unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["data"]["count"], Value::from(8));
    assert_eq!(json["data"]["total"], Value::from(8));
    assert_eq!(json["data"]["average_match_score"], Value::from(85));

    let candidates = json["data"]["candidates"].as_array().unwrap();
    assert_eq!(candidates[0]["name"], Value::String("Sarah Chen".into()));
    assert_eq!(candidates[0]["match_score"], Value::from(95));
}

#[test]
fn test_candidates_query_filters_by_skill() {
    let output = scout()
        .args(["--robot", "candidates", "--query", "react"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["data"]["count"], Value::from(4));
    assert_eq!(json["data"]["total"], Value::from(8));
}

#[test]
fn test_candidates_query_and_name_sort_combine() {
    let output = scout()
        .args(["--robot", "candidates", "--query", "react", "--sort", "name"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> = json["data"]["candidates"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["Emily Nakamura", "Marcus Johnson", "Sarah Chen", "Tom Okafor"]
    );
}

#[test]
fn test_candidates_location_filter() {
    let output = scout()
        .args(["--robot", "candidates", "--location", "Seattle, WA"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> = json["data"]["candidates"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["James Whitfield", "Priya Patel"]);
}

#[test]
fn test_candidates_experience_filter() {
    let output = scout()
        .args(["--robot", "candidates", "--experience", "6+ years"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["data"]["count"], Value::from(2));
}

#[test]
fn test_candidates_sort_by_name() {
    let output = scout()
        .args(["--robot", "candidates", "--sort", "name"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let candidates = json["data"]["candidates"].as_array().unwrap();
    assert_eq!(candidates[0]["name"], Value::String("Diego Ramirez".into()));
}

#[test]
fn test_candidates_unsorted_keeps_roster_order() {
    let output = scout()
        .args(["--robot", "candidates", "--sort", "unsorted"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let candidates = json["data"]["candidates"].as_array().unwrap();
    assert_eq!(candidates[0]["id"], Value::String("cand-001".into()));
    assert_eq!(candidates[1]["id"], Value::String("cand-002".into()));
}

#[test]
fn test_candidates_detail_robot() {
    let output = scout()
        .args(["--robot", "candidates", "--id", "cand-001"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json["data"]["candidate"]["name"],
        Value::String("Sarah Chen".into())
    );
    assert_eq!(
        json["data"]["email"],
        Value::String("sarah.chen@example.com".into())
    );
    assert_eq!(
        json["data"]["phone"],
        Value::String("+1 (555) 123-4567".into())
    );
}

#[test]
fn test_candidates_detail_human() {
    scout()
        .args(["candidates", "--id", "cand-003"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Priya Patel"))
        .stdout(predicate::str::contains("priya.patel@example.com"));
}

#[test]
fn test_candidates_unknown_id_robot_envelope() {
    let output = scout()
        .args(["--robot", "candidates", "--id", "cand-999"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json["status"]["error"]["code"],
        Value::String("CANDIDATE_NOT_FOUND".into())
    );
}

#[test]
fn test_candidates_unknown_id_human_fails() {
    scout()
        .args(["candidates", "--id", "cand-999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Candidate not found"));
}

#[test]
fn test_candidates_facets() {
    let output = scout()
        .args(["--robot", "candidates", "--facets"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let locations = json["data"]["locations"].as_array().unwrap();
    assert_eq!(locations.len(), 5);
    assert!(locations.iter().any(|l| l == "Remote"));

    let levels = json["data"]["experience_levels"].as_array().unwrap();
    assert!(levels.iter().any(|l| l == "8+ years"));
}

#[test]
fn test_candidates_no_match_human() {
    scout()
        .args(["candidates", "--query", "cobol"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No candidates match"));
}

#[test]
fn test_env_override_limits_keywords() {
    let output = scout()
        .env("SCOUT_EXTRACTION_MAX_KEYWORDS", "3")
        .args(["--robot", "extract", JOB_DESCRIPTION, "--no-delay"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let keywords: Vec<&str> = json["data"]["keywords"]
        .as_array()
        .unwrap()
        .iter()
        .map(|k| k.as_str().unwrap())
        .collect();
    assert_eq!(keywords, vec!["React", "Node.js", "AWS"]);
}

#[test]
fn test_invalid_env_override_fails() {
    scout()
        .env("SCOUT_EXTRACTION_MAX_KEYWORDS", "lots")
        .args(["--robot", "extract", JOB_DESCRIPTION, "--no-delay"])
        .assert()
        .failure();
}

#[test]
fn test_config_file_overrides_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[extraction]\nlatency_ms = 0\nmax_keywords = 2\n").unwrap();

    let mut cmd = Command::cargo_bin("scout").unwrap();
    let output = cmd
        .arg("--config")
        .arg(&path)
        .args(["--robot", "extract", JOB_DESCRIPTION])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["data"]["count"], Value::from(2));
}

#[test]
fn test_session_rejected_in_robot_mode() {
    scout()
        .args(["--robot", "session"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"error\":true"));
}

#[test]
fn test_session_requires_terminal() {
    scout()
        .arg("session")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Interactive terminal required"));
}

#[test]
fn test_default_command_is_session() {
    // Without a subcommand scout starts the interactive session, which
    // refuses to run against a piped stdout.
    scout()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Interactive terminal required"));
}

//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against the dev data directory
//! and verify exit codes and output shape.

use std::process::Command;

/// Run a CLI command and return (exit code, stdout, stderr).
fn run_cli(args: &[&str]) -> (i32, String, String) {
    let output = Command::new("cargo")
        .args(["run", "-p", "codedaily-cli", "--"])
        .args(args)
        .env("CODEDAILY_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (code, stdout, stderr)
}

#[test]
fn test_config_list() {
    let (code, stdout, _) = run_cli(&["config", "list"]);
    assert_eq!(code, 0, "config list failed");
    assert!(stdout.contains("[timer]"));
    assert!(stdout.contains("[roadmap]"));
}

#[test]
fn test_config_get() {
    let (code, stdout, _) = run_cli(&["config", "get", "timer.default_duration_secs"]);
    assert_eq!(code, 0, "config get failed");
    assert!(!stdout.trim().is_empty());
}

#[test]
fn test_config_get_unknown_key_fails() {
    let (code, _, stderr) = run_cli(&["config", "get", "timer.nope"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown config key"));
}

#[test]
fn test_roadmap_generate_json_shape() {
    let (code, stdout, _) = run_cli(&[
        "roadmap", "generate", "--track", "dsa", "--level", "beginner", "--weeks", "8", "--json",
    ]);
    assert_eq!(code, 0, "roadmap generate failed");
    let plan: serde_json::Value = serde_json::from_str(&stdout).expect("plan is not JSON");
    let weeks = plan.as_array().expect("plan is not an array");
    assert_eq!(weeks.len(), 8);
    for block in weeks {
        assert_eq!(block["bullets"].as_array().unwrap().len(), 3);
    }
}

#[test]
fn test_roadmap_generate_text() {
    let (code, stdout, _) = run_cli(&[
        "roadmap", "generate", "--track", "backend", "--level", "advanced", "--weeks", "4",
    ]);
    assert_eq!(code, 0, "roadmap generate failed");
    assert!(stdout.contains("Week 1:"));
    assert!(stdout.contains("Week 4:"));
}

#[test]
fn test_upgrades() {
    let (code, stdout, _) = run_cli(&["upgrades"]);
    assert_eq!(code, 0, "upgrades failed");
    assert!(stdout.contains("Deep Focus Mode"));
    assert!(stdout.contains("Credits:"));
}

#[test]
fn test_stats_all() {
    let (code, stdout, _) = run_cli(&["stats", "all"]);
    assert_eq!(code, 0, "stats all failed");
    assert!(stdout.contains("total_sprints"));
}

#[test]
fn test_login_then_logout() {
    let (code, stdout, _) = run_cli(&["login", "Test User"]);
    assert_eq!(code, 0, "login failed");
    assert!(stdout.contains("LoggedIn"));

    let (code, _, _) = run_cli(&["logout"]);
    assert_eq!(code, 0, "logout failed");
}

#[test]
fn test_login_rejects_blank_name() {
    let (code, _, stderr) = run_cli(&["login", "   "]);
    assert_ne!(code, 0);
    assert!(stderr.contains("name must not be empty"));
}

#[test]
fn test_timer_flow() {
    let (code, _, _) = run_cli(&["login", "Timer Tester"]);
    assert_eq!(code, 0, "login failed");

    let (code, stdout, _) = run_cli(&["timer", "start", "Smoke test sprint"]);
    assert_eq!(code, 0, "timer start failed");
    assert!(stdout.contains("SprintStarted"));

    let (code, _, _) = run_cli(&["timer", "status"]);
    assert_eq!(code, 0, "timer status failed");

    let (code, _, _) = run_cli(&["timer", "cancel"]);
    assert_eq!(code, 0, "timer cancel failed");
}

#[test]
fn test_timer_select_locked_duration_fails_when_poor() {
    // Fresh profiles have no credits; both long durations are locked until
    // 500. If another test has banked credits this still exercises parsing,
    // so only assert the command terminates.
    let (code, _, stderr) = run_cli(&["timer", "select", "3600"]);
    if code != 0 {
        assert!(stderr.contains("locked") || stderr.contains("unknown duration"));
    }
}

#[test]
fn test_timer_select_unknown_duration_fails() {
    let (code, _, stderr) = run_cli(&["timer", "select", "42"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown duration"));
}

//! End-to-end tests for `ds-pathway info` commands.

mod fixtures;
use fixtures::*;

#[test]
fn test_info_blank_by_default() {
    let env = TestEnv::new();
    let info = env.run_json(&["info", "show", "--json"]);
    assert_eq!(info["childName"], "");
    assert_eq!(info["childDob"], "");
    assert!(info["currentStage"].is_null());
    assert_eq!(info["notes"], "");

    let stdout = env.run_ok(&["info", "show"]);
    assert!(stdout.contains("Nothing saved yet."));
}

#[test]
fn test_info_set_merges_fields() {
    let env = TestEnv::new();
    env.run_ok(&["info", "set", "--child-name", "Alex"]);
    env.run_ok(&["info", "set", "--child-dob", "2024-03-01", "--stage", "birth-to-3"]);

    let info = env.run_json(&["info", "show", "--json"]);
    assert_eq!(info["childName"], "Alex");
    assert_eq!(info["childDob"], "2024-03-01");
    assert_eq!(info["currentStage"], "birth-to-3");
}

#[test]
fn test_info_stage_none_clears_stage() {
    let env = TestEnv::new();
    env.run_ok(&["info", "set", "--stage", "transitions"]);
    env.run_ok(&["info", "set", "--stage", "none"]);
    let info = env.run_json(&["info", "show", "--json"]);
    assert!(info["currentStage"].is_null());
}

#[test]
fn test_info_invalid_date_rejected() {
    let env = TestEnv::new();
    let output = env.run(&["info", "set", "--child-dob", "01/03/2024"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("YYYY-MM-DD"));
}

#[test]
fn test_info_invalid_stage_rejected() {
    let env = TestEnv::new();
    let output = env.run(&["info", "set", "--stage", "university"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_info_set_requires_a_field() {
    let env = TestEnv::new();
    let output = env.run(&["info", "set"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_info_clear_needs_confirmation() {
    let env = TestEnv::new();
    env.run_ok(&["info", "set", "--notes", "Ask about hearing test"]);

    env.run_ok(&["info", "clear"]);
    let info = env.run_json(&["info", "show", "--json"]);
    assert_eq!(info["notes"], "Ask about hearing test");

    env.run_ok(&["info", "clear", "--yes"]);
    let info = env.run_json(&["info", "show", "--json"]);
    assert_eq!(info["notes"], "");
}

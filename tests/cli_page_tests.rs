//! End-to-end tests for `ds-pathway page` and `ds-pathway speak`.

mod fixtures;
use fixtures::*;

#[test]
fn test_page_json_follows_register() {
    let env = TestEnv::new();
    let standard = env.run_json(&["page", "services", "--json"]);
    assert_eq!(standard["id"], "services");
    assert_eq!(standard["easyRead"], false);

    env.run_ok(&["settings", "set", "--easy-read", "on"]);
    let easy = env.run_json(&["page", "services", "--json"]);
    assert_eq!(easy["easyRead"], true);
    assert_ne!(easy["description"], standard["description"]);
}

#[test]
fn test_page_defaults_to_home() {
    let env = TestEnv::new();
    let stdout = env.run_ok(&["page"]);
    assert!(stdout.contains("Down Syndrome Pathway"), "stdout: {stdout}");
}

#[test]
fn test_unknown_page_rejected() {
    let env = TestEnv::new();
    let output = env.run(&["page", "settings-panel"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Unknown page"));
}

#[test]
fn test_page_without_synthesiser_still_prints() {
    let env = TestEnv::new();
    env.run_ok(&["config", "set", "--speech-command", "/nonexistent/espeak-ng"]);
    env.run_ok(&["settings", "set", "--auto-play", "on"]);
    let stdout = env.run_ok(&["page", "about"]);
    assert!(!stdout.is_empty());
}

#[test]
fn test_speak_without_synthesiser_is_not_an_error() {
    let env = TestEnv::new();
    env.run_ok(&["config", "set", "--speech-command", "/nonexistent/espeak-ng"]);
    let stdout = env.run_ok(&["speak", "Hello", "there"]);
    assert!(stdout.contains("Read aloud is not available"), "stdout: {stdout}");
}

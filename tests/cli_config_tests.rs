//! End-to-end tests for `ds-pathway config` commands.

mod fixtures;
use fixtures::*;

#[test]
fn test_config_show_default() {
    let env = TestEnv::new();
    let stdout = env.run_ok(&["config", "show"]);
    assert!(stdout.contains("DS Pathway Configuration"));
    assert!(stdout.contains("Theme Mode: auto"));
}

#[test]
fn test_config_show_json_schema() {
    let env = TestEnv::new();
    let result = env.run_json(&["config", "show", "--json"]);

    let data_dir = result["storage"]["data_dir"].as_str().expect("data_dir");
    assert!(data_dir.starts_with(env.path().to_str().unwrap()));
    assert_eq!(result["speech"]["poll_interval_ms"], 100);
    assert_eq!(result["speech"]["voice_lang"], "en-GB");
    assert!(result["speech"].get("command").is_none());
    assert_eq!(result["ui"]["theme"], "auto");
}

#[test]
fn test_config_set_persists() {
    let env = TestEnv::new();
    let stdout = env.run_ok(&[
        "config",
        "set",
        "--theme",
        "dark",
        "--poll-interval-ms",
        "250",
        "--voice-lang",
        "en-US",
    ]);
    assert!(stdout.contains("Configuration updated successfully."));
    assert!(env.path().join("config.toml").exists());

    let result = env.run_json(&["config", "show", "--json"]);
    assert_eq!(result["ui"]["theme"], "dark");
    assert_eq!(result["speech"]["poll_interval_ms"], 250);
    assert_eq!(result["speech"]["voice_lang"], "en-US");
}

#[test]
fn test_config_set_requires_an_option() {
    let env = TestEnv::new();
    let output = env.run(&["config", "set"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("At least one configuration option"));
}

#[test]
fn test_config_set_rejects_zero_poll_interval() {
    let env = TestEnv::new();
    let output = env.run(&["config", "set", "--poll-interval-ms", "0"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(!env.path().join("config.toml").exists());
}

#[test]
fn test_config_set_invalid_theme() {
    let env = TestEnv::new();
    let output = env.run(&["config", "set", "--theme", "purple"]);
    assert_ne!(output.status.code(), Some(0));
}

#[test]
fn test_data_dir_moves_storage() {
    let env = TestEnv::new();
    let data_dir = env.path().join("elsewhere");
    env.run_ok(&["config", "set", "--data-dir", data_dir.to_str().unwrap()]);
    env.run_ok(&["role", "set", "educator"]);

    let entries = std::fs::read_dir(&data_dir)
        .expect("data dir created")
        .count();
    assert!(entries > 0, "role should be stored under the new data dir");
}

#[test]
fn test_corrupt_config_is_validation_error() {
    let env = TestEnv::new();
    env.write_file("config.toml", "[speech]\npoll_interval_ms = \"fast\"\n");
    let output = env.run(&["settings", "show"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Failed to load configuration"));
}

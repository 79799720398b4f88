//! Integration tests for the settings bootstrap

use std::fs;

use ccdont::settings::{
    default_hook, notification_hook, register_notification, register_pre_tool_use, Registration,
};
use serde_json::Value;
use tempfile::tempdir;

#[test]
fn test_init_creates_settings_under_claude_dir() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".claude").join("settings.json");

    let outcome = register_pre_tool_use(&path, &default_hook("ccdont")).unwrap();
    assert_eq!(outcome, Registration::Added);

    let value: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["hooks"]["PreToolUse"][0]["matcher"], "Bash");
    assert_eq!(
        value["hooks"]["PreToolUse"][0]["hooks"][0]["command"],
        "ccdont --deny-danger"
    );
    assert_eq!(value["hooks"]["PreToolUse"][0]["hooks"][0]["type"], "command");
}

#[test]
fn test_init_twice_registers_once() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let hook = default_hook("ccdont");

    assert_eq!(
        register_pre_tool_use(&path, &hook).unwrap(),
        Registration::Added
    );
    assert_eq!(
        register_pre_tool_use(&path, &hook).unwrap(),
        Registration::AlreadyPresent
    );

    let value: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        value["hooks"]["PreToolUse"][0]["hooks"]
            .as_array()
            .unwrap()
            .len(),
        1
    );
}

#[test]
fn test_init_keeps_foreign_hooks_and_settings() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(
        &path,
        r#"{
  "model": "opus",
  "permissions": {"allow": ["Bash(ls:*)"]},
  "hooks": {
    "PreToolUse": [
      {"matcher": "Bash", "hooks": [{"type": "command", "command": "some-other-gate"}]}
    ]
  }
}"#,
    )
    .unwrap();

    let outcome = register_pre_tool_use(&path, &default_hook("ccdont")).unwrap();
    assert_eq!(outcome, Registration::Added);

    let value: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["model"], "opus");
    assert_eq!(value["permissions"]["allow"][0], "Bash(ls:*)");

    let hooks = value["hooks"]["PreToolUse"][0]["hooks"].as_array().unwrap();
    assert_eq!(hooks.len(), 2);
    assert_eq!(hooks[0]["command"], "some-other-gate");
    assert_eq!(hooks[1]["command"], "ccdont --deny-danger");
}

#[test]
fn test_notification_registration_is_idempotent() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let hook = notification_hook("ccdont");

    assert_eq!(
        register_notification(&path, &hook).unwrap(),
        Registration::Added
    );
    assert_eq!(
        register_notification(&path, &hook).unwrap(),
        Registration::AlreadyPresent
    );

    let value: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["hooks"]["Notification"][0]["matcher"], "");
    assert_eq!(
        value["hooks"]["Notification"][0]["hooks"][0]["command"],
        "ccdont notify"
    );
}

#[test]
fn test_bash_and_notification_hooks_coexist() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");

    register_pre_tool_use(&path, &default_hook("ccdont")).unwrap();
    register_notification(&path, &notification_hook("ccdont")).unwrap();

    let value: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert!(value["hooks"]["PreToolUse"].is_array());
    assert!(value["hooks"]["Notification"].is_array());
}

#[test]
fn test_malformed_settings_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(register_pre_tool_use(&path, &default_hook("ccdont")).is_err());
}

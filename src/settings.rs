//! Claude Code settings bootstrap (`ccdont init`)
//!
//! Reads or creates `.claude/settings.json` and registers the hook command
//! under the Bash matcher of `hooks.PreToolUse`. Idempotent: an entry whose
//! command already mentions ccdont is left alone. Keys the bootstrap does
//! not manage are carried through untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Substring that identifies our own entries in an existing settings file
pub const HOOK_MARKER: &str = "ccdont";

/// A single hook registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hook {
    #[serde(rename = "type")]
    pub hook_type: String,
    pub command: String,
}

/// A matcher with its hooks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Matcher {
    pub matcher: String,
    pub hooks: Vec<Hook>,
}

/// Hook tables keyed by event name
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Hooks {
    #[serde(rename = "PreToolUse", default, skip_serializing_if = "Vec::is_empty")]
    pub pre_tool_use: Vec<Matcher>,

    #[serde(rename = "Notification", default, skip_serializing_if = "Vec::is_empty")]
    pub notification: Vec<Matcher>,

    /// Hook events this tool does not manage
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// The settings file, with unrelated keys preserved
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hooks: Option<Hooks>,

    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// What a register call did to the settings file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Added,
    AlreadyPresent,
}

/// Resolve the invocation prefix used in registered hook commands.
///
/// Points at this binary when its path is known, with the bare name on the
/// PATH as the deterministic fallback.
pub fn invocation_prefix() -> String {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.to_str().map(String::from))
        .unwrap_or_else(|| "ccdont".to_string())
}

/// The hook command `init` registers for Bash PreToolUse events
pub fn default_hook(prefix: &str) -> Hook {
    Hook {
        hook_type: "command".to_string(),
        command: format!("{} --deny-danger", prefix),
    }
}

/// The hook command `init --notify` registers for Notification events
pub fn notification_hook(prefix: &str) -> Hook {
    Hook {
        hook_type: "command".to_string(),
        command: format!("{} notify", prefix),
    }
}

fn load(path: &Path) -> Result<Settings, Box<dyn std::error::Error>> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    } else {
        Ok(Settings::default())
    }
}

fn store(path: &Path, settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(settings)?)?;
    Ok(())
}

fn register(matchers: &mut Vec<Matcher>, matcher_key: &str, hook: &Hook) -> Registration {
    if let Some(existing) = matchers.iter_mut().find(|m| m.matcher == matcher_key) {
        if existing
            .hooks
            .iter()
            .any(|h| h.command.contains(HOOK_MARKER))
        {
            return Registration::AlreadyPresent;
        }
        existing.hooks.push(hook.clone());
    } else {
        matchers.push(Matcher {
            matcher: matcher_key.to_string(),
            hooks: vec![hook.clone()],
        });
    }
    Registration::Added
}

/// Register the Bash PreToolUse hook, creating the settings file if needed
pub fn register_pre_tool_use(
    path: &Path,
    hook: &Hook,
) -> Result<Registration, Box<dyn std::error::Error>> {
    let mut settings = load(path)?;
    let hooks = settings.hooks.get_or_insert_with(Hooks::default);
    let outcome = register(&mut hooks.pre_tool_use, "Bash", hook);
    store(path, &settings)?;
    Ok(outcome)
}

/// Register the Notification hook under the catch-all matcher
pub fn register_notification(
    path: &Path,
    hook: &Hook,
) -> Result<Registration, Box<dyn std::error::Error>> {
    let mut settings = load(path)?;
    let hooks = settings.hooks.get_or_insert_with(Hooks::default);
    let outcome = register(&mut hooks.notification, "", hook);
    store(path, &settings)?;
    Ok(outcome)
}

//! Desktop notification dispatch (`ccdont notify`)
//!
//! Handles Notification hook payloads: pulls the most recent user prompt
//! out of the session transcript and surfaces it via the platform notifier
//! binary. A missing notifier is an error the caller reports, never a
//! panic.

use serde::Deserialize;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

/// Platform notifier binary
#[cfg(target_os = "macos")]
pub const NOTIFIER_BIN: &str = "terminal-notifier";
#[cfg(not(target_os = "macos"))]
pub const NOTIFIER_BIN: &str = "notify-send";

/// Notification payload from Claude Code
#[derive(Debug, Deserialize)]
pub struct NotificationInput {
    #[serde(default)]
    pub session_id: Option<String>,

    #[serde(default)]
    pub transcript_path: Option<String>,

    #[serde(default)]
    pub hook_event_name: Option<String>,

    #[serde(default)]
    pub message: Option<String>,
}

impl NotificationInput {
    /// Parse input from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Extract the last user prompt from a transcript JSONL file.
///
/// Scans newest-first, skipping unparseable lines. User turns carry the
/// prompt either as a plain string or as a list of content blocks.
pub fn last_user_prompt(path: &Path) -> Option<String> {
    let data = std::fs::read_to_string(path).ok()?;

    for line in data.lines().rev() {
        let Ok(value) = serde_json::from_str::<serde_json::Value>(line) else {
            continue;
        };
        if let Some(text) = prompt_text(&value) {
            return Some(text);
        }
    }

    None
}

fn prompt_text(value: &serde_json::Value) -> Option<String> {
    use serde_json::Value;

    let is_user = value.get("type").and_then(Value::as_str) == Some("user")
        || value.pointer("/message/role").and_then(Value::as_str) == Some("user");
    if !is_user {
        return None;
    }

    let message = value.get("message")?;
    let content = message.get("content").or_else(|| message.get("text"))?;

    if let Some(text) = content.as_str() {
        return Some(text.to_string());
    }
    if let Some(blocks) = content.as_array() {
        for block in blocks {
            if block.get("type").and_then(Value::as_str) == Some("text") {
                if let Some(text) = block.get("text").and_then(Value::as_str) {
                    return Some(text.to_string());
                }
            }
        }
    }

    None
}

/// Collapse whitespace and cap the preview shown in the notification body
pub fn preview(prompt: &str) -> String {
    let collapsed = prompt.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.chars().take(120).collect()
}

/// Check that the notifier binary is reachable on the PATH
pub fn notifier_available() -> bool {
    Command::new("which")
        .arg(NOTIFIER_BIN)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

#[cfg(target_os = "macos")]
fn notifier_command(title: &str, body: &str) -> Command {
    let mut cmd = Command::new(NOTIFIER_BIN);
    cmd.arg("-title").arg(title).arg("-message").arg(body);
    cmd
}

#[cfg(not(target_os = "macos"))]
fn notifier_command(title: &str, body: &str) -> Command {
    let mut cmd = Command::new(NOTIFIER_BIN);
    cmd.arg(title).arg(body);
    cmd
}

/// Send a desktop notification
pub fn send(title: &str, body: &str) -> io::Result<()> {
    let status = notifier_command(title, body)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()?;

    if !status.success() {
        return Err(io::Error::new(
            io::ErrorKind::Other,
            format!("{} exited with {}", NOTIFIER_BIN, status),
        ));
    }
    Ok(())
}

/// Handle one Notification payload end to end
pub fn handle(input: &NotificationInput) -> io::Result<()> {
    let prompt = input
        .transcript_path
        .as_deref()
        .and_then(|p| last_user_prompt(Path::new(p)))
        .or_else(|| input.message.clone())
        .unwrap_or_else(|| "Task completed".to_string());

    send("Claude Code", &preview(&prompt))
}

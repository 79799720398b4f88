//! Input parsing for the Claude Code hook payload
//!
//! Parses the JSON that Claude Code writes to the hook's stdin. Payloads
//! for other events or tools are skipped by the caller with a neutral exit,
//! so every field the gate does not need is optional here.

use serde::Deserialize;

/// PreToolUse payload from Claude Code
#[derive(Debug, Deserialize)]
pub struct HookInput {
    /// Hook event name ("PreToolUse" when the hook is wired correctly)
    #[serde(default)]
    pub hook_event_name: Option<String>,

    /// Name of the tool being invoked (e.g., "Bash")
    pub tool_name: String,

    /// Tool parameters; only Bash's `command` matters to the gate
    #[serde(default)]
    pub tool_input: Option<ToolInput>,

    /// Session identifier, recorded in the decision log when present
    #[serde(default)]
    pub session_id: Option<String>,
}

/// The subset of tool parameters the gate reads
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolInput {
    #[serde(default)]
    pub command: Option<String>,
}

impl HookInput {
    /// Parse input from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Whether this payload is one the gate evaluates
    pub fn is_bash_pre_tool_use(&self) -> bool {
        self.hook_event_name.as_deref() == Some("PreToolUse") && self.tool_name == "Bash"
    }

    /// The proposed command, defaulting to empty when absent
    pub fn command(&self) -> &str {
        self.tool_input
            .as_ref()
            .and_then(|input| input.command.as_deref())
            .unwrap_or("")
    }

    /// Get a summary of the input for logging
    pub fn summary(&self) -> String {
        let command = self.command();
        let truncated: String = command.chars().take(100).collect();
        if truncated.len() < command.len() {
            format!("{}: {}...", self.tool_name, truncated)
        } else {
            format!("{}: {}", self.tool_name, command)
        }
    }
}

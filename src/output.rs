//! Hook responses for Claude Code
//!
//! The decision value, its JSON wire form, and the exit code the
//! orchestrator reads. Claude Code treats exit code 2 as "block the tool
//! call" and 0 as "proceed"; the JSON line on stdout carries the reason.

use serde::{Deserialize, Serialize};

use crate::rules::DenyRule;

/// Exit code that tells Claude Code to block the command
pub const EXIT_BLOCK: i32 = 2;

/// Exit code for approvals and skipped payloads
pub const EXIT_APPROVE: i32 = 0;

/// Exit code for operational failures (bad input, unwritable settings)
pub const EXIT_ERROR: i32 = 1;

/// The verdict half of a decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Approve,
    Block,
}

/// Decision for one evaluated command
///
/// Serialized as `{"decision":"approve"|"block","reason":"..."}`, the exact
/// shape the orchestrator parses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    #[serde(rename = "decision")]
    pub verdict: Verdict,
    pub reason: String,
}

impl Decision {
    /// Approve with the fixed "OK" reason
    pub fn approve() -> Self {
        Self {
            verdict: Verdict::Approve,
            reason: "OK".to_string(),
        }
    }

    /// Block with the given reason
    pub fn block(reason: impl Into<String>) -> Self {
        Self {
            verdict: Verdict::Block,
            reason: reason.into(),
        }
    }

    /// Build a decision from the engine's matched rule, if any
    pub fn from_violation(command: &str, violation: Option<&DenyRule>, style: ReasonStyle) -> Self {
        match violation {
            Some(rule) => Decision::block(style.render(command, rule)),
            None => Decision::approve(),
        }
    }

    /// Check if this is a block decision
    pub fn is_block(&self) -> bool {
        self.verdict == Verdict::Block
    }

    /// The exit code the orchestrator expects for this verdict
    pub fn exit_code(&self) -> i32 {
        match self.verdict {
            Verdict::Approve => EXIT_APPROVE,
            Verdict::Block => EXIT_BLOCK,
        }
    }

    /// Serialize to a single JSON line
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// How block reasons are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReasonStyle {
    /// The rule's message as-is; embedding callers pass it through unmodified
    #[default]
    Verbatim,

    /// Wrap the message with the offending command for standalone CLI output
    Wrapped,
}

impl ReasonStyle {
    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "verbatim" => Some(ReasonStyle::Verbatim),
            "wrapped" => Some(ReasonStyle::Wrapped),
            _ => None,
        }
    }

    /// Render the block reason for a violated rule
    pub fn render(&self, command: &str, rule: &DenyRule) -> String {
        match self {
            ReasonStyle::Verbatim => match &rule.message {
                Some(message) => message.clone(),
                None => format!("{} is not allowed to exec", rule.pattern),
            },
            ReasonStyle::Wrapped => match &rule.message {
                Some(message) => {
                    format!("Command \"{}\" is not allowed: {}", command, message)
                }
                None => format!("Command \"{}\" is not allowed.", command),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approve_json() {
        let decision = Decision::approve();
        assert_eq!(decision.to_json(), r#"{"decision":"approve","reason":"OK"}"#);
        assert_eq!(decision.exit_code(), EXIT_APPROVE);
    }

    #[test]
    fn test_block_json() {
        let decision = Decision::block("dangerous command");
        assert_eq!(
            decision.to_json(),
            r#"{"decision":"block","reason":"dangerous command"}"#
        );
        assert_eq!(decision.exit_code(), EXIT_BLOCK);
    }

    #[test]
    fn test_verbatim_render_with_message() {
        let rule = DenyRule::with_message("bun test", "use 'bun run test' instead");
        let reason = ReasonStyle::Verbatim.render("bun test", &rule);
        assert_eq!(reason, "use 'bun run test' instead");
    }

    #[test]
    fn test_verbatim_render_default_contains_pattern() {
        let rule = DenyRule::new("rm -rf");
        let reason = ReasonStyle::Verbatim.render("rm -rf /tmp", &rule);
        assert_eq!(reason, "rm -rf is not allowed to exec");
    }

    #[test]
    fn test_wrapped_render_with_message() {
        let rule = DenyRule::with_message("bun test", "use 'bun run test' instead");
        let reason = ReasonStyle::Wrapped.render("bun test --watch", &rule);
        assert_eq!(
            reason,
            "Command \"bun test --watch\" is not allowed: use 'bun run test' instead"
        );
    }

    #[test]
    fn test_wrapped_render_without_message() {
        let rule = DenyRule::new("rm -rf");
        let reason = ReasonStyle::Wrapped.render("rm -rf /tmp", &rule);
        assert_eq!(reason, "Command \"rm -rf /tmp\" is not allowed.");
    }

    #[test]
    fn test_reason_style_from_str() {
        assert_eq!(ReasonStyle::from_str("verbatim"), Some(ReasonStyle::Verbatim));
        assert_eq!(ReasonStyle::from_str("Wrapped"), Some(ReasonStyle::Wrapped));
        assert_eq!(ReasonStyle::from_str("fancy"), None);
    }

    #[test]
    fn test_from_violation() {
        let rule = DenyRule::with_message("sudo", "requires elevated permissions");
        let decision = Decision::from_violation("sudo ls", Some(&rule), ReasonStyle::Verbatim);
        assert!(decision.is_block());
        assert_eq!(decision.reason, "requires elevated permissions");

        let decision = Decision::from_violation("ls", None, ReasonStyle::Verbatim);
        assert!(!decision.is_block());
        assert_eq!(decision.reason, "OK");
    }
}

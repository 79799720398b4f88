//! Deny rules for ccdont
//!
//! Defines the deny-rule type, the `pattern [message]` rule-text grammar,
//! and the built-in dangerous-command catalog.

pub mod dangerous;

use once_cell::sync::Lazy;
use regex::Regex;

/// A deny rule: a literal substring pattern with an optional custom message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenyRule {
    /// Literal substring checked against the command (never a regex or glob)
    pub pattern: String,

    /// Message reported when this rule blocks a command
    pub message: Option<String>,
}

impl DenyRule {
    /// Create a rule with no custom message
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            message: None,
        }
    }

    /// Create a rule with a custom message
    pub fn with_message(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            message: Some(message.into()),
        }
    }
}

/// Rule-text grammar: a bracketed message suffix at the end of the string,
/// separated from the pattern by at least one whitespace character.
static RULE_TEXT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.+?)\s+\[(.+)\]$").unwrap());

/// Parse one raw rule string into a [`DenyRule`].
///
/// Grammar: `<pattern> [<message>]`. The message suffix is only recognized
/// when it ends the string, whitespace separates it from the pattern, and
/// its contents are non-empty after trimming; both parts are then trimmed.
/// In every other case the whole string, untrimmed, is the pattern.
///
/// Total over all inputs: the empty string yields a rule with an empty
/// pattern, which the engine never matches.
///
/// ```
/// use ccdont::rules::parse_rule;
///
/// let rule = parse_rule("bun test [use bun run test instead]");
/// assert_eq!(rule.pattern, "bun test");
/// assert_eq!(rule.message.as_deref(), Some("use bun run test instead"));
///
/// let rule = parse_rule("echo[test]");
/// assert_eq!(rule.pattern, "echo[test]");
/// assert!(rule.message.is_none());
/// ```
pub fn parse_rule(raw: &str) -> DenyRule {
    if let Some(caps) = RULE_TEXT.captures(raw) {
        let pattern = caps[1].trim();
        let message = caps[2].trim();
        if !pattern.is_empty() && !message.is_empty() {
            return DenyRule::with_message(pattern, message);
        }
    }

    DenyRule::new(raw)
}

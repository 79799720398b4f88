//! Decision engine for ccdont
//!
//! Evaluates one command against an ordered rule set. First match wins:
//! rule order is the only precedence mechanism, so callers set priority by
//! how they concatenate rule sources (user rules before the built-in
//! catalog). Stateless and total; every `(command, rules)` pair produces a
//! decision.

use crate::output::{Decision, ReasonStyle};
use crate::rules::DenyRule;

/// Find the first rule whose pattern is a literal substring of the command.
///
/// Matching is case-sensitive containment. An empty pattern never matches;
/// the parser only produces one from an empty rule string.
pub fn first_violation<'a>(command: &str, rules: &'a [DenyRule]) -> Option<&'a DenyRule> {
    rules
        .iter()
        .find(|rule| !rule.pattern.is_empty() && command.contains(&rule.pattern))
}

/// Evaluate a command against an ordered rule set.
///
/// No match approves with reason "OK". A match blocks with the rule's
/// message verbatim, or with `<pattern> is not allowed to exec` when the
/// rule has none.
pub fn decide(command: &str, rules: &[DenyRule]) -> Decision {
    decide_styled(command, rules, ReasonStyle::Verbatim)
}

/// Evaluate with an explicit reason-formatting style
pub fn decide_styled(command: &str, rules: &[DenyRule], style: ReasonStyle) -> Decision {
    Decision::from_violation(command, first_violation(command, rules), style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Verdict;

    #[test]
    fn test_empty_rule_set_approves() {
        let decision = decide("ls -la", &[]);
        assert_eq!(decision.verdict, Verdict::Approve);
        assert_eq!(decision.reason, "OK");
    }

    #[test]
    fn test_no_match_approves() {
        let rules = vec![DenyRule::new("rm -rf"), DenyRule::new("sudo")];
        let decision = decide("ls -la", &rules);
        assert_eq!(decision.verdict, Verdict::Approve);
        assert_eq!(decision.reason, "OK");
    }

    #[test]
    fn test_match_blocks_with_default_message() {
        let rules = vec![DenyRule::new("rm -rf")];
        let decision = decide("rm -rf /tmp", &rules);
        assert_eq!(decision.verdict, Verdict::Block);
        assert_eq!(decision.reason, "rm -rf is not allowed to exec");
    }

    #[test]
    fn test_match_blocks_with_custom_message() {
        let rules = vec![DenyRule::with_message("bun test", "use 'bun run test' instead")];
        let decision = decide("bun test", &rules);
        assert_eq!(decision.verdict, Verdict::Block);
        assert_eq!(decision.reason, "use 'bun run test' instead");
    }

    #[test]
    fn test_first_match_wins() {
        let rules = vec![
            DenyRule::with_message("sudo", "requires elevated permissions"),
            DenyRule::with_message("rm -rf", "dangerous command"),
        ];
        let decision = decide("sudo rm -rf /", &rules);
        assert_eq!(decision.verdict, Verdict::Block);
        assert_eq!(decision.reason, "requires elevated permissions");
    }

    #[test]
    fn test_partial_match_within_command() {
        let rules = vec![DenyRule::with_message("npm install -g", "use local installation")];
        let decision = decide("npm install -g typescript", &rules);
        assert_eq!(decision.verdict, Verdict::Block);
        assert_eq!(decision.reason, "use local installation");
    }

    #[test]
    fn test_empty_command_approves() {
        let rules = vec![DenyRule::new("test")];
        let decision = decide("", &rules);
        assert_eq!(decision.verdict, Verdict::Approve);
        assert_eq!(decision.reason, "OK");
    }

    #[test]
    fn test_empty_pattern_never_matches() {
        let rules = vec![DenyRule::new("")];
        let decision = decide("any command at all", &rules);
        assert_eq!(decision.verdict, Verdict::Approve);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let rules = vec![DenyRule::new("RM -RF")];
        let decision = decide("rm -rf /tmp", &rules);
        assert_eq!(decision.verdict, Verdict::Approve);
    }

    #[test]
    fn test_first_violation_returns_rule() {
        let rules = vec![DenyRule::new("a"), DenyRule::new("b")];
        let violation = first_violation("b only", &rules);
        assert_eq!(violation.map(|r| r.pattern.as_str()), Some("b"));
    }
}

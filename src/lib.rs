//! ccdont - Command-deny PreToolUse hook for Claude Code
//!
//! This library gates Bash commands proposed by Claude Code: each command is
//! checked against an ordered list of deny rules, and the first rule whose
//! pattern appears in the command blocks it.
//!
//! # Features
//!
//! - **Deny rules**: literal substring patterns with optional messages,
//!   written as `pattern [message]`
//! - **First-match-wins**: rule order sets precedence, so user rules placed
//!   before the built-in catalog override it
//! - **Dangerous-command catalog**: opt-in preset covering filesystem
//!   destruction, disk operations, destructive git, and more
//! - **Settings bootstrap**: `ccdont init` wires the hook into
//!   `.claude/settings.json`, idempotently
//! - **Decision log**: JSONL record of every evaluation
//! - **Notifications**: `ccdont notify` surfaces session activity via the
//!   desktop notifier
//!
//! # Example
//!
//! ```
//! use ccdont::{decide, parse_rule};
//!
//! let rules = vec![parse_rule("bun test [use 'bun run test' instead]")];
//!
//! let decision = decide("bun test --watch", &rules);
//! assert!(decision.is_block());
//! assert_eq!(decision.reason, "use 'bun run test' instead");
//!
//! let decision = decide("bun run test", &rules);
//! assert!(!decision.is_block());
//! ```

pub mod audit;
pub mod config;
pub mod engine;
pub mod input;
pub mod notify;
pub mod output;
pub mod rules;
pub mod settings;

// Re-exports for convenience
pub use config::Config;
pub use engine::{decide, decide_styled, first_violation};
pub use input::HookInput;
pub use output::{Decision, ReasonStyle, Verdict};
pub use rules::{parse_rule, DenyRule};

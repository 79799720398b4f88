//! JSONL decision logging for ccdont
//!
//! Records every evaluation to a JSONL file for later analysis. Logging
//! failures are reported to stderr by the caller and never change the
//! decision.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::input::HookInput;
use crate::output::{Decision, Verdict};

/// Log level for decision-log entries
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Approved,
    Blocked,
    Skipped,
}

/// A decision-log entry
#[derive(Debug, Serialize)]
pub struct AuditEntry {
    /// Timestamp of the decision
    pub timestamp: DateTime<Utc>,

    /// Log level (APPROVED, BLOCKED, SKIPPED)
    pub level: LogLevel,

    /// Tool named in the payload
    pub tool: String,

    /// Pattern of the violated rule (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Summary of the input
    pub input_summary: String,

    /// Reason for the decision
    pub reason: String,

    /// Session ID (if provided)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl AuditEntry {
    /// Create an entry for an evaluated command
    pub fn new(input: &HookInput, decision: &Decision, pattern: Option<&str>) -> Self {
        let level = match decision.verdict {
            Verdict::Approve => LogLevel::Approved,
            Verdict::Block => LogLevel::Blocked,
        };

        Self {
            timestamp: Utc::now(),
            level,
            tool: input.tool_name.clone(),
            pattern: pattern.map(String::from),
            input_summary: input.summary(),
            reason: decision.reason.clone(),
            session_id: input.session_id.clone(),
        }
    }

    /// Create an entry for a payload the gate did not evaluate
    pub fn skipped(input: &HookInput) -> Self {
        Self {
            timestamp: Utc::now(),
            level: LogLevel::Skipped,
            tool: input.tool_name.clone(),
            pattern: None,
            input_summary: input.summary(),
            reason: "not a Bash PreToolUse payload".to_string(),
            session_id: input.session_id.clone(),
        }
    }
}

/// Decision logger
pub struct AuditLogger {
    writer: Option<BufWriter<File>>,
}

impl AuditLogger {
    /// Create a new logger appending to the given path
    pub fn new(path: Option<&Path>) -> Self {
        let writer = path.and_then(|p| {
            // Ensure parent directory exists
            if let Some(parent) = p.parent() {
                let _ = std::fs::create_dir_all(parent);
            }

            OpenOptions::new()
                .create(true)
                .append(true)
                .open(p)
                .ok()
                .map(BufWriter::new)
        });

        Self { writer }
    }

    /// Log an entry
    pub fn log(&mut self, entry: &AuditEntry) -> Result<(), std::io::Error> {
        if let Some(ref mut writer) = self.writer {
            let json = serde_json::to_string(entry)?;
            writeln!(writer, "{}", json)?;
            writer.flush()?;
        }
        Ok(())
    }

    /// Log a decision
    pub fn log_decision(
        &mut self,
        input: &HookInput,
        decision: &Decision,
        pattern: Option<&str>,
    ) -> Result<(), std::io::Error> {
        let entry = AuditEntry::new(input, decision, pattern);
        self.log(&entry)
    }

    /// Check if logging is enabled
    pub fn is_enabled(&self) -> bool {
        self.writer.is_some()
    }
}

/// Create a disabled logger (for when the decision log is off)
impl Default for AuditLogger {
    fn default() -> Self {
        Self { writer: None }
    }
}

//! Configuration loading for ccdont
//!
//! Supports TOML configuration with embedded defaults.

use serde::Deserialize;
use std::path::PathBuf;

use crate::output::ReasonStyle;

/// General configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// How block reasons are rendered (verbatim or wrapped)
    pub reason_style: ReasonStyle,

    /// Enable the JSONL decision log
    pub audit_log: bool,

    /// Path to the decision log file
    pub audit_path: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            reason_style: ReasonStyle::Verbatim,
            audit_log: true,
            audit_path: Some("~/.claude/ccdont/decisions.jsonl".to_string()),
        }
    }
}

/// Rule configuration section
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RulesConfig {
    /// Raw rule strings in the `pattern [message]` grammar
    pub deny: Vec<String>,

    /// Append the built-in dangerous-command catalog after user rules
    pub deny_danger: bool,
}

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub rules: RulesConfig,
}

impl Config {
    /// Load configuration from the standard locations or use defaults
    pub fn load() -> Self {
        let config_paths = [
            // User-specific config
            dirs::home_dir().map(|p| p.join(".claude/ccdont/config.toml")),
            // System-wide config
            Some(PathBuf::from("/etc/ccdont/config.toml")),
        ];

        for path in config_paths.into_iter().flatten() {
            if path.exists() {
                if let Ok(content) = std::fs::read_to_string(&path) {
                    match toml::from_str(&content) {
                        Ok(config) => return config,
                        Err(e) => {
                            eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                        }
                    }
                }
            }
        }

        Config::default()
    }

    /// Load from a specific path
    pub fn load_from(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Expand ~ in path strings
    pub fn expand_path(path: &str) -> PathBuf {
        if path.starts_with("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(&path[2..]);
            }
        }
        PathBuf::from(path)
    }

    /// Get the decision log path (expanded)
    pub fn audit_path(&self) -> Option<PathBuf> {
        self.general.audit_path.as_ref().map(|p| Self::expand_path(p))
    }
}

/// Embedded default configuration
pub const DEFAULT_CONFIG_TOML: &str = r#"
[general]
reason_style = "verbatim"
audit_log = true
audit_path = "~/.claude/ccdont/decisions.jsonl"

[rules]
deny = [
    "bun test [use 'bun run test' instead]",
]
deny_danger = true
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.general.reason_style, ReasonStyle::Verbatim);
        assert!(config.general.audit_log);
        assert!(config.rules.deny.is_empty());
        assert!(!config.rules.deny_danger);
    }

    #[test]
    fn test_parse_embedded_config() {
        let config: Config = toml::from_str(DEFAULT_CONFIG_TOML).unwrap();
        assert_eq!(config.general.reason_style, ReasonStyle::Verbatim);
        assert!(config.rules.deny_danger);
        assert_eq!(config.rules.deny.len(), 1);
    }

    #[test]
    fn test_parse_wrapped_style() {
        let config: Config = toml::from_str("[general]\nreason_style = \"wrapped\"\n").unwrap();
        assert_eq!(config.general.reason_style, ReasonStyle::Wrapped);
    }

    #[test]
    fn test_expand_path() {
        let expanded = Config::expand_path("~/.claude/ccdont/decisions.jsonl");
        assert!(!expanded.to_string_lossy().starts_with('~'));
    }
}

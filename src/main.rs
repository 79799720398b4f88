//! ccdont - Command-deny PreToolUse hook for Claude Code
//!
//! Reads a hook payload from stdin, evaluates the proposed Bash command
//! against deny rules, and answers with a JSON decision plus the exit code
//! Claude Code interprets (2 = block, 0 = proceed).
//!
//! # Usage
//!
//! ```bash
//! # As a hook (reads JSON from stdin, writes JSON to stdout)
//! echo '{"hook_event_name":"PreToolUse","tool_name":"Bash","tool_input":{"command":"rm -rf /"}}' | ccdont --deny-danger
//!
//! # With custom rules
//! ccdont --deny "bun test [use 'bun run test' instead]"
//!
//! # Wire the hook into .claude/settings.json
//! ccdont init
//! ```

use std::env;
use std::io::{self, Read};
use std::path::Path;

use ccdont::{
    audit::{AuditEntry, AuditLogger},
    config::Config,
    engine::first_violation,
    input::HookInput,
    notify::{self, NotificationInput},
    output::{Decision, ReasonStyle, EXIT_APPROVE, EXIT_ERROR},
    rules::{dangerous, parse_rule, DenyRule},
    settings::{self, Registration},
};

/// Print version information
fn print_version() {
    println!("ccdont {}", env!("CARGO_PKG_VERSION"));
}

/// Print help message
fn print_help() {
    println!(
        r#"ccdont - Command-deny PreToolUse hook for Claude Code

USAGE:
    ccdont [OPTIONS]           Run as a hook (reads JSON from stdin)
    ccdont init [--notify]     Register the hook in .claude/settings.json
    ccdont notify              Handle a Notification hook payload

OPTIONS:
    -h, --help                 Print this help message
    -v, --version              Print version information
    -d, --deny RULE            Deny rule "pattern [message]" (repeatable)
        --deny-danger          Also deny the built-in dangerous-command catalog
    -s, --reason-style STYLE   Block reason style: verbatim, wrapped (default: verbatim)
    -c, --config PATH          Path to config file

USAGE AS HOOK:
    Configure in .claude/settings.json (or run `ccdont init`):
    {{
      "hooks": {{
        "PreToolUse": [{{
          "matcher": "Bash",
          "hooks": [{{"type": "command", "command": "ccdont --deny-danger"}}]
        }}]
      }}
    }}
"#
    );
}

/// Parse command line arguments
struct Args {
    help: bool,
    version: bool,
    init: bool,
    notify: bool,
    add_notification: bool,
    deny: Vec<String>,
    deny_danger: bool,
    reason_style: Option<ReasonStyle>,
    config_path: Option<String>,
}

impl Args {
    fn parse() -> Self {
        let args: Vec<String> = env::args().collect();
        let mut result = Args {
            help: false,
            version: false,
            init: false,
            notify: false,
            add_notification: false,
            deny: Vec::new(),
            deny_danger: false,
            reason_style: None,
            config_path: None,
        };

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "init" if i == 1 => result.init = true,
                "notify" if i == 1 => result.notify = true,
                "-h" | "--help" => result.help = true,
                "-v" | "--version" => result.version = true,
                "--deny-danger" => result.deny_danger = true,
                "--notify" => result.add_notification = true,
                "-d" | "--deny" => {
                    if i + 1 < args.len() {
                        i += 1;
                        result.deny.push(args[i].clone());
                    }
                }
                "-s" | "--reason-style" => {
                    if i + 1 < args.len() {
                        i += 1;
                        result.reason_style = ReasonStyle::from_str(&args[i]);
                    }
                }
                "-c" | "--config" => {
                    if i + 1 < args.len() {
                        i += 1;
                        result.config_path = Some(args[i].clone());
                    }
                }
                arg if arg.starts_with("--deny=") => {
                    result.deny.push(arg.trim_start_matches("--deny=").to_string());
                }
                arg if arg.starts_with("--reason-style=") => {
                    let style = arg.trim_start_matches("--reason-style=");
                    result.reason_style = ReasonStyle::from_str(style);
                }
                arg if arg.starts_with("--config=") => {
                    let path = arg.trim_start_matches("--config=");
                    result.config_path = Some(path.to_string());
                }
                _ => {}
            }
            i += 1;
        }

        result
    }
}

fn main() {
    let args = Args::parse();

    if args.help {
        print_help();
        return;
    }

    if args.version {
        print_version();
        return;
    }

    let code = if args.init {
        run_init(&args)
    } else if args.notify {
        run_notify()
    } else {
        run_hook(&args)
    };

    std::process::exit(code);
}

/// Hook mode: evaluate one PreToolUse payload from stdin
fn run_hook(args: &Args) -> i32 {
    // Load configuration
    let mut config = if let Some(ref path) = args.config_path {
        Config::load_from(Path::new(path)).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to load config from {}: {}", path, e);
            Config::default()
        })
    } else {
        Config::load()
    };

    // CLI flags override the config file
    if let Some(style) = args.reason_style {
        config.general.reason_style = style;
    }
    if args.deny_danger {
        config.rules.deny_danger = true;
    }

    // User rules first, catalog last: first match wins, so earlier sources
    // take precedence
    let mut rules: Vec<DenyRule> = args.deny.iter().map(|raw| parse_rule(raw)).collect();
    rules.extend(config.rules.deny.iter().map(|raw| parse_rule(raw)));
    if config.rules.deny_danger {
        rules.extend(dangerous::dangerous_rules());
    }

    // Read JSON from stdin
    let mut input_json = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input_json) {
        eprintln!("Error: Failed to read stdin: {}", e);
        return EXIT_ERROR;
    }

    let input = match HookInput::from_json(&input_json) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error: Failed to parse hook input: {}", e);
            return EXIT_ERROR;
        }
    };

    let mut logger = if config.general.audit_log {
        AuditLogger::new(config.audit_path().as_deref())
    } else {
        AuditLogger::default()
    };

    // Other events and tools are none of our business: no output, neutral exit
    if !input.is_bash_pre_tool_use() {
        if let Err(e) = logger.log(&AuditEntry::skipped(&input)) {
            eprintln!("Warning: Failed to write decision log: {}", e);
        }
        return EXIT_APPROVE;
    }

    let violation = first_violation(input.command(), &rules);
    let decision =
        Decision::from_violation(input.command(), violation, config.general.reason_style);

    if let Err(e) = logger.log_decision(&input, &decision, violation.map(|r| r.pattern.as_str())) {
        eprintln!("Warning: Failed to write decision log: {}", e);
    }

    println!("{}", decision.to_json());
    decision.exit_code()
}

/// `init` mode: wire the hook into .claude/settings.json
fn run_init(args: &Args) -> i32 {
    let settings_path = Path::new(".claude").join("settings.json");
    let prefix = settings::invocation_prefix();

    match settings::register_pre_tool_use(&settings_path, &settings::default_hook(&prefix)) {
        Ok(Registration::Added) => println!("Added ccdont hook for Bash commands"),
        Ok(Registration::AlreadyPresent) => println!("ccdont hook already configured"),
        Err(e) => {
            eprintln!("Error: Failed to update {}: {}", settings_path.display(), e);
            return EXIT_ERROR;
        }
    }

    if args.add_notification {
        if !notify::notifier_available() {
            eprintln!(
                "Error: {} not found; install it to enable notifications",
                notify::NOTIFIER_BIN
            );
            return EXIT_ERROR;
        }

        match settings::register_notification(&settings_path, &settings::notification_hook(&prefix))
        {
            Ok(Registration::Added) => println!("Added Claude notifications"),
            Ok(Registration::AlreadyPresent) => println!("Notifications already configured"),
            Err(e) => {
                eprintln!("Error: Failed to update {}: {}", settings_path.display(), e);
                return EXIT_ERROR;
            }
        }
    }

    println!("Settings saved to {}", settings_path.display());
    EXIT_APPROVE
}

/// `notify` mode: handle one Notification payload from stdin
fn run_notify() -> i32 {
    let mut input_json = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input_json) {
        eprintln!("Error: Failed to read stdin: {}", e);
        return EXIT_ERROR;
    }

    let input = match NotificationInput::from_json(&input_json) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error: Failed to parse notification input: {}", e);
            return EXIT_ERROR;
        }
    };

    if let Err(e) = notify::handle(&input) {
        eprintln!("Error: Failed to send notification: {}", e);
        return EXIT_ERROR;
    }

    EXIT_APPROVE
}

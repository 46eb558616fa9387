//! cc-worktree-gate: PreToolUse hook for Claude Code.
//!
//! Reads JSON from stdin; when `tool_input.command` contains a configured
//! pattern (by default `git worktree`), writes a permission decision to
//! stdout. Otherwise writes nothing and exits 0 so the host applies its
//! own default policy. Malformed input exits 1.

use std::io::Read;

use cc_worktree_gate::config::Config;
use cc_worktree_gate::eval::RuleSet;
use cc_worktree_gate::hook::{HookInput, HookOutput};
use cc_worktree_gate::logging;

fn main() {
    let mut args = std::env::args().skip(1);
    if let Some(arg) = args.next() {
        match arg.as_str() {
            "--dump-config" => {
                let config = Config::load();
                match toml::to_string_pretty(&config) {
                    Ok(s) => print!("{s}"),
                    Err(e) => {
                        eprintln!("failed to serialize config: {e}");
                        std::process::exit(1);
                    }
                }
                return;
            }
            other => {
                eprintln!("unknown argument: {other}");
                eprintln!("usage: cc-worktree-gate [--dump-config]  (hook input on stdin)");
                std::process::exit(2);
            }
        }
    }

    let mut input = String::new();
    if std::io::stdin().read_to_string(&mut input).is_err() {
        eprintln!("failed to read stdin");
        std::process::exit(1);
    }

    let hook_input: HookInput = match serde_json::from_str(&input) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("JSON parse error: {e}");
            std::process::exit(1);
        }
    };

    let config = Config::load();
    logging::init(config.settings.log_decisions);

    let tool_name = hook_input.tool_name;
    let command = hook_input
        .tool_input
        .and_then(|t| t.command)
        .unwrap_or_default();

    if command.is_empty() {
        std::process::exit(0);
    }

    let rules = RuleSet::from_config(&config);
    let approval = rules.evaluate(&command);
    logging::log_decision(tool_name.as_deref(), &command, approval.as_ref());

    if let Some(approval) = approval {
        let output = HookOutput::allow(approval.reason);
        println!("{}", serde_json::to_string(&output).unwrap());
    }
}

//! cc-worktree-gate: a PreToolUse hook for Claude Code that auto-approves
//! git worktree commands.
//!
//! The hook reads one JSON document from stdin, inspects the command string
//! at `tool_input.command`, and when it contains a configured pattern
//! (by default `git worktree`, with any run of whitespace between the words)
//! writes a permission decision to stdout. Commands that match no rule
//! produce no output, leaving the host's default policy in charge.
//!
//! # Architecture
//!
//! - **[`pattern`]** — Whitespace-separated word-sequence matching.
//! - **[`eval`]** — Rule set compiled from configuration; first match wins.
//! - **[`hook`]** — Wire types for the host protocol (stdin input, stdout decision).
//! - **[`config`]** — Configuration loading: embedded defaults + user overlay merge.
//! - **[`logging`]** — Decision logging to `~/.local/share/cc-worktree-gate/hook.log`.

/// Configuration types, loading, and overlay merge logic.
pub mod config;
/// Rule set compilation and command evaluation.
pub mod eval;
/// Serde types for the hook protocol.
pub mod hook;
/// File-based decision logging.
pub mod logging;
/// Word-sequence pattern matching.
pub mod pattern;

use eval::Approval;

/// Build the rule set from default config and evaluate a command string.
///
/// This is the main entry point for tests and simple usage.
/// For CLI usage with the user config overlay, build the rule set directly.
pub fn evaluate(command: &str) -> Option<Approval> {
    let config = config::Config::default_config();
    let rules = eval::RuleSet::from_config(&config);
    rules.evaluate(command)
}

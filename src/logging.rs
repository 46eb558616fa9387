use std::fs::OpenOptions;
use std::path::Path;

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use crate::eval::Approval;

/// Initialize file logging to ~/.local/share/cc-worktree-gate/hook.log.
/// Best-effort: any failure leaves logging disabled (logging must never
/// block the hook).
pub fn init(enabled: bool) {
    if !enabled {
        return;
    }
    let Some(home) = std::env::var_os("HOME") else {
        return;
    };
    let log_dir = Path::new(&home).join(".local/share/cc-worktree-gate");
    if std::fs::create_dir_all(&log_dir).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("hook.log"))
    else {
        return;
    };
    let config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let _ = WriteLogger::init(LevelFilter::Info, config, file);
}

/// Record the outcome for one command. No-op unless `init` succeeded.
pub fn log_decision(tool_name: Option<&str>, command: &str, approval: Option<&Approval>) {
    let tool = tool_name.unwrap_or("?");
    let cmd_truncated: String = command.chars().take(200).collect();
    match approval {
        Some(a) => log::info!(
            "allow\ttool={tool}\tpattern={}\tcmd={cmd_truncated}",
            a.pattern
        ),
        None => log::info!("pass\ttool={tool}\tcmd={cmd_truncated}"),
    }
}

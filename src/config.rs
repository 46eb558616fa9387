use serde::{Deserialize, Serialize};

/// Embedded default configuration.
const DEFAULT_CONFIG: &str = include_str!("../config.default.toml");

// ── Final (merged) config types ──

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub rules: Vec<Rule>,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub log_decisions: bool,
}

/// One approval rule: commands containing `pattern` (words separated by
/// whitespace runs) are approved with `reason`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Rule {
    pub pattern: String,
    pub reason: String,
}

// ── Overlay types (user config that merges with defaults) ──

#[derive(Debug, Deserialize, Default)]
struct ConfigOverlay {
    #[serde(default)]
    settings: SettingsOverlay,
    /// When true, the overlay's rules replace the defaults entirely.
    #[serde(default)]
    replace_rules: bool,
    #[serde(default)]
    rules: Vec<Rule>,
    /// Patterns to subtract from the default rules.
    #[serde(default)]
    remove_rules: Vec<String>,
}

#[derive(Debug, Deserialize, Default)]
struct SettingsOverlay {
    log_decisions: Option<bool>,
}

// ── Merge logic ──

/// Merge overlay rules into the default rules.
/// In replace mode: overlay rules replace defaults entirely.
/// In merge mode: remove listed patterns first, then add the overlay's rules;
/// an overlay rule whose pattern already exists overrides that rule's reason.
fn merge_rules(base: &mut Vec<Rule>, add: Vec<Rule>, remove: &[String], replace: bool) {
    if replace {
        *base = add;
        return;
    }
    base.retain(|rule| !remove.contains(&rule.pattern));
    for rule in add {
        if let Some(existing) = base.iter_mut().find(|r| r.pattern == rule.pattern) {
            existing.reason = rule.reason;
        } else {
            base.push(rule);
        }
    }
}

impl Config {
    /// Load the default embedded configuration.
    pub fn default_config() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("embedded default config must parse")
    }

    /// Load configuration with resolution order:
    /// 1. Start with embedded defaults
    /// 2. Merge user overlay from ~/.config/cc-worktree-gate/config.toml (if exists)
    ///
    /// User config merges with defaults: rules extend, scalars override.
    /// Set `replace_rules = true` to replace the default rules entirely.
    /// Use `remove_rules` to subtract specific patterns from the defaults.
    pub fn load() -> Self {
        let mut config = Self::default_config();
        if let Some(overlay) = Self::load_overlay() {
            config.apply_overlay(overlay);
        }
        config
    }

    /// Try to load user overlay from ~/.config/cc-worktree-gate/config.toml.
    fn load_overlay() -> Option<ConfigOverlay> {
        let home = std::env::var_os("HOME")?;
        let path = std::path::Path::new(&home).join(".config/cc-worktree-gate/config.toml");
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(overlay) => Some(overlay),
            Err(e) => {
                eprintln!("cc-worktree-gate: config parse error: {e}");
                None
            }
        }
    }

    /// Apply an overlay on top of this config (merge semantics).
    fn apply_overlay(&mut self, overlay: ConfigOverlay) {
        // Settings: scalar overrides
        if let Some(v) = overlay.settings.log_decisions {
            self.settings.log_decisions = v;
        }

        merge_rules(
            &mut self.rules,
            overlay.rules,
            &overlay.remove_rules,
            overlay.replace_rules,
        );
    }

    /// Apply an overlay from a TOML string. Used for testing.
    #[cfg(test)]
    fn apply_overlay_str(&mut self, toml_str: &str) {
        let overlay: ConfigOverlay = toml::from_str(toml_str).unwrap();
        self.apply_overlay(overlay);
    }
}

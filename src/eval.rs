use crate::config::Config;
use crate::pattern::WordSequence;

/// An approval produced by a matching rule.
#[derive(Debug, Clone)]
pub struct Approval {
    /// The pattern string of the rule that matched.
    pub pattern: String,
    /// Human-readable reason reported to the host.
    pub reason: String,
}

/// A rule with its pattern compiled for matching.
struct CompiledRule {
    sequence: WordSequence,
    pattern: String,
    reason: String,
}

/// The set of approval rules, compiled from configuration.
///
/// Evaluation returns the first matching rule's approval, or `None` when no
/// rule matches — the hook then stays silent and the host applies its own
/// default policy. There is no deny path: this gate only ever widens what
/// runs without confirmation.
pub struct RuleSet {
    rules: Vec<CompiledRule>,
}

impl RuleSet {
    /// Build the rule set from configuration.
    /// Rules with empty or whitespace-only patterns are skipped.
    pub fn from_config(config: &Config) -> Self {
        let rules = config
            .rules
            .iter()
            .filter_map(|rule| {
                let sequence = WordSequence::parse(&rule.pattern)?;
                Some(CompiledRule {
                    sequence,
                    pattern: rule.pattern.clone(),
                    reason: rule.reason.clone(),
                })
            })
            .collect();
        Self { rules }
    }

    /// Evaluate a command string. First matching rule wins.
    pub fn evaluate(&self, command: &str) -> Option<Approval> {
        self.rules
            .iter()
            .find(|rule| rule.sequence.matches(command))
            .map(|rule| Approval {
                pattern: rule.pattern.clone(),
                reason: rule.reason.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Rule;

    fn ruleset(rules: &[(&str, &str)]) -> RuleSet {
        let mut config = Config::default_config();
        config.rules = rules
            .iter()
            .map(|(pattern, reason)| Rule {
                pattern: (*pattern).into(),
                reason: (*reason).into(),
            })
            .collect();
        RuleSet::from_config(&config)
    }

    #[test]
    fn default_approves_worktree() {
        let rules = RuleSet::from_config(&Config::default_config());
        let approval = rules.evaluate("git worktree add ../foo").unwrap();
        assert_eq!(approval.reason, "Git worktree operation approved");
        assert_eq!(approval.pattern, "git worktree");
    }

    #[test]
    fn default_passes_on_other_commands() {
        let rules = RuleSet::from_config(&Config::default_config());
        assert!(rules.evaluate("rm -rf /").is_none());
        assert!(rules.evaluate("git status").is_none());
    }

    #[test]
    fn first_match_wins() {
        let rules = ruleset(&[
            ("git worktree", "first"),
            ("worktree", "second"),
        ]);
        let approval = rules.evaluate("git worktree add ../foo").unwrap();
        assert_eq!(approval.reason, "first");
    }

    #[test]
    fn later_rule_matches_when_earlier_does_not() {
        let rules = ruleset(&[
            ("git worktree", "worktree"),
            ("git stash", "stash"),
        ]);
        let approval = rules.evaluate("git stash pop").unwrap();
        assert_eq!(approval.reason, "stash");
    }

    #[test]
    fn empty_pattern_skipped() {
        let rules = ruleset(&[("", "never"), ("  ", "never"), ("git worktree", "ok")]);
        let approval = rules.evaluate("git worktree list").unwrap();
        assert_eq!(approval.reason, "ok");
    }

    #[test]
    fn empty_command_no_match() {
        let rules = RuleSet::from_config(&Config::default_config());
        assert!(rules.evaluate("").is_none());
    }
}

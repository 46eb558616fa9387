/// A sequence of words matched against command text with whitespace-run
/// separators.
///
/// `WordSequence::parse("git worktree")` matches any text containing `git`,
/// one or more whitespace characters (space, tab, newline, ...), then
/// `worktree`. Matching is case-sensitive, substring (not anchored), and
/// deliberately NOT quote-aware: `echo 'git worktree'` matches. The hook
/// approves on sight of the token sequence; it does not try to decide
/// whether the shell would actually run it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSequence {
    words: Vec<String>,
}

impl WordSequence {
    /// Parse a pattern string into a word sequence.
    /// Returns `None` for empty or whitespace-only patterns.
    pub fn parse(pattern: &str) -> Option<Self> {
        let words: Vec<String> = pattern.split_whitespace().map(String::from).collect();
        if words.is_empty() {
            return None;
        }
        Some(Self { words })
    }

    /// Test whether `text` contains this word sequence.
    pub fn matches(&self, text: &str) -> bool {
        let first = self.words[0].as_str();
        let mut base = 0;
        while let Some(pos) = text[base..].find(first) {
            let start = base + pos;
            if self.matches_at(text, start) {
                return true;
            }
            // Advance one char past the failed match start
            let step = text[start..].chars().next().map_or(1, char::len_utf8);
            base = start + step;
        }
        false
    }

    /// Test whether the sequence matches starting exactly at byte `pos`.
    fn matches_at(&self, text: &str, pos: usize) -> bool {
        let mut rest = &text[pos..];
        for (idx, word) in self.words.iter().enumerate() {
            if !rest.starts_with(word.as_str()) {
                return false;
            }
            rest = &rest[word.len()..];
            if idx + 1 < self.words.len() {
                // Require at least one whitespace char between words
                let trimmed = rest.trim_start();
                if trimmed.len() == rest.len() {
                    return false;
                }
                rest = trimmed;
            }
        }
        true
    }
}

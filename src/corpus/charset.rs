//! Special-character normalization
//!
//! IRaMuTeQ treats most punctuation as noise, so a fixed character set is
//! swept out of the text. Each character carries a display name (for the
//! statistics report) and a replacement action. The sweep runs in the
//! policy's declared order; the characters are disjoint, so order only
//! matters for reproducible counting.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// What to do with every occurrence of a policy character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharAction {
    /// Remove the character outright
    Delete,
    /// Replace the character with an underscore
    Underscore,
}

/// One policy entry
#[derive(Debug, Clone)]
pub struct CharRule {
    pub ch: char,
    pub name: &'static str,
    pub action: CharAction,
}

/// Fixed ordered special-character policy.
#[derive(Debug, Clone)]
pub struct SpecialCharPolicy {
    rules: Vec<CharRule>,
}

/// The base character set shared by both shipped policies; `%` is the one
/// divergent entry and is appended by the constructors.
fn base_rules() -> Vec<CharRule> {
    use CharAction::*;
    vec![
        CharRule { ch: '-', name: "Hyphen", action: Delete },
        CharRule { ch: ';', name: "Semicolon", action: Delete },
        CharRule { ch: '"', name: "Double quote", action: Delete },
        CharRule { ch: '\'', name: "Single quote", action: Delete },
        CharRule { ch: '…', name: "Ellipsis", action: Delete },
        CharRule { ch: '–', name: "Dash", action: Delete },
        CharRule { ch: '(', name: "Left parenthesis", action: Delete },
        CharRule { ch: ')', name: "Right parenthesis", action: Delete },
        CharRule { ch: '/', name: "Slash", action: Underscore },
    ]
}

impl SpecialCharPolicy {
    /// Legacy pipeline policy: `%` is kept as a placeholder underscore.
    pub fn legacy() -> Self {
        let mut rules = base_rules();
        rules.push(CharRule {
            ch: '%',
            name: "Percent",
            action: CharAction::Underscore,
        });
        Self { rules }
    }

    /// Extended pipeline policy: `%` is removed outright.
    pub fn extended() -> Self {
        let mut rules = base_rules();
        rules.push(CharRule {
            ch: '%',
            name: "Percent",
            action: CharAction::Delete,
        });
        Self { rules }
    }

    /// Policy with an explicit rule list, for callers reproducing other
    /// observed pipeline behaviors.
    pub fn from_rules(rules: Vec<CharRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[CharRule] {
        &self.rules
    }

    /// Sweep `text`: count and rewrite every policy character in declared
    /// order, then collapse whitespace runs and trim.
    pub fn normalize(&self, text: &str) -> CharSweep {
        let mut out = text.to_string();
        let mut counts = Vec::with_capacity(self.rules.len());
        let mut total = 0;

        for rule in &self.rules {
            let count = out.chars().filter(|&c| c == rule.ch).count();
            if count > 0 {
                let replacement = match rule.action {
                    CharAction::Delete => "",
                    CharAction::Underscore => "_",
                };
                out = out.replace(rule.ch, replacement);
                total += count;
            }
            counts.push((rule.ch, count));
        }

        let out = WHITESPACE_RUN.replace_all(out.trim(), " ").into_owned();
        CharSweep { text: out, counts, total }
    }
}

/// Result of one normalization sweep
#[derive(Debug, Clone)]
pub struct CharSweep {
    pub text: String,
    /// Occurrence count per policy character, in policy order
    pub counts: Vec<(char, usize)>,
    pub total: usize,
}

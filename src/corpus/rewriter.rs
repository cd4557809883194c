//! Acronym expansion and multi-word-expression folding
//!
//! Both dictionaries are immutable value objects built once per generation
//! run; every entry compiles its match patterns at construction so record
//! processing only executes pre-built rules.
//!
//! Acronyms run before expressions: an expansion may introduce text that an
//! expression entry then folds.

use crate::corpus::stats::Statistics;
use regex::{NoExpand, Regex};

/// One acronym entry with its pre-compiled match patterns
#[derive(Debug)]
struct AcronymRule {
    /// Matches the parenthesized form "(sigla)", parentheses included
    parenthesized: Regex,
    /// Matches the bare acronym as a standalone word
    bare: Regex,
    expansion: String,
}

/// Lowercase acronym token -> expansion string.
#[derive(Debug, Default)]
pub struct AcronymDictionary {
    rules: Vec<AcronymRule>,
}

impl AcronymDictionary {
    /// Build from (acronym, expansion) pairs. Both sides are lowercased
    /// (the pipeline body is all lowercase); entries with a blank field are
    /// excluded.
    pub fn from_pairs<I, S, T>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let rules = pairs
            .into_iter()
            .filter(|(acronym, expansion)| {
                !acronym.as_ref().trim().is_empty() && !expansion.as_ref().trim().is_empty()
            })
            .map(|(acronym, expansion)| {
                let acronym = acronym.as_ref().to_lowercase();
                let expansion = expansion.as_ref().to_lowercase();
                let escaped = regex::escape(&acronym);
                AcronymRule {
                    parenthesized: Regex::new(&format!(r"(?i)\({}\)", escaped))
                        .expect("escaped acronym is a valid pattern"),
                    bare: Regex::new(&format!(r"(?i)\b{}\b", escaped))
                        .expect("escaped acronym is a valid pattern"),
                    expansion,
                }
            })
            .collect();
        Self { rules }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// One expression entry: literal needle gate plus whole-word pattern
#[derive(Debug)]
struct ExpressionRule {
    /// Lowercase literal; the pattern only runs when this is a substring
    needle: String,
    pattern: Regex,
    replacement: String,
}

/// Lowercase multi-word expression -> normalized replacement.
#[derive(Debug, Default)]
pub struct ExpressionDictionary {
    rules: Vec<ExpressionRule>,
}

impl ExpressionDictionary {
    /// Build from (expression, normalized form) pairs. Both sides are
    /// lowercased; entries with a blank field are excluded.
    pub fn from_pairs<I, S, T>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let rules = pairs
            .into_iter()
            .filter(|(expression, normalized)| {
                !expression.as_ref().trim().is_empty() && !normalized.as_ref().trim().is_empty()
            })
            .map(|(expression, normalized)| {
                let needle = expression.as_ref().to_lowercase();
                let escaped = regex::escape(&needle);
                ExpressionRule {
                    pattern: Regex::new(&format!(r"(?i)\b{}\b", escaped))
                        .expect("escaped expression is a valid pattern"),
                    needle,
                    replacement: normalized.as_ref().to_lowercase(),
                }
            })
            .collect();
        Self { rules }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Expand every dictionary acronym in `text`.
///
/// Per entry, the parenthesized form "(sigla)" becomes "(expansion)" and the
/// bare whole-word form becomes the expansion. The statistics counter
/// increments once per entry processed whether or not it occurred; callers
/// downstream read it as "entries processed", not "matches".
pub fn expand_acronyms(text: &str, dict: &AcronymDictionary, stats: &mut Statistics) -> String {
    let mut out = text.to_string();
    for rule in &dict.rules {
        let parenthesized = format!("({})", rule.expansion);
        out = rule
            .parenthesized
            .replace_all(&out, NoExpand(&parenthesized))
            .into_owned();
        out = rule
            .bare
            .replace_all(&out, NoExpand(&rule.expansion))
            .into_owned();
        stats.acronym_entries += 1;
    }
    out
}

/// Fold every dictionary expression present in `text` to its normalized
/// form, counting once per entry that matched.
pub fn fold_expressions(text: &str, dict: &ExpressionDictionary, stats: &mut Statistics) -> String {
    let mut out = text.to_string();
    for rule in &dict.rules {
        if out.contains(&rule.needle) {
            out = rule
                .pattern
                .replace_all(&out, NoExpand(&rule.replacement))
                .into_owned();
            stats.expression_hits += 1;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acronym_expands_parenthesized_and_bare_forms() {
        let dict = AcronymDictionary::from_pairs([("ia", "inteligência artificial")]);
        let mut stats = Statistics::default();

        let out = expand_acronyms("a (IA) ajuda", &dict, &mut stats);
        assert_eq!(out, "a (inteligência artificial) ajuda");

        let out = expand_acronyms("a IA ajuda", &dict, &mut stats);
        assert_eq!(out, "a inteligência artificial ajuda");
    }

    #[test]
    fn acronym_counter_is_per_entry_not_per_match() {
        let dict = AcronymDictionary::from_pairs([("onu", "onu expandida"), ("oms", "oms expandida")]);
        let mut stats = Statistics::default();
        expand_acronyms("texto sem siglas", &dict, &mut stats);
        assert_eq!(stats.acronym_entries, 2);
    }

    #[test]
    fn blank_dictionary_fields_are_excluded() {
        let dict = AcronymDictionary::from_pairs([("ia", ""), ("", "x"), ("ok", "certo")]);
        assert_eq!(dict.len(), 1);
        let dict = ExpressionDictionary::from_pairs([("  ", "x"), ("a b", "a_b")]);
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn expression_folds_only_when_present() {
        let dict = ExpressionDictionary::from_pairs([("rede social", "rede_social")]);
        let mut stats = Statistics::default();

        let out = fold_expressions("uso a rede social todo dia", &dict, &mut stats);
        assert_eq!(out, "uso a rede_social todo dia");
        assert_eq!(stats.expression_hits, 1);

        let out = fold_expressions("nenhuma ocorrência aqui", &dict, &mut stats);
        assert_eq!(out, "nenhuma ocorrência aqui");
        assert_eq!(stats.expression_hits, 1);
    }

    #[test]
    fn expansion_dollar_signs_are_literal() {
        let dict = AcronymDictionary::from_pairs([("us", "US$ dollars")]);
        let mut stats = Statistics::default();
        let out = expand_acronyms("pagou em us", &dict, &mut stats);
        assert_eq!(out, "pagou em us$ dollars");
    }
}

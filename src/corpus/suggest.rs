//! Dictionary pre-population utilities
//!
//! Batch text statistics used upstream of the pipeline to seed the
//! expression dictionary: tokenize the raw texts, drop stop words, and mine
//! frequent words and n-grams as candidate entries. None of this touches
//! the run statistics; the output is candidate rows for a human to review.

use std::collections::HashMap;

/// Lowercased alphabetic word tokens of `text`.
///
/// A token is a maximal run of alphabetic characters; digits and
/// punctuation separate tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    for c in text.chars() {
        if c.is_alphabetic() {
            current.extend(c.to_lowercase());
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

fn sorted_by_count(counts: HashMap<String, usize>) -> Vec<(String, usize)> {
    let mut entries: Vec<(String, usize)> = counts.into_iter().collect();
    // Descending count, ties alphabetically for a stable report
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries
}

/// Word frequencies over all texts, stop words excluded, sorted by
/// descending count.
pub fn word_frequencies<S: AsRef<str>>(texts: &[S], stopwords: &[&str]) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for text in texts {
        for token in tokenize(text.as_ref()) {
            if stopwords.contains(&token.as_str()) {
                continue;
            }
            *counts.entry(token).or_insert(0) += 1;
        }
    }
    sorted_by_count(counts)
}

/// N-gram frequencies over all texts, sorted by descending count.
///
/// An n-gram is skipped when any of its words is a stop word, so the
/// candidates read as content phrases ("rede social", not "a rede").
pub fn ngram_frequencies<S: AsRef<str>>(
    texts: &[S],
    n: usize,
    stopwords: &[&str],
) -> Vec<(String, usize)> {
    if n == 0 {
        return Vec::new();
    }
    let mut counts: HashMap<String, usize> = HashMap::new();
    for text in texts {
        let tokens = tokenize(text.as_ref());
        for window in tokens.windows(n) {
            if window.iter().any(|w| stopwords.contains(&w.as_str())) {
                continue;
            }
            *counts.entry(window.join(" ")).or_insert(0) += 1;
        }
    }
    sorted_by_count(counts)
}

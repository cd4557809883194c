//! Number-phrase resolution
//!
//! Converts runs of spelled-out Portuguese number words into digit strings.
//! Tokens are consumed into a candidate buffer; once the buffer resolves to a
//! number the resolver keeps extending it greedily and emits the last value
//! that still resolved as a single digit token.
//!
//! The word classes:
//! 1. Units (0-9), with gendered variants mapping to the same value
//! 2. Teens and tens (10-19, 20-90)
//! 3. Hundreds (100-900, "cem" and "cento" both meaning 100)
//! 4. Multipliers (mil, milhão/milhões, bilhão/bilhões)
//!
//! The connector "e" is skipped inside a phrase but never resolves on its
//! own. Any other word makes the whole buffer unresolvable and its tokens
//! pass through unchanged.

const UNITS: &[(&str, u64)] = &[
    ("zero", 0),
    ("um", 1),
    ("uma", 1),
    ("dois", 2),
    ("duas", 2),
    ("três", 3),
    ("quatro", 4),
    ("cinco", 5),
    ("seis", 6),
    ("sete", 7),
    ("oito", 8),
    ("nove", 9),
];

const TENS: &[(&str, u64)] = &[
    ("dez", 10),
    ("onze", 11),
    ("doze", 12),
    ("treze", 13),
    ("quatorze", 14),
    ("catorze", 14),
    ("quinze", 15),
    ("dezesseis", 16),
    ("dezessete", 17),
    ("dezoito", 18),
    ("dezenove", 19),
    ("vinte", 20),
    ("trinta", 30),
    ("quarenta", 40),
    ("cinquenta", 50),
    ("sessenta", 60),
    ("setenta", 70),
    ("oitenta", 80),
    ("noventa", 90),
];

const HUNDREDS: &[(&str, u64)] = &[
    ("cem", 100),
    ("cento", 100),
    ("duzentos", 200),
    ("trezentos", 300),
    ("quatrocentos", 400),
    ("quinhentos", 500),
    ("seiscentos", 600),
    ("setecentos", 700),
    ("oitocentos", 800),
    ("novecentos", 900),
];

const MULTIPLIERS: &[(&str, u64)] = &[
    ("mil", 1_000),
    ("milhão", 1_000_000),
    ("milhões", 1_000_000),
    ("bilhão", 1_000_000_000),
    ("bilhões", 1_000_000_000),
];

/// The connector word skipped inside a number phrase
const CONNECTOR: &str = "e";

fn lookup(table: &[(&str, u64)], word: &str) -> Option<u64> {
    table.iter().find(|(name, _)| *name == word).map(|(_, v)| *v)
}

/// Interpret a whole token buffer as one number phrase.
///
/// Sums unit/ten/hundred contributions into a current group; a multiplier
/// closes the group (an empty group counts as 1) into the running total.
/// Returns `None` when any token falls outside the word classes, when the
/// buffer carries no number word at all (a lone connector is not a number),
/// or on arithmetic overflow.
fn phrase_value(tokens: &[&str]) -> Option<u64> {
    let mut total: u64 = 0;
    let mut current: u64 = 0;
    let mut found_number_word = false;

    for &word in tokens {
        if let Some(v) = lookup(UNITS, word)
            .or_else(|| lookup(TENS, word))
            .or_else(|| lookup(HUNDREDS, word))
        {
            current = current.checked_add(v)?;
            found_number_word = true;
        } else if let Some(factor) = lookup(MULTIPLIERS, word) {
            if current == 0 {
                current = 1;
            }
            total = total.checked_add(current.checked_mul(factor)?)?;
            current = 0;
            found_number_word = true;
        } else if word == CONNECTOR {
            continue;
        } else {
            return None;
        }
    }

    if found_number_word {
        total.checked_add(current)
    } else {
        None
    }
}

/// Resolves spelled-out number phrases in free text.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberResolver {
    punctuation_fallback: bool,
}

impl NumberResolver {
    /// Resolver without the lone-token punctuation fallback
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver that retries a failing lone token with surrounding ASCII
    /// punctuation stripped ("vinte," resolves to "20,")
    pub fn with_punctuation_fallback() -> Self {
        Self {
            punctuation_fallback: true,
        }
    }

    /// Rewrite every resolvable number phrase in `text` to digits.
    ///
    /// Tokens that never join a resolvable buffer are emitted unchanged.
    /// Output tokens are rejoined with single spaces, which also collapses
    /// internal whitespace runs.
    pub fn resolve(&self, text: &str) -> String {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let mut out: Vec<String> = Vec::new();
        let mut buffer: Vec<&str> = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            buffer.push(tokens[i]);
            if let Some(mut value) = phrase_value(&buffer) {
                // Greedy extension: keep absorbing tokens while the buffer
                // still resolves, emit the last successful value.
                let mut j = i + 1;
                while j < tokens.len() {
                    buffer.push(tokens[j]);
                    match phrase_value(&buffer) {
                        Some(extended) => {
                            value = extended;
                            i = j;
                            j += 1;
                        }
                        None => {
                            buffer.pop();
                            break;
                        }
                    }
                }
                out.push(value.to_string());
                buffer.clear();
            } else if buffer.len() > 1 {
                // Flush everything but the newest token, which may still
                // start a phrase of its own.
                let kept = buffer.pop().unwrap_or_default();
                out.extend(buffer.drain(..).map(str::to_string));
                buffer.push(kept);
            } else {
                let token = buffer.pop().unwrap_or_default();
                out.push(self.flush_lone_token(token));
            }
            i += 1;
        }

        out.extend(buffer.drain(..).map(str::to_string));
        out.join(" ")
    }

    /// A lone token that failed to resolve passes through unchanged, unless
    /// the punctuation fallback is on and the bare word is a number word.
    fn flush_lone_token(&self, token: &str) -> String {
        if self.punctuation_fallback {
            let bare = token.trim_matches(|c: char| c.is_ascii_punctuation());
            if bare.len() < token.len() && !bare.is_empty() {
                if let Some(value) = phrase_value(&[bare]) {
                    let start = token.find(bare).unwrap_or(0);
                    let prefix = &token[..start];
                    let suffix = &token[start + bare.len()..];
                    return format!("{}{}{}", prefix, value, suffix);
                }
            }
        }
        token.to_string()
    }
}

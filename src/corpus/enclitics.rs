//! Enclitic pronoun splitting
//!
//! Portuguese attaches pronouns to verbs with a hyphen ("lembro-me",
//! "comprou-o", "vendê-la"). Downstream tokenization wants the pronoun as a
//! free-standing word before the verb, so each match is rewritten to
//! "<pronoun> <stem>".
//!
//! Rules are declarative (pattern, rewrite) pairs applied in declaration
//! order, the more specific suffix sets first:
//! 1. Conditional/future "-ia" stems with -lo/-la/-los/-las; the "ia" is
//!    re-appended to the relocated stem
//! 2. Stems ending in an acute vowel with -lo/-la/-los/-las; the accent is
//!    dropped from the stem
//! 3. Indirect object -lhe/-lhes
//! 4. Person markers -me/-te/-nos/-vos
//! 5. Reflexive -se
//! 6. Plain object pronouns -o/-a/-os/-as
//!
//! The suffix sets are mutually exclusive, so rule overlap is not a concern.
//! Matching is case-insensitive and bounded at word edges.

use once_cell::sync::Lazy;
use regex::Regex;

/// Stem characters: letters including the Portuguese accented set
const STEM: &str = r"[a-zà-öø-ÿ]+";

/// (suffix pattern, rewrite) pairs; the stem is group 1, the pronoun
/// group 2. Tried in declaration order.
static ENCLITIC_RULES: Lazy<Vec<(Regex, String)>> = Lazy::new(|| {
    let rules: &[(&str, &str)] = &[
        // Mesoclitic conditional: the tense suffix travels with the stem,
        // accent stripped ("comprá-lo-ia" -> "lo compraia").
        (r"á-l(o|a|os|as)-ia\b", "l${2} ${1}aia"),
        (r"ê-l(o|a|os|as)-ia\b", "l${2} ${1}eia"),
        // Infinitive stems carry an acute final vowel that is dropped:
        // "comprá-lo" -> "lo compra", "vendê-la" -> "la vende".
        (r"á-l(o|a|os|as)\b", "l${2} ${1}a"),
        (r"é-l(o|a|os|as)\b", "l${2} ${1}e"),
        (r"ê-l(o|a|os|as)\b", "l${2} ${1}e"),
        (r"í-l(o|a|os|as)\b", "l${2} ${1}i"),
        (r"ô-l(o|a|os|as)\b", "l${2} ${1}o"),
        (r"-(lhes|lhe)\b", "${2} ${1}"),
        (r"-(me|te|nos|vos)\b", "${2} ${1}"),
        (r"-(se)\b", "${2} ${1}"),
        (r"-(os|as|o|a)\b", "${2} ${1}"),
    ];
    rules
        .iter()
        .map(|(suffix, rewrite)| {
            let pattern = format!(r"(?i)\b({}){}", STEM, suffix);
            (
                Regex::new(&pattern).expect("enclitic pattern is valid"),
                (*rewrite).to_string(),
            )
        })
        .collect()
});

/// Relocate hyphen-attached enclitic pronouns before their verb stem.
pub fn split(text: &str) -> String {
    let mut out = text.to_string();
    for (pattern, rewrite) in ENCLITIC_RULES.iter() {
        out = pattern.replace_all(&out, rewrite.as_str()).into_owned();
    }
    out
}

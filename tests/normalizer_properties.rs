//! Property-based tests for the normalization stages
//!
//! The pipeline contract is totality: every stage must accept any string
//! without panicking, and the special-character sweep must be idempotent.

use corpusgen::corpus::charset::SpecialCharPolicy;
use corpusgen::corpus::enclitics;
use corpusgen::corpus::numbers::NumberResolver;
use corpusgen::corpus::pipeline::CorpusGenerator;
use corpusgen::corpus::rewriter::{AcronymDictionary, ExpressionDictionary};
use corpusgen::corpus::Record;
use proptest::prelude::*;

proptest! {
    /// No stage may fail on arbitrary input, special characters included
    #[test]
    fn stages_are_total(text in ".{0,200}") {
        let _ = NumberResolver::with_punctuation_fallback().resolve(&text);
        let _ = enclitics::split(&text);
        let _ = SpecialCharPolicy::legacy().normalize(&text);
        let _ = SpecialCharPolicy::extended().normalize(&text);
    }

    /// A second sweep over swept output finds nothing left to remove
    #[test]
    fn character_sweep_is_idempotent(text in ".{0,200}") {
        let policy = SpecialCharPolicy::extended();
        let first = policy.normalize(&text);
        let second = policy.normalize(&first.text);
        prop_assert_eq!(&second.text, &first.text);
        prop_assert_eq!(second.total, 0);
    }

    /// Lowercase text without number words, dictionary terms or policy
    /// characters passes through with only whitespace collapsing
    #[test]
    fn plain_text_is_preserved(words in proptest::collection::vec("[ptbfgjklrx]{3,8}o", 1..8)) {
        let text = words.join("  ");
        let records = vec![Record::new("1", text.clone())];
        let out = CorpusGenerator::new()
            .generate(
                "extended",
                &records,
                &AcronymDictionary::default(),
                &ExpressionDictionary::default(),
            )
            .unwrap();

        let expected_body = words.join(" ");
        prop_assert_eq!(out.corpus, format!("**** *ID_1\n{}\n", expected_body));
    }

    /// Per-character counts always sum to the total removed
    #[test]
    fn sweep_counts_sum_to_total(text in ".{0,200}") {
        let sweep = SpecialCharPolicy::legacy().normalize(&text);
        let sum: usize = sweep.counts.iter().map(|(_, n)| n).sum();
        prop_assert_eq!(sum, sweep.total);
    }
}

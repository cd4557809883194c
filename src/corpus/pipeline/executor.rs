//! Corpus assembly
//!
//! Drives the normalization stages over every record and accumulates the
//! corpus text plus run statistics. Stage order is fixed: lowercase, number
//! phrases, enclitics (optional), acronyms, expressions, special
//! characters, record header.

use crate::corpus::enclitics;
use crate::corpus::numbers::NumberResolver;
use crate::corpus::pipeline::config::{ConfigRegistry, CorpusConfig};
use crate::corpus::record::{self, Record};
use crate::corpus::rewriter::{
    expand_acronyms, fold_expressions, AcronymDictionary, ExpressionDictionary,
};
use crate::corpus::stats::Statistics;
use std::fmt;

/// Errors during corpus generation
#[derive(Debug, Clone)]
pub enum GenerationError {
    ConfigNotFound(String),
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::ConfigNotFound(name) => write!(f, "Config '{}' not found", name),
        }
    }
}

impl std::error::Error for GenerationError {}

/// Output from one generation run
#[derive(Debug)]
pub struct GenerationOutput {
    /// Alternating header/body lines, ready for IRaMuTeQ
    pub corpus: String,
    pub stats: Statistics,
    /// Rendered statistics report
    pub report: String,
}

/// Executes corpus generation under a named configuration
pub struct CorpusGenerator {
    registry: ConfigRegistry,
}

impl CorpusGenerator {
    /// Generator with the default configurations
    pub fn new() -> Self {
        Self {
            registry: ConfigRegistry::with_defaults(),
        }
    }

    /// Generator with a custom registry
    pub fn with_registry(registry: ConfigRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ConfigRegistry {
        &self.registry
    }

    /// Run the full pipeline over `records` under the named configuration.
    pub fn generate(
        &self,
        config_name: &str,
        records: &[Record],
        acronyms: &AcronymDictionary,
        expressions: &ExpressionDictionary,
    ) -> Result<GenerationOutput, GenerationError> {
        let config = self
            .registry
            .get(config_name)
            .ok_or_else(|| GenerationError::ConfigNotFound(config_name.to_string()))?;
        Ok(generate_with_config(config, records, acronyms, expressions))
    }
}

impl Default for CorpusGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the pipeline with an explicit configuration value.
pub fn generate_with_config(
    config: &CorpusConfig,
    records: &[Record],
    acronyms: &AcronymDictionary,
    expressions: &ExpressionDictionary,
) -> GenerationOutput {
    let resolver = if config.number_fallback {
        NumberResolver::with_punctuation_fallback()
    } else {
        NumberResolver::new()
    };

    let mut stats = Statistics::default();
    let mut corpus = String::new();

    for record in records {
        if record.is_blank() {
            continue;
        }
        stats.records += 1;

        let mut text = record.text.to_lowercase();
        text = resolver.resolve(&text);
        if config.split_enclitics {
            text = enclitics::split(&text);
        }
        text = expand_acronyms(&text, acronyms, &mut stats);
        text = fold_expressions(&text, expressions, &mut stats);

        let sweep = config.char_policy.normalize(&text);
        stats.absorb_sweep(&sweep);
        let text = sweep.text;

        let header = record::header(record);
        corpus.push_str(&format!("{}\n{}\n", header, text));
    }

    let report = stats.report(config);
    GenerationOutput {
        corpus,
        stats,
        report,
    }
}

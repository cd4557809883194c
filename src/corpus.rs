//! Main module for corpus generation functionality

pub mod charset;
pub mod enclitics;
pub mod numbers;
pub mod pipeline;
pub mod record;
pub mod rewriter;
pub mod stats;
pub mod suggest;

pub use charset::{CharAction, CharRule, CharSweep, SpecialCharPolicy};
pub use numbers::NumberResolver;
pub use pipeline::{ConfigRegistry, CorpusConfig, CorpusGenerator, GenerationOutput};
pub use record::Record;
pub use rewriter::{AcronymDictionary, ExpressionDictionary};
pub use stats::Statistics;

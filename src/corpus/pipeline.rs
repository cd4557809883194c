//! Corpus generation pipeline
//!
//! This module provides:
//! - Named processing configurations (`ConfigRegistry`) selecting the
//!   optional stages and the special-character policy
//! - The assembler (`CorpusGenerator`) driving all stages over the records
//! - Loading of the three JSON input tables (`Table`, `records_from_table`)

pub mod config;
pub mod executor;
pub mod loader;

pub use config::{ConfigRegistry, CorpusConfig};
pub use executor::{generate_with_config, CorpusGenerator, GenerationError, GenerationOutput};
pub use loader::{
    acronyms_from_table, expressions_from_table, records_from_table, LoadError, Table,
};

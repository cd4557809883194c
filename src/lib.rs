//! # corpusgen
//!
//! Builds annotated plain-text corpora for the IRaMuTeQ textual-statistics
//! tool from tabular survey/interview responses. Each record becomes a
//! `**** *ID_<id> *<var>_<value>` header line followed by its normalized
//! text.
//!
//! The normalization pipeline, per record:
//! 1. Lowercase
//! 2. Spelled-out number phrases -> digits ([corpus::numbers])
//! 3. Enclitic pronoun splitting, optional ([corpus::enclitics])
//! 4. Acronym expansion, then expression folding ([corpus::rewriter])
//! 5. Special-character sweep + whitespace collapse ([corpus::charset])
//!
//! Every stage is a total function over strings: blank records are skipped,
//! unresolvable number phrases pass through, and no input text can make the
//! pipeline fail.

pub mod corpus;

//! Table loading API
//!
//! The pipeline consumes three tabular inputs: the records sheet and the two
//! dictionary sheets. This module reads them from a JSON representation
//! that preserves spreadsheet column order:
//!
//! ```json
//! { "columns": ["id", "textos selecionados", "cidade"],
//!   "rows": [[1, "texto aqui", "recife"],
//!            [2, null, "natal"]] }
//! ```
//!
//! Cells may be strings, numbers, booleans or null; null and absent cells
//! count as missing. Dictionary rows with a missing field are dropped here,
//! before they reach the core.

use crate::corpus::record::Record;
use crate::corpus::rewriter::{AcronymDictionary, ExpressionDictionary};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::fs;
use std::path::Path;

/// Errors while loading input tables
#[derive(Debug, Clone)]
pub enum LoadError {
    Io(String),
    Json(String),
    MissingColumn(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(msg) => write!(f, "IO error: {}", msg),
            LoadError::Json(msg) => write!(f, "Invalid table JSON: {}", msg),
            LoadError::MissingColumn(name) => write!(f, "Missing required column: {}", name),
        }
    }
}

impl std::error::Error for LoadError {}

/// A tabular input with ordered columns
#[derive(Debug, Clone, Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        serde_json::from_str(json).map_err(|e| LoadError::Json(e.to_string()))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let contents = fs::read_to_string(path).map_err(|e| LoadError::Io(e.to_string()))?;
        Self::from_json(&contents)
    }

    fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Stringified cell, `None` for null/absent cells
    fn cell(&self, row: &[Value], index: usize) -> Option<String> {
        match row.get(index) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        }
    }
}

/// Build pipeline records from a table. `id_column` and `text_column` are
/// case-sensitive literals agreed with the caller; every other column
/// becomes a metadata attribute, in column order. Attributes with missing
/// cells are omitted from the record.
pub fn records_from_table(
    table: &Table,
    id_column: &str,
    text_column: &str,
) -> Result<Vec<Record>, LoadError> {
    let id_index = table
        .column_index(id_column)
        .ok_or_else(|| LoadError::MissingColumn(id_column.to_string()))?;
    let text_index = table
        .column_index(text_column)
        .ok_or_else(|| LoadError::MissingColumn(text_column.to_string()))?;

    let id_lower = id_column.to_lowercase();
    let text_lower = text_column.to_lowercase();
    let records = table
        .rows
        .iter()
        .map(|row| {
            let id = table.cell(row, id_index).unwrap_or_default();
            let text = table.cell(row, text_index).unwrap_or_default();
            let mut record = Record::new(id, text);
            for (index, column) in table.columns.iter().enumerate() {
                let lower = column.to_lowercase();
                if lower == id_lower || lower == text_lower {
                    continue;
                }
                if let Some(value) = table.cell(row, index) {
                    record = record.with_attribute(column.clone(), value);
                }
            }
            record
        })
        .collect();
    Ok(records)
}

/// First two columns of a dictionary table as (term, replacement) pairs,
/// dropping rows with a missing field.
fn dictionary_pairs(table: &Table) -> Vec<(String, String)> {
    table
        .rows
        .iter()
        .filter_map(|row| {
            let term = table.cell(row, 0)?;
            let replacement = table.cell(row, 1)?;
            Some((term, replacement))
        })
        .collect()
}

pub fn acronyms_from_table(table: &Table) -> AcronymDictionary {
    AcronymDictionary::from_pairs(dictionary_pairs(table))
}

pub fn expressions_from_table(table: &Table) -> ExpressionDictionary {
    ExpressionDictionary::from_pairs(dictionary_pairs(table))
}

//! Input records and the IRaMuTeQ metadata header
//!
//! Every non-blank record contributes two corpus lines: a `****` header
//! carrying the identifier and the remaining spreadsheet columns as
//! `*name_value` tokens, then the normalized text body.

use serde::{Deserialize, Serialize};

/// One input row: identifier, raw text, and the remaining columns as
/// ordered (name, value) attributes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub text: String,
    /// Extra columns in the source table's natural order
    #[serde(default)]
    pub attributes: Vec<(String, String)>,
}

impl Record {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// A record with empty or whitespace-only text is skipped entirely.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Build the metadata header: `**** *ID_<id>` followed by one
/// `*<name>_<value>` token per attribute in column order, spaces replaced
/// by underscores.
pub fn header(record: &Record) -> String {
    let mut header = format!("**** *ID_{}", record.id);
    for (name, value) in &record.attributes {
        header.push_str(&format!(
            " *{}_{}",
            name.replace(' ', "_"),
            value.replace(' ', "_")
        ));
    }
    header
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_without_attributes() {
        let record = Record::new("1", "qualquer texto");
        assert_eq!(header(&record), "**** *ID_1");
    }

    #[test]
    fn attributes_keep_column_order_and_underscore_spaces() {
        let record = Record::new("7", "texto")
            .with_attribute("faixa etária", "25 a 30")
            .with_attribute("cidade", "são paulo");
        assert_eq!(
            header(&record),
            "**** *ID_7 *faixa_etária_25_a_30 *cidade_são_paulo"
        );
    }

    #[test]
    fn blank_detection() {
        assert!(Record::new("1", "").is_blank());
        assert!(Record::new("1", "   \t ").is_blank());
        assert!(!Record::new("1", "a").is_blank());
    }
}

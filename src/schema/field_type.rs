//! Field type definitions
//!
//! Determines how a field is indexed, stored, and queried.

use serde::{Deserialize, Serialize};

/// Field data type
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// The document identity field; one per index, stored in the
    /// primary-key tree rather than in segments
    PrimaryKey,

    /// Full-text searchable field; values are tokenized before indexing
    Text,

    /// Exact match field; the entire value is indexed as a single term
    Keyword,

    /// 64-bit signed integer; supports exact match and range filters
    Numeric,
}

impl FieldType {
    pub fn is_primary_key(&self) -> bool {
        matches!(self, FieldType::PrimaryKey)
    }

    /// Whether values of this type pass through the analyzer pipeline
    pub fn is_tokenized(&self) -> bool {
        matches!(self, FieldType::Text)
    }

    /// Whether this field type supports range filters
    pub fn supports_range(&self) -> bool {
        matches!(self, FieldType::Numeric)
    }

    /// Get the storage type name
    pub fn storage_type(&self) -> &'static str {
        match self {
            FieldType::PrimaryKey => "primary_key",
            FieldType::Text => "text",
            FieldType::Keyword => "keyword",
            FieldType::Numeric => "numeric",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_predicates() {
        assert!(FieldType::PrimaryKey.is_primary_key());
        assert!(FieldType::Text.is_tokenized());
        assert!(!FieldType::Keyword.is_tokenized());
        assert!(FieldType::Numeric.supports_range());
        assert!(!FieldType::Text.supports_range());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&FieldType::Text).unwrap();
        assert_eq!(json, "\"text\"");

        let back: FieldType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, FieldType::Text);
    }
}

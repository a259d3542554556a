use serde::{Deserialize, Serialize};

/// The unit of search results: a docid plus its computed weight
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocIdNode {
    pub docid: u32,
    pub weight: u32,
}

impl DocIdNode {
    pub fn new(docid: u32) -> Self {
        Self { docid, weight: 0 }
    }

    pub fn with_weight(docid: u32, weight: u32) -> Self {
        Self { docid, weight }
    }
}

/// A per-field term expression; queries are conjunctive across a slice
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchQuery {
    pub field: String,
    pub value: String,
}

impl SearchQuery {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Numeric comparison applied in every segment
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchFilter {
    pub field: String,
    pub kind: FilterKind,
}

impl SearchFilter {
    pub fn new(field: impl Into<String>, kind: FilterKind) -> Self {
        Self {
            field: field.into(),
            kind,
        }
    }
}

/// Filter comparison kinds over `Numeric` field values
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum FilterKind {
    /// Value equals
    Eq(i64),
    /// Value strictly greater than
    Over(i64),
    /// Value strictly less than
    Less(i64),
    /// Inclusive range
    Range { min: i64, max: i64 },
}

impl FilterKind {
    /// Evaluate the comparison against a document's numeric value
    pub fn matches(&self, value: i64) -> bool {
        match *self {
            FilterKind::Eq(v) => value == v,
            FilterKind::Over(v) => value > v,
            FilterKind::Less(v) => value < v,
            FilterKind::Range { min, max } => value >= min && value <= max,
        }
    }
}

/// Field-gathering request: which fields to build frequency maps for
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GatherRequest {
    pub fieldnames: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_kinds() {
        assert!(FilterKind::Eq(5).matches(5));
        assert!(!FilterKind::Eq(5).matches(6));
        assert!(FilterKind::Over(5).matches(6));
        assert!(!FilterKind::Over(5).matches(5));
        assert!(FilterKind::Less(5).matches(4));
        assert!(FilterKind::Range { min: 1, max: 3 }.matches(1));
        assert!(FilterKind::Range { min: 1, max: 3 }.matches(3));
        assert!(!FilterKind::Range { min: 1, max: 3 }.matches(4));
    }

    #[test]
    fn test_docid_node() {
        let node = DocIdNode::new(7);
        assert_eq!(node.docid, 7);
        assert_eq!(node.weight, 0);

        let node = DocIdNode::with_weight(7, 42);
        assert_eq!(node.weight, 42);
    }
}

//! Schema and field type system
//!
//! A schema is the per-index field registry: a map of named, typed fields
//! plus the explicit registration order. At most one field may carry the
//! `PrimaryKey` type.

mod field_type;

pub use field_type::FieldType;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single declared field
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldInfo {
    pub name: String,
    pub field_type: FieldType,
}

impl FieldInfo {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
        }
    }
}

/// The per-index field registry
///
/// The serialized field map does not preserve registration order, so the
/// order is kept in an explicit `fieldnames` list persisted alongside it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Schema {
    fields: HashMap<String, FieldInfo>,
    fieldnames: Vec<String>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a schema from a persisted field map and ordered name list
    pub fn from_parts(fields: HashMap<String, FieldInfo>, fieldnames: Vec<String>) -> Self {
        Self { fields, fieldnames }
    }

    /// Register a field; returns false if the name is already taken
    pub fn insert(&mut self, field: FieldInfo) -> bool {
        if self.fields.contains_key(&field.name) {
            return false;
        }
        self.fieldnames.push(field.name.clone());
        self.fields.insert(field.name.clone(), field);
        true
    }

    /// Remove a field by name; returns the removed info if it existed
    pub fn remove(&mut self, name: &str) -> Option<FieldInfo> {
        let removed = self.fields.remove(name);
        if removed.is_some() {
            self.fieldnames.retain(|n| n != name);
        }
        removed
    }

    pub fn get(&self, name: &str) -> Option<&FieldInfo> {
        self.fields.get(name)
    }

    pub fn field_type(&self, name: &str) -> Option<FieldType> {
        self.fields.get(name).map(|f| f.field_type.clone())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Field names in registration order
    pub fn fieldnames(&self) -> &[String] {
        &self.fieldnames
    }

    /// All fields except the primary key, in registration order
    pub fn non_primary_fields(&self) -> Vec<FieldInfo> {
        self.fieldnames
            .iter()
            .filter_map(|n| self.fields.get(n))
            .filter(|f| !f.field_type.is_primary_key())
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field_map(&self) -> &HashMap<String, FieldInfo> {
        &self.fields
    }
}

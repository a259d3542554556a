//! Index metadata sidecar
//!
//! The meta file is the JSON record of the index's schema and counters.
//! It is rewritten via a temp-file rename after every successful mutation,
//! so the on-disk copy always reflects a past consistent state. The field
//! map alone does not preserve registration order; the explicit
//! `fieldnames` list does.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::schema::FieldInfo;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IndexMeta {
    pub name: String,
    /// Directory the index was last written under; informational on load,
    /// the caller's path wins so an index directory can be relocated
    pub pathname: String,
    pub fields: HashMap<String, FieldInfo>,
    pub fieldnames: Vec<String>,
    pub primary_key: String,
    pub start_docid: u32,
    pub max_docid: u32,
    pub segment_prefix: u64,
    pub segment_names: Vec<String>,
}

impl IndexMeta {
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(self)?;
        let tmp = path.as_ref().with_extension("meta.tmp");
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, path.as_ref())?;
        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = fs::read(path.as_ref())?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

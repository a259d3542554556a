//! The mutable in-memory segment

use std::collections::HashMap;
use std::fs;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::warn;

use super::{data::SegmentData, segment_file, SegmentReader};
use crate::analysis::Analyzer;
use crate::bitmap::DeleteBitmap;
use crate::config::AnalyzerConfig;
use crate::error::{KestrelError, Result};
use crate::kvtree::{BTreeStore, KeyValueTree};
use crate::models::{DocIdNode, SearchFilter, SearchQuery};
use crate::schema::FieldInfo;

/// The single segment currently accepting writes
///
/// Writers are serialized by the owning index; readers take the inner
/// read lock, so search and retrieval can run against unflushed data.
pub struct MemorySegment {
    segment_name: String,
    dict: Option<Arc<BTreeStore>>,
    analyzer: Analyzer,
    inner: RwLock<SegmentData>,
}

impl MemorySegment {
    pub fn new(
        segment_name: impl Into<String>,
        start_docid: u32,
        fields: Vec<FieldInfo>,
        dict: Option<Arc<BTreeStore>>,
        analyzer_config: AnalyzerConfig,
    ) -> Self {
        let analyzer = Analyzer::new(&analyzer_config);
        Self {
            segment_name: segment_name.into(),
            dict,
            analyzer,
            inner: RwLock::new(SegmentData::new(start_docid, fields, analyzer_config)),
        }
    }

    pub fn segment_name(&self) -> &str {
        &self.segment_name
    }

    pub fn start_docid(&self) -> u32 {
        self.inner.read().start_docid()
    }

    pub fn max_docid(&self) -> u32 {
        self.inner.read().max_docid()
    }

    pub fn doc_count(&self) -> u32 {
        self.inner.read().doc_count()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Extend the field set; only legal while the segment holds no documents
    pub fn add_field(&self, field: FieldInfo) -> Result<()> {
        let mut inner = self.inner.write();
        if !inner.is_empty() {
            return Err(KestrelError::SegmentNotEmpty(self.segment_name.clone()));
        }
        inner.add_field(field);
        Ok(())
    }

    pub fn delete_field(&self, name: &str) {
        self.inner.write().delete_field(name);
    }

    /// Add a document under the next docid
    ///
    /// The docid must equal the segment's current `max_docid`; the index
    /// assigns ids monotonically and never re-submits one.
    pub fn add_document(&self, docid: u32, content: &HashMap<String, String>) -> Result<()> {
        let mut inner = self.inner.write();
        let expected = inner.max_docid();
        if docid != expected {
            return Err(KestrelError::DocIdOutOfOrder { docid, expected });
        }
        inner.add_row(docid, content, &self.analyzer);
        Ok(())
    }

    pub fn search_docids(
        &self,
        query: &SearchQuery,
        filters: &[SearchFilter],
        bitmap: &DeleteBitmap,
        acc: &mut Vec<DocIdNode>,
    ) {
        self.inner
            .read()
            .search_docids(query, filters, bitmap, &self.analyzer, acc);
    }

    pub fn contains(&self, docid: u32) -> bool {
        self.inner.read().contains(docid)
    }

    pub fn get_document(&self, docid: u32) -> Option<HashMap<String, String>> {
        self.inner.read().get_document(docid)
    }

    pub fn get_value_with_fields(
        &self,
        docid: u32,
        fields: &[String],
    ) -> Option<HashMap<String, String>> {
        self.inner.read().get_value_with_fields(docid, fields)
    }

    /// Re-ingest the live rows of a sealed tail, preserving docids
    ///
    /// The segment must be freshly created with `start_docid` equal to the
    /// tail head's `start_docid`; after the rewrite it covers the tail's
    /// full docid range even where deleted rows left holes.
    pub fn merge_from(&self, sealed: &[Arc<SegmentReader>], bitmap: &DeleteBitmap) -> Result<()> {
        let mut inner = self.inner.write();
        if !inner.is_empty() {
            return Err(KestrelError::SegmentNotEmpty(self.segment_name.clone()));
        }
        for reader in sealed {
            for (docid, row) in reader.rows() {
                if bitmap.test(docid) {
                    continue;
                }
                inner.add_row(docid, row, &self.analyzer);
            }
            inner.extend_max_docid(reader.max_docid());
        }
        Ok(())
    }

    /// Write the segment payload to disk
    ///
    /// Also records term document frequencies for `Text` fields into the
    /// DF dictionary. Dictionary write failures are logged and do not fail
    /// the seal; the dictionary is advisory metadata.
    pub fn serialize(&self) -> Result<()> {
        let inner = self.inner.read();
        let bytes = bincode::serialize(&*inner)?;
        let path = segment_file(&self.segment_name);
        let tmp = format!("{path}.tmp");
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, &path)?;

        if let Some(dict) = &self.dict {
            for (field, term, df) in inner.term_frequencies() {
                if let Err(e) = dict
                    .add_namespace(field)
                    .and_then(|_| dict.set(field, term, df))
                {
                    warn!(field, term, "failed to record term frequency: {e}");
                }
            }
        }
        Ok(())
    }
}

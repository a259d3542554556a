//! Immutable sealed segment

use std::collections::HashMap;
use std::fs;

use super::{data::SegmentData, segment_file};
use crate::analysis::Analyzer;
use crate::bitmap::DeleteBitmap;
use crate::error::Result;
use crate::models::{DocIdNode, SearchFilter, SearchQuery};

/// A sealed segment loaded from its on-disk payload
///
/// Content is immutable after open; deletions are applied externally via
/// the index bitmap at query time.
pub struct SegmentReader {
    segment_name: String,
    analyzer: Analyzer,
    data: SegmentData,
}

impl SegmentReader {
    /// Load a sealed segment by name
    pub fn open(segment_name: &str) -> Result<Self> {
        let bytes = fs::read(segment_file(segment_name))?;
        let data: SegmentData = bincode::deserialize(&bytes)?;
        let analyzer = Analyzer::new(data.analyzer_config());
        Ok(Self {
            segment_name: segment_name.to_string(),
            analyzer,
            data,
        })
    }

    pub fn segment_name(&self) -> &str {
        &self.segment_name
    }

    pub fn start_docid(&self) -> u32 {
        self.data.start_docid()
    }

    pub fn max_docid(&self) -> u32 {
        self.data.max_docid()
    }

    pub fn doc_count(&self) -> u32 {
        self.data.doc_count()
    }

    pub fn search_docids(
        &self,
        query: &SearchQuery,
        filters: &[SearchFilter],
        bitmap: &DeleteBitmap,
        acc: &mut Vec<DocIdNode>,
    ) {
        self.data
            .search_docids(query, filters, bitmap, &self.analyzer, acc);
    }

    pub fn contains(&self, docid: u32) -> bool {
        self.data.contains(docid)
    }

    pub fn get_document(&self, docid: u32) -> Option<HashMap<String, String>> {
        self.data.get_document(docid)
    }

    pub fn get_value_with_fields(
        &self,
        docid: u32,
        fields: &[String],
    ) -> Option<HashMap<String, String>> {
        self.data.get_value_with_fields(docid, fields)
    }

    /// Stored rows in ascending docid order (used by merge)
    pub fn rows(&self) -> impl Iterator<Item = (u32, &HashMap<String, String>)> {
        self.data.rows()
    }

    /// Remove the backing file of a retired segment
    pub fn destroy(&self) -> Result<()> {
        fs::remove_file(segment_file(&self.segment_name))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalyzerConfig;
    use crate::schema::{FieldInfo, FieldType};
    use crate::segment::MemorySegment;
    use tempfile::TempDir;

    #[test]
    fn test_open_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let name = dir.path().join("nope").to_string_lossy().into_owned();
        assert!(SegmentReader::open(&name).is_err());
    }

    #[test]
    fn test_destroy_removes_file() {
        let dir = TempDir::new().unwrap();
        let name = dir.path().join("seg").to_string_lossy().into_owned();

        let segment = MemorySegment::new(
            name.clone(),
            0,
            vec![FieldInfo::new("body", FieldType::Text)],
            None,
            AnalyzerConfig::default(),
        );
        let mut content = HashMap::new();
        content.insert("body".to_string(), "hello".to_string());
        segment.add_document(0, &content).unwrap();
        segment.serialize().unwrap();

        let reader = SegmentReader::open(&name).unwrap();
        reader.destroy().unwrap();
        assert!(SegmentReader::open(&name).is_err());
    }
}

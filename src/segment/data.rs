//! Shared segment representation
//!
//! `SegmentData` is both the in-memory index structure and the bincode
//! payload written at seal time. Postings are kept in ascending docid
//! order; the forward store is keyed by docid so merged segments can
//! carry holes where deleted documents were dropped.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::analysis::Analyzer;
use crate::bitmap::DeleteBitmap;
use crate::config::AnalyzerConfig;
use crate::models::{DocIdNode, SearchFilter, SearchQuery};
use crate::schema::{FieldInfo, FieldType};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SegmentData {
    start_docid: u32,
    max_docid: u32,
    fields: Vec<FieldInfo>,
    analyzer_config: AnalyzerConfig,
    /// field -> term -> ascending docids
    invert: HashMap<String, BTreeMap<String, Vec<u32>>>,
    /// field -> numeric value -> ascending docids
    numeric: HashMap<String, BTreeMap<i64, Vec<u32>>>,
    /// docid -> stored row
    forward: BTreeMap<u32, HashMap<String, String>>,
}

impl SegmentData {
    pub fn new(start_docid: u32, fields: Vec<FieldInfo>, analyzer_config: AnalyzerConfig) -> Self {
        Self {
            start_docid,
            max_docid: start_docid,
            fields,
            analyzer_config,
            invert: HashMap::new(),
            numeric: HashMap::new(),
            forward: BTreeMap::new(),
        }
    }

    pub fn start_docid(&self) -> u32 {
        self.start_docid
    }

    pub fn max_docid(&self) -> u32 {
        self.max_docid
    }

    pub fn doc_count(&self) -> u32 {
        self.max_docid - self.start_docid
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    pub fn analyzer_config(&self) -> &AnalyzerConfig {
        &self.analyzer_config
    }

    pub fn fields(&self) -> &[FieldInfo] {
        &self.fields
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    fn field_type(&self, name: &str) -> Option<&FieldType> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| &f.field_type)
    }

    pub fn add_field(&mut self, field: FieldInfo) {
        if !self.has_field(&field.name) {
            self.fields.push(field);
        }
    }

    pub fn delete_field(&mut self, name: &str) {
        self.fields.retain(|f| f.name != name);
        self.invert.remove(name);
        self.numeric.remove(name);
        for row in self.forward.values_mut() {
            row.remove(name);
        }
    }

    /// Index one document row under an explicit docid
    ///
    /// Only registered fields are indexed, but the whole row is stored:
    /// the primary-key value lives in the forward data even though the
    /// key itself is indexed in the primary tree, not here.
    pub fn add_row(
        &mut self,
        docid: u32,
        row: &HashMap<String, String>,
        analyzer: &Analyzer,
    ) {
        for field in &self.fields {
            let Some(value) = row.get(&field.name) else {
                continue;
            };
            match field.field_type {
                FieldType::Text => {
                    let postings = self.invert.entry(field.name.clone()).or_default();
                    for term in analyzer.analyze(value) {
                        let list = postings.entry(term).or_default();
                        if list.last() != Some(&docid) {
                            list.push(docid);
                        }
                    }
                }
                FieldType::Keyword => {
                    let postings = self.invert.entry(field.name.clone()).or_default();
                    let list = postings.entry(value.clone()).or_default();
                    if list.last() != Some(&docid) {
                        list.push(docid);
                    }
                }
                FieldType::Numeric => {
                    if let Ok(n) = value.parse::<i64>() {
                        let postings = self.numeric.entry(field.name.clone()).or_default();
                        let list = postings.entry(n).or_default();
                        if list.last() != Some(&docid) {
                            list.push(docid);
                        }
                    }
                }
                FieldType::PrimaryKey => continue,
            }
        }
        self.forward.insert(docid, row.clone());
        self.max_docid = self.max_docid.max(docid + 1);
    }

    /// Force the covered docid range past the last stored row
    ///
    /// Used by merge so the rewritten segment spans the full range of the
    /// retired tail even when its trailing documents were all deleted.
    pub fn extend_max_docid(&mut self, max_docid: u32) {
        self.max_docid = self.max_docid.max(max_docid);
    }

    /// Evaluate one query against this segment, appending matches
    ///
    /// Matches are appended in ascending docid order, skipping deleted
    /// docids and documents that fail any filter.
    pub fn search_docids(
        &self,
        query: &SearchQuery,
        filters: &[SearchFilter],
        bitmap: &DeleteBitmap,
        analyzer: &Analyzer,
        acc: &mut Vec<DocIdNode>,
    ) {
        let candidates = match self.field_type(&query.field) {
            Some(FieldType::Text) => {
                let terms = analyzer.analyze(&query.value);
                if terms.is_empty() {
                    return;
                }
                let Some(postings) = self.invert.get(&query.field) else {
                    return;
                };
                let mut lists = Vec::with_capacity(terms.len());
                for term in &terms {
                    match postings.get(term) {
                        Some(list) => lists.push(list.as_slice()),
                        None => return,
                    }
                }
                intersect_sorted(&lists)
            }
            Some(FieldType::Keyword) => self
                .invert
                .get(&query.field)
                .and_then(|postings| postings.get(&query.value))
                .cloned()
                .unwrap_or_default(),
            Some(FieldType::Numeric) => match query.value.parse::<i64>() {
                Ok(n) => self
                    .numeric
                    .get(&query.field)
                    .and_then(|postings| postings.get(&n))
                    .cloned()
                    .unwrap_or_default(),
                Err(_) => return,
            },
            _ => return,
        };

        for docid in candidates {
            if bitmap.test(docid) {
                continue;
            }
            if !self.passes_filters(docid, filters) {
                continue;
            }
            acc.push(DocIdNode::new(docid));
        }
    }

    fn passes_filters(&self, docid: u32, filters: &[SearchFilter]) -> bool {
        if filters.is_empty() {
            return true;
        }
        let Some(row) = self.forward.get(&docid) else {
            return false;
        };
        filters.iter().all(|filter| {
            row.get(&filter.field)
                .and_then(|v| v.parse::<i64>().ok())
                .map(|n| filter.kind.matches(n))
                .unwrap_or(false)
        })
    }

    pub fn contains(&self, docid: u32) -> bool {
        docid >= self.start_docid && docid < self.max_docid
    }

    pub fn get_document(&self, docid: u32) -> Option<HashMap<String, String>> {
        self.forward.get(&docid).cloned()
    }

    pub fn get_value_with_fields(
        &self,
        docid: u32,
        fields: &[String],
    ) -> Option<HashMap<String, String>> {
        let row = self.forward.get(&docid)?;
        Some(
            row.iter()
                .filter(|(k, _)| fields.iter().any(|f| f == *k))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }

    /// Stored rows in ascending docid order
    pub fn rows(&self) -> impl Iterator<Item = (u32, &HashMap<String, String>)> {
        self.forward.iter().map(|(docid, row)| (*docid, row))
    }

    /// Term document frequencies per `Text` field
    pub fn term_frequencies(&self) -> impl Iterator<Item = (&str, &str, u64)> {
        self.fields
            .iter()
            .filter(|f| f.field_type.is_tokenized())
            .filter_map(|f| self.invert.get(&f.name).map(|p| (f.name.as_str(), p)))
            .flat_map(|(field, postings)| {
                postings
                    .iter()
                    .map(move |(term, list)| (field, term.as_str(), list.len() as u64))
            })
    }
}

/// Intersect ascending docid lists
fn intersect_sorted(lists: &[&[u32]]) -> Vec<u32> {
    let Some((first, rest)) = lists.split_first() else {
        return Vec::new();
    };
    let mut out: Vec<u32> = first.to_vec();
    for list in rest {
        let mut next = Vec::with_capacity(out.len().min(list.len()));
        let (mut i, mut j) = (0, 0);
        while i < out.len() && j < list.len() {
            match out[i].cmp(&list[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    next.push(out[i]);
                    i += 1;
                    j += 1;
                }
            }
        }
        out = next;
        if out.is_empty() {
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn text_fields() -> Vec<FieldInfo> {
        vec![
            FieldInfo::new("body", FieldType::Text),
            FieldInfo::new("tag", FieldType::Keyword),
            FieldInfo::new("year", FieldType::Numeric),
        ]
    }

    fn row(body: &str, tag: &str, year: &str) -> HashMap<String, String> {
        let mut row = HashMap::new();
        row.insert("body".to_string(), body.to_string());
        row.insert("tag".to_string(), tag.to_string());
        row.insert("year".to_string(), year.to_string());
        row
    }

    fn search(
        data: &SegmentData,
        analyzer: &Analyzer,
        bitmap: &DeleteBitmap,
        query: SearchQuery,
        filters: &[SearchFilter],
    ) -> Vec<u32> {
        let mut acc = Vec::new();
        data.search_docids(&query, filters, bitmap, analyzer, &mut acc);
        acc.iter().map(|n| n.docid).collect()
    }

    #[test]
    fn test_text_search_appends_in_docid_order() {
        let config = AnalyzerConfig::default();
        let analyzer = Analyzer::new(&config);
        let dir = TempDir::new().unwrap();
        let bitmap = DeleteBitmap::create(dir.path().join("t.bitmap")).unwrap();

        let mut data = SegmentData::new(0, text_fields(), config);
        data.add_row(0, &row("hello world", "a", "2020"), &analyzer);
        data.add_row(1, &row("hello rust", "b", "2021"), &analyzer);
        data.add_row(2, &row("goodbye world", "a", "2022"), &analyzer);

        assert_eq!(
            search(&data, &analyzer, &bitmap, SearchQuery::new("body", "hello"), &[]),
            vec![0, 1]
        );
        // Multi-token query intersects within the segment
        assert_eq!(
            search(
                &data,
                &analyzer,
                &bitmap,
                SearchQuery::new("body", "hello world"),
                &[]
            ),
            vec![0]
        );
    }

    #[test]
    fn test_keyword_and_numeric_search() {
        let config = AnalyzerConfig::default();
        let analyzer = Analyzer::new(&config);
        let dir = TempDir::new().unwrap();
        let bitmap = DeleteBitmap::create(dir.path().join("t.bitmap")).unwrap();

        let mut data = SegmentData::new(0, text_fields(), config);
        data.add_row(0, &row("x", "news", "2020"), &analyzer);
        data.add_row(1, &row("y", "blog", "2021"), &analyzer);

        assert_eq!(
            search(&data, &analyzer, &bitmap, SearchQuery::new("tag", "news"), &[]),
            vec![0]
        );
        assert_eq!(
            search(&data, &analyzer, &bitmap, SearchQuery::new("year", "2021"), &[]),
            vec![1]
        );
        // Keyword values are not tokenized
        assert!(search(&data, &analyzer, &bitmap, SearchQuery::new("tag", "NEWS"), &[])
            .is_empty());
    }

    #[test]
    fn test_deleted_docids_excluded() {
        let config = AnalyzerConfig::default();
        let analyzer = Analyzer::new(&config);
        let dir = TempDir::new().unwrap();
        let bitmap = DeleteBitmap::create(dir.path().join("t.bitmap")).unwrap();

        let mut data = SegmentData::new(0, text_fields(), config);
        data.add_row(0, &row("hello", "a", "1"), &analyzer);
        data.add_row(1, &row("hello", "b", "2"), &analyzer);
        bitmap.set(0).unwrap();

        assert_eq!(
            search(&data, &analyzer, &bitmap, SearchQuery::new("body", "hello"), &[]),
            vec![1]
        );
    }

    #[test]
    fn test_filters() {
        let config = AnalyzerConfig::default();
        let analyzer = Analyzer::new(&config);
        let dir = TempDir::new().unwrap();
        let bitmap = DeleteBitmap::create(dir.path().join("t.bitmap")).unwrap();

        let mut data = SegmentData::new(0, text_fields(), config);
        data.add_row(0, &row("hello", "a", "2019"), &analyzer);
        data.add_row(1, &row("hello", "a", "2022"), &analyzer);

        let filters = vec![SearchFilter::new(
            "year",
            crate::models::FilterKind::Over(2020),
        )];
        assert_eq!(
            search(
                &data,
                &analyzer,
                &bitmap,
                SearchQuery::new("body", "hello"),
                &filters
            ),
            vec![1]
        );
    }

    #[test]
    fn test_unknown_field_matches_nothing() {
        let config = AnalyzerConfig::default();
        let analyzer = Analyzer::new(&config);
        let dir = TempDir::new().unwrap();
        let bitmap = DeleteBitmap::create(dir.path().join("t.bitmap")).unwrap();

        let mut data = SegmentData::new(0, text_fields(), config);
        data.add_row(0, &row("hello", "a", "1"), &analyzer);

        assert!(
            search(&data, &analyzer, &bitmap, SearchQuery::new("nope", "hello"), &[])
                .is_empty()
        );
    }

    #[test]
    fn test_delete_field_scrubs_data() {
        let config = AnalyzerConfig::default();
        let analyzer = Analyzer::new(&config);
        let dir = TempDir::new().unwrap();
        let bitmap = DeleteBitmap::create(dir.path().join("t.bitmap")).unwrap();

        let mut data = SegmentData::new(0, text_fields(), config);
        data.add_row(0, &row("hello", "a", "1"), &analyzer);
        data.delete_field("body");

        assert!(!data.has_field("body"));
        assert!(
            search(&data, &analyzer, &bitmap, SearchQuery::new("body", "hello"), &[])
                .is_empty()
        );
        assert!(!data.get_document(0).unwrap().contains_key("body"));
    }

    #[test]
    fn test_rows_keyed_by_docid_allow_holes() {
        let config = AnalyzerConfig::default();
        let analyzer = Analyzer::new(&config);

        let mut data = SegmentData::new(0, text_fields(), config);
        data.add_row(0, &row("a", "a", "1"), &analyzer);
        data.add_row(2, &row("c", "c", "3"), &analyzer);
        data.extend_max_docid(4);

        assert_eq!(data.max_docid(), 4);
        assert!(data.get_document(1).is_none());
        assert!(data.get_document(2).is_some());
        let docids: Vec<u32> = data.rows().map(|(d, _)| d).collect();
        assert_eq!(docids, vec![0, 2]);
    }
}

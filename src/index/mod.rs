//! Index-level lifecycle and query orchestration
//!
//! The index owns an ordered roster of sealed segments plus at most one
//! mutable segment, a deletion bitmap, a primary-key tree, and a DF
//! dictionary. A single writer mutex serializes every mutation that
//! touches the roster, the mutable segment, the schema, or the docid
//! counters. Reads never take that mutex: the sealed roster and the
//! mutable-segment pointer are swapped atomically, and `Arc` reference
//! counts keep merged-away segments alive until in-flight readers drop
//! them.

mod meta;
mod scoring;

pub use meta::IndexMeta;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use arc_swap::{ArcSwap, ArcSwapOption};
use parking_lot::Mutex;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::bitmap::DeleteBitmap;
use crate::config::IndexConfig;
use crate::error::{KestrelError, Result};
use crate::kvtree::{BTreeStore, KeyValueTree};
use crate::models::{DocIdNode, GatherRequest, SearchFilter, SearchQuery};
use crate::pool::{DocIdPool, PooledDocIds};
use crate::schema::{FieldInfo, FieldType, Schema};
use crate::segment::{MemorySegment, SegmentReader};

use scoring::{compute_weight, intersect_into};

/// Reserved namespace for the synthetic default primary key
pub const DEFAULT_PRIMARY_KEY: &str = "_default";

/// Initial segment-name prefix for a fresh index
const INITIAL_SEGMENT_PREFIX: u64 = 1000;

/// Writer-side state guarded by the index mutex
struct WriterState {
    segment_prefix: u64,
    segment_names: Vec<String>,
}

/// A named, file-backed search index
pub struct Index {
    name: String,
    path: PathBuf,
    config: IndexConfig,
    schema: ArcSwap<Schema>,
    primary_key: ArcSwap<String>,
    sealed: ArcSwap<Vec<Arc<SegmentReader>>>,
    memory: ArcSwapOption<MemorySegment>,
    state: Mutex<WriterState>,
    start_docid: AtomicU32,
    max_docid: AtomicU32,
    primary: BTreeStore,
    dict: Arc<BTreeStore>,
    bitmap: DeleteBitmap,
}

impl Index {
    /// Create an empty index at `path`
    ///
    /// Creates the bitmap file, the primary-key tree (with the default-PK
    /// namespace registered), and the DF dictionary. No mutable segment
    /// exists until the first write or schema commit.
    pub fn create<P: AsRef<Path>>(name: &str, path: P, config: IndexConfig) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        fs::create_dir_all(&path)?;

        let bitmap = DeleteBitmap::create(path.join(format!("{name}.bitmap")))?;
        let dict = Arc::new(BTreeStore::open(path.join(format!("{name}_dict.dic")))?);
        let primary = BTreeStore::open(path.join(format!("{name}_primary.pk")))?;
        primary.add_namespace(DEFAULT_PRIMARY_KEY)?;

        info!(index = name, "created empty index");
        Ok(Self {
            name: name.to_string(),
            path,
            config,
            schema: ArcSwap::from_pointee(Schema::new()),
            primary_key: ArcSwap::from_pointee(DEFAULT_PRIMARY_KEY.to_string()),
            sealed: ArcSwap::from_pointee(Vec::new()),
            memory: ArcSwapOption::const_empty(),
            state: Mutex::new(WriterState {
                segment_prefix: INITIAL_SEGMENT_PREFIX,
                segment_names: Vec::new(),
            }),
            start_docid: AtomicU32::new(0),
            max_docid: AtomicU32::new(0),
            primary,
            dict,
            bitmap,
        })
    }

    /// Load an index from its meta file
    ///
    /// A missing or undecodable meta file yields an empty shell with the
    /// same on-disk collaborators opened non-destructively. Otherwise the
    /// listed sealed segments are reopened in order and a fresh mutable
    /// segment is created over the non-PK fields at `max_docid`.
    pub fn open<P: AsRef<Path>>(name: &str, path: P, config: IndexConfig) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let meta_path = path.join(format!("{name}.meta"));

        let meta = match IndexMeta::load(&meta_path) {
            Ok(meta) => meta,
            Err(e) => {
                warn!(index = name, "meta missing or undecodable, starting empty: {e}");
                fs::create_dir_all(&path)?;
                let bitmap = DeleteBitmap::open(path.join(format!("{name}.bitmap")))?;
                let dict = Arc::new(BTreeStore::open(path.join(format!("{name}_dict.dic")))?);
                let primary = BTreeStore::open(path.join(format!("{name}_primary.pk")))?;
                primary.add_namespace(DEFAULT_PRIMARY_KEY)?;
                return Ok(Self {
                    name: name.to_string(),
                    path,
                    config,
                    schema: ArcSwap::from_pointee(Schema::new()),
                    primary_key: ArcSwap::from_pointee(DEFAULT_PRIMARY_KEY.to_string()),
                    sealed: ArcSwap::from_pointee(Vec::new()),
                    memory: ArcSwapOption::const_empty(),
                    state: Mutex::new(WriterState {
                        segment_prefix: INITIAL_SEGMENT_PREFIX,
                        segment_names: Vec::new(),
                    }),
                    start_docid: AtomicU32::new(0),
                    max_docid: AtomicU32::new(0),
                    primary,
                    dict,
                    bitmap,
                });
            }
        };

        let dict = Arc::new(BTreeStore::open(path.join(format!("{name}_dict.dic")))?);

        let mut sealed = Vec::with_capacity(meta.segment_names.len());
        for segment_name in &meta.segment_names {
            sealed.push(Arc::new(SegmentReader::open(segment_name)?));
        }

        let schema = Schema::from_parts(meta.fields, meta.fieldnames);
        let mut segment_prefix = meta.segment_prefix;
        let segment_name = path
            .join(format!("{name}_{segment_prefix}"))
            .to_string_lossy()
            .into_owned();
        let memory = MemorySegment::new(
            segment_name,
            meta.max_docid,
            schema.non_primary_fields(),
            Some(dict.clone()),
            config.analyzer.clone(),
        );
        segment_prefix += 1;

        let bitmap = DeleteBitmap::open(path.join(format!("{name}.bitmap")))?;
        let primary = BTreeStore::open(path.join(format!("{name}_primary.pk")))?;

        info!(index = name, segments = sealed.len(), "loaded index");
        Ok(Self {
            name: name.to_string(),
            path,
            config,
            schema: ArcSwap::from_pointee(schema),
            primary_key: ArcSwap::from_pointee(meta.primary_key),
            sealed: ArcSwap::from_pointee(sealed),
            memory: ArcSwapOption::from_pointee(memory),
            state: Mutex::new(WriterState {
                segment_prefix,
                segment_names: meta.segment_names,
            }),
            start_docid: AtomicU32::new(meta.start_docid),
            max_docid: AtomicU32::new(meta.max_docid),
            primary,
            dict,
            bitmap,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_docid(&self) -> u32 {
        self.max_docid.load(Ordering::SeqCst)
    }

    pub fn start_docid(&self) -> u32 {
        self.start_docid.load(Ordering::SeqCst)
    }

    /// The declared primary-key field name, or the reserved default
    pub fn primary_key(&self) -> String {
        self.primary_key.load().as_ref().clone()
    }

    pub fn sealed_segment_count(&self) -> usize {
        self.sealed.load().len()
    }

    /// `(start_docid, max_docid)` of every sealed segment, in roster order
    pub fn sealed_segment_spans(&self) -> Vec<(u32, u32)> {
        self.sealed
            .load()
            .iter()
            .map(|s| (s.start_docid(), s.max_docid()))
            .collect()
    }

    /// Register a field
    ///
    /// Registering a duplicate name is a warning, not an error. A primary
    /// key registers its tree namespace and touches no segment. Any other
    /// field is forwarded to the mutable segment when that segment is
    /// still empty; a non-empty mutable segment is sealed first, because a
    /// segment's field layout is fixed once a document is written.
    pub fn add_field(&self, field: FieldInfo) -> Result<()> {
        if self.schema.load().contains(&field.name) {
            warn!(index = %self.name, field = %field.name, "field exists");
            return Ok(());
        }

        let mut state = self.state.lock();
        // Re-check now that the schema cannot change under us
        if self.schema.load().contains(&field.name) {
            warn!(index = %self.name, field = %field.name, "field exists");
            return Ok(());
        }

        let mut schema = Schema::clone(&self.schema.load());
        schema.insert(field.clone());

        if field.field_type.is_primary_key() {
            self.primary.add_namespace(&field.name)?;
            self.primary_key.store(Arc::new(field.name.clone()));
            self.schema.store(Arc::new(schema));
            return self.persist_meta(&state);
        }

        if field.field_type.is_tokenized() {
            self.dict.add_namespace(&field.name)?;
        }

        self.schema.store(Arc::new(schema));
        match self.memory.load_full() {
            None => {
                let memory = self.new_memory_segment(&mut state);
                self.memory.store(Some(memory));
            }
            Some(memory) if memory.is_empty() => {
                memory.add_field(field)?;
            }
            Some(memory) => {
                self.seal_memory(&memory, &mut state)?;
                let memory = self.new_memory_segment(&mut state);
                self.memory.store(Some(memory));
            }
        }

        self.persist_meta(&state)
    }

    /// Remove a field from the schema
    ///
    /// The primary key cannot be deleted; an unknown name is a warning.
    /// Sealed segments keep the column's data physically, but the field is
    /// gone from the schema so queries over it return empty for the whole
    /// index.
    pub fn delete_field(&self, fieldname: &str) -> Result<()> {
        {
            let schema = self.schema.load();
            if !schema.contains(fieldname) {
                warn!(index = %self.name, field = fieldname, "field not found");
                return Ok(());
            }
        }
        if self.primary_key.load().as_str() == fieldname {
            warn!(index = %self.name, field = fieldname, "field is primary key, cannot delete");
            return Ok(());
        }

        let mut state = self.state.lock();
        let mut schema = Schema::clone(&self.schema.load());
        if schema.remove(fieldname).is_none() {
            warn!(index = %self.name, field = fieldname, "field not found");
            return Ok(());
        }
        self.schema.store(Arc::new(schema));

        match self.memory.load_full() {
            // Schema-only removal; the next write picks up the reduced set
            None => {}
            Some(memory) if memory.is_empty() => {
                memory.delete_field(fieldname);
            }
            Some(memory) => {
                self.seal_memory(&memory, &mut state)?;
                let memory = self.new_memory_segment(&mut state);
                self.memory.store(Some(memory));
            }
        }

        self.persist_meta(&state)
    }

    /// Ingest a document, assigning and returning its docid
    ///
    /// With a declared primary key the value is required, and a prior
    /// document under the same value is marked deleted in the bitmap
    /// before the new mapping is installed. With the default primary key
    /// every document is filed under a fresh v4 UUID, so no conflict can
    /// occur. Any failure after the docid was assigned rolls `max_docid`
    /// back before returning.
    pub fn update_document(&self, content: &HashMap<String, String>) -> Result<u32> {
        let mut state = self.state.lock();

        if self.schema.load().is_empty() {
            error!(index = %self.name, "no field or segment is nil");
            return Err(KestrelError::NoFields);
        }

        if self.memory.load().is_none() {
            let memory = self.new_memory_segment(&mut state);
            self.memory.store(Some(memory));
            self.persist_meta(&state)?;
        }
        let memory = self
            .memory
            .load_full()
            .expect("mutable segment created above");

        let docid = self.max_docid.fetch_add(1, Ordering::SeqCst);
        let rollback = |e: KestrelError| {
            self.max_docid.store(docid, Ordering::SeqCst);
            e
        };

        let primary_key = self.primary_key.load();
        if primary_key.as_str() == DEFAULT_PRIMARY_KEY {
            let uuid = Uuid::new_v4().to_string();
            self.primary
                .set(DEFAULT_PRIMARY_KEY, &uuid, docid as u64)
                .map_err(rollback)?;
        } else {
            let Some(value) = content.get(primary_key.as_str()) else {
                error!(index = %self.name, key = %primary_key.as_str(), "primary key not found in document");
                return Err(rollback(KestrelError::MissingPrimaryKey));
            };
            // A prior mapping means this write supersedes an older
            // document; mark it deleted before installing the new docid.
            if let Some(old) = self
                .primary
                .search(primary_key.as_str(), value)
                .map_err(rollback)?
            {
                self.bitmap.set(old as u32).map_err(rollback)?;
            }
            self.update_primary_key(primary_key.as_str(), value, docid)
                .map_err(rollback)?;
        }

        memory.add_document(docid, content).map_err(rollback)?;
        Ok(docid)
    }

    fn update_primary_key(&self, key_field: &str, key: &str, docid: u32) -> Result<()> {
        self.primary.set(key_field, key, docid as u64).map_err(|e| {
            error!(index = %self.name, "update primary key error: {e}");
            e
        })
    }

    /// Look up a primary-key value
    ///
    /// A stored docid at or past the mutable segment's `start_docid` is
    /// reported as not found: primary-key lookup answers only for flushed
    /// data.
    pub fn find_primary_key(&self, key: &str) -> Result<Option<DocIdNode>> {
        let primary_key = self.primary_key.load();
        let Some(value) = self.primary.search(primary_key.as_str(), key)? else {
            return Ok(None);
        };
        let cutoff = match self.memory.load_full() {
            Some(memory) => memory.start_docid(),
            None => self.max_docid(),
        };
        if value >= cutoff as u64 {
            return Ok(None);
        }
        Ok(Some(DocIdNode::new(value as u32)))
    }

    /// Seal the mutable segment to disk and append it to the roster
    ///
    /// A no-op when no mutable segment exists, which makes back-to-back
    /// calls idempotent.
    pub fn sync_memory_segment(&self) -> Result<()> {
        let mut state = self.state.lock();
        let Some(memory) = self.memory.load_full() else {
            return Ok(());
        };
        if let Err(e) = self.seal_memory(&memory, &mut state) {
            error!(index = %self.name, "sync memory segment error: {e}");
            return Err(e);
        }
        self.persist_meta(&state)
    }

    /// Merge a tail of sealed segments into one
    ///
    /// The tail starts at the first sealed segment whose docid span is
    /// below the configured threshold; when none qualifies this is a
    /// no-op. Meta is persisted before the rewrite so a crash cannot lose
    /// the intent record. The writer mutex is held for the whole merge,
    /// so no write can land in the tail while it is being rewritten.
    pub fn merge_segments(&self) -> Result<()> {
        let mut state = self.state.lock();
        let roster = self.sealed.load_full();

        let start_idx = roster
            .iter()
            .position(|s| s.max_docid() - s.start_docid() < self.config.merge_doc_threshold);
        let Some(start_idx) = start_idx else {
            return Ok(());
        };
        let tail = &roster[start_idx..];

        let segment_name = self.next_segment_name(&mut state);
        self.persist_meta(&state)?;

        let merged = MemorySegment::new(
            segment_name.clone(),
            tail[0].start_docid(),
            self.schema.load().non_primary_fields(),
            Some(self.dict.clone()),
            self.config.analyzer.clone(),
        );
        merged.merge_from(tail, &self.bitmap)?;
        merged.serialize()?;
        drop(merged);

        for segment in tail {
            if let Err(e) = segment.destroy() {
                warn!(segment = segment.segment_name(), "failed to destroy merged segment: {e}");
            }
        }

        let reader = Arc::new(SegmentReader::open(&segment_name)?);
        let mut new_roster: Vec<Arc<SegmentReader>> = roster[..start_idx].to_vec();
        new_roster.push(reader);
        state.segment_names = new_roster
            .iter()
            .map(|s| s.segment_name().to_string())
            .collect();
        self.sealed.store(Arc::new(new_roster));

        info!(
            index = %self.name,
            merged = tail.len(),
            segment = %segment_name,
            "merged segment tail"
        );
        self.persist_meta(&state)
    }

    /// Conjunctive multi-term search returning ranked docids
    ///
    /// Each query fans out across the roster in order, the mutable segment
    /// last; matches are weighted, then intersected query by query. The
    /// result buffer comes from the process-wide pool and is returned to
    /// it when dropped. `None` means the conjunction is empty; partial
    /// results are never returned.
    pub fn search_docids(
        &self,
        queries: &[SearchQuery],
        filters: &[SearchFilter],
    ) -> Option<PooledDocIds<'static>> {
        let pool = DocIdPool::global();
        let mut acc = pool.acquire();

        let schema = self.schema.load();
        let sealed = self.sealed.load_full();
        let memory = self.memory.load_full();

        // A field that left the schema matches nothing anywhere, even
        // though sealed segments still carry its data physically.
        if let Some(query) = queries.first() {
            if schema.contains(&query.field) {
                for segment in sealed.iter() {
                    segment.search_docids(query, filters, &self.bitmap, &mut acc);
                }
                if let Some(memory) = &memory {
                    memory.search_docids(query, filters, &self.bitmap, &mut acc);
                }
            }
            compute_weight(&mut acc, self.max_docid());
        }

        if queries.len() <= 1 {
            return Some(acc);
        }

        for query in &queries[1..] {
            let mut sub = pool.acquire();
            if schema.contains(&query.field) {
                for segment in sealed.iter() {
                    segment.search_docids(query, filters, &self.bitmap, &mut sub);
                }
                if let Some(memory) = &memory {
                    memory.search_docids(query, filters, &self.bitmap, &mut sub);
                }
            }
            let ok = intersect_into(&mut acc, &sub);
            drop(sub);
            if !ok {
                return None;
            }
        }

        Some(acc)
    }

    /// Fetch selected fields of one document
    pub fn get_document_with_fields(
        &self,
        docid: u32,
        fields: &[String],
    ) -> Option<HashMap<String, String>> {
        for segment in self.sealed.load_full().iter() {
            if segment.contains(docid) {
                return segment.get_value_with_fields(docid, fields);
            }
        }
        let memory = self.memory.load_full()?;
        if memory.contains(docid) {
            return memory.get_value_with_fields(docid, fields);
        }
        None
    }

    /// Fetch all stored fields of one document
    pub fn get_document(&self, docid: u32) -> Option<HashMap<String, String>> {
        for segment in self.sealed.load_full().iter() {
            if segment.contains(docid) {
                return segment.get_document(docid);
            }
        }
        let memory = self.memory.load_full()?;
        if memory.contains(docid) {
            return memory.get_document(docid);
        }
        None
    }

    /// Field names in registration order
    pub fn get_fields(&self) -> Vec<String> {
        self.schema.load().fieldnames().to_vec()
    }

    pub fn get_field_type(&self, fieldname: &str) -> Option<FieldType> {
        self.schema.load().field_type(fieldname)
    }

    /// Build per-field `value -> count` frequency maps over a docid list
    pub fn gather_fields(
        &self,
        docids: &[DocIdNode],
        fieldnames: &[String],
    ) -> HashMap<String, HashMap<String, usize>> {
        let mut gathered: HashMap<String, HashMap<String, usize>> = fieldnames
            .iter()
            .map(|f| (f.clone(), HashMap::new()))
            .collect();

        for node in docids {
            let Some(row) = self.get_document_with_fields(node.docid, fieldnames) else {
                continue;
            };
            for (field, value) in row {
                if let Some(counts) = gathered.get_mut(&field) {
                    *counts.entry(value).or_insert(0) += 1;
                }
            }
        }
        gathered
    }

    pub fn gather_fields_by_request(
        &self,
        docids: &[DocIdNode],
        request: &GatherRequest,
    ) -> HashMap<String, HashMap<String, usize>> {
        self.gather_fields(docids, &request.fieldnames)
    }

    fn next_segment_name(&self, state: &mut WriterState) -> String {
        let segment_name = self
            .path
            .join(format!("{}_{}", self.name, state.segment_prefix))
            .to_string_lossy()
            .into_owned();
        state.segment_prefix += 1;
        segment_name
    }

    fn new_memory_segment(&self, state: &mut WriterState) -> Arc<MemorySegment> {
        let segment_name = self.next_segment_name(state);
        Arc::new(MemorySegment::new(
            segment_name,
            self.max_docid(),
            self.schema.load().non_primary_fields(),
            Some(self.dict.clone()),
            self.config.analyzer.clone(),
        ))
    }

    /// Serialize the mutable segment, reopen it sealed, append to the roster
    ///
    /// The mutable slot is cleared before the sealed reader is published,
    /// so a concurrent reader never sees the same docids on both sides of
    /// the seal.
    fn seal_memory(&self, memory: &Arc<MemorySegment>, state: &mut WriterState) -> Result<()> {
        memory.serialize()?;
        let segment_name = memory.segment_name().to_string();
        self.memory.store(None);
        let reader = Arc::new(SegmentReader::open(&segment_name)?);

        let mut roster = Vec::clone(&self.sealed.load_full());
        roster.push(reader);
        state.segment_names = roster
            .iter()
            .map(|s| s.segment_name().to_string())
            .collect();
        self.sealed.store(Arc::new(roster));
        Ok(())
    }

    fn persist_meta(&self, state: &WriterState) -> Result<()> {
        let schema = self.schema.load();
        let meta = IndexMeta {
            name: self.name.clone(),
            pathname: self.path.display().to_string(),
            fields: schema.field_map().clone(),
            fieldnames: schema.fieldnames().to_vec(),
            primary_key: self.primary_key(),
            start_docid: self.start_docid(),
            max_docid: self.max_docid(),
            segment_prefix: state.segment_prefix,
            segment_names: state.segment_names.clone(),
        };
        meta.save(self.path.join(format!("{}.meta", self.name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn doc(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn basic_index(dir: &TempDir) -> Index {
        let index = Index::create("test", dir.path(), IndexConfig::default()).unwrap();
        index
            .add_field(FieldInfo::new("pk", FieldType::PrimaryKey))
            .unwrap();
        index
            .add_field(FieldInfo::new("body", FieldType::Text))
            .unwrap();
        index
    }

    #[test]
    fn test_update_requires_fields() {
        let dir = TempDir::new().unwrap();
        let index = Index::create("test", dir.path(), IndexConfig::default()).unwrap();

        let err = index.update_document(&doc(&[("body", "x")])).unwrap_err();
        assert!(matches!(err, KestrelError::NoFields));
        assert_eq!(index.max_docid(), 0);
    }

    #[test]
    fn test_update_requires_primary_key_value() {
        let dir = TempDir::new().unwrap();
        let index = basic_index(&dir);

        let err = index.update_document(&doc(&[("body", "x")])).unwrap_err();
        assert!(matches!(err, KestrelError::MissingPrimaryKey));
        // max_docid rolled back
        assert_eq!(index.max_docid(), 0);

        index
            .update_document(&doc(&[("pk", "a"), ("body", "x")]))
            .unwrap();
        assert_eq!(index.max_docid(), 1);
    }

    #[test]
    fn test_default_primary_key_accepts_any_document() {
        let dir = TempDir::new().unwrap();
        let index = Index::create("test", dir.path(), IndexConfig::default()).unwrap();
        index
            .add_field(FieldInfo::new("body", FieldType::Text))
            .unwrap();

        index.update_document(&doc(&[("body", "one")])).unwrap();
        index.update_document(&doc(&[("body", "two")])).unwrap();
        assert_eq!(index.max_docid(), 2);
    }

    #[test]
    fn test_duplicate_field_is_noop() {
        let dir = TempDir::new().unwrap();
        let index = basic_index(&dir);

        index
            .add_field(FieldInfo::new("body", FieldType::Keyword))
            .unwrap();
        assert_eq!(index.get_field_type("body"), Some(FieldType::Text));
    }

    #[test]
    fn test_delete_primary_key_is_rejected() {
        let dir = TempDir::new().unwrap();
        let index = basic_index(&dir);

        index.delete_field("pk").unwrap();
        assert_eq!(index.get_field_type("pk"), Some(FieldType::PrimaryKey));
    }

    #[test]
    fn test_find_primary_key_only_sees_flushed_data() {
        let dir = TempDir::new().unwrap();
        let index = basic_index(&dir);

        index
            .update_document(&doc(&[("pk", "a"), ("body", "hello")]))
            .unwrap();
        // Unflushed: the mapping exists but lookup reports not found
        assert!(index.find_primary_key("a").unwrap().is_none());

        index.sync_memory_segment().unwrap();
        let node = index.find_primary_key("a").unwrap().unwrap();
        assert_eq!(node.docid, 0);
    }
}

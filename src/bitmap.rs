//! Persistent deletion bitmap
//!
//! Bit `i` set means docid `i` is deleted. The set is held in memory as a
//! roaring bitmap and rewritten to its backing file on every mutation via
//! a temp-file rename, so the on-disk state is always a complete snapshot.

use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use roaring::RoaringBitmap;

use crate::error::Result;

pub struct DeleteBitmap {
    path: PathBuf,
    bits: RwLock<RoaringBitmap>,
}

impl DeleteBitmap {
    /// Create an empty bitmap file, truncating any existing one
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let bits = RoaringBitmap::new();
        let this = Self {
            path,
            bits: RwLock::new(bits),
        };
        this.persist()?;
        Ok(this)
    }

    /// Open an existing bitmap file; an empty or missing payload is an empty set
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let bits = match fs::read(&path) {
            Ok(bytes) if !bytes.is_empty() => RoaringBitmap::deserialize_from(&bytes[..])?,
            _ => RoaringBitmap::new(),
        };
        Ok(Self {
            path,
            bits: RwLock::new(bits),
        })
    }

    /// Mark a docid as deleted and persist the bitmap
    pub fn set(&self, docid: u32) -> Result<()> {
        self.bits.write().insert(docid);
        self.persist()
    }

    /// Check whether a docid is deleted
    pub fn test(&self, docid: u32) -> bool {
        self.bits.read().contains(docid)
    }

    /// Number of deleted docids
    pub fn len(&self) -> u64 {
        self.bits.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.read().is_empty()
    }

    fn persist(&self) -> Result<()> {
        let mut bytes = Vec::new();
        self.bits.read().serialize_into(&mut bytes)?;
        let tmp = self.path.with_extension("bitmap.tmp");
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

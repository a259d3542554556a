//! Persistent ordered-map trees
//!
//! The index keeps two instances of the same contract: the primary-key
//! tree (primary-key value to docid) and the DF dictionary (term to
//! document frequency). Both are namespaced `(namespace, key) -> u64`
//! maps persisted with fjall, one partition per namespace.

use std::collections::HashMap;
use std::path::Path;

use fjall::{Config, Keyspace, PartitionCreateOptions, PartitionHandle};
use parking_lot::RwLock;

use crate::error::{KestrelError, Result};

/// Namespaced persistent map `(namespace, key) -> u64`
pub trait KeyValueTree {
    /// Register a namespace; a no-op if it already exists
    fn add_namespace(&self, namespace: &str) -> Result<()>;

    /// Insert or overwrite a mapping under a registered namespace
    fn set(&self, namespace: &str, key: &str, value: u64) -> Result<()>;

    /// Look up a key under a registered namespace
    fn search(&self, namespace: &str, key: &str) -> Result<Option<u64>>;
}

/// Registry partition holding the set of namespace names
const NAMESPACE_REGISTRY: &str = "__namespaces";

/// Fjall-backed implementation of [`KeyValueTree`]
pub struct BTreeStore {
    keyspace: Keyspace,
    registry: PartitionHandle,
    partitions: RwLock<HashMap<String, PartitionHandle>>,
}

impl BTreeStore {
    /// Open (or create) a store at the given directory
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let keyspace = Config::new(path.as_ref())
            .open()
            .map_err(|e| KestrelError::Storage(e.to_string()))?;
        let registry = keyspace
            .open_partition(NAMESPACE_REGISTRY, PartitionCreateOptions::default())
            .map_err(|e| KestrelError::Storage(e.to_string()))?;

        // Reopen every namespace recorded by a previous run
        let mut partitions = HashMap::new();
        for item in registry.iter() {
            let (key, _) = item.map_err(|e| KestrelError::Storage(e.to_string()))?;
            let name = String::from_utf8_lossy(&key).into_owned();
            let partition = keyspace
                .open_partition(&partition_name(&name), PartitionCreateOptions::default())
                .map_err(|e| KestrelError::Storage(e.to_string()))?;
            partitions.insert(name, partition);
        }

        Ok(Self {
            keyspace,
            registry,
            partitions: RwLock::new(partitions),
        })
    }

    pub fn has_namespace(&self, namespace: &str) -> bool {
        self.partitions.read().contains_key(namespace)
    }
}

/// Partition names share a keyspace with the registry, so prefix them
fn partition_name(namespace: &str) -> String {
    format!("ns_{namespace}")
}

impl KeyValueTree for BTreeStore {
    fn add_namespace(&self, namespace: &str) -> Result<()> {
        if self.has_namespace(namespace) {
            return Ok(());
        }
        let partition = self
            .keyspace
            .open_partition(&partition_name(namespace), PartitionCreateOptions::default())
            .map_err(|e| KestrelError::Storage(e.to_string()))?;
        self.registry
            .insert(namespace.as_bytes(), b"".as_slice())
            .map_err(|e| KestrelError::Storage(e.to_string()))?;
        self.partitions
            .write()
            .insert(namespace.to_string(), partition);
        Ok(())
    }

    fn set(&self, namespace: &str, key: &str, value: u64) -> Result<()> {
        let partitions = self.partitions.read();
        let partition = partitions
            .get(namespace)
            .ok_or_else(|| KestrelError::UnknownNamespace(namespace.to_string()))?;
        let encoded = value.to_be_bytes();
        partition
            .insert(key.as_bytes(), encoded.as_slice())
            .map_err(|e| KestrelError::Storage(e.to_string()))
    }

    fn search(&self, namespace: &str, key: &str) -> Result<Option<u64>> {
        let partitions = self.partitions.read();
        let Some(partition) = partitions.get(namespace) else {
            return Ok(None);
        };
        let Some(value) = partition
            .get(key.as_bytes())
            .map_err(|e| KestrelError::Storage(e.to_string()))?
        else {
            return Ok(None);
        };
        if value.len() != 8 {
            return Ok(None);
        }
        let mut buf = [0u8; 8];
        buf.copy_from_slice(value.as_ref());
        Ok(Some(u64::from_be_bytes(buf)))
    }
}

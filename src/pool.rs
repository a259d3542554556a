//! Pooled result buffers for query fan-out
//!
//! Search accumulators are drawn from a process-wide bounded free-list so
//! that query fan-out does not allocate per call. `acquire` blocks until a
//! buffer is available; the returned guard gives the buffer back to the
//! pool when dropped, so a buffer is returned exactly once.

use std::ops::{Deref, DerefMut};

use crossbeam::channel::{bounded, Receiver, Sender};
use once_cell::sync::Lazy;

use crate::models::DocIdNode;

/// Number of buffers in the process-wide pool
const POOL_SIZE: usize = 64;
/// Initial capacity of each pooled buffer
const INITIAL_CAPACITY: usize = 1024;
/// Buffers grown past this capacity are replaced before pooling
const MAX_POOLED_CAPACITY: usize = 1 << 20;

static GLOBAL_POOL: Lazy<DocIdPool> = Lazy::new(|| DocIdPool::new(POOL_SIZE, INITIAL_CAPACITY));

/// A bounded free-list of `Vec<DocIdNode>` buffers
pub struct DocIdPool {
    tx: Sender<Vec<DocIdNode>>,
    rx: Receiver<Vec<DocIdNode>>,
}

impl DocIdPool {
    /// Create a pool holding `size` buffers of `capacity` initial capacity
    pub fn new(size: usize, capacity: usize) -> Self {
        let (tx, rx) = bounded(size);
        for _ in 0..size {
            tx.send(Vec::with_capacity(capacity))
                .expect("pool channel sized to hold all buffers");
        }
        Self { tx, rx }
    }

    /// The process-wide pool
    pub fn global() -> &'static DocIdPool {
        &GLOBAL_POOL
    }

    /// Take a buffer, blocking until one is free
    pub fn acquire(&self) -> PooledDocIds<'_> {
        let buf = self
            .rx
            .recv()
            .expect("pool senders live as long as the pool");
        PooledDocIds {
            buf: Some(buf),
            pool: self,
        }
    }

    fn release(&self, mut buf: Vec<DocIdNode>) {
        if buf.capacity() > MAX_POOLED_CAPACITY {
            buf = Vec::with_capacity(INITIAL_CAPACITY);
        } else {
            buf.clear();
        }
        // The pool is bounded to the number of buffers it minted, so the
        // send cannot block unless a buffer is returned twice.
        self.tx
            .send(buf)
            .expect("pool channel sized to hold all buffers");
    }
}

/// A pooled accumulator; returns itself to the pool on drop
pub struct PooledDocIds<'a> {
    buf: Option<Vec<DocIdNode>>,
    pool: &'a DocIdPool,
}

impl PooledDocIds<'_> {
    /// Copy the accumulated results out of the pooled buffer
    pub fn to_vec(&self) -> Vec<DocIdNode> {
        self.buf.as_ref().map(|b| b.clone()).unwrap_or_default()
    }
}

impl Deref for PooledDocIds<'_> {
    type Target = Vec<DocIdNode>;

    fn deref(&self) -> &Self::Target {
        self.buf.as_ref().expect("buffer present until drop")
    }
}

impl DerefMut for PooledDocIds<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.buf.as_mut().expect("buffer present until drop")
    }
}

impl Drop for PooledDocIds<'_> {
    fn drop(&mut self) {
        if let Some(buf) = self.buf.take() {
            self.pool.release(buf);
        }
    }
}

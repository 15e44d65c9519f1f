//! In-memory Store
//!
//! Copy-on-write store with the same transactional contract as
//! `RocksStore`. Readers hold an `Arc` to the committed state, a writer
//! works on a private copy that replaces the committed state on commit.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use super::{check_key, ReadTx, Store, StoreError, WriteTx};

type Bucket = BTreeMap<Vec<u8>, Vec<u8>>;
type Buckets = BTreeMap<String, Bucket>;

/// Volatile transactional store
#[derive(Debug)]
pub struct MemoryStore {
    committed: RwLock<Arc<Buckets>>,
    writer: Mutex<()>,
    read_only: AtomicBool,
}

impl MemoryStore {
    /// Create an empty store with `buckets` provisioned
    pub fn new(buckets: &[&str]) -> Self {
        let state: Buckets = buckets
            .iter()
            .map(|name| (name.to_string(), Bucket::new()))
            .collect();

        Self {
            committed: RwLock::new(Arc::new(state)),
            writer: Mutex::new(()),
            read_only: AtomicBool::new(false),
        }
    }

    /// Reject (or accept again) every put
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.store(read_only, Ordering::SeqCst);
    }

    // The locks guard whole-value swaps, a panicking holder leaves no torn state
    fn snapshot(&self) -> Arc<Buckets> {
        let committed = self.committed.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&committed)
    }
}

impl Store for MemoryStore {
    fn view<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&dyn ReadTx) -> Result<T, E>,
        E: From<StoreError>,
    {
        let tx = MemoryReadTx {
            state: self.snapshot(),
        };
        f(&tx)
    }

    fn update<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut dyn WriteTx) -> Result<T, E>,
        E: From<StoreError>,
    {
        let _writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);

        let mut tx = MemoryWriteTx {
            state: Buckets::clone(&self.snapshot()),
            read_only: self.read_only.load(Ordering::SeqCst),
        };

        match f(&mut tx) {
            Ok(value) => {
                let mut committed = self
                    .committed
                    .write()
                    .unwrap_or_else(PoisonError::into_inner);
                *committed = Arc::new(tx.state);
                Ok(value)
            }
            Err(e) => {
                tracing::debug!("Write transaction rolled back");
                Err(e)
            }
        }
    }
}

fn lookup(state: &Buckets, bucket: &str, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
    state
        .get(bucket)
        .map(|b| b.get(key).cloned())
        .ok_or_else(|| StoreError::BucketNotFound(bucket.to_string()))
}

struct MemoryReadTx {
    state: Arc<Buckets>,
}

impl ReadTx for MemoryReadTx {
    fn get(&self, bucket: &str, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        lookup(&self.state, bucket, key)
    }
}

struct MemoryWriteTx {
    state: Buckets,
    read_only: bool,
}

impl ReadTx for MemoryWriteTx {
    fn get(&self, bucket: &str, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        lookup(&self.state, bucket, key)
    }
}

impl WriteTx for MemoryWriteTx {
    fn put(&mut self, bucket: &str, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        if self.read_only {
            return Err(StoreError::ReadOnly);
        }
        check_key(key)?;

        let entries = self
            .state
            .get_mut(bucket)
            .ok_or_else(|| StoreError::BucketNotFound(bucket.to_string()))?;
        entries.insert(key.to_vec(), value.to_vec());
        Ok(())
    }
}

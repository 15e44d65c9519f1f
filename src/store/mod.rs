//! Store module
//!
//! Transactional key-value storage for aggregates.
//! Data lives in named buckets; every access happens inside a scoped
//! read (`view`) or write (`update`) transaction.

mod error;
mod memory;
mod rocks;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use rocks::RocksStore;

/// Bucket holding every account, keyed by account name
pub const ACCOUNT_BUCKET: &str = "accounts";

/// Largest key a bucket accepts
pub const MAX_KEY_SIZE: usize = 32768;

/// Read access inside a transaction
pub trait ReadTx {
    /// Fetch the value stored under `key`, if any
    fn get(&self, bucket: &str, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError>;
}

/// Write access inside a transaction
///
/// Reads performed through a `WriteTx` see the transaction's own writes.
pub trait WriteTx: ReadTx {
    /// Store `value` under `key`, replacing any previous value
    fn put(&mut self, bucket: &str, key: &[u8], value: &[u8]) -> Result<(), StoreError>;
}

/// Transactional store
///
/// # Guarantees
/// - At most one write transaction runs at a time
/// - A write transaction commits fully when its body returns `Ok`
///   and rolls back fully when it returns `Err`
/// - A read transaction sees a snapshot taken when it began
pub trait Store: Send + Sync {
    /// Run `f` inside a read transaction
    fn view<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&dyn ReadTx) -> Result<T, E>,
        E: From<StoreError>;

    /// Run `f` inside a write transaction
    fn update<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut dyn WriteTx) -> Result<T, E>,
        E: From<StoreError>;
}

/// Validate a key before it is written
pub(crate) fn check_key(key: &[u8]) -> Result<(), StoreError> {
    if key.is_empty() {
        return Err(StoreError::KeyRequired);
    }
    if key.len() > MAX_KEY_SIZE {
        return Err(StoreError::KeyTooLarge(key.len()));
    }
    Ok(())
}

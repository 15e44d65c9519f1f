//! Store Errors
//!
//! Error types for store operations.

/// Errors that can occur in the store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Bucket was never provisioned
    #[error("Bucket not found: {0}")]
    BucketNotFound(String),

    /// Empty keys cannot be stored
    #[error("Key required")]
    KeyRequired,

    /// Key exceeds the maximum key size
    #[error("Key too large: {0} bytes")]
    KeyTooLarge(usize),

    /// Store was switched to read-only mode
    #[error("Store is read-only")]
    ReadOnly,

    /// RocksDB error
    #[error("RocksDB error: {0}")]
    Rocks(#[from] rocksdb::Error),
}

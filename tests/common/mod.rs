//! Common test utilities

use piggy_accounts::store::ACCOUNT_BUCKET;
use piggy_accounts::RocksStore;
use tempfile::TempDir;

/// Open a fresh store in a temporary directory.
///
/// Keep the returned `TempDir` alive for as long as the store is used.
pub fn setup_test_store() -> (TempDir, RocksStore) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = RocksStore::open(dir.path(), &[ACCOUNT_BUCKET]).expect("Failed to open store");
    (dir, store)
}

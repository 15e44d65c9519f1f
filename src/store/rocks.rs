//! RocksDB Store
//!
//! Durable store backed by a RocksDB `TransactionDB`.
//! Each bucket is a column family.

use std::path::Path;
use std::sync::{Mutex, PoisonError};

use rocksdb::{
    ColumnFamily, Options, SnapshotWithThreadMode, Transaction, TransactionDB,
    TransactionDBOptions, DB, DEFAULT_COLUMN_FAMILY_NAME,
};

use super::{check_key, ReadTx, Store, StoreError, WriteTx};

/// Durable transactional store
pub struct RocksStore {
    db: TransactionDB,
    /// Serializes write transactions store-wide
    writer: Mutex<()>,
}

impl RocksStore {
    /// Open (or create) the database at `path` and provision `buckets`.
    ///
    /// Column families already present on disk are reopened as well,
    /// RocksDB refuses to open a database with any of them missing.
    pub fn open<P: AsRef<Path>>(path: P, buckets: &[&str]) -> Result<Self, StoreError> {
        let path = path.as_ref();

        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        // A database that does not exist yet has no column families
        let mut families: Vec<String> = if path.exists() {
            DB::list_cf(&opts, path)?
        } else {
            Vec::new()
        };
        for bucket in std::iter::once(&DEFAULT_COLUMN_FAMILY_NAME).chain(buckets) {
            if !families.iter().any(|name| name == bucket) {
                families.push(bucket.to_string());
            }
        }

        let db = TransactionDB::open_cf(&opts, &TransactionDBOptions::default(), path, &families)?;

        tracing::debug!("Opened store at {} with buckets {:?}", path.display(), families);

        Ok(Self {
            db,
            writer: Mutex::new(()),
        })
    }

    fn bucket(&self, name: &str) -> Result<&ColumnFamily, StoreError> {
        self.db
            .cf_handle(name)
            .ok_or_else(|| StoreError::BucketNotFound(name.to_string()))
    }
}

impl Store for RocksStore {
    fn view<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&dyn ReadTx) -> Result<T, E>,
        E: From<StoreError>,
    {
        let tx = RocksReadTx {
            store: self,
            snapshot: self.db.snapshot(),
        };
        f(&tx)
    }

    fn update<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut dyn WriteTx) -> Result<T, E>,
        E: From<StoreError>,
    {
        // Guards no data; a panicked writer's transaction was rolled back on drop
        let _writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let txn = self.db.transaction();

        let result = {
            let mut tx = RocksWriteTx {
                store: self,
                txn: &txn,
            };
            f(&mut tx)
        };

        match result {
            Ok(value) => {
                txn.commit().map_err(StoreError::from)?;
                Ok(value)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback() {
                    tracing::warn!("Rollback failed: {}", rollback_err);
                }
                tracing::debug!("Write transaction rolled back");
                Err(e)
            }
        }
    }
}

/// Snapshot-isolated read transaction
struct RocksReadTx<'a> {
    store: &'a RocksStore,
    snapshot: SnapshotWithThreadMode<'a, TransactionDB>,
}

impl ReadTx for RocksReadTx<'_> {
    fn get(&self, bucket: &str, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        let cf = self.store.bucket(bucket)?;
        Ok(self.snapshot.get_cf(cf, key)?)
    }
}

/// Pessimistic write transaction
struct RocksWriteTx<'a> {
    store: &'a RocksStore,
    txn: &'a Transaction<'a, TransactionDB>,
}

impl ReadTx for RocksWriteTx<'_> {
    fn get(&self, bucket: &str, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        let cf = self.store.bucket(bucket)?;
        // Lock the row so the value cannot change before commit
        Ok(self.txn.get_for_update_cf(cf, key, true)?)
    }
}

impl WriteTx for RocksWriteTx<'_> {
    fn put(&mut self, bucket: &str, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        check_key(key)?;
        let cf = self.store.bucket(bucket)?;
        self.txn.put_cf(cf, key, value)?;
        Ok(())
    }
}

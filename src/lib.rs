//! piggy_accounts Library
//!
//! Account persistence over an embedded transactional key-value store.
//! Re-exports modules for integration testing and external use.

pub mod codec;
pub mod domain;
pub mod repository;
pub mod store;

// Process wiring (used by main.rs binary)
pub mod config;
mod error;

pub use config::Config;
pub use domain::{Account, Amount, Currency, Item, Saving, TimePeriod, User};
pub use error::{AppError, AppResult};
pub use repository::AccountError;
pub use store::{MemoryStore, RocksStore, Store, StoreError};

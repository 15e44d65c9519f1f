//! Repository module
//!
//! Transactional persistence of aggregates. Every operation takes the
//! store handle explicitly and runs exactly one store transaction.

pub mod account;
mod error;

pub use error::AccountError;

//! Error handling module
//!
//! Centralized error type for the binary and its exit codes.

use crate::repository::AccountError;

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error(transparent)]
    Account(#[from] AccountError),

    #[error("Store error: {0}")]
    Store(#[from] crate::store::StoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl AppError {
    /// Stable machine-readable code
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidCommand(_) => "invalid_command",
            AppError::Account(e) => match e {
                AccountError::DuplicateAccount(_) => "duplicate_account",
                AccountError::NotFound(_) => "account_not_found",
                AccountError::Encoding { .. } => "encoding_error",
                AccountError::Decoding { .. } => "decoding_error",
                AccountError::StoreWrite { .. } => "store_write_error",
                AccountError::StoreRead { .. } => "store_read_error",
                AccountError::Store(_) => "store_error",
            },
            AppError::Store(_) => "store_error",
            AppError::Config(_) => "config_error",
        }
    }

    /// Process exit status
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::InvalidCommand(_) => 2,
            AppError::Account(e) if e.is_client_error() => 3,
            AppError::Config(_) => 78,
            _ => 1,
        }
    }
}

//! Account codec
//!
//! JSON encoding of the account aggregate. The encoded aggregate is the
//! whole stored value: no envelope, version tag or checksum.

use crate::domain::Account;

/// Codec errors
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("Failed to encode account: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to decode account: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Encode an account into its stored representation
pub fn encode(account: &Account) -> Result<Vec<u8>, CodecError> {
    serde_json::to_vec(account).map_err(CodecError::Encode)
}

/// Decode a stored representation into an account
pub fn decode(bytes: &[u8]) -> Result<Account, CodecError> {
    serde_json::from_slice(bytes).map_err(CodecError::Decode)
}

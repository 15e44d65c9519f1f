//! Account Repository Errors

use crate::codec::CodecError;
use crate::store::StoreError;

/// Errors returned by account repository operations
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    /// Create found the name already taken
    #[error("Account already exists: {0}")]
    DuplicateAccount(String),

    /// No account stored under the name
    #[error("Can't find an account by name: {0}")]
    NotFound(String),

    /// Account could not be encoded
    #[error("Failed to encode account {name}: {source}")]
    Encoding {
        name: String,
        #[source]
        source: CodecError,
    },

    /// Stored bytes could not be decoded
    #[error("Can't deserialize an account by name: {name}")]
    Decoding {
        name: String,
        #[source]
        source: CodecError,
    },

    /// Write transaction failed in the store
    #[error("Failed to save account in the store: {name}")]
    StoreWrite {
        name: String,
        #[source]
        source: StoreError,
    },

    /// Read transaction failed in the store
    #[error("Failed to read account from the store: {name}")]
    StoreRead {
        name: String,
        #[source]
        source: StoreError,
    },

    /// Store failure not yet tied to an account, see `in_write` / `in_read`
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl AccountError {
    /// Check if this is caused by the request rather than the store
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AccountError::DuplicateAccount(_) | AccountError::NotFound(_)
        )
    }

    /// Attach the account name to a bare store error raised in a write
    pub(crate) fn in_write(self, name: &str) -> Self {
        match self {
            AccountError::Store(source) => AccountError::StoreWrite {
                name: name.to_string(),
                source,
            },
            other => other,
        }
    }

    /// Attach the account name to a bare store error raised in a read
    pub(crate) fn in_read(self, name: &str) -> Self {
        match self {
            AccountError::Store(source) => AccountError::StoreRead {
                name: name.to_string(),
                source,
            },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_write_names_store_errors() {
        let err = AccountError::Store(StoreError::ReadOnly).in_write("alice");
        assert!(matches!(
            err,
            AccountError::StoreWrite { ref name, source: StoreError::ReadOnly } if name == "alice"
        ));
        assert!(err.to_string().contains("alice"));

        let err = AccountError::DuplicateAccount("alice".to_string()).in_write("alice");
        assert!(matches!(err, AccountError::DuplicateAccount(_)));
    }

    #[test]
    fn test_in_read_names_store_errors() {
        let err = AccountError::Store(StoreError::BucketNotFound("accounts".to_string()))
            .in_read("bob");
        assert!(matches!(
            err,
            AccountError::StoreRead { ref name, source: StoreError::BucketNotFound(_) } if name == "bob"
        ));
        assert!(err.to_string().contains("bob"));

        let err = AccountError::NotFound("bob".to_string()).in_read("bob");
        assert!(matches!(err, AccountError::NotFound(_)));
    }

    #[test]
    fn test_is_client_error() {
        assert!(AccountError::DuplicateAccount("alice".to_string()).is_client_error());
        assert!(AccountError::NotFound("alice".to_string()).is_client_error());
        assert!(!AccountError::Store(StoreError::ReadOnly).is_client_error());
    }

    #[test]
    fn test_error_messages() {
        let err = AccountError::DuplicateAccount("alice".to_string());
        assert_eq!(err.to_string(), "Account already exists: alice");

        let err = AccountError::NotFound("bob".to_string());
        assert_eq!(err.to_string(), "Can't find an account by name: bob");
    }
}

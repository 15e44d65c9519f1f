//! User
//!
//! The part of the user entity an account is derived from.

use serde::{Deserialize, Serialize};

/// User initiating account creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Username (unique), becomes the account name
    username: String,
}

impl User {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ErrorKind;

/// The unique login name of an account.
///
/// Upstream sanitization owns string shape (length, character set); this type
/// only rejects values that cannot name an account at all.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsernameError {
    #[error("username must not be empty")]
    Empty,
}

impl UsernameError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::ValidationSanitization
    }
}

impl TryFrom<String> for Username {
    type Error = UsernameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            return Err(UsernameError::Empty);
        }
        Ok(Username(value))
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl Username {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::password::{HashedPassword, Password};
use crate::error::ErrorKind;

/// Outcome of comparing a plaintext password against a stored hash.
///
/// Verification is an explicit three-way result everywhere: matched,
/// mismatched, or a hashing failure. No call site treats a mismatch as a
/// thrown error and another as a boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordVerdict {
    Match,
    Mismatch,
}

#[derive(Debug, Error)]
pub enum CredentialError {
    /// The underlying primitive failed, e.g. a malformed stored hash.
    #[error("credential hashing failed: {0}")]
    HashingFailure(String),
}

impl CredentialError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Persistence
    }
}

/// Port trait for the password hashing service.
///
/// Hashing is a pure function of its input plus a random salt: deterministic
/// to verify, non-deterministic across calls, no shared state beyond CPU cost.
#[async_trait]
pub trait CredentialHasher: Send + Sync {
    async fn hash(&self, plaintext: &Password) -> Result<HashedPassword, CredentialError>;

    async fn verify(
        &self,
        plaintext: &Password,
        hash: &HashedPassword,
    ) -> Result<PasswordVerdict, CredentialError>;
}

use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

use crate::error::ErrorKind;

/// A plaintext password as received from the caller.
///
/// Strength rules are enforced upstream; the secret is wrapped so it never
/// reaches logs or debug output.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordError {
    #[error("password must not be empty")]
    Empty,
}

impl PasswordError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::ValidationSanitization
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = PasswordError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if value.expose_secret().is_empty() {
            return Err(PasswordError::Empty);
        }
        Ok(Password(value))
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

/// An opaque password hash as produced by the credential hasher and stored by
/// the account store. Never a plaintext.
#[derive(Debug, Clone)]
pub struct HashedPassword(Secret<String>);

impl HashedPassword {
    pub fn new(hash: Secret<String>) -> Self {
        HashedPassword(hash)
    }
}

impl From<String> for HashedPassword {
    fn from(hash: String) -> Self {
        HashedPassword(Secret::from(hash))
    }
}

impl AsRef<Secret<String>> for HashedPassword {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for HashedPassword {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_password() {
        let result = Password::try_from(Secret::from(String::new()));
        assert_eq!(result.unwrap_err(), PasswordError::Empty);
    }

    #[test]
    fn debug_output_redacts_the_secret() {
        let password = Password::try_from(Secret::from("Abc12345!".to_string())).unwrap();
        let rendered = format!("{password:?}");
        assert!(!rendered.contains("Abc12345!"));
    }
}

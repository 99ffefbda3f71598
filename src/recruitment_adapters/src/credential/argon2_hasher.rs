use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{PasswordHasher, SaltString, rand_core},
};
use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};

use recruitment_core::{
    CredentialError, CredentialHasher, HashedPassword, Password, PasswordVerdict,
};

// Cost parameters are fixed module-wide; changing them is a redeploy, not a
// per-call decision. Existing hashes keep verifying since the parameters are
// encoded in the hash string.
const MEMORY_COST_KIB: u32 = 15000;
const TIME_COST: u32 = 2;
const PARALLELISM: u32 = 1;

/// Argon2id implementation of the credential hasher port.
///
/// Hashing and verification run on the blocking thread pool so the memory-hard
/// work never stalls the async workers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2CredentialHasher;

fn argon2() -> Result<Argon2<'static>, CredentialError> {
    let params = Params::new(MEMORY_COST_KIB, TIME_COST, PARALLELISM, None)
        .map_err(|e| CredentialError::HashingFailure(e.to_string()))?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

#[async_trait]
impl CredentialHasher for Argon2CredentialHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, plaintext: &Password) -> Result<HashedPassword, CredentialError> {
        let plaintext = plaintext.clone();
        let current_span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let salt = SaltString::generate(rand_core::OsRng);
                argon2()?
                    .hash_password(plaintext.as_ref().expose_secret().as_bytes(), &salt)
                    .map(|hash| HashedPassword::new(Secret::from(hash.to_string())))
                    .map_err(|e| CredentialError::HashingFailure(e.to_string()))
            })
        })
        .await
        .map_err(|e| CredentialError::HashingFailure(e.to_string()))?
    }

    #[tracing::instrument(name = "Verifying password hash", skip_all)]
    async fn verify(
        &self,
        plaintext: &Password,
        hash: &HashedPassword,
    ) -> Result<PasswordVerdict, CredentialError> {
        let plaintext = plaintext.clone();
        let hash = hash.clone();
        let current_span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let expected = PasswordHash::new(hash.as_ref().expose_secret())
                    .map_err(|e| CredentialError::HashingFailure(e.to_string()))?;
                match argon2()?.verify_password(
                    plaintext.as_ref().expose_secret().as_bytes(),
                    &expected,
                ) {
                    Ok(()) => Ok(PasswordVerdict::Match),
                    Err(argon2::password_hash::Error::Password) => Ok(PasswordVerdict::Mismatch),
                    Err(e) => Err(CredentialError::HashingFailure(e.to_string())),
                }
            })
        })
        .await
        .map_err(|e| CredentialError::HashingFailure(e.to_string()))?
    }
}

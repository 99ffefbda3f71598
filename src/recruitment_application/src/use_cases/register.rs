use recruitment_core::{
    Account, AccountStore, AccountStoreError, CredentialError, CredentialHasher, ErrorKind,
    Registration, Role, StorageError, TransactionalStorage,
};

/// Error types for the registration use case
#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error("that username already exists")]
    DuplicateUsername,
    #[error("credential error: {0}")]
    Credential(#[from] CredentialError),
    #[error("account store error: {0}")]
    AccountStore(AccountStoreError),
    #[error("storage error: {0}")]
    Storage(StorageError),
}

impl RegistrationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RegistrationError::DuplicateUsername => ErrorKind::Conflict,
            RegistrationError::Credential(e) => e.kind(),
            RegistrationError::AccountStore(e) => e.kind(),
            RegistrationError::Storage(e) => e.kind(),
        }
    }
}

impl From<AccountStoreError> for RegistrationError {
    fn from(error: AccountStoreError) -> Self {
        match error {
            AccountStoreError::DuplicateUsername => RegistrationError::DuplicateUsername,
            other => RegistrationError::AccountStore(other),
        }
    }
}

impl From<StorageError> for RegistrationError {
    fn from(error: StorageError) -> Self {
        match error {
            // The pre-check is an optimization only; the unique constraint is
            // the source of truth and may fire as late as commit.
            StorageError::UniqueViolation(_) => RegistrationError::DuplicateUsername,
            other => RegistrationError::Storage(other),
        }
    }
}

/// Registration use case - creates one applicant account per execution.
///
/// Runs as a single unit of work: uniqueness pre-check, hash, insert. Any
/// failure mid-flow rolls the whole transaction back; no insert survives a
/// duplicate username.
pub struct RegisterUseCase<S, A, H>
where
    S: TransactionalStorage,
    A: AccountStore<Tx = S::Tx>,
    H: CredentialHasher,
{
    storage: S,
    accounts: A,
    hasher: H,
}

impl<S, A, H> RegisterUseCase<S, A, H>
where
    S: TransactionalStorage,
    A: AccountStore<Tx = S::Tx>,
    H: CredentialHasher,
{
    pub fn new(storage: S, accounts: A, hasher: H) -> Self {
        Self {
            storage,
            accounts,
            hasher,
        }
    }

    /// Execute the registration use case
    ///
    /// # Arguments
    /// * `data` - Validated and sanitized registration data from the
    ///   presentation boundary
    ///
    /// # Returns
    /// `true` once the account is committed, or a RegistrationError
    #[tracing::instrument(
        name = "RegisterUseCase::execute",
        skip_all,
        fields(username = %data.username)
    )]
    pub async fn execute(&self, data: Registration) -> Result<bool, RegistrationError> {
        let mut tx = self.storage.begin().await?;
        match self.register(&mut tx, data).await {
            Ok(account) => {
                self.storage.commit(tx).await?;
                tracing::info!(account_id = %account.id(), "account registered");
                Ok(true)
            }
            Err(error) => {
                if let Err(rollback_error) = self.storage.rollback(tx).await {
                    tracing::warn!(error = %rollback_error, "rollback after failed registration");
                }
                Err(error)
            }
        }
    }

    async fn register(
        &self,
        tx: &mut S::Tx,
        data: Registration,
    ) -> Result<Account, RegistrationError> {
        let existing = self.accounts.find_by_username(tx, &data.username).await?;
        if existing.is_some() {
            return Err(RegistrationError::DuplicateUsername);
        }

        let password_hash = self.hasher.hash(&data.password).await?;
        let account = self
            .accounts
            .create(tx, data.into_new_account(password_hash), Role::Applicant)
            .await?;

        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{
        registration, FakeCredentialHasher, MockAccountStore, MockStorage,
    };
    use recruitment_core::Username;
    use secrecy::ExposeSecret;

    #[tokio::test]
    async fn test_registration_success() {
        let storage = MockStorage::default();
        let accounts = MockAccountStore::default();
        let use_case = RegisterUseCase::new(
            storage.clone(),
            accounts.clone(),
            FakeCredentialHasher,
        );

        let result = use_case.execute(registration("alice", "Abc12345!")).await;
        assert!(matches!(result, Ok(true)));
        assert_eq!(storage.commits(), 1);
        assert_eq!(storage.rollbacks(), 0);

        let username = Username::try_from("alice".to_string()).unwrap();
        let stored = accounts.get(&username).await.expect("account was stored");
        assert_eq!(stored.role(), Role::Applicant);
        // The stored credential must be a hash, never the plaintext.
        assert_ne!(
            stored.password_hash().as_ref().expose_secret().as_str(),
            "Abc12345!"
        );
    }

    #[tokio::test]
    async fn test_registration_duplicate_username() {
        let storage = MockStorage::default();
        let accounts = MockAccountStore::default();
        let use_case = RegisterUseCase::new(
            storage.clone(),
            accounts.clone(),
            FakeCredentialHasher,
        );

        use_case
            .execute(registration("alice", "Abc12345!"))
            .await
            .unwrap();
        let result = use_case.execute(registration("alice", "Other9876?")).await;

        assert!(matches!(result, Err(RegistrationError::DuplicateUsername)));
        assert_eq!(result.unwrap_err().kind(), ErrorKind::Conflict);
        // The failed attempt rolled back instead of committing.
        assert_eq!(storage.commits(), 1);
        assert_eq!(storage.rollbacks(), 1);
    }

    #[tokio::test]
    async fn test_commit_time_unique_violation_maps_to_conflict() {
        let storage = MockStorage::failing_commit(StorageError::UniqueViolation(
            "account_username_key".to_string(),
        ));
        let use_case =
            RegisterUseCase::new(storage, MockAccountStore::default(), FakeCredentialHasher);

        let result = use_case.execute(registration("alice", "Abc12345!")).await;
        assert!(matches!(result, Err(RegistrationError::DuplicateUsername)));
    }
}

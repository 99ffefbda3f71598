use recruitment_core::{
    Account, AccountStore, AccountStoreError, CredentialError, CredentialHasher, Credentials,
    ErrorKind, PasswordVerdict, StorageError, TransactionalStorage,
};

/// Error types for the login use case.
///
/// `UnknownUsername` and `IncorrectPassword` are distinct kinds internally
/// but render the same caller-facing message, so a failed login does not
/// reveal which of the two was wrong.
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("invalid username or password")]
    UnknownUsername,
    #[error("invalid username or password")]
    IncorrectPassword,
    #[error("credential error: {0}")]
    Credential(#[from] CredentialError),
    #[error("account store error: {0}")]
    AccountStore(#[from] AccountStoreError),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl LoginError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LoginError::UnknownUsername => ErrorKind::NotFound,
            LoginError::IncorrectPassword => ErrorKind::CredentialMismatch,
            LoginError::Credential(e) => e.kind(),
            LoginError::AccountStore(e) => e.kind(),
            LoginError::Storage(e) => e.kind(),
        }
    }
}

/// Login use case - verifies credentials and returns the stored account.
///
/// Read-only, but still runs inside a unit of work so the lookup cannot
/// observe a half-committed registration.
pub struct LoginUseCase<S, A, H>
where
    S: TransactionalStorage,
    A: AccountStore<Tx = S::Tx>,
    H: CredentialHasher,
{
    storage: S,
    accounts: A,
    hasher: H,
}

impl<S, A, H> LoginUseCase<S, A, H>
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

    /// Execute the login use case
    ///
    /// # Arguments
    /// * `credentials` - The caller's username and plaintext password
    ///
    /// # Returns
    /// The stored Account on a verified match, or a LoginError
    #[tracing::instrument(
        name = "LoginUseCase::execute",
        skip_all,
        fields(username = %credentials.username)
    )]
    pub async fn execute(&self, credentials: Credentials) -> Result<Account, LoginError> {
        let mut tx = self.storage.begin().await?;
        match self.login(&mut tx, credentials).await {
            Ok(account) => {
                self.storage.commit(tx).await?;
                Ok(account)
            }
            Err(error) => {
                if let Err(rollback_error) = self.storage.rollback(tx).await {
                    tracing::warn!(error = %rollback_error, "rollback after failed login");
                }
                Err(error)
            }
        }
    }

    async fn login(
        &self,
        tx: &mut S::Tx,
        credentials: Credentials,
    ) -> Result<Account, LoginError> {
        let account = self
            .accounts
            .find_by_username(tx, &credentials.username)
            .await?
            .ok_or(LoginError::UnknownUsername)?;

        match self
            .hasher
            .verify(&credentials.password, account.password_hash())
            .await?
        {
            PasswordVerdict::Match => Ok(account),
            PasswordVerdict::Mismatch => Err(LoginError::IncorrectPassword),
        }
    }
}

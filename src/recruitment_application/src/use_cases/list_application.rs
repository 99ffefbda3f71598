use recruitment_core::{
    AccountId, AccountStore, AccountStoreError, ApplicationSummary, AvailabilityStore,
    AvailabilityStoreError, CompetenceProfileStore, CompetenceProfileStoreError, ErrorKind,
    StorageError, TransactionalStorage,
};

/// Error types for the application listing use case
#[derive(Debug, thiserror::Error)]
pub enum ListApplicationError {
    #[error("that user does not exist")]
    UnknownAccount,
    #[error("account store error: {0}")]
    AccountStore(#[from] AccountStoreError),
    #[error("availability store error: {0}")]
    Availability(#[from] AvailabilityStoreError),
    #[error("competence profile store error: {0}")]
    CompetenceProfile(#[from] CompetenceProfileStoreError),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl ListApplicationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ListApplicationError::UnknownAccount => ErrorKind::NotFound,
            ListApplicationError::AccountStore(e) => e.kind(),
            ListApplicationError::Availability(e) => e.kind(),
            ListApplicationError::CompetenceProfile(e) => e.kind(),
            ListApplicationError::Storage(e) => e.kind(),
        }
    }
}

/// Application review use case - reads back everything one account submitted.
///
/// Read-only; runs in a unit of work so the two child reads observe the same
/// committed state.
pub struct ListApplicationUseCase<S, A, V, C>
where
    S: TransactionalStorage,
    A: AccountStore<Tx = S::Tx>,
    V: AvailabilityStore<Tx = S::Tx>,
    C: CompetenceProfileStore<Tx = S::Tx>,
{
    storage: S,
    accounts: A,
    availability: V,
    competencies: C,
}

impl<S, A, V, C> ListApplicationUseCase<S, A, V, C>
where
    S: TransactionalStorage,
    A: AccountStore<Tx = S::Tx>,
    V: AvailabilityStore<Tx = S::Tx>,
    C: CompetenceProfileStore<Tx = S::Tx>,
{
    pub fn new(storage: S, accounts: A, availability: V, competencies: C) -> Self {
        Self {
            storage,
            accounts,
            availability,
            competencies,
        }
    }

    #[tracing::instrument(
        name = "ListApplicationUseCase::execute",
        skip_all,
        fields(account_id = %account_id)
    )]
    pub async fn execute(
        &self,
        account_id: AccountId,
    ) -> Result<ApplicationSummary, ListApplicationError> {
        let mut tx = self.storage.begin().await?;
        match self.list(&mut tx, account_id).await {
            Ok(summary) => {
                self.storage.commit(tx).await?;
                Ok(summary)
            }
            Err(error) => {
                if let Err(rollback_error) = self.storage.rollback(tx).await {
                    tracing::warn!(error = %rollback_error, "rollback after failed listing");
                }
                Err(error)
            }
        }
    }

    async fn list(
        &self,
        tx: &mut S::Tx,
        account_id: AccountId,
    ) -> Result<ApplicationSummary, ListApplicationError> {
        self.accounts
            .find_by_id(tx, account_id)
            .await?
            .ok_or(ListApplicationError::UnknownAccount)?;

        let availability = self.availability.find_by_account(tx, account_id).await?;
        let competencies = self.competencies.find_by_account(tx, account_id).await?;

        Ok(ApplicationSummary {
            account_id,
            availability,
            competencies,
        })
    }
}

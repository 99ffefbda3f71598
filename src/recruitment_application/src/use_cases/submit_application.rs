use recruitment_core::{
    AccountStore, AccountStoreError, AvailabilityStore, AvailabilityStoreError,
    CompetenceProfileStore, CompetenceProfileStoreError, ErrorKind, Role, StorageError,
    SubmissionRequest, TransactionalStorage,
};

/// Error types for the application submission use case
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("that user does not exist")]
    UnknownAccount,
    #[error("only applicants are allowed to post job applications")]
    NotAnApplicant { asserted: Role },
    #[error("the role in the store and the asserted role do not match")]
    RoleMismatch { asserted: Role, stored: Role },
    #[error("account store error: {0}")]
    AccountStore(#[from] AccountStoreError),
    #[error("availability store error: {0}")]
    Availability(#[from] AvailabilityStoreError),
    #[error("competence profile store error: {0}")]
    CompetenceProfile(#[from] CompetenceProfileStoreError),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl SubmissionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SubmissionError::UnknownAccount => ErrorKind::NotFound,
            SubmissionError::NotAnApplicant { .. } => ErrorKind::Authorization,
            SubmissionError::RoleMismatch { .. } => ErrorKind::Conflict,
            SubmissionError::AccountStore(e) => e.kind(),
            SubmissionError::Availability(e) => e.kind(),
            SubmissionError::CompetenceProfile(e) => e.kind(),
            SubmissionError::Storage(e) => e.kind(),
        }
    }
}

/// Application submission use case - one atomic unit of work per submission.
///
/// The caller's asserted identity is re-checked against the account store
/// before any child insert; the stored role is authoritative. Either every
/// availability window and competence claim is committed, or none are.
pub struct SubmitApplicationUseCase<S, A, V, C>
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

impl<S, A, V, C> SubmitApplicationUseCase<S, A, V, C>
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

    /// Execute the submission use case
    ///
    /// # Arguments
    /// * `request` - The submission: asserted identity plus the availability
    ///   windows and competence claims to persist
    ///
    /// # Returns
    /// `true` once every row is committed, or a SubmissionError
    #[tracing::instrument(
        name = "SubmitApplicationUseCase::execute",
        skip_all,
        fields(account_id = %request.account_id)
    )]
    pub async fn execute(&self, request: SubmissionRequest) -> Result<bool, SubmissionError> {
        let mut tx = self.storage.begin().await?;
        match self.submit(&mut tx, request).await {
            Ok(()) => {
                self.storage.commit(tx).await?;
                tracing::info!("application submitted");
                Ok(true)
            }
            Err(error) => {
                if let Err(rollback_error) = self.storage.rollback(tx).await {
                    tracing::warn!(error = %rollback_error, "rollback after failed submission");
                }
                Err(error)
            }
        }
    }

    async fn submit(
        &self,
        tx: &mut S::Tx,
        request: SubmissionRequest,
    ) -> Result<(), SubmissionError> {
        // Never trust the asserted role alone: re-fetch the account.
        let account = self
            .accounts
            .find_by_id(tx, request.account_id)
            .await?
            .ok_or(SubmissionError::UnknownAccount)?;

        if request.asserted_role != Role::Applicant {
            return Err(SubmissionError::NotAnApplicant {
                asserted: request.asserted_role,
            });
        }
        if account.role() != request.asserted_role {
            return Err(SubmissionError::RoleMismatch {
                asserted: request.asserted_role,
                stored: account.role(),
            });
        }

        self.availability
            .create_all(tx, account.id(), &request.availability)
            .await?;
        self.competencies
            .create_all(tx, account.id(), &request.competencies)
            .await?;

        Ok(())
    }
}

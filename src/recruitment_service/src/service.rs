use sqlx::PgPool;

use recruitment_adapters::{
    Argon2CredentialHasher, InMemoryStorage, MemoryAccountStore, MemoryAvailabilityStore,
    MemoryCompetenceCatalog, MemoryCompetenceProfileStore, PostgresAccountStore,
    PostgresAvailabilityStore, PostgresCompetenceCatalog, PostgresCompetenceProfileStore,
    PostgresStorage,
};
use recruitment_application::{
    ListApplicationError, ListApplicationUseCase, ListCompetencesError, ListCompetencesUseCase,
    LoginError, LoginUseCase, RegisterUseCase, RegistrationError, SubmissionError,
    SubmitApplicationUseCase,
};
use recruitment_core::{
    Account, AccountId, AccountStore, ApplicationSummary, AvailabilityStore, Competence,
    CompetenceCatalog, CompetenceProfileStore, CredentialHasher, Credentials, Registration,
    SubmissionRequest, TransactionalStorage,
};

/// The composed recruitment service: every pipeline wired over one shared
/// storage handle.
///
/// Stores and the hasher are cheap to clone; each use case owns its own
/// copies of the handles it needs.
pub struct RecruitmentService<S, A, V, C, G, H>
where
    S: TransactionalStorage + Clone,
    A: AccountStore<Tx = S::Tx> + Clone,
    V: AvailabilityStore<Tx = S::Tx> + Clone,
    C: CompetenceProfileStore<Tx = S::Tx> + Clone,
    G: CompetenceCatalog<Tx = S::Tx> + Clone,
    H: CredentialHasher + Clone,
{
    register: RegisterUseCase<S, A, H>,
    login: LoginUseCase<S, A, H>,
    submit: SubmitApplicationUseCase<S, A, V, C>,
    list_application: ListApplicationUseCase<S, A, V, C>,
    list_competences: ListCompetencesUseCase<S, G>,
}

impl<S, A, V, C, G, H> RecruitmentService<S, A, V, C, G, H>
where
    S: TransactionalStorage + Clone,
    A: AccountStore<Tx = S::Tx> + Clone,
    V: AvailabilityStore<Tx = S::Tx> + Clone,
    C: CompetenceProfileStore<Tx = S::Tx> + Clone,
    G: CompetenceCatalog<Tx = S::Tx> + Clone,
    H: CredentialHasher + Clone,
{
    pub fn new(storage: S, accounts: A, availability: V, competencies: C, catalog: G, hasher: H) -> Self {
        Self {
            register: RegisterUseCase::new(storage.clone(), accounts.clone(), hasher.clone()),
            login: LoginUseCase::new(storage.clone(), accounts.clone(), hasher),
            submit: SubmitApplicationUseCase::new(
                storage.clone(),
                accounts.clone(),
                availability.clone(),
                competencies.clone(),
            ),
            list_application: ListApplicationUseCase::new(
                storage.clone(),
                accounts,
                availability,
                competencies,
            ),
            list_competences: ListCompetencesUseCase::new(storage, catalog),
        }
    }

    /// Registers a new applicant account.
    pub async fn handle_registration(&self, data: Registration) -> Result<bool, RegistrationError> {
        self.register.execute(data).await
    }

    /// Verifies credentials and returns the stored account.
    pub async fn handle_login(&self, credentials: Credentials) -> Result<Account, LoginError> {
        self.login.execute(credentials).await
    }

    /// Persists one job application atomically.
    pub async fn handle_application(
        &self,
        request: SubmissionRequest,
    ) -> Result<bool, SubmissionError> {
        self.submit.execute(request).await
    }

    /// Reads back everything one account has submitted.
    pub async fn list_application(
        &self,
        account_id: AccountId,
    ) -> Result<ApplicationSummary, ListApplicationError> {
        self.list_application.execute(account_id).await
    }

    /// Lists the competence catalog applicants claim against.
    pub async fn list_competences(&self) -> Result<Vec<Competence>, ListCompetencesError> {
        self.list_competences.execute().await
    }
}

/// The production wiring: PostgreSQL adapters plus the argon2 hasher.
pub type PostgresRecruitmentService = RecruitmentService<
    PostgresStorage,
    PostgresAccountStore,
    PostgresAvailabilityStore,
    PostgresCompetenceProfileStore,
    PostgresCompetenceCatalog,
    Argon2CredentialHasher,
>;

impl PostgresRecruitmentService {
    /// Wires the relational adapters around the shared pool handle.
    pub fn postgres(pool: PgPool) -> Self {
        RecruitmentService::new(
            PostgresStorage::new(pool),
            PostgresAccountStore,
            PostgresAvailabilityStore,
            PostgresCompetenceProfileStore,
            PostgresCompetenceCatalog,
            Argon2CredentialHasher,
        )
    }
}

/// The in-memory wiring used by tests and local runs without a database.
pub type InMemoryRecruitmentService = RecruitmentService<
    InMemoryStorage,
    MemoryAccountStore,
    MemoryAvailabilityStore,
    MemoryCompetenceProfileStore,
    MemoryCompetenceCatalog,
    Argon2CredentialHasher,
>;

impl InMemoryRecruitmentService {
    pub fn in_memory() -> Self {
        Self::with_storage(InMemoryStorage::with_default_catalog())
    }

    /// Wires the in-memory adapters around an existing engine, so a test can
    /// seed state through the ports and then drive the service against it.
    pub fn with_storage(storage: InMemoryStorage) -> Self {
        RecruitmentService::new(
            storage,
            MemoryAccountStore,
            MemoryAvailabilityStore,
            MemoryCompetenceProfileStore,
            MemoryCompetenceCatalog,
            Argon2CredentialHasher,
        )
    }
}

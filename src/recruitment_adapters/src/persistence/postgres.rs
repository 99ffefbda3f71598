//! PostgreSQL implementations of the storage ports.
//!
//! All mutating operations run on a caller-supplied transaction; the pool is
//! the single process-wide handle held by [`PostgresStorage`]. Dropping an
//! uncommitted transaction rolls it back, so a caller disconnecting
//! mid-submission can never leave a partial application behind.

use async_trait::async_trait;
use secrecy::ExposeSecret;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres, Row, Transaction};

use recruitment_core::{
    Account, AccountId, AccountStore, AccountStoreError, AvailabilityStore,
    AvailabilityStoreError, AvailabilityWindow, Competence, CompetenceCatalog,
    CompetenceCatalogError, CompetenceClaim, CompetenceProfileStore, CompetenceProfileStoreError,
    HashedPassword, NewAccount, Role, StorageError, TransactionalStorage, Username,
};

type PgTx = Transaction<'static, Postgres>;

/// Runs the embedded schema migrations against the given pool.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// The unit-of-work boundary over the shared connection pool.
#[derive(Clone)]
pub struct PostgresStorage {
    pool: PgPool,
}

impl PostgresStorage {
    pub fn new(pool: PgPool) -> Self {
        PostgresStorage { pool }
    }
}

#[async_trait]
impl TransactionalStorage for PostgresStorage {
    type Tx = PgTx;

    #[tracing::instrument(name = "Beginning transaction", skip_all)]
    async fn begin(&self) -> Result<PgTx, StorageError> {
        self.pool.begin().await.map_err(into_storage_error)
    }

    #[tracing::instrument(name = "Committing transaction", skip_all)]
    async fn commit(&self, tx: PgTx) -> Result<(), StorageError> {
        tx.commit().await.map_err(into_storage_error)
    }

    #[tracing::instrument(name = "Rolling back transaction", skip_all)]
    async fn rollback(&self, tx: PgTx) -> Result<(), StorageError> {
        tx.rollback().await.map_err(into_storage_error)
    }
}

fn into_storage_error(error: sqlx::Error) -> StorageError {
    if let Some(db_error) = error.as_database_error() {
        if db_error.is_unique_violation() {
            let constraint = db_error.constraint().unwrap_or("unknown").to_string();
            return StorageError::UniqueViolation(constraint);
        }
    }
    StorageError::Unavailable(error.to_string())
}

/// Account persistence over the `account` table.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresAccountStore;

fn account_error<E: std::fmt::Display>(error: E) -> AccountStoreError {
    AccountStoreError::UnexpectedError(error.to_string())
}

fn account_from_row(row: &PgRow) -> Result<Account, AccountStoreError> {
    let id: i32 = row.try_get("person_id").map_err(account_error)?;
    let username: String = row.try_get("username").map_err(account_error)?;
    let password_hash: String = row.try_get("password_hash").map_err(account_error)?;
    let role_id: i32 = row.try_get("role_id").map_err(account_error)?;

    Ok(Account::new(
        AccountId::new(id),
        row.try_get("first_name").map_err(account_error)?,
        row.try_get("last_name").map_err(account_error)?,
        row.try_get("email").map_err(account_error)?,
        row.try_get("personal_number").map_err(account_error)?,
        Username::try_from(username).map_err(account_error)?,
        HashedPassword::from(password_hash),
        Role::from_id(role_id).map_err(account_error)?,
    ))
}

const ACCOUNT_COLUMNS: &str =
    "person_id, first_name, last_name, email, personal_number, username, password_hash, role_id";

#[async_trait]
impl AccountStore for PostgresAccountStore {
    type Tx = PgTx;

    #[tracing::instrument(name = "Adding account to PostgreSQL", skip_all)]
    async fn create(
        &self,
        tx: &mut PgTx,
        account: NewAccount,
        role: Role,
    ) -> Result<Account, AccountStoreError> {
        let row = sqlx::query(
            r#"
                INSERT INTO account
                    (first_name, last_name, email, personal_number, username, password_hash, role_id)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING person_id
            "#,
        )
        .bind(account.first_name.clone())
        .bind(account.last_name.clone())
        .bind(account.email.clone())
        .bind(account.personal_number.clone())
        .bind(account.username.as_str().to_string())
        .bind(account.password_hash.as_ref().expose_secret().clone())
        .bind(role.id())
        .fetch_one(&mut **tx)
        .await
        .map_err(|e| {
            if let Some(db_error) = e.as_database_error() {
                if db_error.is_unique_violation() {
                    return AccountStoreError::DuplicateUsername;
                }
            }
            account_error(e)
        })?;

        let id: i32 = row.try_get("person_id").map_err(account_error)?;
        Ok(Account::new(
            AccountId::new(id),
            account.first_name,
            account.last_name,
            account.email,
            account.personal_number,
            account.username,
            account.password_hash,
            role,
        ))
    }

    #[tracing::instrument(name = "Retrieving account by username", skip_all)]
    async fn find_by_username(
        &self,
        tx: &mut PgTx,
        username: &Username,
    ) -> Result<Option<Account>, AccountStoreError> {
        let row = sqlx::query(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM account WHERE username = $1"
        ))
        .bind(username.as_str().to_string())
        .fetch_optional(&mut **tx)
        .await
        .map_err(account_error)?;

        row.map(|row| account_from_row(&row)).transpose()
    }

    #[tracing::instrument(name = "Retrieving account by id", skip_all)]
    async fn find_by_id(
        &self,
        tx: &mut PgTx,
        id: AccountId,
    ) -> Result<Option<Account>, AccountStoreError> {
        let row = sqlx::query(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM account WHERE person_id = $1"
        ))
        .bind(id.value())
        .fetch_optional(&mut **tx)
        .await
        .map_err(account_error)?;

        row.map(|row| account_from_row(&row)).transpose()
    }
}

/// Availability persistence over the `availability` table.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresAvailabilityStore;

fn availability_error<E: std::fmt::Display>(error: E) -> AvailabilityStoreError {
    AvailabilityStoreError::UnexpectedError(error.to_string())
}

#[async_trait]
impl AvailabilityStore for PostgresAvailabilityStore {
    type Tx = PgTx;

    #[tracing::instrument(name = "Bulk inserting availability", skip_all, fields(rows = windows.len()))]
    async fn create_all(
        &self,
        tx: &mut PgTx,
        account: AccountId,
        windows: &[AvailabilityWindow],
    ) -> Result<(), AvailabilityStoreError> {
        for window in windows {
            sqlx::query(
                "INSERT INTO availability (person_id, from_date, to_date) VALUES ($1, $2, $3)",
            )
            .bind(account.value())
            .bind(window.from_date)
            .bind(window.to_date)
            .execute(&mut **tx)
            .await
            .map_err(availability_error)?;
        }
        Ok(())
    }

    #[tracing::instrument(name = "Reading availability by account", skip_all)]
    async fn find_by_account(
        &self,
        tx: &mut PgTx,
        account: AccountId,
    ) -> Result<Vec<AvailabilityWindow>, AvailabilityStoreError> {
        let rows = sqlx::query(
            "SELECT from_date, to_date FROM availability WHERE person_id = $1 ORDER BY availability_id",
        )
        .bind(account.value())
        .fetch_all(&mut **tx)
        .await
        .map_err(availability_error)?;

        let mut windows = Vec::with_capacity(rows.len());
        for row in rows {
            windows.push(AvailabilityWindow {
                from_date: row.try_get("from_date").map_err(availability_error)?,
                to_date: row.try_get("to_date").map_err(availability_error)?,
            });
        }
        Ok(windows)
    }
}

/// Competence claim persistence over the `competence_profile` table.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresCompetenceProfileStore;

fn competence_error<E: std::fmt::Display>(error: E) -> CompetenceProfileStoreError {
    CompetenceProfileStoreError::UnexpectedError(error.to_string())
}

#[async_trait]
impl CompetenceProfileStore for PostgresCompetenceProfileStore {
    type Tx = PgTx;

    #[tracing::instrument(name = "Bulk inserting competence claims", skip_all, fields(rows = claims.len()))]
    async fn create_all(
        &self,
        tx: &mut PgTx,
        account: AccountId,
        claims: &[CompetenceClaim],
    ) -> Result<(), CompetenceProfileStoreError> {
        for claim in claims {
            sqlx::query(
                r#"
                    INSERT INTO competence_profile (person_id, competence_id, years_of_experience)
                    VALUES ($1, $2, $3)
                "#,
            )
            .bind(account.value())
            .bind(claim.competence_id)
            .bind(claim.years_of_experience)
            .execute(&mut **tx)
            .await
            .map_err(competence_error)?;
        }
        Ok(())
    }

    #[tracing::instrument(name = "Reading competence claims by account", skip_all)]
    async fn find_by_account(
        &self,
        tx: &mut PgTx,
        account: AccountId,
    ) -> Result<Vec<CompetenceClaim>, CompetenceProfileStoreError> {
        let rows = sqlx::query(
            r#"
                SELECT competence_id, years_of_experience
                FROM competence_profile
                WHERE person_id = $1
                ORDER BY competence_profile_id
            "#,
        )
        .bind(account.value())
        .fetch_all(&mut **tx)
        .await
        .map_err(competence_error)?;

        let mut claims = Vec::with_capacity(rows.len());
        for row in rows {
            claims.push(CompetenceClaim {
                competence_id: row.try_get("competence_id").map_err(competence_error)?,
                years_of_experience: row
                    .try_get("years_of_experience")
                    .map_err(competence_error)?,
            });
        }
        Ok(claims)
    }
}

/// Read access to the seeded `competence` catalog table.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresCompetenceCatalog;

#[async_trait]
impl CompetenceCatalog for PostgresCompetenceCatalog {
    type Tx = PgTx;

    #[tracing::instrument(name = "Reading competence catalog", skip_all)]
    async fn get_all(&self, tx: &mut PgTx) -> Result<Vec<Competence>, CompetenceCatalogError> {
        let rows = sqlx::query("SELECT competence_id, name FROM competence ORDER BY competence_id")
            .fetch_all(&mut **tx)
            .await
            .map_err(|e| CompetenceCatalogError::UnexpectedError(e.to_string()))?;

        let mut competences = Vec::with_capacity(rows.len());
        for row in rows {
            competences.push(Competence {
                id: row
                    .try_get("competence_id")
                    .map_err(|e| CompetenceCatalogError::UnexpectedError(e.to_string()))?,
                name: row
                    .try_get("name")
                    .map_err(|e| CompetenceCatalogError::UnexpectedError(e.to_string()))?,
            });
        }
        Ok(competences)
    }
}

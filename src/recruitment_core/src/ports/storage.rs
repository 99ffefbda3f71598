use async_trait::async_trait;
use thiserror::Error;

use crate::domain::account::{Account, AccountId, NewAccount};
use crate::domain::application::{AvailabilityWindow, Competence, CompetenceClaim};
use crate::domain::role::Role;
use crate::domain::username::Username;
use crate::error::ErrorKind;

/// Port for the relational storage capability: one unit of work at a time.
///
/// The implementation holds the single process-wide connection handle,
/// injected once at construction. `Tx` is the unit-of-work value threaded
/// through every store call; dropping it without commit must roll back.
#[async_trait]
pub trait TransactionalStorage: Send + Sync {
    type Tx: Send;

    async fn begin(&self) -> Result<Self::Tx, StorageError>;

    /// Makes every write staged in `tx` visible atomically. A unique
    /// constraint deferred to commit surfaces here as `UniqueViolation`.
    async fn commit(&self, tx: Self::Tx) -> Result<(), StorageError>;

    async fn rollback(&self, tx: Self::Tx) -> Result<(), StorageError>;
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("unique constraint violated at commit: {0}")]
    UniqueViolation(String),
    #[error("storage failure: {0}")]
    Unavailable(String),
}

impl StorageError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StorageError::UniqueViolation(_) => ErrorKind::Conflict,
            StorageError::Unavailable(_) => ErrorKind::Persistence,
        }
    }
}

// AccountStore port trait and errors
#[derive(Debug, Error)]
pub enum AccountStoreError {
    #[error("that username already exists")]
    DuplicateUsername,
    #[error("unexpected error {0}")]
    UnexpectedError(String),
}

impl AccountStoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountStoreError::DuplicateUsername => ErrorKind::Conflict,
            AccountStoreError::UnexpectedError(_) => ErrorKind::Persistence,
        }
    }
}

impl PartialEq for AccountStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::DuplicateUsername, Self::DuplicateUsername) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// Persistence operations for account identity records.
#[async_trait]
pub trait AccountStore: Send + Sync {
    type Tx: Send;

    /// Inserts one account row inside the caller's unit of work.
    ///
    /// A duplicate login name must surface as `DuplicateUsername`, detected
    /// from the storage unique constraint rather than a pre-check alone.
    async fn create(
        &self,
        tx: &mut Self::Tx,
        account: NewAccount,
        role: Role,
    ) -> Result<Account, AccountStoreError>;

    /// Absent is a valid, non-error outcome.
    async fn find_by_username(
        &self,
        tx: &mut Self::Tx,
        username: &Username,
    ) -> Result<Option<Account>, AccountStoreError>;

    /// Absent is a valid, non-error outcome.
    async fn find_by_id(
        &self,
        tx: &mut Self::Tx,
        id: AccountId,
    ) -> Result<Option<Account>, AccountStoreError>;
}

// AvailabilityStore port trait and errors
#[derive(Debug, Error)]
pub enum AvailabilityStoreError {
    #[error("unexpected error {0}")]
    UnexpectedError(String),
}

impl AvailabilityStoreError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Persistence
    }
}

/// Persistence operations for the availability rows of an application.
#[async_trait]
pub trait AvailabilityStore: Send + Sync {
    type Tx: Send;

    /// Bulk-inserts all windows as part of the caller's unit of work. Never
    /// commits independently and performs no partial cleanup; the caller
    /// rolls back on failure.
    async fn create_all(
        &self,
        tx: &mut Self::Tx,
        account: AccountId,
        windows: &[AvailabilityWindow],
    ) -> Result<(), AvailabilityStoreError>;

    async fn find_by_account(
        &self,
        tx: &mut Self::Tx,
        account: AccountId,
    ) -> Result<Vec<AvailabilityWindow>, AvailabilityStoreError>;
}

// CompetenceProfileStore port trait and errors
#[derive(Debug, Error)]
pub enum CompetenceProfileStoreError {
    #[error("unexpected error {0}")]
    UnexpectedError(String),
}

impl CompetenceProfileStoreError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Persistence
    }
}

/// Persistence operations for the competence claims of an application.
#[async_trait]
pub trait CompetenceProfileStore: Send + Sync {
    type Tx: Send;

    /// Same contract as [`AvailabilityStore::create_all`].
    async fn create_all(
        &self,
        tx: &mut Self::Tx,
        account: AccountId,
        claims: &[CompetenceClaim],
    ) -> Result<(), CompetenceProfileStoreError>;

    async fn find_by_account(
        &self,
        tx: &mut Self::Tx,
        account: AccountId,
    ) -> Result<Vec<CompetenceClaim>, CompetenceProfileStoreError>;
}

// CompetenceCatalog port trait and errors
#[derive(Debug, Error)]
pub enum CompetenceCatalogError {
    #[error("unexpected error {0}")]
    UnexpectedError(String),
}

impl CompetenceCatalogError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Persistence
    }
}

/// Read access to the competence catalog applicants claim against.
#[async_trait]
pub trait CompetenceCatalog: Send + Sync {
    type Tx: Send;

    async fn get_all(&self, tx: &mut Self::Tx) -> Result<Vec<Competence>, CompetenceCatalogError>;
}

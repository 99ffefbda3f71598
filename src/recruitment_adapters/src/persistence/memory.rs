//! In-memory implementations of the storage ports.
//!
//! Writes stage inside the [`MemoryTx`] unit of work and become visible
//! atomically on commit, under a single write lock. The username unique
//! constraint is re-checked at commit time, so the check-then-insert race is
//! closed the same way the relational backend's unique index closes it.
//! Reads observe committed state plus this transaction's own staged rows.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use recruitment_core::{
    Account, AccountId, AccountStore, AccountStoreError, AvailabilityStore,
    AvailabilityStoreError, AvailabilityWindow, Competence, CompetenceCatalog,
    CompetenceCatalogError, CompetenceClaim, CompetenceProfileStore, CompetenceProfileStoreError,
    NewAccount, Role, StorageError, TransactionalStorage, Username,
};

#[derive(Debug, Default)]
struct MemoryState {
    next_person_id: i32,
    accounts: HashMap<i32, Account>,
    usernames: HashMap<String, i32>,
    availability: Vec<(i32, AvailabilityWindow)>,
    competence_profile: Vec<(i32, CompetenceClaim)>,
    competences: Vec<Competence>,
}

/// One in-flight unit of work against the in-memory engine.
pub struct MemoryTx {
    state: Arc<RwLock<MemoryState>>,
    staged: StagedWrites,
}

#[derive(Default)]
struct StagedWrites {
    accounts: Vec<Account>,
    availability: Vec<(i32, AvailabilityWindow)>,
    competence_profile: Vec<(i32, CompetenceClaim)>,
}

/// In-memory storage engine, used by the integration tests and as a local
/// stand-in for the relational backend.
#[derive(Clone, Default)]
pub struct InMemoryStorage {
    state: Arc<RwLock<MemoryState>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// An engine whose competence catalog matches the seed migration of the
    /// relational backend.
    pub fn with_default_catalog() -> Self {
        let state = MemoryState {
            competences: vec![
                Competence {
                    id: 1,
                    name: "ticket sales".to_string(),
                },
                Competence {
                    id: 2,
                    name: "lotteries".to_string(),
                },
                Competence {
                    id: 3,
                    name: "roller coaster operation".to_string(),
                },
            ],
            ..MemoryState::default()
        };
        InMemoryStorage {
            state: Arc::new(RwLock::new(state)),
        }
    }
}

#[async_trait]
impl TransactionalStorage for InMemoryStorage {
    type Tx = MemoryTx;

    async fn begin(&self) -> Result<MemoryTx, StorageError> {
        Ok(MemoryTx {
            state: Arc::clone(&self.state),
            staged: StagedWrites::default(),
        })
    }

    async fn commit(&self, tx: MemoryTx) -> Result<(), StorageError> {
        let mut state = self.state.write().await;
        // The unique constraint is authoritative here, not the service-level
        // pre-check: a row committed since this transaction began fails it.
        for account in &tx.staged.accounts {
            if state.usernames.contains_key(account.username().as_str()) {
                return Err(StorageError::UniqueViolation(format!(
                    "account_username_key ({})",
                    account.username()
                )));
            }
        }
        for account in tx.staged.accounts {
            state
                .usernames
                .insert(account.username().as_str().to_string(), account.id().value());
            state.accounts.insert(account.id().value(), account);
        }
        state.availability.extend(tx.staged.availability);
        state.competence_profile.extend(tx.staged.competence_profile);
        Ok(())
    }

    async fn rollback(&self, tx: MemoryTx) -> Result<(), StorageError> {
        // Staged writes die with the transaction.
        drop(tx);
        Ok(())
    }
}

/// Account persistence against [`InMemoryStorage`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryAccountStore;

#[async_trait]
impl AccountStore for MemoryAccountStore {
    type Tx = MemoryTx;

    async fn create(
        &self,
        tx: &mut MemoryTx,
        account: NewAccount,
        role: Role,
    ) -> Result<Account, AccountStoreError> {
        let duplicate_committed = {
            let state = tx.state.read().await;
            state.usernames.contains_key(account.username.as_str())
        };
        let duplicate_staged = tx
            .staged
            .accounts
            .iter()
            .any(|staged| staged.username() == &account.username);
        if duplicate_committed || duplicate_staged {
            return Err(AccountStoreError::DuplicateUsername);
        }

        // Ids come from a sequence that, like its relational counterpart,
        // does not roll back with the transaction.
        let id = {
            let mut state = tx.state.write().await;
            state.next_person_id += 1;
            state.next_person_id
        };

        let created = Account::new(
            AccountId::new(id),
            account.first_name,
            account.last_name,
            account.email,
            account.personal_number,
            account.username,
            account.password_hash,
            role,
        );
        tx.staged.accounts.push(created.clone());
        Ok(created)
    }

    async fn find_by_username(
        &self,
        tx: &mut MemoryTx,
        username: &Username,
    ) -> Result<Option<Account>, AccountStoreError> {
        if let Some(staged) = tx
            .staged
            .accounts
            .iter()
            .find(|account| account.username() == username)
        {
            return Ok(Some(staged.clone()));
        }
        let state = tx.state.read().await;
        Ok(state
            .usernames
            .get(username.as_str())
            .and_then(|id| state.accounts.get(id))
            .cloned())
    }

    async fn find_by_id(
        &self,
        tx: &mut MemoryTx,
        id: AccountId,
    ) -> Result<Option<Account>, AccountStoreError> {
        if let Some(staged) = tx
            .staged
            .accounts
            .iter()
            .find(|account| account.id() == id)
        {
            return Ok(Some(staged.clone()));
        }
        let state = tx.state.read().await;
        Ok(state.accounts.get(&id.value()).cloned())
    }
}

fn person_exists(tx: &MemoryTx, state: &MemoryState, account: AccountId) -> bool {
    tx.staged.accounts.iter().any(|staged| staged.id() == account)
        || state.accounts.contains_key(&account.value())
}

/// Availability persistence against [`InMemoryStorage`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryAvailabilityStore;

#[async_trait]
impl AvailabilityStore for MemoryAvailabilityStore {
    type Tx = MemoryTx;

    async fn create_all(
        &self,
        tx: &mut MemoryTx,
        account: AccountId,
        windows: &[AvailabilityWindow],
    ) -> Result<(), AvailabilityStoreError> {
        {
            let state = tx.state.read().await;
            if !person_exists(tx, &state, account) {
                return Err(AvailabilityStoreError::UnexpectedError(format!(
                    "foreign key violation: person {account} does not exist"
                )));
            }
        }
        tx.staged
            .availability
            .extend(windows.iter().map(|window| (account.value(), *window)));
        Ok(())
    }

    async fn find_by_account(
        &self,
        tx: &mut MemoryTx,
        account: AccountId,
    ) -> Result<Vec<AvailabilityWindow>, AvailabilityStoreError> {
        let state = tx.state.read().await;
        let mut windows: Vec<AvailabilityWindow> = state
            .availability
            .iter()
            .filter(|(owner, _)| *owner == account.value())
            .map(|(_, window)| *window)
            .collect();
        windows.extend(
            tx.staged
                .availability
                .iter()
                .filter(|(owner, _)| *owner == account.value())
                .map(|(_, window)| *window),
        );
        Ok(windows)
    }
}

/// Competence claim persistence against [`InMemoryStorage`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryCompetenceProfileStore;

#[async_trait]
impl CompetenceProfileStore for MemoryCompetenceProfileStore {
    type Tx = MemoryTx;

    async fn create_all(
        &self,
        tx: &mut MemoryTx,
        account: AccountId,
        claims: &[CompetenceClaim],
    ) -> Result<(), CompetenceProfileStoreError> {
        {
            let state = tx.state.read().await;
            if !person_exists(tx, &state, account) {
                return Err(CompetenceProfileStoreError::UnexpectedError(format!(
                    "foreign key violation: person {account} does not exist"
                )));
            }
            for claim in claims {
                if !state
                    .competences
                    .iter()
                    .any(|competence| competence.id == claim.competence_id)
                {
                    return Err(CompetenceProfileStoreError::UnexpectedError(format!(
                        "foreign key violation: competence {} does not exist",
                        claim.competence_id
                    )));
                }
            }
        }
        tx.staged
            .competence_profile
            .extend(claims.iter().map(|claim| (account.value(), *claim)));
        Ok(())
    }

    async fn find_by_account(
        &self,
        tx: &mut MemoryTx,
        account: AccountId,
    ) -> Result<Vec<CompetenceClaim>, CompetenceProfileStoreError> {
        let state = tx.state.read().await;
        let mut claims: Vec<CompetenceClaim> = state
            .competence_profile
            .iter()
            .filter(|(owner, _)| *owner == account.value())
            .map(|(_, claim)| *claim)
            .collect();
        claims.extend(
            tx.staged
                .competence_profile
                .iter()
                .filter(|(owner, _)| *owner == account.value())
                .map(|(_, claim)| *claim),
        );
        Ok(claims)
    }
}

/// Catalog reads against [`InMemoryStorage`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryCompetenceCatalog;

#[async_trait]
impl CompetenceCatalog for MemoryCompetenceCatalog {
    type Tx = MemoryTx;

    async fn get_all(&self, tx: &mut MemoryTx) -> Result<Vec<Competence>, CompetenceCatalogError> {
        let state = tx.state.read().await;
        Ok(state.competences.clone())
    }
}

//! Mock ports shared by the use case tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;

use recruitment_core::{
    Account, AccountId, AccountStore, AccountStoreError, AvailabilityStore,
    AvailabilityStoreError, AvailabilityWindow, Competence, CompetenceCatalog,
    CompetenceCatalogError, CompetenceClaim, CompetenceProfileStore, CompetenceProfileStoreError,
    CredentialError, CredentialHasher, Credentials, HashedPassword, NewAccount, Password,
    PasswordVerdict, Registration, Role, StorageError, TransactionalStorage, Username,
};

/// Storage mock with a unit transaction context; counts commits and
/// rollbacks so tests can assert the unit-of-work discipline.
#[derive(Clone, Default)]
pub(crate) struct MockStorage {
    commits: Arc<AtomicUsize>,
    rollbacks: Arc<AtomicUsize>,
    fail_commit: Arc<Mutex<Option<StorageError>>>,
}

impl MockStorage {
    pub(crate) fn failing_commit(error: StorageError) -> Self {
        let storage = MockStorage::default();
        *storage.fail_commit.lock().unwrap() = Some(error);
        storage
    }

    pub(crate) fn commits(&self) -> usize {
        self.commits.load(Ordering::SeqCst)
    }

    pub(crate) fn rollbacks(&self) -> usize {
        self.rollbacks.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TransactionalStorage for MockStorage {
    type Tx = ();

    async fn begin(&self) -> Result<(), StorageError> {
        Ok(())
    }

    async fn commit(&self, _tx: ()) -> Result<(), StorageError> {
        if let Some(error) = self.fail_commit.lock().unwrap().take() {
            return Err(error);
        }
        self.commits.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn rollback(&self, _tx: ()) -> Result<(), StorageError> {
        self.rollbacks.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[derive(Clone, Default)]
pub(crate) struct MockAccountStore {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
    next_id: Arc<AtomicI32>,
}

impl MockAccountStore {
    pub(crate) async fn get(&self, username: &Username) -> Option<Account> {
        self.accounts.read().await.get(username.as_str()).cloned()
    }

    /// Seeds an account directly, bypassing the registration pipeline.
    pub(crate) async fn seed(&self, account: NewAccount, role: Role) -> Account {
        let id = AccountId::new(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        let stored = Account::new(
            id,
            account.first_name,
            account.last_name,
            account.email,
            account.personal_number,
            account.username.clone(),
            account.password_hash,
            role,
        );
        self.accounts
            .write()
            .await
            .insert(account.username.as_str().to_string(), stored.clone());
        stored
    }
}

#[async_trait]
impl AccountStore for MockAccountStore {
    type Tx = ();

    async fn create(
        &self,
        _tx: &mut (),
        account: NewAccount,
        role: Role,
    ) -> Result<Account, AccountStoreError> {
        if self
            .accounts
            .read()
            .await
            .contains_key(account.username.as_str())
        {
            return Err(AccountStoreError::DuplicateUsername);
        }
        Ok(self.seed(account, role).await)
    }

    async fn find_by_username(
        &self,
        _tx: &mut (),
        username: &Username,
    ) -> Result<Option<Account>, AccountStoreError> {
        Ok(self.accounts.read().await.get(username.as_str()).cloned())
    }

    async fn find_by_id(
        &self,
        _tx: &mut (),
        id: AccountId,
    ) -> Result<Option<Account>, AccountStoreError> {
        Ok(self
            .accounts
            .read()
            .await
            .values()
            .find(|account| account.id() == id)
            .cloned())
    }
}

#[derive(Clone, Default)]
pub(crate) struct MockAvailabilityStore {
    rows: Arc<RwLock<Vec<(AccountId, AvailabilityWindow)>>>,
}

impl MockAvailabilityStore {
    pub(crate) async fn rows(&self) -> Vec<(AccountId, AvailabilityWindow)> {
        self.rows.read().await.clone()
    }
}

#[async_trait]
impl AvailabilityStore for MockAvailabilityStore {
    type Tx = ();

    async fn create_all(
        &self,
        _tx: &mut (),
        account: AccountId,
        windows: &[AvailabilityWindow],
    ) -> Result<(), AvailabilityStoreError> {
        let mut rows = self.rows.write().await;
        rows.extend(windows.iter().map(|window| (account, *window)));
        Ok(())
    }

    async fn find_by_account(
        &self,
        _tx: &mut (),
        account: AccountId,
    ) -> Result<Vec<AvailabilityWindow>, AvailabilityStoreError> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|(owner, _)| *owner == account)
            .map(|(_, window)| *window)
            .collect())
    }
}

#[derive(Clone, Default)]
pub(crate) struct MockCompetenceProfileStore {
    rows: Arc<RwLock<Vec<(AccountId, CompetenceClaim)>>>,
    fail: bool,
}

impl MockCompetenceProfileStore {
    /// A store whose bulk insert always fails, for rollback tests.
    pub(crate) fn failing() -> Self {
        MockCompetenceProfileStore {
            rows: Arc::default(),
            fail: true,
        }
    }

    pub(crate) async fn rows(&self) -> Vec<(AccountId, CompetenceClaim)> {
        self.rows.read().await.clone()
    }
}

#[async_trait]
impl CompetenceProfileStore for MockCompetenceProfileStore {
    type Tx = ();

    async fn create_all(
        &self,
        _tx: &mut (),
        account: AccountId,
        claims: &[CompetenceClaim],
    ) -> Result<(), CompetenceProfileStoreError> {
        if self.fail {
            return Err(CompetenceProfileStoreError::UnexpectedError(
                "insert failed".to_string(),
            ));
        }
        let mut rows = self.rows.write().await;
        rows.extend(claims.iter().map(|claim| (account, *claim)));
        Ok(())
    }

    async fn find_by_account(
        &self,
        _tx: &mut (),
        account: AccountId,
    ) -> Result<Vec<CompetenceClaim>, CompetenceProfileStoreError> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|(owner, _)| *owner == account)
            .map(|(_, claim)| *claim)
            .collect())
    }
}

#[derive(Clone, Default)]
pub(crate) struct MockCompetenceCatalog {
    items: Vec<Competence>,
}

impl MockCompetenceCatalog {
    pub(crate) fn with_items(items: Vec<Competence>) -> Self {
        MockCompetenceCatalog { items }
    }
}

#[async_trait]
impl CompetenceCatalog for MockCompetenceCatalog {
    type Tx = ();

    async fn get_all(&self, _tx: &mut ()) -> Result<Vec<Competence>, CompetenceCatalogError> {
        Ok(self.items.clone())
    }
}

/// Deterministic stand-in for the argon2 hasher; keeps the plaintext
/// recognizable so tests can verify it is never stored as-is.
#[derive(Clone, Copy)]
pub(crate) struct FakeCredentialHasher;

const FAKE_HASH_PREFIX: &str = "fakehash::";

#[async_trait]
impl CredentialHasher for FakeCredentialHasher {
    async fn hash(&self, plaintext: &Password) -> Result<HashedPassword, CredentialError> {
        Ok(HashedPassword::from(format!(
            "{FAKE_HASH_PREFIX}{}",
            plaintext.as_ref().expose_secret()
        )))
    }

    async fn verify(
        &self,
        plaintext: &Password,
        hash: &HashedPassword,
    ) -> Result<PasswordVerdict, CredentialError> {
        let expected = format!("{FAKE_HASH_PREFIX}{}", plaintext.as_ref().expose_secret());
        if hash.as_ref().expose_secret() == &expected {
            Ok(PasswordVerdict::Match)
        } else {
            Ok(PasswordVerdict::Mismatch)
        }
    }
}

pub(crate) fn registration(username: &str, password: &str) -> Registration {
    Registration {
        first_name: "Test".to_string(),
        last_name: "Person".to_string(),
        email: format!("{username}@example.com"),
        personal_number: "19900101-1234".to_string(),
        username: Username::try_from(username.to_string()).unwrap(),
        password: Password::try_from(Secret::from(password.to_string())).unwrap(),
    }
}

pub(crate) fn credentials(username: &str, password: &str) -> Credentials {
    Credentials {
        username: Username::try_from(username.to_string()).unwrap(),
        password: Password::try_from(Secret::from(password.to_string())).unwrap(),
    }
}

pub(crate) async fn seeded_account(
    accounts: &MockAccountStore,
    hasher: &FakeCredentialHasher,
    username: &str,
    password: &str,
    role: Role,
) -> Account {
    let data = registration(username, password);
    let hash = hasher.hash(&data.password).await.unwrap();
    accounts.seed(data.into_new_account(hash), role).await
}

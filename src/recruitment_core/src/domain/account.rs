use serde::{Deserialize, Serialize};

use crate::domain::password::{HashedPassword, Password};
use crate::domain::role::Role;
use crate::domain::username::Username;

/// Store-assigned surrogate id of an account. Immutable once assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AccountId(i32);

impl AccountId {
    pub const fn new(id: i32) -> Self {
        AccountId(id)
    }

    pub const fn value(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// An identity record as persisted by the account store.
///
/// Created once via registration, read by login and submission authorization,
/// never updated or deleted by this core.
#[derive(Debug, Clone)]
pub struct Account {
    id: AccountId,
    first_name: String,
    last_name: String,
    email: String,
    personal_number: String,
    username: Username,
    password_hash: HashedPassword,
    role: Role,
}

impl Account {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: AccountId,
        first_name: String,
        last_name: String,
        email: String,
        personal_number: String,
        username: Username,
        password_hash: HashedPassword,
        role: Role,
    ) -> Self {
        Account {
            id,
            first_name,
            last_name,
            email,
            personal_number,
            username,
            password_hash,
            role,
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn personal_number(&self) -> &str {
        &self.personal_number
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password_hash(&self) -> &HashedPassword {
        &self.password_hash
    }

    pub fn role(&self) -> Role {
        self.role
    }
}

/// The column values for one account insert, with the credential already
/// hashed. Produced by the registration use case, consumed by the store.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub personal_number: String,
    pub username: Username,
    pub password_hash: HashedPassword,
}

/// Validated registration data as handed over by the request-parsing boundary.
/// Still carries the plaintext credential; hashing happens in the use case.
#[derive(Debug, Clone)]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub personal_number: String,
    pub username: Username,
    pub password: Password,
}

impl Registration {
    /// Pairs the registration data with its computed hash, dropping the
    /// plaintext in the process.
    pub fn into_new_account(self, password_hash: HashedPassword) -> NewAccount {
        NewAccount {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            personal_number: self.personal_number,
            username: self.username,
            password_hash,
        }
    }
}

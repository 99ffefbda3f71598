pub mod domain;
pub mod error;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    account::{Account, AccountId, NewAccount, Registration},
    application::{
        ApplicationSummary, AvailabilityWindow, Competence, CompetenceClaim, SubmissionRequest,
    },
    credentials::Credentials,
    password::{HashedPassword, Password, PasswordError},
    role::{Role, RoleError, APPLICANT_ROLE_ID, RECRUITER_ROLE_ID},
    username::{Username, UsernameError},
};

pub use error::ErrorKind;

pub use ports::{
    services::{CredentialError, CredentialHasher, PasswordVerdict},
    storage::{
        AccountStore, AccountStoreError, AvailabilityStore, AvailabilityStoreError,
        CompetenceCatalog, CompetenceCatalogError, CompetenceProfileStore,
        CompetenceProfileStoreError, StorageError, TransactionalStorage,
    },
};

pub mod config;
pub mod credential;
pub mod persistence;

pub use credential::Argon2CredentialHasher;
pub use persistence::{
    memory::{
        InMemoryStorage, MemoryAccountStore, MemoryAvailabilityStore, MemoryCompetenceCatalog,
        MemoryCompetenceProfileStore, MemoryTx,
    },
    postgres::{
        run_migrations, PostgresAccountStore, PostgresAvailabilityStore, PostgresCompetenceCatalog,
        PostgresCompetenceProfileStore, PostgresStorage,
    },
};

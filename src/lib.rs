//! # Recruitment - Application Submission Service Library
//!
//! This is a facade crate that re-exports the public APIs of the recruitment
//! service components: the transactional application-submission pipeline and
//! the registration/login pipeline it depends on for identity.
//!
//! ## Structure
//!
//! - **Core domain types**: `Account`, `Username`, `Password`, `Role`,
//!   `AvailabilityWindow`, `CompetenceClaim`, etc.
//! - **Port traits**: `TransactionalStorage`, `AccountStore`,
//!   `AvailabilityStore`, `CompetenceProfileStore`, `CompetenceCatalog`,
//!   `CredentialHasher`
//! - **Use cases**: `RegisterUseCase`, `LoginUseCase`,
//!   `SubmitApplicationUseCase`, etc.
//! - **Adapters**: `PostgresStorage`, `InMemoryStorage`,
//!   `Argon2CredentialHasher`, configuration loading
//! - **Service**: `RecruitmentService` - the composed entry point

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use recruitment_core::*;
}

// Re-export most commonly used core types at the root level
pub use recruitment_core::{
    Account, AccountId, ApplicationSummary, AvailabilityWindow, Competence, CompetenceClaim,
    Credentials, ErrorKind, HashedPassword, Password, PasswordVerdict, Registration, Role,
    SubmissionRequest, Username,
};

// ============================================================================
// Port Traits
// ============================================================================

/// Port trait definitions
pub mod ports {
    pub use recruitment_core::{
        AccountStore, AccountStoreError, AvailabilityStore, AvailabilityStoreError,
        CompetenceCatalog, CompetenceCatalogError, CompetenceProfileStore,
        CompetenceProfileStoreError, CredentialError, CredentialHasher, StorageError,
        TransactionalStorage,
    };
}

// Re-export port traits at root level
pub use recruitment_core::{
    AccountStore, AccountStoreError, AvailabilityStore, AvailabilityStoreError, CompetenceCatalog,
    CompetenceCatalogError, CompetenceProfileStore, CompetenceProfileStoreError, CredentialError,
    CredentialHasher, StorageError, TransactionalStorage,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use recruitment_application::*;
}

// Re-export use cases at root level
pub use recruitment_application::{
    ListApplicationUseCase, ListCompetencesUseCase, LoginUseCase, RegisterUseCase,
    SubmitApplicationUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Persistence implementations
    pub mod persistence {
        pub use recruitment_adapters::persistence::*;
    }

    /// Credential hashing
    pub mod credential {
        pub use recruitment_adapters::credential::*;
    }

    /// Configuration
    pub mod config {
        pub use recruitment_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use recruitment_adapters::{
    run_migrations, Argon2CredentialHasher, InMemoryStorage, MemoryAccountStore,
    MemoryAvailabilityStore,
    MemoryCompetenceCatalog, MemoryCompetenceProfileStore, PostgresAccountStore,
    PostgresAvailabilityStore, PostgresCompetenceCatalog, PostgresCompetenceProfileStore,
    PostgresStorage,
};

// ============================================================================
// Recruitment Service (Main Entry Point)
// ============================================================================

/// Composed service wiring
pub use recruitment_service::{
    configure_postgres, init_tracing, InMemoryRecruitmentService, PostgresRecruitmentService,
    RecruitmentService,
};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use chrono;
pub use rust_decimal;
pub use sqlx;

//! Shared error taxonomy.
//!
//! Every store and service error in this workspace maps onto one of these
//! kinds through a `kind()` accessor. The transport boundary translates a
//! kind into a response status without matching on concrete error variants.

/// Classification of a failure, shared across all ports and use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A data conflict: duplicate login name, or stored/asserted role mismatch.
    Conflict,
    /// The caller's role does not permit the attempted operation.
    Authorization,
    /// A referenced account does not exist.
    NotFound,
    /// A login credential did not verify against the stored hash.
    CredentialMismatch,
    /// Malformed input that upstream sanitization should have rejected.
    ValidationSanitization,
    /// A storage failure not otherwise classified.
    Persistence,
}

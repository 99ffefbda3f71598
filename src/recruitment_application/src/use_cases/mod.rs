pub mod list_application;
#[cfg(test)]
pub(crate) mod test_support;
pub mod list_competences;
pub mod login;
pub mod register;
pub mod submit_application;

// Re-export for convenience
pub use list_application::{ListApplicationError, ListApplicationUseCase};
pub use list_competences::{ListCompetencesError, ListCompetencesUseCase};
pub use login::{LoginError, LoginUseCase};
pub use register::{RegisterUseCase, RegistrationError};
pub use submit_application::{SubmissionError, SubmitApplicationUseCase};

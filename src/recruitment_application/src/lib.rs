pub mod use_cases;

pub use use_cases::{
    list_application::{ListApplicationError, ListApplicationUseCase},
    list_competences::{ListCompetencesError, ListCompetencesUseCase},
    login::{LoginError, LoginUseCase},
    register::{RegisterUseCase, RegistrationError},
    submit_application::{SubmissionError, SubmitApplicationUseCase},
};

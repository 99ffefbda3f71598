use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::account::AccountId;
use crate::domain::role::Role;

/// One contiguous span an applicant is available for work.
///
/// No ordering between the two dates is enforced here; the windows are stored
/// exactly as submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
}

/// One (competence, years-of-experience) pair claimed by an applicant.
///
/// Experience is an exact decimal, stored as DECIMAL(4,2). Binary floating
/// point would corrupt values like 2.50.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetenceClaim {
    pub competence_id: i32,
    pub years_of_experience: Decimal,
}

/// A row of the competence catalog applicants pick their claims from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competence {
    pub id: i32,
    pub name: String,
}

/// The unit of work handed to the submission service: the caller's asserted
/// identity plus everything to persist for one application.
///
/// The asserted role arrives pre-extracted from a verified credential but is
/// treated as untrusted input; the service re-checks it against the store.
#[derive(Debug, Clone)]
pub struct SubmissionRequest {
    pub account_id: AccountId,
    pub asserted_role: Role,
    pub availability: Vec<AvailabilityWindow>,
    pub competencies: Vec<CompetenceClaim>,
}

/// Everything stored for one account's application, as read back for review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationSummary {
    pub account_id: AccountId,
    pub availability: Vec<AvailabilityWindow>,
    pub competencies: Vec<CompetenceClaim>,
}

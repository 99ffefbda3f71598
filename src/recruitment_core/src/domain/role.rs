use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ErrorKind;

/// Role id of recruiters, as stored in the `role` table.
pub const RECRUITER_ROLE_ID: i32 = 1;
/// Role id of regular applicants. Registration always assigns this role.
pub const APPLICANT_ROLE_ID: i32 = 2;

/// The two account roles governing which operations an identity may perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Recruiter,
    Applicant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoleError {
    #[error("unknown role id {0}")]
    UnknownRoleId(i32),
}

impl RoleError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::ValidationSanitization
    }
}

impl Role {
    /// The foreign key value this role is stored as.
    pub const fn id(self) -> i32 {
        match self {
            Role::Recruiter => RECRUITER_ROLE_ID,
            Role::Applicant => APPLICANT_ROLE_ID,
        }
    }

    pub fn from_id(id: i32) -> Result<Self, RoleError> {
        match id {
            RECRUITER_ROLE_ID => Ok(Role::Recruiter),
            APPLICANT_ROLE_ID => Ok(Role::Applicant),
            other => Err(RoleError::UnknownRoleId(other)),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Recruiter => f.write_str("recruiter"),
            Role::Applicant => f.write_str("applicant"),
        }
    }
}

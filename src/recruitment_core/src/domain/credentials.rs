use crate::domain::password::Password;
use crate::domain::username::Username;

/// A login attempt: the caller's username and plaintext password.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: Username,
    pub password: Password,
}

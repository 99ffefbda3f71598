pub mod account;
pub mod application;
pub mod credentials;
pub mod password;
pub mod role;
pub mod username;

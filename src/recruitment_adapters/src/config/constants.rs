pub mod env {
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
    pub const DATABASE_MAX_CONNECTIONS_ENV_VAR: &str = "DATABASE_MAX_CONNECTIONS";
}

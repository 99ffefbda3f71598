use config::{Config, Environment};
use serde::Deserialize;
use thiserror::Error;

/// Process configuration, loaded from the environment.
///
/// Variable names are listed in [`crate::config::constants::env`]; a `.env`
/// file in the working directory is read first when present.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database_url: String,
    #[serde(default = "default_max_connections")]
    pub database_max_connections: u32,
}

fn default_max_connections() -> u32 {
    5
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl Settings {
    pub fn load() -> Result<Self, SettingsError> {
        dotenvy::dotenv().ok();
        let settings = Config::builder()
            .add_source(Environment::default().try_parsing(true))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::constants::env;

    #[test]
    fn loads_from_environment() {
        // SAFETY: no other test in this crate touches these variables.
        unsafe {
            std::env::set_var(env::DATABASE_URL_ENV_VAR, "postgres://localhost/recruitment");
            std::env::remove_var(env::DATABASE_MAX_CONNECTIONS_ENV_VAR);
        }

        let settings = Settings::load().unwrap();
        assert_eq!(settings.database_url, "postgres://localhost/recruitment");
        assert_eq!(settings.database_max_connections, 5);
    }
}

//! Application configuration

use std::net::SocketAddr;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::errors::ClockError;

/// Postgres listens on its standard port; it is not configurable.
pub const DATABASE_PORT: u16 = 5432;

/// Settings read from the process environment, keyed by the lowercased
/// variable name (`PORT`, `DB_HOST`, `POSTGRES_USER`, ...).
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub db_host: String,
    pub postgres_user: String,
    pub postgres_password: String,
    pub postgres_db: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Environment::default())
    }

    /// Load configuration with `environment` as the highest-priority source.
    pub fn load_from(environment: Environment) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("port", 8080)?
            .set_default("db_host", "db")?
            .set_default("postgres_user", "user")?
            .set_default("postgres_password", "password")?
            .set_default("postgres_db", "db")?
            .set_default("log_format", "text")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(environment)
            .build()?;

        config.try_deserialize()
    }

    pub fn database(&self) -> DatabaseConfig {
        DatabaseConfig {
            host: self.db_host.clone(),
            port: DATABASE_PORT,
            user: self.postgres_user.clone(),
            password: self.postgres_password.clone(),
            name: self.postgres_db.clone(),
        }
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

impl DatabaseConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), ClockError> {
        for (field, value) in [
            ("host", &self.host),
            ("user", &self.user),
            ("database name", &self.name),
        ] {
            if value.trim().is_empty() {
                return Err(ClockError::ConfigurationError {
                    message: format!("Database {} cannot be empty", field),
                });
            }
        }
        Ok(())
    }
}

// src/database.rs
pub mod models;

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::Connection;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use crate::{config::DatabaseConfig, errors::ClockError};

pub use models::NowRow;

const CURRENT_TIME_QUERY: &str = "SELECT NOW()";

/// Anything that can report the current time as query rows.
#[async_trait]
pub trait TimeSource: Send + Sync {
    async fn current_time(&self) -> Result<Vec<NowRow>, ClockError>;
}

/// A single Postgres connection shared by every request.
///
/// The connection is opened once and never re-established. If it could not
/// be opened, or it drops later, queries fail until the process restarts.
pub struct Database {
    connection: Mutex<Option<PgConnection>>,
}

impl Database {
    /// Open the connection described by `config`.
    ///
    /// A failed connection attempt is logged and yields a handle without a
    /// connection, so the server can still start.
    pub async fn connect(config: &DatabaseConfig) -> Self {
        info!(
            "Connecting to PostgreSQL: host={}, port={}, database={}",
            config.host, config.port, config.name
        );

        match Self::open_connection(config).await {
            Ok(conn) => {
                info!("Connected to PostgreSQL");
                Self::from_connection(conn)
            }
            Err(e) => {
                error!("Connection error: {}", e);
                Self::disconnected()
            }
        }
    }

    /// Open a connection from a `postgres://` URL, failing on error.
    pub async fn from_url(url: &str) -> Result<Self, ClockError> {
        let conn = PgConnection::connect(url).await?;
        Ok(Self::from_connection(conn))
    }

    pub fn from_connection(conn: PgConnection) -> Self {
        Self {
            connection: Mutex::new(Some(conn)),
        }
    }

    /// Handle with no underlying connection; every query fails.
    pub fn disconnected() -> Self {
        Self {
            connection: Mutex::new(None),
        }
    }

    pub async fn is_connected(&self) -> bool {
        self.connection.lock().await.is_some()
    }

    async fn open_connection(config: &DatabaseConfig) -> Result<PgConnection, ClockError> {
        config.validate()?;

        let options = PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.name);

        Ok(PgConnection::connect_with(&options).await?)
    }
}

#[async_trait]
impl TimeSource for Database {
    async fn current_time(&self) -> Result<Vec<NowRow>, ClockError> {
        let mut guard = self.connection.lock().await;
        let conn = guard.as_mut().ok_or(ClockError::NotConnected)?;

        let rows = sqlx::query_as::<_, NowRow>(CURRENT_TIME_QUERY)
            .fetch_all(conn)
            .await?;

        debug!("Fetched {} row(s)", rows.len());
        Ok(rows)
    }
}

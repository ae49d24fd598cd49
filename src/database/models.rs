// src/database/models.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of `SELECT NOW()`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct NowRow {
    pub now: DateTime<Utc>,
}

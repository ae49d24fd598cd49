//! API handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::api::AppState;
use crate::database::NowRow;

pub const GREETING: &str = "Hello from Axum with Rust!";
pub const QUERY_ERROR_MESSAGE: &str = "Error querying the database";

pub async fn root() -> &'static str {
    GREETING
}

/// Current database time, as the rows of `SELECT NOW()`
pub async fn current_time(
    State(state): State<AppState>,
) -> Result<Json<Vec<NowRow>>, (StatusCode, &'static str)> {
    state.source.current_time().await.map(Json).map_err(|e| {
        tracing::error!(error = ?e, "Database query failed");
        (StatusCode::INTERNAL_SERVER_ERROR, QUERY_ERROR_MESSAGE)
    })
}

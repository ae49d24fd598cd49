//! API server state

use std::sync::Arc;

use crate::database::TimeSource;

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn TimeSource>,
}

impl AppState {
    pub fn new(source: Arc<dyn TimeSource>) -> Self {
        Self { source }
    }
}

use std::sync::Arc;

use crate::log::Log;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub log: Arc<Log>,
}

impl AppState {
    pub fn new(log: Log) -> Self {
        Self { log: Arc::new(log) }
    }
}

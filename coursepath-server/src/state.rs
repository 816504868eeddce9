//! Shared application state for the coursepath server

use std::sync::Arc;

use chrono::{DateTime, Utc};
use coursepath_core::RecommendationEngine;

/// Shared application state accessible by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Recommendation engine shared by every request
    pub engine: Arc<RecommendationEngine>,
    /// When the server started
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create a new AppState around an engine
    pub fn new(engine: Arc<RecommendationEngine>) -> Self {
        Self {
            engine,
            started_at: Utc::now(),
        }
    }

    /// Returns how long the server has been running
    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }
}

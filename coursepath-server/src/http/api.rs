//! Service metadata handlers

use std::sync::Arc;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::AppState;

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the server
    pub status: String,
    /// Server version
    pub version: String,
    /// Seconds since server started
    pub uptime_seconds: i64,
}

/// Health check endpoint
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
    })
}

/// Rule set response
#[derive(Debug, Serialize, Deserialize)]
pub struct RulesResponse {
    /// Rule names in evaluation order
    pub rules: Vec<String>,
}

/// GET /api/rules - List the active rules in evaluation order
pub async fn list_rules(State(state): State<Arc<AppState>>) -> Json<RulesResponse> {
    let rules = state
        .engine
        .rules()
        .names()
        .into_iter()
        .map(str::to_string)
        .collect();

    Json(RulesResponse { rules })
}

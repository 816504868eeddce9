//! Recommendation API handlers

use std::sync::Arc;

use axum::{Extension, Json, extract::State, http::StatusCode};
use coursepath_core::{RecommendationsResponse, storage, validate_response};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::AppState;
use crate::middleware::LearnerIdentity;

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always `"error"`
    pub status: String,
    /// Error message
    pub message: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(code: StatusCode, message: impl Into<String>) -> ApiError {
    (
        code,
        Json(ErrorResponse {
            status: "error".to_string(),
            message: message.into(),
        }),
    )
}

/// Serialize a response and check its shape before it leaves the server.
///
/// A payload that fails the shape check becomes a `500`.
pub fn validated_payload(response: &RecommendationsResponse) -> Result<Value, ApiError> {
    let value = serde_json::to_value(response).map_err(|e| {
        tracing::error!("Failed to serialize recommendations: {}", e);
        api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to serialize recommendations",
        )
    })?;

    check_shape(value)
}

fn check_shape(value: Value) -> Result<Value, ApiError> {
    if let Err(violation) = validate_response(&value) {
        tracing::error!("Recommendation payload failed validation: {}", violation);
        return Err(api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Invalid recommendation response: {}", violation),
        ));
    }
    Ok(value)
}

/// GET /api/recommendations - Recommend courses for the calling learner
pub async fn get_recommendations(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<LearnerIdentity>,
) -> Result<Json<Value>, ApiError> {
    let recommendations = state
        .engine
        .recommend(&identity.learner_id)
        .await
        .map_err(|e| {
            tracing::error!(learner = %identity.learner_id, "Recommendation failed: {}", e);
            let code = match e {
                storage::Error::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            api_error(code, "Failed to compute recommendations")
        })?;

    tracing::debug!(
        learner = %identity.learner_id,
        count = recommendations.len(),
        "Computed recommendations"
    );

    let payload = validated_payload(&RecommendationsResponse::success(recommendations))?;
    Ok(Json(payload))
}

//! Learner identity middleware for axum
//!
//! Authentication happens upstream. The gateway verifies the session and
//! forwards the learner's id in [`LEARNER_ID_HEADER`]; this middleware only
//! lifts it into request extensions.

use axum::{extract::Request, http::StatusCode, middleware::Next, response::Response};
use coursepath_core::LearnerId;

/// Header carrying the verified learner id
pub const LEARNER_ID_HEADER: &str = "x-learner-id";

/// Verified identity of the learner making the request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearnerIdentity {
    pub learner_id: LearnerId,
}

/// Extract the learner id from request headers
fn extract_learner_id(request: &Request) -> Option<LearnerId> {
    let value = request.headers().get(LEARNER_ID_HEADER)?.to_str().ok()?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(LearnerId::from(value))
    }
}

/// Identity middleware function
///
/// Rejects requests without a learner id with `401 Unauthorized`.
pub async fn identity_middleware(mut request: Request, next: Next) -> Result<Response, StatusCode> {
    let Some(learner_id) = extract_learner_id(&request) else {
        tracing::debug!("No learner id on request to {}", request.uri().path());
        return Err(StatusCode::UNAUTHORIZED);
    };

    request
        .extensions_mut()
        .insert(LearnerIdentity { learner_id });

    Ok(next.run(request).await)
}

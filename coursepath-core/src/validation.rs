//! Outgoing payload shape checks.
//!
//! The boundary serializes a [`RecommendationsResponse`] and runs
//! [`validate_response`] on the JSON before sending it, so a malformed
//! payload surfaces as a server-side failure instead of reaching clients.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::types::Recommendation;

/// Fields every recommendation entry must carry as strings.
const REQUIRED_STRING_FIELDS: [&str; 3] = ["courseId", "title", "reason"];

/// Successful recommendations payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    /// Always `"success"`.
    pub status: String,
    pub recommendations: Vec<Recommendation>,
}

impl RecommendationsResponse {
    pub fn success(recommendations: Vec<Recommendation>) -> Self {
        Self {
            status: "success".to_string(),
            recommendations,
        }
    }
}

/// A payload did not match the declared recommendations shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid response shape at {path}: expected {expected}")]
pub struct ShapeViolation {
    /// JSON path of the offending value, e.g. `$.recommendations[2].title`.
    pub path: String,
    /// What was expected at that path.
    pub expected: &'static str,
}

impl ShapeViolation {
    fn new(path: impl Into<String>, expected: &'static str) -> Self {
        Self {
            path: path.into(),
            expected,
        }
    }
}

/// Check that `value` is `{recommendations: [{courseId, title, reason}]}`
/// with string fields. Extra fields are allowed.
pub fn validate_response(value: &Value) -> Result<(), ShapeViolation> {
    let object = value
        .as_object()
        .ok_or_else(|| ShapeViolation::new("$", "object"))?;

    let recommendations = object
        .get("recommendations")
        .and_then(Value::as_array)
        .ok_or_else(|| ShapeViolation::new("$.recommendations", "array"))?;

    for (i, entry) in recommendations.iter().enumerate() {
        let entry_path = format!("$.recommendations[{i}]");
        let fields = entry
            .as_object()
            .ok_or_else(|| ShapeViolation::new(entry_path.clone(), "object"))?;

        for field in REQUIRED_STRING_FIELDS {
            if !fields.get(field).is_some_and(Value::is_string) {
                return Err(ShapeViolation::new(
                    format!("{entry_path}.{field}"),
                    "string",
                ));
            }
        }
    }

    Ok(())
}

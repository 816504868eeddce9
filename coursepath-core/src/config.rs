//! Engine thresholds.

use serde::{Deserialize, Serialize};

/// Default score below which an assessment result counts as a weak area.
pub const DEFAULT_WEAK_SCORE_THRESHOLD: f64 = 50.0;

/// Default share of beginner courses that unlocks the intermediate path.
pub const DEFAULT_BEGINNER_RATIO_THRESHOLD: f64 = 0.8;

/// Tunable thresholds for the standard rule set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Results scoring strictly below this value trigger remediation.
    #[serde(default = "default_weak_score_threshold")]
    pub weak_score_threshold: f64,

    /// Minimum fraction of completed courses at beginner level (inclusive)
    /// before intermediate courses are suggested.
    #[serde(default = "default_beginner_ratio_threshold")]
    pub beginner_ratio_threshold: f64,
}

fn default_weak_score_threshold() -> f64 {
    DEFAULT_WEAK_SCORE_THRESHOLD
}

fn default_beginner_ratio_threshold() -> f64 {
    DEFAULT_BEGINNER_RATIO_THRESHOLD
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weak_score_threshold: DEFAULT_WEAK_SCORE_THRESHOLD,
            beginner_ratio_threshold: DEFAULT_BEGINNER_RATIO_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = EngineConfig::default();
        assert_eq!(config.weak_score_threshold, 50.0);
        assert_eq!(config.beginner_ratio_threshold, 0.8);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"weak_score_threshold": 60}"#).unwrap();
        assert_eq!(config.weak_score_threshold, 60.0);
        assert_eq!(config.beginner_ratio_threshold, 0.8);
    }
}

//! Suggest the intermediate path to learners who have mastered the basics.

use super::RecommendationRule;
use crate::config::DEFAULT_BEGINNER_RATIO_THRESHOLD;
use crate::context::RecommendationContext;
use crate::types::{Level, RecommendationCandidate};

const REASON: &str = "You are ready to move to an intermediate learning path";

/// Suggests every intermediate course once enough of the learner's
/// completed courses are beginner level.
#[derive(Debug, Clone, Copy)]
pub struct BeginnerToIntermediate {
    ratio_threshold: f64,
}

impl BeginnerToIntermediate {
    /// Creates the rule with a custom beginner ratio threshold (inclusive).
    pub fn new(ratio_threshold: f64) -> Self {
        Self { ratio_threshold }
    }

    /// Returns the beginner ratio threshold.
    pub fn ratio_threshold(&self) -> f64 {
        self.ratio_threshold
    }

    /// Fraction of completed courses at beginner level.
    ///
    /// Returns `None` when nothing has been completed.
    pub fn beginner_ratio(context: &RecommendationContext) -> Option<f64> {
        let total = context.completed_courses.len();
        if total == 0 {
            return None;
        }

        let beginner = context
            .completed_courses
            .iter()
            .filter(|c| c.level == Level::Beginner)
            .count();

        Some(beginner as f64 / total as f64)
    }
}

impl Default for BeginnerToIntermediate {
    fn default() -> Self {
        Self::new(DEFAULT_BEGINNER_RATIO_THRESHOLD)
    }
}

impl RecommendationRule for BeginnerToIntermediate {
    fn name(&self) -> &str {
        "BEGINNER_TO_INTERMEDIATE"
    }

    fn apply(&self, context: &RecommendationContext) -> Vec<RecommendationCandidate> {
        match Self::beginner_ratio(context) {
            Some(ratio) if ratio >= self.ratio_threshold => context
                .all_courses
                .iter()
                .filter(|c| c.level == Level::Intermediate)
                .map(|c| RecommendationCandidate::for_course(c, REASON))
                .collect(),
            _ => Vec::new(),
        }
    }
}

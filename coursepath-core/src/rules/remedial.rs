//! Suggest remedial courses for weak assessment areas.

use super::RecommendationRule;
use crate::config::DEFAULT_WEAK_SCORE_THRESHOLD;
use crate::context::RecommendationContext;
use crate::types::RecommendationCandidate;

/// Suggests a remedial course for each assessment result below the threshold.
///
/// Each weak result is considered on its own. A weak result whose skill
/// has no remedial course produces nothing.
#[derive(Debug, Clone, Copy)]
pub struct LowQuizScoreRemedial {
    threshold: f64,
}

impl LowQuizScoreRemedial {
    /// Creates the rule with a custom weak-score threshold (exclusive).
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Returns the weak-score threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Default for LowQuizScoreRemedial {
    fn default() -> Self {
        Self::new(DEFAULT_WEAK_SCORE_THRESHOLD)
    }
}

impl RecommendationRule for LowQuizScoreRemedial {
    fn name(&self) -> &str {
        "LOW_QUIZ_SCORE_REMEDIAL"
    }

    fn apply(&self, context: &RecommendationContext) -> Vec<RecommendationCandidate> {
        context
            .quiz_results
            .iter()
            .filter(|result| result.score < self.threshold)
            .filter_map(|weak| {
                context
                    .remedial_courses
                    .iter()
                    .find(|course| course.skill.as_deref() == Some(weak.skill.as_str()))
                    .map(|course| {
                        RecommendationCandidate::for_course(
                            course,
                            format!(
                                "Recommended to strengthen your understanding of {}",
                                weak.skill
                            ),
                        )
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ChallengeResult, Course};

    fn context(results: Vec<ChallengeResult>, catalog: Vec<Course>) -> RecommendationContext {
        RecommendationContext::new(vec![], catalog, results)
    }

    #[test]
    fn suggests_remedial_course_for_weak_skill() {
        let ctx = context(
            vec![ChallengeResult::new("u1", 35.0, "Solidity")],
            vec![Course::new("Y", "Solidity Basics", "beginner").remedial_for("Solidity")],
        );

        let candidates = LowQuizScoreRemedial::default().apply(&ctx);

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].course_id.as_str(), "Y");
        assert_eq!(candidates[0].title, "Solidity Basics");
        assert!(candidates[0].reason.contains("Solidity"));
    }

    #[test]
    fn threshold_is_exclusive() {
        let ctx = context(
            vec![ChallengeResult::new("u1", 50.0, "Rust")],
            vec![Course::new("R", "Rust Refresher", "beginner").remedial_for("Rust")],
        );

        assert!(LowQuizScoreRemedial::default().apply(&ctx).is_empty());
    }

    #[test]
    fn weak_skill_without_remedial_course_yields_nothing() {
        let ctx = context(
            vec![ChallengeResult::new("u1", 10.0, "Haskell")],
            vec![Course::new("R", "Rust Refresher", "beginner").remedial_for("Rust")],
        );

        assert!(LowQuizScoreRemedial::default().apply(&ctx).is_empty());
    }

    #[test]
    fn non_remedial_course_with_matching_skill_is_ignored() {
        let mut course = Course::new("R", "Rust in Depth", "advanced");
        course.skill = Some("Rust".to_string());
        let ctx = context(vec![ChallengeResult::new("u1", 10.0, "Rust")], vec![course]);

        assert!(LowQuizScoreRemedial::default().apply(&ctx).is_empty());
    }

    #[test]
    fn each_weak_result_is_considered_independently() {
        let ctx = context(
            vec![
                ChallengeResult::new("u1", 20.0, "Rust"),
                ChallengeResult::new("u1", 40.0, "Rust"),
                ChallengeResult::new("u1", 90.0, "Go"),
            ],
            vec![
                Course::new("R", "Rust Refresher", "beginner").remedial_for("Rust"),
                Course::new("G", "Go Refresher", "beginner").remedial_for("Go"),
            ],
        );

        let candidates = LowQuizScoreRemedial::default().apply(&ctx);
        assert_eq!(candidates.len(), 2);
        assert!(candidates.iter().all(|c| c.course_id.as_str() == "R"));
    }

    #[test]
    fn custom_threshold() {
        let ctx = context(
            vec![ChallengeResult::new("u1", 65.0, "Rust")],
            vec![Course::new("R", "Rust Refresher", "beginner").remedial_for("Rust")],
        );

        let rule = LowQuizScoreRemedial::new(70.0);
        assert_eq!(rule.threshold(), 70.0);
        assert_eq!(rule.apply(&ctx).len(), 1);
    }
}

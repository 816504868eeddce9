//! Suggest courses unlocked by what the learner has completed.

use super::RecommendationRule;
use crate::context::RecommendationContext;
use crate::types::RecommendationCandidate;

/// Suggests every catalog course whose prerequisite the learner completed.
///
/// When two completed courses unlock the same successor, both candidates
/// are emitted; the engine's merge keeps the later one.
#[derive(Debug, Clone, Copy, Default)]
pub struct NextCourseSequence;

impl RecommendationRule for NextCourseSequence {
    fn name(&self) -> &str {
        "NEXT_COURSE_SEQUENCE"
    }

    fn apply(&self, context: &RecommendationContext) -> Vec<RecommendationCandidate> {
        context
            .completed_courses
            .iter()
            .flat_map(|completed| {
                context
                    .all_courses
                    .iter()
                    .filter(move |next| next.prerequisite.as_ref() == Some(&completed.id))
                    .map(move |next| {
                        RecommendationCandidate::for_course(
                            next,
                            format!("Based on your completion of {}", completed.title),
                        )
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Course;

    fn context(completed: Vec<Course>, catalog: Vec<Course>) -> RecommendationContext {
        RecommendationContext::new(completed, catalog, vec![])
    }

    #[test]
    fn suggests_successor_of_completed_course() {
        let ctx = context(
            vec![Course::new("A", "Intro", "beginner")],
            vec![Course::new("B", "Advanced", "advanced").with_prerequisite("A")],
        );

        let candidates = NextCourseSequence.apply(&ctx);

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].course_id.as_str(), "B");
        assert_eq!(candidates[0].title, "Advanced");
        assert_eq!(candidates[0].reason, "Based on your completion of Intro");
    }

    #[test]
    fn emits_duplicates_for_shared_successor() {
        // A course has one prerequisite, so a successor is unlocked twice
        // only when the history lists that prerequisite twice.
        let ctx = context(
            vec![
                Course::new("A", "Intro", "beginner"),
                Course::new("A", "Intro (legacy)", "beginner"),
            ],
            vec![Course::new("B", "Next", "intermediate").with_prerequisite("A")],
        );

        let candidates = NextCourseSequence.apply(&ctx);

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[1].reason, "Based on your completion of Intro (legacy)");
    }

    #[test]
    fn dangling_prerequisite_is_ignored() {
        let ctx = context(
            vec![Course::new("A", "Intro", "beginner")],
            vec![
                Course::new("B", "Orphan", "advanced").with_prerequisite("deleted"),
                Course::new("C", "Standalone", "advanced"),
            ],
        );

        assert!(NextCourseSequence.apply(&ctx).is_empty());
    }

    #[test]
    fn unpublished_successor_is_not_suggested() {
        let ctx = context(
            vec![Course::new("A", "Intro", "beginner")],
            vec![
                Course::new("B", "Draft", "advanced")
                    .with_prerequisite("A")
                    .unpublished(),
            ],
        );

        assert!(NextCourseSequence.apply(&ctx).is_empty());
    }

    #[test]
    fn follows_completion_order() {
        let ctx = context(
            vec![
                Course::new("A", "Intro", "beginner"),
                Course::new("C", "Basics", "beginner"),
            ],
            vec![
                Course::new("D", "After Basics", "intermediate").with_prerequisite("C"),
                Course::new("B", "After Intro", "intermediate").with_prerequisite("A"),
            ],
        );

        let ids: Vec<String> = NextCourseSequence
            .apply(&ctx)
            .into_iter()
            .map(|c| c.course_id.to_string())
            .collect();
        assert_eq!(ids, vec!["B", "D"]);
    }
}

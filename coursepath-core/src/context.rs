//! Per-call recommendation context.
//!
//! [`ContextBuilder`] gathers a learner's history and the catalog from the
//! collaborators and freezes them into a [`RecommendationContext`] that the
//! rules read from.

use std::collections::HashMap;
use std::sync::Arc;

use crate::storage::{AssessmentStore, CourseCatalog, EnrollmentStore, Result};
use crate::types::{ChallengeResult, Course, CourseId, LearnerId};

/// Read-only snapshot of one learner's history and the catalog.
///
/// Built fresh for every recommendation call and never shared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecommendationContext {
    /// Courses the learner has completed, in enrollment order.
    pub completed_courses: Vec<Course>,
    /// Every published course.
    pub all_courses: Vec<Course>,
    /// Every assessment result for the learner.
    pub quiz_results: Vec<ChallengeResult>,
    /// Published courses flagged as remedial.
    pub remedial_courses: Vec<Course>,
}

impl RecommendationContext {
    /// Assemble a context from raw collaborator data.
    ///
    /// Unpublished catalog entries are dropped and the remedial subset is
    /// derived from what remains.
    pub fn new(
        completed_courses: Vec<Course>,
        catalog: Vec<Course>,
        quiz_results: Vec<ChallengeResult>,
    ) -> Self {
        let all_courses: Vec<Course> = catalog.into_iter().filter(|c| c.is_published).collect();
        let remedial_courses = all_courses
            .iter()
            .filter(|c| c.is_remedial)
            .cloned()
            .collect();

        Self {
            completed_courses,
            all_courses,
            quiz_results,
            remedial_courses,
        }
    }

    /// Whether the learner has completed at least one course.
    pub fn has_history(&self) -> bool {
        !self.completed_courses.is_empty()
    }
}

/// Builds a [`RecommendationContext`] from the three collaborator reads.
#[derive(Clone)]
pub struct ContextBuilder {
    enrollments: Arc<dyn EnrollmentStore>,
    catalog: Arc<dyn CourseCatalog>,
    assessments: Arc<dyn AssessmentStore>,
}

impl ContextBuilder {
    /// Create a new context builder.
    pub fn new(
        enrollments: Arc<dyn EnrollmentStore>,
        catalog: Arc<dyn CourseCatalog>,
        assessments: Arc<dyn AssessmentStore>,
    ) -> Self {
        Self {
            enrollments,
            catalog,
            assessments,
        }
    }

    /// Create a builder where a single store serves every read.
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: EnrollmentStore + CourseCatalog + AssessmentStore + 'static,
    {
        Self {
            enrollments: store.clone(),
            catalog: store.clone(),
            assessments: store,
        }
    }

    /// Build the context for `learner`.
    ///
    /// Enrollments, catalog and assessment results are read concurrently.
    /// The first collaborator failure aborts the whole build.
    ///
    /// Completed enrollments resolve against the published catalog, one
    /// course per enrollment in enrollment order. Enrollments pointing at an
    /// unpublished or unknown course are not history.
    pub async fn build(&self, learner: &LearnerId) -> Result<RecommendationContext> {
        let (enrollments, catalog, quiz_results) = futures::try_join!(
            self.enrollments.completed_enrollments(learner),
            self.catalog.published_courses(),
            self.assessments.challenge_results(learner),
        )?;

        let completed_courses = {
            let published: HashMap<&CourseId, &Course> = catalog
                .iter()
                .filter(|c| c.is_published)
                .map(|c| (&c.id, c))
                .collect();

            enrollments
                .iter()
                .filter(|e| e.completed)
                .filter_map(|e| published.get(&e.course_id).map(|c| (*c).clone()))
                .collect()
        };

        Ok(RecommendationContext::new(
            completed_courses,
            catalog,
            quiz_results,
        ))
    }
}

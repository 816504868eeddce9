//! Recommendation orchestration.
//!
//! [`RecommendationEngine`] builds the context, runs the rule set and merges
//! the candidates into the final list.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::EngineConfig;
use crate::context::{ContextBuilder, RecommendationContext};
use crate::rules::RuleSet;
use crate::storage::{AssessmentStore, CourseCatalog, EnrollmentStore, Result};
use crate::types::{CourseId, LearnerId, Recommendation, RecommendationCandidate};

/// Runs an ordered [`RuleSet`] against a learner's context.
///
/// The engine holds no per-learner state, so one instance can serve any
/// number of concurrent calls.
pub struct RecommendationEngine {
    context_builder: ContextBuilder,
    rules: RuleSet,
}

impl RecommendationEngine {
    /// Create a new engine.
    pub fn new(context_builder: ContextBuilder, rules: RuleSet) -> Self {
        Self {
            context_builder,
            rules,
        }
    }

    /// Create an engine with the standard rule set over a single store.
    pub fn from_store<S>(store: Arc<S>, config: &EngineConfig) -> Self
    where
        S: EnrollmentStore + CourseCatalog + AssessmentStore + 'static,
    {
        Self::new(ContextBuilder::from_store(store), RuleSet::standard(config))
    }

    /// The rules in evaluation order.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Recommend courses for a learner.
    ///
    /// A learner with no completed courses gets an empty list and no rule
    /// is run. Collaborator failures propagate unchanged.
    pub async fn recommend(&self, learner: &LearnerId) -> Result<Vec<Recommendation>> {
        let context = self.context_builder.build(learner).await?;
        if !context.has_history() {
            return Ok(Vec::new());
        }
        Ok(self.evaluate(&context))
    }

    /// Run every rule against `context` and merge their candidates.
    pub fn evaluate(&self, context: &RecommendationContext) -> Vec<Recommendation> {
        let candidates = self.rules.iter().flat_map(|rule| rule.apply(context));
        merge_candidates(candidates)
    }
}

impl std::fmt::Debug for RecommendationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecommendationEngine")
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}

/// Collapse candidates to one entry per course.
///
/// A course keeps the position of its first occurrence while a later
/// candidate for the same course replaces its title and reason.
pub fn merge_candidates(
    candidates: impl IntoIterator<Item = RecommendationCandidate>,
) -> Vec<Recommendation> {
    let mut slots: HashMap<CourseId, usize> = HashMap::new();
    let mut merged: Vec<Recommendation> = Vec::new();

    for candidate in candidates {
        match slots.get(&candidate.course_id) {
            Some(&index) => merged[index] = candidate.into(),
            None => {
                slots.insert(candidate.course_id.clone(), merged.len());
                merged.push(candidate.into());
            }
        }
    }

    merged
}

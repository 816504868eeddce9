//! Recommendation rules and the ordered rule set.
//!
//! Each rule is an independent, pure function from a
//! [`RecommendationContext`] to zero or more candidates. The engine runs
//! the rules of a [`RuleSet`] in order and merges their output, so a rule
//! later in the set wins when two rules suggest the same course.

mod progression;
mod remedial;
mod sequence;

pub use progression::BeginnerToIntermediate;
pub use remedial::LowQuizScoreRemedial;
pub use sequence::NextCourseSequence;

use crate::config::EngineConfig;
use crate::context::RecommendationContext;
use crate::types::RecommendationCandidate;

/// A rule that proposes courses for a learner.
///
/// # Examples
///
/// ```
/// use coursepath_core::{RecommendationCandidate, RecommendationContext, RecommendationRule};
///
/// // Suggest every advanced course regardless of history.
/// struct AllAdvanced;
///
/// impl RecommendationRule for AllAdvanced {
///     fn name(&self) -> &str { "ALL_ADVANCED" }
///     fn apply(&self, ctx: &RecommendationContext) -> Vec<RecommendationCandidate> {
///         ctx.all_courses
///             .iter()
///             .filter(|c| c.level.as_str() == "advanced")
///             .map(|c| RecommendationCandidate::for_course(c, "Stretch goal"))
///             .collect()
///     }
/// }
/// ```
pub trait RecommendationRule: Send + Sync {
    /// Returns the name of this rule.
    fn name(&self) -> &str;

    /// Computes candidates for the given context.
    fn apply(&self, context: &RecommendationContext) -> Vec<RecommendationCandidate>;
}

/// An ordered collection of rules.
pub struct RuleSet {
    rules: Vec<Box<dyn RecommendationRule>>,
}

#[allow(clippy::new_without_default)]
impl RuleSet {
    /// Creates an empty rule set.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// The fixed production order: sequence, remediation, level progression.
    pub fn standard(config: &EngineConfig) -> Self {
        Self::new()
            .with_rule(NextCourseSequence)
            .with_rule(LowQuizScoreRemedial::new(config.weak_score_threshold))
            .with_rule(BeginnerToIntermediate::new(config.beginner_ratio_threshold))
    }

    /// Appends a rule; it is evaluated after every rule already present.
    pub fn with_rule<R: RecommendationRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Returns the number of rules in this set.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the set has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns the names of all rules in order.
    pub fn names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Iterates the rules in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = &(dyn RecommendationRule + 'static)> {
        self.rules.iter().map(|r| r.as_ref())
    }
}

impl std::fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

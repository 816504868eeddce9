//! Course recommendation engine for coursepath.
//!
//! Given a learner's history (completed courses and assessment scores),
//! the engine derives a deduplicated list of next-course suggestions by
//! running an ordered set of independent rules against a shared context.
//!
//! # Architecture
//!
//! - **Storage** ([`EnrollmentStore`], [`CourseCatalog`], [`AssessmentStore`])
//!   provides read-only snapshots of learner and catalog data
//! - **Context** ([`ContextBuilder`]) assembles a fresh [`RecommendationContext`]
//!   per call from the three collaborator reads
//! - **Rules** ([`RecommendationRule`], [`RuleSet`]) are pure functions from
//!   context to candidates, evaluated in a fixed order
//! - **Engine** ([`RecommendationEngine`]) runs the rule set and merges the
//!   candidates, later rules overriding earlier ones for the same course
//! - **Validation** ([`validate_response`]) checks the outgoing payload shape
//!   at the system boundary

mod config;
mod context;
mod engine;
pub mod rules;
pub mod storage;
mod types;
mod validation;

// Configuration
pub use config::EngineConfig;

// Context
pub use context::{ContextBuilder, RecommendationContext};

// Engine
pub use engine::{RecommendationEngine, merge_candidates};

// Rules
pub use rules::{
    BeginnerToIntermediate, LowQuizScoreRemedial, NextCourseSequence, RecommendationRule, RuleSet,
};

// Storage traits (re-export from storage module)
pub use storage::{AssessmentStore, CourseCatalog, EnrollmentStore, MemoryStore, Snapshot};

// Domain types
pub use types::{
    ChallengeResult, Course, CourseId, Enrollment, LearnerId, Level, Recommendation,
    RecommendationCandidate,
};

// Boundary validation
pub use validation::{RecommendationsResponse, ShapeViolation, validate_response};

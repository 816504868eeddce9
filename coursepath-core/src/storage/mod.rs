//! Collaborator traits and implementations for learner and catalog data.
//!
//! The engine only ever reads through these traits:
//! - [`EnrollmentStore`] - completed enrollments for a learner
//! - [`CourseCatalog`] - the published catalog
//! - [`AssessmentStore`] - assessment results for a learner
//!
//! [`MemoryStore`] implements all three over an immutable [`Snapshot`].

mod error;
mod memory;

pub use error::{Error, Result};
pub use memory::{MemoryStore, Snapshot};

use async_trait::async_trait;

use crate::types::{ChallengeResult, Course, Enrollment, LearnerId};

/// Read-only access to enrollments.
#[async_trait]
pub trait EnrollmentStore: Send + Sync {
    /// Get all completed enrollments for a learner.
    async fn completed_enrollments(&self, learner: &LearnerId) -> Result<Vec<Enrollment>>;
}

/// Read-only access to the course catalog.
#[async_trait]
pub trait CourseCatalog: Send + Sync {
    /// List every published course.
    async fn published_courses(&self) -> Result<Vec<Course>>;
}

/// Read-only access to assessment results.
#[async_trait]
pub trait AssessmentStore: Send + Sync {
    /// Get all assessment results for a learner.
    async fn challenge_results(&self, learner: &LearnerId) -> Result<Vec<ChallengeResult>>;
}

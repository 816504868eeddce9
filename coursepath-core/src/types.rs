//! Core type definitions for the recommendation engine.

use serde::{Deserialize, Serialize};

/// Opaque identifier for a learner.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LearnerId(String);

impl LearnerId {
    /// Create a learner ID from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the underlying identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LearnerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for LearnerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for LearnerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque identifier for a course. This is the deduplication key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(String);

impl CourseId {
    /// Create a course ID from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the underlying identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CourseId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for CourseId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CourseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Difficulty level of a course.
///
/// The catalog may carry levels beyond the three the rules understand;
/// those are kept verbatim in [`Level::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
    Other(String),
}

impl Level {
    /// Lowercase name as stored in the catalog.
    pub fn as_str(&self) -> &str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
            Level::Other(s) => s,
        }
    }
}

impl From<String> for Level {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "beginner" => Level::Beginner,
            "intermediate" => Level::Intermediate,
            "advanced" => Level::Advanced,
            _ => Level::Other(s),
        }
    }
}

impl From<&str> for Level {
    fn from(s: &str) -> Self {
        Level::from(s.to_string())
    }
}

impl From<Level> for String {
    fn from(level: Level) -> Self {
        match level {
            Level::Other(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_published() -> bool {
    true
}

/// A catalog course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub level: Level,
    /// Weak reference to another course. May point at a course that no
    /// longer exists or is unpublished.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prerequisite: Option<CourseId>,
    #[serde(default = "default_published")]
    pub is_published: bool,
    #[serde(default)]
    pub is_remedial: bool,
    /// Skill addressed by a remedial course.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill: Option<String>,
}

impl Course {
    /// Create a published, non-remedial course with no prerequisite.
    pub fn new(id: impl Into<CourseId>, title: impl Into<String>, level: impl Into<Level>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            level: level.into(),
            prerequisite: None,
            is_published: true,
            is_remedial: false,
            skill: None,
        }
    }

    /// Set the prerequisite course.
    #[must_use]
    pub fn with_prerequisite(mut self, prerequisite: impl Into<CourseId>) -> Self {
        self.prerequisite = Some(prerequisite.into());
        self
    }

    /// Mark this course as remediation for `skill`.
    #[must_use]
    pub fn remedial_for(mut self, skill: impl Into<String>) -> Self {
        self.is_remedial = true;
        self.skill = Some(skill.into());
        self
    }

    /// Mark this course as unpublished.
    #[must_use]
    pub fn unpublished(mut self) -> Self {
        self.is_published = false;
        self
    }
}

/// A learner's enrollment in a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub student_id: LearnerId,
    pub course_id: CourseId,
    #[serde(default)]
    pub completed: bool,
}

impl Enrollment {
    /// Create a completed enrollment.
    pub fn completed(student_id: impl Into<LearnerId>, course_id: impl Into<CourseId>) -> Self {
        Self {
            student_id: student_id.into(),
            course_id: course_id.into(),
            completed: true,
        }
    }

    /// Create an enrollment that is still in progress.
    pub fn in_progress(student_id: impl Into<LearnerId>, course_id: impl Into<CourseId>) -> Self {
        Self {
            student_id: student_id.into(),
            course_id: course_id.into(),
            completed: false,
        }
    }
}

/// One assessment record for a learner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeResult {
    pub user_id: LearnerId,
    /// Score in the range 0-100.
    pub score: f64,
    pub skill: String,
}

impl ChallengeResult {
    pub fn new(user_id: impl Into<LearnerId>, score: f64, skill: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            score,
            skill: skill.into(),
        }
    }
}

/// A suggestion produced by a single rule, before deduplication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationCandidate {
    pub course_id: CourseId,
    pub title: String,
    pub reason: String,
}

impl RecommendationCandidate {
    /// Build a candidate pointing at `course`.
    pub fn for_course(course: &Course, reason: impl Into<String>) -> Self {
        Self {
            course_id: course.id.clone(),
            title: course.title.clone(),
            reason: reason.into(),
        }
    }
}

/// A final recommendation as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub course_id: CourseId,
    pub title: String,
    /// Human-readable, rule-specific explanation.
    pub reason: String,
}

impl From<RecommendationCandidate> for Recommendation {
    fn from(candidate: RecommendationCandidate) -> Self {
        Self {
            course_id: candidate.course_id,
            title: candidate.title,
            reason: candidate.reason,
        }
    }
}

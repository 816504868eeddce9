//! In-memory collaborators backed by a JSON snapshot.

use std::collections::HashSet;
use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{AssessmentStore, CourseCatalog, EnrollmentStore, Error, Result};
use crate::types::{ChallengeResult, Course, Enrollment, LearnerId};

/// A point-in-time export of catalog, enrollment and assessment data.
///
/// ```json
/// {
///   "courses": [{ "id": "A", "title": "Intro", "level": "beginner" }],
///   "enrollments": [{ "studentId": "u1", "courseId": "A", "completed": true }],
///   "challengeResults": [{ "userId": "u1", "score": 35, "skill": "Solidity" }]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub enrollments: Vec<Enrollment>,
    #[serde(default)]
    pub challenge_results: Vec<ChallengeResult>,
}

impl Snapshot {
    /// Parse and validate a snapshot from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Read, parse and validate a snapshot file.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path).await?;
        let snapshot = Self::from_json_str(&contents)?;

        tracing::info!(
            path = %path.display(),
            courses = snapshot.courses.len(),
            enrollments = snapshot.enrollments.len(),
            challenge_results = snapshot.challenge_results.len(),
            "Loaded catalog snapshot"
        );

        Ok(snapshot)
    }

    /// Check that course ids are unique and scores lie in 0-100.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for course in &self.courses {
            if !seen.insert(&course.id) {
                return Err(Error::InvalidData(format!(
                    "duplicate course id: {}",
                    course.id
                )));
            }
        }

        for result in &self.challenge_results {
            if !(0.0..=100.0).contains(&result.score) {
                return Err(Error::InvalidData(format!(
                    "score {} for learner {} on {} is outside 0-100",
                    result.score, result.user_id, result.skill
                )));
            }
        }

        Ok(())
    }
}

/// Immutable in-memory store implementing every collaborator trait.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    snapshot: Snapshot,
}

impl MemoryStore {
    /// Create a store over an already validated snapshot.
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    /// Load a snapshot file into a new store.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(Snapshot::load(path).await?))
    }

    /// Get the underlying snapshot.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }
}

impl From<Snapshot> for MemoryStore {
    fn from(snapshot: Snapshot) -> Self {
        Self::new(snapshot)
    }
}

#[async_trait]
impl EnrollmentStore for MemoryStore {
    async fn completed_enrollments(&self, learner: &LearnerId) -> Result<Vec<Enrollment>> {
        Ok(self
            .snapshot
            .enrollments
            .iter()
            .filter(|e| e.completed && &e.student_id == learner)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl CourseCatalog for MemoryStore {
    async fn published_courses(&self) -> Result<Vec<Course>> {
        Ok(self
            .snapshot
            .courses
            .iter()
            .filter(|c| c.is_published)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl AssessmentStore for MemoryStore {
    async fn challenge_results(&self, learner: &LearnerId) -> Result<Vec<ChallengeResult>> {
        Ok(self
            .snapshot
            .challenge_results
            .iter()
            .filter(|r| &r.user_id == learner)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CourseId;
    use std::io::Write;

    fn sample_snapshot() -> Snapshot {
        Snapshot {
            courses: vec![
                Course::new("A", "Intro", "beginner"),
                Course::new("B", "Advanced", "advanced").with_prerequisite("A"),
                Course::new("H", "Hidden", "beginner").unpublished(),
            ],
            enrollments: vec![
                Enrollment::completed("u1", "A"),
                Enrollment::in_progress("u1", "B"),
                Enrollment::completed("u2", "B"),
            ],
            challenge_results: vec![
                ChallengeResult::new("u1", 35.0, "Solidity"),
                ChallengeResult::new("u2", 90.0, "Rust"),
            ],
        }
    }

    #[tokio::test]
    async fn completed_enrollments_filters_by_learner_and_completion() {
        let store = MemoryStore::new(sample_snapshot());
        let enrollments = store
            .completed_enrollments(&LearnerId::from("u1"))
            .await
            .unwrap();

        assert_eq!(enrollments.len(), 1);
        assert_eq!(enrollments[0].course_id, CourseId::from("A"));
    }

    #[tokio::test]
    async fn published_courses_hides_unpublished() {
        let store = MemoryStore::new(sample_snapshot());
        let courses = store.published_courses().await.unwrap();

        let ids: Vec<&str> = courses.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn challenge_results_filters_by_learner() {
        let store = MemoryStore::new(sample_snapshot());
        let results = store
            .challenge_results(&LearnerId::from("u2"))
            .await
            .unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].skill, "Rust");
    }

    #[test]
    fn snapshot_rejects_duplicate_course_ids() {
        let json = r#"{"courses": [
            {"id": "A", "title": "One", "level": "beginner"},
            {"id": "A", "title": "Two", "level": "beginner"}
        ]}"#;
        let err = Snapshot::from_json_str(json).unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
    }

    #[test]
    fn snapshot_rejects_out_of_range_scores() {
        let json = r#"{"challengeResults": [{"userId": "u1", "score": 140, "skill": "Rust"}]}"#;
        let err = Snapshot::from_json_str(json).unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
    }

    #[test]
    fn snapshot_reports_malformed_json() {
        let err = Snapshot::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[tokio::test]
    async fn load_reads_snapshot_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&sample_snapshot()).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let store = MemoryStore::from_path(file.path()).await.unwrap();
        assert_eq!(store.snapshot(), &sample_snapshot());
    }

    #[tokio::test]
    async fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Snapshot::load(dir.path().join("missing.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}

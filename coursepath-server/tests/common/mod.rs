//! Shared fixtures for server integration tests.

use std::sync::Arc;

use axum_test::TestServer;
use coursepath_core::{
    ChallengeResult, Course, EngineConfig, Enrollment, MemoryStore, RecommendationEngine, Snapshot,
};
use coursepath_server::{AppState, create_router};

/// Learner with a beginner history, a low Solidity score and one
/// overlapping course.
pub const LEARNER: &str = "learner-1";

pub fn snapshot() -> Snapshot {
    Snapshot {
        courses: vec![
            Course::new("A", "Intro", "beginner"),
            Course::new("B", "Advanced", "advanced").with_prerequisite("A"),
            Course::new("Y", "Solidity Basics", "beginner").remedial_for("Solidity"),
            Course::new("Z", "Going Further", "intermediate"),
        ],
        enrollments: vec![
            Enrollment::completed(LEARNER, "A"),
            Enrollment::in_progress("learner-2", "A"),
        ],
        challenge_results: vec![ChallengeResult::new(LEARNER, 35.0, "Solidity")],
    }
}

pub fn state_for(engine: RecommendationEngine) -> Arc<AppState> {
    Arc::new(AppState::new(Arc::new(engine)))
}

pub fn test_server() -> TestServer {
    let engine = RecommendationEngine::from_store(
        Arc::new(MemoryStore::new(snapshot())),
        &EngineConfig::default(),
    );
    TestServer::new(create_router(state_for(engine))).unwrap()
}

pub mod config;
pub mod recommend;
pub mod rules;
pub mod serve;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use coursepath_core::{EngineConfig, MemoryStore, RecommendationEngine};

/// Build an engine over the catalog snapshot at `snapshot`.
pub async fn load_engine(snapshot: &Path, config: &EngineConfig) -> Result<RecommendationEngine> {
    let store = MemoryStore::from_path(snapshot)
        .await
        .with_context(|| format!("loading catalog snapshot {}", snapshot.display()))?;
    Ok(RecommendationEngine::from_store(Arc::new(store), config))
}

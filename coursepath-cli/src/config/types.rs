use coursepath_core::EngineConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default port for the coursepath server
pub const DEFAULT_PORT: u16 = 7480;

/// Default host for the coursepath server
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Configuration as stored in TOML files (with optional fields for merging)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawCoursepathConfig {
    #[serde(default)]
    pub server: RawServerConfig,

    #[serde(default)]
    pub catalog: RawCatalogConfig,

    #[serde(default)]
    pub engine: RawEngineConfig,
}

/// Server config as stored in TOML (optional fields for proper merging)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawServerConfig {
    /// Host for the coursepath server
    pub host: Option<String>,

    /// Port for the coursepath server
    pub port: Option<u16>,
}

/// Catalog config as stored in TOML
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawCatalogConfig {
    /// Path to the JSON catalog snapshot
    pub snapshot: Option<PathBuf>,
}

/// Engine thresholds as stored in TOML
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawEngineConfig {
    pub weak_score_threshold: Option<f64>,
    pub beginner_ratio_threshold: Option<f64>,
}

/// Final configuration with defaults applied
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CoursepathConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub engine: EngineConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host for the coursepath server
    pub host: String,

    /// Port for the coursepath server
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to the JSON catalog snapshot
    pub snapshot: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            snapshot: coursepath_paths::default_snapshot_path(),
        }
    }
}

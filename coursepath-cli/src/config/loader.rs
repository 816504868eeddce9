use super::types::{
    CatalogConfig, CoursepathConfig, DEFAULT_HOST, DEFAULT_PORT, RawCatalogConfig,
    RawCoursepathConfig, RawEngineConfig, RawServerConfig, ServerConfig,
};
use anyhow::{Context, Result};
use coursepath_core::EngineConfig;
use std::path::{Path, PathBuf};

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load merged configuration (user + project)
    pub fn load() -> Result<CoursepathConfig> {
        Self::load_from(&[Self::user_config_path(), Self::project_config_path()])
    }

    /// Load and merge config files in order; later files override earlier ones.
    /// Missing files are skipped.
    pub fn load_from(paths: &[PathBuf]) -> Result<CoursepathConfig> {
        let mut raw = RawCoursepathConfig::default();

        for path in paths {
            if let Some(layer) = Self::read_raw(path)? {
                tracing::debug!("Loaded config layer from {}", path.display());
                raw = Self::merge_raw(raw, layer);
            }
        }

        Ok(Self::finalize(raw))
    }

    /// Get user config path
    pub fn user_config_path() -> PathBuf {
        coursepath_paths::config_dir().join("config.toml")
    }

    /// Get project config path
    /// Can be overridden with COURSEPATH_PROJECT_CONFIG_DIR env var (useful for isolated tests)
    pub fn project_config_path() -> PathBuf {
        if let Ok(dir) = std::env::var("COURSEPATH_PROJECT_CONFIG_DIR") {
            PathBuf::from(dir).join("config.toml")
        } else {
            PathBuf::from(".coursepath/config.toml")
        }
    }

    fn read_raw(path: &Path) -> Result<Option<RawCoursepathConfig>> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let raw = toml::from_str(&contents)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(Some(raw))
    }

    /// Merge two raw configs (overlay values override base only if explicitly set)
    fn merge_raw(base: RawCoursepathConfig, overlay: RawCoursepathConfig) -> RawCoursepathConfig {
        RawCoursepathConfig {
            server: RawServerConfig {
                host: overlay.server.host.or(base.server.host),
                port: overlay.server.port.or(base.server.port),
            },
            catalog: RawCatalogConfig {
                snapshot: overlay.catalog.snapshot.or(base.catalog.snapshot),
            },
            engine: RawEngineConfig {
                weak_score_threshold: overlay
                    .engine
                    .weak_score_threshold
                    .or(base.engine.weak_score_threshold),
                beginner_ratio_threshold: overlay
                    .engine
                    .beginner_ratio_threshold
                    .or(base.engine.beginner_ratio_threshold),
            },
        }
    }

    /// Convert raw config to final config with defaults applied
    fn finalize(raw: RawCoursepathConfig) -> CoursepathConfig {
        let engine_defaults = EngineConfig::default();
        CoursepathConfig {
            server: ServerConfig {
                host: raw.server.host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
                port: raw.server.port.unwrap_or(DEFAULT_PORT),
            },
            catalog: raw
                .catalog
                .snapshot
                .map(|snapshot| CatalogConfig { snapshot })
                .unwrap_or_default(),
            engine: EngineConfig {
                weak_score_threshold: raw
                    .engine
                    .weak_score_threshold
                    .unwrap_or(engine_defaults.weak_score_threshold),
                beginner_ratio_threshold: raw
                    .engine
                    .beginner_ratio_threshold
                    .unwrap_or(engine_defaults.beginner_ratio_threshold),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_missing_files_give_defaults() {
        let dir = TempDir::new().unwrap();
        let config = ConfigLoader::load_from(&[dir.path().join("nope.toml")]).unwrap();

        assert_eq!(config.server.port, DEFAULT_PORT);
        assert_eq!(config.server.host, DEFAULT_HOST);
        assert_eq!(config.engine, EngineConfig::default());
    }

    #[test]
    fn test_project_overrides_user() {
        let dir = TempDir::new().unwrap();
        let user = write(
            &dir,
            "user.toml",
            r#"
[server]
host = "0.0.0.0"
port = 9000

[catalog]
snapshot = "/data/user.json"
"#,
        );
        let project = write(
            &dir,
            "project.toml",
            r#"
[server]
port = 9100

[engine]
beginner_ratio_threshold = 0.5
"#,
        );

        let config = ConfigLoader::load_from(&[user, project]).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.catalog.snapshot, PathBuf::from("/data/user.json"));
        assert_eq!(config.engine.beginner_ratio_threshold, 0.5);
        assert_eq!(config.engine.weak_score_threshold, 50.0);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = TempDir::new().unwrap();
        let bad = write(&dir, "bad.toml", "[server\nport = ");

        let err = ConfigLoader::load_from(&[bad]).unwrap_err();
        assert!(err.to_string().contains("parsing"));
    }

    #[test]
    #[serial]
    fn test_project_config_path_env_override() {
        unsafe {
            std::env::set_var("COURSEPATH_PROJECT_CONFIG_DIR", "/tmp/cp-project");
        }
        let path = ConfigLoader::project_config_path();
        unsafe {
            std::env::remove_var("COURSEPATH_PROJECT_CONFIG_DIR");
        }

        assert_eq!(path, PathBuf::from("/tmp/cp-project/config.toml"));
        assert_eq!(
            ConfigLoader::project_config_path(),
            PathBuf::from(".coursepath/config.toml")
        );
    }
}

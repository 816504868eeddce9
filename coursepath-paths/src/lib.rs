//! XDG Base Directory paths for coursepath.
//!
//! CLI tools should use XDG paths for cross-platform consistency,
//! not platform-native paths.

use std::path::PathBuf;

const APP_DIR: &str = "coursepath";

/// Get the coursepath config directory.
///
/// Returns `$XDG_CONFIG_HOME/coursepath` if set, otherwise `~/.config/coursepath`.
///
/// # Examples
///
/// ```
/// use coursepath_paths::config_dir;
///
/// let config_file = config_dir().join("config.toml");
/// ```
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg_config).join(APP_DIR)
    } else if let Some(home) = dirs::home_dir() {
        home.join(".config").join(APP_DIR)
    } else {
        PathBuf::from(".config").join(APP_DIR)
    }
}

/// Get the coursepath data directory.
///
/// Returns `$XDG_DATA_HOME/coursepath` if set, otherwise `~/.local/share/coursepath`.
/// The default catalog snapshot lives here.
pub fn data_dir() -> PathBuf {
    if let Ok(xdg_data) = std::env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg_data).join(APP_DIR)
    } else if let Some(home) = dirs::home_dir() {
        home.join(".local/share").join(APP_DIR)
    } else {
        PathBuf::from(".local/share").join(APP_DIR)
    }
}

/// Default location of the catalog snapshot file.
pub fn default_snapshot_path() -> PathBuf {
    data_dir().join("snapshot.json")
}

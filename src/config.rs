use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, TagError};

/// Config file looked up in the current directory
pub const LOCAL_CONFIG_FILE: &str = "buildtags.toml";

/// Config file looked up in the user config directory
pub const USER_CONFIG_FILE: &str = ".buildtags.toml";

/// Returns the default path of the dev marker file.
fn default_dev_marker_path() -> PathBuf {
    PathBuf::from("hack/DEV_BUILD_VERSION.yaml")
}

/// Returns the default path of the new-version marker file.
fn default_release_marker_path() -> PathBuf {
    PathBuf::from("hack/NEW_BUILD_VERSION")
}

/// Returns the dev tag written after a GA release.
fn default_dev_baseline() -> String {
    "dev.1".to_string()
}

/// Represents the complete configuration for build-tags.
///
/// Paths are resolved relative to the current working directory unless absolute.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_dev_marker_path")]
    pub dev_marker_path: PathBuf,

    #[serde(default = "default_release_marker_path")]
    pub release_marker_path: PathBuf,

    #[serde(default = "default_dev_baseline")]
    pub dev_baseline: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            dev_marker_path: default_dev_marker_path(),
            release_marker_path: default_release_marker_path(),
            dev_baseline: default_dev_baseline(),
        }
    }
}

impl Config {
    /// Applies marker path overrides given on the command line.
    pub fn with_overrides(mut self, dev: Option<PathBuf>, release: Option<PathBuf>) -> Self {
        if let Some(path) = dev {
            self.dev_marker_path = path;
        }
        if let Some(path) = release {
            self.release_marker_path = path;
        }
        self
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `buildtags.toml` in current directory
/// 3. `.buildtags.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed, or the custom path is missing
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    if let Some(path) = config_path {
        return read_config(Path::new(path));
    }

    let local = Path::new(LOCAL_CONFIG_FILE);
    if local.exists() {
        return read_config(local);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let user = config_dir.join(USER_CONFIG_FILE);
        if user.exists() {
            return read_config(&user);
        }
    }

    tracing::debug!("no config file found, using defaults");
    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    tracing::debug!(path = %path.display(), "loading config");
    let config_str = fs::read_to_string(path)
        .map_err(|e| TagError::config(format!("cannot read '{}': {}", path.display(), e)))?;
    toml::from_str(&config_str)
        .map_err(|e| TagError::config(format!("cannot parse '{}': {}", path.display(), e)))
}

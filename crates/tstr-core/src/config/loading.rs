//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.tstr/config.toml` (global user preferences)
//! 3. **Project config** - `./.tstr/config.toml` (project-specific overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority)

use crate::config::types::{BackendConfig, DashboardConfig, PollingConfig};
use crate::errors::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = ".tstr";
const CONFIG_FILE: &str = "config.toml";

/// Load configuration from the hierarchy of config files.
///
/// Loads and merges configuration from:
/// 1. Default values
/// 2. User config (`~/.tstr/config.toml`)
/// 3. Project config (`./.tstr/config.toml`)
///
/// # Errors
///
/// Returns an error if a config file exists but cannot be read or parsed.
/// Missing config files are not errors. The result is not validated: CLI
/// overrides still have to be applied, so callers validate the final config.
pub fn load_hierarchy() -> Result<DashboardConfig, ConfigError> {
    let user_path = dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE));
    let project_path = std::env::current_dir()?.join(CONFIG_DIR).join(CONFIG_FILE);
    load_from_paths(user_path.as_deref(), &project_path)
}

/// Load and merge the user and project config files at explicit paths.
pub fn load_from_paths(
    user_path: Option<&Path>,
    project_path: &Path,
) -> Result<DashboardConfig, ConfigError> {
    let mut config = DashboardConfig::default();

    if let Some(path) = user_path
        && let Some(user_config) = load_config_file(path)?
    {
        config = merge_configs(config, user_config);
    }

    if let Some(project_config) = load_config_file(project_path)? {
        config = merge_configs(config, project_config);
    }

    Ok(config)
}

/// Load a configuration file from the given path.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn load_config_file(path: &Path) -> Result<Option<DashboardConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(
                event = "core.config.file_not_found",
                path = %path.display()
            );
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    let config = toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    tracing::debug!(event = "core.config.file_loaded", path = %path.display());

    Ok(Some(config))
}

/// Project-level config path relative to a working directory.
pub fn project_config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Merge two configurations, with override_config taking precedence.
///
/// Override values replace base values only if present.
pub fn merge_configs(base: DashboardConfig, override_config: DashboardConfig) -> DashboardConfig {
    DashboardConfig {
        backend: BackendConfig {
            base_url: override_config.backend.base_url.or(base.backend.base_url),
            request_timeout_secs: override_config
                .backend
                .request_timeout_secs
                .or(base.backend.request_timeout_secs),
        },
        polling: PollingConfig {
            heads_interval_ms: override_config
                .polling
                .heads_interval_ms
                .or(base.polling.heads_interval_ms),
            bench_interval_ms: override_config
                .polling
                .bench_interval_ms
                .or(base.polling.bench_interval_ms),
            workqueue_interval_ms: override_config
                .polling
                .workqueue_interval_ms
                .or(base.polling.workqueue_interval_ms),
        },
    }
}

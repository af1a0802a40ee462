//! Configuration type definitions for the tstr dashboard.
//!
//! These types are serialized/deserialized from TOML config files. Every
//! setting is optional in the file; accessors resolve the built-in default
//! so that merging can tell "unset" apart from "explicitly set".
//!
//! # Example Configuration
//!
//! ```toml
//! [backend]
//! base_url = "http://localhost:8080"
//!
//! [polling]
//! workqueue_interval_ms = 5000
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::defaults;

/// Main configuration loaded from TOML config files.
///
/// Loaded from:
/// 1. User config: `~/.tstr/config.toml`
/// 2. Project config: `./.tstr/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DashboardConfig {
    /// Where the backend API lives and how long to wait for it
    #[serde(default)]
    pub backend: BackendConfig,

    /// Per-feed refresh cadence
    #[serde(default)]
    pub polling: PollingConfig,
}

/// Backend connection settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct BackendConfig {
    /// Base URL the `/api/...` paths are appended to.
    /// Default: `http://localhost:8080`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds.
    /// Default: 10 seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

/// Polling intervals, in milliseconds, measured from the moment one fetch
/// settles to the start of the next.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PollingConfig {
    /// Default: 30000 (30 seconds).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heads_interval_ms: Option<u64>,

    /// Default: 30000 (30 seconds).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bench_interval_ms: Option<u64>,

    /// Default: 10000 (10 seconds).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workqueue_interval_ms: Option<u64>,
}

impl BackendConfig {
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(defaults::DEFAULT_BASE_URL)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .unwrap_or(defaults::DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }
}

impl PollingConfig {
    pub fn heads_interval(&self) -> Duration {
        Duration::from_millis(
            self.heads_interval_ms
                .unwrap_or(defaults::DEFAULT_HEADS_INTERVAL_MS),
        )
    }

    pub fn bench_interval(&self) -> Duration {
        Duration::from_millis(
            self.bench_interval_ms
                .unwrap_or(defaults::DEFAULT_BENCH_INTERVAL_MS),
        )
    }

    pub fn workqueue_interval(&self) -> Duration {
        Duration::from_millis(
            self.workqueue_interval_ms
                .unwrap_or(defaults::DEFAULT_WORKQUEUE_INTERVAL_MS),
        )
    }
}

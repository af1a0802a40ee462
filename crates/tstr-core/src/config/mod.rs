//! # Configuration System
//!
//! Hierarchical TOML configuration for the tstr dashboard.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.tstr/config.toml` (global user preferences)
//! 3. **Project config** - `./.tstr/config.toml` (project-specific overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority)
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.tstr/config.toml
//! [backend]
//! base_url = "http://tstr.example.com"
//! request_timeout_secs = 10
//!
//! [polling]
//! heads_interval_ms = 30000
//! bench_interval_ms = 30000
//! workqueue_interval_ms = 10000
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use tstr_core::config::DashboardConfig;
//!
//! fn example() -> Result<(), tstr_core::ConfigError> {
//!     let config = DashboardConfig::load_hierarchy()?;
//!     let every = config.polling.heads_interval();
//!     println!("polling heads every {:?} from {}", every, config.backend.base_url());
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

// Public API exports
pub use types::{BackendConfig, DashboardConfig, PollingConfig};
pub use validation::validate_config;

impl DashboardConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}

//! Configuration validation logic.
//!
//! Checks resolved values before they reach the HTTP client or the
//! refresh schedulers.

use crate::config::types::DashboardConfig;
use crate::errors::ConfigError;

/// URL schemes the backend client can talk to.
pub const VALID_SCHEMES: [&str; 2] = ["http://", "https://"];

/// Validate a DashboardConfig, returning an error if any values are invalid.
///
/// # Validation Rules
///
/// - Backend base URL must use one of [`VALID_SCHEMES`]
/// - Request timeout must be non-zero
/// - Every polling interval must be non-zero
///
/// # Errors
///
/// Returns `ConfigError::InvalidConfiguration` naming the offending setting.
pub fn validate_config(config: &DashboardConfig) -> Result<(), ConfigError> {
    let base_url = config.backend.base_url();
    if !VALID_SCHEMES
        .iter()
        .any(|scheme| base_url.starts_with(scheme))
    {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "Invalid backend base_url '{}'. Must start with {}",
                base_url,
                VALID_SCHEMES.join(" or ")
            ),
        });
    }

    if config.backend.request_timeout().is_zero() {
        return Err(ConfigError::InvalidConfiguration {
            message: "backend.request_timeout_secs must be greater than zero".to_string(),
        });
    }

    let intervals = [
        ("heads_interval_ms", config.polling.heads_interval()),
        ("bench_interval_ms", config.polling.bench_interval()),
        ("workqueue_interval_ms", config.polling.workqueue_interval()),
    ];
    for (name, interval) in intervals {
        if interval.is_zero() {
            return Err(ConfigError::InvalidConfiguration {
                message: format!("polling.{} must be greater than zero", name),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&DashboardConfig::default()).is_ok());
    }

    #[test]
    fn test_rejects_unknown_scheme() {
        let mut config = DashboardConfig::default();
        config.backend.base_url = Some("ftp://tstr.local".to_string());

        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("ftp://tstr.local"));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let mut config = DashboardConfig::default();
        config.backend.request_timeout_secs = Some(0);
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_rejects_zero_interval() {
        let mut config = DashboardConfig::default();
        config.polling.workqueue_interval_ms = Some(0);

        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("workqueue_interval_ms"));
    }
}

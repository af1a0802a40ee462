//! Built-in fallback values for configuration settings.

/// Backend base URL used when no config file sets one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Per-request timeout. A request that exceeds it counts as a failed poll.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Heads (branches and pull requests) feed interval.
pub const DEFAULT_HEADS_INTERVAL_MS: u64 = 30_000;

/// Benchmark results feed interval.
pub const DEFAULT_BENCH_INTERVAL_MS: u64 = 30_000;

/// Work-queue feed interval.
pub const DEFAULT_WORKQUEUE_INTERVAL_MS: u64 = 10_000;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;

    #[test]
    fn test_default_config_resolves_documented_values() {
        let config = DashboardConfig::default();
        assert_eq!(config.backend.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.polling.heads_interval().as_millis(), 30_000);
        assert_eq!(config.polling.bench_interval().as_millis(), 30_000);
        assert_eq!(config.polling.workqueue_interval().as_millis(), 10_000);
    }
}

//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Every default matches the behavior of the fixed-constant probe.

use serde::{Deserialize, Serialize};

/// Root configuration for a probe run.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ProbeConfig {
    /// The endpoint being probed.
    pub target: TargetConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Loop limits and thresholds.
    pub probe: ProbeSettings,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Target endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TargetConfig {
    /// Absolute http(s) URL to GET.
    pub url: String,

    /// Honor `HTTP_PROXY`/`HTTPS_PROXY` from the environment.
    pub use_system_proxy: bool,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            url: "https://diplomabazar.vercel.app/api/test".to_string(),
            use_system_proxy: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Per-request timeout (send through response headers) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 10 }
    }
}

/// Loop limits and thresholds.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProbeSettings {
    /// Upper bound on requests sent in one run.
    pub max_requests: u32,

    /// Pause between consecutive requests in milliseconds.
    pub delay_ms: u64,

    /// Number of 429 responses after which the run stops.
    pub stop_after_rate_limited: u32,

    /// Remaining quota at or below which a warning is printed.
    pub low_quota_threshold: i64,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            max_requests: 100,
            delay_ms: 100,
            stop_after_rate_limited: 5,
            low_quota_threshold: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Fallback log filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fixed_probe() {
        let config = ProbeConfig::default();
        assert_eq!(config.target.url, "https://diplomabazar.vercel.app/api/test");
        assert_eq!(config.timeouts.request_secs, 10);
        assert_eq!(config.probe.max_requests, 100);
        assert_eq!(config.probe.delay_ms, 100);
        assert_eq!(config.probe.stop_after_rate_limited, 5);
        assert_eq!(config.probe.low_quota_threshold, 5);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: ProbeConfig = toml::from_str(
            r#"
            [probe]
            max_requests = 20
            "#,
        )
        .unwrap();

        assert_eq!(config.probe.max_requests, 20);
        assert_eq!(config.probe.delay_ms, 100);
        assert_eq!(config.timeouts.request_secs, 10);
        assert_eq!(config.observability.log_level, "info");
    }
}

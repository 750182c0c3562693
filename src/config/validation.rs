//! Configuration validation.
//!
//! Returns all validation errors, not just the first. Runs before the
//! config is handed to the probe runner.

use thiserror::Error;
use url::Url;

use crate::config::schema::ProbeConfig;

/// A single semantic problem with a [`ProbeConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("target.url {url:?} is not a valid URL: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("target.url scheme must be http or https, got {0:?}")]
    UnsupportedScheme(String),

    #[error("{0} must be greater than zero")]
    Zero(&'static str),
}

/// Check a config for semantic errors.
pub fn validate_config(config: &ProbeConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.target.url) {
        Ok(url) => {
            if url.scheme() != "http" && url.scheme() != "https" {
                errors.push(ValidationError::UnsupportedScheme(url.scheme().to_string()));
            }
        }
        Err(e) => errors.push(ValidationError::InvalidUrl {
            url: config.target.url.clone(),
            reason: e.to_string(),
        }),
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::Zero("timeouts.request_secs"));
    }
    if config.probe.max_requests == 0 {
        errors.push(ValidationError::Zero("probe.max_requests"));
    }
    if config.probe.stop_after_rate_limited == 0 {
        errors.push(ValidationError::Zero("probe.stop_after_rate_limited"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

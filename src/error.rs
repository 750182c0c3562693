//! Fatal errors.
//!
//! Per-request failures are outcomes, not errors; nothing here is raised
//! once the probe loop has started, except a failure to write the report.

use thiserror::Error;

use crate::config::loader::ConfigError;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid target URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

pub type ProbeResult<T> = Result<T, ProbeError>;

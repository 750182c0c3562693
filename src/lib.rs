//! Rate Limiting Probe Library

pub mod config;
pub mod error;
pub mod observability;
pub mod probe;
pub mod report;

pub use config::schema::ProbeConfig;
pub use error::{ProbeError, ProbeResult};
pub use probe::{ProbeRunner, RunReport};
pub use report::Verdict;

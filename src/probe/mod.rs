//! Probe subsystem.
//!
//! # Data Flow
//! ```text
//! for index in 1..=max_requests:
//!     runner.rs (GET with timeout)
//!     → outcome.rs (classify status, headers, 429 body)
//!         → headers.rs (quota snapshot)
//!     → counters.rs (tally)
//!     → report (console line)
//!     → early stop after N rate limits, else sleep and continue
//! report::summary after the loop
//! ```

pub mod counters;
pub mod headers;
pub mod outcome;
pub mod runner;

pub use counters::RunCounters;
pub use headers::RateLimitSnapshot;
pub use outcome::Outcome;
pub use runner::{ProbeRunner, RunReport};

//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! probe runner
//!     → logging.rs (structured tracing events on stderr)
//!
//! console report (stdout) stays separate from the log stream
//! ```

pub mod logging;

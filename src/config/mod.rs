//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults (the fixed probe constants)
//!     → loader.rs (optional TOML file, parse & deserialize)
//!     → CLI overrides (--url)
//!     → validation.rs (semantic checks)
//!     → ProbeConfig (validated, immutable for the run)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so running with no file matches the fixed probe
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::ObservabilityConfig;
pub use schema::ProbeConfig;
pub use schema::ProbeSettings;
pub use schema::TargetConfig;
pub use schema::TimeoutConfig;

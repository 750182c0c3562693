//! Console reporting.
//!
//! Line-oriented, human-readable text. Every function writes to a caller
//! supplied sink so the binary can use stdout and tests a buffer.

pub mod console;
pub mod summary;

pub use console::{write_banner, write_early_stop, write_outcome};
pub use summary::{write_summary, Verdict};

pub(crate) const RULE: &str = "==================================================";

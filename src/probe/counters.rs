//! Run counters.

use crate::probe::outcome::Outcome;

/// Tallies for one probe run. Starts at zero, lives for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunCounters {
    pub successes: u32,
    pub rate_limited: u32,
    pub errors: u32,
}

impl RunCounters {
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Success { .. } => self.successes += 1,
            Outcome::RateLimited { .. } => self.rate_limited += 1,
            Outcome::ServerError { .. } | Outcome::TransportError { .. } => self.errors += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.successes + self.rate_limited + self.errors
    }
}

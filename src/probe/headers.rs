//! Rate-limit header extraction.

use reqwest::header::HeaderMap;

pub const REMAINING: &str = "x-ratelimit-remaining";
pub const LIMIT: &str = "x-ratelimit-limit";
pub const RESET: &str = "x-ratelimit-reset";
pub const RETRY_AFTER: &str = "retry-after";

/// Placeholder shown for a header that is absent or not valid text.
pub const NOT_AVAILABLE: &str = "N/A";

/// Quota headers read from a single response, kept as display strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitSnapshot {
    pub remaining: String,
    pub limit: String,
    pub reset: String,
    pub retry_after: String,
}

impl RateLimitSnapshot {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            remaining: header_or_na(headers, REMAINING),
            limit: header_or_na(headers, LIMIT),
            reset: header_or_na(headers, RESET),
            retry_after: header_or_na(headers, RETRY_AFTER),
        }
    }

    /// Remaining quota as a number, if the server sent one.
    pub fn remaining_count(&self) -> Option<i64> {
        self.remaining.trim().parse().ok()
    }

    /// True when the remaining quota is numeric and at or below `threshold`.
    pub fn is_low(&self, threshold: i64) -> bool {
        self.remaining_count().is_some_and(|n| n <= threshold)
    }
}

fn header_or_na(headers: &HeaderMap, name: &str) -> String {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

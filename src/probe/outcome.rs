//! Per-request response classification.

use std::error::Error as StdError;
use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde_json::Value;

use crate::probe::headers::RateLimitSnapshot;

/// What a single probe request turned into.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// 200 OK.
    Success {
        quota: RateLimitSnapshot,
        elapsed: Duration,
    },
    /// 429 Too Many Requests.
    RateLimited {
        quota: RateLimitSnapshot,
        /// The `current` field of a JSON body, when the server sent one.
        current: Option<Value>,
    },
    /// Any other status code.
    ServerError { status: StatusCode },
    /// The request never produced a response (timeout, refused, DNS, TLS).
    TransportError { message: String },
}

impl Outcome {
    /// Classify a response. `body` is only consulted for 429s.
    pub fn classify(
        status: StatusCode,
        headers: &HeaderMap,
        body: Option<&[u8]>,
        elapsed: Duration,
    ) -> Self {
        match status {
            StatusCode::OK => Outcome::Success {
                quota: RateLimitSnapshot::from_headers(headers),
                elapsed,
            },
            StatusCode::TOO_MANY_REQUESTS => Outcome::RateLimited {
                quota: RateLimitSnapshot::from_headers(headers),
                current: body.and_then(current_field),
            },
            status => Outcome::ServerError { status },
        }
    }

    pub fn from_transport_error(err: &(dyn StdError + 'static)) -> Self {
        Outcome::TransportError {
            message: error_chain(err),
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Outcome::RateLimited { .. })
    }
}

/// Malformed or non-object bodies yield `None`.
fn current_field(body: &[u8]) -> Option<Value> {
    serde_json::from_slice::<Value>(body)
        .ok()?
        .get("current")
        .cloned()
}

/// Render an error with its sources, e.g.
/// `error sending request for url (...): client error (Connect): connection refused`.
fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

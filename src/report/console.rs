//! Per-request lines.

use std::io::{self, Write};

use crate::probe::Outcome;
use crate::report::RULE;

pub fn write_banner<W: Write>(out: &mut W, url: &str) -> io::Result<()> {
    writeln!(out, "🔍 RATE LIMITING PROBE")?;
    writeln!(out, "Target: {}", url)?;
    writeln!(out, "{}", RULE)
}

/// Write the line(s) for request `index`.
pub fn write_outcome<W: Write>(
    out: &mut W,
    index: u32,
    outcome: &Outcome,
    low_quota_threshold: i64,
) -> io::Result<()> {
    match outcome {
        Outcome::Success { quota, elapsed } => {
            writeln!(
                out,
                "✅ Request {}: Status 200 - Remaining: {}/{} - Time: {:.2}s",
                index,
                quota.remaining,
                quota.limit,
                elapsed.as_secs_f64()
            )?;
            if quota.is_low(low_quota_threshold) {
                writeln!(out, "   ⚠️  WARNING: Only {} requests remaining!", quota.remaining)?;
            }
        }
        Outcome::RateLimited { quota, current } => {
            writeln!(out, "🚫 Request {}: Status 429 - RATE LIMITED!", index)?;
            writeln!(out, "   Retry-After: {}", quota.retry_after)?;
            writeln!(out, "   Reset: {}", quota.reset)?;
            if let Some(current) = current {
                writeln!(out, "   Current: {}", current)?;
            }
        }
        Outcome::ServerError { status } => {
            writeln!(out, "❌ Request {}: Status {} - ERROR", index, status.as_u16())?;
        }
        Outcome::TransportError { message } => {
            writeln!(out, "❌ Request {}: ERROR - {}", index, message)?;
        }
    }
    Ok(())
}

pub fn write_early_stop<W: Write>(out: &mut W, rate_limited: u32) -> io::Result<()> {
    writeln!(out, "   🛑 Stopping after {} rate limits", rate_limited)
}

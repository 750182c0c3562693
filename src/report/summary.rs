//! Final tallies and verdict.

use std::fmt;
use std::io::{self, Write};

use crate::probe::RunCounters;
use crate::report::RULE;

/// Conclusion drawn from a run.
///
/// A single observed 429 counts as a working limiter. Limiters whose
/// threshold is above the request budget will read as `NotObserved`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Working,
    NotObserved,
}

impl Verdict {
    pub fn from_counters(counters: &RunCounters) -> Self {
        if counters.rate_limited > 0 {
            Verdict::Working
        } else {
            Verdict::NotObserved
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Working => write!(f, "RATE LIMITING IS WORKING!"),
            Verdict::NotObserved => write!(f, "RATE LIMITING MAY NOT BE WORKING"),
        }
    }
}

pub fn write_summary<W: Write>(out: &mut W, counters: &RunCounters) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "📊 PROBE RESULTS")?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "✅ Successful Requests: {}", counters.successes)?;
    writeln!(out, "🚫 Rate Limited Requests: {}", counters.rate_limited)?;
    writeln!(out, "❌ Error Requests: {}", counters.errors)?;
    writeln!(out, "📋 Total Requests Sent: {}", counters.total())?;
    writeln!(out)?;

    let verdict = Verdict::from_counters(counters);
    match verdict {
        Verdict::Working => {
            writeln!(out, "✅✅✅ {} ✅✅✅", verdict)?;
            writeln!(
                out,
                "🛡️  Rate limit triggered after {} successful requests",
                counters.successes
            )?;
            writeln!(out, "Your API is protected from abuse!")
        }
        Verdict::NotObserved => {
            writeln!(out, "⚠️  {}", verdict)?;
            writeln!(
                out,
                "🤔 {} requests succeeded without rate limiting",
                counters.successes
            )?;
            writeln!(out, "This could indicate a configuration issue.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(counters: RunCounters) -> String {
        let mut buf = Vec::new();
        write_summary(&mut buf, &counters).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_working_verdict() {
        let counters = RunCounters { successes: 10, rate_limited: 5, errors: 0 };
        assert_eq!(Verdict::from_counters(&counters), Verdict::Working);

        let text = render(counters);
        assert!(text.contains("📋 Total Requests Sent: 15"));
        assert!(text.contains("✅✅✅ RATE LIMITING IS WORKING! ✅✅✅"));
        assert!(text.contains("Rate limit triggered after 10 successful requests"));
        assert!(!text.contains("MAY NOT"));
    }

    #[test]
    fn test_not_observed_verdict() {
        let counters = RunCounters { successes: 97, rate_limited: 0, errors: 3 };
        assert_eq!(Verdict::from_counters(&counters), Verdict::NotObserved);

        let text = render(counters);
        assert!(text.contains("❌ Error Requests: 3"));
        assert!(text.contains("📋 Total Requests Sent: 100"));
        assert!(text.contains("RATE LIMITING MAY NOT BE WORKING"));
        assert!(text.contains("97 requests succeeded without rate limiting"));
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(Verdict::Working.to_string(), "RATE LIMITING IS WORKING!");
        assert_eq!(Verdict::NotObserved.to_string(), "RATE LIMITING MAY NOT BE WORKING");
    }

    #[test]
    fn test_all_errors_is_not_observed() {
        let counters = RunCounters { successes: 0, rate_limited: 0, errors: 100 };
        assert_eq!(Verdict::from_counters(&counters), Verdict::NotObserved);
    }
}

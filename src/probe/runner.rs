//! Sequential probe loop.

use std::io::Write;
use std::time::{Duration, Instant};

use reqwest::{Client, StatusCode, Url};
use tracing::Instrument;
use uuid::Uuid;

use crate::config::ProbeConfig;
use crate::error::{ProbeError, ProbeResult};
use crate::probe::counters::RunCounters;
use crate::probe::outcome::Outcome;
use crate::report::{self, Verdict};

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub run_id: Uuid,
    pub counters: RunCounters,
    /// Requests actually sent. Always equals `counters.total()`.
    pub executed: u32,
    pub stopped_early: bool,
}

impl RunReport {
    pub fn verdict(&self) -> Verdict {
        Verdict::from_counters(&self.counters)
    }
}

/// Issues GET requests one at a time against a single target.
pub struct ProbeRunner {
    client: Client,
    url: Url,
    config: ProbeConfig,
}

impl ProbeRunner {
    pub fn new(config: ProbeConfig) -> ProbeResult<Self> {
        let url = Url::parse(&config.target.url)?;

        let mut builder =
            Client::builder().timeout(Duration::from_secs(config.timeouts.request_secs));
        if !config.target.use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build().map_err(ProbeError::Client)?;

        Ok(Self { client, url, config })
    }

    /// Run the probe to completion, writing the console report to `out`.
    pub async fn run<W: Write>(&self, out: &mut W) -> ProbeResult<RunReport> {
        let run_id = Uuid::new_v4();
        let span = tracing::info_span!("probe_run", %run_id, url = %self.url);
        self.run_loop(run_id, out).instrument(span).await
    }

    async fn run_loop<W: Write>(&self, run_id: Uuid, out: &mut W) -> ProbeResult<RunReport> {
        let settings = &self.config.probe;
        tracing::info!(
            max_requests = settings.max_requests,
            delay_ms = settings.delay_ms,
            stop_after_rate_limited = settings.stop_after_rate_limited,
            "Probe starting"
        );

        report::write_banner(out, self.url.as_str())?;

        let mut counters = RunCounters::default();
        let mut executed = 0;
        let mut stopped_early = false;
        let delay = Duration::from_millis(settings.delay_ms);

        for index in 1..=settings.max_requests {
            let outcome = self.probe_once(index).await;
            counters.record(&outcome);
            executed = index;

            report::write_outcome(out, index, &outcome, settings.low_quota_threshold)?;

            if outcome.is_rate_limited() && counters.rate_limited >= settings.stop_after_rate_limited {
                report::write_early_stop(out, counters.rate_limited)?;
                tracing::info!(index, rate_limited = counters.rate_limited, "Stopping early");
                stopped_early = true;
                break;
            }

            if index < settings.max_requests && !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
        }

        report::write_summary(out, &counters)?;
        out.flush()?;

        let report = RunReport {
            run_id,
            counters,
            executed,
            stopped_early,
        };

        tracing::info!(
            executed,
            successes = counters.successes,
            rate_limited = counters.rate_limited,
            errors = counters.errors,
            verdict = %report.verdict(),
            "Probe finished"
        );

        Ok(report)
    }

    async fn probe_once(&self, index: u32) -> Outcome {
        let start = Instant::now();

        match self.client.get(self.url.clone()).send().await {
            Ok(response) => {
                let elapsed = start.elapsed();
                let status = response.status();
                let headers = response.headers().clone();

                // Only 429 bodies are inspected; read failures drop the `current` display.
                let body = if status == StatusCode::TOO_MANY_REQUESTS {
                    response.bytes().await.ok()
                } else {
                    None
                };

                tracing::debug!(
                    index,
                    status = status.as_u16(),
                    elapsed_ms = elapsed.as_millis() as u64,
                    "Response received"
                );

                Outcome::classify(status, &headers, body.as_deref(), elapsed)
            }
            Err(e) => {
                tracing::debug!(
                    index,
                    error = %e,
                    timeout = e.is_timeout(),
                    connect = e.is_connect(),
                    "Request failed"
                );
                Outcome::from_transport_error(&e)
            }
        }
    }
}

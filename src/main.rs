//! Rate Limiting Probe
//!
//! Sends sequential GET requests to one endpoint and reports whether a
//! server-side rate limiter engages.
//!
//! ```text
//!   ┌────────┐   ┌──────────────┐   GET (timeout)   ┌──────────┐
//!   │ config │──▶│ probe runner │──────────────────▶│  target  │
//!   └────────┘   │  (1..=N)     │◀──────────────────│ endpoint │
//!                └──────┬───────┘  status, headers  └──────────┘
//!                       │
//!                       ▼
//!                ┌──────────────┐
//!                │   report     │──▶ stdout
//!                │ lines+summary│
//!                └──────────────┘
//! ```
//!
//! With no flags the probe sends up to 100 requests, 100ms apart, with a
//! 10s timeout, and stops after 5 rate-limited responses.

use std::path::PathBuf;

use clap::Parser;

use ratelimit_probe::config::loader::resolve_config;
use ratelimit_probe::observability::logging::init_logging;
use ratelimit_probe::ProbeRunner;

#[derive(Parser)]
#[command(name = "ratelimit-probe")]
#[command(about = "Probe an HTTP endpoint to check that its rate limiter engages", long_about = None)]
struct Cli {
    /// TOML config file; defaults apply to anything it omits.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the target URL.
    #[arg(short, long)]
    url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = resolve_config(cli.config.as_deref(), cli.url)?;

    init_logging(&config.observability);

    tracing::info!(
        url = %config.target.url,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let runner = ProbeRunner::new(config)?;
    let mut stdout = std::io::stdout().lock();
    runner.run(&mut stdout).await?;

    Ok(())
}

//! `corral start` — start a daemon and wait for its worker to come alive.

use std::time::Duration;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::pm::{self, DaemonDriver};

/// Arguments for the start command.
#[derive(Args)]
pub struct StartArgs {
    /// Daemon name
    #[arg(long, env = "CORRAL_DAEMON_NAME")]
    pub name: String,

    /// Seconds between liveness probes
    #[arg(long, default_value_t = pm::DEFAULT_PROBE_INTERVAL.as_secs())]
    pub interval: u64,

    /// Seconds to wait for the worker before giving up
    #[arg(long, default_value_t = pm::DEFAULT_START_TIMEOUT.as_secs())]
    pub timeout: u64,
}

/// Run `corral start`.
///
/// # Errors
///
/// Returns an error when the daemon is unknown, the service command fails,
/// the worker crashed during startup, or the wait times out.
pub async fn run(app: &AppContext, args: &StartArgs) -> Result<()> {
    let factory = app.factory();
    let daemon = factory.load(&args.name).await?;
    let control = app.control();
    let driver = DaemonDriver::dispatch(daemon, app.runtime_root(), &app.runner, &control)?;

    app.output.info(&format!("Starting daemon: {}", args.name));
    driver
        .start(
            Duration::from_secs(args.interval),
            Duration::from_secs(args.timeout),
        )
        .await?;
    app.output.success(&format!("Daemon started: {}", args.name));
    Ok(())
}

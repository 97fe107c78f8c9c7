//! `corral stop` — stop a daemon and wait for its worker to shut down.

use std::time::Duration;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::pm::{self, DaemonDriver};

/// Arguments for the stop command.
#[derive(Args)]
pub struct StopArgs {
    /// Daemon name
    #[arg(long, env = "CORRAL_DAEMON_NAME")]
    pub name: String,

    /// Seconds between liveness probes
    #[arg(long, default_value_t = pm::DEFAULT_PROBE_INTERVAL.as_secs())]
    pub interval: u64,

    /// Seconds to wait for shutdown before giving up
    #[arg(long, default_value_t = pm::DEFAULT_STOP_TIMEOUT.as_secs())]
    pub timeout: u64,
}

/// Run `corral stop`.
///
/// # Errors
///
/// Returns an error when the daemon is unknown, the service command fails,
/// or the worker does not shut down within the timeout.
pub async fn run(app: &AppContext, args: &StopArgs) -> Result<()> {
    let factory = app.factory();
    let daemon = factory.load(&args.name).await?;
    let control = app.control();
    let driver = DaemonDriver::dispatch(daemon, app.runtime_root(), &app.runner, &control)?;

    app.output.info(&format!("Stopping daemon: {}", args.name));
    driver
        .stop(
            Duration::from_secs(args.interval),
            Duration::from_secs(args.timeout),
        )
        .await?;
    app.output.success(&format!("Daemon stopped: {}", args.name));
    Ok(())
}

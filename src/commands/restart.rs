//! `corral restart` — stop a daemon, then start it again.

use std::time::Duration;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::pm::{self, DaemonDriver};

/// Arguments for the restart command.
#[derive(Args)]
pub struct RestartArgs {
    /// Daemon name
    #[arg(long, env = "CORRAL_DAEMON_NAME")]
    pub name: String,

    /// Seconds between liveness probes
    #[arg(long, default_value_t = pm::DEFAULT_PROBE_INTERVAL.as_secs())]
    pub interval: u64,

    /// Seconds to wait for each phase before giving up
    #[arg(long, default_value_t = pm::DEFAULT_START_TIMEOUT.as_secs())]
    pub timeout: u64,
}

/// Run `corral restart`.
///
/// # Errors
///
/// Returns an error when either the stop or the start phase fails; a failed
/// stop leaves the daemon untouched.
pub async fn run(app: &AppContext, args: &RestartArgs) -> Result<()> {
    let factory = app.factory();
    let daemon = factory.load(&args.name).await?;
    let control = app.control();
    let driver = DaemonDriver::dispatch(daemon, app.runtime_root(), &app.runner, &control)?;

    app.output.info(&format!("Restarting daemon: {}", args.name));
    driver
        .restart(
            Duration::from_secs(args.interval),
            Duration::from_secs(args.timeout),
        )
        .await?;
    app.output.success(&format!("Daemon restarted: {}", args.name));
    Ok(())
}

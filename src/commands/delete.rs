//! `corral delete` — remove a stopped daemon's artifacts and its record.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::pm::DaemonDriver;

/// Arguments for the delete command.
#[derive(Args)]
pub struct DeleteArgs {
    /// Daemon name
    #[arg(long, env = "CORRAL_DAEMON_NAME")]
    pub name: String,
}

/// Run `corral delete`.
///
/// # Errors
///
/// Returns an error when the daemon is unknown or its worker is still
/// running. The persisted record is removed only after the artifacts are.
pub async fn run(app: &AppContext, args: &DeleteArgs) -> Result<()> {
    let factory = app.factory();
    let daemon = factory.load(&args.name).await?;
    let control = app.control();
    let driver = DaemonDriver::dispatch(daemon, app.runtime_root(), &app.runner, &control)?;

    driver.delete().await?;
    factory.delete(&args.name).await?;
    app.output.success(&format!("Deleted daemon: {}", args.name));
    Ok(())
}

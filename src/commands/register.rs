//! `corral register` — add a plugin's task modules to an existing daemon.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::pm::DaemonDriver;

/// Arguments for the register command.
#[derive(Args)]
pub struct RegisterArgs {
    /// Daemon name
    #[arg(long, env = "CORRAL_DAEMON_NAME")]
    pub name: String,

    /// Installed plugin distribution to register
    #[arg(long)]
    pub plugin: String,
}

/// Run `corral register`.
///
/// # Errors
///
/// Returns an error when the daemon is unknown, the plugin is not installed
/// in the runtime, or the includes file cannot be rewritten.
pub async fn run(app: &AppContext, args: &RegisterArgs) -> Result<()> {
    let factory = app.factory();
    let daemon = factory.load(&args.name).await?;
    let control = app.control();
    let driver = DaemonDriver::dispatch(daemon, app.runtime_root(), &app.runner, &control)?;

    driver.register(&args.plugin).await?;
    app.output.success(&format!(
        "Registered plugin {} with daemon {}",
        args.plugin, args.name
    ));
    app.output
        .info("Restart the daemon for the new modules to load");
    Ok(())
}

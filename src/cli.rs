//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags};
use crate::commands;

/// Manage worker-agent daemons behind the host's service manager
#[derive(Parser)]
#[command(
    name = "corral",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create a daemon and install its service artifacts
    Create(commands::create::CreateArgs),

    /// Start a daemon and wait for its worker to come alive
    Start(commands::start::StartArgs),

    /// Stop a daemon and wait for its worker to shut down
    Stop(commands::stop::StopArgs),

    /// Stop a daemon, then start it again
    Restart(commands::restart::RestartArgs),

    /// Delete a stopped daemon's artifacts and record
    Delete(commands::delete::DeleteArgs),

    /// Register an installed plugin with an existing daemon
    Register(commands::register::RegisterArgs),
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<()> {
        let Cli { quiet, no_color, command } = self;
        let app = AppContext::new(&AppFlags { no_color, quiet })?;
        match command {
            Command::Create(args) => commands::create::run(&app, &args).await,
            Command::Start(args) => commands::start::run(&app, &args).await,
            Command::Stop(args) => commands::stop::run(&app, &args).await,
            Command::Restart(args) => commands::restart::run(&app, &args).await,
            Command::Delete(args) => commands::delete::run(&app, &args).await,
            Command::Register(args) => commands::register::run(&app, &args).await,
        }
    }
}

//! Corral CLI - worker-agent daemon lifecycle manager

use clap::Parser;

use corral_cli::cli::Cli;
use corral_cli::domain;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = cli.run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(domain::exit_code_for(&e));
    }
}

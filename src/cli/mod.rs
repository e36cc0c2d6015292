//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod boundary;
pub mod check;
pub mod config;
pub mod serve;

use clap::{Parser, Subcommand};

/// Service-radius eligibility checker
#[derive(Parser)]
#[command(name = "service-area")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check whether an address or coordinate is within the service area
    Check(check::CheckArgs),

    /// Emit the service-area boundary polygon
    Boundary(boundary::BoundaryArgs),

    /// Manage configuration
    Config(config::ConfigArgs),

    /// Start web server (foreground)
    Serve(serve::ServeArgs),
}

/// Run the CLI
pub async fn run() -> crate::error::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check(args) => check::run(args).await,
        Commands::Boundary(args) => boundary::run(args),
        Commands::Config(args) => config::run(args),
        Commands::Serve(args) => serve::run(args).await,
    }
}

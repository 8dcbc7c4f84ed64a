//! vigil - operator CLI for the Alpha Sécurité back-office API.
//!
//! A thin wrapper over `vigil-http`. Tokens are kept in a session file so
//! consecutive invocations share one login.

mod cli;
mod commands;
mod output;
mod session;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.json_logs);

    let api = cli.api.as_deref();
    match cli.command {
        Commands::Auth(cmd) => commands::auth::handle(cmd, api).await,
        Commands::Users(cmd) => commands::users::handle(cmd, api).await,
        Commands::Agents(cmd) => commands::agents::handle(cmd, api).await,
        Commands::Missions(cmd) => commands::missions::handle(cmd, api).await,
        Commands::Incidents(cmd) => commands::incidents::handle(cmd, api).await,
        Commands::Communities(cmd) => commands::communities::handle(cmd, api).await,
        Commands::Reference(args) => commands::reference::run(args, api).await,
        Commands::Dashboard(args) => commands::dashboard::run(args, api).await,
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    // Logs go to stderr so command output stays pipeable.
    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}

//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::agents::AgentsCommand;
use crate::commands::auth::AuthCommand;
use crate::commands::communities::CommunitiesCommand;
use crate::commands::dashboard::DashboardArgs;
use crate::commands::incidents::IncidentsCommand;
use crate::commands::missions::MissionsCommand;
use crate::commands::reference::ReferenceArgs;
use crate::commands::users::UsersCommand;

/// Back-office CLI for the Alpha Sécurité API.
#[derive(Parser, Debug)]
#[command(name = "vigil")]
#[command(author, version = env!("VIGIL_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// API base URL (defaults to the URL used at login, then production)
    #[arg(long, env = "VIGIL_API", global = true)]
    pub api: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Login, logout and session inspection
    Auth(AuthCommand),

    /// User accounts
    Users(UsersCommand),

    /// Security agents and their approval
    Agents(AgentsCommand),

    /// Missions
    Missions(MissionsCommand),

    /// Incident reports
    Incidents(IncidentsCommand),

    /// Vigilance communities
    Communities(CommunitiesCommand),

    /// Reference tables
    Reference(ReferenceArgs),

    /// Dashboard statistics
    Dashboard(DashboardArgs),
}

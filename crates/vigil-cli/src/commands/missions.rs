//! Mission commands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;

use vigil_core::ListState;
use vigil_core::models::{Mission, MissionFilters, MissionStatus};

use super::{PageArgs, wire};
use crate::output;
use crate::session::{self, CliContext};

#[derive(Args, Debug)]
pub struct MissionsCommand {
    #[command(subcommand)]
    pub command: MissionsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum MissionsSubcommand {
    /// List missions
    List(ListArgs),

    /// Show one mission
    Get(GetArgs),

    /// Accept a pending mission
    Accept(IdArgs),

    /// Mark a mission as started
    Start(IdArgs),

    /// Mark a mission as completed
    Complete(IdArgs),

    /// Cancel a mission
    Cancel(CancelArgs),

    /// Assign a mission to an agent
    Assign(AssignArgs),

    /// Force a mission status
    Status(StatusArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub page: PageArgs,

    /// Mission status (pending, accepted, in_progress, completed, cancelled)
    #[arg(long, value_parser = wire::<MissionStatus>)]
    pub status: Option<MissionStatus>,

    /// Only missions of this agent
    #[arg(long)]
    pub agent: Option<String>,

    /// Only missions booked by this client
    #[arg(long)]
    pub client: Option<String>,

    /// Earliest start date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// Latest start date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Mission ID
    pub id: String,

    /// Print the mission as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct IdArgs {
    /// Mission ID
    pub id: String,
}

#[derive(Args, Debug)]
pub struct CancelArgs {
    /// Mission ID
    pub id: String,

    /// Cancellation reason
    #[arg(long)]
    pub reason: String,
}

#[derive(Args, Debug)]
pub struct AssignArgs {
    /// Mission ID
    pub id: String,

    /// Agent ID
    #[arg(long)]
    pub agent: String,
}

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Mission ID
    pub id: String,

    /// New status
    #[arg(value_parser = wire::<MissionStatus>)]
    pub status: MissionStatus,
}

pub async fn handle(cmd: MissionsCommand, api: Option<&str>) -> Result<()> {
    let ctx = session::connect(api)?;
    ctx.require_login()?;
    let missions = ctx.backoffice.missions();

    let (mission, action) = match cmd.command {
        MissionsSubcommand::List(args) => return list(&ctx, args).await,
        MissionsSubcommand::Get(args) => {
            let mission = missions
                .get(&args.id)
                .await
                .context("Failed to fetch mission")?;
            if args.json {
                return output::json_pretty(&mission);
            }
            show(&mission);
            return Ok(());
        }
        MissionsSubcommand::Accept(args) => (
            missions.accept(&args.id).await.context("Failed to accept mission")?,
            "accepted",
        ),
        MissionsSubcommand::Start(args) => (
            missions.start(&args.id).await.context("Failed to start mission")?,
            "started",
        ),
        MissionsSubcommand::Complete(args) => (
            missions
                .complete(&args.id)
                .await
                .context("Failed to complete mission")?,
            "completed",
        ),
        MissionsSubcommand::Cancel(args) => (
            missions
                .cancel(&args.id, &args.reason)
                .await
                .context("Failed to cancel mission")?,
            "cancelled",
        ),
        MissionsSubcommand::Assign(args) => (
            missions
                .assign(&args.id, &args.agent)
                .await
                .context("Failed to assign mission")?,
            "assigned",
        ),
        MissionsSubcommand::Status(args) => (
            missions
                .update_status(&args.id, args.status)
                .await
                .context("Failed to update mission status")?,
            "updated",
        ),
    };

    output::success(&format!("Mission {} {}", mission.reference, action));
    output::field("Status", &output::status(mission.status.as_str()).to_string());
    Ok(())
}

async fn list(ctx: &CliContext, args: ListArgs) -> Result<()> {
    let filters = MissionFilters {
        page: args.page.params(),
        status: args.status,
        agent_id: args.agent,
        client_id: args.client,
        date_from: args.from,
        date_to: args.to,
        ..Default::default()
    };

    let mut state = ListState::new();
    state.begin();
    state
        .finish(ctx.backoffice.missions().list(&filters).await)
        .context("Failed to list missions")?;

    if args.page.json {
        return output::json_pretty(&state.items);
    }

    output::list(&state, "No missions found.", |mission| {
        format!(
            "{}  {}  {}  {}  {}",
            mission.id.dimmed(),
            mission.reference,
            mission.title,
            mission.start_date,
            output::status(mission.status.as_str())
        )
    });
    Ok(())
}

fn show(mission: &Mission) {
    output::field("ID", &mission.id);
    output::field("Reference", &mission.reference);
    output::field("Title", &mission.title);
    output::field("Status", &output::status(mission.status.as_str()).to_string());
    if let Some(client) = &mission.client {
        output::field("Client", &client.full_name());
    }
    if let Some(agent) = &mission.agent {
        output::field(
            "Agent",
            &format!("{} {}", agent.user.first_name, agent.user.last_name),
        );
    }
    if let Some(kind) = &mission.type_mission {
        output::field("Type", &kind.name);
    }
    if !mission.address.is_empty() {
        output::field("Address", &mission.address);
    }
    let start = match &mission.heure_debut {
        Some(hour) => format!("{} {}", mission.start_date, hour),
        None => mission.start_date.clone(),
    };
    output::field("Start", &start);
    output::field("Duration", &format!("{} h", mission.duration_hours));
    output::field("Amount", &format!("{:.0}", mission.total_amount));
    if let Some(reason) = &mission.cancellation_reason {
        output::field("Cancellation reason", reason);
    }
}

//! Incident report commands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;

use vigil_core::ListState;
use vigil_core::models::{Incident, IncidentFilters, IncidentStatus, UrgencyLevel};

use super::{PageArgs, wire};
use crate::output;
use crate::session::{self, CliContext};

#[derive(Args, Debug)]
pub struct IncidentsCommand {
    #[command(subcommand)]
    pub command: IncidentsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum IncidentsSubcommand {
    /// List incidents
    List(ListArgs),

    /// Show one incident
    Get(GetArgs),

    /// Change an incident's status
    Status(StatusArgs),

    /// Show the activity log of an incident
    Activities(GetArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub page: PageArgs,

    /// Incident status (open, confirmed, in_progress, resolved, closed)
    #[arg(long, value_parser = wire::<IncidentStatus>)]
    pub status: Option<IncidentStatus>,

    /// Urgency (low, medium, high, critical)
    #[arg(long, value_parser = wire::<UrgencyLevel>)]
    pub urgency: Option<UrgencyLevel>,

    /// Only incidents of this community
    #[arg(long)]
    pub community: Option<String>,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Incident ID
    pub id: String,

    /// Print JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Incident ID
    pub id: String,

    /// New status
    #[arg(value_parser = wire::<IncidentStatus>)]
    pub status: IncidentStatus,
}

pub async fn handle(cmd: IncidentsCommand, api: Option<&str>) -> Result<()> {
    let ctx = session::connect(api)?;
    ctx.require_login()?;
    let incidents = ctx.backoffice.incidents();

    match cmd.command {
        IncidentsSubcommand::List(args) => list(&ctx, args).await,
        IncidentsSubcommand::Get(args) => {
            let incident = incidents
                .get(&args.id)
                .await
                .context("Failed to fetch incident")?;
            if args.json {
                return output::json_pretty(&incident);
            }
            show(&ctx, &incident);
            Ok(())
        }
        IncidentsSubcommand::Status(args) => {
            let incident = incidents
                .update_status(&args.id, args.status)
                .await
                .context("Failed to update incident status")?;
            output::success(&format!(
                "{} is now {}",
                incident.title,
                output::status(incident.status.as_str())
            ));
            Ok(())
        }
        IncidentsSubcommand::Activities(args) => {
            let activities = incidents
                .activities(&args.id)
                .await
                .context("Failed to fetch incident activity")?;
            if args.json {
                return output::json_pretty(&activities);
            }
            if activities.is_empty() {
                output::note("No activity recorded.");
            }
            for activity in &activities {
                let who = activity
                    .user
                    .as_ref()
                    .map(|u| u.full_name())
                    .unwrap_or_else(|| "anonymous".to_string());
                let what = match (activity.old_status, activity.new_status) {
                    (Some(old), Some(new)) => format!("{} → {}", old.as_str(), new.as_str()),
                    _ => activity.content.clone().unwrap_or_default(),
                };
                println!(
                    "{}  {}  {:?}  {}",
                    activity.created_at.as_deref().unwrap_or("-").dimmed(),
                    who,
                    activity.kind,
                    what
                );
            }
            Ok(())
        }
    }
}

async fn list(ctx: &CliContext, args: ListArgs) -> Result<()> {
    let filters = IncidentFilters {
        page: args.page.params(),
        status: args.status,
        urgency_level: args.urgency,
        community_id: args.community,
        ..Default::default()
    };

    let mut state = ListState::new();
    state.begin();
    state
        .finish(ctx.backoffice.incidents().list(&filters).await)
        .context("Failed to list incidents")?;

    if args.page.json {
        return output::json_pretty(&state.items);
    }

    output::list(&state, "No incidents found.", |incident| {
        format!(
            "{}  {}  {}  {}",
            incident.id.dimmed(),
            incident.title,
            output::status(incident.urgency_level.as_str()),
            output::status(incident.status.as_str())
        )
    });
    Ok(())
}

fn show(ctx: &CliContext, incident: &Incident) {
    output::field("ID", &incident.id);
    output::field("Title", &incident.title);
    output::field("Status", &output::status(incident.status.as_str()).to_string());
    output::field(
        "Urgency",
        &output::status(incident.urgency_level.as_str()).to_string(),
    );
    if let Some(kind) = &incident.type_incident {
        output::field("Type", &kind.name);
    }
    if let Some(community) = &incident.community {
        output::field("Community", &community.name);
    }
    match (&incident.reported_by, incident.is_anonymous) {
        (Some(user), false) => output::field("Reported by", &user.full_name()),
        _ => output::field("Reported by", "anonymous"),
    }
    if let Some(address) = &incident.address {
        output::field("Address", address);
    }
    output::field(
        "Location",
        &format!("{:.5}, {:.5}", incident.latitude, incident.longitude),
    );
    output::field(
        "Confirmations",
        &incident.confirmations_count.to_string(),
    );
    if !incident.description.is_empty() {
        println!();
        println!("{}", incident.description);
    }
    let service = ctx.backoffice.incidents();
    for photo in &incident.photos {
        println!("  {} {}", "photo".dimmed(), service.photo_url(&incident.id, &photo.id));
    }
}

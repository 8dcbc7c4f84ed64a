//! Security agent commands: listing and the approval workflow.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;

use vigil_core::ListState;
use vigil_core::models::{Agent, AgentFilters, AgentStatus};

use super::{PageArgs, wire};
use crate::output;
use crate::session::{self, CliContext};

#[derive(Args, Debug)]
pub struct AgentsCommand {
    #[command(subcommand)]
    pub command: AgentsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AgentsSubcommand {
    /// List agents
    List(ListArgs),

    /// Show one agent with its documents and certifications
    Get(GetArgs),

    /// Approve an agent profile
    Approve(IdArgs),

    /// Reject an agent profile
    Reject(RejectArgs),

    /// Approve one of an agent's documents
    ApproveDocument(ItemArgs),

    /// Reject one of an agent's documents
    RejectDocument(RejectItemArgs),

    /// Approve one of an agent's certifications
    ApproveCertification(ItemArgs),

    /// Reject one of an agent's certifications
    RejectCertification(RejectItemArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub page: PageArgs,

    /// Approval status (pending, approved, rejected)
    #[arg(long, value_parser = wire::<AgentStatus>)]
    pub status: Option<AgentStatus>,

    /// Only agents working in this commune
    #[arg(long)]
    pub commune: Option<String>,

    /// Filter on availability
    #[arg(long)]
    pub available: Option<bool>,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Agent ID
    pub id: String,

    /// Print the agent as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct IdArgs {
    /// Agent ID
    pub id: String,
}

#[derive(Args, Debug)]
pub struct RejectArgs {
    /// Agent ID
    pub id: String,

    /// Reason shown to the agent
    #[arg(long)]
    pub reason: String,
}

#[derive(Args, Debug)]
pub struct ItemArgs {
    /// Agent ID
    pub agent: String,

    /// Document or certification ID
    pub item: String,
}

#[derive(Args, Debug)]
pub struct RejectItemArgs {
    /// Agent ID
    pub agent: String,

    /// Document or certification ID
    pub item: String,

    /// Reason shown to the agent
    #[arg(long)]
    pub reason: String,
}

pub async fn handle(cmd: AgentsCommand, api: Option<&str>) -> Result<()> {
    let ctx = session::connect(api)?;
    ctx.require_login()?;
    let agents = ctx.backoffice.agents();

    match cmd.command {
        AgentsSubcommand::List(args) => list(&ctx, args).await,
        AgentsSubcommand::Get(args) => {
            let agent = agents.get(&args.id).await.context("Failed to fetch agent")?;
            if args.json {
                return output::json_pretty(&agent);
            }
            show(&ctx, &agent);
            Ok(())
        }
        AgentsSubcommand::Approve(args) => {
            let agent = agents
                .approve(&args.id)
                .await
                .context("Failed to approve agent")?;
            output::success(&format!("Approved {}", name(&agent)));
            Ok(())
        }
        AgentsSubcommand::Reject(args) => {
            let agent = agents
                .reject(&args.id, &args.reason)
                .await
                .context("Failed to reject agent")?;
            output::success(&format!("Rejected {}", name(&agent)));
            Ok(())
        }
        AgentsSubcommand::ApproveDocument(args) => {
            agents
                .approve_document(&args.agent, &args.item)
                .await
                .context("Failed to approve document")?;
            output::success("Document approved");
            Ok(())
        }
        AgentsSubcommand::RejectDocument(args) => {
            agents
                .reject_document(&args.agent, &args.item, &args.reason)
                .await
                .context("Failed to reject document")?;
            output::success("Document rejected");
            Ok(())
        }
        AgentsSubcommand::ApproveCertification(args) => {
            agents
                .approve_certification(&args.agent, &args.item)
                .await
                .context("Failed to approve certification")?;
            output::success("Certification approved");
            Ok(())
        }
        AgentsSubcommand::RejectCertification(args) => {
            agents
                .reject_certification(&args.agent, &args.item, &args.reason)
                .await
                .context("Failed to reject certification")?;
            output::success("Certification rejected");
            Ok(())
        }
    }
}

async fn list(ctx: &CliContext, args: ListArgs) -> Result<()> {
    let filters = AgentFilters {
        page: args.page.params(),
        status: args.status,
        commune_id: args.commune,
        is_available: args.available,
        ..Default::default()
    };

    let mut state = ListState::new();
    state.begin();
    state
        .finish(ctx.backoffice.agents().list(&filters).await)
        .context("Failed to list agents")?;

    if args.page.json {
        return output::json_pretty(&state.items);
    }

    output::list(&state, "No agents found.", |agent| {
        format!(
            "{}  {}  {}  {}",
            agent.id.dimmed(),
            name(agent),
            agent.commune.as_ref().map(|c| c.name.as_str()).unwrap_or("-"),
            output::status(agent.status.as_str())
        )
    });
    Ok(())
}

fn name(agent: &Agent) -> String {
    format!("{} {}", agent.user.first_name, agent.user.last_name)
}

fn show(ctx: &CliContext, agent: &Agent) {
    output::field("ID", &agent.id);
    output::field("Name", &name(agent));
    output::field("Email", &agent.user.email);
    output::field("Status", &output::status(agent.status.as_str()).to_string());
    if let Some(reason) = &agent.rejection_reason {
        output::field("Rejection reason", reason);
    }
    output::field(
        "Rates",
        &format!("{} / hour, {} / day", agent.hour_price, agent.daily_price),
    );
    output::field(
        "Missions",
        &format!(
            "{} ({} completed)",
            agent.missions_count, agent.completed_missions_count
        ),
    );
    output::field(
        "Rating",
        &format!("{:.1} ({} reviews)", agent.average_rating, agent.reviews_count),
    );

    let service = ctx.backoffice.agents();
    for document in &agent.documents {
        let status = document.status.map(|s| s.as_str()).unwrap_or("pending");
        println!(
            "  {} {}  {}  {}",
            "document".dimmed(),
            document.document_type.as_str(),
            output::status(status),
            service.document_url(&agent.id, &document.id)
        );
    }
    for certification in &agent.certifications {
        let status = certification.status.map(|s| s.as_str()).unwrap_or("pending");
        println!(
            "  {} {}  {}  {}",
            "certification".dimmed(),
            certification.name,
            output::status(status),
            service.certification_url(&agent.id, &certification.id)
        );
    }
}

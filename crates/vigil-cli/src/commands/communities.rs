//! Vigilance community commands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;

use vigil_core::ListState;
use vigil_core::models::CommunityFilters;

use super::PageArgs;
use crate::output;
use crate::session::{self, CliContext};

#[derive(Args, Debug)]
pub struct CommunitiesCommand {
    #[command(subcommand)]
    pub command: CommunitiesSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum CommunitiesSubcommand {
    /// List communities
    List(ListArgs),

    /// Show one community with its statistics
    Get(GetArgs),

    /// List the members of a community
    Members(MembersArgs),

    /// Approve a membership request
    ApproveMember(MemberArgs),

    /// Reject a membership request
    RejectMember(MemberArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub page: PageArgs,

    /// Only communities of this commune
    #[arg(long)]
    pub commune: Option<String>,

    /// Filter on the public flag
    #[arg(long)]
    pub public: Option<bool>,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Community ID
    pub id: String,

    /// Print JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct MembersArgs {
    /// Community ID
    pub id: String,

    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Args, Debug)]
pub struct MemberArgs {
    /// Community ID
    pub community: String,

    /// Member ID
    pub member: String,
}

pub async fn handle(cmd: CommunitiesCommand, api: Option<&str>) -> Result<()> {
    let ctx = session::connect(api)?;
    ctx.require_login()?;
    let communities = ctx.backoffice.communities();

    match cmd.command {
        CommunitiesSubcommand::List(args) => list(&ctx, args).await,
        CommunitiesSubcommand::Get(args) => {
            let community = communities
                .get(&args.id)
                .await
                .context("Failed to fetch community")?;
            let stats = communities
                .stats(&args.id)
                .await
                .context("Failed to fetch community statistics")?;
            if args.json {
                return output::json_pretty(&serde_json::json!({
                    "community": community,
                    "stats": stats,
                }));
            }
            output::field("ID", &community.id);
            output::field("Name", &community.name);
            if let Some(commune) = &community.commune {
                output::field("Commune", &commune.name);
            }
            output::field("Public", &community.is_public.to_string());
            output::field("Active", &community.is_active.to_string());
            output::field("Members", &stats.members_count.to_string());
            output::field(
                "Incidents",
                &format!(
                    "{} ({} active)",
                    stats.incidents_count, stats.active_incidents
                ),
            );
            Ok(())
        }
        CommunitiesSubcommand::Members(args) => {
            let mut state = ListState::new();
            state.begin();
            state
                .finish(communities.members(&args.id, &args.page.params()).await)
                .context("Failed to list members")?;
            if args.page.json {
                return output::json_pretty(&state.items);
            }
            output::list(&state, "No members.", |member| {
                format!(
                    "{}  {}  {}  {}",
                    member.id.dimmed(),
                    member.user.full_name(),
                    member.role.as_str(),
                    output::status(member.status.as_str())
                )
            });
            Ok(())
        }
        CommunitiesSubcommand::ApproveMember(args) => {
            communities
                .approve_member(&args.community, &args.member)
                .await
                .context("Failed to approve member")?;
            output::success("Member approved");
            Ok(())
        }
        CommunitiesSubcommand::RejectMember(args) => {
            communities
                .reject_member(&args.community, &args.member)
                .await
                .context("Failed to reject member")?;
            output::success("Member rejected");
            Ok(())
        }
    }
}

async fn list(ctx: &CliContext, args: ListArgs) -> Result<()> {
    let filters = CommunityFilters {
        page: args.page.params(),
        commune_id: args.commune,
        is_public: args.public,
        ..Default::default()
    };

    let mut state = ListState::new();
    state.begin();
    state
        .finish(ctx.backoffice.communities().list(&filters).await)
        .context("Failed to list communities")?;

    if args.page.json {
        return output::json_pretty(&state.items);
    }

    output::list(&state, "No communities found.", |community| {
        format!(
            "{}  {}  {} members  {} incidents",
            community.id.dimmed(),
            community.name,
            community.members_count,
            community.incidents_count
        )
    });
    Ok(())
}

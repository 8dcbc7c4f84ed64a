//! Dashboard statistics.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use colored::Colorize;

use vigil_core::models::DashboardStats;

use crate::output;
use crate::session::{self, CliContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Section {
    Overview,
    Agents,
    Missions,
    Payments,
    Incidents,
    Communities,
    Activity,
}

#[derive(Args, Debug)]
pub struct DashboardArgs {
    /// Which statistics to show
    #[arg(value_enum, default_value_t = Section::Overview)]
    pub section: Section,

    /// Number of entries for the activity feed
    #[arg(long)]
    pub limit: Option<u32>,

    /// Print JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: DashboardArgs, api: Option<&str>) -> Result<()> {
    let ctx = session::connect(api)?;
    ctx.require_login()?;
    let dashboard = ctx.backoffice.dashboard();

    match args.section {
        Section::Overview => {
            let stats = dashboard.stats().await.context("Failed to fetch statistics")?;
            if args.json {
                return output::json_pretty(&stats);
            }
            overview(&stats);
            Ok(())
        }
        // The breakdown sections are nested maps; JSON reads better than fields.
        Section::Agents => output::json_pretty(
            &dashboard
                .agents_stats()
                .await
                .context("Failed to fetch agent statistics")?,
        ),
        Section::Missions => output::json_pretty(
            &dashboard
                .missions_stats()
                .await
                .context("Failed to fetch mission statistics")?,
        ),
        Section::Payments => output::json_pretty(
            &dashboard
                .payments_stats()
                .await
                .context("Failed to fetch payment statistics")?,
        ),
        Section::Incidents => output::json_pretty(
            &dashboard
                .incidents_stats()
                .await
                .context("Failed to fetch incident statistics")?,
        ),
        Section::Communities => output::json_pretty(
            &dashboard
                .communities_stats()
                .await
                .context("Failed to fetch community statistics")?,
        ),
        Section::Activity => activity(&ctx, args.limit, args.json).await,
    }
}

fn overview(stats: &DashboardStats) {
    output::field(
        "Users",
        &format!(
            "{} ({} active, {} new this month)",
            stats.users.total, stats.users.active, stats.users.new_this_month
        ),
    );
    output::field(
        "Agents",
        &format!(
            "{} ({} available, {} awaiting approval)",
            stats.agents.total, stats.agents.available, stats.agents.pending_approval
        ),
    );
    output::field(
        "Missions",
        &format!(
            "{} ({} pending, {} in progress, {} completed)",
            stats.missions.total,
            stats.missions.pending,
            stats.missions.in_progress,
            stats.missions.completed
        ),
    );
    output::field(
        "Revenue",
        &format!(
            "{:.0} ({:.0} this month)",
            stats.missions.revenue_total, stats.missions.revenue_this_month
        ),
    );
    output::field(
        "Communities",
        &format!(
            "{} ({} members)",
            stats.communities.total, stats.communities.total_members
        ),
    );
    output::field(
        "Incidents",
        &format!(
            "{} open, {} critical, {} resolved",
            stats.incidents.open, stats.incidents.critical, stats.incidents.resolved
        ),
    );
}

async fn activity(ctx: &CliContext, limit: Option<u32>, json: bool) -> Result<()> {
    let feed = ctx
        .backoffice
        .dashboard()
        .recent_activity(limit)
        .await
        .context("Failed to fetch recent activity")?;

    if json {
        return output::json_pretty(&feed);
    }

    if feed.is_empty() {
        output::note("No recent activity.");
    }
    for item in &feed {
        println!(
            "{}  {}",
            item.created_at.as_deref().unwrap_or("-").dimmed(),
            item.description
        );
    }
    Ok(())
}

//! User account commands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;

use vigil_core::ListState;
use vigil_core::models::{User, UserFilters};

use super::PageArgs;
use crate::output;
use crate::session::{self, CliContext};

#[derive(Args, Debug)]
pub struct UsersCommand {
    #[command(subcommand)]
    pub command: UsersSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum UsersSubcommand {
    /// List users
    List(ListArgs),

    /// Show one user
    Get(GetArgs),

    /// Activate or deactivate a user
    ToggleStatus(GetArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub page: PageArgs,

    /// Only users with this role ID
    #[arg(long)]
    pub role: Option<String>,

    /// Filter on the active flag
    #[arg(long)]
    pub active: Option<bool>,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// User ID
    pub id: String,

    /// Print the user as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn handle(cmd: UsersCommand, api: Option<&str>) -> Result<()> {
    let ctx = session::connect(api)?;
    ctx.require_login()?;

    match cmd.command {
        UsersSubcommand::List(args) => list(&ctx, args).await,
        UsersSubcommand::Get(args) => {
            let user = ctx
                .backoffice
                .users()
                .get(&args.id)
                .await
                .context("Failed to fetch user")?;
            show(&user, args.json)
        }
        UsersSubcommand::ToggleStatus(args) => {
            let user = ctx
                .backoffice
                .users()
                .toggle_status(&args.id)
                .await
                .context("Failed to toggle user status")?;
            let state = if user.is_active { "active" } else { "inactive" };
            output::success(&format!("{} is now {}", user.full_name(), state));
            Ok(())
        }
    }
}

async fn list(ctx: &CliContext, args: ListArgs) -> Result<()> {
    let filters = UserFilters {
        page: args.page.params(),
        role_id: args.role,
        is_active: args.active,
        ..Default::default()
    };

    let mut state = ListState::new();
    state.begin();
    state
        .finish(ctx.backoffice.users().list(&filters).await)
        .context("Failed to list users")?;

    if args.page.json {
        return output::json_pretty(&state.items);
    }

    output::list(&state, "No users found.", summary);
    Ok(())
}

fn summary(user: &User) -> String {
    let active = if user.is_active {
        "active".green()
    } else {
        "inactive".red()
    };
    format!(
        "{}  {}  {}  {}  {}",
        user.id.dimmed(),
        user.full_name(),
        user.email,
        user.role_name(),
        active
    )
}

fn show(user: &User, json: bool) -> Result<()> {
    if json {
        return output::json_pretty(user);
    }

    output::field("ID", &user.id);
    output::field("Name", &user.full_name());
    output::field("Email", &user.email);
    if let Some(phone) = &user.phone {
        output::field("Phone", phone);
    }
    output::field("Role", user.role_name());
    output::field("Active", &user.is_active.to_string());
    output::field("Verified", &user.is_verified.to_string());
    if let Some(created) = &user.created_at {
        output::field("Created", created);
    }
    Ok(())
}

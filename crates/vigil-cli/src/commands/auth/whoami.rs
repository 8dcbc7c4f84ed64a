//! Whoami command implementation.

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use clap::Args;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct WhoamiArgs {
    /// Print the user as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: WhoamiArgs, api: Option<&str>) -> Result<()> {
    let ctx = session::connect(api)?;
    ctx.require_login()?;

    let user = ctx
        .backoffice
        .auth()
        .current_user()
        .await
        .context("Failed to fetch current user")?;

    if args.json {
        return output::json_pretty(&user);
    }

    output::field("User", &user.full_name());
    output::field("ID", &user.id);
    output::field("Email", &user.email);
    if let Some(phone) = &user.phone {
        output::field("Phone", phone);
    }
    if let Some(role) = &user.role {
        output::field("Role", &role.name);
    }
    output::field("API", ctx.api.as_str());
    if let Some(saved) = ctx.store.saved_at().as_deref().and_then(local_time) {
        output::field("Signed in", &saved);
    }

    Ok(())
}

fn local_time(rfc3339: &str) -> Option<String> {
    DateTime::parse_from_rfc3339(rfc3339)
        .ok()
        .map(|t| t.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
}

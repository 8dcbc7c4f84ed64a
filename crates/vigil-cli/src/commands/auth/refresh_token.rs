//! Refresh token command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct RefreshTokenArgs {}

pub async fn run(_args: RefreshTokenArgs, api: Option<&str>) -> Result<()> {
    let ctx = session::connect(api)?;
    ctx.require_login()?;

    output::note("Refreshing session...");

    ctx.backoffice
        .auth()
        .refresh()
        .await
        .context("Failed to refresh session")?;

    output::success("Session refreshed successfully");
    output::field("API", ctx.api.as_str());

    Ok(())
}

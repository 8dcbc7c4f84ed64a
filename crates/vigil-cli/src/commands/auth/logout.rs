//! Logout command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct LogoutArgs {}

pub async fn run(_args: LogoutArgs, api: Option<&str>) -> Result<()> {
    let ctx = session::connect(api)?;

    if !ctx.backoffice.auth().is_authenticated() {
        output::note("Not logged in.");
        return Ok(());
    }

    // Local tokens are cleared even when the server call fails.
    ctx.backoffice
        .auth()
        .logout()
        .await
        .context("Logout request failed; the local session was cleared anyway")?;

    output::success("Logged out");

    Ok(())
}

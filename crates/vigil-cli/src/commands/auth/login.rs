//! Login command implementation.

use anyhow::{Context, Result};
use clap::Args;

use vigil_core::Credentials;

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Email address or phone number
    #[arg(long)]
    pub login: String,

    /// Account password
    #[arg(long, env = "VIGIL_PASSWORD", hide_env_values = true)]
    pub password: String,
}

pub async fn run(args: LoginArgs, api: Option<&str>) -> Result<()> {
    let ctx = session::connect(api)?;
    let credentials = Credentials::new(&args.login, &args.password);

    output::note("Logging in...");

    let response = ctx
        .backoffice
        .auth()
        .login(&credentials)
        .await
        .context("Failed to login")?;

    ctx.remember_api()?;

    output::success("Logged in successfully");
    println!();
    output::field("User", &response.user.full_name());
    output::field("Email", &response.user.email);
    if let Some(role) = &response.user.role {
        output::field("Role", &role.name);
    }
    output::field("API", ctx.api.as_str());

    Ok(())
}

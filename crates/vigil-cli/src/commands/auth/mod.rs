//! Auth subcommand implementations.

mod login;
mod logout;
mod refresh_token;
mod whoami;

use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub command: AuthSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AuthSubcommand {
    /// Sign in and store the session tokens
    Login(login::LoginArgs),

    /// Sign out and forget the stored tokens
    Logout(logout::LogoutArgs),

    /// Display the signed-in user
    Whoami(whoami::WhoamiArgs),

    /// Exchange the refresh token for a new access token
    RefreshToken(refresh_token::RefreshTokenArgs),
}

pub async fn handle(cmd: AuthCommand, api: Option<&str>) -> Result<()> {
    match cmd.command {
        AuthSubcommand::Login(args) => login::run(args, api).await,
        AuthSubcommand::Logout(args) => logout::run(args, api).await,
        AuthSubcommand::Whoami(args) => whoami::run(args, api).await,
        AuthSubcommand::RefreshToken(args) => refresh_token::run(args, api).await,
    }
}

use std::path::PathBuf;
use std::process::Output;

use serde_json::{Value, json};
use tempfile::TempDir;
use wiremock::MockServer;

pub const PREFIX: &str = "/api/v1";

/// A `vigil` binary pointed at a mock server, with its own data directory.
pub struct Cli {
    data_dir: TempDir,
    api: String,
}

impl Cli {
    pub fn new(server: &MockServer) -> Self {
        Self {
            data_dir: TempDir::new().expect("Failed to create temp dir"),
            api: format!("{}{}", server.uri(), PREFIX),
        }
    }

    pub fn api(&self) -> &str {
        &self.api
    }

    pub fn session_path(&self) -> PathBuf {
        self.data_dir.path().join("session.json")
    }

    /// Write a session file as a previous login would have.
    pub fn seed(&self, access: &str, refresh: Option<&str>) {
        let mut entries = json!({ "access_token": access, "api_url": self.api });
        if let Some(refresh) = refresh {
            entries["refresh_token"] = json!(refresh);
        }
        std::fs::write(self.session_path(), entries.to_string()).expect("Failed to seed session");
    }

    /// Contents of the session file, or an empty object if it does not exist.
    pub fn session(&self) -> Value {
        match std::fs::read_to_string(self.session_path()) {
            Ok(text) => serde_json::from_str(&text).expect("Session file is not JSON"),
            Err(_) => json!({}),
        }
    }

    /// Run with `VIGIL_API` set.
    pub async fn run(&self, args: &[&str]) -> Output {
        self.command(args, true).await
    }

    /// Run relying on the API URL remembered in the session file.
    pub async fn run_stored_api(&self, args: &[&str]) -> Output {
        self.command(args, false).await
    }

    async fn command(&self, args: &[&str], with_api: bool) -> Output {
        let mut cmd = tokio::process::Command::new(env!("CARGO_BIN_EXE_vigil"));
        cmd.args(args)
            .env("VIGIL_DATA_DIR", self.data_dir.path())
            .env("NO_COLOR", "1")
            .env_remove("VIGIL_API")
            .env_remove("VIGIL_PASSWORD")
            .env_remove("RUST_LOG");
        if with_api {
            cmd.env("VIGIL_API", &self.api);
        }
        cmd.output().await.expect("Failed to execute CLI")
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Assert success and return stdout.
pub fn success(output: &Output, args: &[&str]) -> String {
    if !output.status.success() {
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr(output));
    }
    stdout(output)
}

pub fn p(suffix: &str) -> String {
    format!("{}{}", PREFIX, suffix)
}

pub fn envelope(data: Value) -> Value {
    json!({ "success": true, "message": "OK", "data": data })
}

pub fn user_json(id: &str) -> Value {
    json!({
        "id": id,
        "first_name": "Awa",
        "last_name": "Koné",
        "email": "awa@alphsecurite.ci",
        "is_active": true,
        "role": { "id": "r1", "name": "Administrateur", "slug": "admin" }
    })
}

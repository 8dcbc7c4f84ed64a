//! Stamps the binary version with the commit it was built from.

use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-env-changed=VIGIL_BUILD_COMMIT");

    let pkg = env!("CARGO_PKG_VERSION");
    let version = match commit() {
        Some(commit) => format!("{} ({})", pkg, commit),
        None => pkg.to_string(),
    };

    println!("cargo:rustc-env=VIGIL_VERSION={}", version);
}

fn commit() -> Option<String> {
    if let Ok(commit) = std::env::var("VIGIL_BUILD_COMMIT") {
        let commit = commit.trim().to_string();
        return (!commit.is_empty()).then_some(commit);
    }

    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }

    let commit = String::from_utf8(output.stdout).ok()?;
    let commit = commit.trim();
    (!commit.is_empty()).then(|| commit.to_string())
}

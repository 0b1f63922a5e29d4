//! Build script to stamp the frontend with a release version and git SHA.
//!
//! Environment variables (set by CI or fall back to defaults):
//! - BOOKME_VERSION: Version string (defaults to CARGO_PKG_VERSION)
//! - BOOKME_GIT_SHA: Git commit SHA (defaults to GITHUB_SHA, then git rev-parse)

use std::process::Command;

fn main() {
    let version = std::env::var("BOOKME_VERSION").unwrap_or_else(|_| {
        std::env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "unknown".into())
    });
    println!("cargo:rustc-env=BOOKME_VERSION={}", version);

    let git_sha = std::env::var("BOOKME_GIT_SHA")
        .or_else(|_| {
            std::env::var("GITHUB_SHA").map(|s| s.chars().take(7).collect::<String>())
        })
        .unwrap_or_else(|_| get_git_sha());
    println!("cargo:rustc-env=BOOKME_GIT_SHA={}", git_sha);

    println!("cargo:rerun-if-env-changed=BOOKME_VERSION");
    println!("cargo:rerun-if-env-changed=BOOKME_GIT_SHA");
    println!("cargo:rerun-if-env-changed=GITHUB_SHA");
    println!("cargo:rerun-if-env-changed=BOOKME_API_BASE_URL");
}

fn get_git_sha() -> String {
    Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .and_then(|o| {
            if o.status.success() {
                String::from_utf8(o.stdout)
                    .ok()
                    .map(|s| s.trim().to_string())
            } else {
                None
            }
        })
        .unwrap_or_else(|| "unknown".into())
}

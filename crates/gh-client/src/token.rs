//! GitHub token resolution
//!
//! Looks up a personal access token for a host from the environment or from
//! the `gh` CLI's credential store.

use crate::DEFAULT_HOST;
use anyhow::{Context, Result};
use log::debug;
use std::fmt;

/// Where a resolved token came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    /// `GITHUB_TOKEN_{HOST}` environment variable
    HostEnv,
    /// `gh auth token --hostname {host}`
    GhCli,
    /// `GITHUB_TOKEN` or `GH_TOKEN` environment variable
    DefaultEnv,
}

impl fmt::Display for TokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenSource::HostEnv => write!(f, "host-specific env var"),
            TokenSource::GhCli => write!(f, "gh CLI"),
            TokenSource::DefaultEnv => write!(f, "GITHUB_TOKEN/GH_TOKEN"),
        }
    }
}

/// Resolves GitHub tokens for different hosts
///
/// Tries multiple sources in order:
/// 1. Host-specific env var (e.g., `GITHUB_TOKEN_GHE_EXAMPLE_COM`)
/// 2. `gh auth token --hostname {host}` command
/// 3. Generic `GITHUB_TOKEN` or `GH_TOKEN` (github.com only)
#[derive(Debug, Clone)]
pub struct TokenResolver {
    /// Cached default token from GITHUB_TOKEN/GH_TOKEN
    default_token: Option<String>,
}

impl Default for TokenResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenResolver {
    /// Create a new token resolver, capturing `GITHUB_TOKEN`/`GH_TOKEN`
    pub fn new() -> Self {
        let default_token = std::env::var("GITHUB_TOKEN")
            .or_else(|_| std::env::var("GH_TOKEN"))
            .ok()
            .filter(|t| !t.trim().is_empty());

        Self { default_token }
    }

    /// Get a token for the given host (None = github.com)
    pub async fn get_token(&self, host: Option<&str>) -> Result<String> {
        let (token, source) = self.resolve(host).await?;
        debug!(
            "Using token from {} for host {}",
            source,
            host.unwrap_or(DEFAULT_HOST)
        );
        Ok(token)
    }

    /// Resolve a token and report which source supplied it
    pub async fn resolve(&self, host: Option<&str>) -> Result<(String, TokenSource)> {
        let host = host.unwrap_or(DEFAULT_HOST);

        let env_key = host_env_key(host);
        if let Some(token) = std::env::var(&env_key)
            .ok()
            .filter(|t| !t.trim().is_empty())
        {
            return Ok((token.trim().to_string(), TokenSource::HostEnv));
        }

        debug!("Trying gh auth token for host {}", host);
        match gh_auth_token(host).await {
            Ok(Some(token)) => return Ok((token, TokenSource::GhCli)),
            Ok(None) => debug!("gh CLI has no token for host {}", host),
            Err(e) => debug!("gh CLI unavailable: {:#}", e),
        }

        if host == DEFAULT_HOST {
            if let Some(ref token) = self.default_token {
                return Ok((token.trim().to_string(), TokenSource::DefaultEnv));
            }
        }

        Err(anyhow::anyhow!(
            "No token found for host '{}'. \
             Set {} or run 'gh auth login --hostname {}'",
            host,
            env_key,
            host
        ))
    }
}

/// Env var name holding a host-specific token, e.g. `GITHUB_TOKEN_GHE_EXAMPLE_COM`
fn host_env_key(host: &str) -> String {
    format!(
        "GITHUB_TOKEN_{}",
        host.replace(['.', '-'], "_").to_uppercase()
    )
}

/// Ask the gh CLI for its stored token; `Ok(None)` when gh ran but has none
async fn gh_auth_token(host: &str) -> Result<Option<String>> {
    let output = tokio::process::Command::new("gh")
        .args(["auth", "token", "--hostname", host])
        .output()
        .await
        .context("Failed to run 'gh auth token'")?;

    if !output.status.success() {
        return Ok(None);
    }

    let token = String::from_utf8(output.stdout)
        .context("Invalid UTF-8 in gh auth token output")?
        .trim()
        .to_string();

    Ok(Some(token).filter(|t| !t.is_empty()))
}

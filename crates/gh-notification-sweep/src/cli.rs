//! Command line interface

use crate::config::PipelineConfig;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "gh-notification-sweep")]
#[command(about = "Mark GitHub notifications for closed or merged pull requests as done")]
#[command(version)]
pub struct Cli {
    /// Repository in the <owner>/<repository> format that should be skipped during deletion
    #[arg(long = "repo", value_name = "OWNER/NAME", value_parser = parse_repository)]
    pub repos: Vec<String>,

    /// Organization (or user) that should be skipped during deletion
    #[arg(long = "org", value_name = "NAME")]
    pub orgs: Vec<String>,

    /// Only print the notifications that would be deleted
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    pub fn into_config(self) -> PipelineConfig {
        PipelineConfig::new(self.dry_run, self.repos, self.orgs)
    }
}

/// Accept `owner/name` with both parts non-empty
fn parse_repository(value: &str) -> Result<String, String> {
    match value.trim().split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
            Ok(format!("{}/{}", owner, name))
        }
        _ => Err(format!(
            "'{}' is not in the <owner>/<repository> format",
            value
        )),
    }
}

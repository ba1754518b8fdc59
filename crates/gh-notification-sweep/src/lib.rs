//! Clear GitHub notifications for pull requests that are already closed
//!
//! The sweep lists the whole notifications inbox, then runs two worker pools
//! one after the other:
//!
//! 1. **Classifier** ([`classifier`]): keeps pull request notifications that
//!    no skip predicate excludes and whose pull request is closed or merged.
//! 2. **Resolver** ([`resolver`]): marks each surviving notification as done,
//!    or only reports it in dry-run mode.
//!
//! Per-item failures are logged and counted; only authentication and
//! listing failures abort a run.

pub mod classifier;
pub mod cli;
pub mod config;
pub mod logger;
pub mod pipeline;
pub mod pull_ref;
pub mod queue;
pub mod report;
pub mod resolver;
pub mod skip;

#[cfg(test)]
mod test_support;

pub use config::PipelineConfig;
pub use pipeline::run_pipeline;
pub use pull_ref::{PullRequestRef, PullRequestRefError};
pub use report::{ClassifierStats, ResolverStats, SweepReport};
pub use skip::{SkipPredicate, SkipPredicates};

use anyhow::Context;
use gh_client::GitHubClient;
use log::info;
use std::sync::Arc;

/// Notifications requested per page (the API maximum)
pub const NOTIFICATIONS_PER_PAGE: u8 = 100;

/// List the whole inbox, then run the pipeline over it
///
/// Fails only if listing fails; the pipeline itself never does.
pub async fn sweep<C>(client: Arc<C>, config: PipelineConfig) -> anyhow::Result<SweepReport>
where
    C: GitHubClient + ?Sized + 'static,
{
    let notifications = client
        .list_notifications(NOTIFICATIONS_PER_PAGE)
        .await
        .context("failed to list notifications")?;
    info!("Found {} notifications", notifications.len());

    Ok(run_pipeline(client, notifications, Arc::new(config)).await)
}

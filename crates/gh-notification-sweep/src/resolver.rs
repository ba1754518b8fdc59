//! Resolver stage
//!
//! Marks classified notifications as done (or, in dry-run, only reports
//! them). A failed call is logged and the worker moves on; nothing is retried.

use crate::queue::WorkQueue;
use crate::report::ResolverStats;
use gh_client::{GitHubClient, Notification};
use log::{debug, error, info};
use std::sync::Arc;

/// Outcome for a single notification
#[derive(Debug)]
pub enum Resolution {
    /// Marked as done
    Removed,
    /// Dry-run: would have been marked as done
    DryRun,
    /// The API call failed
    Failed(anyhow::Error),
}

/// Resolve one notification; dry-run makes no API call at all
pub async fn resolve<C>(client: &C, dry_run: bool, notification: &Notification) -> Resolution
where
    C: GitHubClient + ?Sized,
{
    if dry_run {
        return Resolution::DryRun;
    }

    match client.mark_notification_done(&notification.id).await {
        Ok(()) => Resolution::Removed,
        Err(e) => Resolution::Failed(e),
    }
}

/// Resolver worker loop
///
/// Pulls classified notifications from `inbox` until it is closed and drained.
pub async fn run_worker<C>(
    worker: usize,
    client: Arc<C>,
    dry_run: bool,
    inbox: WorkQueue<Notification>,
) -> ResolverStats
where
    C: GitHubClient + ?Sized,
{
    let mut stats = ResolverStats::default();

    while let Some(notification) = inbox.next().await {
        let url = notification.subject.url.clone();

        match resolve(client.as_ref(), dry_run, &notification).await {
            Resolution::Removed => {
                info!("Removed notification for {}", url);
                stats.removed.push(url);
            }
            Resolution::DryRun => {
                info!("[dry-run] Removed notification for {}", url);
                stats.removed.push(url);
            }
            Resolution::Failed(e) => {
                stats.failed += 1;
                error!(
                    "failed to mark notification {} as done: {:#}",
                    notification.id, e
                );
            }
        }
    }

    debug!(
        "resolver {} finished: {} removed, {} failed",
        worker,
        stats.removed.len(),
        stats.failed
    );
    stats
}

//! Classifier stage
//!
//! Decides which notifications are eligible for removal: pull request
//! subjects, not excluded by a skip predicate, whose pull request is closed
//! or merged. Every other notification is dropped here. Failures are logged
//! per item and never stop the worker.

use crate::pull_ref::{PullRequestRef, PullRequestRefError};
use crate::queue::WorkQueue;
use crate::report::ClassifierStats;
use crate::skip::SkipPredicates;
use gh_client::{GitHubClient, Notification};
use log::{debug, error};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Decision for a single notification
#[derive(Debug)]
pub enum Classification {
    /// Subject is not a pull request
    NotPullRequest,
    /// Excluded by the named skip predicate
    Skipped(&'static str),
    /// Subject URL doesn't identify a pull request
    MalformedReference(PullRequestRefError),
    /// Pull request lookup failed
    FetchFailed {
        pull: PullRequestRef,
        error: anyhow::Error,
    },
    /// Pull request is still open
    Open(PullRequestRef),
    /// Pull request is closed or merged
    Closed(PullRequestRef),
}

impl Classification {
    /// Only closed pull requests move on to the resolver
    pub fn is_forwarded(&self) -> bool {
        matches!(self, Classification::Closed(_))
    }
}

/// Classify one notification, fetching its pull request if needed
///
/// Skip predicates are checked before any network call.
pub async fn classify<C>(
    client: &C,
    skip: &SkipPredicates,
    notification: &Notification,
) -> Classification
where
    C: GitHubClient + ?Sized,
{
    if !notification.is_pull_request() {
        return Classification::NotPullRequest;
    }

    if let Some(rule) = skip.first_match(notification) {
        return Classification::Skipped(rule);
    }

    let pull = match PullRequestRef::from_api_url(&notification.subject.url) {
        Ok(pull) => pull,
        Err(e) => return Classification::MalformedReference(e),
    };

    match client
        .fetch_pull_request(&pull.owner, &pull.repo, pull.number)
        .await
    {
        Ok(pr) if pr.state.is_closed() => Classification::Closed(pull),
        Ok(_) => Classification::Open(pull),
        Err(error) => Classification::FetchFailed { pull, error },
    }
}

/// Classifier worker loop
///
/// Pulls notifications from `inbox` until it is closed and drained, forwarding
/// closed pull request notifications to `outbox`.
pub async fn run_worker<C>(
    worker: usize,
    client: Arc<C>,
    skip: Arc<SkipPredicates>,
    inbox: WorkQueue<Notification>,
    outbox: mpsc::Sender<Notification>,
) -> ClassifierStats
where
    C: GitHubClient + ?Sized,
{
    let mut stats = ClassifierStats::default();

    while let Some(notification) = inbox.next().await {
        stats.examined += 1;
        let url = &notification.subject.url;

        let classification = classify(client.as_ref(), &skip, &notification).await;
        match classification {
            Classification::NotPullRequest => {
                stats.not_pull_request += 1;
                debug!(
                    "classifier {}: ignoring {} notification {}",
                    worker, notification.subject.kind, notification.id
                );
            }
            Classification::Skipped(rule) => {
                stats.skipped += 1;
                debug!(
                    "classifier {}: skipping {} ({} rule, {})",
                    worker, url, rule, notification.repository.full_name
                );
            }
            Classification::MalformedReference(e) => {
                stats.malformed += 1;
                error!("failed to parse pull request reference: {}", e);
            }
            Classification::FetchFailed { pull, error } => {
                stats.fetch_failed += 1;
                error!("failed to fetch PR {} for {}: {:#}", pull, url, error);
            }
            Classification::Open(pull) => {
                stats.open += 1;
                debug!("classifier {}: {} is still open", worker, pull);
            }
            Classification::Closed(pull) => {
                stats.closed += 1;
                debug!(
                    "classifier {}: {} is closed (notification updated {})",
                    worker, pull, notification.updated_at
                );
                if outbox.send(notification).await.is_err() {
                    error!("classifier {}: output channel closed, stopping", worker);
                    break;
                }
            }
        }
    }

    debug!("classifier {} finished: {:?}", worker, stats);
    stats
}

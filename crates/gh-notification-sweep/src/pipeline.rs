//! Pipeline coordinator
//!
//! Runs the classifier pool and then the resolver pool as two sequential
//! phases:
//!
//! ```text
//! notifications ──► [input queue] ──► classifier × N ──► [output queue]
//!                                                             │  (join barrier)
//!                                                             ▼
//!                                                      resolver × N ──► log
//! ```
//!
//! Both queues are sized to the notification count so the producer never
//! waits. No resolver is spawned until every classifier has been joined.

use crate::classifier;
use crate::config::PipelineConfig;
use crate::queue;
use crate::report::{ClassifierStats, ResolverStats, SweepReport};
use crate::resolver;
use crate::skip::SkipPredicates;
use gh_client::{GitHubClient, Notification};
use log::{debug, error};
use std::ops::AddAssign;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Run both stages over a fully listed inbox
///
/// Item-level failures are logged and counted in the report; this never fails.
pub async fn run_pipeline<C>(
    client: Arc<C>,
    notifications: Vec<Notification>,
    config: Arc<PipelineConfig>,
) -> SweepReport
where
    C: GitHubClient + ?Sized + 'static,
{
    let workers = config.workers.max(1);
    let capacity = notifications.len();
    let skip = Arc::new(SkipPredicates::from_config(&config));
    debug!(
        "Starting pipeline: {} notifications, {} workers per stage, skip rules {:?}",
        capacity, workers, skip
    );

    let (input_tx, input) = queue::bounded(capacity);
    let (output_tx, output) = queue::bounded(capacity);

    // Phase 1: classify
    let classifiers: Vec<_> = (0..workers)
        .map(|worker| {
            tokio::spawn(classifier::run_worker(
                worker,
                Arc::clone(&client),
                Arc::clone(&skip),
                input.clone(),
                output_tx.clone(),
            ))
        })
        .collect();

    for notification in notifications {
        if input_tx.send(notification).await.is_err() {
            error!("all classifier workers exited early, dropping remaining notifications");
            break;
        }
    }
    drop(input_tx);

    let classifier_stats: ClassifierStats = join_pool("classifier", classifiers).await;

    // Every classifier has exited, so this was the last sender
    drop(output_tx);

    // Phase 2: resolve
    let resolvers: Vec<_> = (0..workers)
        .map(|worker| {
            tokio::spawn(resolver::run_worker(
                worker,
                Arc::clone(&client),
                config.dry_run,
                output.clone(),
            ))
        })
        .collect();

    let resolver_stats: ResolverStats = join_pool("resolver", resolvers).await;

    SweepReport {
        dry_run: config.dry_run,
        classifier: classifier_stats,
        resolver: resolver_stats,
    }
}

/// Wait for every worker of a pool and sum their stats
///
/// A panicked worker is logged; the others' results still count.
async fn join_pool<S>(stage: &str, handles: Vec<JoinHandle<S>>) -> S
where
    S: Default + AddAssign,
{
    let mut total = S::default();
    for handle in handles {
        match handle.await {
            Ok(stats) => total += stats,
            Err(e) => error!("{} worker failed: {}", stage, e),
        }
    }
    total
}

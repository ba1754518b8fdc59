//! Per-stage counters and the run summary
//!
//! Each worker fills its own stats; the coordinator sums them after joining
//! the pool, so no counter is ever shared between workers.

use log::info;
use std::ops::AddAssign;

/// What the classifier stage did with each notification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassifierStats {
    /// Notifications taken from the input queue
    pub examined: usize,
    /// Subjects that are not pull requests
    pub not_pull_request: usize,
    /// Matched a skip predicate
    pub skipped: usize,
    /// Subject URL could not be parsed
    pub malformed: usize,
    /// Pull request lookup failed
    pub fetch_failed: usize,
    /// Pull request still open
    pub open: usize,
    /// Pull request closed or merged (forwarded)
    pub closed: usize,
}

impl AddAssign for ClassifierStats {
    fn add_assign(&mut self, other: Self) {
        self.examined += other.examined;
        self.not_pull_request += other.not_pull_request;
        self.skipped += other.skipped;
        self.malformed += other.malformed;
        self.fetch_failed += other.fetch_failed;
        self.open += other.open;
        self.closed += other.closed;
    }
}

/// What the resolver stage did with each classified notification
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolverStats {
    /// Subject URLs reported as removed (or would-be removed in dry-run)
    pub removed: Vec<String>,
    /// Resolution calls that failed
    pub failed: usize,
}

impl AddAssign for ResolverStats {
    fn add_assign(&mut self, other: Self) {
        self.removed.extend(other.removed);
        self.failed += other.failed;
    }
}

/// Outcome of one pipeline run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub dry_run: bool,
    pub classifier: ClassifierStats,
    pub resolver: ResolverStats,
}

impl SweepReport {
    /// Removed subject URLs in sorted order (workers finish in any order)
    pub fn removed_sorted(&self) -> Vec<String> {
        let mut removed = self.resolver.removed.clone();
        removed.sort();
        removed
    }

    pub fn log_summary(&self) {
        let c = &self.classifier;
        info!(
            "Examined {} notifications: {} closed, {} open, {} skipped, {} not pull requests, {} malformed, {} lookup failures",
            c.examined, c.closed, c.open, c.skipped, c.not_pull_request, c.malformed, c.fetch_failed
        );

        if self.dry_run {
            info!(
                "Dry run: {} notifications would be removed",
                self.resolver.removed.len()
            );
        } else {
            info!(
                "Removed {} notifications ({} failed)",
                self.resolver.removed.len(),
                self.resolver.failed
            );
        }
    }
}

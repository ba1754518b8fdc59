//! Pipeline configuration
//!
//! Built once from the command line before the pipeline starts and shared
//! read-only with every worker afterwards.

use std::collections::BTreeSet;
use std::num::NonZeroUsize;

/// Settings for one sweep run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Report what would be removed without marking anything done
    pub dry_run: bool,

    /// Repositories (`owner/name`) whose notifications are kept
    pub skip_repositories: BTreeSet<String>,

    /// Owners (users or organizations) whose notifications are kept
    pub skip_organizations: BTreeSet<String>,

    /// Workers per stage
    pub workers: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            dry_run: false,
            skip_repositories: BTreeSet::new(),
            skip_organizations: BTreeSet::new(),
            workers: default_workers(),
        }
    }
}

impl PipelineConfig {
    /// Config with the given exclusions and the default worker count
    pub fn new<R, O>(dry_run: bool, skip_repositories: R, skip_organizations: O) -> Self
    where
        R: IntoIterator<Item = String>,
        O: IntoIterator<Item = String>,
    {
        Self {
            dry_run,
            skip_repositories: skip_repositories.into_iter().collect(),
            skip_organizations: skip_organizations.into_iter().collect(),
            workers: default_workers(),
        }
    }

    /// Override the number of workers per stage (at least one)
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }
}

/// Available hardware parallelism, falling back to a single worker
pub fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert!(!config.dry_run);
        assert!(config.skip_repositories.is_empty());
        assert!(config.skip_organizations.is_empty());
        assert!(config.workers >= 1);
    }

    #[test]
    fn test_new_deduplicates_exclusions() {
        let config = PipelineConfig::new(
            true,
            vec!["acme/web".to_string(), "acme/web".to_string()],
            vec!["rust-lang".to_string()],
        );
        assert!(config.dry_run);
        assert_eq!(config.skip_repositories.len(), 1);
        assert!(config.skip_organizations.contains("rust-lang"));
    }

    #[test]
    fn test_with_workers_floor() {
        assert_eq!(PipelineConfig::default().with_workers(0).workers, 1);
        assert_eq!(PipelineConfig::default().with_workers(8).workers, 8);
    }
}

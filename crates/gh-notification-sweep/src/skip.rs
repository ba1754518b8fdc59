//! Skip predicates
//!
//! User-configured exclusion rules. A notification is kept in the inbox (and
//! never looked up) if ANY configured predicate matches it. Predicates only
//! look at the notification's repository, never at the pull request.

use crate::config::PipelineConfig;
use gh_client::Notification;
use std::collections::BTreeSet;
use std::fmt;

/// A pure test of one exclusion criterion
pub type SkipPredicate = Box<dyn Fn(&Notification) -> bool + Send + Sync>;

/// Ordered set of skip predicates combined with logical OR
#[derive(Default)]
pub struct SkipPredicates {
    predicates: Vec<(&'static str, SkipPredicate)>,
}

impl fmt::Debug for SkipPredicates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.predicates.iter().map(|(name, _)| name))
            .finish()
    }
}

impl SkipPredicates {
    /// Build at most one predicate per exclusion category present in the config
    pub fn from_config(config: &PipelineConfig) -> Self {
        let mut predicates = Self::default();

        if !config.skip_repositories.is_empty() {
            predicates.push("repository", repository_predicate(config.skip_repositories.clone()));
        }

        if !config.skip_organizations.is_empty() {
            predicates.push(
                "organization",
                organization_predicate(config.skip_organizations.clone()),
            );
        }

        predicates
    }

    /// Append a named predicate
    pub fn push(&mut self, name: &'static str, predicate: SkipPredicate) {
        self.predicates.push((name, predicate));
    }

    /// Name of the first predicate matching the notification, if any
    pub fn first_match(&self, notification: &Notification) -> Option<&'static str> {
        self.predicates
            .iter()
            .find(|(_, predicate)| predicate(notification))
            .map(|(name, _)| *name)
    }

    /// True iff any predicate matches
    pub fn matches(&self, notification: &Notification) -> bool {
        self.first_match(notification).is_some()
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

/// Matches notifications whose repository full name is in `repos`
pub fn repository_predicate(repos: BTreeSet<String>) -> SkipPredicate {
    Box::new(move |notification| repos.contains(&notification.repository.full_name))
}

/// Matches notifications whose repository owner login is in `orgs`
pub fn organization_predicate(orgs: BTreeSet<String>) -> SkipPredicate {
    Box::new(move |notification| orgs.contains(&notification.repository.owner))
}

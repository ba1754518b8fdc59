//! GitHub API data transfer objects
//!
//! These types represent the data returned from the GitHub API.
//! They are intentionally separate from octocrab's models so that
//! consumers (and their tests) don't need to build full API payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Subject type GitHub reports for pull request notifications
pub const PULL_REQUEST_SUBJECT: &str = "PullRequest";

/// A notification thread from the user's inbox
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Thread id (numeric, but opaque to callers)
    pub id: String,

    /// What the notification is about
    pub subject: NotificationSubject,

    /// Repository the notification belongs to
    pub repository: NotificationRepository,

    /// When the thread was last updated
    pub updated_at: DateTime<Utc>,
}

impl Notification {
    /// Whether the subject is a pull request
    pub fn is_pull_request(&self) -> bool {
        self.subject.kind == PULL_REQUEST_SUBJECT
    }
}

/// The resource a notification refers to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSubject {
    /// Subject title (e.g., the PR title)
    pub title: String,

    /// API URL of the subject (e.g., `https://api.github.com/repos/o/r/pulls/1`)
    ///
    /// Empty when GitHub doesn't provide one (e.g., for some discussions).
    pub url: String,

    /// Subject type (e.g., "PullRequest", "Issue", "Release")
    #[serde(rename = "type")]
    pub kind: String,
}

/// Repository identity as embedded in a notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRepository {
    /// Full name in `owner/name` format
    pub full_name: String,

    /// Owner login (user or organization)
    pub owner: String,
}

/// A pull request from the GitHub API
///
/// Only the fields the sweep needs are carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    /// PR number (e.g., 123)
    pub number: u64,

    /// Current state
    pub state: PullRequestState,
}

/// Pull request state
///
/// GitHub reports merged pull requests with state "closed"; the merge is
/// only visible through `merged_at`. Both count as closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PullRequestState {
    /// Still open
    #[default]
    Open,
    /// Closed without merging
    Closed,
    /// Merged (and therefore closed)
    Merged,
}

impl PullRequestState {
    /// Closed or merged
    pub fn is_closed(&self) -> bool {
        matches!(self, PullRequestState::Closed | PullRequestState::Merged)
    }
}

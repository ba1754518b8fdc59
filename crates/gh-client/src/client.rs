//! GitHub client trait
//!
//! This module defines the core `GitHubClient` trait that all client
//! implementations must satisfy.

use crate::types::{Notification, PullRequest};
use async_trait::async_trait;

/// GitHub API client trait
///
/// Defines the interface for interacting with the GitHub API.
/// The production implementation is [`crate::OctocrabClient`]; tests
/// substitute scripted implementations.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across
/// async tasks and threads.
///
/// # Example
///
/// ```rust,ignore
/// use gh_client::{GitHubClient, PullRequestState};
///
/// async fn is_closed(client: &dyn GitHubClient) -> anyhow::Result<bool> {
///     let pr = client.fetch_pull_request("rust-lang", "rust", 1).await?;
///     Ok(pr.state.is_closed())
/// }
/// ```
#[async_trait]
pub trait GitHubClient: Send + Sync {
    /// List every pending notification for the authenticated user
    ///
    /// Follows pagination until the API reports no further page.
    ///
    /// # Arguments
    ///
    /// * `per_page` - Page size requested from the API (max 100)
    ///
    /// # Returns
    ///
    /// All notifications across all pages, or the first page error.
    async fn list_notifications(&self, per_page: u8) -> anyhow::Result<Vec<Notification>>;

    /// Fetch a single pull request by number
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner
    /// * `repo` - Repository name
    /// * `pr_number` - Pull request number
    ///
    /// # Returns
    ///
    /// The pull request's current state, or an error if not found.
    async fn fetch_pull_request(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
    ) -> anyhow::Result<PullRequest>;

    /// Mark a notification thread as done
    ///
    /// Done threads disappear from the inbox (not just marked read).
    ///
    /// # Arguments
    ///
    /// * `thread_id` - The notification id as listed
    ///
    /// # Returns
    ///
    /// Ok(()) on success, error on failure or a non-numeric id
    async fn mark_notification_done(&self, thread_id: &str) -> anyhow::Result<()>;
}

//! Octocrab-based GitHub API client
//!
//! Direct implementation of the `GitHubClient` trait using the octocrab library.
//! This client makes real API calls without any caching.

use crate::client::GitHubClient;
use crate::types::{
    Notification, NotificationRepository, NotificationSubject, PullRequest, PullRequestState,
};
use crate::DEFAULT_HOST;
use anyhow::Context;
use async_trait::async_trait;
use log::{debug, info};
use octocrab::models::activity;
use octocrab::Octocrab;
use std::sync::Arc;

/// Direct GitHub API client using octocrab
#[derive(Debug, Clone)]
pub struct OctocrabClient {
    octocrab: Arc<Octocrab>,
}

impl OctocrabClient {
    /// Create a new client with the given octocrab instance
    pub fn new(octocrab: Arc<Octocrab>) -> Self {
        Self { octocrab }
    }

    /// Build an authenticated client for the given host (None = github.com)
    ///
    /// Enterprise hosts are addressed through their `/api/v3` endpoint.
    pub fn connect(token: String, host: Option<&str>) -> anyhow::Result<Self> {
        let mut builder = Octocrab::builder().personal_token(token);

        if let Some(h) = host.filter(|h| *h != DEFAULT_HOST) {
            let uri = format!("https://{}/api/v3", h);
            builder = builder.base_uri(&uri).context("Failed to set base URI")?;
        }

        let octocrab = builder.build().context("Failed to build Octocrab client")?;
        info!(
            "GitHub client created for host: {}",
            host.unwrap_or(DEFAULT_HOST)
        );
        Ok(Self::new(Arc::new(octocrab)))
    }

    /// Get a reference to the underlying octocrab instance
    pub fn octocrab(&self) -> &Octocrab {
        &self.octocrab
    }
}

#[async_trait]
impl GitHubClient for OctocrabClient {
    async fn list_notifications(&self, per_page: u8) -> anyhow::Result<Vec<Notification>> {
        debug!("Fetching notifications (per_page = {})", per_page);

        let mut page = self
            .octocrab
            .activity()
            .notifications()
            .list()
            .per_page(per_page)
            .send()
            .await
            .context("failed to list notifications")?;

        let mut notifications = Vec::new();
        let mut page_num = 1u32;

        loop {
            let items = page.take_items();
            debug!("Notification page {}: {} items", page_num, items.len());
            notifications.extend(items.iter().map(convert_notification));

            match self
                .octocrab
                .get_page::<activity::Notification>(&page.next)
                .await
                .with_context(|| format!("failed to list notifications (page {})", page_num + 1))?
            {
                Some(next) => {
                    page = next;
                    page_num += 1;
                }
                None => break,
            }
        }

        debug!(
            "Fetched {} notifications across {} pages",
            notifications.len(),
            page_num
        );
        Ok(notifications)
    }

    async fn fetch_pull_request(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
    ) -> anyhow::Result<PullRequest> {
        debug!("Fetching PR #{} for {}/{}", pr_number, owner, repo);

        let pr = self.octocrab.pulls(owner, repo).get(pr_number).await?;

        Ok(PullRequest {
            number: pr.number,
            state: convert_pull_request_state(pr.state.as_ref(), pr.merged_at.is_some()),
        })
    }

    async fn mark_notification_done(&self, thread_id: &str) -> anyhow::Result<()> {
        let id = parse_thread_id(thread_id)?;
        debug!("Marking notification thread {} as done", id);

        // DELETE answers 204 without a body, so the typed `delete` helper can't be used
        let route = format!("/notifications/threads/{}", id);
        let response = self.octocrab._delete(route, None::<&()>).await?;
        octocrab::map_github_error(response).await?;

        Ok(())
    }
}

/// Notification thread ids are numeric on the wire but listed as strings
fn parse_thread_id(thread_id: &str) -> anyhow::Result<u64> {
    thread_id
        .trim()
        .parse::<u64>()
        .with_context(|| format!("invalid notification id '{}'", thread_id))
}

/// Convert octocrab Notification to our Notification type
fn convert_notification(notification: &activity::Notification) -> Notification {
    let repository = &notification.repository;
    let owner = repository
        .owner
        .as_ref()
        .map(|o| o.login.clone())
        .unwrap_or_default();

    Notification {
        id: notification.id.to_string(),
        subject: NotificationSubject {
            title: notification.subject.title.clone(),
            url: notification
                .subject
                .url
                .as_ref()
                .map(|u| u.to_string())
                .unwrap_or_default(),
            kind: notification.subject.r#type.clone(),
        },
        repository: NotificationRepository {
            full_name: repository
                .full_name
                .clone()
                .unwrap_or_else(|| format!("{}/{}", owner, repository.name)),
            owner,
        },
        updated_at: notification.updated_at,
    }
}

/// Convert octocrab IssueState (plus merge marker) to our PullRequestState
fn convert_pull_request_state(
    state: Option<&octocrab::models::IssueState>,
    merged: bool,
) -> PullRequestState {
    use octocrab::models::IssueState;
    match state {
        Some(IssueState::Closed) if merged => PullRequestState::Merged,
        Some(IssueState::Closed) => PullRequestState::Closed,
        Some(IssueState::Open) => PullRequestState::Open,
        // Unknown or missing states are treated as still open
        _ => PullRequestState::Open,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use octocrab::models::IssueState;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_convert_pull_request_state() {
        assert_eq!(
            convert_pull_request_state(Some(&IssueState::Open), false),
            PullRequestState::Open
        );
        assert_eq!(
            convert_pull_request_state(Some(&IssueState::Closed), false),
            PullRequestState::Closed
        );
        assert_eq!(
            convert_pull_request_state(Some(&IssueState::Closed), true),
            PullRequestState::Merged
        );
        assert_eq!(convert_pull_request_state(None, false), PullRequestState::Open);
    }

    #[test]
    fn test_parse_thread_id() {
        assert_eq!(parse_thread_id("1").unwrap(), 1);
        assert_eq!(parse_thread_id(" 9876543210 ").unwrap(), 9_876_543_210);
    }

    #[test]
    fn test_parse_thread_id_rejects_non_numeric() {
        let err = parse_thread_id("abc").unwrap_err();
        assert!(err.to_string().contains("invalid notification id 'abc'"));
        assert!(parse_thread_id("").is_err());
        assert!(parse_thread_id("-3").is_err());
    }
}

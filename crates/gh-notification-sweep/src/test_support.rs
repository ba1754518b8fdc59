//! Scripted GitHub client and notification builders for tests

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use gh_client::{
    GitHubClient, Notification, NotificationRepository, NotificationSubject, PullRequest,
    PullRequestState, PULL_REQUEST_SUBJECT,
};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// Build a notification with an arbitrary subject
pub fn notification(id: &str, kind: &str, url: &str, full_name: &str) -> Notification {
    let owner = full_name.split('/').next().unwrap_or_default().to_string();
    Notification {
        id: id.to_string(),
        subject: NotificationSubject {
            title: format!("subject {}", id),
            url: url.to_string(),
            kind: kind.to_string(),
        },
        repository: NotificationRepository {
            full_name: full_name.to_string(),
            owner,
        },
        updated_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
    }
}

/// Build a pull request notification pointing at `full_name#number`
pub fn pr_notification(id: &str, full_name: &str, number: u64) -> Notification {
    notification(
        id,
        PULL_REQUEST_SUBJECT,
        &format!("https://api.github.com/repos/{}/pulls/{}", full_name, number),
        full_name,
    )
}

/// In-memory GitHub client with scripted answers and call recording
#[derive(Default)]
pub struct MockClient {
    notifications: Vec<Notification>,
    pull_states: HashMap<(String, u64), PullRequestState>,
    failing_done: HashSet<String>,
    calls: Mutex<Vec<Call>>,
}

/// A recorded API call, in the order the mock received it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Fetch(String),
    Done(String),
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_notifications(mut self, notifications: Vec<Notification>) -> Self {
        self.notifications = notifications;
        self
    }

    /// Script the state of `full_name#number`; unscripted PRs fail to fetch
    pub fn with_pull(mut self, full_name: &str, number: u64, state: PullRequestState) -> Self {
        self.pull_states.insert((full_name.to_string(), number), state);
        self
    }

    /// Make marking `thread_id` as done fail
    pub fn failing_done(mut self, thread_id: &str) -> Self {
        self.failing_done.insert(thread_id.to_string());
        self
    }

    /// PRs fetched so far, as `owner/repo#number`
    pub fn fetched(&self) -> Vec<String> {
        let mut fetched: Vec<String> = self
            .calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Fetch(pr) => Some(pr),
                Call::Done(_) => None,
            })
            .collect();
        fetched.sort();
        fetched
    }

    /// Thread ids passed to `mark_notification_done` so far (including failures)
    pub fn done_calls(&self) -> Vec<String> {
        let mut done: Vec<String> = self
            .calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Done(id) => Some(id),
                Call::Fetch(_) => None,
            })
            .collect();
        done.sort();
        done
    }

    /// Every call in arrival order
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GitHubClient for MockClient {
    async fn list_notifications(&self, _per_page: u8) -> anyhow::Result<Vec<Notification>> {
        Ok(self.notifications.clone())
    }

    async fn fetch_pull_request(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
    ) -> anyhow::Result<PullRequest> {
        let full_name = format!("{}/{}", owner, repo);
        self.calls
            .lock()
            .unwrap()
            .push(Call::Fetch(format!("{}#{}", full_name, pr_number)));

        match self.pull_states.get(&(full_name.clone(), pr_number)) {
            Some(state) => Ok(PullRequest {
                number: pr_number,
                state: *state,
            }),
            None => Err(anyhow::anyhow!("Not Found: {}#{}", full_name, pr_number)),
        }
    }

    async fn mark_notification_done(&self, thread_id: &str) -> anyhow::Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Done(thread_id.to_string()));

        if self.failing_done.contains(thread_id) {
            return Err(anyhow::anyhow!("502 Bad Gateway"));
        }
        Ok(())
    }
}

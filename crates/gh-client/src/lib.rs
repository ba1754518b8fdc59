//! GitHub API client for the notifications inbox
//!
//! This crate provides a trait-based GitHub API client covering the three
//! calls the notification sweep needs: listing the inbox, looking up a pull
//! request, and marking a notification thread as done.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              GitHubClient trait                  │
//! │  - list_notifications()                          │
//! │  - fetch_pull_request()                          │
//! │  - mark_notification_done()                      │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!              ┌─────────────────┐
//!              │ OctocrabClient  │
//!              │ (direct API)    │
//!              └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_client::{GitHubClient, OctocrabClient, TokenResolver};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let token = TokenResolver::new().get_token(None).await?;
//! let client = OctocrabClient::connect(token, None)?;
//!
//! let notifications = client.list_notifications(100).await?;
//! for notification in &notifications {
//!     println!("{} {}", notification.id, notification.subject.url);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod octocrab_client;
pub mod token;
pub mod types;

/// Default GitHub host (public GitHub)
pub const DEFAULT_HOST: &str = "github.com";

pub use client::GitHubClient;
pub use octocrab_client::OctocrabClient;
pub use token::{TokenResolver, TokenSource};
pub use types::{
    Notification, NotificationRepository, NotificationSubject, PullRequest, PullRequestState,
    PULL_REQUEST_SUBJECT,
};

// Re-export octocrab so consumers don't need to depend on it directly
pub use octocrab;

//! Pull request references
//!
//! Extracts the owner, repository and number of a pull request from the API
//! URL attached to a notification subject.

use regex::Regex;
use std::fmt;
use std::num::ParseIntError;
use std::sync::OnceLock;
use thiserror::Error;

/// Errors that can occur while parsing a subject URL
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PullRequestRefError {
    #[error("no pull request reference in '{0}'")]
    NoMatch(String),

    #[error("invalid pull request number in '{url}': {source}")]
    InvalidNumber {
        url: String,
        #[source]
        source: ParseIntError,
    },
}

/// Identity of a pull request: `owner/repo#number`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestRef {
    pub owner: String,
    pub repo: String,
    pub number: u64,
}

impl PullRequestRef {
    /// Parse an API URL like `https://api.github.com/repos/{owner}/{repo}/pulls/{number}`
    ///
    /// GitHub Enterprise URLs (`https://{host}/api/v3/repos/...`) are accepted too.
    pub fn from_api_url(url: &str) -> Result<Self, PullRequestRefError> {
        static PULL_URL_REGEX: OnceLock<Regex> = OnceLock::new();

        let re = PULL_URL_REGEX.get_or_init(|| {
            Regex::new(r"^https?://[^/]+(?:/api/v3)?/repos/([\w.-]+)/([\w.-]+)/pulls/(\d+)/?$")
                .unwrap()
        });

        let captures = re
            .captures(url.trim())
            .ok_or_else(|| PullRequestRefError::NoMatch(url.to_string()))?;

        let number = captures[3]
            .parse::<u64>()
            .map_err(|source| PullRequestRefError::InvalidNumber {
                url: url.to_string(),
                source,
            })?;

        Ok(Self {
            owner: captures[1].to_string(),
            repo: captures[2].to_string(),
            number,
        })
    }
}

impl fmt::Display for PullRequestRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}#{}", self.owner, self.repo, self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_api_url() {
        let pr = PullRequestRef::from_api_url("https://api.github.com/repos/acme/web/pulls/42")
            .unwrap();
        assert_eq!(
            pr,
            PullRequestRef {
                owner: "acme".to_string(),
                repo: "web".to_string(),
                number: 42,
            }
        );
        assert_eq!(pr.to_string(), "acme/web#42");
    }

    #[test]
    fn test_parse_names_with_dots_and_dashes() {
        let pr = PullRequestRef::from_api_url(
            "https://api.github.com/repos/my-org/site.github.io/pulls/7",
        )
        .unwrap();
        assert_eq!(pr.owner, "my-org");
        assert_eq!(pr.repo, "site.github.io");
        assert_eq!(pr.number, 7);
    }

    #[test]
    fn test_parse_enterprise_url() {
        let pr = PullRequestRef::from_api_url("https://ghe.example.com/api/v3/repos/team/svc/pulls/3")
            .unwrap();
        assert_eq!(pr.to_string(), "team/svc#3");
    }

    #[test]
    fn test_reject_non_pull_urls() {
        for url in [
            "",
            "https://api.github.com/repos/acme/web/issues/42",
            "https://github.com/acme/web/pull/42",
            "https://api.github.com/repos/acme/web/pulls/",
            "https://api.github.com/repos/acme/web/pulls/42/comments",
        ] {
            assert_eq!(
                PullRequestRef::from_api_url(url),
                Err(PullRequestRefError::NoMatch(url.to_string())),
                "url: {:?}",
                url
            );
        }
    }

    #[test]
    fn test_reject_out_of_range_number() {
        let url = "https://api.github.com/repos/acme/web/pulls/99999999999999999999999";
        let err = PullRequestRef::from_api_url(url).unwrap_err();
        assert!(matches!(err, PullRequestRefError::InvalidNumber { .. }));
        assert!(err.to_string().starts_with("invalid pull request number"));
    }
}

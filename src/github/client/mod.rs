//! GitHub API client wrapper
//!
//! Provides clean API for GitHub operations without exposing Octocrab.
//!
//! # Examples
//!
//! ```rust,no_run
//! use kodegen_review_requests::{GitHubClient, ReviewRequestOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gh = GitHubClient::with_token("ghp_...")?;
//!
//!     let pull = gh
//!         .review_requests()
//!         .create(
//!             "octocat",
//!             "hello-world",
//!             42,
//!             ReviewRequestOptions::new()
//!                 .reviewers(["hubot"])
//!                 .team_reviewers(["justice-league"]),
//!         )
//!         .await??;
//!
//!     println!("{pull}");
//!     Ok(())
//! }
//! ```

use crate::github::error::{GitHubError, GitHubResult};
use jsonwebtoken::EncodingKey;
use octocrab::{Octocrab, models::AppId};
use std::sync::Arc;

mod pull_requests;

/// Public GitHub REST endpoint used when no base URI is configured.
pub const DEFAULT_BASE_URI: &str = "https://api.github.com";

/// Environment variable holding the personal access token.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Environment variable overriding the API base URI (GitHub Enterprise).
pub const API_URL_ENV: &str = "GITHUB_API_URL";

/// GitHub API client wrapper that encapsulates Octocrab.
///
/// Provides clean API without exposing Octocrab dependency.
/// Cloning is cheap (Arc clone).
#[derive(Clone, Debug)]
pub struct GitHubClient {
    inner: Arc<Octocrab>,
    base_uri: Arc<str>,
}

impl GitHubClient {
    /// Create a new client builder
    #[must_use]
    pub fn builder() -> GitHubClientBuilder {
        GitHubClientBuilder::new()
    }

    /// Convenience: create client with personal access token
    pub fn with_token(token: impl Into<String>) -> GitHubResult<Self> {
        Self::builder().personal_token(token).build()
    }

    /// Create a client from `GITHUB_TOKEN` and, if set, `GITHUB_API_URL`.
    pub fn from_env() -> GitHubResult<Self> {
        let token = std::env::var(TOKEN_ENV).map_err(|_| {
            GitHubError::ClientSetup(format!("{TOKEN_ENV} environment variable not set"))
        })?;

        let mut builder = Self::builder().personal_token(token);
        if let Some(uri) = std::env::var(API_URL_ENV)
            .ok()
            .filter(|uri| !uri.trim().is_empty())
        {
            builder = builder.base_uri(uri);
        }
        builder.build()
    }

    /// Get inner Octocrab client
    #[must_use]
    pub fn inner(&self) -> &Arc<Octocrab> {
        &self.inner
    }

    /// API root every request path is joined onto, without trailing slash.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }
}

/// Builder for creating `GitHubClient` with various authentication methods
pub struct GitHubClientBuilder {
    token: Option<String>,
    app_auth: Option<(AppId, String)>,
    base_uri: Option<String>,
}

impl GitHubClientBuilder {
    /// Create a new builder
    #[must_use]
    pub fn new() -> Self {
        Self {
            token: None,
            app_auth: None,
            base_uri: None,
        }
    }

    /// Set personal access token for authentication
    pub fn personal_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set GitHub App authentication (app ID and private key)
    pub fn app(mut self, app_id: AppId, private_key: impl Into<String>) -> Self {
        self.app_auth = Some((app_id, private_key.into()));
        self
    }

    /// Set base URI (for GitHub Enterprise)
    pub fn base_uri(mut self, uri: impl Into<String>) -> Self {
        self.base_uri = Some(uri.into());
        self
    }

    /// Build the `GitHubClient`
    pub fn build(self) -> GitHubResult<GitHubClient> {
        let mut builder = Octocrab::builder();

        // Set authentication
        if let Some(token) = self.token {
            builder = builder.personal_token(token);
        } else if let Some((app_id, private_key)) = self.app_auth {
            let key = EncodingKey::from_rsa_pem(private_key.as_bytes())
                .map_err(|e| GitHubError::ClientSetup(format!("Invalid RSA key: {e}")))?;
            builder = builder.app(app_id, key);
        }

        let base_uri = self
            .base_uri
            .as_deref()
            .map(|uri| uri.trim().trim_end_matches('/'))
            .filter(|uri| !uri.is_empty())
            .unwrap_or(DEFAULT_BASE_URI)
            .to_string();

        builder = builder
            .base_uri(base_uri.as_str())
            .map_err(|e| GitHubError::ClientSetup(e.to_string()))?;

        // Build Octocrab instance
        let octocrab = builder
            .build()
            .map_err(|e| GitHubError::ClientSetup(e.to_string()))?;

        Ok(GitHubClient {
            inner: Arc::new(octocrab),
            base_uri: Arc::from(base_uri),
        })
    }
}

impl Default for GitHubClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//! GitHub Pull Request review request operations.
//!
//! Covers `/repos/{owner}/{repo}/pulls/{number}/requested_reviewers`:
//! listing, requesting and withdrawing reviewers. Every request carries the
//! `symmetra-preview` media type unless the caller picks another one.

use crate::github::error::{GitHubError, GitHubResult};
use crate::github::executor::{ApiRequest, RequestExecutor};
use crate::github::util::spawn_task;
use crate::github::validation::{self, Argument};
use crate::runtime::{AsyncStream, AsyncTask, EmitterBuilder};
use http::HeaderValue;
use log::warn;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

/// Preview media type the review requests endpoint is served under.
pub const PREVIEW_MEDIA: &str = "application/vnd.github.symmetra-preview+json";

/// Options for listing review requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ListReviewRequestsOptions {
    /// Accept header override. Defaults to [`PREVIEW_MEDIA`].
    pub accept: Option<String>,
}

impl ListReviewRequestsOptions {
    /// Options with every field unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the accept header.
    #[must_use]
    pub fn accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = Some(accept.into());
        self
    }
}

/// Reviewers to request or withdraw.
///
/// Both lists are required by the API even when empty; leaving either as
/// `None` makes the call fail before it is sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReviewRequestOptions {
    /// User logins.
    pub reviewers: Option<Vec<String>>,
    /// Team slugs.
    pub team_reviewers: Option<Vec<String>>,
    /// Accept header override. Defaults to [`PREVIEW_MEDIA`].
    pub accept: Option<String>,
}

impl ReviewRequestOptions {
    /// Options with every field unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the user logins.
    #[must_use]
    pub fn reviewers<I, S>(mut self, logins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reviewers = Some(logins.into_iter().map(Into::into).collect());
        self
    }

    /// Set the team slugs.
    #[must_use]
    pub fn team_reviewers<I, S>(mut self, slugs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.team_reviewers = Some(slugs.into_iter().map(Into::into).collect());
        self
    }

    /// Override the accept header.
    #[must_use]
    pub fn accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = Some(accept.into());
        self
    }
}

/// Handle for the review requests resource.
///
/// Obtained from [`GitHubClient::review_requests`](crate::GitHubClient::review_requests)
/// or built over any [`RequestExecutor`]. Calls are independent of one another.
pub struct ReviewRequests<E> {
    executor: Arc<E>,
}

impl<E> Clone for ReviewRequests<E> {
    fn clone(&self) -> Self {
        Self {
            executor: Arc::clone(&self.executor),
        }
    }
}

impl<E> ReviewRequests<E>
where
    E: RequestExecutor + 'static,
{
    /// Wrap an executor.
    pub fn new(executor: E) -> Self {
        Self {
            executor: Arc::new(executor),
        }
    }

    /// List users and teams whose review is requested on a pull request.
    ///
    /// Returns the response body unmodified, normally
    /// `{"users": [...], "teams": [...]}`.
    pub fn list(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        pull_number: u64,
        options: ListReviewRequestsOptions,
    ) -> AsyncTask<GitHubResult<Value>> {
        let executor = Arc::clone(&self.executor);
        let request = list_request(&owner.into(), &repo.into(), pull_number, options);

        spawn_task(async move { executor.execute(request?).await })
    }

    /// Alias of [`list`](Self::list).
    pub fn all(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        pull_number: u64,
        options: ListReviewRequestsOptions,
    ) -> AsyncTask<GitHubResult<Value>> {
        self.list(owner, repo, pull_number, options)
    }

    /// [`list`](Self::list), calling `visitor` once per reviewer entry in
    /// response order before resolving to the full response.
    pub fn list_each<F>(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        pull_number: u64,
        options: ListReviewRequestsOptions,
        mut visitor: F,
    ) -> AsyncTask<GitHubResult<Value>>
    where
        F: FnMut(&Value) + Send + 'static,
    {
        let executor = Arc::clone(&self.executor);
        let request = list_request(&owner.into(), &repo.into(), pull_number, options);

        spawn_task(async move {
            let response = executor.execute(request?).await?;
            for entry in entries(&response) {
                visitor(entry);
            }
            Ok(response)
        })
    }

    /// Stream reviewer entries of the list response one at a time.
    pub fn stream(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        pull_number: u64,
        options: ListReviewRequestsOptions,
    ) -> AsyncStream<GitHubResult<Value>> {
        let executor = Arc::clone(&self.executor);
        let request = list_request(&owner.into(), &repo.into(), pull_number, options);

        let builder = EmitterBuilder::new(Box::new(move || {
            Box::pin(async move {
                let response = executor.execute(request?).await?;
                Ok(entries(&response).into_iter().cloned().collect())
            })
        }));
        builder.emit(|v| v, |e| warn!("Failed to list review requests: {e}"))
    }

    /// Request reviews from users and teams.
    ///
    /// Resolves to the updated pull request as returned by GitHub.
    pub fn create(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        pull_number: u64,
        options: ReviewRequestOptions,
    ) -> AsyncTask<GitHubResult<Value>> {
        let executor = Arc::clone(&self.executor);
        let request = write_request(
            "create",
            &owner.into(),
            &repo.into(),
            pull_number,
            options,
            ApiRequest::post,
        );

        spawn_task(async move { executor.execute(request?).await })
    }

    /// Withdraw requested reviews from users and teams.
    pub fn delete(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        pull_number: u64,
        options: ReviewRequestOptions,
    ) -> AsyncTask<GitHubResult<Value>> {
        let executor = Arc::clone(&self.executor);
        let request = write_request(
            "delete",
            &owner.into(),
            &repo.into(),
            pull_number,
            options,
            ApiRequest::delete,
        );

        spawn_task(async move { executor.execute(request?).await })
    }
}

/// Path of the requested reviewers collection for one pull request.
#[must_use]
pub fn requested_reviewers_path(owner: &str, repo: &str, pull_number: u64) -> String {
    format!(
        "/repos/{}/{}/pulls/{pull_number}/requested_reviewers",
        urlencoding::encode(owner),
        urlencoding::encode(repo),
    )
}

/// Reviewer entries of a list response, in response order.
///
/// Arrays yield their elements; the `{"users", "teams"}` object yields users
/// then teams; `null` yields nothing; any other value yields itself.
#[must_use]
pub fn entries(response: &Value) -> Vec<&Value> {
    match response {
        Value::Array(items) => items.iter().collect(),
        Value::Object(fields) => ["users", "teams"]
            .iter()
            .filter_map(|key| fields.get(*key).and_then(Value::as_array))
            .flatten()
            .collect(),
        Value::Null => Vec::new(),
        other => vec![other],
    }
}

fn target_arguments(owner: &str, repo: &str, pull_number: u64) -> [Argument; 3] {
    [
        ("owner", validation::present(owner)),
        ("repo", validation::present(repo)),
        ("pull_number", pull_number > 0),
    ]
}

fn accept_header(accept: Option<String>) -> GitHubResult<String> {
    let accept = accept.unwrap_or_else(|| PREVIEW_MEDIA.to_string());
    HeaderValue::from_str(&accept)
        .map_err(|e| GitHubError::InvalidInput(format!("accept header {accept:?}: {e}")))?;
    Ok(accept)
}

fn list_request(
    owner: &str,
    repo: &str,
    pull_number: u64,
    options: ListReviewRequestsOptions,
) -> GitHubResult<ApiRequest> {
    validation::require("list", &target_arguments(owner, repo, pull_number))?;
    let accept = accept_header(options.accept)?;

    Ok(ApiRequest::get(
        requested_reviewers_path(owner, repo, pull_number),
        accept,
    ))
}

fn write_request(
    operation: &'static str,
    owner: &str,
    repo: &str,
    pull_number: u64,
    options: ReviewRequestOptions,
    build: fn(String, String, Value) -> ApiRequest,
) -> GitHubResult<ApiRequest> {
    let [owner_arg, repo_arg, number_arg] = target_arguments(owner, repo, pull_number);
    validation::require(
        operation,
        &[
            owner_arg,
            repo_arg,
            number_arg,
            ("reviewers", options.reviewers.is_some()),
            ("team_reviewers", options.team_reviewers.is_some()),
        ],
    )?;
    let accept = accept_header(options.accept)?;

    let body = json!({
        "reviewers": options.reviewers.unwrap_or_default(),
        "team_reviewers": options.team_reviewers.unwrap_or_default(),
    });

    Ok(build(
        requested_reviewers_path(owner, repo, pull_number),
        accept,
        body,
    ))
}

//! HTTP request executor seam.
//!
//! Resource handles describe a request as an [`ApiRequest`] and hand it to a
//! [`RequestExecutor`]. [`GitHubClient`] is the production executor; anything
//! else (a recording fake, a proxy) can stand in for it.

use crate::github::client::GitHubClient;
use crate::github::error::GitHubResult;
use async_trait::async_trait;
use http::{Method, header::ACCEPT};
use log::debug;
use serde_json::Value;

/// A single REST call: verb, path relative to the API root, accept header
/// and optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP verb
    pub method: Method,
    /// Path starting with `/`, e.g. `/repos/o/r/pulls/1/requested_reviewers`
    pub path: String,
    /// Value of the `accept` header
    pub accept: String,
    /// JSON body, sent for writes
    pub body: Option<Value>,
}

impl ApiRequest {
    /// GET without a body.
    pub fn get(path: impl Into<String>, accept: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            accept: accept.into(),
            body: None,
        }
    }

    /// POST with a JSON body.
    pub fn post(path: impl Into<String>, accept: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::POST,
            path: path.into(),
            accept: accept.into(),
            body: Some(body),
        }
    }

    /// DELETE with a JSON body.
    pub fn delete(path: impl Into<String>, accept: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::DELETE,
            path: path.into(),
            accept: accept.into(),
            body: Some(body),
        }
    }
}

/// Performs authenticated API requests and returns the parsed JSON body.
///
/// Implementations report failures as-is; callers do not retry.
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    /// Send `request` and parse the response body. An empty body parses to
    /// [`Value::Null`].
    async fn execute(&self, request: ApiRequest) -> GitHubResult<Value>;
}

#[async_trait]
impl RequestExecutor for GitHubClient {
    async fn execute(&self, request: ApiRequest) -> GitHubResult<Value> {
        let uri = format!("{}{}", self.base_uri(), request.path);
        debug!("{} {} (accept: {})", request.method, uri, request.accept);

        let builder = http::Request::builder()
            .method(request.method)
            .uri(uri)
            .header(ACCEPT, request.accept);

        let octocrab = self.inner();
        let http_request = match request.body.as_ref() {
            Some(body) => octocrab.build_request(builder, Some(body))?,
            None => octocrab.build_request(builder, None::<&()>)?,
        };

        let response = octocrab.execute(http_request).await?;
        let response = octocrab::map_github_error(response).await?;
        let text = octocrab.body_to_string(response).await?;

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}

//! `kodegen_review_requests` - GitHub pull request review requests via Octocrab
//!
//! Lists, requests and withdraws reviewers on a pull request. Operations are
//! async-first: each returns an [`AsyncTask`] (or [`AsyncStream`]) running on
//! tokio, and goes through a [`RequestExecutor`] so the HTTP layer can be
//! swapped out.

// Module declarations
pub mod github;
pub mod runtime;

// Re-export runtime types
pub use runtime::{AsyncStream, AsyncTask, EmitterBuilder};

// Re-export GitHub client types
pub use github::{GitHubClient, GitHubClientBuilder};

// Re-export GitHub error types
pub use github::{GitHubError, GitHubResult};

// Re-export executor seam
pub use github::{ApiRequest, RequestExecutor};

// Re-export review request operations
pub use github::{
    ListReviewRequestsOptions, PREVIEW_MEDIA, ReviewRequestOptions, ReviewRequests,
    requested_reviewers_path,
};

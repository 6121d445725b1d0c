//! GitHub API operations module
//!
//! Review request operations over an octocrab-backed executor.

pub mod client;
pub mod error;
pub mod executor;
pub mod review_requests;
pub mod util;
pub mod validation;

// Re-export client types
pub use client::{GitHubClient, GitHubClientBuilder};

// Re-export error types
pub use error::{GitHubError, GitHubResult};
pub use util::spawn_task;

// Re-export executor seam
pub use executor::{ApiRequest, RequestExecutor};

// Re-export review request types
pub use review_requests::{
    ListReviewRequestsOptions, PREVIEW_MEDIA, ReviewRequestOptions, ReviewRequests,
    requested_reviewers_path,
};

//! Pull Requests API methods

use super::GitHubClient;
use crate::github::review_requests::ReviewRequests;

impl GitHubClient {
    /// Review requests on pull requests (`/pulls/{number}/requested_reviewers`)
    #[must_use]
    pub fn review_requests(&self) -> ReviewRequests<GitHubClient> {
        ReviewRequests::new(self.clone())
    }
}

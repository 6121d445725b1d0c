//! Request shape of review request operations.

use super::support::RecordingExecutor;
use futures::StreamExt;
use http::Method;
use kodegen_review_requests::{
    GitHubError, ListReviewRequestsOptions, PREVIEW_MEDIA, ReviewRequestOptions, ReviewRequests,
};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

const PATH: &str = "/repos/octocat/hello-world/pulls/42/requested_reviewers";

fn reviewers_response() -> Value {
    json!({
        "users": [{ "login": "octocat" }, { "login": "hubot" }],
        "teams": [{ "slug": "justice-league" }]
    })
}

#[tokio::test]
async fn test_list_sends_get_with_preview_accept() {
    let executor = RecordingExecutor::responding(reviewers_response());
    let review_requests = ReviewRequests::new(executor.clone());

    let response = review_requests
        .list("octocat", "hello-world", 42, ListReviewRequestsOptions::new())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(response, reviewers_response());

    let requests = executor.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::GET);
    assert_eq!(requests[0].path, PATH);
    assert_eq!(requests[0].accept, PREVIEW_MEDIA);
    assert!(requests[0].accept.contains("symmetra-preview"));
    assert_eq!(requests[0].body, None);
}

#[tokio::test]
async fn test_list_keeps_caller_accept() {
    let executor = RecordingExecutor::responding(reviewers_response());
    let review_requests = ReviewRequests::new(executor.clone());

    review_requests
        .list(
            "octocat",
            "hello-world",
            42,
            ListReviewRequestsOptions::new().accept("application/vnd.github+json"),
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(executor.requests()[0].accept, "application/vnd.github+json");
}

#[tokio::test]
async fn test_all_is_list() {
    let executor = RecordingExecutor::responding(reviewers_response());
    let review_requests = ReviewRequests::new(executor.clone());

    let via_all = review_requests
        .all("octocat", "hello-world", 42, ListReviewRequestsOptions::new())
        .await
        .unwrap()
        .unwrap();
    let via_list = review_requests
        .list("octocat", "hello-world", 42, ListReviewRequestsOptions::new())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(via_all, via_list);
    let requests = executor.requests();
    assert_eq!(requests[0], requests[1]);
}

#[tokio::test]
async fn test_list_each_visits_users_then_teams() {
    let executor = RecordingExecutor::responding(reviewers_response());
    let review_requests = ReviewRequests::new(executor.clone());
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);

    let response = review_requests
        .list_each(
            "octocat",
            "hello-world",
            42,
            ListReviewRequestsOptions::new(),
            move |entry| sink.lock().unwrap().push(entry.clone()),
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(response, reviewers_response());
    assert_eq!(
        *seen.lock().unwrap(),
        vec![
            json!({ "login": "octocat" }),
            json!({ "login": "hubot" }),
            json!({ "slug": "justice-league" }),
        ]
    );
}

#[tokio::test]
async fn test_list_each_over_array_response() {
    let executor = RecordingExecutor::responding(json!([1, 2, 3]));
    let review_requests = ReviewRequests::new(executor);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);

    let response = review_requests
        .list_each(
            "octocat",
            "hello-world",
            42,
            ListReviewRequestsOptions::new(),
            move |entry| sink.lock().unwrap().push(entry.as_u64().unwrap()),
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(response, json!([1, 2, 3]));
    assert_eq!(*seen.lock().unwrap(), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_stream_yields_entries_in_order() {
    let executor = RecordingExecutor::responding(reviewers_response());
    let review_requests = ReviewRequests::new(executor);

    let entries: Vec<Value> = review_requests
        .stream("octocat", "hello-world", 42, ListReviewRequestsOptions::new())
        .map(Result::unwrap)
        .collect()
        .await;

    assert_eq!(
        entries,
        vec![
            json!({ "login": "octocat" }),
            json!({ "login": "hubot" }),
            json!({ "slug": "justice-league" }),
        ]
    );
}

#[tokio::test]
async fn test_stream_reports_missing_arguments_once() {
    let executor = RecordingExecutor::responding(reviewers_response());
    let review_requests = ReviewRequests::new(executor.clone());

    let items: Vec<_> = review_requests
        .stream("", "hello-world", 42, ListReviewRequestsOptions::new())
        .collect()
        .await;

    assert_eq!(items.len(), 1);
    assert!(matches!(
        &items[0],
        Err(GitHubError::MissingArguments { missing, .. }) if missing == &vec!["owner"]
    ));
    assert!(executor.requests().is_empty());
}

#[tokio::test]
async fn test_create_posts_reviewers_exactly_as_supplied() {
    let executor = RecordingExecutor::responding(json!({ "number": 42 }));
    let review_requests = ReviewRequests::new(executor.clone());

    let response = review_requests
        .create(
            "octocat",
            "hello-world",
            42,
            ReviewRequestOptions::new()
                .reviewers(["hubot"])
                .team_reviewers(Vec::<String>::new()),
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(response, json!({ "number": 42 }));

    let requests = executor.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::POST);
    assert_eq!(requests[0].path, PATH);
    assert_eq!(requests[0].accept, PREVIEW_MEDIA);
    let body = requests[0].body.as_ref().unwrap();
    assert_eq!(
        serde_json::to_string(body).unwrap(),
        r#"{"reviewers":["hubot"],"team_reviewers":[]}"#
    );
}

#[tokio::test]
async fn test_delete_sends_body_with_both_lists() {
    let executor = RecordingExecutor::responding(json!({ "number": 42 }));
    let review_requests = ReviewRequests::new(executor.clone());

    review_requests
        .delete(
            "octocat",
            "hello-world",
            42,
            ReviewRequestOptions::new()
                .reviewers(["octocat", "hubot", "other_user"])
                .team_reviewers(["justice-league"]),
        )
        .await
        .unwrap()
        .unwrap();

    let requests = executor.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::DELETE);
    assert_eq!(requests[0].path, PATH);
    assert_eq!(requests[0].accept, PREVIEW_MEDIA);
    assert_eq!(
        requests[0].body,
        Some(json!({
            "reviewers": ["octocat", "hubot", "other_user"],
            "team_reviewers": ["justice-league"]
        }))
    );
}

#[tokio::test]
async fn test_write_keeps_caller_accept() {
    let executor = RecordingExecutor::responding(Value::Null);
    let review_requests = ReviewRequests::new(executor.clone());

    review_requests
        .delete(
            "octocat",
            "hello-world",
            42,
            ReviewRequestOptions::new()
                .reviewers(["hubot"])
                .team_reviewers(["justice-league"])
                .accept("application/vnd.github+json"),
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(executor.requests()[0].accept, "application/vnd.github+json");
}

#[tokio::test]
async fn test_owner_and_repo_are_percent_encoded() {
    let executor = RecordingExecutor::responding(Value::Null);
    let review_requests = ReviewRequests::new(executor.clone());

    review_requests
        .list("my org", "repo/x", 7, ListReviewRequestsOptions::new())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(
        executor.requests()[0].path,
        "/repos/my%20org/repo%2Fx/pulls/7/requested_reviewers"
    );
}

#[tokio::test]
async fn test_concurrent_calls_are_independent() {
    let executor = RecordingExecutor::responding(reviewers_response());
    let review_requests = ReviewRequests::new(executor.clone());

    let tasks: Vec<_> = (1..=8)
        .map(|number| {
            review_requests.clone().list(
                "octocat",
                "hello-world",
                number,
                ListReviewRequestsOptions::new(),
            )
        })
        .collect();

    for task in tasks {
        assert_eq!(task.await.unwrap().unwrap(), reviewers_response());
    }

    let mut paths: Vec<String> = executor.requests().into_iter().map(|r| r.path).collect();
    paths.sort();
    assert_eq!(paths.len(), 8);
    paths.dedup();
    assert_eq!(paths.len(), 8);
}

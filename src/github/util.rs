//! GitHub API utilities

use crate::runtime::AsyncTask;
use std::future::Future;

/// Run a GitHub API call on the tokio runtime and hand back its task.
#[inline]
pub fn spawn_task<T, F>(work: F) -> AsyncTask<T>
where
    T: Send + 'static,
    F: Future<Output = T> + Send + 'static,
{
    AsyncTask::spawn_async(work)
}

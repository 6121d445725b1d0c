//! Runtime module
//!
//! Async task and stream handles returned by the GitHub operations.

pub mod async_task;

pub use async_task::{AsyncStream, AsyncTask, EmitterBuilder};

//! Required-argument checks run at operation entry.

use crate::github::error::{GitHubError, GitHubResult};

/// A named argument and whether the caller supplied it.
pub type Argument = (&'static str, bool);

/// Fail with [`GitHubError::MissingArguments`] naming every absent argument.
///
/// Runs before a request is built, so a rejected call never reaches the
/// executor.
pub fn require(operation: &'static str, arguments: &[Argument]) -> GitHubResult<()> {
    let missing: Vec<&'static str> = arguments
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(GitHubError::MissingArguments { operation, missing })
    }
}

/// A string argument counts as present when it has non-whitespace content.
#[inline]
#[must_use]
pub fn present(value: &str) -> bool {
    !value.trim().is_empty()
}

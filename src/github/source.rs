use crate::Result;
use crate::model::{Repo, WireIssue};
use chrono::{DateTime, Local, Utc};
use core::fmt::{Display, Formatter, Result as FmtResult};
use core::future::Future;

/// Where issue data comes from.
pub trait IssueSource {
    /// List every issue and pull request of `repo`, oldest first. With `since`, only those updated
    /// at or after that instant are listed.
    fn list_issues(&self, repo: &Repo, since: Option<DateTime<Utc>>) -> impl Future<Output = Result<Vec<WireIssue>>> + Send;

    /// Fetch the full data for one issue or pull request.
    fn fetch_issue(&self, repo: &Repo, number: u64, is_pr: bool) -> impl Future<Output = Result<WireIssue>> + Send;

    /// Current API quota.
    fn rate_limit(&self) -> impl Future<Output = Result<RateLimit>> + Send;
}

/// API quota as reported by GitHub.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    pub limit: u64,
    pub remaining: u64,
    pub reset: DateTime<Utc>,
}

impl Display for RateLimit {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{} API calls remain out of {}. Rate limit resets after {}.",
            self.remaining,
            self.limit,
            self.reset.with_timezone(&Local).format("%b %d %I:%M:%S %p")
        )
    }
}

use super::source::{IssueSource, RateLimit};
use crate::Result;
use crate::model::{Repo, WireIssue, timestamp};
use anyhow::Context;
use chrono::{DateTime, Utc};
use octocrab::Octocrab;
use octocrab::Page;
use serde::Serialize;

const LOG_TARGET: &str = "github";

/// The production [`IssueSource`], backed by the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    octocrab: Octocrab,
}

#[derive(Serialize)]
struct ListParams {
    state: &'static str,
    direction: &'static str,
    per_page: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    since: Option<String>,
}

impl GitHubClient {
    /// Create a client. `base_uri` overrides `https://api.github.com`.
    pub fn new(token: Option<String>, base_uri: Option<&str>) -> Result<Self> {
        let mut builder = Octocrab::builder();
        if let Some(token) = token {
            builder = builder.personal_token(token);
        }
        if let Some(base_uri) = base_uri {
            builder = builder.base_uri(base_uri).context("invalid GitHub API base URI")?;
        }

        Ok(Self {
            octocrab: builder.build().context("creating the GitHub client")?,
        })
    }
}

impl IssueSource for GitHubClient {
    async fn list_issues(&self, repo: &Repo, since: Option<DateTime<Utc>>) -> Result<Vec<WireIssue>> {
        let route = format!("/repos/{}/{}/issues", repo.owner, repo.name);
        let params = ListParams {
            state: "all",
            direction: "asc",
            per_page: 100,
            since: since.as_ref().map(timestamp::format_query),
        };

        let mut page: Page<WireIssue> = self
            .octocrab
            .get(&route, Some(&params))
            .await
            .with_context(|| format!("listing issues of {repo}"))?;

        let mut issues = page.take_items();
        while let Some(mut next) = self
            .octocrab
            .get_page::<WireIssue>(&page.next)
            .await
            .with_context(|| format!("listing issues of {repo}"))?
        {
            issues.extend(next.take_items());
            log::debug!(target: LOG_TARGET, "Listed {} issue(s) of {repo} so far", issues.len());
            page = next;
        }

        Ok(issues)
    }

    async fn fetch_issue(&self, repo: &Repo, number: u64, is_pr: bool) -> Result<WireIssue> {
        let endpoint = if is_pr { "pulls" } else { "issues" };
        let route = format!("/repos/{}/{}/{endpoint}/{number}", repo.owner, repo.name);

        self.octocrab
            .get(&route, None::<&()>)
            .await
            .with_context(|| format!("fetching {endpoint} #{number} of {repo}"))
    }

    async fn rate_limit(&self) -> Result<RateLimit> {
        let rate = self.octocrab.ratelimit().get().await.context("querying the GitHub rate limit")?.rate;

        Ok(RateLimit {
            limit: u64::try_from(rate.limit).unwrap_or(u64::MAX),
            remaining: u64::try_from(rate.remaining).unwrap_or(u64::MAX),
            reset: DateTime::from_timestamp(i64::try_from(rate.reset).unwrap_or(i64::MAX), 0).unwrap_or_default(),
        })
    }
}

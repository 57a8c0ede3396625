use super::{IssueSource, ProgressReporter};
use crate::Result;
use crate::model::{Record, Repo, Snapshot, WireIssue};
use crate::reconcile::{FetchedBatch, Reconciliation, reconcile};
use anyhow::Context;
use chrono::{DateTime, Utc};
use futures::{StreamExt, TryStreamExt, stream};

const LOG_TARGET: &str = "fetch";

/// Result of an update run.
#[derive(Debug)]
pub enum UpdateOutcome {
    /// Nothing changed since the watermark; the snapshot is returned untouched.
    UpToDate(Snapshot),

    Updated(Reconciliation),
}

/// Drives an [`IssueSource`] to build or refresh snapshots.
#[derive(Debug)]
pub struct Fetcher<'a, S> {
    source: &'a S,
    progress: ProgressReporter,
    concurrency: usize,
}

impl<'a, S: IssueSource + Sync> Fetcher<'a, S> {
    /// `concurrency` bounds how many issues are fetched at once; zero is treated as one.
    #[must_use]
    pub fn new(source: &'a S, progress: ProgressReporter, concurrency: usize) -> Self {
        Self {
            source,
            progress,
            concurrency: concurrency.max(1),
        }
    }

    /// Fetch every issue and pull request of `repo` into a new snapshot.
    ///
    /// `fetch_started_at` must be taken before calling, it becomes the snapshot's watermark.
    pub async fn full_fetch(&self, repo: &Repo, fetch_started_at: DateTime<Utc>) -> Result<Snapshot> {
        let _guard = self.progress.start_visibility_checking();

        let listed = self.list(repo, None).await?;
        let records = self.fetch_all(repo, &listed).await?;
        self.progress.finish_and_clear();

        log::info!(target: LOG_TARGET, "Fetched {} issue(s) and pull request(s) of {repo}", records.len());
        Ok(Snapshot::new(repo.clone(), fetch_started_at, records.into_iter().collect()))
    }

    /// Refetch everything modified since the snapshot's watermark and merge it in.
    pub async fn update(&self, snapshot: Snapshot, fetch_started_at: DateTime<Utc>) -> Result<UpdateOutcome> {
        let _guard = self.progress.start_visibility_checking();
        let repo = snapshot.repo().clone();

        let listed = self.list(&repo, Some(snapshot.last_updated())).await?;
        if listed.is_empty() {
            self.progress.finish_and_clear();
            log::info!(target: LOG_TARGET, "{repo} has no changes since {}", snapshot.last_updated());
            return Ok(UpdateOutcome::UpToDate(snapshot));
        }

        let requested = listed.iter().map(|issue| issue.number).collect();
        let records = self.fetch_all(&repo, &listed).await?;
        self.progress.finish_and_clear();

        Ok(UpdateOutcome::Updated(reconcile(
            snapshot,
            FetchedBatch {
                requested,
                records,
                fetch_started_at,
            },
        )))
    }

    async fn list(&self, repo: &Repo, since: Option<DateTime<Utc>>) -> Result<Vec<WireIssue>> {
        self.progress.start_indeterminate("Enumerating", format!("issues of {repo}"));
        let listed = self.source.list_issues(repo, since).await?;
        log::info!(target: LOG_TARGET, "{} issue(s) of {repo} to fetch", listed.len());
        Ok(listed)
    }

    /// Fetch the full data for each listed issue. Results keep the listing order.
    async fn fetch_all(&self, repo: &Repo, listed: &[WireIssue]) -> Result<Vec<Record>> {
        self.progress.start_determinate("Fetching", listed.len() as u64);

        stream::iter(listed)
            .map(|issue| async move {
                let wire = self.source.fetch_issue(repo, issue.number, issue.is_pull_request()).await?;
                let record = Record::from_wire(wire).with_context(|| format!("reading issue #{} of {repo}", issue.number))?;
                self.progress.inc();
                Ok::<_, anyhow::Error>(record)
            })
            .buffered(self.concurrency)
            .try_collect()
            .await
    }
}

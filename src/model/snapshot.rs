use super::{IssueSet, Metadata, Record, Repo};
use chrono::{DateTime, Utc};

/// Everything known about one tracked repository: its issues plus a freshness watermark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    issues: IssueSet,
    metadata: Metadata,
}

impl Snapshot {
    #[must_use]
    pub const fn new(repo: Repo, last_updated: DateTime<Utc>, issues: IssueSet) -> Self {
        Self {
            issues,
            metadata: Metadata::new(repo, last_updated),
        }
    }

    #[must_use]
    pub const fn from_parts(issues: IssueSet, metadata: Metadata) -> Self {
        Self { issues, metadata }
    }

    #[must_use]
    pub const fn issues(&self) -> &IssueSet {
        &self.issues
    }

    #[must_use]
    pub const fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    #[must_use]
    pub const fn repo(&self) -> &Repo {
        &self.metadata.repo
    }

    #[must_use]
    pub const fn last_updated(&self) -> DateTime<Utc> {
        self.metadata.last_updated
    }

    /// Store a record, replacing any previous copy.
    pub fn insert(&mut self, record: Record) -> Option<Record> {
        self.issues.insert(record)
    }

    pub fn set_last_updated(&mut self, last_updated: DateTime<Utc>) {
        self.metadata.last_updated = last_updated;
    }
}

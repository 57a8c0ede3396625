use super::Repo;
use super::timestamp::iso8601;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Version of the snapshot file layout written by this tool.
pub const CURRENT_VERSION: u32 = 1;

/// Bookkeeping stored next to the issues in a snapshot file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Metadata {
    pub repo: Repo,

    /// Watermark: every issue last modified at or before this instant is present and current.
    #[serde(with = "iso8601")]
    pub last_updated: DateTime<Utc>,

    #[serde(default = "default_version")]
    pub version: u32,
}

impl Metadata {
    #[must_use]
    pub const fn new(repo: Repo, last_updated: DateTime<Utc>) -> Self {
        Self {
            repo,
            last_updated,
            version: CURRENT_VERSION,
        }
    }
}

const fn default_version() -> u32 {
    CURRENT_VERSION
}

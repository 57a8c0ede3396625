//! Issue and pull request records, and the snapshot that holds them.

mod canonical_record;
mod issue_set;
mod metadata;
mod record;
mod repo;
mod snapshot;
mod snapshot_error;
pub mod timestamp;
mod wire_issue;

#[cfg(test)]
pub(crate) mod test_support;

pub use canonical_record::CanonicalRecord;
pub use issue_set::IssueSet;
pub use metadata::{CURRENT_VERSION, Metadata};
pub use record::{Record, UNKNOWN_ACTOR};
pub use repo::Repo;
pub use snapshot::Snapshot;
pub use snapshot_error::SnapshotError;
pub use wire_issue::{WireActor, WireIssue, WireLabel};

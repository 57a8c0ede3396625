//! Merging freshly fetched records into a saved snapshot.

use crate::model::{Record, Snapshot};
use chrono::{DateTime, Utc};
use strum::Display;

const LOG_TARGET: &str = "reconcile";

/// How a fetched record relates to what the snapshot held before.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum ChangeKind {
    /// The snapshot didn't know about this record.
    New,

    /// The record was open and is now closed.
    Closed,

    /// Anything else.
    Updated,
}

/// One line of a change summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub number: u64,
    pub title: String,
    pub is_pr: bool,
    pub kind: ChangeKind,
}

impl Change {
    fn new(record: &Record, kind: ChangeKind) -> Self {
        Self {
            number: record.number(),
            title: record.title().to_string(),
            is_pr: record.is_pr(),
            kind,
        }
    }
}

/// Records fetched during one update run.
#[derive(Debug, Clone)]
pub struct FetchedBatch {
    /// Numbers the fetcher found modified since the watermark.
    pub requested: Vec<u64>,

    /// Successfully fetched records.
    pub records: Vec<Record>,

    /// When fetching started. Becomes the new watermark.
    pub fetch_started_at: DateTime<Utc>,
}

/// The outcome of a reconciliation.
#[derive(Debug, Clone)]
pub struct Reconciliation {
    pub snapshot: Snapshot,
    pub changes: Vec<Change>,
}

/// Merge `batch` into `original`, classifying every fetched record.
///
/// Fetched records replace stored ones wholesale and nothing is ever removed. The watermark moves
/// to the time fetching started, so anything modified while the fetch ran is picked up again next
/// time.
#[must_use]
pub fn reconcile(original: Snapshot, batch: FetchedBatch) -> Reconciliation {
    let mut snapshot = original;
    let mut changes = Vec::with_capacity(batch.records.len());

    for record in batch.records {
        let kind = match snapshot.issues().get(record.number()) {
            Err(_) => ChangeKind::New,
            Ok(previous) if !previous.is_closed() && record.is_closed() => ChangeKind::Closed,
            Ok(_) => ChangeKind::Updated,
        };

        changes.push(Change::new(&record, kind));
        let _ = snapshot.insert(record);
    }

    for number in &batch.requested {
        if !changes.iter().any(|change| change.number == *number) {
            log::debug!(target: LOG_TARGET, "Issue {number} was requested but not fetched, keeping the stored copy");
        }
    }

    log::info!(
        target: LOG_TARGET,
        "Reconciled {} record(s) for {}, watermark moves from {} to {}",
        changes.len(),
        snapshot.repo(),
        snapshot.last_updated(),
        batch.fetch_started_at
    );

    snapshot.set_last_updated(batch.fetch_started_at);
    Reconciliation { snapshot, changes }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_support::{closed_issue, issue};
    use crate::model::{IssueSet, Repo};
    use chrono::TimeZone;

    fn watermark(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2021, 6, day, 0, 0, 0).unwrap()
    }

    fn snapshot(records: impl IntoIterator<Item = Record>) -> Snapshot {
        Snapshot::new(Repo::new("o", "n"), watermark(1), records.into_iter().collect::<IssueSet>())
    }

    fn batch(records: Vec<Record>) -> FetchedBatch {
        FetchedBatch {
            requested: records.iter().map(Record::number).collect(),
            records,
            fetch_started_at: watermark(2),
        }
    }

    #[test]
    fn test_classification() {
        let original = snapshot([issue(1, "2021-01-01"), issue(2, "2021-01-02"), closed_issue(3, "2021-01-03", "2021-01-04", "bob")]);
        let result = reconcile(
            original,
            batch(vec![
                issue(4, "2021-05-01"),
                closed_issue(2, "2021-01-02", "2021-05-02", "alice"),
                issue(1, "2021-01-01"),
                closed_issue(3, "2021-01-03", "2021-05-03", "carol"),
            ]),
        );

        let kinds: Vec<_> = result.changes.iter().map(|c| (c.number, c.kind)).collect();
        assert_eq!(
            kinds,
            vec![
                (4, ChangeKind::New),
                (2, ChangeKind::Closed),
                (1, ChangeKind::Updated),
                (3, ChangeKind::Updated),
            ]
        );
    }

    #[test]
    fn test_new_then_closed() {
        let first = reconcile(snapshot([issue(1, "2021-01-01")]), batch(vec![issue(42, "2021-05-01")]));
        assert_eq!(first.changes[0].kind, ChangeKind::New);

        let second = reconcile(first.snapshot, batch(vec![closed_issue(42, "2021-05-01", "2021-05-20", "alice")]));
        assert_eq!(second.changes[0].kind, ChangeKind::Closed);
        assert!(second.snapshot.issues().get(42).unwrap().is_closed());
    }

    #[test]
    fn test_last_fetched_wins_and_nothing_is_removed() {
        let original = snapshot([issue(1, "2021-01-01"), issue(2, "2021-01-02")]);
        let result = reconcile(original, batch(vec![closed_issue(2, "2021-01-02", "2021-05-02", "alice")]));

        assert_eq!(result.snapshot.issues().len(), 2);
        assert_eq!(result.snapshot.issues().get(2).unwrap().closed_by(), Some("alice"));
        assert!(!result.snapshot.issues().get(1).unwrap().is_closed());
    }

    #[test]
    fn test_watermark_advances_to_fetch_start() {
        let result = reconcile(snapshot([issue(1, "2021-01-01")]), batch(vec![issue(1, "2021-01-01")]));
        assert_eq!(result.snapshot.last_updated(), watermark(2));
    }

    #[test]
    fn test_idempotent() {
        let original = snapshot([issue(1, "2021-01-01"), issue(2, "2021-01-02")]);
        let fetched = vec![closed_issue(2, "2021-01-02", "2021-05-02", "alice"), issue(3, "2021-05-03")];

        let once = reconcile(original.clone(), batch(fetched.clone()));
        let twice = reconcile(once.snapshot.clone(), batch(fetched));
        assert_eq!(once.snapshot, twice.snapshot);
    }

    #[test]
    fn test_missing_requested_record_keeps_stored_copy() {
        let original = snapshot([issue(1, "2021-01-01")]);
        let result = reconcile(
            original.clone(),
            FetchedBatch {
                requested: vec![1],
                records: Vec::new(),
                fetch_started_at: watermark(2),
            },
        );

        assert!(result.changes.is_empty());
        assert_eq!(result.snapshot.issues(), original.issues());
    }
}

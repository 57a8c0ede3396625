use super::timestamp;
use super::{CanonicalRecord, SnapshotError, WireIssue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Login recorded when GitHub reports no author, which happens once an account is deleted.
pub const UNKNOWN_ACTOR: &str = "ghost";

/// A normalized issue or pull request.
///
/// Records are read-only once built. They are replaced whole when a newer copy is fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CanonicalRecord", into = "CanonicalRecord")]
pub struct Record {
    number: u64,
    title: String,
    labels: BTreeSet<String>,
    is_pr: bool,
    created_at: DateTime<Utc>,
    created_by: String,
    closed_at: Option<DateTime<Utc>>,
    closed_by: Option<String>,
}

impl Record {
    /// Build a record from the shape the GitHub REST API returns.
    pub fn from_wire(issue: WireIssue) -> Result<Self, SnapshotError> {
        let created_at = timestamp::parse_required(&issue.created_at)?;
        let closed_at = timestamp::parse(issue.closed_at.as_deref())?;
        let is_pr = issue.is_pull_request();

        Self::validated(Self {
            number: issue.number,
            title: issue.title,
            labels: issue.labels.into_iter().map(|label| label.name).collect(),
            is_pr,
            created_at,
            created_by: issue.user.map_or_else(|| UNKNOWN_ACTOR.to_string(), |user| user.login),
            closed_at,
            closed_by: issue.closed_by.map(|actor| actor.login),
        })
    }

    /// Build a record from the shape stored in the snapshot file.
    pub fn from_canonical(record: CanonicalRecord) -> Result<Self, SnapshotError> {
        let created_at = timestamp::parse_required(&record.created_at)?;
        let closed_at = timestamp::parse(record.closed_at.as_deref())?;

        Self::validated(Self {
            number: record.number,
            title: record.title,
            labels: record.labels.into_iter().collect(),
            is_pr: record.is_pr,
            created_at,
            created_by: record.created_by,
            closed_at,
            closed_by: record.closed_by,
        })
    }

    fn validated(record: Self) -> Result<Self, SnapshotError> {
        if let Some(closed_at) = record.closed_at
            && closed_at < record.created_at
        {
            return Err(SnapshotError::ClosedBeforeCreated {
                number: record.number,
                created_at: record.created_at,
                closed_at,
            });
        }

        Ok(record)
    }

    #[must_use]
    pub const fn number(&self) -> u64 {
        self.number
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    #[must_use]
    pub const fn is_pr(&self) -> bool {
        self.is_pr
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn created_by(&self) -> &str {
        &self.created_by
    }

    #[must_use]
    pub const fn closed_at(&self) -> Option<DateTime<Utc>> {
        self.closed_at
    }

    #[must_use]
    pub fn closed_by(&self) -> Option<&str> {
        self.closed_by.as_deref()
    }

    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.closed_at.is_some()
    }
}

impl TryFrom<CanonicalRecord> for Record {
    type Error = SnapshotError;

    fn try_from(record: CanonicalRecord) -> Result<Self, Self::Error> {
        Self::from_canonical(record)
    }
}

impl From<Record> for CanonicalRecord {
    fn from(record: Record) -> Self {
        Self {
            number: record.number,
            title: record.title,
            labels: record.labels.into_iter().collect(),
            is_pr: record.is_pr,
            created_at: timestamp::format(&record.created_at),
            created_by: record.created_by,
            closed_at: record.closed_at.as_ref().map(timestamp::format),
            closed_by: record.closed_by,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn wire(value: serde_json::Value) -> WireIssue {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_from_wire_flattens_nested_fields() {
        let record = Record::from_wire(wire(json!({
            "number": 7,
            "title": "Crash on start",
            "user": {"login": "alice", "id": 1},
            "labels": [{"name": "bug", "color": "f00"}, {"name": "P1"}],
            "created_at": "2021-03-01T10:00:00Z",
            "closed_at": "2021-03-02T10:00:00Z",
            "closed_by": {"login": "bob"},
            "state": "closed"
        })))
        .unwrap();

        assert_eq!(record.number(), 7);
        assert_eq!(record.created_by(), "alice");
        assert_eq!(record.closed_by(), Some("bob"));
        assert!(record.has_label("bug"));
        assert!(record.has_label("P1"));
        assert!(!record.is_pr());
        assert_eq!(record.closed_at(), Some(Utc.with_ymd_and_hms(2021, 3, 2, 10, 0, 0).unwrap()));
    }

    #[test]
    fn test_from_wire_null_author_is_unknown_actor() {
        let record = Record::from_wire(wire(json!({
            "number": 1,
            "title": "orphan",
            "user": null,
            "labels": [],
            "created_at": "2021-03-01T10:00:00Z",
            "closed_at": null,
            "closed_by": null
        })))
        .unwrap();

        assert_eq!(record.created_by(), UNKNOWN_ACTOR);
        assert_eq!(record.closed_by(), None);
        assert!(!record.is_closed());
    }

    #[test]
    fn test_from_wire_detects_pull_request_marker() {
        let from_list = Record::from_wire(wire(json!({
            "number": 2,
            "title": "Add feature",
            "user": {"login": "alice"},
            "labels": [],
            "created_at": "2021-03-01T10:00:00Z",
            "pull_request": {"url": "https://api.github.com/repos/o/n/pulls/2"}
        })))
        .unwrap();
        assert!(from_list.is_pr());

        // The pulls endpoint has no `pull_request` key but always carries `merged_at`, even when null.
        let from_pulls = Record::from_wire(wire(json!({
            "number": 2,
            "title": "Add feature",
            "user": {"login": "alice"},
            "labels": [],
            "created_at": "2021-03-01T10:00:00Z",
            "merged_at": null
        })))
        .unwrap();
        assert!(from_pulls.is_pr());
    }

    #[test]
    fn test_from_canonical_passes_fields_through() {
        let record = Record::from_canonical(CanonicalRecord {
            number: 3,
            title: "Docs".to_string(),
            labels: vec!["docs".to_string()],
            is_pr: true,
            created_at: "2021-01-01T00:00:00+00:00".to_string(),
            created_by: "carol".to_string(),
            closed_at: None,
            closed_by: None,
        })
        .unwrap();

        assert_eq!(record.title(), "Docs");
        assert!(record.is_pr());
        assert_eq!(record.created_by(), "carol");
    }

    #[test]
    fn test_closed_before_created_is_rejected() {
        let err = Record::from_canonical(CanonicalRecord {
            number: 4,
            title: "Time travel".to_string(),
            labels: Vec::new(),
            is_pr: false,
            created_at: "2021-01-02T00:00:00+00:00".to_string(),
            created_by: "dave".to_string(),
            closed_at: Some("2021-01-01T00:00:00+00:00".to_string()),
            closed_by: Some("dave".to_string()),
        })
        .unwrap_err();

        assert!(matches!(err, SnapshotError::ClosedBeforeCreated { number: 4, .. }));
    }

    #[test]
    fn test_bad_timestamp_is_format_error() {
        let err = Record::from_wire(wire(json!({
            "number": 5,
            "title": "x",
            "user": {"login": "erin"},
            "labels": [],
            "created_at": "01/02/2021"
        })))
        .unwrap_err();

        assert!(matches!(err, SnapshotError::Format(_)));
    }
}

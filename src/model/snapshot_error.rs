use chrono::{DateTime, NaiveDate, Utc};

/// Errors raised by the snapshot model, codec and aggregations.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// Persisted data is malformed or incomplete.
    #[error("malformed snapshot data: {0}")]
    Format(String),

    /// A lookup named an issue number the snapshot doesn't hold.
    #[error("issue {0} doesn't exist in the snapshot")]
    NotFound(u64),

    /// There are no issues to establish a start date from.
    #[error("the snapshot holds no issues, so there is no start date to enumerate from")]
    Empty,

    #[error("start date {start} is after end date {end}")]
    DateRange { start: NaiveDate, end: NaiveDate },

    #[error("issue {number} was closed at {closed_at} before it was created at {created_at}")]
    ClosedBeforeCreated {
        number: u64,
        created_at: DateTime<Utc>,
        closed_at: DateTime<Utc>,
    },

    #[error("'{0}' is used internally for the unfiltered count, please use a different group name")]
    ReservedGroup(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

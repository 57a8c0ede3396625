//! Record builders for tests.

use super::{CanonicalRecord, Record};

fn at_noon(date: &str) -> String {
    format!("{date}T12:00:00+00:00")
}

fn build(number: u64, is_pr: bool, created: &str, closed: Option<(&str, &str)>, author: &str, labels: &[&str]) -> Record {
    Record::from_canonical(CanonicalRecord {
        number,
        title: format!("item {number}"),
        labels: labels.iter().map(ToString::to_string).collect(),
        is_pr,
        created_at: at_noon(created),
        created_by: author.to_string(),
        closed_at: closed.map(|(date, _)| at_noon(date)),
        closed_by: closed.map(|(_, by)| by.to_string()),
    })
    .expect("test records are valid")
}

/// An open issue created at noon on `created`, a `YYYY-MM-DD` date.
pub fn issue(number: u64, created: &str) -> Record {
    build(number, false, created, None, "author", &[])
}

pub fn labeled_issue(number: u64, created: &str, labels: &[&str]) -> Record {
    build(number, false, created, None, "author", labels)
}

pub fn closed_issue(number: u64, created: &str, closed: &str, closed_by: &str) -> Record {
    build(number, false, created, Some((closed, closed_by)), "author", &[])
}

pub fn authored_closed_issue(number: u64, author: &str, created: &str, closed: &str, closed_by: &str) -> Record {
    build(number, false, created, Some((closed, closed_by)), author, &[])
}

pub fn pull(number: u64, created: &str, closed: Option<&str>) -> Record {
    build(number, true, created, closed.map(|date| (date, "merger")), "author", &[])
}

use crate::model::Record;
use chrono::NaiveDate;

/// Whether `record` counts as open at the end of `day`.
///
/// A record is open from its creation date up to, but not including, its closing date.
#[must_use]
pub fn is_open_on(record: &Record, day: NaiveDate) -> bool {
    record.created_at().date_naive() <= day && record.closed_at().is_none_or(|closed_at| closed_at.date_naive() > day)
}

/// Number of open records on each of `dates`.
///
/// Every date is evaluated on its own, so `dates` may be any sequence.
#[must_use]
pub fn open_counts(dates: &[NaiveDate], records: &[&Record]) -> Vec<i64> {
    dates
        .iter()
        .map(|day| records.iter().filter(|record| is_open_on(record, *day)).count())
        .map(|count| i64::try_from(count).unwrap_or(i64::MAX))
        .collect()
}

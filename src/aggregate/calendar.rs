use crate::model::{IssueSet, SnapshotError};
use chrono::{Datelike, Months, NaiveDate};

/// Where month enumeration stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MonthBound {
    /// Through the month containing "today".
    #[default]
    Current,

    /// One month past the month containing "today". Older reports were produced this way.
    Trailing,
}

fn start_date(issues: &IssueSet, today: NaiveDate) -> Result<NaiveDate, SnapshotError> {
    let start = issues
        .iter()
        .map(|record| record.created_at().date_naive())
        .min()
        .ok_or(SnapshotError::Empty)?;

    if start > today {
        return Err(SnapshotError::DateRange { start, end: today });
    }

    Ok(start)
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Every calendar day from the earliest creation date through `today`, inclusive.
pub fn day_range(issues: &IssueSet, today: NaiveDate) -> Result<Vec<NaiveDate>, SnapshotError> {
    let start = start_date(issues, today)?;
    Ok(start.iter_days().take_while(|day| *day <= today).collect())
}

/// The 1st of every month from the month of the earliest creation date through the month of
/// `today`. [`MonthBound::Trailing`] adds the following month, but never crosses into the next
/// year, matching older reports.
pub fn month_range(issues: &IssueSet, today: NaiveDate, bound: MonthBound) -> Result<Vec<NaiveDate>, SnapshotError> {
    let start = first_of_month(start_date(issues, today)?);
    let mut end = first_of_month(today);
    if bound == MonthBound::Trailing && today.month() < 12 {
        end = end.checked_add_months(Months::new(1)).unwrap_or(end);
    }

    let mut months = Vec::new();
    let mut month = Some(start);
    while let Some(current) = month
        && current <= end
    {
        months.push(current);
        month = current.checked_add_months(Months::new(1));
    }

    Ok(months)
}

use super::Series;
use crate::model::{IssueSet, Record, UNKNOWN_ACTOR};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Series label for issues closed by their own author.
pub const ISSUE_AUTHOR_SERIES: &str = "{issue-author}";

fn closer(record: &Record) -> &str {
    record.closed_by().unwrap_or(UNKNOWN_ACTOR)
}

fn is_self_close(record: &Record) -> bool {
    record.closed_by() == Some(record.created_by())
}

/// Running totals of closed issues per closer, one value per day in `dates`.
///
/// Pull requests are ignored. Issues closed by their own author are pooled into the
/// [`ISSUE_AUTHOR_SERIES`] series instead of a series for each author. Series that stay at zero
/// over the whole range are dropped. Closers come out in login order, followed by the pooled
/// author series.
#[must_use]
pub fn closer_attribution(dates: &[NaiveDate], issues: &IssueSet) -> Vec<Series> {
    let closed: Vec<&Record> = issues.iter().filter(|record| !record.is_pr() && record.is_closed()).collect();

    let mut by_closer: BTreeMap<&str, Vec<i64>> = closed.iter().map(|record| (closer(record), vec![0; dates.len()])).collect();
    let mut by_author = vec![0; dates.len()];

    for (idx, day) in dates.iter().enumerate() {
        for record in &closed {
            let closed_on = record.closed_at().map(|closed_at| closed_at.date_naive());
            if closed_on.is_none_or(|closed_on| closed_on > *day) {
                continue;
            }

            if is_self_close(record) {
                by_author[idx] += 1;
            } else if let Some(counts) = by_closer.get_mut(closer(record)) {
                counts[idx] += 1;
            }
        }
    }

    by_closer
        .into_iter()
        .chain(core::iter::once((ISSUE_AUTHOR_SERIES, by_author)))
        .filter(|(_, counts)| counts.iter().any(|&count| count != 0))
        .map(|(name, counts)| Series::new(name, dates, &counts))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_support::{authored_closed_issue, issue, pull};

    fn days(start: &str, count: usize) -> Vec<NaiveDate> {
        start.parse::<NaiveDate>().unwrap().iter_days().take(count).collect()
    }

    fn find<'a>(series: &'a [Series], label: &str) -> Option<&'a Series> {
        series.iter().find(|s| s.label == label)
    }

    #[test]
    fn test_self_close_goes_to_author_series() {
        let issues: IssueSet = [authored_closed_issue(1, "alice", "2021-01-01", "2021-01-02", "alice")].into_iter().collect();
        let series = closer_attribution(&days("2021-01-01", 3), &issues);

        assert_eq!(series.len(), 1);
        assert_eq!(series[0].label, ISSUE_AUTHOR_SERIES);
        assert_eq!(series[0].values().collect::<Vec<_>>(), vec![0, 1, 1]);
        assert!(find(&series, "alice").is_none());
    }

    #[test]
    fn test_counts_are_cumulative_per_closer() {
        let issues: IssueSet = [
            authored_closed_issue(1, "alice", "2021-01-01", "2021-01-02", "maintainer"),
            authored_closed_issue(2, "bob", "2021-01-01", "2021-01-03", "maintainer"),
            authored_closed_issue(3, "carol", "2021-01-01", "2021-01-03", "triager"),
            authored_closed_issue(4, "dave", "2021-01-01", "2021-01-03", "dave"),
        ]
        .into_iter()
        .collect();
        let series = closer_attribution(&days("2021-01-01", 4), &issues);

        let labels: Vec<_> = series.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["maintainer", "triager", ISSUE_AUTHOR_SERIES]);
        assert_eq!(find(&series, "maintainer").unwrap().values().collect::<Vec<_>>(), vec![0, 1, 2, 2]);
        assert_eq!(find(&series, "triager").unwrap().values().collect::<Vec<_>>(), vec![0, 0, 1, 1]);
        assert_eq!(find(&series, ISSUE_AUTHOR_SERIES).unwrap().values().collect::<Vec<_>>(), vec![0, 0, 1, 1]);
    }

    #[test]
    fn test_pull_requests_and_open_issues_are_ignored() {
        let issues: IssueSet = [pull(1, "2021-01-01", Some("2021-01-02")), issue(2, "2021-01-01")].into_iter().collect();
        assert!(closer_attribution(&days("2021-01-01", 3), &issues).is_empty());
    }

    #[test]
    fn test_closes_after_range_are_dropped() {
        let issues: IssueSet = [authored_closed_issue(1, "alice", "2021-01-01", "2021-02-01", "bob")].into_iter().collect();
        assert!(closer_attribution(&days("2021-01-01", 3), &issues).is_empty());
    }
}

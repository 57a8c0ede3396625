use crate::model::{IssueSet, Record};

/// A subset of a snapshot's records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Population {
    /// Issues only, no pull requests.
    Issues,

    /// Issues carrying the given label.
    IssuesLabeled(String),

    PullRequests,
}

impl Population {
    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Self::Issues => !record.is_pr(),
            Self::IssuesLabeled(label) => !record.is_pr() && record.has_label(label),
            Self::PullRequests => record.is_pr(),
        }
    }

    /// The records of `issues` in this population.
    #[must_use]
    pub fn select<'a>(&self, issues: &'a IssueSet) -> Vec<&'a Record> {
        issues.iter().filter(|record| self.matches(record)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_support::{issue, labeled_issue, pull};

    #[test]
    fn test_select() {
        let issues: IssueSet = [
            issue(1, "2021-01-01"),
            labeled_issue(2, "2021-01-01", &["bug"]),
            pull(3, "2021-01-01", None),
        ]
        .into_iter()
        .collect();

        let numbers = |population: Population| population.select(&issues).iter().map(|r| r.number()).collect::<Vec<_>>();
        assert_eq!(numbers(Population::Issues), vec![1, 2]);
        assert_eq!(numbers(Population::IssuesLabeled("bug".to_string())), vec![2]);
        assert_eq!(numbers(Population::IssuesLabeled("docs".to_string())), Vec::<u64>::new());
        assert_eq!(numbers(Population::PullRequests), vec![3]);
    }
}

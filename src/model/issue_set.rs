use super::{Record, SnapshotError};
use std::collections::BTreeMap;
use std::collections::btree_map::Values;

/// Records keyed by issue number, iterated in ascending number order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueSet {
    issues: BTreeMap<u64, Record>,
}

impl IssueSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing and returning any record with the same number.
    pub fn insert(&mut self, record: Record) -> Option<Record> {
        self.issues.insert(record.number(), record)
    }

    /// Merge another set into this one. Records from `other` win on conflicting numbers.
    pub fn merge(&mut self, other: Self) {
        self.issues.extend(other.issues);
    }

    /// Look up a record by number.
    pub fn get(&self, number: u64) -> Result<&Record, SnapshotError> {
        self.issues.get(&number).ok_or(SnapshotError::NotFound(number))
    }

    #[must_use]
    pub fn contains(&self, number: u64) -> bool {
        self.issues.contains_key(&number)
    }

    /// The record with the lowest number.
    #[must_use]
    pub fn oldest_by_key(&self) -> Option<&Record> {
        self.issues.values().next()
    }

    /// The record with the highest number.
    #[must_use]
    pub fn newest_by_key(&self) -> Option<&Record> {
        self.issues.values().next_back()
    }

    pub fn iter(&self) -> Values<'_, u64, Record> {
        self.issues.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

impl FromIterator<Record> for IssueSet {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            issues: iter.into_iter().map(|record| (record.number(), record)).collect(),
        }
    }
}

impl Extend<Record> for IssueSet {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        self.issues.extend(iter.into_iter().map(|record| (record.number(), record)));
    }
}

impl<'a> IntoIterator for &'a IssueSet {
    type Item = &'a Record;
    type IntoIter = Values<'a, u64, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for IssueSet {
    type Item = Record;
    type IntoIter = std::collections::btree_map::IntoValues<u64, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.into_values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_support::{closed_issue, issue};

    #[test]
    fn test_insert_replaces_same_number() {
        let mut set = IssueSet::new();
        assert!(set.insert(issue(1, "2021-01-01")).is_none());
        let previous = set.insert(closed_issue(1, "2021-01-01", "2021-01-05", "alice"));
        assert!(previous.is_some_and(|r| !r.is_closed()));
        assert_eq!(set.len(), 1);
        assert!(set.get(1).unwrap().is_closed());
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let set: IssueSet = [issue(1, "2021-01-01")].into_iter().collect();
        assert!(matches!(set.get(2), Err(SnapshotError::NotFound(2))));
        assert!(set.contains(1));
        assert!(!set.contains(2));
    }

    #[test]
    fn test_oldest_and_newest_by_key() {
        let set: IssueSet = [issue(5, "2021-01-01"), issue(2, "2021-02-01"), issue(9, "2020-01-01")]
            .into_iter()
            .collect();
        assert_eq!(set.oldest_by_key().map(Record::number), Some(2));
        assert_eq!(set.newest_by_key().map(Record::number), Some(9));
        assert!(IssueSet::new().oldest_by_key().is_none());
    }

    #[test]
    fn test_merge_prefers_incoming() {
        let mut set: IssueSet = [issue(1, "2021-01-01"), issue(2, "2021-01-01")].into_iter().collect();
        let incoming: IssueSet = [closed_issue(2, "2021-01-01", "2021-01-03", "bob"), issue(3, "2021-01-02")]
            .into_iter()
            .collect();
        set.merge(incoming);

        assert_eq!(set.len(), 3);
        assert!(set.get(2).unwrap().is_closed());
        let numbers: Vec<_> = set.iter().map(Record::number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }
}

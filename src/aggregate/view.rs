use super::{MonthBound, Population, Series, closer_attribution, day_range, deltas, month_range, open_counts};
use crate::model::{Snapshot, SnapshotError};
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Group name reserved for the unfiltered issue count.
pub const TOTAL_GROUP: &str = "total";

/// The reports that can be generated from a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Deserialize, Serialize, Display, EnumString)]
#[value(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum View {
    /// Open issues per day, in total and per label group.
    IssueCounts,

    /// Open pull requests per day.
    PullCounts,

    /// Running totals of closed issues per closer.
    IssueClosers,

    /// Month-over-month change in open issues.
    IssueDeltas,
}

/// Inputs shared by every view.
#[derive(Debug, Clone)]
pub struct ViewOptions {
    /// The last day to report on.
    pub today: NaiveDate,

    /// Display name and label pairs for the `issue-counts` view.
    pub groups: Vec<(String, String)>,

    pub month_bound: MonthBound,
}

impl ViewOptions {
    #[must_use]
    pub const fn new(today: NaiveDate) -> Self {
        Self {
            today,
            groups: Vec::new(),
            month_bound: MonthBound::Current,
        }
    }
}

/// Generate the series for one view.
pub fn generate(view: View, snapshot: &Snapshot, options: &ViewOptions) -> Result<Vec<Series>, SnapshotError> {
    match view {
        View::IssueCounts => issue_counts(snapshot, options),
        View::PullCounts => pull_counts(snapshot, options),
        View::IssueClosers => issue_closers(snapshot, options),
        View::IssueDeltas => issue_deltas(snapshot, options),
    }
}

fn issue_counts(snapshot: &Snapshot, options: &ViewOptions) -> Result<Vec<Series>, SnapshotError> {
    if let Some((group, _)) = options.groups.iter().find(|(group, _)| group == TOTAL_GROUP) {
        return Err(SnapshotError::ReservedGroup(group.clone()));
    }

    let days = day_range(snapshot.issues(), options.today)?;
    let groups = core::iter::once((TOTAL_GROUP, Population::Issues)).chain(
        options
            .groups
            .iter()
            .map(|(group, label)| (group.as_str(), Population::IssuesLabeled(label.clone()))),
    );

    Ok(groups
        .map(|(group, population)| {
            let counts = open_counts(&days, &population.select(snapshot.issues()));
            Series::new(format!("open issues ({group})"), &days, &counts)
        })
        .collect())
}

fn pull_counts(snapshot: &Snapshot, options: &ViewOptions) -> Result<Vec<Series>, SnapshotError> {
    let days = day_range(snapshot.issues(), options.today)?;
    let counts = open_counts(&days, &Population::PullRequests.select(snapshot.issues()));
    Ok(vec![Series::new("open PRs", &days, &counts)])
}

fn issue_closers(snapshot: &Snapshot, options: &ViewOptions) -> Result<Vec<Series>, SnapshotError> {
    let days = day_range(snapshot.issues(), options.today)?;
    Ok(closer_attribution(&days, snapshot.issues()))
}

fn issue_deltas(snapshot: &Snapshot, options: &ViewOptions) -> Result<Vec<Series>, SnapshotError> {
    let months = month_range(snapshot.issues(), options.today, options.month_bound)?;
    let counts = open_counts(&months, &Population::Issues.select(snapshot.issues()));
    Ok(vec![Series::new("changes (issues)", &months, &deltas(&counts))])
}

use crate::aggregate::View;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-repository settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RepoConfig {
    /// Reports to generate from the repository's data.
    #[serde(default)]
    pub views: Vec<View>,

    /// Extra series for the `issue-counts` view, as group name to GitHub label.
    #[serde(default)]
    pub groups: BTreeMap<String, String>,
}

impl RepoConfig {
    /// The label groups as (group, label) pairs, ordered by group name.
    #[must_use]
    pub fn group_pairs(&self) -> Vec<(String, String)> {
        self.groups.iter().map(|(group, label)| (group.clone(), label.clone())).collect()
    }
}

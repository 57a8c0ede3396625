use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// An issue or pull request as returned by the GitHub REST API.
///
/// Only the fields needed to build a [`Record`](super::Record) are kept; everything else is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct WireIssue {
    pub number: u64,
    pub title: String,

    #[serde(default)]
    pub user: Option<WireActor>,

    #[serde(default)]
    pub labels: Vec<WireLabel>,

    pub created_at: String,

    #[serde(default)]
    pub closed_at: Option<String>,

    #[serde(default)]
    pub closed_by: Option<WireActor>,

    /// Set by the issues endpoints when the entry is a pull request.
    #[serde(default, deserialize_with = "field_present")]
    pub pull_request: bool,

    /// Set by the pulls endpoint, null or not.
    #[serde(default, deserialize_with = "field_present")]
    pub merged_at: bool,
}

impl WireIssue {
    #[must_use]
    pub const fn is_pull_request(&self) -> bool {
        self.pull_request || self.merged_at
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireActor {
    pub login: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireLabel {
    pub name: String,
}

/// Marks a field as present whatever its value, `null` included.
fn field_present<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    IgnoredAny::deserialize(deserializer).map(|_| true)
}

use serde::{Deserialize, Serialize};

/// A record as it is stored in the snapshot file.
///
/// Field order here is the field order in the file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CanonicalRecord {
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub labels: Vec<String>,
    pub is_pr: bool,
    pub created_at: String,
    pub created_by: String,
    #[serde(default)]
    pub closed_at: Option<String>,
    #[serde(default)]
    pub closed_by: Option<String>,
}

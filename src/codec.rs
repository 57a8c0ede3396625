//! Reading and writing snapshot files.
//!
//! A snapshot file is a JSON object with an `issues` array, sorted by number, and a `record`
//! object holding the repository and the watermark. Saving always rewrites the whole file.

use crate::model::{IssueSet, Metadata, Record, Snapshot, SnapshotError};
use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

const LOG_TARGET: &str = "codec";

#[derive(Serialize)]
struct DocumentOut<'a> {
    issues: Vec<&'a Record>,
    record: &'a Metadata,
}

#[derive(Deserialize)]
struct DocumentIn {
    issues: Vec<Record>,
    record: Metadata,
}

/// Encode a snapshot as pretty-printed JSON.
pub fn encode(snapshot: &Snapshot) -> Result<String, SnapshotError> {
    let document = DocumentOut {
        issues: snapshot.issues().iter().collect(),
        record: snapshot.metadata(),
    };

    serde_json::to_string_pretty(&document).map_err(|e| SnapshotError::Format(e.to_string()))
}

/// Decode a snapshot from JSON text.
///
/// Fails with [`SnapshotError::Format`] if anything is missing or malformed. No partial snapshot is
/// ever returned.
pub fn decode(text: &str) -> Result<Snapshot, SnapshotError> {
    let document: DocumentIn = serde_json::from_str(text).map_err(|e| SnapshotError::Format(e.to_string()))?;

    let mut issues = IssueSet::new();
    for record in document.issues {
        let number = record.number();
        if issues.insert(record).is_some() {
            return Err(SnapshotError::Format(format!("issue {number} appears more than once")));
        }
    }

    Ok(Snapshot::from_parts(issues, document.record))
}

/// Write a snapshot to `path`, replacing the file in one step.
///
/// The data goes to a temporary file next to the target which is then renamed over it, so the
/// target either holds the complete new snapshot or is left as it was.
pub fn save(path: &Utf8Path, snapshot: &Snapshot) -> Result<(), SnapshotError> {
    let text = encode(snapshot)?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(text.as_bytes())?;
    file.write_all(b"\n")?;
    file.as_file().sync_all()?;
    let _ = file.persist(path).map_err(|e| e.error)?;

    log::debug!(target: LOG_TARGET, "Saved {} issue(s) for {} to '{path}'", snapshot.issues().len(), snapshot.repo());
    Ok(())
}

/// Read a snapshot from `path`.
pub fn load(path: &Utf8Path) -> Result<Snapshot, SnapshotError> {
    let text = fs::read_to_string(path)?;
    let snapshot = decode(&text)?;

    log::debug!(target: LOG_TARGET, "Loaded {} issue(s) for {} from '{path}'", snapshot.issues().len(), snapshot.repo());
    Ok(snapshot)
}

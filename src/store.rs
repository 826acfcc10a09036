//! Immutable in-memory record store loaded at start-up.
//!
//! DESIGN
//! ======
//! Records are read once from a JSON array or JSON Lines file (or taken from
//! the built-in samples) and kept sorted by `(created, id)`. Handlers only
//! read, so the store is shared behind an `Arc` without locking.

use std::path::{Path, PathBuf};

use trajectories::Trajectory;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed trajectory JSON: {0}")]
    Json(#[source] serde_json::Error),
    #[error("malformed trajectory on line {line}: {source}")]
    JsonLine {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default)]
pub struct TrajectoryStore {
    records: Vec<Trajectory>,
}

impl TrajectoryStore {
    /// Load records from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let raw = std::fs::read_to_string(path).map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_records(parse_records(&raw)?))
    }

    #[must_use]
    pub fn from_records(mut records: Vec<Trajectory>) -> Self {
        records.sort_by(|a, b| a.created.cmp(&b.created).then(a.id.cmp(&b.id)));
        Self { records }
    }

    #[must_use]
    pub fn all(&self) -> &[Trajectory] {
        &self.records
    }

    #[must_use]
    pub fn for_session(&self, session_id: i64) -> Vec<Trajectory> {
        self.records
            .iter()
            .filter(|t| t.session_id == Some(session_id))
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn get(&self, id: i64) -> Option<&Trajectory> {
        self.records.iter().find(|t| t.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Parse a JSON array, or JSON Lines when the content does not start with `[`.
/// Blank lines are skipped; line numbers in errors are 1-based.
///
/// # Errors
///
/// Returns [`StoreError::Json`] / [`StoreError::JsonLine`] on malformed input.
pub fn parse_records(raw: &str) -> Result<Vec<Trajectory>, StoreError> {
    if raw.trim_start().starts_with('[') {
        return serde_json::from_str(raw).map_err(StoreError::Json);
    }
    raw.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str(line).map_err(|source| StoreError::JsonLine {
                line: index + 1,
                source,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;

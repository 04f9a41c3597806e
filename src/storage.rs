//! Team dataset loading and validation.
//!
//! The dataset is a JSON array of team records, read once before serving
//! traffic. Validation runs at load time so the scoring engine never sees a
//! record its preconditions cannot tolerate (zero capacity, colorless team,
//! colliding names).

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;

use crate::text::normalize_name;
use crate::types::Team;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("dataset contains no teams")]
    Empty,
    #[error("duplicate team id {0}")]
    DuplicateId(u32),
    #[error("duplicate team name {0:?} after name normalization")]
    DuplicateName(String),
    #[error("team {0:?} has zero stadium capacity")]
    ZeroCapacity(String),
    #[error("team {0:?} has no colors")]
    NoColors(String),
}

/// Load and validate the team dataset from a JSON file.
pub fn load_teams(path: impl AsRef<Path>) -> Result<Vec<Team>, DatasetError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let teams: Vec<Team> = serde_json::from_str(&content).map_err(|source| DatasetError::Parse {
        path: path.display().to_string(),
        source,
    })?;
    validate_teams(&teams)?;
    tracing::info!(teams = teams.len(), path = %path.display(), "loaded team dataset");
    Ok(teams)
}

/// Reject datasets that would break lookup or scoring preconditions.
pub fn validate_teams(teams: &[Team]) -> Result<(), DatasetError> {
    if teams.is_empty() {
        return Err(DatasetError::Empty);
    }
    let mut ids = HashSet::new();
    let mut names = HashSet::new();
    for team in teams {
        if !ids.insert(team.id) {
            return Err(DatasetError::DuplicateId(team.id));
        }
        if !names.insert(normalize_name(&team.name)) {
            return Err(DatasetError::DuplicateName(team.name.clone()));
        }
        if team.stadium_capacity == 0 {
            return Err(DatasetError::ZeroCapacity(team.name.clone()));
        }
        if team.colors.is_empty() {
            return Err(DatasetError::NoColors(team.name.clone()));
        }
    }
    Ok(())
}

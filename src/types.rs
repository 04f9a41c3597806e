//! Core data model: teams, verdicts, and the immutable game context.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::colors::ColorSynonymTable;
use crate::text::normalize_name;

/// One team in the reference dataset. Loaded once at startup, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
    pub state: String,
    pub city: String,
    /// Ordered color names; duplicates not expected.
    pub colors: Vec<String>,
    pub mascot: String,
    /// Always positive; validated at load time.
    pub stadium_capacity: u32,
    pub previous_conference: String,
}

/// Three-valued result for one compared attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldVerdict {
    Exact,
    Close,
    #[serde(rename = "none")]
    Miss,
}

/// Whether the round is over after this guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Won,
    Continue,
}

/// Per-field feedback for one guess, plus the derived outcome.
///
/// `outcome` is `Won` iff every field is `Exact`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundVerdict {
    pub state: FieldVerdict,
    pub city: FieldVerdict,
    pub colors: FieldVerdict,
    pub mascot: FieldVerdict,
    pub stadium_capacity: FieldVerdict,
    pub previous_conference: FieldVerdict,
    pub outcome: Outcome,
}

impl RoundVerdict {
    pub fn is_win(&self) -> bool {
        self.outcome == Outcome::Won
    }

    /// The six field verdicts in declaration order.
    pub fn fields(&self) -> [FieldVerdict; 6] {
        [
            self.state,
            self.city,
            self.colors,
            self.mascot,
            self.stadium_capacity,
            self.previous_conference,
        ]
    }
}

/// Immutable context shared across requests: the team dataset, the color
/// synonym table, and a strict-normalized name index for guess resolution.
pub struct GameContext {
    pub teams: Vec<Team>,
    pub colors: ColorSynonymTable,
    /// `normalize_name(team.name)` -> index into `teams`.
    name_index: HashMap<String, usize>,
}

impl GameContext {
    pub fn new(teams: Vec<Team>, colors: ColorSynonymTable) -> Self {
        let mut name_index = HashMap::with_capacity(teams.len());
        for (i, team) in teams.iter().enumerate() {
            name_index.insert(normalize_name(&team.name), i);
        }
        Self {
            teams,
            colors,
            name_index,
        }
    }

    /// Resolve free-text guess input to a dataset team, case- and
    /// punctuation-insensitively. Returns None for unknown names.
    pub fn find_team(&self, raw_name: &str) -> Option<&Team> {
        self.name_index
            .get(&normalize_name(raw_name))
            .map(|&i| &self.teams[i])
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }
}

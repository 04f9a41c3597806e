//! Color comparison: synonym-closure overlap and literal set equality.
//!
//! Real-world team colors are named loosely ("scarlet" and "crimson" both
//! relate to "red"; "navy" and "cobalt" to "blue"), so the Close verdict runs
//! through a synonym expansion. The Exact verdict is a literal set equality
//! check on the normalized names and deliberately ignores synonyms.

use std::collections::{HashMap, HashSet};

use crate::constants::COLOR_SYNONYM_GROUPS;
use crate::text::normalize;
use crate::types::FieldVerdict;

/// Canonical color name -> alias list. Built once at startup, read-only.
#[derive(Debug, Clone)]
pub struct ColorSynonymTable {
    groups: HashMap<String, Vec<String>>,
}

impl Default for ColorSynonymTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ColorSynonymTable {
    /// The fixed table from [`COLOR_SYNONYM_GROUPS`].
    pub fn builtin() -> Self {
        Self::from_groups(COLOR_SYNONYM_GROUPS.iter().map(|(key, aliases)| {
            (
                key.to_string(),
                aliases.iter().map(|a| a.to_string()).collect(),
            )
        }))
    }

    pub fn from_groups<I>(groups: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        Self {
            groups: groups.into_iter().collect(),
        }
    }

    /// Synonym closure of one color: its normalized name, plus the canonical
    /// key and every alias of each group that mentions it.
    pub fn expand(&self, color: &str) -> HashSet<String> {
        let base = normalize(color);
        let mut set = HashSet::new();
        for (key, aliases) in &self.groups {
            if base == *key || aliases.iter().any(|a| *a == base) {
                set.insert(key.clone());
                set.extend(aliases.iter().cloned());
            }
        }
        set.insert(base);
        set
    }

    /// True iff any guess color's closure intersects any answer color's closure.
    pub fn overlaps(&self, guess: &[String], answer: &[String]) -> bool {
        let answer_sets: Vec<HashSet<String>> =
            answer.iter().map(|c| self.expand(c)).collect();
        guess
            .iter()
            .map(|c| self.expand(c))
            .any(|guess_set| answer_sets.iter().any(|a| !guess_set.is_disjoint(a)))
    }

    /// Exact on literal set equality, Close on any synonym overlap, else Miss.
    pub fn verdict(&self, guess: &[String], answer: &[String]) -> FieldVerdict {
        if exact_set(guess, answer) {
            FieldVerdict::Exact
        } else if self.overlaps(guess, answer) {
            FieldVerdict::Close
        } else {
            FieldVerdict::Miss
        }
    }
}

/// Literal set equality of the normalized collections: duplicates collapsed,
/// order ignored, no synonym expansion.
pub fn exact_set(guess: &[String], answer: &[String]) -> bool {
    let guess_set: HashSet<String> = guess.iter().map(|c| normalize(c)).collect();
    let answer_set: HashSet<String> = answer.iter().map(|c| normalize(c)).collect();
    guess_set == answer_set
}

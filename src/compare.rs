//! Round scoring: per-field verdicts and the overall outcome.
//!
//! [`score`] is the single entry point the service layer calls once per
//! guess. It is a pure function of (guess, answer, synonym table): no I/O,
//! no shared mutable state, safe to invoke concurrently. The six field
//! comparisons are independent of each other.

use thiserror::Error;

use crate::colors::ColorSynonymTable;
use crate::constants::{CAPACITY_TOLERANCE, CITY_CLOSE_DISTANCE};
use crate::distance::edit_distance;
use crate::text::normalize;
use crate::types::{FieldVerdict, Outcome, RoundVerdict, Team};

/// Precondition failures inside the scoring engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompareError {
    /// The numeric tolerance band divides by the answer value, so a zero
    /// answer capacity is rejected before any arithmetic happens.
    #[error("answer stadium capacity must be positive")]
    ZeroAnswerCapacity,
}

/// Binary fields (state, previous conference): Exact or Miss, no partial credit.
fn binary_verdict(guess: &str, answer: &str) -> FieldVerdict {
    if normalize(guess) == normalize(answer) {
        FieldVerdict::Exact
    } else {
        FieldVerdict::Miss
    }
}

/// City: Exact on normalized equality, Close within edit distance 2.
fn city_verdict(guess: &str, answer: &str) -> FieldVerdict {
    if normalize(guess) == normalize(answer) {
        FieldVerdict::Exact
    } else if edit_distance(guess, answer) <= CITY_CLOSE_DISTANCE {
        FieldVerdict::Close
    } else {
        FieldVerdict::Miss
    }
}

/// Strip exactly one trailing 's'. Naive de-pluralization, not stemming.
fn plural_root(s: &str) -> &str {
    s.strip_suffix('s').unwrap_or(s)
}

/// Mascot: Exact on normalized equality; Close when the singular roots match
/// ("Bronco" vs "Broncos").
pub fn mascot_verdict(guess: &str, answer: &str) -> FieldVerdict {
    let guess = normalize(guess);
    let answer = normalize(answer);
    if guess == answer {
        FieldVerdict::Exact
    } else if plural_root(&guess) == plural_root(&answer) {
        FieldVerdict::Close
    } else {
        FieldVerdict::Miss
    }
}

/// Stadium capacity: Exact on strict equality, Close when the guess lies
/// within `tolerance` of the answer.
///
/// The band is relative to the ANSWER value, not the guess — the check is
/// intentionally asymmetric.
pub fn capacity_verdict(
    guess: u32,
    answer: u32,
    tolerance: f64,
) -> Result<FieldVerdict, CompareError> {
    if answer == 0 {
        return Err(CompareError::ZeroAnswerCapacity);
    }
    if guess == answer {
        return Ok(FieldVerdict::Exact);
    }
    let diff = (f64::from(guess) - f64::from(answer)).abs();
    if diff / f64::from(answer) <= tolerance {
        Ok(FieldVerdict::Close)
    } else {
        Ok(FieldVerdict::Miss)
    }
}

/// Score one guess against the answer: six independent field verdicts plus
/// the derived outcome (Won iff every field is Exact).
pub fn score(
    guess: &Team,
    answer: &Team,
    colors: &ColorSynonymTable,
) -> Result<RoundVerdict, CompareError> {
    let state = binary_verdict(&guess.state, &answer.state);
    let city = city_verdict(&guess.city, &answer.city);
    let color_verdict = colors.verdict(&guess.colors, &answer.colors);
    let mascot = mascot_verdict(&guess.mascot, &answer.mascot);
    let stadium_capacity =
        capacity_verdict(guess.stadium_capacity, answer.stadium_capacity, CAPACITY_TOLERANCE)?;
    let previous_conference =
        binary_verdict(&guess.previous_conference, &answer.previous_conference);

    let verdict = RoundVerdict {
        state,
        city,
        colors: color_verdict,
        mascot,
        stadium_capacity,
        previous_conference,
        outcome: Outcome::Continue,
    };
    let outcome = if verdict
        .fields()
        .iter()
        .all(|v| *v == FieldVerdict::Exact)
    {
        Outcome::Won
    } else {
        Outcome::Continue
    };

    Ok(RoundVerdict { outcome, ..verdict })
}

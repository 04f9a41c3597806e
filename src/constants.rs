//! Game constants: comparison thresholds and the fixed color-synonym table.

/// Relative tolerance band for the stadium-capacity comparison:
/// a guess within ±10% of the answer value scores Close.
pub const CAPACITY_TOLERANCE: f64 = 0.10;

/// Maximum edit distance at which two city names still score Close.
pub const CITY_CLOSE_DISTANCE: usize = 2;

/// Length of the opaque round token minted by `/api/random`.
pub const ROUND_TOKEN_LEN: usize = 12;

/// Default location of the team dataset, relative to the base path.
pub const DEFAULT_TEAMS_PATH: &str = "data/teams.json";

/// Fixed color-synonym groups: canonical name -> aliases.
///
/// Membership is transitive within one declared group only — it is never
/// chained across groups. Two colors from different groups still count as
/// related when the groups share an alias ("scarlet" and "crimson" both
/// expand to sets containing "red").
pub const COLOR_SYNONYM_GROUPS: &[(&str, &[&str])] = &[
    ("crimson", &["red", "cardinal", "garnet"]),
    ("scarlet", &["red"]),
    ("gray", &["grey", "silver"]),
    ("blue", &["royal", "navy", "azure", "cobalt"]),
    ("gold", &["yellow"]),
    ("orange", &["tangerine"]),
];

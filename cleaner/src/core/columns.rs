//! Names of the columns the pipeline reads, rewrites or derives.

pub const PLAYER_ID: &str = "player_id";
pub const BIRTH_DATE: &str = "birth_date";
pub const DEATH_DATE: &str = "death_date";
pub const HOF_INDUCTION_YEAR: &str = "hof_induction_year";

/// Raw `"feet-inches"` string, rewritten to inches
pub const HEIGHT: &str = "height";
/// Raw `"years-days"` string, rewritten to fractional years
pub const AGE: &str = "age";

pub const PLAYER_TEAM_SCORE: &str = "player_team_score";
pub const OPPONENT_SCORE: &str = "opponent_score";

// Derived features
pub const CURRENT_AGE: &str = "current_age";
pub const WIN: &str = "win";
pub const SCORE_DIFF: &str = "score_diff";

/// Columns removed before the training data is written.
pub const DROPPED_COLUMNS: [&str; 4] = [HOF_INDUCTION_YEAR, BIRTH_DATE, DEATH_DATE, PLAYER_ID];

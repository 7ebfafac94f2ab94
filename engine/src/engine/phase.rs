//! Phase sequencing for the game year.
//!
//! Phase flow:
//! - Spring Movement -> Spring Retreat (if dislodged) OR Fall Movement
//! - Spring Retreat  -> Fall Movement
//! - Fall Movement   -> Fall Retreat (if dislodged) OR Fall Adjustment
//! - Fall Retreat    -> Fall Adjustment
//! - Fall Adjustment -> Spring Movement (next year)
//!
//! Retreat and adjustment handling are out of scope for this engine, so both
//! phases are sequenced but auto-skipped by the game facade when they have
//! nothing to do.

use serde::{Deserialize, Serialize};

/// The season of a game turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Spring,
    Fall,
}

impl Season {
    /// Returns the capitalised display name used in phase strings.
    pub const fn name(self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Fall => "Fall",
        }
    }
}

/// The phase within a game turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseType {
    Movement,
    Retreat,
    Adjustment,
}

impl PhaseType {
    /// Returns the capitalised display name used in phase strings.
    pub const fn name(self) -> &'static str {
        match self {
            PhaseType::Movement => "Movement",
            PhaseType::Retreat => "Retreat",
            PhaseType::Adjustment => "Adjustment",
        }
    }
}

/// Computes the next (season, phase) given the current position in the year
/// and whether the movement phase produced dislodgements.
pub fn next_phase(
    season: Season,
    phase: PhaseType,
    has_dislodgements: bool,
) -> (Season, PhaseType) {
    match phase {
        PhaseType::Movement => {
            if has_dislodgements {
                (season, PhaseType::Retreat)
            } else {
                after_movement(season)
            }
        }
        PhaseType::Retreat => after_movement(season),
        PhaseType::Adjustment => (Season::Spring, PhaseType::Movement),
    }
}

fn after_movement(season: Season) -> (Season, PhaseType) {
    match season {
        Season::Spring => (Season::Fall, PhaseType::Movement),
        Season::Fall => (Season::Fall, PhaseType::Adjustment),
    }
}

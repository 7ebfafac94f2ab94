//! Unit identity and position history entries.
//!
//! Units are identified by opaque `UnitId` handles issued by the position
//! store; all unit state lives in the store itself. A `Position` records one
//! step of a unit's phase history together with the cause that produced it.

use serde::{Deserialize, Serialize};

use super::territory::Territory;

/// The type of a military unit.
///
/// Fleets are accepted in orders and rosters but move on the army graph like
/// every other unit; fleet-specific adjacency is out of scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitType {
    Army,
    Fleet,
}

impl UnitType {
    /// Returns the single-character order-notation abbreviation.
    pub const fn letter(self) -> char {
        match self {
            UnitType::Army => 'a',
            UnitType::Fleet => 'f',
        }
    }

    /// Parses a unit type from its single-character abbreviation.
    pub fn from_letter(c: char) -> Option<UnitType> {
        match c.to_ascii_lowercase() {
            'a' => Some(UnitType::Army),
            'f' => Some(UnitType::Fleet),
            _ => None,
        }
    }
}

/// Opaque handle to a unit tracked by a `PositionStore`.
///
/// Handles are arena indices issued by `add_unit` and are only meaningful
/// for the store that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnitId(pub(crate) u32);

/// What produced a position history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cause {
    /// Starting entry at the beginning of the phase.
    Added,
    /// A confirmed hold order.
    Held,
    /// An accepted move order.
    Moved,
    /// The resolver revoked a move; the unit is back at its origin.
    Bounced,
    /// The resolver dislodged a unit that never left its origin.
    Defeated,
}

/// One step of a unit's phase history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub territory: Territory,
    /// Number of uncut supports behind the move or hold; always 0 for
    /// Added, Bounced, and Defeated entries.
    pub strength: u32,
    pub cause: Cause,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_type_letter_roundtrip() {
        assert_eq!(UnitType::from_letter('a'), Some(UnitType::Army));
        assert_eq!(UnitType::from_letter('f'), Some(UnitType::Fleet));
        assert_eq!(UnitType::from_letter('A'), Some(UnitType::Army));
        assert_eq!(UnitType::from_letter('x'), None);
    }

    #[test]
    fn unit_type_letters() {
        assert_eq!(UnitType::Army.letter(), 'a');
        assert_eq!(UnitType::Fleet.letter(), 'f');
    }
}

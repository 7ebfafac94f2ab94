//! Variant definitions.
//!
//! Only the classical variant is implemented: seven powers, twenty-two
//! starting units on their home supply centers. Fleets start where the full
//! game places them and are adjudicated as armies on the army graph.

use crate::board::territory::{
    Territory, ANK, BER, BRE, BUD, CON, EDI, KIE, LON, LVP, MAR, MOS, MUN, NAP, PAR, ROM, SEV,
    SMY, STP, TRI, VEN, VIE, WAR,
};
use crate::board::unit::UnitType;

/// Number of supply centers required for a solo victory.
pub const SOLO_THRESHOLD: usize = 18;

/// A playable map variant with its starting setup.
pub struct Variant {
    pub name: &'static str,
    pub powers: &'static [&'static str],
    /// Starting units as (nation, unit type, territory).
    pub starting_units: &'static [(&'static str, UnitType, Territory)],
}

const CLASSICAL_POWERS: &[&str] = &[
    "austria", "england", "france", "germany", "italy", "russia", "turkey",
];

const CLASSICAL_UNITS: &[(&str, UnitType, Territory)] = &[
    ("austria", UnitType::Army, VIE),
    ("austria", UnitType::Army, BUD),
    ("austria", UnitType::Fleet, TRI),
    ("england", UnitType::Fleet, LON),
    ("england", UnitType::Fleet, EDI),
    ("england", UnitType::Army, LVP),
    ("france", UnitType::Fleet, BRE),
    ("france", UnitType::Army, PAR),
    ("france", UnitType::Army, MAR),
    ("germany", UnitType::Fleet, KIE),
    ("germany", UnitType::Army, BER),
    ("germany", UnitType::Army, MUN),
    ("italy", UnitType::Fleet, NAP),
    ("italy", UnitType::Army, ROM),
    ("italy", UnitType::Army, VEN),
    ("russia", UnitType::Fleet, STP),
    ("russia", UnitType::Army, MOS),
    ("russia", UnitType::Army, WAR),
    ("russia", UnitType::Fleet, SEV),
    ("turkey", UnitType::Fleet, ANK),
    ("turkey", UnitType::Army, CON),
    ("turkey", UnitType::Army, SMY),
];

static CLASSICAL: Variant = Variant {
    name: "classical",
    powers: CLASSICAL_POWERS,
    starting_units: CLASSICAL_UNITS,
};

/// Looks up a variant by name, case-insensitively.
pub fn lookup(name: &str) -> Option<&'static Variant> {
    if name.eq_ignore_ascii_case(CLASSICAL.name) {
        Some(&CLASSICAL)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classical_has_seven_powers_and_22_units() {
        let variant = lookup("classical").unwrap();
        assert_eq!(variant.powers.len(), 7);
        assert_eq!(variant.starting_units.len(), 22);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert!(lookup("Classical").is_some());
        assert!(lookup("CLASSICAL").is_some());
    }

    #[test]
    fn unknown_variant_is_none() {
        assert!(lookup("chaos").is_none());
    }

    #[test]
    fn starting_units_sit_on_home_centers() {
        let variant = lookup("classical").unwrap();
        for (nation, _, terr) in variant.starting_units {
            assert_eq!(
                terr.home_power(),
                Some(*nation),
                "{terr} is not a home center of {nation}"
            );
        }
    }

    #[test]
    fn each_power_starts_with_its_home_center_count() {
        let variant = lookup("classical").unwrap();
        for power in variant.powers {
            let units = variant
                .starting_units
                .iter()
                .filter(|(nation, _, _)| nation == power)
                .count();
            let homes = Territory::all()
                .filter(|t| t.home_power() == Some(*power))
                .count();
            assert_eq!(units, homes);
        }
    }
}

//! Territory definitions and metadata for the classical army map.
//!
//! All 56 land territories are enumerated in alphabetical order by their
//! 3-letter ID. Territory metadata (name, supply center status, home power)
//! is stored in a compile-time lookup table indexed by the territory id.
//!
//! A `Territory` is a cheap copyable handle around its table index. Unknown
//! abbreviations resolve to the sentinel `Territory::INVALID` (id -1), which
//! never compares equal to a real territory and is rejected by every
//! adjacency query.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The number of land territories on the classical army map.
pub const TERRITORY_COUNT: usize = 56;

/// A land territory on the classical map, identified by a stable integer id.
///
/// Two territories are equal iff their ids match. The sentinel id -1 marks
/// an invalid territory returned by failed lookups.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Territory {
    id: i16,
}

const fn t(id: i16) -> Territory {
    Territory { id }
}

pub const ALB: Territory = t(0);
pub const ANK: Territory = t(1);
pub const APU: Territory = t(2);
pub const ARM: Territory = t(3);
pub const BEL: Territory = t(4);
pub const BER: Territory = t(5);
pub const BOH: Territory = t(6);
pub const BRE: Territory = t(7);
pub const BUD: Territory = t(8);
pub const BUL: Territory = t(9);
pub const BUR: Territory = t(10);
pub const CLY: Territory = t(11);
pub const CON: Territory = t(12);
pub const DEN: Territory = t(13);
pub const EDI: Territory = t(14);
pub const FIN: Territory = t(15);
pub const GAL: Territory = t(16);
pub const GAS: Territory = t(17);
pub const GRE: Territory = t(18);
pub const HOL: Territory = t(19);
pub const KIE: Territory = t(20);
pub const LON: Territory = t(21);
pub const LVN: Territory = t(22);
pub const LVP: Territory = t(23);
pub const MAR: Territory = t(24);
pub const MOS: Territory = t(25);
pub const MUN: Territory = t(26);
pub const NAF: Territory = t(27);
pub const NAP: Territory = t(28);
pub const NWY: Territory = t(29);
pub const PAR: Territory = t(30);
pub const PIC: Territory = t(31);
pub const PIE: Territory = t(32);
pub const POR: Territory = t(33);
pub const PRU: Territory = t(34);
pub const ROM: Territory = t(35);
pub const RUH: Territory = t(36);
pub const RUM: Territory = t(37);
pub const SER: Territory = t(38);
pub const SEV: Territory = t(39);
pub const SIL: Territory = t(40);
pub const SMY: Territory = t(41);
pub const SPA: Territory = t(42);
pub const STP: Territory = t(43);
pub const SWE: Territory = t(44);
pub const SYR: Territory = t(45);
pub const TRI: Territory = t(46);
pub const TUN: Territory = t(47);
pub const TUS: Territory = t(48);
pub const TYR: Territory = t(49);
pub const UKR: Territory = t(50);
pub const VEN: Territory = t(51);
pub const VIE: Territory = t(52);
pub const WAL: Territory = t(53);
pub const WAR: Territory = t(54);
pub const YOR: Territory = t(55);

impl Territory {
    /// Sentinel returned for unknown abbreviations. Never matches a real
    /// territory and is rejected by every graph query.
    pub const INVALID: Territory = t(-1);

    /// Looks up a territory by its 3-letter abbreviation, case-insensitively.
    /// Returns `Territory::INVALID` for unknown abbreviations.
    pub fn from_abbr(abbr: &str) -> Territory {
        for (i, info) in TERRITORY_INFO.iter().enumerate() {
            if info.abbr.eq_ignore_ascii_case(abbr) {
                return t(i as i16);
            }
        }
        Territory::INVALID
    }

    /// Returns true for every territory except the `INVALID` sentinel.
    pub const fn is_valid(self) -> bool {
        self.id >= 0
    }

    /// Returns the 3-letter abbreviation, or `"???"` for the sentinel.
    pub fn abbr(self) -> &'static str {
        match self.info() {
            Some(info) => info.abbr,
            None => "???",
        }
    }

    /// Returns the full display name, or `"invalid"` for the sentinel.
    pub fn name(self) -> &'static str {
        match self.info() {
            Some(info) => info.name,
            None => "invalid",
        }
    }

    /// Returns true if this territory is a supply center.
    pub fn is_supply_center(self) -> bool {
        self.info().map_or(false, |info| info.supply_center)
    }

    /// Returns the home power owning this supply center at game start, if any.
    pub fn home_power(self) -> Option<&'static str> {
        self.info().and_then(|info| info.home_power)
    }

    /// Iterates every real territory in id order.
    pub fn all() -> impl Iterator<Item = Territory> {
        (0..TERRITORY_COUNT as i16).map(t)
    }

    pub(crate) fn index(self) -> Option<usize> {
        if self.is_valid() {
            Some(self.id as usize)
        } else {
            None
        }
    }

    fn info(self) -> Option<&'static TerritoryInfo> {
        self.index().map(|i| &TERRITORY_INFO[i])
    }
}

impl fmt::Debug for Territory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbr())
    }
}

impl fmt::Display for Territory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbr())
    }
}

impl Serialize for Territory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.abbr())
    }
}

impl<'de> Deserialize<'de> for Territory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Territory, D::Error> {
        struct AbbrVisitor;

        impl<'de> Visitor<'de> for AbbrVisitor {
            type Value = Territory;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a 3-letter territory abbreviation")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Territory, E> {
                let terr = Territory::from_abbr(v);
                if terr.is_valid() {
                    Ok(terr)
                } else {
                    Err(E::custom(format!("unknown territory abbreviation '{v}'")))
                }
            }
        }

        deserializer.deserialize_str(AbbrVisitor)
    }
}

/// Static metadata for a territory.
struct TerritoryInfo {
    abbr: &'static str,
    name: &'static str,
    supply_center: bool,
    home_power: Option<&'static str>,
}

const fn info(
    abbr: &'static str,
    name: &'static str,
    supply_center: bool,
    home_power: Option<&'static str>,
) -> TerritoryInfo {
    TerritoryInfo {
        abbr,
        name,
        supply_center,
        home_power,
    }
}

/// Compile-time lookup table indexed by territory id.
static TERRITORY_INFO: [TerritoryInfo; TERRITORY_COUNT] = [
    info("alb", "Albania", false, None),
    info("ank", "Ankara", true, Some("turkey")),
    info("apu", "Apulia", false, None),
    info("arm", "Armenia", false, None),
    info("bel", "Belgium", true, None),
    info("ber", "Berlin", true, Some("germany")),
    info("boh", "Bohemia", false, None),
    info("bre", "Brest", true, Some("france")),
    info("bud", "Budapest", true, Some("austria")),
    info("bul", "Bulgaria", true, None),
    info("bur", "Burgundy", false, None),
    info("cly", "Clyde", false, None),
    info("con", "Constantinople", true, Some("turkey")),
    info("den", "Denmark", true, None),
    info("edi", "Edinburgh", true, Some("england")),
    info("fin", "Finland", false, None),
    info("gal", "Galicia", false, None),
    info("gas", "Gascony", false, None),
    info("gre", "Greece", true, None),
    info("hol", "Holland", true, None),
    info("kie", "Kiel", true, Some("germany")),
    info("lon", "London", true, Some("england")),
    info("lvn", "Livonia", false, None),
    info("lvp", "Liverpool", true, Some("england")),
    info("mar", "Marseilles", true, Some("france")),
    info("mos", "Moscow", true, Some("russia")),
    info("mun", "Munich", true, Some("germany")),
    info("naf", "North Africa", false, None),
    info("nap", "Naples", true, Some("italy")),
    info("nwy", "Norway", true, None),
    info("par", "Paris", true, Some("france")),
    info("pic", "Picardy", false, None),
    info("pie", "Piedmont", false, None),
    info("por", "Portugal", true, None),
    info("pru", "Prussia", false, None),
    info("rom", "Rome", true, Some("italy")),
    info("ruh", "Ruhr", false, None),
    info("rum", "Rumania", true, None),
    info("ser", "Serbia", true, None),
    info("sev", "Sevastopol", true, Some("russia")),
    info("sil", "Silesia", false, None),
    info("smy", "Smyrna", true, Some("turkey")),
    info("spa", "Spain", true, None),
    info("stp", "St. Petersburg", true, Some("russia")),
    info("swe", "Sweden", true, None),
    info("syr", "Syria", false, None),
    info("tri", "Trieste", true, Some("austria")),
    info("tun", "Tunisia", true, None),
    info("tus", "Tuscany", false, None),
    info("tyr", "Tyrolia", false, None),
    info("ukr", "Ukraine", false, None),
    info("ven", "Venice", true, Some("italy")),
    info("vie", "Vienna", true, Some("austria")),
    info("wal", "Wales", false, None),
    info("war", "Warsaw", true, Some("russia")),
    info("yor", "Yorkshire", false, None),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn territory_count_is_56() {
        assert_eq!(Territory::all().count(), TERRITORY_COUNT);
    }

    #[test]
    fn abbr_roundtrip() {
        for terr in Territory::all() {
            let roundtrip = Territory::from_abbr(terr.abbr());
            assert_eq!(terr, roundtrip, "abbr '{}' failed to round-trip", terr.abbr());
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(Territory::from_abbr("VIE"), VIE);
        assert_eq!(Territory::from_abbr("Vie"), VIE);
        assert_eq!(Territory::from_abbr("vie"), VIE);
    }

    #[test]
    fn unknown_abbr_returns_sentinel() {
        let unknown = Territory::from_abbr("xyz");
        assert!(!unknown.is_valid());
        for terr in Territory::all() {
            assert_ne!(unknown, terr);
        }
    }

    #[test]
    fn supply_center_count_is_34() {
        let count = Territory::all().filter(|t| t.is_supply_center()).count();
        assert_eq!(count, 34);
    }

    #[test]
    fn home_supply_center_counts() {
        let count_for = |power: &str| {
            Territory::all()
                .filter(|t| t.is_supply_center() && t.home_power() == Some(power))
                .count()
        };
        assert_eq!(count_for("austria"), 3);
        assert_eq!(count_for("england"), 3);
        assert_eq!(count_for("france"), 3);
        assert_eq!(count_for("germany"), 3);
        assert_eq!(count_for("italy"), 3);
        assert_eq!(count_for("russia"), 4);
        assert_eq!(count_for("turkey"), 3);

        let neutral = Territory::all()
            .filter(|t| t.is_supply_center() && t.home_power().is_none())
            .count();
        assert_eq!(neutral, 12);
    }

    #[test]
    fn names_are_present() {
        assert_eq!(VIE.name(), "Vienna");
        assert_eq!(STP.name(), "St. Petersburg");
        assert_eq!(Territory::INVALID.name(), "invalid");
    }

    #[test]
    fn serde_uses_abbreviations() {
        let json = serde_json::to_string(&BUD).unwrap();
        assert_eq!(json, "\"bud\"");
        let back: Territory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, BUD);
        assert!(serde_json::from_str::<Territory>("\"xyz\"").is_err());
    }
}

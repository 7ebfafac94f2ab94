//! Per-phase position store.
//!
//! Tracks every unit's phase history as an append-only list of `Position`
//! entries and derives the current conflict groups on demand. The store is
//! the single owner of unit state; units are referenced through opaque
//! `UnitId` handles issued by `add_unit`.

use std::collections::BTreeMap;

use super::territory::Territory;
use super::unit::{Cause, Position, UnitId, UnitType};

struct UnitRecord {
    nation: String,
    unit_type: UnitType,
    /// Phase history, never empty: the first entry is always the Added
    /// origin, the last entry is the current position.
    history: Vec<Position>,
}

/// Records positions of units on the board for one adjudication phase.
#[derive(Default)]
pub struct PositionStore {
    units: Vec<UnitRecord>,
}

/// Bucket key for conflict detection. Territory conflicts collect every
/// unit whose current position names the territory; swap conflicts collect
/// the two units exchanging territories along one edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum ConflictKey {
    Territory(Territory),
    Swap(Territory, Territory),
}

impl PositionStore {
    pub fn new() -> PositionStore {
        PositionStore::default()
    }

    /// Places a unit on the board with its Added origin entry and returns
    /// its handle. Handles are only meaningful for this store.
    pub fn add_unit(&mut self, nation: &str, unit_type: UnitType, territory: Territory) -> UnitId {
        let id = UnitId(self.units.len() as u32);
        self.units.push(UnitRecord {
            nation: nation.to_string(),
            unit_type,
            history: vec![Position {
                territory,
                strength: 0,
                cause: Cause::Added,
            }],
        });
        id
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Iterates every unit handle in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = UnitId> {
        (0..self.units.len() as u32).map(UnitId)
    }

    pub fn nation(&self, unit: UnitId) -> &str {
        &self.units[unit.0 as usize].nation
    }

    pub fn unit_type(&self, unit: UnitId) -> UnitType {
        self.units[unit.0 as usize].unit_type
    }

    /// Appends a Moved entry. Adjacency is not re-checked here; the caller
    /// guarantees the move is army-legal.
    pub fn move_to(&mut self, unit: UnitId, to: Territory, strength: u32) {
        self.units[unit.0 as usize].history.push(Position {
            territory: to,
            strength,
            cause: Cause::Moved,
        });
    }

    /// Appends a Held entry at the unit's current territory.
    pub fn hold(&mut self, unit: UnitId, strength: u32) {
        let territory = self.position(unit).territory;
        self.units[unit.0 as usize].history.push(Position {
            territory,
            strength,
            cause: Cause::Held,
        });
    }

    /// Appends a Bounced entry returning the unit to its previous territory
    /// with strength 0. A unit that never moved has nothing to bounce back
    /// from, so this is a no-op.
    pub fn bounce(&mut self, unit: UnitId) {
        let Some(prev) = self.prev_position(unit) else {
            return;
        };
        self.units[unit.0 as usize].history.push(Position {
            territory: prev.territory,
            strength: 0,
            cause: Cause::Bounced,
        });
    }

    /// Appends a Defeated entry at the unit's current territory. Defeated
    /// units no longer participate in conflicts.
    pub fn set_defeated(&mut self, unit: UnitId) {
        let territory = self.position(unit).territory;
        self.units[unit.0 as usize].history.push(Position {
            territory,
            strength: 0,
            cause: Cause::Defeated,
        });
    }

    /// Rewrites the strength of the unit's current entry in place. Used by
    /// the tentative-winner stabilisation loop, which refines tentative
    /// strengths without growing the history.
    pub fn set_strength(&mut self, unit: UnitId, strength: u32) {
        let record = &mut self.units[unit.0 as usize];
        let last = record.history.len() - 1;
        record.history[last].strength = strength;
    }

    /// Returns the unit's current position.
    pub fn position(&self, unit: UnitId) -> Position {
        *self.units[unit.0 as usize].history.last().expect("history is never empty")
    }

    /// Returns the position the unit held before its current one, if any.
    pub fn prev_position(&self, unit: UnitId) -> Option<Position> {
        let history = &self.units[unit.0 as usize].history;
        if history.len() < 2 {
            None
        } else {
            Some(history[history.len() - 2])
        }
    }

    /// Returns the unit's territory at the start of the phase.
    pub fn origin(&self, unit: UnitId) -> Territory {
        self.units[unit.0 as usize].history[0].territory
    }

    /// Returns true iff the unit's current territory equals its origin.
    pub fn at_origin(&self, unit: UnitId) -> bool {
        self.position(unit).territory == self.origin(unit)
    }

    pub fn is_defeated(&self, unit: UnitId) -> bool {
        self.position(unit).cause == Cause::Defeated
    }

    /// Returns the unit's full phase history, oldest entry first.
    pub fn history(&self, unit: UnitId) -> &[Position] {
        &self.units[unit.0 as usize].history
    }

    /// Snapshot of every unit's current position, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (UnitId, Position)> + '_ {
        self.ids().map(|id| (id, self.position(id)))
    }

    /// Derives the current conflict groups from scratch.
    ///
    /// Non-defeated units are bucketed by current territory, and units whose
    /// current cause is Moved are additionally bucketed by the unordered
    /// {origin, current} pair to catch counter-moves: two armies exchanging
    /// territories collide even though their current territories differ.
    ///
    /// Territory groups need two or more members; swap groups need exactly
    /// two (one unit moving each way along the edge). Members are sorted by
    /// descending strength; the sort is stable, so ties keep insertion order.
    pub fn conflicts(&self) -> Vec<Vec<UnitId>> {
        let mut buckets: BTreeMap<ConflictKey, Vec<UnitId>> = BTreeMap::new();

        for (id, pos) in self.iter() {
            if pos.cause == Cause::Defeated {
                continue;
            }
            buckets
                .entry(ConflictKey::Territory(pos.territory))
                .or_default()
                .push(id);
            if pos.cause == Cause::Moved {
                let origin = self.origin(id);
                let (lo, hi) = if origin <= pos.territory {
                    (origin, pos.territory)
                } else {
                    (pos.territory, origin)
                };
                buckets
                    .entry(ConflictKey::Swap(lo, hi))
                    .or_default()
                    .push(id);
            }
        }

        let mut groups = Vec::new();
        for (key, mut members) in buckets {
            let qualifies = match key {
                ConflictKey::Territory(_) => members.len() >= 2,
                ConflictKey::Swap(..) => members.len() == 2,
            };
            if !qualifies {
                continue;
            }
            members.sort_by(|a, b| self.position(*b).strength.cmp(&self.position(*a).strength));
            groups.push(members);
        }
        groups
    }
}

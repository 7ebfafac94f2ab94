//! Order types for the movement phase.
//!
//! Orders are closed sums over plain structs; the resolver's correctness
//! depends on matching every variant explicitly. A `Set` groups the four
//! adjudicated order lists for one phase. Convoys are accepted as input
//! tokens but are not adjudicated by this engine.

pub mod apply;
pub mod decoder;
pub mod support;

pub use apply::apply_orders;
pub use decoder::{decode, ParseError};

use crate::board::territory::Territory;
use crate::board::unit::UnitType;

/// Move a unit from one territory to an adjacent one: `A bud-vie`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub nation: String,
    pub unit_type: UnitType,
    pub from: Territory,
    pub to: Territory,
}

/// Hold a unit in place: `A vie h`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hold {
    pub nation: String,
    pub unit_type: UnitType,
    pub at: Territory,
}

/// Support another unit's move: `A boh s A gal-vie`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveSupport {
    pub nation: String,
    pub unit_type: UnitType,
    /// Territory of the supporting unit.
    pub by: Territory,
    pub from: Territory,
    pub to: Territory,
}

/// Support another unit's hold: `A bud s A vie`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoldSupport {
    pub nation: String,
    pub unit_type: UnitType,
    /// Territory of the supporting unit.
    pub by: Territory,
    pub at: Territory,
}

/// Convoy an army across sea territories: `F nth c A lon-bel`.
/// Parsed for completeness; dropped by `Set::add`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Convoy {
    pub nation: String,
    /// Territory of the convoying fleet.
    pub by: Territory,
    pub from: Territory,
    pub to: Territory,
}

/// A decoded movement-phase order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Order {
    Move(Move),
    Hold(Hold),
    SupportMove(MoveSupport),
    SupportHold(HoldSupport),
    Convoy(Convoy),
}

impl Order {
    /// The territory of the unit this order is issued to.
    pub fn source(&self) -> Territory {
        match self {
            Order::Move(m) => m.from,
            Order::Hold(h) => h.at,
            Order::SupportMove(s) => s.by,
            Order::SupportHold(s) => s.by,
            Order::Convoy(c) => c.by,
        }
    }

    /// The nation that issued this order.
    pub fn nation(&self) -> &str {
        match self {
            Order::Move(m) => &m.nation,
            Order::Hold(h) => &h.nation,
            Order::SupportMove(s) => &s.nation,
            Order::SupportHold(s) => &s.nation,
            Order::Convoy(c) => &c.nation,
        }
    }
}

/// The orders submitted for one movement phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Set {
    pub moves: Vec<Move>,
    pub holds: Vec<Hold>,
    pub move_supports: Vec<MoveSupport>,
    pub hold_supports: Vec<HoldSupport>,
}

impl Set {
    pub fn new() -> Set {
        Set::default()
    }

    /// Files an order into its list. Convoys are accepted and dropped.
    pub fn add(&mut self, order: Order) {
        match order {
            Order::Move(m) => self.moves.push(m),
            Order::Hold(h) => self.holds.push(h),
            Order::SupportMove(s) => self.move_supports.push(s),
            Order::SupportHold(s) => self.hold_supports.push(s),
            Order::Convoy(_) => {}
        }
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
            && self.holds.is_empty()
            && self.move_supports.is_empty()
            && self.hold_supports.is_empty()
    }

    /// Returns true if any order in the set is issued to a unit of the given
    /// nation at the given territory.
    pub fn has_order_for(&self, nation: &str, territory: Territory) -> bool {
        self.moves
            .iter()
            .any(|m| m.nation == nation && m.from == territory)
            || self
                .holds
                .iter()
                .any(|h| h.nation == nation && h.at == territory)
            || self
                .move_supports
                .iter()
                .any(|s| s.nation == nation && s.by == territory)
            || self
                .hold_supports
                .iter()
                .any(|s| s.nation == nation && s.by == territory)
    }
}

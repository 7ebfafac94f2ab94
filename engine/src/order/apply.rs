//! Order application: stage tentative moves and holds onto a position store.
//!
//! Each unit is matched against the order set at most once per phase. A move
//! matches when its source names the unit's current territory, the nations
//! agree, and the destination is army-adjacent; otherwise the order is
//! discarded and the unit falls through to hold matching or stays at its
//! Added origin. Malformed or impossible orders are never errors — Diplomacy
//! treats them as "hold by default".

use crate::board::graph::ArmyGraph;
use crate::board::store::PositionStore;
use crate::board::unit::Cause;

use super::support::{hold_strength, move_strength};
use super::Set;

/// Stages every matching order in `set` onto the store, computing initial
/// support strengths with the order-set cut rule. Units matched by no order
/// keep their Added entry. Applying the same set twice is equivalent to
/// applying it once: matching requires the Added entry, which the first
/// application consumes.
pub fn apply_orders(set: &Set, graph: &ArmyGraph, store: &mut PositionStore) {
    let ids: Vec<_> = store.ids().collect();
    for id in ids {
        let pos = store.position(id);
        if pos.cause != Cause::Added {
            continue;
        }

        let mv = set.moves.iter().find(|m| {
            m.nation == store.nation(id)
                && m.from == pos.territory
                && graph.is_neighbour(m.from, m.to)
        });
        if let Some(mv) = mv {
            let strength = move_strength(mv, set);
            store.move_to(id, mv.to, strength);
            continue;
        }

        let hold = set
            .holds
            .iter()
            .find(|h| h.nation == store.nation(id) && h.at == pos.territory);
        if let Some(hold) = hold {
            let strength = hold_strength(hold, set);
            store.hold(id, strength);
        }
    }
}

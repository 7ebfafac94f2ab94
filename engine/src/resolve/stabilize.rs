//! Tentative-winner support stabilisation.
//!
//! The alternative support-cut rule: a support is only cut by a unit that
//! *wins* the supporter's territory, not by any attack. Because winning
//! depends on strengths and strengths depend on cuts, move strengths are
//! recomputed from the current tentative winners until they stop changing
//! (an inner fixed point), before each resolver pass.
//!
//! Hold strengths are not re-judged; only move supports participate in the
//! winner-based rule.

use std::collections::BTreeMap;

use tracing::debug;

use crate::board::store::PositionStore;
use crate::board::territory::Territory;
use crate::board::unit::{Cause, UnitId};
use crate::order::{Move, MoveSupport, Set};

/// Bound on inner fixed-point iterations; strengths settle in a handful of
/// rounds on any legal board.
const MAX_ROUNDS: usize = 20;

/// Recomputes every moving unit's strength from tentative winners until no
/// strength changes.
pub fn stabilize_strengths(set: &Set, store: &mut PositionStore) {
    for round in 0..MAX_ROUNDS {
        let before = capture_strengths(store);
        refresh_strengths(set, store);
        if capture_strengths(store) == before {
            debug!(rounds = round + 1, "strengths stable");
            return;
        }
    }
}

fn capture_strengths(store: &PositionStore) -> Vec<u32> {
    store.ids().map(|id| store.position(id).strength).collect()
}

/// Rewrites the strength of every unit that is currently moving, using
/// winner-based support-cut detection.
fn refresh_strengths(set: &Set, store: &mut PositionStore) {
    let winners = tentative_winners(store);
    let ids: Vec<_> = store.ids().collect();
    for id in ids {
        let pos = store.position(id);
        if pos.cause != Cause::Moved {
            continue;
        }
        let origin = store.origin(id);
        let mv = set
            .moves
            .iter()
            .find(|m| m.from == origin && m.to == pos.territory);
        if let Some(mv) = mv {
            store.set_strength(id, count_move_supports(mv, set, store, &winners));
        }
    }
}

/// Maps each contested or freshly taken territory to its tentative winner.
///
/// A unit is the tentative winner of a conflict group when it has strictly
/// greater strength than every other member and it moved there; holding
/// units do not win in the attacking sense and cannot cut support on their
/// own territory. Uncontested movers are also tentative winners, since
/// nothing is stopping them.
fn tentative_winners(store: &PositionStore) -> BTreeMap<Territory, UnitId> {
    let mut contested: Vec<Territory> = Vec::new();
    let mut winners: BTreeMap<Territory, UnitId> = BTreeMap::new();

    for group in store.conflicts() {
        for &unit in &group {
            contested.push(store.position(unit).territory);
        }
        let top = group[0];
        let decisive = store.position(top).strength > store.position(group[1]).strength;
        if decisive && store.position(top).cause == Cause::Moved {
            winners.insert(store.position(top).territory, top);
        }
        // A tie records no winner for this group.
    }

    for (unit, pos) in store.iter() {
        if pos.cause == Cause::Moved && !contested.contains(&pos.territory) {
            winners.insert(pos.territory, unit);
        }
    }

    winners
}

/// Counts how many supports for this move survive winner-based cutting.
fn count_move_supports(
    mv: &Move,
    set: &Set,
    store: &PositionStore,
    winners: &BTreeMap<Territory, UnitId>,
) -> u32 {
    set.move_supports
        .iter()
        .filter(|sup| sup.from == mv.from && sup.to == mv.to)
        .filter(|sup| !cut_by_winner(sup, store, winners))
        .count() as u32
}

/// A support is cut only when a unit that wins the supporter's territory
/// originated outside the support target; a unit that merely ties there is
/// not a winner and cannot cut.
fn cut_by_winner(
    sup: &MoveSupport,
    store: &PositionStore,
    winners: &BTreeMap<Territory, UnitId>,
) -> bool {
    let Some(&winner) = winners.get(&sup.by) else {
        return false;
    };
    if store.position(winner).cause != Cause::Moved {
        // The unit at the supporter's territory holds there, not attacks.
        return false;
    }
    store.origin(winner) != sup.to
}

//! Fixed-point conflict resolution over a position store.
//!
//! Each pass collects every conflict group simultaneously, decides all
//! outcomes, then applies them in one batch, so resolving one conflict never
//! destabilises the inputs of another within the same pass. Every productive
//! pass appends at least one Bounced or Defeated entry and a unit can
//! receive at most one of each, so the loop settles within two outcomes per
//! unit.

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::{debug, warn};

use crate::board::store::PositionStore;
use crate::board::unit::UnitId;
use crate::order::Set;

use super::stabilize::stabilize_strengths;

/// Safety bound on resolver passes, comfortably above what any classical
/// board needs. Hitting it indicates a bug, not a legal board.
pub const MAX_PASSES: usize = 20;

/// How support strengths are judged during resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SupportRule {
    /// Standard DATC rule: any attack on a supporter cuts, judged from the
    /// order set alone at application time. No re-stabilisation is needed.
    #[default]
    OrderSet,
    /// Alternative rule: only a unit that wins the supporter's territory
    /// cuts. Requires an inner fixed-point loop that recomputes move
    /// strengths from tentative winners before every pass.
    TentativeWinner,
}

/// The resolver exceeded its pass bound with conflicts outstanding.
/// Callers treat this as a bug in the engine, not a normal outcome; the
/// store is left in its latest intermediate state for diagnosis.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("conflicts unresolved after {passes} passes ({remaining} groups remain)")]
    IterationLimit { passes: usize, remaining: usize },
}

enum Outcome {
    Bounce,
    Defeat,
}

/// Main-phase conflict resolver.
#[derive(Debug, Clone, Copy)]
pub struct Resolver {
    pub rule: SupportRule,
    pub max_passes: usize,
}

impl Default for Resolver {
    fn default() -> Self {
        Resolver {
            rule: SupportRule::OrderSet,
            max_passes: MAX_PASSES,
        }
    }
}

impl Resolver {
    pub fn new(rule: SupportRule) -> Resolver {
        Resolver {
            rule,
            ..Resolver::default()
        }
    }

    /// Runs passes until the store is conflict-free. Resolving an already
    /// resolved store is a no-op.
    pub fn resolve(&self, set: &Set, store: &mut PositionStore) -> Result<(), ResolveError> {
        for pass in 0..self.max_passes {
            if !self.step(set, store) {
                debug!(passes = pass, "resolution stable");
                return Ok(());
            }
        }
        let remaining = store.conflicts().len();
        if remaining == 0 {
            return Ok(());
        }
        warn!(remaining, "resolver exceeded pass bound");
        Err(ResolveError::IterationLimit {
            passes: self.max_passes,
            remaining,
        })
    }

    /// Runs a single collect-then-apply pass. Returns false when the store
    /// is stable: either no conflict groups remain, or every remaining group
    /// is an undecided tie whose members all sit at their origins.
    pub fn step(&self, set: &Set, store: &mut PositionStore) -> bool {
        if self.rule == SupportRule::TentativeWinner {
            stabilize_strengths(set, store);
        }

        let groups = store.conflicts();
        if groups.is_empty() {
            return false;
        }

        // First outcome recorded for a unit wins; groups are decided
        // simultaneously, so later groups may not override it.
        let mut pending: BTreeMap<UnitId, Outcome> = BTreeMap::new();
        for group in &groups {
            let decisive =
                store.position(group[0]).strength > store.position(group[1]).strength;
            let losers = if decisive { &group[1..] } else { &group[..] };
            for &unit in losers {
                if pending.contains_key(&unit) {
                    continue;
                }
                if !store.at_origin(unit) {
                    pending.insert(unit, Outcome::Bounce);
                } else if decisive {
                    pending.insert(unit, Outcome::Defeat);
                }
                // At origin with no decisive winner: the defender survives;
                // the attackers bounce.
            }
        }

        if pending.is_empty() {
            return false;
        }

        debug!(groups = groups.len(), outcomes = pending.len(), "applying pass");
        for (unit, outcome) in pending {
            match outcome {
                Outcome::Bounce => store.bounce(unit),
                Outcome::Defeat => store.set_defeated(unit),
            }
        }
        true
    }
}

//! Game facade over the adjudication core.
//!
//! Owns the roster, supply-center ownership, phase clock, and staged order
//! texts for one game, and drives order application and conflict resolution
//! each movement phase. Retreat and adjustment phases are sequenced but
//! auto-skipped: dislodged units disband at resolution and no build orders
//! exist, so neither phase ever has work.

pub mod phase;
pub mod snapshot;
pub mod variant;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::board::graph::classical_graph;
use crate::board::store::PositionStore;
use crate::board::territory::Territory;
use crate::board::unit::{Cause, UnitType};
use crate::order::support::{hold_support_cut, move_support_cut};
use crate::order::{decode, Hold, Order, ParseError, Set};
use crate::resolve::{ResolveError, Resolver};

pub use phase::{next_phase, PhaseType, Season};
pub use snapshot::SnapshotError;
pub use variant::{lookup as lookup_variant, Variant, SOLO_THRESHOLD};

/// The requested variant is not implemented.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown variant: {0}")]
pub struct UnknownVariant(pub String);

/// A failure inside the adjudication step. Should not occur on well-formed
/// inputs; the game state is left unchanged when it does.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("adjudication failed: {0}")]
    Resolve(#[from] ResolveError),
}

/// The kind of an adjudicated order, as reported in resolution summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderKind {
    Move,
    Hold,
    SupportMove,
    SupportHold,
    Convoy,
}

/// Per-order outcome of one movement phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderOutcome {
    /// Territory of the unit the order was issued to.
    pub province: String,
    pub order_type: OrderKind,
    pub success: bool,
}

/// Summary of one adjudicated movement phase, consumed by the chat layer
/// when posting a PhaseResolved event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionResult {
    pub phase: String,
    pub year: u16,
    pub orders: Vec<OrderOutcome>,
}

/// A unit on the game roster between phases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameUnit {
    pub nation: String,
    pub unit_type: UnitType,
    pub territory: Territory,
}

/// An order submitted for the current phase, kept as text and re-decoded at
/// resolution. Replay from the event log re-submits the same texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagedOrder {
    pub nation: String,
    pub text: String,
}

/// The complete state of one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    variant: String,
    year: u16,
    season: Season,
    phase: PhaseType,
    units: Vec<GameUnit>,
    /// Supply-center owner by territory. Centers never captured stay absent.
    sc_owner: BTreeMap<Territory, String>,
    staged: Vec<StagedOrder>,
    /// True once the current movement phase has been adjudicated.
    resolved: bool,
    /// Dislodgements from the last resolution, consumed by `advance`.
    dislodgements: u32,
}

/// Starts a new game of the named variant in Spring 1901 Movement.
pub fn start(variant_name: &str) -> Result<Game, UnknownVariant> {
    let variant =
        variant::lookup(variant_name).ok_or_else(|| UnknownVariant(variant_name.to_string()))?;

    let units = variant
        .starting_units
        .iter()
        .map(|(nation, unit_type, territory)| GameUnit {
            nation: nation.to_string(),
            unit_type: *unit_type,
            territory: *territory,
        })
        .collect();

    let mut sc_owner = BTreeMap::new();
    for terr in Territory::all() {
        if let Some(power) = terr.home_power() {
            sc_owner.insert(terr, power.to_string());
        }
    }

    info!(variant = variant.name, "game started");
    Ok(Game {
        variant: variant.name.to_string(),
        year: 1901,
        season: Season::Spring,
        phase: PhaseType::Movement,
        units,
        sc_owner,
        staged: Vec::new(),
        resolved: false,
        dislodgements: 0,
    })
}

impl Game {
    /// Stages one order for the given nation. Only syntactic failures are
    /// errors; semantically impossible orders are staged and simply match
    /// no unit at resolution.
    pub fn submit_order(&mut self, nation: &str, text: &str) -> Result<(), ParseError> {
        decode(nation, text)?;
        self.staged.push(StagedOrder {
            nation: nation.to_string(),
            text: text.to_string(),
        });
        Ok(())
    }

    /// Adjudicates the staged orders for the current movement phase.
    ///
    /// Units without any order are given a default Hold (NMR handling).
    /// Dislodged units are disbanded from the roster, since retreat handling
    /// is outside this engine. Returns the per-order outcome summary.
    pub fn resolve(&mut self) -> Result<ResolutionResult, EngineError> {
        let submitted: Vec<Order> = self
            .staged
            .iter()
            .filter_map(|staged| decode(&staged.nation, &staged.text).ok())
            .collect();

        let mut set = Set::new();
        for order in &submitted {
            set.add(order.clone());
        }
        for unit in &self.units {
            if !set.has_order_for(&unit.nation, unit.territory) {
                set.add(Order::Hold(Hold {
                    nation: unit.nation.clone(),
                    unit_type: unit.unit_type,
                    at: unit.territory,
                }));
            }
        }

        let mut store = PositionStore::new();
        let ids: Vec<_> = self
            .units
            .iter()
            .map(|u| store.add_unit(&u.nation, u.unit_type, u.territory))
            .collect();

        crate::order::apply_orders(&set, classical_graph(), &mut store);
        Resolver::default().resolve(&set, &mut store)?;

        let orders = submitted
            .iter()
            .map(|order| self.outcome_of(order, &set, &store, &ids))
            .collect();

        let mut survivors = Vec::with_capacity(self.units.len());
        let mut dislodgements = 0u32;
        for (unit, id) in self.units.iter().zip(&ids) {
            let pos = store.position(*id);
            if pos.cause == Cause::Defeated {
                dislodgements += 1;
                continue;
            }
            let mut unit = unit.clone();
            unit.territory = pos.territory;
            survivors.push(unit);
        }

        debug!(
            orders = self.staged.len(),
            dislodgements, "movement phase adjudicated"
        );

        self.units = survivors;
        self.dislodgements = dislodgements;
        self.staged.clear();
        self.resolved = true;

        Ok(ResolutionResult {
            phase: self.phase_string(),
            year: self.year,
            orders,
        })
    }

    /// Advances to the next phase that has work to do, resolving the current
    /// movement phase first if the caller has not already done so. Empty
    /// retreat phases (no dislodged units awaiting orders) and adjustment
    /// phases (no build machinery in this engine) are skipped.
    pub fn advance(&mut self) -> Result<(), EngineError> {
        if !self.resolved {
            self.resolve()?;
        }
        self.advance_once();
        while self.is_empty_phase() {
            debug!(phase = %self.phase_string(), "skipping empty phase");
            self.advance_once();
        }
        self.resolved = false;
        Ok(())
    }

    fn advance_once(&mut self) {
        // Centers are captured after Fall movement or Fall retreat.
        if self.season == Season::Fall
            && matches!(self.phase, PhaseType::Movement | PhaseType::Retreat)
        {
            self.update_sc_ownership();
        }

        let had_dislodgements = std::mem::take(&mut self.dislodgements) > 0;
        let (season, phase) = next_phase(self.season, self.phase, had_dislodgements);
        if season == Season::Spring && phase == PhaseType::Movement {
            self.year += 1;
        }
        self.season = season;
        self.phase = phase;
    }

    fn is_empty_phase(&self) -> bool {
        match self.phase {
            PhaseType::Movement => false,
            // Dislodged units disband at resolution, so no retreat orders
            // are ever owed.
            PhaseType::Retreat => true,
            // Build and disband orders are not part of this engine.
            PhaseType::Adjustment => true,
        }
    }

    fn update_sc_ownership(&mut self) {
        for unit in &self.units {
            if unit.territory.is_supply_center() {
                self.sc_owner
                    .insert(unit.territory, unit.nation.clone());
            }
        }
    }

    /// Returns the phase string, e.g. `"Spring 1901 Movement"`.
    pub fn phase_string(&self) -> String {
        format!("{} {} {}", self.season.name(), self.year, self.phase.name())
    }

    /// Returns the nation holding a solo victory (18+ supply centers), if any.
    pub fn solo_winner(&self) -> Option<&str> {
        let variant = variant::lookup(&self.variant)?;
        variant
            .powers
            .iter()
            .find(|power| {
                self.sc_owner
                    .values()
                    .filter(|owner| owner.as_str() == **power)
                    .count()
                    >= SOLO_THRESHOLD
            })
            .copied()
    }

    /// Returns true if any power's unit count differs from its center count.
    /// The chat layer uses this to report skipped adjustment phases.
    pub fn needs_adjustment(&self) -> bool {
        let Some(variant) = variant::lookup(&self.variant) else {
            return false;
        };
        variant.powers.iter().any(|power| {
            let centers = self
                .sc_owner
                .values()
                .filter(|owner| owner.as_str() == *power)
                .count();
            let units = self
                .units
                .iter()
                .filter(|unit| unit.nation == *power)
                .count();
            centers != units
        })
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn season(&self) -> Season {
        self.season
    }

    pub fn phase_type(&self) -> PhaseType {
        self.phase
    }

    pub fn variant_name(&self) -> &str {
        &self.variant
    }

    pub fn units(&self) -> &[GameUnit] {
        &self.units
    }

    pub fn staged_orders(&self) -> &[StagedOrder] {
        &self.staged
    }

    pub fn sc_owner(&self, territory: Territory) -> Option<&str> {
        self.sc_owner.get(&territory).map(String::as_str)
    }

    /// Decides the reported outcome of one submitted order.
    fn outcome_of(
        &self,
        order: &Order,
        set: &Set,
        store: &PositionStore,
        ids: &[crate::board::unit::UnitId],
    ) -> OrderOutcome {
        let unit_at = |nation: &str, territory: Territory| {
            self.units
                .iter()
                .zip(ids)
                .find(|(unit, _)| unit.nation == nation && unit.territory == territory)
                .map(|(_, id)| *id)
        };

        let success = match order {
            Order::Move(m) => unit_at(&m.nation, m.from).is_some_and(|id| {
                let pos = store.position(id);
                pos.cause == Cause::Moved && pos.territory == m.to
            }),
            Order::Hold(h) => {
                unit_at(&h.nation, h.at).is_some_and(|id| !store.is_defeated(id))
            }
            Order::SupportMove(s) => {
                unit_at(&s.nation, s.by).is_some() && !move_support_cut(s, &set.moves)
            }
            Order::SupportHold(s) => {
                unit_at(&s.nation, s.by).is_some() && !hold_support_cut(s, &set.moves)
            }
            // Convoys are accepted but never adjudicated.
            Order::Convoy(_) => false,
        };

        OrderOutcome {
            province: order.source().abbr().to_string(),
            order_type: match order {
                Order::Move(_) => OrderKind::Move,
                Order::Hold(_) => OrderKind::Hold,
                Order::SupportMove(_) => OrderKind::SupportMove,
                Order::SupportHold(_) => OrderKind::SupportHold,
                Order::Convoy(_) => OrderKind::Convoy,
            },
            success,
        }
    }
}

//! Army adjacency graph for the classical map.
//!
//! Built once from a static row list of `(territory, neighbours)` pairs;
//! every edge is inserted in both directions, so the graph is symmetric by
//! construction. The graph is immutable after construction and may be shared
//! freely across games.

use std::sync::OnceLock;

use super::territory::{Territory, TERRITORY_COUNT};
use super::territory::{
    ALB, ANK, APU, ARM, BEL, BER, BOH, BRE, BUD, BUL, BUR, CLY, CON, DEN, EDI, FIN, GAL, GAS, GRE,
    HOL, KIE, LON, LVN, LVP, MAR, MOS, MUN, NAF, NAP, NWY, PAR, PIC, PIE, POR, PRU, ROM, RUH, RUM,
    SER, SEV, SIL, SMY, SPA, STP, SWE, SYR, TRI, TUN, TUS, TYR, UKR, VEN, VIE, WAL, WAR, YOR,
};

/// Army-legal adjacency between the 56 land territories.
///
/// Stores one neighbour bitset per territory; 56 territories fit in a `u64`.
pub struct ArmyGraph {
    neighbours: [u64; TERRITORY_COUNT],
}

/// Adjacency rows for the classical map. Each row lists the complete
/// neighbour set of its territory, so every edge appears twice; insertion
/// is idempotent.
static ADJACENCY: [(Territory, &[Territory]); TERRITORY_COUNT] = [
    (ALB, &[GRE, SER, TRI]),
    (ANK, &[ARM, CON, SMY]),
    (APU, &[NAP, ROM, VEN]),
    (ARM, &[ANK, SEV, SMY, SYR]),
    (BEL, &[BUR, HOL, PIC, RUH]),
    (BER, &[KIE, MUN, PRU, SIL]),
    (BOH, &[GAL, MUN, SIL, TYR, VIE]),
    (BRE, &[GAS, PAR, PIC]),
    (BUD, &[GAL, RUM, SER, TRI, VIE]),
    (BUL, &[CON, GRE, RUM, SER]),
    (BUR, &[BEL, GAS, MAR, MUN, PAR, PIC, RUH]),
    (CLY, &[EDI, LVP]),
    (CON, &[ANK, BUL, SMY]),
    (DEN, &[KIE, SWE]),
    (EDI, &[CLY, LVP, YOR]),
    (FIN, &[NWY, STP, SWE]),
    (GAL, &[BOH, BUD, RUM, SIL, UKR, VIE, WAR]),
    (GAS, &[BRE, BUR, MAR, PAR, SPA]),
    (GRE, &[ALB, BUL, SER]),
    (HOL, &[BEL, RUH]),
    (KIE, &[BER, DEN, MUN, RUH]),
    (LON, &[WAL, YOR]),
    (LVN, &[MOS, PRU, STP, WAR]),
    (LVP, &[CLY, EDI, WAL, YOR]),
    (MAR, &[BUR, GAS, PIE, SPA]),
    (MOS, &[LVN, SEV, STP, UKR, WAR]),
    (MUN, &[BER, BOH, BUR, KIE, RUH, SIL, TYR]),
    (NAF, &[TUN]),
    (NAP, &[APU, ROM]),
    (NWY, &[FIN, STP, SWE]),
    (PAR, &[BRE, BUR, GAS, PIC]),
    (PIC, &[BEL, BRE, BUR, PAR]),
    (PIE, &[MAR, TUS, TYR, VEN]),
    (POR, &[SPA]),
    (PRU, &[BER, LVN, SIL, WAR]),
    (ROM, &[APU, NAP, TUS, VEN]),
    (RUH, &[BEL, BUR, HOL, KIE, MUN]),
    (RUM, &[BUD, BUL, GAL, SER, SEV, UKR]),
    (SER, &[ALB, BUD, BUL, GRE, RUM, TRI]),
    (SEV, &[ARM, MOS, RUM, UKR]),
    (SIL, &[BER, BOH, GAL, MUN, PRU, WAR]),
    (SMY, &[ANK, ARM, CON, SYR]),
    (SPA, &[GAS, MAR, POR]),
    (STP, &[FIN, LVN, MOS, NWY]),
    (SWE, &[DEN, FIN, NWY]),
    (SYR, &[ARM, SMY]),
    (TRI, &[ALB, BUD, SER, TYR, VEN, VIE]),
    (TUN, &[NAF]),
    (TUS, &[PIE, ROM, VEN]),
    (TYR, &[BOH, MUN, PIE, TRI, VEN, VIE]),
    (UKR, &[GAL, MOS, RUM, SEV, WAR]),
    (VEN, &[APU, PIE, ROM, TRI, TUS, TYR]),
    (VIE, &[BOH, BUD, GAL, TRI, TYR]),
    (WAL, &[LON, LVP, YOR]),
    (WAR, &[GAL, LVN, MOS, PRU, SIL, UKR]),
    (YOR, &[EDI, LON, LVP, WAL]),
];

impl ArmyGraph {
    /// Builds the classical army graph from the static adjacency rows.
    pub fn classical() -> ArmyGraph {
        let mut neighbours = [0u64; TERRITORY_COUNT];
        for (terr, edges) in &ADJACENCY {
            for other in *edges {
                if let (Some(a), Some(b)) = (terr.index(), other.index()) {
                    neighbours[a] |= 1u64 << b;
                    neighbours[b] |= 1u64 << a;
                }
            }
        }
        ArmyGraph { neighbours }
    }

    /// Returns true if an army may move between the two territories.
    /// The sentinel invalid territory neighbours nothing.
    pub fn is_neighbour(&self, a: Territory, b: Territory) -> bool {
        match (a.index(), b.index()) {
            (Some(a), Some(b)) => self.neighbours[a] & (1u64 << b) != 0,
            _ => false,
        }
    }

    /// Iterates the neighbours of a territory in id order.
    pub fn neighbours_of(&self, terr: Territory) -> impl Iterator<Item = Territory> + '_ {
        let bits = terr.index().map_or(0, |i| self.neighbours[i]);
        Territory::all().filter(move |other| {
            other.index().map_or(false, |i| bits & (1u64 << i) != 0)
        })
    }
}

/// Returns the shared classical army graph, built on first use.
pub fn classical_graph() -> &'static ArmyGraph {
    static GRAPH: OnceLock<ArmyGraph> = OnceLock::new();
    GRAPH.get_or_init(ArmyGraph::classical)
}

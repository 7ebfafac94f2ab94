//! Support strength under the standard order-set cut rule.
//!
//! A support is cut when its supporter is attacked, judged purely from the
//! order set: whether the attacking move succeeds is irrelevant (DATC 6.D.21,
//! "dislodging does not cancel a support cut"). The one exemption is that a
//! move support cannot be cut by the unit it is directed against — the
//! defender cannot cut support for the attack on itself (DATC 6.D.15).
//!
//! The tentative-winner alternative, which re-judges cuts from conflict
//! winners inside the resolver, lives in `resolve::stabilize` behind the
//! same counting seam.

use super::{Hold, HoldSupport, Move, MoveSupport, Set};

/// Reports whether a move support is cut: some move in the set attacks the
/// supporter from a territory other than the supported target.
pub fn move_support_cut(support: &MoveSupport, moves: &[Move]) -> bool {
    moves
        .iter()
        .any(|cut| cut.to == support.by && cut.from != support.to)
}

/// Reports whether a hold support is cut: any move in the set attacks the
/// supporter. Hold supports have no target exemption.
pub fn hold_support_cut(support: &HoldSupport, moves: &[Move]) -> bool {
    moves.iter().any(|cut| cut.to == support.by)
}

/// Counts the uncut supports behind a move.
pub fn move_strength(mv: &Move, set: &Set) -> u32 {
    set.move_supports
        .iter()
        .filter(|sup| sup.from == mv.from && sup.to == mv.to)
        .filter(|sup| !move_support_cut(sup, &set.moves))
        .count() as u32
}

/// Counts the uncut supports behind a hold.
pub fn hold_strength(hold: &Hold, set: &Set) -> u32 {
    set.hold_supports
        .iter()
        .filter(|sup| sup.at == hold.at)
        .filter(|sup| !hold_support_cut(sup, &set.moves))
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::territory::{BOH, BUD, GAL, SIL, TYR, VIE};
    use crate::board::unit::UnitType;
    use crate::order::{Hold, HoldSupport, Move, MoveSupport, Order, Set};

    fn mv(from: crate::board::Territory, to: crate::board::Territory) -> Move {
        Move {
            nation: "austria".into(),
            unit_type: UnitType::Army,
            from,
            to,
        }
    }

    fn sup(
        by: crate::board::Territory,
        from: crate::board::Territory,
        to: crate::board::Territory,
    ) -> MoveSupport {
        MoveSupport {
            nation: "austria".into(),
            unit_type: UnitType::Army,
            by,
            from,
            to,
        }
    }

    #[test]
    fn support_cut_by_attack_on_supporter() {
        // bud-gal supported by vie; boh attacks vie.
        let mut set = Set::new();
        set.add(Order::Move(mv(BUD, GAL)));
        set.add(Order::SupportMove(sup(VIE, BUD, GAL)));
        set.add(Order::Move(mv(BOH, VIE)));

        assert!(move_support_cut(&set.move_supports[0], &set.moves));
        assert_eq!(move_strength(&set.moves[0], &set), 0);
    }

    #[test]
    fn defender_cannot_cut_support_aimed_at_itself() {
        // bud-gal supported by vie; gal (the defender) attacks vie.
        let mut set = Set::new();
        set.add(Order::Move(mv(BUD, GAL)));
        set.add(Order::SupportMove(sup(VIE, BUD, GAL)));
        set.add(Order::Move(mv(GAL, VIE)));

        assert!(!move_support_cut(&set.move_supports[0], &set.moves));
        assert_eq!(move_strength(&set.moves[0], &set), 1);
    }

    #[test]
    fn cut_ignores_whether_the_attack_succeeds() {
        // Two attackers tie at vie; the support is cut all the same.
        let mut set = Set::new();
        set.add(Order::Move(mv(BOH, GAL)));
        set.add(Order::SupportMove(sup(VIE, BOH, GAL)));
        set.add(Order::Move(mv(BUD, VIE)));
        set.add(Order::Move(mv(TYR, VIE)));

        assert!(move_support_cut(&set.move_supports[0], &set.moves));
    }

    #[test]
    fn strength_counts_only_matching_supports() {
        let mut set = Set::new();
        set.add(Order::Move(mv(BUD, GAL)));
        set.add(Order::Move(mv(BOH, VIE)));
        set.add(Order::SupportMove(sup(SIL, BUD, GAL)));
        set.add(Order::SupportMove(sup(TYR, BOH, VIE)));

        assert_eq!(move_strength(&set.moves[0], &set), 1);
        assert_eq!(move_strength(&set.moves[1], &set), 1);
    }

    #[test]
    fn multiple_uncut_supports_stack() {
        let mut set = Set::new();
        set.add(Order::Move(mv(GAL, VIE)));
        set.add(Order::SupportMove(sup(BOH, GAL, VIE)));
        set.add(Order::SupportMove(sup(TYR, GAL, VIE)));

        assert_eq!(move_strength(&set.moves[0], &set), 2);
    }

    #[test]
    fn hold_support_cut_has_no_exemption() {
        let hold = Hold {
            nation: "austria".into(),
            unit_type: UnitType::Army,
            at: VIE,
        };
        let mut set = Set::new();
        set.add(Order::Hold(hold.clone()));
        set.add(Order::SupportHold(HoldSupport {
            nation: "austria".into(),
            unit_type: UnitType::Army,
            by: BUD,
            at: VIE,
        }));
        assert_eq!(hold_strength(&hold, &set), 1);

        // Even an attack out of the supported territory cuts a hold support.
        set.add(Order::Move(mv(VIE, BUD)));
        assert_eq!(hold_strength(&hold, &set), 0);
    }
}

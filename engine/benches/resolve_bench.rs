use criterion::{black_box, criterion_group, criterion_main, Criterion};

use entente::board::territory::{BOH, BUD, RUM, SER, SIL, TRI, TYR, UKR, VIE, WAR};
use entente::board::{classical_graph, PositionStore, Territory, UnitType};
use entente::engine::{lookup_variant, start};
use entente::order::{apply_orders, decode, Set};
use entente::resolve::{Resolver, SupportRule};

/// All 22 classical starting units holding in place.
fn opening_holds() -> (Set, Vec<(String, UnitType, Territory)>) {
    let variant = lookup_variant("classical").unwrap();
    let mut set = Set::new();
    let mut placements = Vec::new();
    for (nation, unit_type, terr) in variant.starting_units {
        let letter = unit_type.letter().to_ascii_uppercase();
        set.add(decode(nation, &format!("{} {} H", letter, terr.abbr())).unwrap());
        placements.push((nation.to_string(), *unit_type, *terr));
    }
    (set, placements)
}

/// A dense pile-up around Galicia: supported attacks, counter-moves, and
/// cut supports that take several passes to settle.
fn contested_galicia() -> (Set, Vec<(String, UnitType, Territory)>) {
    let orders = [
        "A Vie-Gal", "A Bud S A Vie-Gal", "A War-Gal", "A Ukr S A War-Gal",
        "A Sil-Boh", "A Boh-Sil", "A Tyr-Boh", "A Rum-Ukr", "A Ser-Rum", "A Tri-Ser",
    ];
    let mut set = Set::new();
    let mut placements = Vec::new();
    for (text, terr) in orders.iter().zip([
        VIE, BUD, WAR, UKR, SIL, BOH, TYR, RUM, SER, TRI,
    ]) {
        set.add(decode("austria", text).unwrap());
        placements.push(("austria".to_string(), UnitType::Army, terr));
    }
    (set, placements)
}

fn staged_store(placements: &[(String, UnitType, Territory)]) -> PositionStore {
    let mut store = PositionStore::new();
    for (nation, unit_type, terr) in placements {
        store.add_unit(nation, *unit_type, *terr);
    }
    store
}

fn bench_apply_22_holds(c: &mut Criterion) {
    let (set, placements) = opening_holds();
    c.bench_function("apply_22_holds", |b| {
        b.iter(|| {
            let mut store = staged_store(&placements);
            apply_orders(black_box(&set), classical_graph(), &mut store);
            store
        })
    });
}

fn bench_resolve_22_holds(c: &mut Criterion) {
    let (set, placements) = opening_holds();
    c.bench_function("resolve_22_holds", |b| {
        let resolver = Resolver::default();
        b.iter(|| {
            let mut store = staged_store(&placements);
            apply_orders(&set, classical_graph(), &mut store);
            resolver.resolve(black_box(&set), &mut store).unwrap();
            store
        })
    });
}

fn bench_resolve_contested(c: &mut Criterion) {
    let (set, placements) = contested_galicia();
    c.bench_function("resolve_contested_galicia", |b| {
        let resolver = Resolver::default();
        b.iter(|| {
            let mut store = staged_store(&placements);
            apply_orders(&set, classical_graph(), &mut store);
            resolver.resolve(black_box(&set), &mut store).unwrap();
            store
        })
    });
}

fn bench_resolve_contested_winner_rule(c: &mut Criterion) {
    let (set, placements) = contested_galicia();
    c.bench_function("resolve_contested_winner_rule", |b| {
        let resolver = Resolver::new(SupportRule::TentativeWinner);
        b.iter(|| {
            let mut store = staged_store(&placements);
            apply_orders(&set, classical_graph(), &mut store);
            resolver.resolve(black_box(&set), &mut store).unwrap();
            store
        })
    });
}

fn bench_full_engine_year(c: &mut Criterion) {
    c.bench_function("engine_full_year", |b| {
        b.iter(|| {
            let mut game = start("classical").unwrap();
            game.submit_order("austria", "A Vie-Gal").unwrap();
            game.submit_order("russia", "A War-Gal").unwrap();
            game.advance().unwrap();
            game.submit_order("austria", "A Bud-Ser").unwrap();
            game.advance().unwrap();
            black_box(game)
        })
    });
}

criterion_group!(
    benches,
    bench_apply_22_holds,
    bench_resolve_22_holds,
    bench_resolve_contested,
    bench_resolve_contested_winner_rule,
    bench_full_engine_year
);
criterion_main!(benches);

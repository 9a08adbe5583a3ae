//! Integration test: exclusion rules hold across whole runs.
//!
//! Uses the reference walkers on generated graphs and checks occupancy
//! after every replayed event, not just at the end of a run.

use std::collections::HashSet;

use asep_core::{NodeId, Particle};
use asep_engine::{Engine, EngineConfig, MoveOutcome, RunReport};
use asep_graph::{
    complete_graph, random_weighted_complete_directed_graph_with_source_sink,
    random_weighted_line_with_source_sink, GraphBuilder, WeightedGraph,
};
use asep_particle::{
    BlockAll, Capacity, ExponentialTimer, PeriodicTimer, Reservoirs, SingleOccupancy, Walker,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Walkers spread one per node, so the hard-core rule holds from the start.
fn spread(graph: &WeightedGraph, seed: u64) -> Vec<Walker> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    graph
        .nodes()
        .step_by(2)
        .map(|node| Walker::spawn(graph, node, &mut rng))
        .collect()
}

fn all_distinct(positions: &[NodeId]) -> bool {
    let set: HashSet<_> = positions.iter().collect();
    set.len() == positions.len()
}

#[test]
fn single_occupancy_from_distinct_starts() {
    let graph = complete_graph(10).unwrap();
    let mut engine = Engine::with_particles(
        &graph,
        spread(&graph, 5),
        SingleOccupancy,
        ChaCha8Rng::seed_from_u64(5),
    )
    .unwrap();
    let report = engine.run(20.0).unwrap();
    assert!(report.moved > 0);
    assert!(all_distinct(&engine.snapshot_positions()));
}

#[test]
fn reservoirs_keep_interior_single_occupancy() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let graph = random_weighted_line_with_source_sink(6, &mut rng).unwrap();
    let rule = Reservoirs::source_sink(&graph);
    let interior = |ps: &[NodeId]| -> Vec<NodeId> {
        ps.iter().copied().filter(|p| !rule.is_reservoir(p)).collect()
    };

    let mut engine: Engine<'_, Walker, _> =
        Engine::from_config(&graph, &EngineConfig::new(12, 99), rule.clone()).unwrap();
    assert_eq!(engine.snapshot_positions(), vec![graph.initial(); 12]);

    for _ in 0..10 {
        engine.run(3.0).unwrap();
        assert!(all_distinct(&interior(&engine.snapshot_positions())));
    }
}

#[test]
fn complete_graph_with_reservoirs_checked_per_event() {
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let graph = random_weighted_complete_directed_graph_with_source_sink(5, &mut rng).unwrap();
    let rule = Reservoirs::source_sink(&graph);
    let mut occupied: Vec<NodeId> = vec![graph.initial(); 8];
    let mut engine: Engine<'_, Walker, _> =
        Engine::from_config(&graph, &EngineConfig::new(8, 4), rule.clone()).unwrap();

    engine
        .run_observed(10.0, |event, outcome| {
            if let MoveOutcome::Moved { to, .. } = outcome {
                occupied[event.particle.index()] = *to;
            }
            let interior: Vec<_> = occupied.iter().filter(|p| !rule.is_reservoir(p)).collect();
            let set: HashSet<_> = interior.iter().collect();
            assert_eq!(set.len(), interior.len(), "collision at t = {}", event.time);
        })
        .unwrap();
    assert_eq!(occupied, engine.snapshot_positions());
}

#[test]
fn capacity_bounds_occupancy() {
    let graph = complete_graph(4).unwrap();
    let mut engine: Engine<'_, Walker, _> =
        Engine::from_config(&graph, &EngineConfig::new(6, 8), Capacity::new(2)).unwrap();
    engine.run(15.0).unwrap();
    // Everyone starts on node 0; only nodes entered by a move are bounded.
    let positions = engine.snapshot_positions();
    for node in graph.nodes().filter(|&n| n != graph.initial()) {
        assert!(positions.iter().filter(|&&p| p == node).count() <= 2);
    }
}

#[test]
fn block_all_freezes_everyone() {
    let graph = complete_graph(6).unwrap();
    let mut engine = Engine::with_particles(
        &graph,
        spread(&graph, 1),
        BlockAll,
        ChaCha8Rng::seed_from_u64(1),
    )
    .unwrap();
    let before = engine.snapshot_positions();
    let report = engine.run(25.0).unwrap();
    assert_eq!(report.moved, 0);
    assert_eq!(report.blocked, report.events);
    assert_eq!(engine.snapshot_positions(), before);
}

#[test]
fn periodic_tie_goes_to_lower_id() {
    // a -> b -> c, both walkers at a, both fire at t = 1.
    let mut b = GraphBuilder::new();
    let a = b.add_node("a").unwrap();
    let mid = b.add_node("b").unwrap();
    let c = b.add_node("c").unwrap();
    b.add_edge(a, mid, 1.0).unwrap();
    b.add_edge(mid, c, 1.0).unwrap();
    let graph = b.build().unwrap();

    let mut engine: Engine<'_, Walker<PeriodicTimer>, _> =
        Engine::from_config(&graph, &EngineConfig::new(2, 0), SingleOccupancy).unwrap();
    let mut order = Vec::new();
    let report: RunReport = engine
        .run_observed(1.5, |event, _| order.push(event.particle.0))
        .unwrap();
    assert_eq!(order, vec![0, 1]);
    assert_eq!(report.moved, 1);
    assert_eq!(report.blocked, 1);
    assert_eq!(
        graph.labels_of(&engine.snapshot_positions()).unwrap(),
        vec!["b", "a"]
    );
}

#[test]
fn failed_runs_leave_positions_untouched() {
    let graph = complete_graph(5).unwrap();
    let mut engine: Engine<'_, Walker<ExponentialTimer>, _> =
        Engine::from_config(&graph, &EngineConfig::new(3, 21), SingleOccupancy).unwrap();
    engine.run(2.0).unwrap();
    let before = engine.snapshot_positions();
    assert!(engine.run(-1.0).is_err());
    assert!(engine.run(f64::NAN).is_err());
    assert_eq!(engine.snapshot_positions(), before);
    assert_eq!(engine.runs(), 1);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn replay_times_never_decrease(seed in any::<u64>(), count in 1usize..8, horizon in 0.0f64..6.0) {
        let graph = complete_graph(9).unwrap();
        let mut engine: Engine<'_, Walker, _> =
            Engine::from_config(&graph, &EngineConfig::new(count, seed), SingleOccupancy).unwrap();
        let mut last = 0.0f64;
        let mut ok = true;
        let report = engine
            .run_observed(horizon, |event, _| {
                ok &= event.time >= last && event.time < horizon;
                last = event.time;
            })
            .unwrap();
        prop_assert!(ok);
        prop_assert_eq!(report.moved + report.blocked + report.declined, report.events);
    }

    #[test]
    fn hard_core_holds_for_any_seed(seed in any::<u64>(), horizon in 0.0f64..10.0) {
        let graph = complete_graph(12).unwrap();
        let mut engine = Engine::with_particles(
            &graph,
            spread(&graph, seed),
            SingleOccupancy,
            ChaCha8Rng::seed_from_u64(seed),
        )
        .unwrap();
        engine.run(horizon).unwrap();
        prop_assert!(all_distinct(&engine.snapshot_positions()));
    }
}

use delta_stepping::graph::generators::{generate_grid, random_graph, random_integer_graph};
use delta_stepping::graph::{DirectedGraph, Graph, MutableGraph};
use delta_stepping::{delta_stepping, DeltaStepping, Dijkstra, RunStats, ShortestPathAlgorithm};
use ordered_float::OrderedFloat;

type F = OrderedFloat<f64>;

// 0 -> 1 (2), 0 -> 2 (5), 1 -> 2 (1), 2 -> 3 (1), plus an isolated vertex 9
fn small_graph() -> DirectedGraph<F> {
    let mut graph = DirectedGraph::with_capacity(10);
    graph.add_edge(0, 1, OrderedFloat(2.0));
    graph.add_edge(0, 2, OrderedFloat(5.0));
    graph.add_edge(1, 2, OrderedFloat(1.0));
    graph.add_edge(2, 3, OrderedFloat(1.0));
    graph
}

fn expected_small() -> Vec<Option<F>> {
    let mut expected = vec![None; 10];
    for (v, d) in [(0, 0.0), (1, 2.0), (2, 3.0), (3, 4.0)] {
        expected[v] = Some(OrderedFloat(d));
    }
    expected
}

#[test]
fn test_small_graph_with_delta_five() {
    let graph = small_graph();
    let result = delta_stepping(&graph, 0, 5.0).unwrap();

    assert_eq!(result.distances, expected_small());
    assert_eq!(result.distance_of(3), Some(OrderedFloat(4.0)));
    assert_eq!(result.distance_of(9), None, "isolated vertex must stay unreachable");
    assert_eq!(result.reachable_count(), 4);
}

#[test]
fn test_small_graph_with_delta_one_takes_more_rounds() {
    let graph = small_graph();
    let (coarse, coarse_stats) = DeltaStepping::new(5.0).run(&graph, 0).unwrap();
    let (fine, fine_stats) = DeltaStepping::new(1.0).run(&graph, 0).unwrap();

    assert_eq!(fine.distances, expected_small());
    assert_eq!(fine.distances, coarse.distances);
    assert!(fine_stats.outer_rounds > coarse_stats.outer_rounds);
}

#[test]
fn test_small_graph_run_stats() {
    let graph = small_graph();
    let (_, stats) = DeltaStepping::new(5.0).run(&graph, 0).unwrap();

    // one bucket; phases drain {0}, {1}, {2}, {3} as vertex 2 drops from 5 to 3
    assert_eq!(
        stats,
        RunStats {
            outer_rounds: 1,
            light_phases: 4,
            light_requests: 4,
            heavy_requests: 0,
            relaxations: 5,
            max_bucket_index: 1,
        }
    );
}

#[test]
fn test_paths_follow_predecessors() {
    let graph = small_graph();
    let algorithm = DeltaStepping::new(5.0);
    let result = algorithm.compute_shortest_paths(&graph, 0).unwrap();

    let path = <DeltaStepping as ShortestPathAlgorithm<F, DirectedGraph<F>>>::get_path(&algorithm, &result, 3);
    assert_eq!(path, Some(vec![0, 1, 2, 3]));

    let missing = <DeltaStepping as ShortestPathAlgorithm<F, DirectedGraph<F>>>::get_path(&algorithm, &result, 9);
    assert_eq!(missing, None);
}

#[test]
fn test_matches_dijkstra_on_random_graphs() {
    for seed in 0..20_u64 {
        let graph = random_graph(200, 4.0, 10.0, 0xD1A1_0000 + seed);
        let source = (seed as usize) % graph.vertex_count();
        let expected = Dijkstra::new().compute_shortest_paths(&graph, source).unwrap();

        for delta in [0.5, 2.0, 7.5, 1_000.0] {
            let got = delta_stepping(&graph, source, delta).unwrap();
            assert_eq!(got.distances, expected.distances, "seed={} delta={}", seed, delta);
        }
    }
}

#[test]
fn test_integer_weights_hit_the_light_heavy_boundary() {
    // weights in 0..=4 with delta 2 and 4 produce exact-delta and zero-weight edges
    for seed in 0..10_u64 {
        let graph = random_integer_graph(120, 5.0, 4, 0xB0A5_0000 + seed);
        let expected = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

        for delta in [1.0, 2.0, 4.0] {
            let got = delta_stepping(&graph, 0, delta).unwrap();
            assert_eq!(got.distances, expected.distances, "seed={} delta={}", seed, delta);
        }
    }
}

#[test]
fn test_parallel_requests_match_sequential() {
    let graph = random_graph(3_000, 6.0, 50.0, 42);
    let (seq, seq_stats) = DeltaStepping::new(10.0).run(&graph, 0).unwrap();
    let (par, par_stats) = DeltaStepping::new(10.0)
        .with_parallel(true)
        .with_parallel_threshold(1)
        .run(&graph, 0)
        .unwrap();

    assert_eq!(seq.distances, par.distances);
    assert_eq!(seq.predecessors, par.predecessors);
    assert_eq!(seq_stats.outer_rounds, par_stats.outer_rounds);
}

#[test]
fn test_distances_only_decrease_and_buckets_stay_consistent() {
    let graph = random_graph(400, 5.0, 20.0, 7);
    let mut context = DeltaStepping::new(3.0).prepare(&graph, 0).unwrap();
    assert!(context.bucket_invariant_holds());

    let mut previous: Vec<Option<F>> = context.distances().as_slice().to_vec();
    let mut last_index = None;
    while let Some(index) = context.step_round(&graph) {
        assert!(context.bucket_invariant_holds(), "invariant broken after bucket {}", index);
        if let Some(last) = last_index {
            assert!(index > last, "bucket {} processed after {}", index, last);
        }
        last_index = Some(index);

        for (v, (before, after)) in previous.iter().zip(context.distances().as_slice()).enumerate() {
            if let Some(before) = before {
                let after = after.expect("a reached vertex never becomes unreached");
                assert!(after <= *before, "vertex {} went from {:?} to {:?}", v, before, after);
            }
        }
        previous = context.distances().as_slice().to_vec();
    }

    assert!(context.is_done());
    let expected = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    assert_eq!(previous, expected.distances);
}

#[test]
fn test_grid_distances() {
    let graph = generate_grid(20, 15, 3.0);
    let result = delta_stepping(&graph, 0, 2.0).unwrap();

    // Manhattan distance with vertical steps three times as expensive
    for y in 0..15 {
        for x in 0..20 {
            let expected = x as f64 + 3.0 * y as f64;
            assert_eq!(result.distance_of(y * 20 + x), Some(OrderedFloat(expected)));
        }
    }
}

#[test]
fn test_parallel_edges_and_self_loops() {
    let mut graph: DirectedGraph<F> = DirectedGraph::with_capacity(3);
    graph.add_edge(0, 0, OrderedFloat(1.0));
    graph.add_edge(0, 1, OrderedFloat(9.0));
    graph.add_edge(0, 1, OrderedFloat(4.0));
    graph.add_edge(0, 1, OrderedFloat(6.0));
    graph.add_edge(1, 2, OrderedFloat(0.0));

    for delta in [1.0, 5.0, 10.0] {
        let result = delta_stepping(&graph, 0, delta).unwrap();
        assert_eq!(result.distance_of(0), Some(OrderedFloat(0.0)));
        assert_eq!(result.distance_of(1), Some(OrderedFloat(4.0)));
        assert_eq!(result.distance_of(2), Some(OrderedFloat(4.0)));
    }
}

#[test]
fn test_single_vertex_graph() {
    let mut graph: DirectedGraph<F> = DirectedGraph::new();
    graph.add_vertex();
    let (result, stats) = DeltaStepping::new(1.0).run(&graph, 0).unwrap();

    assert_eq!(result.distances, vec![Some(OrderedFloat(0.0))]);
    assert_eq!(stats.outer_rounds, 1);
    assert_eq!(stats.light_phases, 1);
}

use crate::graph::{DirectedGraph, MutableGraph};
use ordered_float::OrderedFloat;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a seeded random directed graph with roughly `edge_factor * n` edges
///
/// Weights are drawn uniformly from `[0, max_weight)`. Self-loops and parallel
/// edges are allowed so the result exercises request coalescing.
///
/// Panics unless `max_weight` is finite and positive.
pub fn random_graph(n: usize, edge_factor: f64, max_weight: f64, seed: u64) -> DirectedGraph<OrderedFloat<f64>> {
    assert!(max_weight.is_finite() && max_weight > 0.0, "max_weight must be positive");
    let mut graph = DirectedGraph::with_capacity(n);
    if n == 0 {
        return graph;
    }
    let mut rng = StdRng::seed_from_u64(seed);

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        let weight = OrderedFloat(rng.gen_range(0.0..max_weight));
        graph.add_edge(u, v, weight);
    }

    graph
}

/// Generates a seeded random graph with integral weights in `0..=max_weight`
///
/// Small integer weights produce many exact-Δ edges and zero-weight edges.
pub fn random_integer_graph(n: usize, edge_factor: f64, max_weight: u32, seed: u64) -> DirectedGraph<OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_capacity(n);
    if n == 0 {
        return graph;
    }
    let mut rng = StdRng::seed_from_u64(seed);

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        let weight = OrderedFloat(rng.gen_range(0..=max_weight) as f64);
        graph.add_edge(u, v, weight);
    }

    graph
}

/// Generates a `width * height` grid with 4-connectivity in both directions
///
/// Horizontal moves cost `1.0`, vertical moves cost `vertical_cost`.
pub fn generate_grid(width: usize, height: usize, vertical_cost: f64) -> DirectedGraph<OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_capacity(width * height);
    let index = |x: usize, y: usize| y * width + x;

    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                graph.add_undirected_edge(index(x, y), index(x + 1, y), OrderedFloat(1.0));
            }
            if y + 1 < height {
                graph.add_undirected_edge(index(x, y), index(x, y + 1), OrderedFloat(vertical_cost));
            }
        }
    }

    graph
}

use std::time::{Duration, Instant};

use delta_stepping::graph::edge_list::{load_edge_list, EdgeDirection};
use delta_stepping::graph::generators::random_graph;
use delta_stepping::graph::{DirectedGraph, Graph};
use delta_stepping::validation::validate_against;
use delta_stepping::{DeltaStepping, Dijkstra, ShortestPathAlgorithm};
use ordered_float::OrderedFloat;

type Weighted = DirectedGraph<OrderedFloat<f64>>;

const DELTAS: [f64; 4] = [1.0, 5.0, 25.0, 100.0];

// Function to benchmark an algorithm on a graph
fn benchmark_algorithm<A>(name: &str, algorithm: &A, graph: &Weighted, source: usize) -> delta_stepping::Result<Duration>
where
    A: ShortestPathAlgorithm<OrderedFloat<f64>, Weighted>,
{
    let start = Instant::now();
    let result = algorithm.compute_shortest_paths(graph, source)?;
    let duration = start.elapsed();

    let mismatches = validate_against(&Dijkstra::new(), graph, &result)?;
    if !mismatches.is_empty() {
        log::error!("{}: {} vertices disagree with Dijkstra", name, mismatches.len());
    }
    log::info!(
        "{}: {} reachable vertices in {:?}",
        name,
        result.reachable_count(),
        duration
    );

    Ok(duration)
}

fn run_suite(label: &str, graph: &Weighted, source: usize) -> delta_stepping::Result<()> {
    println!(
        "\n{}: {} vertices, {} edges, source {}",
        label,
        graph.vertex_count(),
        graph.edge_count(),
        source
    );
    println!("{:<28} | {:>12} | {:>8}", "Algorithm", "Time (ms)", "Speedup");
    println!("{}", "-".repeat(54));

    let baseline = benchmark_algorithm("Dijkstra", &Dijkstra::new(), graph, source)?;
    println!("{:<28} | {:>12.3} | {:>8}", "Dijkstra", baseline.as_secs_f64() * 1e3, "1.00x");

    for delta in DELTAS {
        for parallel in [false, true] {
            let name = format!("delta={} ({})", delta, if parallel { "par" } else { "seq" });
            let algorithm = DeltaStepping::new(delta).with_parallel(parallel);
            let elapsed = benchmark_algorithm(&name, &algorithm, graph, source)?;
            println!(
                "{:<28} | {:>12.3} | {:>7.2}x",
                name,
                elapsed.as_secs_f64() * 1e3,
                baseline.as_secs_f64() / elapsed.as_secs_f64()
            );
        }
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // An edge list path switches from generated graphs to a file
    let args: Vec<String> = std::env::args().collect();
    if let Some(path) = args.get(1) {
        let graph: Weighted = load_edge_list(path, EdgeDirection::Directed)?;
        let source = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(0);
        run_suite(path, &graph, source)?;
        return Ok(());
    }

    for (i, &size) in [10_000, 100_000, 500_000].iter().enumerate() {
        let graph = random_graph(size, 4.0, 100.0, 0x5EED + i as u64);
        run_suite(&format!("random graph #{}", i), &graph, 0)?;
    }

    Ok(())
}

use delta_stepping::algorithm::dijkstra::Dijkstra;
use delta_stepping::algorithm::delta_stepping::DeltaStepping;
use delta_stepping::algorithm::traits::ShortestPathAlgorithm;
use delta_stepping::graph::DirectedGraph;
use delta_stepping::graph::{Graph, MutableGraph};
use ordered_float::OrderedFloat;

type F = OrderedFloat<f64>;

// 8-connected grid, diagonal moves cost 1.4; blocked cells get no edges
fn create_test_grid(width: usize, height: usize, blocked: &[(usize, usize)]) -> DirectedGraph<F> {
    let mut graph = DirectedGraph::with_capacity(width * height);
    let is_blocked = |x: usize, y: usize| blocked.contains(&(x, y));

    let directions = [
        (0, -1, 1.0), (1, 0, 1.0), (0, 1, 1.0), (-1, 0, 1.0),
        (1, -1, 1.4), (1, 1, 1.4), (-1, 1, 1.4), (-1, -1, 1.4),
    ];

    for y in 0..height {
        for x in 0..width {
            if is_blocked(x, y) {
                continue;
            }
            for (dx, dy, cost) in directions {
                let nx = x as i32 + dx;
                let ny = y as i32 + dy;
                if nx < 0 || ny < 0 || nx >= width as i32 || ny >= height as i32 {
                    continue;
                }
                let (nx, ny) = (nx as usize, ny as usize);
                if !is_blocked(nx, ny) {
                    graph.add_edge(y * width + x, ny * width + nx, OrderedFloat(cost));
                }
            }
        }
    }

    graph
}

fn path_cost(graph: &DirectedGraph<F>, path: &[usize]) -> f64 {
    path.windows(2)
        .map(|pair| {
            graph
                .get_edge_weight(pair[0], pair[1])
                .expect("path should only use existing edges")
                .into_inner()
        })
        .sum()
}

fn path_of(algorithm: &DeltaStepping, result: &delta_stepping::ShortestPathResult<F>, target: usize) -> Option<Vec<usize>> {
    <DeltaStepping as ShortestPathAlgorithm<F, DirectedGraph<F>>>::get_path(algorithm, result, target)
}

#[test]
fn test_path_finding_simple_grid() {
    let graph = create_test_grid(10, 10, &[]);
    let (source, target) = (0, 99);

    let dijkstra_result = Dijkstra::new().compute_shortest_paths(&graph, source).unwrap();
    let delta = DeltaStepping::new(1.0);
    let result = delta.compute_shortest_paths(&graph, source).unwrap();

    assert_eq!(result.distances, dijkstra_result.distances);

    let path = path_of(&delta, &result, target).expect("a path to the far corner");
    assert_eq!(path[0], source, "Path should start at source");
    assert_eq!(path[path.len() - 1], target, "Path should end at target");
    assert!((path_cost(&graph, &path) - result.distances[target].unwrap().into_inner()).abs() < 1e-9);
}

#[test]
fn test_path_finding_with_obstacles() {
    // a wall in column 5 with a gap at the bottom
    let wall: Vec<(usize, usize)> = (0..8).map(|y| (5, y)).collect();
    let graph = create_test_grid(10, 10, &wall);
    let (source, target) = (0, 9);

    let dijkstra_result = Dijkstra::new().compute_shortest_paths(&graph, source).unwrap();

    for delta_value in [0.5, 1.4, 3.0, 20.0] {
        let delta = DeltaStepping::new(delta_value);
        let result = delta.compute_shortest_paths(&graph, source).unwrap();
        assert_eq!(result.distances, dijkstra_result.distances, "delta={}", delta_value);

        for &(x, y) in &wall {
            assert_eq!(result.distance_of(y * 10 + x), None, "wall cell ({}, {}) is unreachable", x, y);
        }

        let path = path_of(&delta, &result, target).expect("a path around the wall");
        assert!(path.iter().any(|&v| v / 10 >= 8), "path should pass below the wall");
        for pair in path.windows(2) {
            assert!(graph.has_edge(pair[0], pair[1]), "Path should only use existing edges");
        }
    }
}

#[test]
fn test_enclosed_region_is_unreachable() {
    // cells around (7, 7) fully blocked
    let ring = [(6, 6), (7, 6), (8, 6), (6, 7), (8, 7), (6, 8), (7, 8), (8, 8)];
    let graph = create_test_grid(10, 10, &ring);

    let delta = DeltaStepping::new(2.0);
    let result = delta.compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(result.distance_of(77), None);
    assert_eq!(path_of(&delta, &result, 77), None);
    assert_eq!(result.reachable_count(), 100 - ring.len() - 1);
}

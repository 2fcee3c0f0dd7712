use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::graph::Graph;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::{ConfigError, Result};

/// Classic binary-heap Dijkstra, kept as the ground-truth baseline
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(ConfigError::SourceNotFound(source).into());
        }

        let n = graph.vertex_count();
        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        distances[source] = Some(W::zero());

        let mut queue = BinaryHeap::new();
        queue.push(Reverse((W::zero(), source)));

        while let Some(Reverse((dist_u, u))) = queue.pop() {
            // Stale entry, a shorter path to u was already settled
            if matches!(distances[u], Some(current) if current < dist_u) {
                continue;
            }

            for (v, weight) in graph.outgoing_edges(u) {
                let new_dist = dist_u + weight;
                let should_update = match distances[v] {
                    None => new_dist.is_finite(),
                    Some(current_dist) => new_dist < current_dist,
                };

                if should_update {
                    distances[v] = Some(new_dist);
                    predecessors[v] = Some(u);
                    queue.push(Reverse((new_dist, v)));
                }
            }
        }

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }
}

//! Relaxation request generation.
//!
//! A request pass scans the outgoing edges of a vertex set, keeps the edges of
//! one weight class and produces the best candidate distance per destination.
//! Distances are read once per source vertex and the table is not written
//! during a pass, so the pass only needs shared access and can run in parallel.

use std::collections::HashMap;
use std::fmt::Debug;

use num_traits::{Float, Zero};
use rayon::prelude::*;

use crate::data_structures::DistanceTable;
use crate::graph::Graph;

/// Weight class of an edge relative to Δ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeClass {
    /// `weight <= Δ`
    Light,
    /// `weight > Δ`
    Heavy,
}

impl EdgeClass {
    /// Classifies `weight` against the bucket width `delta`
    #[inline]
    pub fn of<W: PartialOrd>(weight: W, delta: W) -> Self {
        if weight <= delta {
            EdgeClass::Light
        } else {
            EdgeClass::Heavy
        }
    }
}

/// Best candidate found for one destination vertex
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Request<W> {
    /// Tentative distance offered to the destination
    pub distance: W,
    /// Vertex whose edge produced the candidate
    pub predecessor: usize,
}

impl<W: PartialOrd> Request<W> {
    /// True if `self` should replace `other` when both target the same vertex
    #[inline]
    fn beats(&self, other: &Self) -> bool {
        self.distance < other.distance
            || (self.distance == other.distance && self.predecessor < other.predecessor)
    }
}

/// Destination vertex -> coalesced request
pub type Requests<W> = HashMap<usize, Request<W>>;

/// Keeps the smaller of the existing and the offered request
#[inline]
fn offer<W: PartialOrd + Copy>(requests: &mut Requests<W>, vertex: usize, request: Request<W>) {
    requests
        .entry(vertex)
        .and_modify(|current| {
            if request.beats(current) {
                *current = request;
            }
        })
        .or_insert(request);
}

fn scan_vertex<W, G>(
    graph: &G,
    distances: &DistanceTable<W>,
    u: usize,
    class: EdgeClass,
    delta: W,
    requests: &mut Requests<W>,
) where
    W: Float + Zero + Debug + Copy,
    G: Graph<W> + ?Sized,
{
    let Some(dist_u) = distances.get(u) else {
        return;
    };

    for (v, weight) in graph.outgoing_edges(u) {
        if EdgeClass::of(weight, delta) != class {
            continue;
        }
        offer(
            requests,
            v,
            Request {
                distance: dist_u + weight,
                predecessor: u,
            },
        );
    }
}

/// Sequential request pass over `vertices`
pub fn find_requests<W, G>(
    graph: &G,
    distances: &DistanceTable<W>,
    vertices: &[usize],
    class: EdgeClass,
    delta: W,
) -> Requests<W>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W> + ?Sized,
{
    let mut requests = HashMap::new();
    for &u in vertices {
        scan_vertex(graph, distances, u, class, delta, &mut requests);
    }
    requests
}

/// Parallel request pass over `vertices`
///
/// Every worker folds into its own map and the maps are merged pairwise with
/// the same minimum rule, so the result equals the sequential pass.
pub fn par_find_requests<W, G>(
    graph: &G,
    distances: &DistanceTable<W>,
    vertices: &[usize],
    class: EdgeClass,
    delta: W,
) -> Requests<W>
where
    W: Float + Zero + Debug + Copy + Send + Sync,
    G: Graph<W> + Sync + ?Sized,
{
    vertices
        .par_iter()
        .fold(HashMap::new, |mut requests, &u| {
            scan_vertex(graph, distances, u, class, delta, &mut requests);
            requests
        })
        .reduce(HashMap::new, |mut merged, part| {
            for (v, request) in part {
                offer(&mut merged, v, request);
            }
            merged
        })
}

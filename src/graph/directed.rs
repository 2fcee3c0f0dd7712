use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};
use num_traits::{Float, Zero};
use std::fmt::Debug;

/// A directed graph implementation using adjacency lists
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Outgoing edges for each vertex: vertex_id -> [(target_vertex, weight)]
    outgoing_edges: Vec<Vec<(usize, W)>>,

    /// Total number of stored edges, parallel edges included
    edge_count: usize,
}

impl<W> Default for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            outgoing_edges: Vec::new(),
            edge_count: 0,
        }
    }

    /// Creates a new directed graph with the specified number of vertices
    pub fn with_capacity(vertices: usize) -> Self {
        DirectedGraph {
            outgoing_edges: vec![Vec::new(); vertices],
            edge_count: 0,
        }
    }

    /// Builds a graph with `vertices` vertices from `(from, to, weight)` triples
    ///
    /// Fails on the first negative or NaN weight and on any endpoint outside
    /// `0..vertices`.
    pub fn from_edges(vertices: usize, edges: &[(usize, usize, W)]) -> Result<Self> {
        let mut graph = Self::with_capacity(vertices);
        for &(from, to, weight) in edges {
            if weight.is_nan() || weight < W::zero() {
                return Err(Error::InvalidEdgeWeight {
                    from,
                    to,
                    weight: weight.to_f64().unwrap_or(f64::NAN),
                });
            }
            if !graph.add_edge(from, to, weight) {
                return Err(Error::DanglingEdge { from, to });
            }
        }
        Ok(graph)
    }

    /// Grows the vertex set so that `vertex` is a valid identifier
    ///
    /// Returns false, leaving the graph untouched, if `vertex + 1` overflows.
    pub fn ensure_vertex(&mut self, vertex: usize) -> bool {
        let Some(needed) = vertex.checked_add(1) else {
            return false;
        };
        if needed > self.outgoing_edges.len() {
            self.outgoing_edges.resize_with(needed, Vec::new);
        }
        true
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.outgoing_edges.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.outgoing_edges.get(vertex) {
            Some(edges) => Box::new(edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.outgoing_edges.len()
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.outgoing_edges
            .get(from)
            .map_or(false, |edges| edges.iter().any(|(target, _)| *target == to))
    }

    /// Returns the smallest weight among the parallel `from -> to` edges
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.outgoing_edges
            .get(from)?
            .iter()
            .filter(|(target, _)| *target == to)
            .map(|&(_, weight)| weight)
            .fold(None, |best: Option<W>, w| match best {
                Some(b) if b <= w => Some(b),
                _ => Some(w),
            })
    }
}

impl<W> MutableGraph<W> for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn add_vertex(&mut self) -> usize {
        self.outgoing_edges.push(Vec::new());
        self.outgoing_edges.len() - 1
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> bool {
        if !self.has_vertex(from) || !self.has_vertex(to) || weight.is_nan() || weight < W::zero() {
            return false;
        }

        self.outgoing_edges[from].push((to, weight));
        self.edge_count += 1;
        true
    }

    fn remove_edge(&mut self, from: usize, to: usize) -> bool {
        let Some(outgoing) = self.outgoing_edges.get_mut(from) else {
            return false;
        };

        let len_before = outgoing.len();
        outgoing.retain(|(target, _)| *target != to);
        let removed = len_before - outgoing.len();
        self.edge_count -= removed;
        removed > 0
    }
}

use std::fmt::Debug;
use num_traits::{Float, Zero};

/// Read-only view of a weighted directed graph
///
/// Vertices are the dense identifiers `0..vertex_count()`. The shortest path
/// algorithms only ever read through this trait and never mutate the graph.
pub trait Graph<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex
    ///
    /// Self-loops and parallel edges may appear.
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool;

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W>;

    /// Returns an iterator over every vertex identifier
    fn vertices(&self) -> std::ops::Range<usize> {
        0..self.vertex_count()
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<W>: Graph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Adds a vertex to the graph and returns its ID
    fn add_vertex(&mut self) -> usize;

    /// Adds a directed edge between vertices with the given weight
    ///
    /// Returns false if either endpoint is missing or the weight is negative or NaN.
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> bool;

    /// Removes an edge from the graph
    fn remove_edge(&mut self, from: usize, to: usize) -> bool;

    /// Adds the symmetric pair `from -> to` and `to -> from`
    fn add_undirected_edge(&mut self, a: usize, b: usize, weight: W) -> bool {
        self.add_edge(a, b, weight) && self.add_edge(b, a, weight)
    }
}

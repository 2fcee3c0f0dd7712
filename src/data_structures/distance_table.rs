use std::fmt::Debug;
use num_traits::{Float, Zero};

/// Tentative shortest-distance estimate per vertex
///
/// `None` stands for an unset (infinite) distance. The table itself does not
/// enforce monotonicity; `SteppingContext::relax` is the only writer during a run.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceTable<W>
where
    W: Float + Zero + Debug + Copy,
{
    values: Vec<Option<W>>,
}

impl<W> DistanceTable<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a table with every vertex unset
    pub fn new(vertex_count: usize) -> Self {
        DistanceTable {
            values: vec![None; vertex_count],
        }
    }

    /// Current estimate for `vertex`, `None` if unset or out of range
    #[inline]
    pub fn get(&self, vertex: usize) -> Option<W> {
        self.values.get(vertex).copied().flatten()
    }

    #[inline]
    pub(crate) fn set(&mut self, vertex: usize, distance: W) {
        self.values[vertex] = Some(distance);
    }

    /// True if `candidate` is strictly smaller than the current estimate
    #[inline]
    pub fn improves(&self, vertex: usize, candidate: W) -> bool {
        match self.get(vertex) {
            None => candidate.is_finite(),
            Some(current) => candidate < current,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[Option<W>] {
        &self.values
    }

    pub fn into_vec(self) -> Vec<Option<W>> {
        self.values
    }
}

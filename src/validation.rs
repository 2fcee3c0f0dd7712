//! Comparing a run against a reference solver.

use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::Graph;
use crate::{Error, Result};

/// A vertex whose distance differs between two runs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mismatch<W> {
    pub vertex: usize,
    pub expected: Option<W>,
    pub actual: Option<W>,
}

/// Lists every vertex whose distance differs between `expected` and `actual`
///
/// Both tables must cover the same vertex set.
pub fn compare<W>(expected: &[Option<W>], actual: &[Option<W>]) -> Result<Vec<Mismatch<W>>>
where
    W: Float + Zero + Debug + Copy,
{
    if expected.len() != actual.len() {
        return Err(Error::LengthMismatch {
            expected: expected.len(),
            actual: actual.len(),
        });
    }

    Ok(expected
        .iter()
        .zip(actual)
        .enumerate()
        .filter(|(_, (e, a))| e != a)
        .map(|(vertex, (&expected, &actual))| Mismatch {
            vertex,
            expected,
            actual,
        })
        .collect())
}

/// Reruns `reference` from the same source and reports disagreements
///
/// Each mismatch is logged at `warn` level.
pub fn validate_against<W, G, A>(
    reference: &A,
    graph: &G,
    result: &ShortestPathResult<W>,
) -> Result<Vec<Mismatch<W>>>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
    A: ShortestPathAlgorithm<W, G>,
{
    let expected = reference.compute_shortest_paths(graph, result.source)?;
    let mismatches = compare(&expected.distances, &result.distances)?;

    for m in &mismatches {
        log::warn!(
            "vertex {}: {} reports {:?}, run reports {:?}",
            m.vertex,
            reference.name(),
            m.expected,
            m.actual
        );
    }
    Ok(mismatches)
}

//! Delta-stepping - bucket-based Single-Source Shortest Paths
//!
//! This library implements the Δ-stepping algorithm of Meyer and Sanders
//! ("Δ-stepping: a parallelizable shortest path algorithm", 2003).
//!
//! Vertices are kept in buckets of width Δ keyed by their tentative distance.
//! Buckets are drained in increasing order: light edges (weight ≤ Δ) are
//! relaxed repeatedly until the current bucket is stable, then heavy edges
//! (weight > Δ) are relaxed once for every vertex settled in that round.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod validation;

pub use algorithm::{
    delta_stepping::{delta_stepping, DeltaStepping, RunStats, SteppingContext},
    dijkstra::Dijkstra,
    requests::EdgeClass,
    ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;

/// Reasons a run configuration is rejected before any relaxation happens
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("delta must be finite and positive, got {0}")]
    NonPositiveDelta(f64),

    #[error("delta {0} is not representable in the weight type")]
    UnrepresentableDelta(f64),

    #[error("source vertex {0} not found in graph")]
    SourceNotFound(usize),
}

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error("Invalid edge weight {weight} on edge {from} -> {to}")]
    InvalidEdgeWeight { from: usize, to: usize, weight: f64 },

    #[error("Edge {from} -> {to} points outside the graph")]
    DanglingEdge { from: usize, to: usize },

    #[error("Malformed edge list at line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("Distance tables differ in length: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

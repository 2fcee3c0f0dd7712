pub mod traits;
pub mod dijkstra;
pub mod requests;
pub mod delta_stepping;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};

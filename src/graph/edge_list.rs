//! Whitespace-separated edge lists: one `from to weight` triple per line.
//!
//! Blank lines and lines starting with `#` are ignored. The vertex set grows to
//! cover the largest identifier that appears.

use std::fmt::Debug;
use std::io::BufRead;
use std::path::Path;

use num_traits::{Float, NumCast, Zero};

use crate::graph::{DirectedGraph, Graph, MutableGraph};
use crate::{Error, Result};

/// Largest vertex identifier a file may name; the vertex set is dense up to it
pub const MAX_VERTEX_ID: usize = u32::MAX as usize;

/// Whether each line contributes one directed edge or a symmetric pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeDirection {
    Directed,
    Undirected,
}

/// Reads an edge list from any buffered reader
pub fn read_edge_list<W, R>(reader: R, direction: EdgeDirection) -> Result<DirectedGraph<W>>
where
    W: Float + Zero + Debug + Copy,
    R: BufRead,
{
    let mut graph = DirectedGraph::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (from, to, weight) = parse_line(trimmed, line_no)?;
        if weight.is_nan() || weight < 0.0 {
            return Err(Error::InvalidEdgeWeight { from, to, weight });
        }
        let w = <W as NumCast>::from(weight).ok_or_else(|| Error::Parse {
            line: line_no,
            reason: format!("weight {} does not fit the weight type", weight),
        })?;

        let largest = from.max(to);
        if largest > MAX_VERTEX_ID || !graph.ensure_vertex(largest) {
            return Err(Error::Parse {
                line: line_no,
                reason: format!("vertex id {} exceeds the limit of {}", largest, MAX_VERTEX_ID),
            });
        }
        match direction {
            EdgeDirection::Directed => graph.add_edge(from, to, w),
            EdgeDirection::Undirected => graph.add_undirected_edge(from, to, w),
        };
    }

    log::debug!(
        "loaded edge list with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Reads an edge list from a file on disk
pub fn load_edge_list<W, P>(path: P, direction: EdgeDirection) -> Result<DirectedGraph<W>>
where
    W: Float + Zero + Debug + Copy,
    P: AsRef<Path>,
{
    let file = std::fs::File::open(path.as_ref())?;
    read_edge_list(std::io::BufReader::new(file), direction)
}

fn parse_line(line: &str, line_no: usize) -> Result<(usize, usize, f64)> {
    let mut fields = line.split_whitespace();
    let mut next = |name: &str| {
        fields.next().ok_or_else(|| Error::Parse {
            line: line_no,
            reason: format!("missing {} field", name),
        })
    };

    let from = next("source")?;
    let to = next("target")?;
    let weight = next("weight")?;

    let from = from.parse::<usize>().map_err(|e| Error::Parse {
        line: line_no,
        reason: format!("bad source vertex {:?}: {}", from, e),
    })?;
    let to = to.parse::<usize>().map_err(|e| Error::Parse {
        line: line_no,
        reason: format!("bad target vertex {:?}: {}", to, e),
    })?;
    let weight = weight.parse::<f64>().map_err(|e| Error::Parse {
        line: line_no,
        reason: format!("bad weight {:?}: {}", weight, e),
    })?;

    if fields.next().is_some() {
        return Err(Error::Parse {
            line: line_no,
            reason: "expected exactly three fields".to_string(),
        });
    }

    Ok((from, to, weight))
}

//! Immutable forward and reverse adjacency views over a directed graph.

use crate::error::{Error, Result};
use crate::jagged::CSR;

/// Directed graph on vertices `0..n`, stored as a pair of CSR arrays.
///
/// Parallel edges and self-loops are kept as given.
#[derive(Clone, Debug)]
pub struct Graph {
    forward: CSR<u32>,
    reverse: CSR<u32>,
}

impl Graph {
    /// Panics if an endpoint is not in `0..n`; see [`Graph::try_from_edges`]
    /// for a checked variant.
    pub fn from_edges<I>(n: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = [u32; 2]>,
        I::IntoIter: Clone,
    {
        let edges = edges.into_iter();
        let forward = CSR::from_pairs(n, edges.clone().map(|[u, v]| (u, v)));
        let reverse = CSR::from_pairs(n, edges.map(|[u, v]| (v, u)));
        Graph { forward, reverse }
    }

    /// Same as [`Graph::from_edges`], but rejects edges with an endpoint outside `0..n`.
    pub fn try_from_edges(n: usize, edges: &[[u32; 2]]) -> Result<Self> {
        if let Some(&w) = edges.iter().flatten().find(|&&w| w as usize >= n) {
            return Err(Error::VertexOutOfRange {
                vertex: w as u64 + 1,
                n,
            });
        }
        Ok(Self::from_edges(n, edges.iter().copied()))
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn edge_count(&self) -> usize {
        self.forward.data_len()
    }

    pub fn forward_neighbors(&self, u: u32) -> &[u32] {
        &self.forward[u as usize]
    }

    pub fn reverse_neighbors(&self, u: u32) -> &[u32] {
        &self.reverse[u as usize]
    }
}

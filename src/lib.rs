//! Dominator trees (Lengauer-Tarjan) and the critical vertices they induce:
//! the vertices every path from a source to a target has to pass through.
//!
//! ```
//! use critical_vertices::critical::solve;
//!
//! // 0 -> {1, 2} -> 3
//! let edges = [[0, 1], [0, 2], [1, 3], [2, 3]];
//! assert_eq!(solve(4, edges, 0, 3).unwrap(), [0, 3]);
//! ```

pub mod config;
pub mod critical;
pub mod dfs;
pub mod dominators;
pub mod dset;
pub mod error;
pub mod graph;
pub mod io;
pub mod jagged;

pub use critical::{critical_vertices, solve};
pub use dominators::DomTree;
pub use error::{Error, Result};
pub use graph::Graph;

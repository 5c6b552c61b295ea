//! Vertices lying on every path from the source to a target.

use log::debug;

use crate::dominators::DomTree;
use crate::error::{Error, Result};

/// Every vertex that dominates `target`, `target` and the source included, in ascending order.
///
/// Fails with [`Error::UnreachableTarget`] rather than answering for a target the
/// source cannot reach.
pub fn critical_vertices(tree: &DomTree, target: u32) -> Result<Vec<u32>> {
    check_range(target, tree.len())?;
    if !tree.is_reachable(target) {
        return Err(Error::UnreachableTarget {
            target: target as u64 + 1,
        });
    }

    let mut critical: Vec<u32> = tree.dominators(target).collect();
    debug!(
        "{} critical vertices between {} and {}",
        critical.len(),
        tree.source() + 1,
        target + 1
    );
    critical.sort_unstable();
    Ok(critical)
}

/// Builds the dominator tree of `source` and extracts the critical vertices of `target`.
pub fn solve<I>(n: usize, edges: I, source: u32, target: u32) -> Result<Vec<u32>>
where
    I: IntoIterator<Item = [u32; 2]>,
    I::IntoIter: Clone,
{
    check_range(source, n)?;
    check_range(target, n)?;
    let tree = DomTree::from_edges(n, edges, source);
    critical_vertices(&tree, target)
}

fn check_range(u: u32, n: usize) -> Result<()> {
    if u as usize >= n {
        return Err(Error::VertexOutOfRange {
            vertex: u as u64 + 1,
            n,
        });
    }
    Ok(())
}

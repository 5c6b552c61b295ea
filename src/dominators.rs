// Lengauer-Tarjan algorithm for computing the dominator tree
use log::{debug, trace};

use crate::dfs::{DfsNumbering, UNSET};
use crate::dset::SemiDisjointSet;
use crate::graph::Graph;
use crate::jagged::CSR;

pub struct DomTree {
    graph: Graph,
    dfs: DfsNumbering,

    // Both indexed by vertex; UNSET outside the reachable part.
    semi: Vec<u32>,
    idom: Vec<u32>,
}

impl DomTree {
    pub fn from_edges<I>(n: usize, edges: I, source: u32) -> DomTree
    where
        I: IntoIterator<Item = [u32; 2]>,
        I::IntoIter: Clone,
    {
        Self::new(Graph::from_edges(n, edges), source)
    }

    /// Panics if `source` is not a vertex of `graph`.
    pub fn new(graph: Graph, source: u32) -> DomTree {
        let n = graph.len();
        let dfs = DfsNumbering::new(&graph, source);
        debug!(
            "dominator tree: {} vertices, {} edges, {} reachable from {}",
            n,
            graph.edge_count(),
            dfs.reachable_count(),
            source + 1
        );

        let mut semi: Vec<u32> = (0..n as u32).collect();
        let mut idom = vec![UNSET; n];
        // Forward-star buckets in a single array: bucket[w] is the head of w's own
        // bucket until w is processed, and its next pointer afterwards. Every bucket
        // is drained before its owner is inserted anywhere.
        let mut bucket = vec![UNSET; n];
        let mut dset = SemiDisjointSet::new(n);

        for &u in dfs.order()[1..].iter().rev() {
            for &v in graph.reverse_neighbors(u) {
                if !dfs.is_reachable(v) {
                    continue;
                }
                dset.find(v, |x| dfs.index(semi[x as usize]));
                let candidate = semi[dset.best(v) as usize];
                if dfs.index(candidate) < dfs.index(semi[u as usize]) {
                    semi[u as usize] = candidate;
                }
            }

            let s = semi[u as usize];
            bucket[u as usize] = bucket[s as usize];
            bucket[s as usize] = u;

            let p = dfs.parent(u);
            dset.link(u, p);

            let mut w = std::mem::replace(&mut bucket[p as usize], UNSET);
            while w != UNSET {
                dset.find(w, |x| dfs.index(semi[x as usize]));
                let b = dset.best(w);
                idom[w as usize] = if semi[b as usize] == semi[w as usize] {
                    semi[w as usize]
                } else {
                    b
                };
                trace!(
                    "bucket {}: idom({}) <- {}",
                    p + 1,
                    w + 1,
                    idom[w as usize] + 1
                );
                w = bucket[w as usize];
            }
        }

        for &u in &dfs.order()[1..] {
            if idom[u as usize] != semi[u as usize] {
                idom[u as usize] = idom[idom[u as usize] as usize];
            }
        }

        for u in 0..n as u32 {
            if !dfs.is_reachable(u) || u == source {
                semi[u as usize] = UNSET;
            }
        }

        DomTree {
            graph,
            dfs,
            semi,
            idom,
        }
    }

    pub fn len(&self) -> usize {
        self.idom.len()
    }

    pub fn is_empty(&self) -> bool {
        self.idom.is_empty()
    }

    pub fn source(&self) -> u32 {
        self.dfs.source()
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn numbering(&self) -> &DfsNumbering {
        &self.dfs
    }

    pub fn is_reachable(&self, u: u32) -> bool {
        self.dfs.is_reachable(u)
    }

    /// Immediate dominator; `None` for the source and for unreachable vertices.
    pub fn idom(&self, u: u32) -> Option<u32> {
        Some(self.idom[u as usize]).filter(|&d| d != UNSET)
    }

    pub fn semi(&self, u: u32) -> Option<u32> {
        Some(self.semi[u as usize]).filter(|&s| s != UNSET)
    }

    /// Ancestors of `u` in the dominator tree, from `u` itself up to the source.
    /// Empty if `u` is unreachable.
    pub fn dominators(&self, u: u32) -> Dominators<'_> {
        Dominators {
            tree: self,
            next: Some(u).filter(|&u| self.is_reachable(u)),
        }
    }

    /// Whether every path from the source to `v` passes through `u`. Reflexive.
    pub fn dominates(&self, u: u32, v: u32) -> bool {
        if !self.is_reachable(u) {
            return false;
        }
        let depth_u = self.dfs.index(u);
        self.dominators(v)
            .take_while(|&d| self.dfs.index(d) >= depth_u)
            .any(|d| d == u)
    }

    /// Children lists of the dominator tree.
    pub fn children(&self) -> CSR<u32> {
        CSR::from_pairs(
            self.len(),
            (0..self.len() as u32).filter_map(|u| Some((self.idom(u)?, u))),
        )
    }
}

pub struct Dominators<'a> {
    tree: &'a DomTree,
    next: Option<u32>,
}

impl Iterator for Dominators<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let u = self.next?;
        self.next = self.tree.idom(u);
        Some(u)
    }
}

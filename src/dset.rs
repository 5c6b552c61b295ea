use std::mem;

use crate::dfs::UNSET;

/// Union-find over the DFS forest, answering min(sdom(-)) queries on tree paths.
///
/// Links always attach a vertex under its DFS parent, so there is no
/// union-by-rank: path compression alone keeps the cost near-linear.
pub struct SemiDisjointSet {
    parent: Vec<u32>,
    best: Vec<u32>,
    path: Vec<u32>,
}

impl SemiDisjointSet {
    pub fn new(n: usize) -> Self {
        SemiDisjointSet {
            parent: vec![UNSET; n],
            best: (0..n as u32).collect(),
            path: vec![],
        }
    }

    pub fn link(&mut self, u: u32, p: u32) {
        debug_assert!(self.parent[u as usize] == UNSET);
        self.parent[u as usize] = p;
    }

    /// Vertex with the minimal key seen on `u`'s path as of the last compression.
    pub fn best(&self, u: u32) -> u32 {
        self.best[u as usize]
    }

    /// Compresses `u`'s path to point directly at its root, and returns the root.
    ///
    /// Every vertex `x` on the path takes `best(parent(x))` as its label when that
    /// one has a strictly smaller key. The walk is iterative, so long chains of
    /// links do not grow the call stack.
    pub fn find(&mut self, u: u32, key: impl Fn(u32) -> u32) -> u32 {
        let mut path = mem::take(&mut self.path);

        let mut root = u;
        while self.parent[root as usize] != UNSET {
            path.push(root);
            root = self.parent[root as usize];
        }

        // Top-down, so that each parent is already relabelled and compressed.
        for &x in path.iter().rev() {
            let a = self.parent[x as usize];
            let (bx, ba) = (self.best[x as usize], self.best[a as usize]);
            if key(ba) < key(bx) {
                self.best[x as usize] = ba;
            }
            self.parent[x as usize] = root;
        }

        path.clear();
        self.path = path;
        root
    }
}

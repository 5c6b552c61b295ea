use crate::graph::Graph;

/// Discovery index of a vertex not reachable from the source.
pub const UNDISCOVERED: u32 = 0;
pub const UNSET: u32 = !0;

/// Preorder numbering of a depth-first walk from `source`.
///
/// Discovery indices start at 1 for the source; unreachable vertices keep
/// [`UNDISCOVERED`].
#[derive(Clone, Debug)]
pub struct DfsNumbering {
    source: u32,
    t_in: Vec<u32>,
    order: Vec<u32>,
    parent: Vec<u32>,
}

impl DfsNumbering {
    pub fn new(graph: &Graph, source: u32) -> Self {
        let n = graph.len();
        debug_assert!((source as usize) < n);

        let mut t_in = vec![UNDISCOVERED; n];
        let mut order = Vec::with_capacity(n);
        let mut parent = vec![UNSET; n];

        // Stackless DFS: the call stack is the chain of DFS parents,
        // and each frame's position is its next-edge cursor.
        let mut current_edge = vec![0u32; n];
        let mut u = source;
        order.push(u);
        t_in[u as usize] = order.len() as u32;

        loop {
            let neighbors = graph.forward_neighbors(u);
            let iv = &mut current_edge[u as usize];

            if *iv as usize == neighbors.len() {
                if u == source {
                    break;
                }
                u = parent[u as usize];
                continue;
            }

            let v = neighbors[*iv as usize];
            *iv += 1;
            if t_in[v as usize] != UNDISCOVERED {
                continue;
            }

            order.push(v);
            t_in[v as usize] = order.len() as u32;
            parent[v as usize] = u;
            u = v;
        }

        DfsNumbering {
            source,
            t_in,
            order,
            parent,
        }
    }

    pub fn source(&self) -> u32 {
        self.source
    }

    /// Discovery index of `u`, or [`UNDISCOVERED`].
    pub fn index(&self, u: u32) -> u32 {
        self.t_in[u as usize]
    }

    /// Vertex with discovery index `i`, for `i` in `1..=reachable_count()`.
    pub fn vertex(&self, i: u32) -> u32 {
        debug_assert!(i != UNDISCOVERED);
        self.order[i as usize - 1]
    }

    /// DFS-tree parent, or [`UNSET`] for the source and unreachable vertices.
    pub fn parent(&self, u: u32) -> u32 {
        self.parent[u as usize]
    }

    pub fn is_reachable(&self, u: u32) -> bool {
        self.t_in[u as usize] != UNDISCOVERED
    }

    pub fn reachable_count(&self) -> usize {
        self.order.len()
    }

    /// Reachable vertices in discovery order.
    pub fn order(&self) -> &[u32] {
        &self.order
    }
}

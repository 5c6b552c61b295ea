use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use critical_vertices::dfs::UNDISCOVERED;
use critical_vertices::{critical_vertices, solve, DomTree, Error};

fn random_graph(rng: &mut StdRng, n: usize, m: usize) -> Vec<[u32; 2]> {
    (0..m)
        .map(|_| [rng.gen_range(0..n as u32), rng.gen_range(0..n as u32)])
        .collect()
}

// Reachability from `source` in the graph with `removed` deleted.
fn reachable_without(n: usize, edges: &[[u32; 2]], source: u32, removed: Option<u32>) -> Vec<bool> {
    let mut neighbors = vec![vec![]; n];
    for &[u, v] in edges {
        neighbors[u as usize].push(v);
    }

    let mut visited = vec![false; n];
    if removed == Some(source) {
        return visited;
    }
    visited[source as usize] = true;
    let mut stack = vec![source];
    while let Some(u) = stack.pop() {
        for &v in &neighbors[u as usize] {
            if Some(v) != removed && !visited[v as usize] {
                visited[v as usize] = true;
                stack.push(v);
            }
        }
    }
    visited
}

// dominates[d][v]: removing d cuts v off the source (d dominates itself)
fn naive_dominators(n: usize, edges: &[[u32; 2]], source: u32) -> Vec<Vec<bool>> {
    let reachable = reachable_without(n, edges, source, None);
    (0..n as u32)
        .map(|d| {
            let cut = reachable_without(n, edges, source, Some(d));
            (0..n).map(|v| reachable[v] && !cut[v]).collect()
        })
        .collect()
}

#[test]
fn matches_vertex_removal() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..300 {
        let n = rng.gen_range(1..14);
        let m = rng.gen_range(0..3 * n);
        let edges = random_graph(&mut rng, n, m);
        let source = rng.gen_range(0..n as u32);

        let tree = DomTree::from_edges(n, edges.iter().copied(), source);
        let naive = naive_dominators(n, &edges, source);
        let reachable = reachable_without(n, &edges, source, None);

        for v in 0..n as u32 {
            assert_eq!(tree.is_reachable(v), reachable[v as usize]);
            for d in 0..n as u32 {
                assert_eq!(
                    tree.dominates(d, v),
                    naive[d as usize][v as usize],
                    "{} dom {} in {:?} from {}",
                    d,
                    v,
                    edges,
                    source
                );
            }

            // idom is the strict dominator dominated by all the others
            if let Some(d) = tree.idom(v) {
                assert_ne!(d, v);
                assert!(naive[d as usize][v as usize]);
                for e in 0..n as u32 {
                    if e != v && naive[e as usize][v as usize] {
                        assert!(naive[e as usize][d as usize]);
                    }
                }
            }
        }
    }
}

#[test]
fn tree_property() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..50 {
        let n = rng.gen_range(2..200);
        let edges = random_graph(&mut rng, n, 2 * n);
        let tree = DomTree::from_edges(n, edges, 0);
        let dfs = tree.numbering();

        for v in 0..n as u32 {
            if !tree.is_reachable(v) {
                assert_eq!(dfs.index(v), UNDISCOVERED);
                assert_eq!(tree.idom(v), None);
                continue;
            }
            if v == tree.source() {
                assert_eq!(tree.idom(v), None);
                continue;
            }

            let d = tree.idom(v).unwrap();
            assert!(dfs.index(d) < dfs.index(v));
            let s = tree.semi(v).unwrap();
            assert!(dfs.index(s) < dfs.index(v));

            let chain: Vec<u32> = tree.dominators(v).collect();
            assert!(chain.len() <= dfs.reachable_count());
            assert_eq!(chain.last(), Some(&tree.source()));
        }

        let mut indices: Vec<u32> = dfs.order().iter().map(|&u| dfs.index(u)).collect();
        indices.sort_unstable();
        assert!(indices.iter().copied().eq(1..=dfs.reachable_count() as u32));
    }
}

#[test]
fn edge_order_does_not_matter() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let n = rng.gen_range(2..60);
        let mut edges = random_graph(&mut rng, n, 3 * n);
        let before = DomTree::from_edges(n, edges.iter().copied(), 0);
        edges.shuffle(&mut rng);
        let after = DomTree::from_edges(n, edges.iter().copied(), 0);

        for v in 0..n as u32 {
            assert_eq!(before.idom(v), after.idom(v));
        }
        let target = n as u32 - 1;
        if before.is_reachable(target) {
            assert_eq!(
                critical_vertices(&before, target).unwrap(),
                critical_vertices(&after, target).unwrap()
            );
        }
    }
}

#[test]
fn idempotent() {
    let mut rng = StdRng::seed_from_u64(7);
    let n = 500;
    let mut edges = random_graph(&mut rng, n, 1500);
    // spine so that every vertex is a reachable target
    edges.extend((0..n as u32 - 1).map(|u| [u, u + 1]));
    let a = DomTree::from_edges(n, edges.iter().copied(), 0);
    let b = DomTree::from_edges(n, edges.iter().copied(), 0);
    assert!((0..n as u32).all(|v| a.idom(v) == b.idom(v)));

    let targets: Vec<u32> = a.numbering().order().to_vec();
    assert_eq!(targets.len(), n);
    for t in targets {
        assert_eq!(
            critical_vertices(&a, t).unwrap(),
            critical_vertices(&b, t).unwrap()
        );
    }
}

#[test]
fn self_loops_do_not_change_the_answer() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..50 {
        let n = rng.gen_range(2..40);
        let edges = random_graph(&mut rng, n, 2 * n);
        let looped: Vec<_> = edges
            .iter()
            .copied()
            .chain((0..n as u32).filter(|_| rng.gen_bool(0.3)).map(|u| [u, u]))
            .collect();

        let plain = DomTree::from_edges(n, edges.iter().copied(), 0);
        let with_loops = DomTree::from_edges(n, looped.iter().copied(), 0);
        assert!((0..n as u32).all(|v| plain.idom(v) == with_loops.idom(v)));
    }
}

#[test]
fn unreachable_ids_around_source_and_target() {
    // 0 and 5 are unreachable from source 2; target 4
    let edges = [[0, 2], [2, 1], [2, 3], [1, 4], [3, 4], [5, 4], [5, 0]];
    let tree = DomTree::from_edges(6, edges, 2);
    assert_eq!(tree.idom(0), None);
    assert_eq!(tree.idom(5), None);
    assert_eq!(critical_vertices(&tree, 4).unwrap(), [2, 4]);
    assert!(matches!(
        critical_vertices(&tree, 5),
        Err(Error::UnreachableTarget { target: 6 })
    ));
}

#[test]
fn long_path_and_ladder() {
    let n = 200_000u32;
    let path = (0..n - 1).map(|u| [u, u + 1]);
    let critical = solve(n as usize, path, 0, n - 1).unwrap();
    assert_eq!(critical.len(), n as usize);

    // Every even vertex is a choke point: 2k -> {2k+1, 2k+2}, 2k+1 -> 2k+2
    let ladder = (0..n / 2 - 1).flat_map(|k| {
        let u = 2 * k;
        [[u, u + 1], [u, u + 2], [u + 1, u + 2]]
    });
    let critical = solve(n as usize, ladder, 0, n - 2).unwrap();
    assert!(critical.iter().all(|&u| u % 2 == 0));
    assert_eq!(critical.len(), n as usize / 2);
}

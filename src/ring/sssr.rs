use std::collections::VecDeque;

use petgraph::algo::connected_components;
use petgraph::graph::NodeIndex;

use super::edges::{CycleBasis, EdgeSet};
use super::{normalize_ring, Ring};
use crate::mol::Mol;

/// Cyclomatic number `E - V + C`: the number of rings in any minimal
/// cycle basis.
pub fn expected_ring_count<A, B>(mol: &Mol<A, B>) -> usize {
    let v = mol.atom_count();
    let e = mol.bond_count();
    let c = connected_components(mol.graph());
    (e + c).saturating_sub(v)
}

/// Smallest set of smallest rings.
///
/// Horton candidates are generated for every (bond, vertex) pair, sorted by
/// size and accepted greedily while they stay independent over GF(2).
pub(crate) fn smallest_rings<A, B>(mol: &Mol<A, B>) -> Vec<Ring> {
    let num_expected = expected_ring_count(mol);
    if num_expected == 0 {
        return vec![];
    }

    let num_edges = mol.bond_count();
    let mut basis = CycleBasis::with_capacity(num_expected);
    let mut rings = Vec::with_capacity(num_expected);

    for candidate in horton_candidates(mol) {
        if basis.len() >= num_expected {
            break;
        }
        let Some(ring) = Ring::from_atoms(mol, normalize_ring(&candidate)) else {
            continue;
        };
        let bv = EdgeSet::from_bonds(ring.bonds(), num_edges);
        if bv.is_empty() {
            continue;
        }
        if basis.try_add(&bv) {
            rings.push(ring);
        }
    }

    rings.sort_by(|a, b| a.size().cmp(&b.size()).then_with(|| a.atoms().cmp(b.atoms())));
    rings
}

fn horton_candidates<A, B>(mol: &Mol<A, B>) -> Vec<Vec<NodeIndex>> {
    let n = mol.atom_count();
    let dist = all_pairs_bfs(mol, n);
    let pred = all_pairs_predecessors(mol, n, &dist);

    let mut candidates: Vec<Vec<NodeIndex>> = Vec::new();

    for edge in mol.bonds() {
        let Some((u, v)) = mol.bond_endpoints(edge) else {
            continue;
        };
        for w_idx in 0..n {
            let w = NodeIndex::new(w_idx);
            let du = dist[w_idx][u.index()];
            let dv = dist[w_idx][v.index()];
            if du == u32::MAX || dv == u32::MAX {
                continue;
            }
            let ring_size = du as usize + dv as usize + 1;
            if ring_size < 3 {
                continue;
            }
            let path_u = reconstruct_path(&pred, w, u);
            let path_v = reconstruct_path(&pred, w, v);
            if path_u.is_empty() || path_v.is_empty() {
                continue;
            }
            if paths_share_internal_node(&path_u, &path_v) {
                continue;
            }
            let mut ring = path_u;
            for &node in path_v[1..].iter().rev() {
                ring.push(node);
            }
            candidates.push(ring);
        }
    }

    candidates.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    candidates.dedup();
    candidates
}

fn all_pairs_bfs<A, B>(mol: &Mol<A, B>, n: usize) -> Vec<Vec<u32>> {
    let mut dist = vec![vec![u32::MAX; n]; n];
    for (src_idx, row) in dist.iter_mut().enumerate() {
        row[src_idx] = 0;
        let mut queue = VecDeque::new();
        queue.push_back(NodeIndex::new(src_idx));
        while let Some(cur) = queue.pop_front() {
            let d = row[cur.index()];
            for nb in mol.neighbors(cur) {
                if row[nb.index()] == u32::MAX {
                    row[nb.index()] = d + 1;
                    queue.push_back(nb);
                }
            }
        }
    }
    dist
}

fn all_pairs_predecessors<A, B>(
    mol: &Mol<A, B>,
    n: usize,
    dist: &[Vec<u32>],
) -> Vec<Vec<Option<NodeIndex>>> {
    let mut pred = vec![vec![None; n]; n];
    for src_idx in 0..n {
        let mut queue = VecDeque::new();
        queue.push_back(NodeIndex::new(src_idx));
        let mut visited = vec![false; n];
        visited[src_idx] = true;
        while let Some(cur) = queue.pop_front() {
            for nb in mol.neighbors(cur) {
                if !visited[nb.index()]
                    && dist[src_idx][nb.index()] == dist[src_idx][cur.index()] + 1
                {
                    visited[nb.index()] = true;
                    pred[src_idx][nb.index()] = Some(cur);
                    queue.push_back(nb);
                }
            }
        }
    }
    pred
}

fn reconstruct_path(
    pred: &[Vec<Option<NodeIndex>>],
    src: NodeIndex,
    dst: NodeIndex,
) -> Vec<NodeIndex> {
    let mut path = vec![dst];
    let mut cur = dst;
    while cur != src {
        match pred[src.index()][cur.index()] {
            Some(p) => {
                path.push(p);
                cur = p;
            }
            None => return vec![],
        }
    }
    path.reverse();
    path
}

fn paths_share_internal_node(path_u: &[NodeIndex], path_v: &[NodeIndex]) -> bool {
    if path_u.len() < 2 || path_v.len() < 2 {
        return false;
    }
    path_u[1..].iter().any(|node| path_v[1..].contains(node))
}

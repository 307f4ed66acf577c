use petgraph::graph::NodeIndex;

use super::Ring;
use crate::mol::Mol;

/// Enumerates every simple cycle of at most `max_size` atoms.
///
/// Each cycle is reported once: paths start at the cycle's lowest atom,
/// only visit higher atoms, and are kept in one orientation.
pub(crate) fn simple_cycles<A, B>(mol: &Mol<A, B>, max_size: usize) -> Vec<Ring> {
    let n = mol.atom_count();
    let mut cycles: Vec<Vec<NodeIndex>> = Vec::new();
    if max_size < 3 {
        return vec![];
    }

    let mut on_path = vec![false; n];
    for start in mol.atoms() {
        let mut path = vec![start];
        on_path[start.index()] = true;
        extend_path(mol, start, &mut path, &mut on_path, max_size, &mut cycles);
        on_path[start.index()] = false;
    }

    cycles.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    cycles.dedup();
    cycles
        .into_iter()
        .filter_map(|atoms| Ring::from_atoms(mol, atoms))
        .collect()
}

fn extend_path<A, B>(
    mol: &Mol<A, B>,
    start: NodeIndex,
    path: &mut Vec<NodeIndex>,
    on_path: &mut [bool],
    max_size: usize,
    cycles: &mut Vec<Vec<NodeIndex>>,
) {
    let Some(&last) = path.last() else {
        return;
    };
    for nb in mol.neighbors(last) {
        if nb == start {
            if path.len() >= 3 && path[1] < last {
                cycles.push(path.clone());
            }
            continue;
        }
        if nb < start || on_path[nb.index()] || path.len() >= max_size {
            continue;
        }
        path.push(nb);
        on_path[nb.index()] = true;
        extend_path(mol, start, path, on_path, max_size, cycles);
        on_path[nb.index()] = false;
        path.pop();
    }
}

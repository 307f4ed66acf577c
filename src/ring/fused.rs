//! Bounded search over unions of fused rings.
//!
//! Two rings sharing a bond path combine into the cycle around both: the
//! symmetric difference of their bond sets. Starting from a seed ring, the
//! search keeps folding in base rings that share a bond with the current
//! cycle, up to `max_rings` rings per union. Every union that is a single
//! simple cycle is yielded as a [`Ring`].

use std::collections::HashSet;

use super::edges::EdgeSet;
use super::{normalize_ring, Ring, RingSet};
use crate::mol::Mol;

/// Caps shared by all union searches of one detection pass.
#[derive(Debug)]
pub(crate) struct UnionBudget {
    max_rings: usize,
    remaining: usize,
    seen: HashSet<EdgeSet>,
    exhausted: bool,
}

impl UnionBudget {
    pub(crate) fn new(max_rings: usize, max_candidates: usize) -> Self {
        Self {
            max_rings,
            remaining: max_candidates,
            seen: HashSet::new(),
            exhausted: false,
        }
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Records a union; false if it was seen before or the budget ran out.
    fn admit(&mut self, union: &EdgeSet) -> bool {
        if self.exhausted || self.seen.contains(union) {
            return false;
        }
        if self.remaining == 0 {
            self.exhausted = true;
            return false;
        }
        self.remaining -= 1;
        self.seen.insert(union.clone());
        true
    }
}

struct Frontier {
    edges: EdgeSet,
    members: Vec<usize>,
}

/// Simple-cycle unions containing `base[seed]`, breadth first by number of
/// member rings.
pub(crate) fn ring_unions<A, B>(
    mol: &Mol<A, B>,
    base: &RingSet,
    seed: usize,
    budget: &mut UnionBudget,
) -> Vec<Ring> {
    let num_edges = mol.bond_count();
    let ring_edges: Vec<EdgeSet> = base
        .iter()
        .map(|r| EdgeSet::from_bonds(r.bonds(), num_edges))
        .collect();

    let mut found = Vec::new();
    let mut frontier = vec![Frontier {
        edges: ring_edges[seed].clone(),
        members: vec![seed],
    }];

    for _ in 1..budget.max_rings {
        let mut next = Vec::new();
        for state in &frontier {
            for (j, edges) in ring_edges.iter().enumerate() {
                if state.members.contains(&j) || !state.edges.intersects(edges) {
                    continue;
                }
                let union = state.edges.xor(edges);
                if union.is_empty() || !budget.admit(&union) {
                    if budget.is_exhausted() {
                        return found;
                    }
                    continue;
                }
                let Some(atoms) = union.to_cycle(mol) else {
                    log::trace!("union of rings {:?} + {} is not a simple cycle", state.members, j);
                    continue;
                };
                let Some(ring) = Ring::from_atoms(mol, normalize_ring(&atoms)) else {
                    continue;
                };
                let mut members = state.members.clone();
                members.push(j);
                log::trace!("ring union {:?}: {}-membered perimeter", members, ring.size());
                found.push(ring);
                next.push(Frontier {
                    edges: union,
                    members,
                });
            }
        }
        if next.is_empty() {
            break;
        }
        frontier = next;
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates;

    #[test]
    fn naphthalene_union_is_ten_ring() {
        let mol = templates::naphthalene();
        let base = RingSet::sssr(&mol);
        let mut budget = UnionBudget::new(3, 64);
        let unions = ring_unions(&mol, &base, 0, &mut budget);
        assert_eq!(unions.len(), 1);
        assert_eq!(unions[0].size(), 10);
    }

    #[test]
    fn seen_unions_are_not_repeated() {
        let mol = templates::naphthalene();
        let base = RingSet::sssr(&mol);
        let mut budget = UnionBudget::new(3, 64);
        assert_eq!(ring_unions(&mol, &base, 0, &mut budget).len(), 1);
        assert!(ring_unions(&mol, &base, 1, &mut budget).is_empty());
    }

    #[test]
    fn single_ring_limit_disables_unions() {
        let mol = templates::azulene();
        let base = RingSet::sssr(&mol);
        let mut budget = UnionBudget::new(1, 64);
        assert!(ring_unions(&mol, &base, 0, &mut budget).is_empty());
    }

    #[test]
    fn porphine_unions_from_macrocycle() {
        let mol = templates::porphine();
        let base = RingSet::sssr(&mol);
        let macro_idx = base.iter().position(|r| r.size() == 16).unwrap();
        let mut budget = UnionBudget::new(3, 1024);
        let unions = ring_unions(&mol, &base, macro_idx, &mut budget);
        // One pyrrole swapped to its C=C path (4), then two of them (6).
        let mut sizes: Vec<usize> = unions.iter().map(|r| r.size()).collect();
        sizes.sort();
        assert_eq!(sizes, vec![17, 17, 17, 17, 18, 18, 18, 18, 18, 18]);
    }

    #[test]
    fn candidate_cap_stops_search() {
        let mol = templates::porphine();
        let base = RingSet::sssr(&mol);
        let macro_idx = base.iter().position(|r| r.size() == 16).unwrap();
        let mut budget = UnionBudget::new(5, 3);
        let unions = ring_unions(&mol, &base, macro_idx, &mut budget);
        assert_eq!(unions.len(), 3);
        assert!(budget.is_exhausted());
    }
}

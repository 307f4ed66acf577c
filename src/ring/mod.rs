//! Ring perception.
//!
//! [`RingSet::sssr`] gives the smallest set of smallest rings, which is all
//! the detector needs for isolated and simply fused rings.
//! [`RingSet::all_rings`] enumerates every simple cycle up to a size bound.
//! The fused-union search in [`fused`] builds larger perimeters (azulene's
//! 10-ring, porphyrin's 18-ring) from a base ring set on demand.

mod all;
pub(crate) mod edges;
pub(crate) mod fused;
mod sssr;

use std::ops::Index;

use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::mol::Mol;
use crate::traits::HasAromaticity;

pub use sssr::expected_ring_count;

/// A simple cycle of atoms.
///
/// `bonds()[i]` joins `atoms()[i]` and `atoms()[(i + 1) % size]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ring {
    atoms: Vec<NodeIndex>,
    bonds: Vec<EdgeIndex>,
    pub is_aromatic: bool,
}

impl Ring {
    /// Builds a ring from atoms in cyclic order, resolving the bond between
    /// each consecutive pair. Returns `None` if the sequence is shorter than
    /// three atoms, repeats an atom, or a consecutive pair is not bonded.
    pub fn from_atoms<A, B>(mol: &Mol<A, B>, atoms: Vec<NodeIndex>) -> Option<Ring> {
        let len = atoms.len();
        if len < 3 {
            return None;
        }
        let mut seen = atoms.clone();
        seen.sort();
        seen.dedup();
        if seen.len() != len {
            return None;
        }
        let bonds = (0..len)
            .map(|i| mol.bond_between(atoms[i], atoms[(i + 1) % len]))
            .collect::<Option<Vec<_>>>()?;
        Some(Ring {
            atoms,
            bonds,
            is_aromatic: false,
        })
    }

    pub fn atoms(&self) -> &[NodeIndex] {
        &self.atoms
    }

    pub fn bonds(&self) -> &[EdgeIndex] {
        &self.bonds
    }

    pub fn size(&self) -> usize {
        self.atoms.len()
    }

    pub fn contains_atom(&self, atom: NodeIndex) -> bool {
        self.atoms.contains(&atom)
    }

    pub fn contains_bond(&self, bond: EdgeIndex) -> bool {
        self.bonds.contains(&bond)
    }

    /// Ring atoms before and after position `i`.
    pub fn ring_neighbors(&self, i: usize) -> (NodeIndex, NodeIndex) {
        let len = self.atoms.len();
        (self.atoms[(i + len - 1) % len], self.atoms[(i + 1) % len])
    }

    /// Bonds before and after position `i`.
    pub fn ring_bonds_at(&self, i: usize) -> (EdgeIndex, EdgeIndex) {
        let len = self.bonds.len();
        (self.bonds[(i + len - 1) % len], self.bonds[i])
    }

    pub fn shares_atom_with(&self, other: &Ring) -> bool {
        self.atoms.iter().any(|a| other.contains_atom(*a))
    }

    pub fn shares_bond_with(&self, other: &Ring) -> bool {
        self.bonds.iter().any(|b| other.contains_bond(*b))
    }

    /// Same cycle, regardless of starting atom or direction.
    pub fn same_cycle(&self, other: &Ring) -> bool {
        if self.size() != other.size() {
            return false;
        }
        let mut a = self.bonds.clone();
        let mut b = other.bonds.clone();
        a.sort();
        b.sort();
        a == b
    }
}

impl HasAromaticity for Ring {
    fn is_aromatic(&self) -> bool {
        self.is_aromatic
    }

    fn set_aromatic(&mut self, aromatic: bool) {
        self.is_aromatic = aromatic;
    }
}

/// An ordered collection of rings, not necessarily disjoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RingSet {
    rings: Vec<Ring>,
}

impl RingSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Smallest set of smallest rings, ordered by size.
    pub fn sssr<A, B>(mol: &Mol<A, B>) -> Self {
        Self {
            rings: sssr::smallest_rings(mol),
        }
    }

    /// Every simple cycle with at most `max_size` atoms, ordered by size.
    pub fn all_rings<A, B>(mol: &Mol<A, B>, max_size: usize) -> Self {
        Self {
            rings: all::simple_cycles(mol, max_size),
        }
    }

    /// Appends `ring` unless the same cycle is already present.
    pub fn push(&mut self, ring: Ring) -> bool {
        if self.contains_cycle(&ring) {
            return false;
        }
        self.rings.push(ring);
        true
    }

    pub fn len(&self) -> usize {
        self.rings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Ring> {
        self.rings.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Ring> {
        self.rings.iter_mut()
    }

    pub fn contains_cycle(&self, ring: &Ring) -> bool {
        self.rings.iter().any(|r| r.same_cycle(ring))
    }

    pub fn is_ring_atom(&self, atom: NodeIndex) -> bool {
        self.rings.iter().any(|r| r.contains_atom(atom))
    }

    pub fn is_ring_bond(&self, bond: EdgeIndex) -> bool {
        self.rings.iter().any(|r| r.contains_bond(bond))
    }

    pub fn rings_with_atom(&self, atom: NodeIndex) -> impl Iterator<Item = &Ring> + '_ {
        self.rings.iter().filter(move |r| r.contains_atom(atom))
    }

    pub fn rings_with_bond(&self, bond: EdgeIndex) -> impl Iterator<Item = &Ring> + '_ {
        self.rings.iter().filter(move |r| r.contains_bond(bond))
    }

    /// Rings sharing at least one bond with `ring` (other than itself).
    pub fn fused_with<'a>(&'a self, ring: &'a Ring) -> impl Iterator<Item = &'a Ring> + 'a {
        self.rings
            .iter()
            .filter(move |r| !r.same_cycle(ring) && r.shares_bond_with(ring))
    }

    pub fn aromatic_count(&self) -> usize {
        self.rings.iter().filter(|r| r.is_aromatic).count()
    }
}

impl Index<usize> for RingSet {
    type Output = Ring;

    fn index(&self, idx: usize) -> &Ring {
        &self.rings[idx]
    }
}

impl<'a> IntoIterator for &'a RingSet {
    type Item = &'a Ring;
    type IntoIter = std::slice::Iter<'a, Ring>;

    fn into_iter(self) -> Self::IntoIter {
        self.rings.iter()
    }
}

impl IntoIterator for RingSet {
    type Item = Ring;
    type IntoIter = std::vec::IntoIter<Ring>;

    fn into_iter(self) -> Self::IntoIter {
        self.rings.into_iter()
    }
}

impl FromIterator<Ring> for RingSet {
    fn from_iter<I: IntoIterator<Item = Ring>>(iter: I) -> Self {
        let mut set = RingSet::new();
        for ring in iter {
            set.push(ring);
        }
        set
    }
}

/// Marks each ring of a separately computed ring set aromatic iff every one
/// of its atoms already carries the aromatic flag. Returns the number of
/// aromatic rings in the set afterwards.
///
/// Existing ring flags are never cleared.
pub fn mark_aromatic_rings<A, B>(mol: &Mol<A, B>, rings: &mut RingSet) -> usize
where
    A: HasAromaticity,
{
    for ring in rings.iter_mut() {
        if ring.atoms().iter().all(|&a| mol.atom(a).is_aromatic()) {
            ring.set_aromatic(true);
        }
    }
    rings.aromatic_count()
}

/// Rotates a cycle so it starts at its lowest atom index and runs toward
/// the lower of that atom's two ring neighbors.
pub(crate) fn normalize_ring(ring: &[NodeIndex]) -> Vec<NodeIndex> {
    let Some(min_pos) = ring
        .iter()
        .enumerate()
        .min_by_key(|&(_, idx)| idx)
        .map(|(i, _)| i)
    else {
        return vec![];
    };

    let len = ring.len();
    let mut normalized: Vec<NodeIndex> = (0..len).map(|i| ring[(min_pos + i) % len]).collect();

    if len > 2 && normalized[1] > normalized[len - 1] {
        normalized[1..].reverse();
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates;

    fn n(i: usize) -> NodeIndex {
        NodeIndex::new(i)
    }

    #[test]
    fn normalize_rotates_and_orients() {
        let ring = vec![n(3), n(1), n(4), n(2)];
        assert_eq!(normalize_ring(&ring), vec![n(1), n(3), n(2), n(4)]);
    }

    #[test]
    fn from_atoms_rejects_unbonded_pairs() {
        let mol = templates::benzene();
        assert!(Ring::from_atoms(&mol, vec![n(0), n(1), n(3)]).is_none());
        assert!(Ring::from_atoms(&mol, vec![n(0), n(1)]).is_none());
        let ring = Ring::from_atoms(&mol, (0..6).map(n).collect()).unwrap();
        assert_eq!(ring.bonds().len(), 6);
        assert_eq!(ring.ring_neighbors(0), (n(5), n(1)));
    }

    #[test]
    fn naphthalene_rings_share_one_bond() {
        let mol = templates::naphthalene();
        let rings = RingSet::sssr(&mol);
        assert!(rings[0].shares_bond_with(&rings[1]));
        assert!(rings[0].shares_atom_with(&rings[1]));
        assert_eq!(rings.fused_with(&rings[0]).count(), 1);
        let shared: Vec<EdgeIndex> = rings[0]
            .bonds()
            .iter()
            .copied()
            .filter(|&b| rings[1].contains_bond(b))
            .collect();
        assert_eq!(shared.len(), 1);
        assert_eq!(rings.rings_with_bond(shared[0]).count(), 2);
    }

    #[test]
    fn same_cycle_ignores_rotation_and_direction() {
        let mol = templates::benzene();
        let a = Ring::from_atoms(&mol, (0..6).map(n).collect()).unwrap();
        let b = Ring::from_atoms(&mol, vec![n(3), n(2), n(1), n(0), n(5), n(4)]).unwrap();
        assert!(a.same_cycle(&b));
        let mut set = RingSet::new();
        assert!(set.push(a));
        assert!(!set.push(b));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn mark_rings_requires_all_atoms_flagged() {
        let mut mol = templates::tetrahydronaphthalene();
        for i in 4..10 {
            mol.atom_mut(n(i)).is_aromatic = true;
        }
        let mut rings = RingSet::sssr(&mol);
        assert_eq!(mark_aromatic_rings(&mol, &mut rings), 1);
        let aromatic: Vec<&Ring> = rings.iter().filter(|r| r.is_aromatic).collect();
        assert_eq!(aromatic.len(), 1);
        assert!(aromatic[0].atoms().iter().all(|a| a.index() >= 4));
    }

    #[test]
    fn mark_rings_never_clears() {
        let mol = templates::benzene();
        let mut rings = RingSet::sssr(&mol);
        rings.iter_mut().for_each(|r| r.is_aromatic = true);
        assert_eq!(mark_aromatic_rings(&mol, &mut rings), 1);
    }
}

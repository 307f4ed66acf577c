use crate::mol::Mol;
use crate::ring::Ring;
use crate::traits::HasAromaticity;

/// Flags `ring`, every atom on it and every bond between consecutive ring
/// atoms as aromatic. Flags are only ever set, never cleared.
pub fn mark_aromatic<A, B>(mol: &mut Mol<A, B>, ring: &mut Ring)
where
    A: HasAromaticity,
    B: HasAromaticity,
{
    ring.set_aromatic(true);
    for &atom in ring.atoms() {
        mol.atom_mut(atom).set_aromatic(true);
    }
    for &bond in ring.bonds() {
        mol.bond_mut(bond).set_aromatic(true);
    }
}

/// Number of atoms currently flagged aromatic.
pub fn aromatic_atom_count<A: HasAromaticity, B>(mol: &Mol<A, B>) -> usize {
    mol.atoms().filter(|&a| mol.atom(a).is_aromatic()).count()
}

/// Number of bonds currently flagged aromatic.
pub fn aromatic_bond_count<A, B: HasAromaticity>(mol: &Mol<A, B>) -> usize {
    mol.bonds().filter(|&b| mol.bond(b).is_aromatic()).count()
}

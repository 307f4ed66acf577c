//! Typed Kekulé structures of the classic aromaticity test molecules.
//!
//! Each template carries explicit hybridization and implicit hydrogen
//! counts, as upstream atom typing would assign them. Atom order follows the
//! SMILES given in each function's documentation.

use petgraph::graph::NodeIndex;

use crate::atom::{Atom, Hybridization};
use crate::bond::{Bond, BondOrder};
use crate::element::Element;
use crate::mol::Mol;
use crate::ring::RingSet;

use BondOrder::{Double as D, Single as S};
use Hybridization::{Planar3, SP2, SP3};

type Molecule = Mol<Atom, Bond>;

fn build(atoms: &[(Element, Hybridization, u8, i8)], bonds: &[(usize, usize, BondOrder)]) -> Molecule {
    let mut mol = Mol::new();
    for &(element, hybridization, hydrogens, charge) in atoms {
        mol.add_atom(
            Atom::new(element, hybridization)
                .with_hydrogens(hydrogens)
                .with_charge(charge),
        );
    }
    for &(a, b, order) in bonds {
        mol.add_bond(NodeIndex::new(a), NodeIndex::new(b), Bond::new(order));
    }
    mol
}

const C: Element = Element::C;
const N: Element = Element::N;
const O: Element = Element::O;

/// Saturated carbon chain `CCCC…` of `n` atoms.
pub fn chain(n: usize) -> Molecule {
    let atoms: Vec<_> = (0..n)
        .map(|i| (C, SP3, if i == 0 || i + 1 == n { 3 } else { 2 }, 0))
        .collect();
    let bonds: Vec<_> = (1..n).map(|i| (i - 1, i, S)).collect();
    build(&atoms, &bonds)
}

/// `C1=CC=CC=C1`
pub fn benzene() -> Molecule {
    build(
        &[(C, SP2, 1, 0); 6],
        &[(0, 1, D), (1, 2, S), (2, 3, D), (3, 4, S), (4, 5, D), (5, 0, S)],
    )
}

/// `C1=CC=CC=C1C`, methyl on atom 6.
pub fn toluene() -> Molecule {
    build(
        &[
            (C, SP2, 0, 0),
            (C, SP2, 1, 0),
            (C, SP2, 1, 0),
            (C, SP2, 1, 0),
            (C, SP2, 1, 0),
            (C, SP2, 1, 0),
            (C, SP3, 3, 0),
        ],
        &[
            (0, 1, D),
            (1, 2, S),
            (2, 3, D),
            (3, 4, S),
            (4, 5, D),
            (5, 0, S),
            (0, 6, S),
        ],
    )
}

/// `C1=CC=NC=C1`, nitrogen at atom 3.
pub fn pyridine() -> Molecule {
    build(
        &[
            (C, SP2, 1, 0),
            (C, SP2, 1, 0),
            (C, SP2, 1, 0),
            (N, SP2, 0, 0),
            (C, SP2, 1, 0),
            (C, SP2, 1, 0),
        ],
        &[(0, 1, D), (1, 2, S), (2, 3, D), (3, 4, S), (4, 5, D), (5, 0, S)],
    )
}

/// `[O-][N+]1=CC=CC=C1`
pub fn pyridine_oxide() -> Molecule {
    build(
        &[
            (O, SP3, 0, -1),
            (N, SP2, 0, 1),
            (C, SP2, 1, 0),
            (C, SP2, 1, 0),
            (C, SP2, 1, 0),
            (C, SP2, 1, 0),
            (C, SP2, 1, 0),
        ],
        &[
            (0, 1, S),
            (1, 2, D),
            (2, 3, S),
            (3, 4, D),
            (4, 5, S),
            (5, 6, D),
            (6, 1, S),
        ],
    )
}

fn five_ring_heterocycle(hetero: Element, hetero_h: u8) -> Molecule {
    // C1=COC=C1 with the heteroatom at position 2.
    build(
        &[
            (C, SP2, 1, 0),
            (C, SP2, 1, 0),
            (hetero, SP2, hetero_h, 0),
            (C, SP2, 1, 0),
            (C, SP2, 1, 0),
        ],
        &[(0, 1, D), (1, 2, S), (2, 3, S), (3, 4, D), (4, 0, S)],
    )
}

/// `C1=COC=C1`, oxygen at atom 2.
pub fn furan() -> Molecule {
    five_ring_heterocycle(O, 0)
}

/// `C1=CSC=C1`, sulfur at atom 2.
pub fn thiophene() -> Molecule {
    five_ring_heterocycle(Element::S, 0)
}

/// `N1C=CC=C1`, NH at atom 0.
pub fn pyrrole() -> Molecule {
    build(
        &[
            (N, SP2, 1, 0),
            (C, SP2, 1, 0),
            (C, SP2, 1, 0),
            (C, SP2, 1, 0),
            (C, SP2, 1, 0),
        ],
        &[(0, 1, S), (1, 2, D), (2, 3, S), (3, 4, D), (4, 0, S)],
    )
}

/// `C1=CC=CN1C` reordered as `c1ccn(C)c1`: ring N at 3, methyl at 4.
pub fn n_methylpyrrole() -> Molecule {
    build(
        &[
            (C, SP2, 1, 0),
            (C, SP2, 1, 0),
            (C, SP2, 1, 0),
            (N, SP2, 0, 0),
            (C, SP3, 3, 0),
            (C, SP2, 1, 0),
        ],
        &[
            (0, 1, S),
            (1, 2, D),
            (2, 3, S),
            (3, 4, S),
            (3, 5, S),
            (5, 0, D),
        ],
    )
}

/// `C1=CSC=N1`
pub fn thiazole() -> Molecule {
    build(
        &[
            (C, SP2, 1, 0),
            (C, SP2, 1, 0),
            (Element::S, SP2, 0, 0),
            (C, SP2, 1, 0),
            (N, SP2, 0, 0),
        ],
        &[(0, 1, D), (1, 2, S), (2, 3, S), (3, 4, D), (4, 0, S)],
    )
}

/// `C1=CC=C2NC=CC2=C1`: fusion atoms 3 and 7, NH at 4.
pub fn indole() -> Molecule {
    let mut atoms = [(C, SP2, 1, 0); 9];
    atoms[3] = (C, SP2, 0, 0);
    atoms[4] = (N, SP2, 1, 0);
    atoms[7] = (C, SP2, 0, 0);
    build(
        &atoms,
        &[
            (0, 1, D),
            (1, 2, S),
            (2, 3, D),
            (3, 4, S),
            (4, 5, S),
            (5, 6, D),
            (6, 7, S),
            (7, 3, S),
            (7, 8, D),
            (8, 0, S),
        ],
    )
}

/// `C1=CC=C2C=CC=CC2=C1`: fusion atoms 3 and 8. The Kekulé structure puts
/// all three double bonds of the first ring inside it.
pub fn naphthalene() -> Molecule {
    let mut atoms = [(C, SP2, 1, 0); 10];
    atoms[3] = (C, SP2, 0, 0);
    atoms[8] = (C, SP2, 0, 0);
    build(
        &atoms,
        &[
            (0, 1, D),
            (1, 2, S),
            (2, 3, D),
            (3, 4, S),
            (4, 5, D),
            (5, 6, S),
            (6, 7, D),
            (7, 8, S),
            (8, 3, S),
            (8, 9, D),
            (9, 0, S),
        ],
    )
}

/// `C1=CC2=CC=CC=CC2=C1`: five-ring atoms 0, 1, 2, 8, 9; fusion atoms 2
/// and 8.
pub fn azulene() -> Molecule {
    let mut atoms = [(C, SP2, 1, 0); 10];
    atoms[2] = (C, SP2, 0, 0);
    atoms[8] = (C, SP2, 0, 0);
    build(
        &atoms,
        &[
            (0, 1, D),
            (1, 2, S),
            (2, 3, D),
            (3, 4, S),
            (4, 5, D),
            (5, 6, S),
            (6, 7, D),
            (7, 8, S),
            (8, 2, S),
            (8, 9, D),
            (9, 0, S),
        ],
    )
}

/// `C1=CC=C1`
pub fn cyclobutadiene() -> Molecule {
    build(
        &[(C, SP2, 1, 0); 4],
        &[(0, 1, D), (1, 2, S), (2, 3, D), (3, 0, S)],
    )
}

/// `C1=CCC=C1`, methylene at atom 4.
pub fn cyclopentadiene() -> Molecule {
    let mut atoms = [(C, SP2, 1, 0); 5];
    atoms[4] = (C, SP3, 2, 0);
    build(&atoms, &[(0, 1, D), (1, 2, S), (2, 3, D), (3, 4, S), (4, 0, S)])
}

/// `[CH-]1C=CC=C1`
pub fn cyclopentadienide() -> Molecule {
    let mut atoms = [(C, SP2, 1, 0); 5];
    atoms[0] = (C, SP2, 1, -1);
    build(&atoms, &[(0, 1, S), (1, 2, D), (2, 3, S), (3, 4, D), (4, 0, S)])
}

/// `O=C1C=CC=CC=C1`
pub fn tropone() -> Molecule {
    let mut atoms = [(C, SP2, 1, 0); 8];
    atoms[0] = (O, SP2, 0, 0);
    atoms[1] = (C, SP2, 0, 0);
    build(
        &atoms,
        &[
            (0, 1, D),
            (1, 2, S),
            (2, 3, D),
            (3, 4, S),
            (4, 5, D),
            (5, 6, S),
            (6, 7, D),
            (7, 1, S),
        ],
    )
}

/// `[CH+]1C=CC=CC=C1`; the cationic carbon is typed planar.
pub fn tropylium() -> Molecule {
    let mut atoms = [(C, SP2, 1, 0); 7];
    atoms[0] = (C, Planar3, 1, 1);
    build(
        &atoms,
        &[
            (0, 1, S),
            (1, 2, D),
            (2, 3, S),
            (3, 4, D),
            (4, 5, S),
            (5, 6, D),
            (6, 0, S),
        ],
    )
}

/// `O=C1C=CC(=O)C=C1` (p-benzoquinone)
pub fn benzoquinone() -> Molecule {
    let mut atoms = [(C, SP2, 1, 0); 8];
    atoms[0] = (O, SP2, 0, 0);
    atoms[1] = (C, SP2, 0, 0);
    atoms[4] = (C, SP2, 0, 0);
    atoms[5] = (O, SP2, 0, 0);
    build(
        &atoms,
        &[
            (0, 1, D),
            (1, 2, S),
            (2, 3, D),
            (3, 4, S),
            (4, 5, D),
            (4, 6, S),
            (6, 7, D),
            (7, 1, S),
        ],
    )
}

/// `O=C1C=CC(=O)C2=CC=CC=C12` (1,4-naphthoquinone): quinone ring 0-4 and 9,
/// benzo ring 4-9, carbonyl oxygens 10 and 11.
pub fn naphthoquinone() -> Molecule {
    let mut atoms = [(C, SP2, 1, 0); 12];
    for idx in [0, 3, 4, 9] {
        atoms[idx] = (C, SP2, 0, 0);
    }
    atoms[10] = (O, SP2, 0, 0);
    atoms[11] = (O, SP2, 0, 0);
    build(
        &atoms,
        &[
            (0, 1, S),
            (1, 2, D),
            (2, 3, S),
            (3, 4, S),
            (4, 5, D),
            (5, 6, S),
            (6, 7, D),
            (7, 8, S),
            (8, 9, D),
            (9, 4, S),
            (9, 0, S),
            (0, 10, D),
            (3, 11, D),
        ],
    )
}

/// `O=C1C2=CC=CC=C2C(=O)C2=CC=CC=C12` (9,10-anthraquinone): carbonyl
/// carbons 0 and 7, benzo rings 1-6 and 8-13, oxygens 14 and 15.
pub fn anthraquinone() -> Molecule {
    let mut atoms = [(C, SP2, 1, 0); 16];
    for idx in [0, 1, 6, 7, 8, 13] {
        atoms[idx] = (C, SP2, 0, 0);
    }
    atoms[14] = (O, SP2, 0, 0);
    atoms[15] = (O, SP2, 0, 0);
    build(
        &atoms,
        &[
            (0, 1, S),
            (1, 2, D),
            (2, 3, S),
            (3, 4, D),
            (4, 5, S),
            (5, 6, D),
            (6, 1, S),
            (6, 7, S),
            (7, 8, S),
            (8, 9, D),
            (9, 10, S),
            (10, 11, D),
            (11, 12, S),
            (12, 13, D),
            (13, 8, S),
            (13, 0, S),
            (0, 14, D),
            (7, 15, D),
        ],
    )
}

/// `C1CCCC2=CC=CC=C12`: methylenes 0-3, benzene ring 4-9.
pub fn tetrahydronaphthalene() -> Molecule {
    let mut atoms = [(C, SP2, 1, 0); 10];
    for atom in atoms.iter_mut().take(4) {
        *atom = (C, SP3, 2, 0);
    }
    atoms[4] = (C, SP2, 0, 0);
    atoms[9] = (C, SP2, 0, 0);
    build(
        &atoms,
        &[
            (0, 1, S),
            (1, 2, S),
            (2, 3, S),
            (3, 4, S),
            (4, 5, D),
            (5, 6, S),
            (6, 7, D),
            (7, 8, S),
            (8, 9, D),
            (9, 4, S),
            (9, 0, S),
        ],
    )
}

/// Free-base porphine, C20H14N4.
///
/// Pyrrole rings A (0-4, NH at 0), B (6-10, N at 10), C (12-16, NH at 16)
/// and D (18-22, N at 22), joined by methine bridges 5, 11, 17 and 23.
/// Within each ring the alpha carbons come first and last before the
/// nitrogen: A is 0 N, 1 alpha, 2-3 beta, 4 alpha; B, C and D list alpha,
/// beta, beta, alpha, N.
pub fn porphine() -> Molecule {
    let mut atoms = [(C, SP2, 0, 0); 24];
    for beta in [2, 3, 7, 8, 13, 14, 19, 20] {
        atoms[beta] = (C, SP2, 1, 0);
    }
    for meso in [5, 11, 17, 23] {
        atoms[meso] = (C, SP2, 1, 0);
    }
    atoms[0] = (N, SP2, 1, 0);
    atoms[10] = (N, SP2, 0, 0);
    atoms[16] = (N, SP2, 1, 0);
    atoms[22] = (N, SP2, 0, 0);
    build(&atoms, &PORPHINE_BONDS)
}

const PORPHINE_BONDS: [(usize, usize, BondOrder); 28] = [
    (0, 1, S),
    (1, 2, D),
    (2, 3, S),
    (3, 4, D),
    (4, 0, S),
    (4, 5, S),
    (5, 6, D),
    (6, 7, S),
    (7, 8, D),
    (8, 9, S),
    (9, 10, D),
    (10, 6, S),
    (9, 11, S),
    (11, 12, D),
    (12, 13, S),
    (13, 14, D),
    (14, 15, S),
    (15, 16, S),
    (16, 12, S),
    (15, 17, D),
    (17, 18, S),
    (18, 19, S),
    (19, 20, D),
    (20, 21, S),
    (21, 22, S),
    (22, 18, D),
    (21, 23, D),
    (23, 1, S),
];

/// Two `n`-membered all-sp2 rings sharing one bond, with alternating double
/// bonds around the `2n - 2` perimeter.
///
/// Atoms are numbered along the perimeter; 0 and `n - 1` are the fusion
/// atoms.
pub fn fused_annulenes(n: usize) -> Molecule {
    let perimeter = 2 * n - 2;
    let atoms: Vec<_> = (0..perimeter)
        .map(|i| (C, SP2, if i == 0 || i == n - 1 { 0 } else { 1 }, 0))
        .collect();
    let mut bonds: Vec<_> = (0..perimeter)
        .map(|i| (i, (i + 1) % perimeter, if i % 2 == 0 { D } else { S }))
        .collect();
    bonds.push((0, n - 1, S));
    build(&atoms, &bonds)
}

/// Rewrites every ring bond as [`BondOrder::Aromatic`], the way aromatic
/// line notation arrives before kekulization. Exocyclic bonds keep their
/// order.
pub fn as_aromatic_input(mut mol: Molecule) -> Molecule {
    let rings = RingSet::sssr(&mol);
    for ring in rings.iter() {
        for &bond in ring.bonds() {
            mol.bond_mut(bond).order = BondOrder::Aromatic;
        }
    }
    mol
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn porphine_formula() {
        let mol = porphine();
        assert_eq!(mol.atom_count(), 24);
        assert_eq!(mol.bond_count(), 28);
        let hydrogens: u32 = mol.atoms().map(|a| mol.atom(a).hydrogen_count as u32).sum();
        assert_eq!(hydrogens, 14);
        let doubles = mol
            .bonds()
            .filter(|&b| mol.bond(b).order == BondOrder::Double)
            .count();
        assert_eq!(doubles, 11);
    }

    #[test]
    fn every_carbon_has_full_valence() {
        for mol in [
            benzene(),
            naphthalene(),
            azulene(),
            indole(),
            naphthoquinone(),
            anthraquinone(),
            porphine(),
            fused_annulenes(10),
        ] {
            for idx in mol.atoms() {
                let atom = mol.atom(idx);
                if atom.element != C {
                    continue;
                }
                let bonded: u8 = mol
                    .bonds_of(idx)
                    .map(|e| mol.bond(e).order.valence_contribution())
                    .sum();
                assert_eq!(bonded + atom.hydrogen_count, 4, "atom {}", idx.index());
            }
        }
    }

    #[test]
    fn fused_annulenes_shape() {
        let mol = fused_annulenes(14);
        assert_eq!(mol.atom_count(), 26);
        assert_eq!(mol.bond_count(), 27);
    }

    #[test]
    fn aromatic_input_keeps_exocyclic_orders() {
        let mol = as_aromatic_input(tropone());
        let carbonyl = mol.bond_between(NodeIndex::new(0), NodeIndex::new(1)).unwrap();
        assert_eq!(mol.bond(carbonyl).order, BondOrder::Double);
        let ring_bond = mol.bond_between(NodeIndex::new(2), NodeIndex::new(3)).unwrap();
        assert_eq!(mol.bond(ring_bond).order, BondOrder::Aromatic);
    }
}

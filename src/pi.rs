//! Pi-electron counting over a ring perimeter.
//!
//! Each ring atom contributes 0, 1 or 2 electrons to the cyclic pi system,
//! or interrupts it. Contributions are read from the atom's hybridization,
//! element, charge, hydrogen count and its bonds, both along the ring and
//! exocyclic.

use petgraph::graph::NodeIndex;

use crate::bond::BondOrder;
use crate::element::{charged_default_valence, charged_valence_electrons, Element};
use crate::mol::Mol;
use crate::ring::Ring;
use crate::traits::{
    HasAtomicNum, HasBondOrder, HasFormalCharge, HasHybridization, HasHydrogenCount,
};

/// Result of counting a ring's pi electrons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PiCount {
    /// Every ring atom takes part; total electrons on the perimeter.
    Conjugated(u32),
    /// `atom` interrupts the cyclic pi system.
    NotConjugated { atom: NodeIndex },
}

impl PiCount {
    pub fn electrons(self) -> Option<u32> {
        match self {
            PiCount::Conjugated(e) => Some(e),
            PiCount::NotConjugated { .. } => None,
        }
    }
}

/// Counts the pi electrons of `ring`, stopping at the first atom that
/// cannot conjugate.
pub fn pi_electrons<A, B>(mol: &Mol<A, B>, ring: &Ring) -> PiCount
where
    A: HasAtomicNum + HasFormalCharge + HasHydrogenCount + HasHybridization,
    B: HasBondOrder,
{
    let mut total = 0u32;
    for (i, &atom) in ring.atoms().iter().enumerate() {
        match atom_contribution(mol, ring, i) {
            Some(e) => total += e as u32,
            None => return PiCount::NotConjugated { atom },
        }
    }
    PiCount::Conjugated(total)
}

/// Electrons the atom at ring position `pos` donates to the ring, or `None`
/// if it breaks conjugation.
pub fn atom_contribution<A, B>(mol: &Mol<A, B>, ring: &Ring, pos: usize) -> Option<u8>
where
    A: HasAtomicNum + HasFormalCharge + HasHydrogenCount + HasHybridization,
    B: HasBondOrder,
{
    let idx = ring.atoms()[pos];
    let atom = mol.atom(idx);
    let (prev_bond, next_bond) = ring.ring_bonds_at(pos);
    let prev_order = mol.bond(prev_bond).bond_order();
    let next_order = mol.bond(next_bond).bond_order();

    if prev_order == BondOrder::Triple || next_order == BondOrder::Triple {
        return None;
    }
    // An in-ring double bond counts before typing is consulted, so an atom
    // typed SP or left Unset still contributes its half of the pi bond.
    if prev_order == BondOrder::Double || next_order == BondOrder::Double {
        return Some(1);
    }

    let hybridization = atom.hybridization();
    if !hybridization.is_trigonal() {
        return None;
    }

    let element = Element::from_atomic_num(atom.atomic_num())?;

    if let Some(partner) = exocyclic_double_partner(mol, ring, idx) {
        let withdraws = Element::from_atomic_num(mol.atom(partner).atomic_num())
            .is_some_and(|p| withdraws_pi_density(element, p));
        return if withdraws { None } else { Some(0) };
    }

    let charge = atom.formal_charge();
    let target = charged_default_valence(element, charge);
    let electrons = charged_valence_electrons(element, charge);
    let bonded: u8 = mol
        .bonds_of(idx)
        .map(|e| mol.bond(e).bond_order().valence_contribution())
        .sum::<u8>()
        .saturating_add(atom.hydrogen_count());

    if bonded < target {
        Some(1)
    } else if electrons >= target + 2 {
        Some(2)
    } else if electrons == target {
        Some(0)
    } else {
        None
    }
}

fn exocyclic_double_partner<A, B>(mol: &Mol<A, B>, ring: &Ring, idx: NodeIndex) -> Option<NodeIndex>
where
    B: HasBondOrder,
{
    mol.bonds_of(idx)
        .filter(|&e| !ring.contains_bond(e) && mol.bond(e).bond_order() == BondOrder::Double)
        .find_map(|e| {
            let (a, b) = mol.bond_endpoints(e)?;
            Some(if a == idx { b } else { a })
        })
}

/// Whether an exocyclic double bond from `ring_atom` to `partner` pulls
/// the pi pair out of the ring (carbonyl, thiocarbonyl, imine).
///
/// Only lone-pair-bearing acceptors more electronegative than the ring
/// atom qualify; C=C and bonds toward less electronegative atoms leave the
/// ring atom's p orbital free for conjugation.
pub fn withdraws_pi_density(ring_atom: Element, partner: Element) -> bool {
    const ACCEPTORS: [Element; 5] = [Element::N, Element::O, Element::S, Element::Se, Element::Te];
    ACCEPTORS.contains(&partner) && partner.electronegativity() > ring_atom.electronegativity()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ring::RingSet;
    use crate::templates;

    fn ring_count(mol: &Mol<crate::Atom, crate::Bond>) -> Vec<PiCount> {
        RingSet::sssr(mol).iter().map(|r| pi_electrons(mol, r)).collect()
    }

    #[test]
    fn benzene_six() {
        assert_eq!(ring_count(&templates::benzene()), vec![PiCount::Conjugated(6)]);
    }

    #[test]
    fn pyrrole_nitrogen_donates_lone_pair() {
        let mol = templates::pyrrole();
        let ring = &RingSet::sssr(&mol)[0];
        let pos = ring.atoms().iter().position(|a| a.index() == 0).unwrap();
        assert_eq!(atom_contribution(&mol, ring, pos), Some(2));
        assert_eq!(pi_electrons(&mol, ring), PiCount::Conjugated(6));
    }

    #[test]
    fn furan_and_thiophene_six() {
        assert_eq!(ring_count(&templates::furan()), vec![PiCount::Conjugated(6)]);
        assert_eq!(ring_count(&templates::thiophene()), vec![PiCount::Conjugated(6)]);
    }

    #[test]
    fn cyclobutadiene_four() {
        assert_eq!(ring_count(&templates::cyclobutadiene()), vec![PiCount::Conjugated(4)]);
    }

    #[test]
    fn tropylium_cation_center_gives_zero() {
        assert_eq!(ring_count(&templates::tropylium()), vec![PiCount::Conjugated(6)]);
    }

    #[test]
    fn tropone_carbonyl_breaks_ring() {
        let counts = ring_count(&templates::tropone());
        assert_eq!(
            counts,
            vec![PiCount::NotConjugated {
                atom: NodeIndex::new(1)
            }]
        );
    }

    #[test]
    fn quinone_not_conjugated() {
        let counts = ring_count(&templates::benzoquinone());
        assert_eq!(counts.len(), 1);
        assert_eq!(counts[0].electrons(), None);
    }

    #[test]
    fn methylene_carbon_breaks_ring() {
        let counts = ring_count(&templates::cyclopentadiene());
        assert_eq!(counts[0].electrons(), None);
    }

    #[test]
    fn cyclopentadienide_anion_six() {
        assert_eq!(
            ring_count(&templates::cyclopentadienide()),
            vec![PiCount::Conjugated(6)]
        );
    }

    #[test]
    fn unset_hybridization_without_double_bond_breaks_ring() {
        let mut mol = templates::pyrrole();
        mol.atom_mut(NodeIndex::new(0)).hybridization = crate::Hybridization::Unset;
        assert_eq!(ring_count(&mol)[0].electrons(), None);
    }

    #[test]
    fn unset_hybridization_with_double_bond_counts_one() {
        let mut mol = templates::benzene();
        for idx in 0..6 {
            mol.atom_mut(NodeIndex::new(idx)).hybridization = crate::Hybridization::Unset;
        }
        assert_eq!(ring_count(&mol), vec![PiCount::Conjugated(6)]);
    }

    #[test]
    fn in_ring_double_bond_precedes_typing() {
        let mut mol = templates::benzene();
        mol.atom_mut(NodeIndex::new(0)).hybridization = crate::Hybridization::SP;
        let ring = &RingSet::sssr(&mol)[0];
        let pos = ring.atoms().iter().position(|a| a.index() == 0).unwrap();
        assert_eq!(atom_contribution(&mol, ring, pos), Some(1));
        assert_eq!(pi_electrons(&mol, ring), PiCount::Conjugated(6));
    }

    #[test]
    fn aromatic_bond_orders_counted_from_valence() {
        assert_eq!(
            ring_count(&templates::as_aromatic_input(templates::pyridine())),
            vec![PiCount::Conjugated(6)]
        );
        assert_eq!(
            ring_count(&templates::as_aromatic_input(templates::pyrrole())),
            vec![PiCount::Conjugated(6)]
        );
    }

    #[test]
    fn exocyclic_acceptor_table() {
        assert!(withdraws_pi_density(Element::C, Element::O));
        assert!(withdraws_pi_density(Element::C, Element::N));
        assert!(withdraws_pi_density(Element::C, Element::S));
        assert!(!withdraws_pi_density(Element::C, Element::C));
        assert!(!withdraws_pi_density(Element::N, Element::C));
        assert!(!withdraws_pi_density(Element::O, Element::N));
    }
}

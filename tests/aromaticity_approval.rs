use hueckel::{
    detect_aromaticity, Atom, Bond, BondOrder, Element, Hybridization, Mol,
};
use petgraph::graph::{EdgeIndex, NodeIndex};
use serde::Deserialize;

#[derive(Deserialize)]
struct AtomEntry {
    symbol: String,
    hybridization: String,
    hydrogens: u8,
    #[serde(default)]
    charge: i8,
}

#[derive(Deserialize)]
struct MolEntry {
    name: String,
    atoms: Vec<AtomEntry>,
    bonds: Vec<(usize, usize, u8)>,
    aromatic_atoms: Vec<usize>,
    aromatic_bonds: Vec<usize>,
}

fn parse_hybridization(s: &str) -> Hybridization {
    match s {
        "SP" => Hybridization::SP,
        "SP2" => Hybridization::SP2,
        "SP3" => Hybridization::SP3,
        "Planar3" => Hybridization::Planar3,
        "Unset" => Hybridization::Unset,
        other => panic!("Unknown hybridization: {other}"),
    }
}

fn parse_order(order: u8) -> BondOrder {
    match order {
        1 => BondOrder::Single,
        2 => BondOrder::Double,
        3 => BondOrder::Triple,
        4 => BondOrder::Aromatic,
        other => panic!("Unknown bond order: {other}"),
    }
}

fn build(entry: &MolEntry) -> Mol<Atom, Bond> {
    let mut mol = Mol::new();
    for a in &entry.atoms {
        let element = Element::from_symbol(&a.symbol)
            .unwrap_or_else(|| panic!("{}: unknown element {}", entry.name, a.symbol));
        mol.add_atom(
            Atom::new(element, parse_hybridization(&a.hybridization))
                .with_hydrogens(a.hydrogens)
                .with_charge(a.charge),
        );
    }
    for &(a, b, order) in &entry.bonds {
        mol.add_bond(
            NodeIndex::new(a),
            NodeIndex::new(b),
            Bond::new(parse_order(order)),
        );
    }
    mol
}

#[test]
fn approval_aromaticity() {
    let data: Vec<MolEntry> =
        serde_json::from_str(include_str!("approval_data/aromaticity.json")).unwrap();

    let mut failures = Vec::new();
    for entry in &data {
        let mut mol = build(entry);
        let found = detect_aromaticity(&mut mol).unwrap();

        let atoms: Vec<usize> = (0..mol.atom_count())
            .filter(|&i| mol.atom(NodeIndex::new(i)).is_aromatic)
            .collect();
        let bonds: Vec<usize> = (0..mol.bond_count())
            .filter(|&i| mol.bond(EdgeIndex::new(i)).is_aromatic)
            .collect();

        if found != !entry.aromatic_atoms.is_empty()
            || atoms != entry.aromatic_atoms
            || bonds != entry.aromatic_bonds
        {
            failures.push(format!(
                "{}: atoms {:?} (expected {:?}), bonds {:?} (expected {:?})",
                entry.name, atoms, entry.aromatic_atoms, bonds, entry.aromatic_bonds
            ));
        }
    }

    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn approval_detection_is_idempotent() {
    let data: Vec<MolEntry> =
        serde_json::from_str(include_str!("approval_data/aromaticity.json")).unwrap();

    for entry in &data {
        let mut once = build(entry);
        detect_aromaticity(&mut once).unwrap();
        let mut twice = once.clone();
        detect_aromaticity(&mut twice).unwrap();
        for idx in once.atoms() {
            assert_eq!(
                once.atom(idx).is_aromatic,
                twice.atom(idx).is_aromatic,
                "{}",
                entry.name
            );
        }
    }
}

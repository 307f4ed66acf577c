use crate::atom::Hybridization;
use crate::bond::BondOrder;

pub trait HasAtomicNum {
    fn atomic_num(&self) -> u8;
}

pub trait HasFormalCharge {
    fn formal_charge(&self) -> i8;
}

pub trait HasHydrogenCount {
    fn hydrogen_count(&self) -> u8;
}

/// Hybridization as assigned by upstream atom typing.
pub trait HasHybridization {
    fn hybridization(&self) -> Hybridization;
}

/// Read/write access to the aromatic flag of an atom, bond or ring.
///
/// Perception only ever calls `set_aromatic(true)`.
pub trait HasAromaticity {
    fn is_aromatic(&self) -> bool;
    fn set_aromatic(&mut self, aromatic: bool);
}

pub trait HasBondOrder {
    fn bond_order(&self) -> BondOrder;
}

use crate::atom::Hybridization;
use crate::bond::BondOrder;
use crate::traits::*;

/// Attaches a hybridization to an atom type that does not carry one.
#[derive(Debug, Clone, PartialEq)]
pub struct WithHybridization<T> {
    pub inner: T,
    pub hybridization: Hybridization,
}

/// Attaches a writable aromatic flag to an atom or bond type.
#[derive(Debug, Clone, PartialEq)]
pub struct WithAromaticity<T> {
    pub inner: T,
    pub is_aromatic: bool,
}

impl<T> WithHybridization<T> {
    pub fn new(inner: T, hybridization: Hybridization) -> Self {
        Self {
            inner,
            hybridization,
        }
    }
}

impl<T> WithAromaticity<T> {
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            is_aromatic: false,
        }
    }
}

impl<T> HasHybridization for WithHybridization<T> {
    fn hybridization(&self) -> Hybridization {
        self.hybridization
    }
}

impl<T> HasAromaticity for WithAromaticity<T> {
    fn is_aromatic(&self) -> bool {
        self.is_aromatic
    }
    fn set_aromatic(&mut self, aromatic: bool) {
        self.is_aromatic = aromatic;
    }
}

macro_rules! forward {
    ($wrapper:ident, $trait:ident, $method:ident -> $ret:ty) => {
        impl<T: $trait> $trait for $wrapper<T> {
            fn $method(&self) -> $ret {
                self.inner.$method()
            }
        }
    };
}

forward!(WithHybridization, HasAtomicNum, atomic_num -> u8);
forward!(WithHybridization, HasFormalCharge, formal_charge -> i8);
forward!(WithHybridization, HasHydrogenCount, hydrogen_count -> u8);
forward!(WithAromaticity, HasAtomicNum, atomic_num -> u8);
forward!(WithAromaticity, HasFormalCharge, formal_charge -> i8);
forward!(WithAromaticity, HasHydrogenCount, hydrogen_count -> u8);
forward!(WithAromaticity, HasHybridization, hybridization -> Hybridization);
forward!(WithAromaticity, HasBondOrder, bond_order -> BondOrder);

impl<T: HasAromaticity> HasAromaticity for WithHybridization<T> {
    fn is_aromatic(&self) -> bool {
        self.inner.is_aromatic()
    }
    fn set_aromatic(&mut self, aromatic: bool) {
        self.inner.set_aromatic(aromatic);
    }
}

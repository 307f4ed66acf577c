use crate::element::Element;

/// Orbital hybridization of an atom, assigned by atom typing before
/// aromaticity perception runs.
///
/// `Planar3` is a trigonal planar center that is not a classical sp2
/// atom, such as the cationic carbon of the tropylium ion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Hybridization {
    SP,
    SP2,
    SP3,
    Planar3,
    /// No typing information. Never contributes pi electrons on its own.
    #[default]
    Unset,
}

impl Hybridization {
    /// Whether the atom has an unhybridized p orbital perpendicular to a
    /// ring plane.
    pub fn is_trigonal(self) -> bool {
        matches!(self, Hybridization::SP2 | Hybridization::Planar3)
    }
}

/// Default atom type for a molecular graph node.
///
/// Carries what the aromaticity engine reads: the element, charge and
/// implicit hydrogen count from the structure, the hybridization from
/// upstream typing, and the aromatic flag it writes.
///
/// # Examples
///
/// ```
/// use hueckel::{Atom, Element, Hybridization};
///
/// let nitrogen = Atom::new(Element::N, Hybridization::SP2).with_hydrogens(1);
/// assert_eq!(nitrogen.hydrogen_count, 1);
/// assert!(!nitrogen.is_aromatic);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub element: Element,
    /// Formal charge in elementary charge units.
    pub formal_charge: i8,
    /// Number of implicit (suppressed) hydrogens.
    pub hydrogen_count: u8,
    pub hybridization: Hybridization,
    /// Whether this atom lies on an aromatic ring. Initially false.
    pub is_aromatic: bool,
}

impl Atom {
    pub fn new(element: Element, hybridization: Hybridization) -> Self {
        Self {
            element,
            formal_charge: 0,
            hydrogen_count: 0,
            hybridization,
            is_aromatic: false,
        }
    }

    pub fn with_charge(mut self, formal_charge: i8) -> Self {
        self.formal_charge = formal_charge;
        self
    }

    pub fn with_hydrogens(mut self, hydrogen_count: u8) -> Self {
        self.hydrogen_count = hydrogen_count;
        self
    }
}

impl crate::traits::HasAtomicNum for Atom {
    fn atomic_num(&self) -> u8 {
        self.element.atomic_num()
    }
}

impl crate::traits::HasFormalCharge for Atom {
    fn formal_charge(&self) -> i8 {
        self.formal_charge
    }
}

impl crate::traits::HasHydrogenCount for Atom {
    fn hydrogen_count(&self) -> u8 {
        self.hydrogen_count
    }
}

impl crate::traits::HasHybridization for Atom {
    fn hybridization(&self) -> Hybridization {
        self.hybridization
    }
}

impl crate::traits::HasAromaticity for Atom {
    fn is_aromatic(&self) -> bool {
        self.is_aromatic
    }

    fn set_aromatic(&mut self, aromatic: bool) {
        self.is_aromatic = aromatic;
    }
}

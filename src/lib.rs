pub mod aromaticity;
pub mod atom;
pub mod bond;
pub mod config;
pub mod element;
pub mod error;
pub mod flags;
pub mod hueckel;
pub mod mol;
pub mod pi;
pub mod ring;
pub mod templates;
pub mod traits;
pub mod wrappers;

pub use aromaticity::{detect_aromaticity, AromaticityDetector};
pub use atom::{Atom, Hybridization};
pub use bond::{Bond, BondOrder};
pub use config::{DetectorConfig, RingPerception};
pub use element::Element;
pub use error::AromaticityError;
pub use flags::{aromatic_atom_count, aromatic_bond_count, mark_aromatic};
pub use hueckel::{is_huckel, satisfies_huckel};
pub use mol::Mol;
pub use pi::{atom_contribution, pi_electrons, PiCount};
pub use ring::{mark_aromatic_rings, Ring, RingSet};
pub use traits::{
    HasAromaticity, HasAtomicNum, HasBondOrder, HasFormalCharge, HasHybridization,
    HasHydrogenCount,
};
pub use wrappers::{WithAromaticity, WithHybridization};

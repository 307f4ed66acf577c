//! Error types for aromaticity perception.
//!
//! Perception is a pure computation, so the only failures are structural:
//! a graph that violates the invariants ring perception relies on. Missing
//! typing information is never an error; such atoms simply do not
//! conjugate.

use thiserror::Error;

/// Structural integrity failures, found while building the graph or before
/// perception starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AromaticityError {
    /// A bond joins an atom to itself.
    #[error("bond forms a self-loop on atom {atom}")]
    SelfLoop {
        /// Index of the offending atom.
        atom: usize,
    },

    /// A bond whose endpoints do not resolve to atoms of the molecule, as
    /// rejected by [`Mol::try_add_bond`](crate::Mol::try_add_bond).
    #[error("bond {bond} references an atom outside the molecule")]
    DanglingBond {
        /// Index of the offending bond.
        bond: usize,
    },
}

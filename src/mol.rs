use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::error::AromaticityError;

/// Molecular graph: atoms are nodes, bonds are edges.
///
/// Generic over the atom and bond payloads so callers can run perception on
/// their own types by implementing the accessor traits in
/// [`traits`](crate::traits).
pub struct Mol<A, B> {
    graph: UnGraph<A, B>,
}

impl<A, B> Mol<A, B> {
    pub fn new() -> Self {
        Self {
            graph: UnGraph::default(),
        }
    }

    pub fn graph(&self) -> &UnGraph<A, B> {
        &self.graph
    }

    pub fn atom(&self, idx: NodeIndex) -> &A {
        &self.graph[idx]
    }

    pub fn atom_mut(&mut self, idx: NodeIndex) -> &mut A {
        &mut self.graph[idx]
    }

    pub fn bond(&self, idx: EdgeIndex) -> &B {
        &self.graph[idx]
    }

    pub fn bond_mut(&mut self, idx: EdgeIndex) -> &mut B {
        &mut self.graph[idx]
    }

    pub fn add_atom(&mut self, atom: A) -> NodeIndex {
        self.graph.add_node(atom)
    }

    /// Adds a bond between two existing atoms.
    ///
    /// # Panics
    ///
    /// Panics if either index does not belong to this molecule.
    pub fn add_bond(&mut self, a: NodeIndex, b: NodeIndex, bond: B) -> EdgeIndex {
        self.graph.add_edge(a, b, bond)
    }

    /// Adds a bond, rejecting endpoints outside this molecule and bonds
    /// from an atom to itself.
    pub fn try_add_bond(
        &mut self,
        a: NodeIndex,
        b: NodeIndex,
        bond: B,
    ) -> Result<EdgeIndex, AromaticityError> {
        let n = self.atom_count();
        if a.index() >= n || b.index() >= n {
            return Err(AromaticityError::DanglingBond {
                bond: self.bond_count(),
            });
        }
        if a == b {
            return Err(AromaticityError::SelfLoop { atom: a.index() });
        }
        Ok(self.graph.add_edge(a, b, bond))
    }

    pub fn atom_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn bond_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn neighbors(&self, idx: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors(idx)
    }

    pub fn bonds_of(&self, idx: NodeIndex) -> impl Iterator<Item = EdgeIndex> + '_ {
        self.graph.edges(idx).map(|e| e.id())
    }

    pub fn atoms(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    pub fn bonds(&self) -> impl Iterator<Item = EdgeIndex> + '_ {
        self.graph.edge_indices()
    }

    pub fn bond_between(&self, a: NodeIndex, b: NodeIndex) -> Option<EdgeIndex> {
        self.graph.find_edge(a, b)
    }

    pub fn bond_endpoints(&self, idx: EdgeIndex) -> Option<(NodeIndex, NodeIndex)> {
        self.graph.edge_endpoints(idx)
    }

    /// Explicit degree: number of graph neighbors, hydrogens excluded.
    pub fn degree(&self, idx: NodeIndex) -> usize {
        self.graph.edges(idx).count()
    }

    /// Checks that no bond joins an atom to itself. Endpoints are always
    /// atoms of this molecule; [`add_bond`](Self::add_bond) panics and
    /// [`try_add_bond`](Self::try_add_bond) errors otherwise.
    pub fn validate(&self) -> Result<(), AromaticityError> {
        match self.graph.edge_references().find(|e| e.source() == e.target()) {
            Some(e) => Err(AromaticityError::SelfLoop {
                atom: e.source().index(),
            }),
            None => Ok(()),
        }
    }
}

impl<A: Clone, B: Clone> Clone for Mol<A, B> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph.clone(),
        }
    }
}

impl<A, B> Default for Mol<A, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: std::fmt::Debug, B: std::fmt::Debug> std::fmt::Debug for Mol<A, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mol")
            .field("atom_count", &self.atom_count())
            .field("bond_count", &self.bond_count())
            .finish()
    }
}

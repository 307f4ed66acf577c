use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::mol::Mol;

/// A set of bonds stored as a bit vector indexed by `EdgeIndex`.
///
/// Cycles are elements of the GF(2) cycle space; the symmetric difference
/// of two cycles sharing a bond path is the cycle around both.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct EdgeSet {
    words: Vec<u64>,
}

impl EdgeSet {
    pub(crate) fn with_capacity(num_edges: usize) -> Self {
        Self {
            words: vec![0; num_edges.div_ceil(64)],
        }
    }

    pub(crate) fn from_bonds(bonds: &[EdgeIndex], num_edges: usize) -> Self {
        let mut set = Self::with_capacity(num_edges);
        for &bond in bonds {
            set.insert(bond);
        }
        set
    }

    pub(crate) fn insert(&mut self, bond: EdgeIndex) {
        let idx = bond.index();
        self.words[idx / 64] |= 1u64 << (idx % 64);
    }

    pub(crate) fn contains(&self, bond: EdgeIndex) -> bool {
        let idx = bond.index();
        self.words
            .get(idx / 64)
            .is_some_and(|w| w & (1u64 << (idx % 64)) != 0)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    pub(crate) fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub(crate) fn intersects(&self, other: &EdgeSet) -> bool {
        self.words
            .iter()
            .zip(other.words.iter())
            .any(|(a, b)| a & b != 0)
    }

    pub(crate) fn xor(&self, other: &EdgeSet) -> EdgeSet {
        let mut out = self.clone();
        out.xor_in_place(other);
        out
    }

    pub(crate) fn xor_in_place(&mut self, other: &EdgeSet) {
        for (aw, bw) in self.words.iter_mut().zip(other.words.iter()) {
            *aw ^= *bw;
        }
    }

    pub(crate) fn leading_bit(&self) -> Option<usize> {
        for (i, &word) in self.words.iter().enumerate() {
            if word != 0 {
                return Some(i * 64 + word.trailing_zeros() as usize);
            }
        }
        None
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = EdgeIndex> + '_ {
        self.words.iter().enumerate().flat_map(|(i, &word)| {
            (0..64)
                .filter(move |bit| word & (1u64 << bit) != 0)
                .map(move |bit| EdgeIndex::new(i * 64 + bit))
        })
    }

    /// Walks the bonds as a single simple cycle and returns its atoms in
    /// order, or `None` if the set is not exactly one cycle of size >= 3.
    pub(crate) fn to_cycle<A, B>(&self, mol: &Mol<A, B>) -> Option<Vec<NodeIndex>> {
        let num_bonds = self.len();
        if num_bonds < 3 {
            return None;
        }
        let mut adj: Vec<Vec<NodeIndex>> = vec![vec![]; mol.atom_count()];
        for edge in self.iter() {
            let (u, v) = mol.bond_endpoints(edge)?;
            adj[u.index()].push(v);
            adj[v.index()].push(u);
        }
        if adj.iter().any(|nbs| !nbs.is_empty() && nbs.len() != 2) {
            return None;
        }

        let start = adj.iter().position(|nbs| !nbs.is_empty())?;
        let start = NodeIndex::new(start);
        let mut ring = vec![start];
        let mut prev = start;
        let mut cur = adj[start.index()][0];
        while cur != start {
            ring.push(cur);
            let nbs = &adj[cur.index()];
            let next = if nbs[0] == prev { nbs[1] } else { nbs[0] };
            prev = cur;
            cur = next;
            if ring.len() > num_bonds {
                return None;
            }
        }

        // A shorter walk means the bonds split into several cycles.
        (ring.len() == num_bonds).then_some(ring)
    }
}

/// Incremental GF(2) basis of cycle bit vectors, kept in reduced form.
#[derive(Debug, Default)]
pub(crate) struct CycleBasis {
    rows: Vec<EdgeSet>,
}

impl CycleBasis {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            rows: Vec::with_capacity(n),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }

    fn reduce(&self, candidate: &EdgeSet) -> EdgeSet {
        let mut v = candidate.clone();
        for row in &self.rows {
            if let Some(p) = row.leading_bit() {
                if v.contains(EdgeIndex::new(p)) {
                    v.xor_in_place(row);
                }
            }
        }
        v
    }

    /// Adds `candidate` if it is independent of the rows so far.
    pub(crate) fn try_add(&mut self, candidate: &EdgeSet) -> bool {
        let v = self.reduce(candidate);
        if v.is_empty() {
            return false;
        }
        self.rows.push(v);
        true
    }
}

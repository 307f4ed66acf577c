use crate::pi::PiCount;

/// Hückel's rule: `4n + 2` pi electrons for some `n >= 0`.
///
/// Counts of `4n` (cyclobutadiene, cyclooctatetraene) are simply not
/// aromatic; no separate anti-aromatic verdict is produced.
pub fn is_huckel(pi_electrons: u32) -> bool {
    pi_electrons >= 2 && (pi_electrons - 2) % 4 == 0
}

/// Applies the rule to a ring's count. An interrupted pi system is never
/// aromatic, whatever its partial count.
pub fn satisfies_huckel(count: PiCount) -> bool {
    count.electrons().is_some_and(is_huckel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use petgraph::graph::NodeIndex;

    #[test]
    fn huckel_rule() {
        assert!(!is_huckel(0));
        assert!(!is_huckel(1));
        assert!(is_huckel(2));
        assert!(!is_huckel(4));
        assert!(is_huckel(6));
        assert!(!is_huckel(8));
        assert!(is_huckel(10));
        assert!(is_huckel(14));
        assert!(is_huckel(18));
        assert!(!is_huckel(16));
    }

    #[test]
    fn interrupted_ring_never_aromatic() {
        assert!(satisfies_huckel(PiCount::Conjugated(6)));
        assert!(!satisfies_huckel(PiCount::Conjugated(4)));
        assert!(!satisfies_huckel(PiCount::NotConjugated {
            atom: NodeIndex::new(0)
        }));
    }
}

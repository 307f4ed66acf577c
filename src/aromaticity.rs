use crate::config::{DetectorConfig, RingPerception};
use crate::error::AromaticityError;
use crate::flags::mark_aromatic;
use crate::hueckel::satisfies_huckel;
use crate::mol::Mol;
use crate::pi::{pi_electrons, PiCount};
use crate::ring::fused::{ring_unions, UnionBudget};
use crate::ring::{Ring, RingSet};
use crate::traits::{
    HasAromaticity, HasAtomicNum, HasBondOrder, HasFormalCharge, HasHybridization,
    HasHydrogenCount,
};

/// Hückel aromaticity detector.
///
/// Scores each perceived ring with [`pi_electrons`] and the 4n+2 rule and
/// flags aromatic rings, atoms and bonds on the molecule. Under
/// [`RingPerception::Sssr`], rings that fail alone but consist of trigonal
/// atoms are retried as unions with their fused neighbors, which is how
/// azulene's 10-membered perimeter and porphyrin's 18-membered pathway are
/// found.
///
/// # Examples
///
/// ```
/// use hueckel::{templates, AromaticityDetector, DetectorConfig};
///
/// let mut mol = templates::azulene();
/// let detector = AromaticityDetector::new(DetectorConfig::default());
/// assert!(detector.detect(&mut mol).unwrap());
/// assert!(mol.atoms().all(|a| mol.atom(a).is_aromatic));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AromaticityDetector {
    config: DetectorConfig,
}

/// Runs [`AromaticityDetector`] with the default configuration and returns
/// whether any aromatic ring was found.
pub fn detect_aromaticity<A, B>(mol: &mut Mol<A, B>) -> Result<bool, AromaticityError>
where
    A: HasAtomicNum + HasFormalCharge + HasHydrogenCount + HasHybridization + HasAromaticity,
    B: HasBondOrder + HasAromaticity,
{
    AromaticityDetector::default().detect(mol)
}

impl AromaticityDetector {
    pub fn new(config: DetectorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Flags aromatic atoms and bonds; true iff at least one ring or ring
    /// union is aromatic.
    pub fn detect<A, B>(&self, mol: &mut Mol<A, B>) -> Result<bool, AromaticityError>
    where
        A: HasAtomicNum + HasFormalCharge + HasHydrogenCount + HasHybridization + HasAromaticity,
        B: HasBondOrder + HasAromaticity,
    {
        Ok(self.perceive(mol)?.aromatic_count() > 0)
    }

    /// Like [`detect`](Self::detect), but returns every scored ring: the
    /// perceived rings with their verdicts, followed by the aromatic ring
    /// unions.
    pub fn perceive<A, B>(&self, mol: &mut Mol<A, B>) -> Result<RingSet, AromaticityError>
    where
        A: HasAtomicNum + HasFormalCharge + HasHydrogenCount + HasHybridization + HasAromaticity,
        B: HasBondOrder + HasAromaticity,
    {
        mol.validate()?;

        let base = match self.config.ring_perception {
            RingPerception::Sssr => RingSet::sssr(mol),
            RingPerception::AllRings { max_size } => RingSet::all_rings(mol, max_size),
        };

        let mut scored = base.clone();
        let mut seeds = Vec::new();
        for (i, ring) in scored.iter_mut().enumerate() {
            if score(mol, ring) {
                mark_aromatic(mol, ring);
            } else if all_trigonal(mol, ring) {
                seeds.push(i);
            }
        }

        let retry_unions = self.config.ring_perception == RingPerception::Sssr
            && self.config.max_union_rings > 1;
        if retry_unions && !seeds.is_empty() {
            let mut budget =
                UnionBudget::new(self.config.max_union_rings, self.config.max_union_candidates);
            for seed in seeds {
                for mut union in ring_unions(mol, &base, seed, &mut budget) {
                    if score(mol, &union) {
                        mark_aromatic(mol, &mut union);
                        scored.push(union);
                    }
                }
                if budget.is_exhausted() {
                    log::warn!(
                        "ring union search stopped after {} candidates; results may be incomplete",
                        self.config.max_union_candidates
                    );
                    break;
                }
            }
        }

        log::debug!(
            "{} of {} scored rings aromatic ({} perceived)",
            scored.aromatic_count(),
            scored.len(),
            base.len()
        );
        Ok(scored)
    }
}

fn score<A, B>(mol: &Mol<A, B>, ring: &Ring) -> bool
where
    A: HasAtomicNum + HasFormalCharge + HasHydrogenCount + HasHybridization,
    B: HasBondOrder,
{
    let count = pi_electrons(mol, ring);
    let aromatic = satisfies_huckel(count);
    match count {
        PiCount::Conjugated(e) => {
            log::debug!("{}-ring: {} pi electrons, aromatic: {}", ring.size(), e, aromatic)
        }
        PiCount::NotConjugated { atom } => {
            log::debug!("{}-ring: conjugation broken at atom {}", ring.size(), atom.index())
        }
    }
    aromatic
}

fn all_trigonal<A: HasHybridization, B>(mol: &Mol<A, B>, ring: &Ring) -> bool {
    ring.atoms()
        .iter()
        .all(|&a| mol.atom(a).hybridization().is_trigonal())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::{aromatic_atom_count, aromatic_bond_count};
    use crate::templates;
    use petgraph::graph::NodeIndex;

    #[test]
    fn benzene_all_aromatic() {
        let mut mol = templates::benzene();
        assert!(detect_aromaticity(&mut mol).unwrap());
        assert_eq!(aromatic_atom_count(&mol), 6);
        assert_eq!(aromatic_bond_count(&mol), 6);
    }

    #[test]
    fn acyclic_sets_nothing() {
        let mut mol = templates::chain(6);
        assert!(!detect_aromaticity(&mut mol).unwrap());
        assert_eq!(aromatic_atom_count(&mol), 0);
        assert_eq!(aromatic_bond_count(&mol), 0);
    }

    #[test]
    fn naphthalene_second_ring_via_union() {
        let mut mol = templates::naphthalene();
        let rings = AromaticityDetector::default().perceive(&mut mol).unwrap();
        let verdicts: Vec<(usize, bool)> =
            rings.iter().map(|r| (r.size(), r.is_aromatic)).collect();
        assert_eq!(verdicts, vec![(6, true), (6, false), (10, true)]);
        assert_eq!(aromatic_atom_count(&mol), 10);
        assert_eq!(aromatic_bond_count(&mol), 11);
    }

    #[test]
    fn union_search_disabled() {
        let mut mol = templates::naphthalene();
        let config = DetectorConfig {
            max_union_rings: 1,
            ..DetectorConfig::default()
        };
        assert!(AromaticityDetector::new(config).detect(&mut mol).unwrap());
        assert_eq!(aromatic_atom_count(&mol), 6);
    }

    #[test]
    fn self_loop_is_structural_error() {
        let mut mol = templates::benzene();
        let a = NodeIndex::new(0);
        mol.add_bond(a, a, crate::Bond::default());
        assert_eq!(
            detect_aromaticity(&mut mol),
            Err(AromaticityError::SelfLoop { atom: 0 })
        );
        assert_eq!(aromatic_atom_count(&mol), 0);
    }

    #[test]
    fn sp3_ring_is_not_a_union_seed() {
        let mut mol = templates::tetrahydronaphthalene();
        let rings = AromaticityDetector::default().perceive(&mut mol).unwrap();
        assert_eq!(rings.len(), 2);
        assert_eq!(rings.aromatic_count(), 1);
        assert_eq!(aromatic_atom_count(&mol), 6);
    }
}

/// Which rings the detector scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RingPerception {
    /// Smallest set of smallest rings, with fused-union retries for rings
    /// that fail on their own.
    #[default]
    Sssr,
    /// Every simple cycle up to `max_size` atoms, scored directly.
    AllRings { max_size: usize },
}

#[derive(Debug, Clone)]
pub struct DetectorConfig {
    pub ring_perception: RingPerception,
    /// Largest number of SSSR rings folded into one union. `1` disables the
    /// fused-ring fallback.
    pub max_union_rings: usize,
    /// Upper bound on distinct unions examined in one pass.
    pub max_union_candidates: usize,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            ring_perception: RingPerception::Sssr,
            max_union_rings: 3,
            max_union_candidates: 1024,
        }
    }
}

// ============================================================
// Layer 4 — Train/Validation/Test Router
// ============================================================
// Decides, independently for each chunk, which partition it
// goes to. One uniform draw in [0, 1) per chunk is compared
// against the cumulative ratios (see domain::partition).
//
// Nothing here owns a random generator: the caller passes one
// in. Production code hands over an entropy-seeded StdRng,
// tests hand over StdRng::seed_from_u64 so the routing is
// reproducible.
//
// Reference: rand crate documentation (Rng::gen)

use rand::Rng;

use crate::domain::partition::{Partition, SplitRatios};

#[derive(Debug, Clone, Copy)]
pub struct PartitionRouter {
    ratios: SplitRatios,
}

impl PartitionRouter {
    pub fn new(ratios: SplitRatios) -> Self {
        Self { ratios }
    }

    /// Draw from `rng` and pick a partition.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Partition {
        // gen::<f64>() is uniform over [0, 1)
        let draw: f64 = rng.gen();
        self.ratios.partition_for(draw)
    }
}

impl Default for PartitionRouter {
    fn default() -> Self {
        Self::new(SplitRatios::default())
    }
}

// ============================================================
// Layer 3 — Output Partitions
// ============================================================
// Every chunk lands in exactly one of three partitions:
//
//   Train       →  <output>/train/<author>/...
//   Validation  →  <output>/val/<author>/...
//   Test        →  <output>/test/<author>/...
//
// The partition is picked per chunk from a single uniform draw
// in [0, 1) compared against cumulative ratios:
//
//   0.0 ───────────── 0.8 ──── 0.9 ──── 1.0
//        Train            Val      Test
//
// Only the train and validation ratios are stored; test gets
// whatever probability mass is left.
//
// Reference: Rust Book §6 (Enums and Pattern Matching)

use anyhow::{bail, Result};
use std::fmt;

/// One of the three output destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Partition {
    Train,
    Validation,
    Test,
}

impl Partition {
    /// All partitions, in the order their directories are created.
    pub const ALL: [Partition; 3] = [Partition::Train, Partition::Validation, Partition::Test];

    /// Directory name of this partition under the output root.
    pub fn dir_name(self) -> &'static str {
        match self {
            Partition::Train      => "train",
            Partition::Validation => "val",
            Partition::Test       => "test",
        }
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Probabilities of routing a chunk to train and validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitRatios {
    pub train:      f64,
    pub validation: f64,
}

impl SplitRatios {
    pub fn new(train: f64, validation: f64) -> Self {
        Self { train, validation }
    }

    /// Probability mass left over for the test partition.
    pub fn test(&self) -> f64 {
        (1.0 - self.train - self.validation).max(0.0)
    }

    /// Reject ratios that do not describe a probability split.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("train", self.train), ("validation", self.validation)] {
            if !(0.0..=1.0).contains(&value) {
                bail!("{name} ratio must be within [0, 1], got {value}");
            }
        }
        if self.train + self.validation > 1.0 + f64::EPSILON {
            bail!(
                "train + validation ratios must not exceed 1, got {} + {}",
                self.train,
                self.validation
            );
        }
        Ok(())
    }

    /// Map a uniform draw in [0, 1) to a partition.
    pub fn partition_for(&self, draw: f64) -> Partition {
        if draw < self.train {
            Partition::Train
        } else if draw < self.train + self.validation {
            Partition::Validation
        } else {
            Partition::Test
        }
    }
}

impl Default for SplitRatios {
    /// 80% train, 10% validation, 10% test.
    fn default() -> Self {
        Self::new(0.8, 0.1)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dir_names() {
        assert_eq!(Partition::Train.dir_name(), "train");
        assert_eq!(Partition::Validation.dir_name(), "val");
        assert_eq!(Partition::Test.to_string(), "test");
    }

    #[test]
    fn test_default_thresholds() {
        let ratios = SplitRatios::default();
        assert_eq!(ratios.partition_for(0.0), Partition::Train);
        assert_eq!(ratios.partition_for(0.79), Partition::Train);
        assert_eq!(ratios.partition_for(0.8), Partition::Validation);
        assert_eq!(ratios.partition_for(0.89), Partition::Validation);
        assert_eq!(ratios.partition_for(0.9), Partition::Test);
        assert_eq!(ratios.partition_for(0.999_999), Partition::Test);
    }

    #[test]
    fn test_remaining_mass_goes_to_test() {
        assert!((SplitRatios::default().test() - 0.1).abs() < 1e-9);
        assert_eq!(SplitRatios::new(0.5, 0.5).test(), 0.0);
    }

    #[test]
    fn test_validate() {
        assert!(SplitRatios::default().validate().is_ok());
        assert!(SplitRatios::new(1.0, 0.0).validate().is_ok());
        assert!(SplitRatios::new(0.9, 0.2).validate().is_err());
        assert!(SplitRatios::new(-0.1, 0.1).validate().is_err());
        assert!(SplitRatios::new(0.5, 1.5).validate().is_err());
    }
}

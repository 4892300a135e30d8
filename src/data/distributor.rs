// ============================================================
// Layer 4 — Chunk Distributor
// ============================================================
// Walks an author's aggregated tokens chunk by chunk and sends
// every chunk to a randomly chosen partition:
//
//   aggregated tokens
//       │
//       ▼
//   Chunker            → fixed windows, indices 0, 1, 2, ...
//       │
//       ▼
//   PartitionRouter    → train / val / test per chunk
//       │
//       ▼
//   ChunkSink          → one file per chunk
//
// The sink is asked to prepare all three partitions for the
// author up front, so an author always ends up with a directory
// in every partition, even an empty one. The test partition
// directory is what later runs use to skip finished authors.
//
// Reference: Rust Book §10 (Generic Types and Trait Bounds)

use anyhow::Result;
use rand::Rng;

use crate::data::chunker::Chunker;
use crate::data::splitter::PartitionRouter;
use crate::domain::partition::Partition;
use crate::domain::traits::ChunkSink;

/// Log a progress line every this many chunks.
const PROGRESS_EVERY: usize = 100;

/// How many chunks of one author went to each partition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DistributionSummary {
    pub train:      usize,
    pub validation: usize,
    pub test:       usize,
}

impl DistributionSummary {
    pub fn record(&mut self, partition: Partition) {
        match partition {
            Partition::Train      => self.train += 1,
            Partition::Validation => self.validation += 1,
            Partition::Test       => self.test += 1,
        }
    }

    pub fn count(&self, partition: Partition) -> usize {
        match partition {
            Partition::Train      => self.train,
            Partition::Validation => self.validation,
            Partition::Test       => self.test,
        }
    }

    /// Total number of chunks written
    pub fn total(&self) -> usize {
        self.train + self.validation + self.test
    }
}

pub struct Distributor {
    chunker: Chunker,
    router:  PartitionRouter,
}

impl Distributor {
    pub fn new(chunker: Chunker, router: PartitionRouter) -> Self {
        Self { chunker, router }
    }

    /// Chunk `tokens`, route each chunk and write it to `sink`.
    ///
    /// # Panics
    /// Panics if `tokens.len()` is not a multiple of the chunk length.
    pub fn distribute<S, R>(
        &self,
        author: &str,
        tokens: &[String],
        sink:   &mut S,
        rng:    &mut R,
    ) -> Result<DistributionSummary>
    where
        S: ChunkSink + ?Sized,
        R: Rng + ?Sized,
    {
        tracing::info!("Distributing chunks into dirs for {}", author);
        let chunks = self.chunker.chunks(author, tokens);
        sink.prepare(author)?;

        let mut summary = DistributionSummary::default();

        for chunk in chunks {
            let partition = self.router.choose(rng);
            sink.write(partition, &chunk)?;
            summary.record(partition);

            let done = chunk.index + 1;
            if done % PROGRESS_EVERY == 0 {
                tracing::info!("At index {}...", done);
            }
        }

        tracing::info!(
            "Done. Total {} chunks (of {} words) created for {} (train {}, val {}, test {})",
            summary.total(),
            self.chunker.chunk_length(),
            author,
            summary.count(Partition::Train),
            summary.count(Partition::Validation),
            summary.count(Partition::Test)
        );
        Ok(summary)
    }
}

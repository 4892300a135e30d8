// ============================================================
// Layer 2 — SplitUseCase
// ============================================================
// Runs the full corpus split:
//
//   Step 1: Validate the configuration
//   Step 2: Discover authors in the corpus          (Layer 4)
//   Step 3: Discover authors already in test/       (Layer 4)
//   Step 4: For every remaining author:
//             a. load its .txt documents            (Layer 4)
//             b. aggregate trimmed tokens           (Layer 4)
//             c. distribute chunks to partitions    (Layer 4 → 5)
//   Step 5: Report the authors that failed
//
// Failures in Steps 1-3 end the run. A failure inside Step 4
// only affects that author: it is logged, remembered, and the
// next author is processed. Nothing is retried; a failed
// author's partial output stays on disk and must be removed by
// hand before the author can be picked up again.
//
// Reference: Rust Book §9 (Recoverable Errors with Result)
//            Rust Book §13 (Iterators and Closures)

use anyhow::{bail, Result};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::{collections::BTreeSet, path::PathBuf};

use crate::data::{
    aggregator::Aggregator,
    chunker::Chunker,
    discovery::{discover_authors, discover_processed_authors},
    distributor::{DistributionSummary, Distributor},
    loader::TextFileLoader,
    splitter::PartitionRouter,
};
use crate::domain::partition::{Partition, SplitRatios};
use crate::domain::traits::{ChunkSink, TextSource};
use crate::infra::chunk_store::FsChunkStore;

/// Partition whose author directories mark an author as done.
/// Test is the smallest partition, so it is the cheapest to list.
pub const REFERENCE_PARTITION: Partition = Partition::Test;

// ─── Split Configuration ─────────────────────────────────────────────────────
// Everything a run depends on. Defaults reproduce the standard
// corpus layout: Gutenberg/ in, data/ out, trim 300, chunk 150,
// 80/10/10 split, unseeded randomness.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitConfig {
    pub source_dir:   PathBuf,
    pub output_dir:   PathBuf,
    pub trim_margin:  usize,
    pub chunk_length: usize,
    pub ratios:       SplitRatios,
    pub seed:         Option<u64>,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            source_dir:   PathBuf::from("Gutenberg"),
            output_dir:   PathBuf::from("data"),
            trim_margin:  300,
            chunk_length: 150,
            ratios:       SplitRatios::default(),
            seed:         None,
        }
    }
}

impl SplitConfig {
    pub fn validate(&self) -> Result<()> {
        if self.chunk_length == 0 {
            bail!("chunk length must be positive");
        }
        if self.trim_margin.checked_mul(4).is_none() {
            bail!("trim margin {} is too large", self.trim_margin);
        }
        self.ratios.validate()
    }
}

// ─── Run Report ───────────────────────────────────────────────────────────────
/// Outcome of one run: the authors that finished, with their
/// per-partition chunk counts, and the authors that failed.
#[derive(Debug, Default)]
pub struct RunReport {
    pub completed: Vec<(String, DistributionSummary)>,
    pub errored:   Vec<String>,
}

impl RunReport {
    pub fn total_chunks(&self) -> usize {
        self.completed.iter().map(|(_, s)| s.total()).sum()
    }

    pub fn has_errors(&self) -> bool {
        !self.errored.is_empty()
    }
}

// ─── SplitUseCase ─────────────────────────────────────────────────────────────
pub struct SplitUseCase {
    config: SplitConfig,
}

impl SplitUseCase {
    pub fn new(config: SplitConfig) -> Self {
        Self { config }
    }

    /// Authors in the corpus minus authors already present in the
    /// reference partition of the output tree.
    pub fn pending_authors(&self) -> Result<BTreeSet<String>> {
        let cfg = &self.config;

        let authors  = discover_authors(&cfg.source_dir)?;
        let existing = discover_processed_authors(&cfg.output_dir, REFERENCE_PARTITION)?;

        let remaining: BTreeSet<String> = authors.difference(&existing).cloned().collect();
        tracing::info!("The remaining authors are: {:?}", remaining);
        Ok(remaining)
    }

    /// Run the split with the configured random source: seeded if
    /// a seed was given, OS entropy otherwise.
    pub fn execute(&self) -> Result<RunReport> {
        let mut rng = match self.config.seed {
            Some(seed) => {
                tracing::info!("Using seed {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };
        self.execute_with(&mut rng)
    }

    /// Run the split, drawing partition assignments from `rng`.
    pub fn execute_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<RunReport> {
        let cfg = &self.config;

        // ── Step 1: Configuration ─────────────────────────────────────────────
        cfg.validate()?;

        // ── Steps 2-3: Work out what is left to do ────────────────────────────
        let remaining = self.pending_authors()?;

        // ── Step 4: Process every remaining author ────────────────────────────
        let loader     = TextFileLoader::new(&cfg.source_dir);
        let mut store  = FsChunkStore::new(&cfg.output_dir);
        let aggregator = Aggregator::new(cfg.trim_margin, cfg.chunk_length);
        let distributor = Distributor::new(
            Chunker::new(cfg.chunk_length),
            PartitionRouter::new(cfg.ratios),
        );

        let report = run_authors(
            &remaining,
            &loader,
            &aggregator,
            &distributor,
            &mut store,
            rng,
        );

        // ── Step 5: Summary ───────────────────────────────────────────────────
        tracing::info!(
            "Finished: {} authors, {} chunks written",
            report.completed.len(),
            report.total_chunks()
        );
        if report.has_errors() {
            tracing::warn!("Authors with errors: {:?}", report.errored);
        } else {
            tracing::info!("No authors errored");
        }

        Ok(report)
    }
}

/// Process `authors` in order, isolating failures per author.
pub fn run_authors<'a, T, S, R>(
    authors:     impl IntoIterator<Item = &'a String>,
    source:      &T,
    aggregator:  &Aggregator,
    distributor: &Distributor,
    sink:        &mut S,
    rng:         &mut R,
) -> RunReport
where
    T: TextSource + ?Sized,
    S: ChunkSink + ?Sized,
    R: Rng + ?Sized,
{
    let mut report = RunReport::default();

    for author in authors {
        match process_author(author, source, aggregator, distributor, sink, rng) {
            Ok(summary) => report.completed.push((author.clone(), summary)),
            Err(e) => {
                tracing::error!("Got error: {:#}", e);
                tracing::error!("Author {} may not be finished!", author);
                report.errored.push(author.clone());
            }
        }
    }

    report
}

/// Aggregate then distribute a single author.
fn process_author<T, S, R>(
    author:      &str,
    source:      &T,
    aggregator:  &Aggregator,
    distributor: &Distributor,
    sink:        &mut S,
    rng:         &mut R,
) -> Result<DistributionSummary>
where
    T: TextSource + ?Sized,
    S: ChunkSink + ?Sized,
    R: Rng + ?Sized,
{
    let documents   = source.documents(author)?;
    let author_text = aggregator.aggregate(author, &documents);
    distributor.distribute(author, &author_text, sink, rng)
}

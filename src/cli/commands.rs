// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Every flag has a default, so running the binary with no
// arguments at all performs the standard split:
//
//   author-split
//     = author-split --source-dir Gutenberg --output-dir data \
//         --trim-margin 300 --chunk-length 150 \
//         --train-ratio 0.8 --val-ratio 0.1
//
// The optional `authors` subcommand only inspects the corpus.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::split_use_case::SplitConfig;
use crate::domain::partition::SplitRatios;

/// Optional subcommands; without one the split itself runs.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the author directories found in the corpus
    Authors(AuthorsArgs),
}

/// Corpus and split settings shared by every command.
#[derive(Args, Debug, Clone)]
pub struct SplitArgs {
    /// Directory with one subdirectory of .txt files per author
    #[arg(long, default_value = "Gutenberg", global = true)]
    pub source_dir: PathBuf,

    /// Directory that receives train/, val/ and test/
    #[arg(long, default_value = "data", global = true)]
    pub output_dir: PathBuf,

    /// Tokens dropped from the start and end of every document
    #[arg(long, default_value_t = 300, global = true)]
    pub trim_margin: usize,

    /// Tokens per output chunk
    #[arg(long, default_value_t = 150, global = true)]
    pub chunk_length: usize,

    /// Probability of sending a chunk to train
    #[arg(long, default_value_t = 0.8, global = true)]
    pub train_ratio: f64,

    /// Probability of sending a chunk to val (test gets the rest)
    #[arg(long, default_value_t = 0.1, global = true)]
    pub val_ratio: f64,

    /// Seed for partition assignment; random when omitted
    #[arg(long, global = true)]
    pub seed: Option<u64>,
}

/// Arguments for the `authors` command
#[derive(Args, Debug)]
pub struct AuthorsArgs {
    /// Only list authors not yet present in the output
    #[arg(long)]
    pub pending: bool,
}

/// Convert CLI arguments into the application-layer SplitConfig.
/// The application layer never sees clap types.
impl From<SplitArgs> for SplitConfig {
    fn from(a: SplitArgs) -> Self {
        SplitConfig {
            source_dir:   a.source_dir,
            output_dir:   a.output_dir,
            trim_margin:  a.trim_margin,
            chunk_length: a.chunk_length,
            ratios:       SplitRatios::new(a.train_ratio, a.val_ratio),
            seed:         a.seed,
        }
    }
}

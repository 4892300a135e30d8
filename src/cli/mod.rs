// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and hands off to Layer 2.
//
//   author-split                 → split every pending author
//   author-split authors         → list authors in the corpus
//   author-split authors --pending
//                                → list authors not yet split
//
// Per-author failures do not change the exit status; they are
// only reported in the log. Configuration and discovery errors
// are returned from main and exit non-zero.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{AuthorsArgs, Commands, SplitArgs};

use crate::application::split_use_case::{SplitConfig, SplitUseCase};
use crate::data::discovery::discover_authors;

/// Running `author-split` with no arguments is the normal way to
/// use the tool: every flag defaults to the standard corpus layout
/// (Gutenberg/ in, data/ out, trim 300, chunk 150, 80/10/10).
/// The flags and the `authors` subcommand are conveniences on top.
#[derive(Parser, Debug)]
#[command(
    name = "author-split",
    version,
    about = "Split an author-attributed text corpus into 150-word chunks across train/val/test."
)]
pub struct Cli {
    #[command(flatten)]
    pub split: SplitArgs,

    /// What to do; runs the split when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let config: SplitConfig = self.split.into();

        match self.command {
            None                          => run_split(config),
            Some(Commands::Authors(args)) => run_authors(config, args),
        }
    }
}

fn run_split(config: SplitConfig) -> Result<()> {
    tracing::info!(
        "Splitting '{}' into '{}' (trim {}, chunk {}, ratios {}/{}/{:.2})",
        config.source_dir.display(),
        config.output_dir.display(),
        config.trim_margin,
        config.chunk_length,
        config.ratios.train,
        config.ratios.validation,
        config.ratios.test()
    );

    let report = SplitUseCase::new(config).execute()?;

    println!(
        "Processed {} authors, wrote {} chunks.",
        report.completed.len(),
        report.total_chunks()
    );
    if report.has_errors() {
        println!("Errored authors: {}", report.errored.join(", "));
    }
    Ok(())
}

fn run_authors(config: SplitConfig, args: AuthorsArgs) -> Result<()> {
    let authors = if args.pending {
        SplitUseCase::new(config).pending_authors()?
    } else {
        discover_authors(&config.source_dir)?
    };

    for author in &authors {
        println!("{author}");
    }
    Ok(())
}

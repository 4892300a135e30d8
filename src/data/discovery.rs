// ============================================================
// Layer 4 — Author Discovery
// ============================================================
// Lists the author directories directly under a root:
//
//   Gutenberg/
//     Mark_Twain/       ✓ author
//     Jane_Austen/      ✓ author
//     scratch_2/        ✗ digit in name, ignored
//     README.txt        ✗ not a directory, ignored
//
// The same scan is pointed at an output partition directory
// to find out which authors have already been processed.
//
// Names that fail the naming rule are dropped without a
// warning; an empty result is a valid answer, not an error.
//
// Reference: Rust Book §9 (Error Handling)
//            std::fs::read_dir

use anyhow::{Context, Result};
use std::{collections::BTreeSet, fs, path::Path};

use crate::domain::author::{is_author_name, AUTHOR_NAME_SEPARATOR};
use crate::domain::partition::Partition;

/// Return the names of the immediate subdirectories of `root`
/// that look like author names.
///
/// Fails only if `root` itself cannot be listed.
pub fn discover_authors(root: &Path) -> Result<BTreeSet<String>> {
    tracing::info!("Retrieving the authors under: {}", root.display());

    let mut authors = BTreeSet::new();

    for entry in fs::read_dir(root)
        .with_context(|| format!("Cannot read directory '{}'", root.display()))?
    {
        let entry = entry
            .with_context(|| format!("Cannot list entry in '{}'", root.display()))?;

        if !entry.path().is_dir() {
            continue;
        }

        // Non UTF-8 names can never be author names
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };

        if is_author_name(&name, AUTHOR_NAME_SEPARATOR) {
            authors.insert(name);
        }
    }

    tracing::info!("Found {} authors: {:?}", authors.len(), authors);
    Ok(authors)
}

/// Authors that already have a directory in `partition` under
/// `output_root`. A partition directory that does not exist yet
/// means nothing has been processed.
pub fn discover_processed_authors(
    output_root: &Path,
    partition:   Partition,
) -> Result<BTreeSet<String>> {
    let dir = output_root.join(partition.dir_name());

    if !dir.exists() {
        tracing::info!(
            "Partition directory '{}' does not exist yet, no authors processed",
            dir.display()
        );
        return Ok(BTreeSet::new());
    }

    discover_authors(&dir)
}

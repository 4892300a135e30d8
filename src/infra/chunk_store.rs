// ============================================================
// Layer 5 — Chunk Store
// ============================================================
// Writes chunks to the output tree on disk.
//
// Directory layout:
//   <output>/
//     train/
//       Mark_Twain/
//         Mark_Twain__0000000000.txt
//         Mark_Twain__0000000002.txt
//         ...
//     val/
//       Mark_Twain/
//         Mark_Twain__0000000001.txt
//     test/
//       Mark_Twain/
//         ...
//
// Each file holds exactly one chunk: its tokens joined by
// single spaces, no trailing newline. Files are written once;
// nothing in a normal run touches an author whose test
// directory already exists.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (Writing Files)

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::domain::chunk::Chunk;
use crate::domain::partition::Partition;
use crate::domain::traits::ChunkSink;

/// Stores chunks as individual files under an output root.
/// Implements the ChunkSink trait from Layer 3.
pub struct FsChunkStore {
    /// Root of the output tree (parent of train/, val/, test/)
    root: PathBuf,
}

impl FsChunkStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `<root>/<partition>`
    pub fn partition_dir(&self, partition: Partition) -> PathBuf {
        self.root.join(partition.dir_name())
    }

    /// `<root>/<partition>/<author>`
    pub fn author_dir(&self, partition: Partition, author: &str) -> PathBuf {
        self.partition_dir(partition).join(author)
    }
}

impl ChunkSink for FsChunkStore {
    fn prepare(&mut self, author: &str) -> Result<()> {
        for partition in Partition::ALL {
            let dir = self.author_dir(partition, author);
            if dir.is_dir() {
                continue;
            }

            // create_dir_all also creates the partition dir on a first run
            fs::create_dir_all(&dir)
                .with_context(|| format!("Cannot create directory '{}'", dir.display()))?;
            tracing::info!("Made new dir for {}, split {}", author, partition);
        }
        Ok(())
    }

    fn write(&mut self, partition: Partition, chunk: &Chunk<'_>) -> Result<()> {
        let path = self.author_dir(partition, chunk.author).join(chunk.file_name());

        fs::write(&path, chunk.payload())
            .with_context(|| format!("Cannot write chunk to '{}'", path.display()))?;

        tracing::trace!("Wrote {}", path.display());
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn words(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn test_prepare_creates_every_partition() {
        let tmp       = TempDir::new().unwrap();
        let mut store = FsChunkStore::new(tmp.path().join("data"));

        store.prepare("Mark_Twain").unwrap();

        for dir in ["train", "val", "test"] {
            assert!(tmp.path().join("data").join(dir).join("Mark_Twain").is_dir());
        }
    }

    #[test]
    fn test_prepare_is_safe_to_repeat() {
        let tmp       = TempDir::new().unwrap();
        let mut store = FsChunkStore::new(tmp.path());

        store.prepare("Homer").unwrap();
        store.prepare("Homer").unwrap();
        assert!(store.author_dir(Partition::Test, "Homer").is_dir());
    }

    #[test]
    fn test_write_places_chunk_in_partition() {
        let tmp       = TempDir::new().unwrap();
        let mut store = FsChunkStore::new(tmp.path());
        let tokens    = words("call me ishmael");

        store.prepare("Herman_Melville").unwrap();
        store
            .write(Partition::Validation, &Chunk::new("Herman_Melville", 4, &tokens))
            .unwrap();

        let path = tmp
            .path()
            .join("val")
            .join("Herman_Melville")
            .join("Herman_Melville__0000000004.txt");
        assert_eq!(fs::read_to_string(path).unwrap(), "call me ishmael");
    }

    #[test]
    fn test_write_without_prepare_fails() {
        let tmp       = TempDir::new().unwrap();
        let mut store = FsChunkStore::new(tmp.path());
        let tokens    = words("a b");

        assert!(store.write(Partition::Train, &Chunk::new("Homer", 0, &tokens)).is_err());
    }
}

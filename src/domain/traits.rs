// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The pipeline reads documents from somewhere and writes chunks
// somewhere. Both ends are traits so the data layer can be
// driven by the real directory tree in production and by
// in-memory fakes in unit tests:
//
//   TextSource  ← TextFileLoader    (data::loader)
//   ChunkSink   ← FsChunkStore      (infra::chunk_store)
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

use crate::domain::chunk::Chunk;
use crate::domain::document::Document;
use crate::domain::partition::Partition;

// ─── TextSource ───────────────────────────────────────────────────────────────
/// Anything that can produce the raw documents of an author.
pub trait TextSource {
    /// Load every document belonging to `author`, in a stable order.
    fn documents(&self, author: &str) -> Result<Vec<Document>>;
}

// ─── ChunkSink ────────────────────────────────────────────────────────────────
/// Destination for chunks routed to a partition.
pub trait ChunkSink {
    /// Make sure every partition can receive chunks for `author`.
    /// Called once per author before the first `write`.
    fn prepare(&mut self, author: &str) -> Result<()>;

    /// Persist one chunk into `partition`.
    fn write(&mut self, partition: Partition, chunk: &Chunk<'_>) -> Result<()>;
}

// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything from the raw corpus directory to routed chunks.
//
//   <source>/<Author>/*.txt
//       │
//       ▼
//   discovery          → which directories are authors
//       │
//       ▼
//   TextFileLoader     → reads an author's .txt documents
//       │
//       ▼
//   Aggregator         → trims each document, aligns it to the
//       │                chunk length, concatenates
//       ▼
//   Chunker            → fixed, non-overlapping windows
//       │
//       ▼
//   PartitionRouter    → train / val / test per chunk
//       │
//       ▼
//   Distributor        → drives the two above into a ChunkSink
//
// Each module does one step and is tested on its own.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Lists author directories by naming convention
pub mod discovery;

/// Reads .txt documents of one author
pub mod loader;

/// Trims and truncates documents into one token sequence
pub mod aggregator;

/// Splits the sequence into fixed-length chunks
pub mod chunker;

/// Picks a partition for every chunk
pub mod splitter;

/// Routes and writes every chunk of an author
pub mod distributor;

// ============================================================
// Layer 5 — Infrastructure Layer
// ============================================================
// Filesystem side effects of a run live here:
//
//   chunk_store.rs — Output tree writer
//                    Creates <output>/{train,val,test}/<author>/
//                    and writes one file per chunk. Implements
//                    the ChunkSink trait so the distributor never
//                    touches paths directly.
//
// Reading the corpus stays in the data layer (data::loader),
// since it is the first step of the pipeline.
//
// Reference: Rust Book §7 (Modules)

/// Chunk file writer for the output partitions
pub mod chunk_store;

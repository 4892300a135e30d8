// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums and traits describing the corpus
// and the output it is split into.
//
// Rules for this layer:
//   - NO file I/O
//   - NO logging setup or CLI types
//   - NO random number generation (callers pass draws in)
//
// Everything here is cheap to construct in a unit test,
// so the data layer can be tested against in-memory sources
// and sinks as well as against a real directory tree.
//
// Reference: Rust Book §5 (Structs), §6 (Enums), §10 (Traits)

// Author directory naming rules
pub mod author;

// A raw text file belonging to one author
pub mod document;

// One fixed-length window of an author's tokens
pub mod chunk;

// The three output partitions and their routing ratios
pub mod partition;

// Core abstractions (traits) that other layers implement
pub mod traits;

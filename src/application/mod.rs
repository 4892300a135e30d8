// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers for a whole run: which authors
// to process, and in what order to call discovery, aggregation
// and distribution for each of them.
//
// Rules for this layer:
//   - No token slicing or routing maths (that's Layer 4)
//   - No argument parsing or printing (that's Layer 1)
//   - No path building for output files (that's Layer 5)
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The corpus split workflow
pub mod split_use_case;

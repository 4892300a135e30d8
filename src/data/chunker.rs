// ============================================================
// Layer 4 — Text Chunker
// ============================================================
// Slices an author's aggregated token sequence into fixed-size,
// non-overlapping windows and numbers them from zero.
//
// Example with chunk_length = 3:
//   Tokens:  "A B C D E F G H I"
//   Chunk 0: "A B C"     (positions 0-2)
//   Chunk 1: "D E F"     (positions 3-5)
//   Chunk 2: "G H I"     (positions 6-8)
//
// The aggregator guarantees the sequence length is a multiple
// of the chunk length, so there is never a short last chunk.
// Receiving anything else is a bug in the caller.
//
// Reference: Rust Book §4 (Slices), slice::chunks_exact

use crate::domain::chunk::Chunk;

pub struct Chunker {
    /// Number of tokens per chunk
    chunk_length: usize,
}

impl Chunker {
    /// # Panics
    /// Panics if `chunk_length` is zero.
    pub fn new(chunk_length: usize) -> Self {
        assert!(chunk_length > 0, "chunk_length must be positive");
        Self { chunk_length }
    }

    pub fn chunk_length(&self) -> usize {
        self.chunk_length
    }

    /// Split `tokens` into consecutive chunks of `author`.
    ///
    /// # Panics
    /// Panics if `tokens.len()` is not a multiple of the chunk length.
    pub fn chunks<'a>(
        &self,
        author: &'a str,
        tokens: &'a [String],
    ) -> impl Iterator<Item = Chunk<'a>> + 'a {
        assert!(
            tokens.len() % self.chunk_length == 0,
            "token count ({}) is not a multiple of chunk_length ({})",
            tokens.len(),
            self.chunk_length
        );

        tokens
            .chunks_exact(self.chunk_length)
            .enumerate()
            .map(move |(index, window)| Chunk::new(author, index, window))
    }
}

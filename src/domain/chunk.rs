// ============================================================
// Layer 3 — Chunk Domain Type
// ============================================================
// A chunk is a contiguous, non-overlapping window of exactly
// `chunk_length` tokens taken from one author's aggregated
// token sequence. Chunks are numbered from zero in the order
// they appear in the sequence.
//
// On disk a chunk is a single file:
//
//   <author>__<index padded to 10 digits>.txt
//   e.g. Mark_Twain__0000000006.txt
//
// and its content is the tokens joined by single spaces.
//
// Reference: Rust Book §4 (Slices), std::fmt width/fill syntax

/// Number of digits the chunk index is zero-padded to.
pub const INDEX_WIDTH: usize = 10;

/// One window of an author's tokens, borrowed from the aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk<'a> {
    pub author: &'a str,
    pub index:  usize,
    pub tokens: &'a [String],
}

impl<'a> Chunk<'a> {
    pub fn new(author: &'a str, index: usize, tokens: &'a [String]) -> Self {
        Self { author, index, tokens }
    }

    /// File name for this chunk: `<author>__<index:010>.txt`
    pub fn file_name(&self) -> String {
        chunk_file_name(self.author, self.index)
    }

    /// The serialized chunk body: tokens joined by single spaces.
    pub fn payload(&self) -> String {
        self.tokens.join(" ")
    }
}

/// Build the file name used for chunk `index` of `author`.
pub fn chunk_file_name(author: &str, index: usize) -> String {
    format!("{author}__{index:0width$}.txt", width = INDEX_WIDTH)
}

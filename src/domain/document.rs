// ============================================================
// Layer 3 — Document Domain Type
// ============================================================
// Represents a single raw text file of one author.
// Plain data: the file name it came from and its full text.
// Tokens are produced on demand by splitting on whitespace;
// no other tokenisation is applied anywhere in the pipeline.
//
// Reference: Rust Book §5 (Structs and Methods)
//            Rust Book §8 (Strings)

/// A raw document loaded from an author's directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// The file name, kept so log lines can name the document
    pub source: String,

    /// The full text content of the file
    pub text: String,
}

impl Document {
    /// Create a new Document with a source name and text content.
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text:   text.into(),
        }
    }

    /// Whitespace-delimited tokens of the text, in order.
    pub fn tokens(&self) -> Vec<&str> {
        self.text.split_whitespace().collect()
    }
}

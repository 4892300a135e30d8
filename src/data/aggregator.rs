// ============================================================
// Layer 4 — Text Aggregator
// ============================================================
// Turns all of an author's documents into one token sequence
// whose length is an exact multiple of the chunk length.
//
// Per document, in order:
//
//   tokens:   [ front matter | body ..................... | back matter ]
//              ◄─ trim ──►                                 ◄─ trim ──►
//
//   1. split on whitespace
//   2. warn if shorter than 4 × trim margin (advisory only)
//   3. drop `trim_margin` tokens from each end
//   4. cut the body down to a multiple of `chunk_length`
//   5. append to the author's aggregate
//
// Truncating each document before concatenation means a
// later chunk can never straddle two books.
//
// Worked example (trim 300, chunk 150):
//   1650 tokens → 1050 after trimming → 1050 kept → 7 chunks
//    500 tokens → shorter than 600    →    0 kept
//
// Reference: Rust Book §4 (Slices)
//            Rust Book §13 (Iterators)

use crate::domain::document::Document;

/// Trims and truncates documents into a chunk-aligned aggregate.
#[derive(Debug, Clone, Copy)]
pub struct Aggregator {
    /// Tokens removed from each end of every document
    trim_margin: usize,
    /// Output chunk length the aggregate must align to
    chunk_length: usize,
}

impl Aggregator {
    /// # Panics
    /// Panics if `chunk_length` is zero.
    pub fn new(trim_margin: usize, chunk_length: usize) -> Self {
        assert!(chunk_length > 0, "chunk_length must be positive");
        Self { trim_margin, chunk_length }
    }

    /// Documents shorter than this get a warning.
    pub fn threshold(&self) -> usize {
        self.trim_margin.saturating_mul(4)
    }

    /// The slice of `tokens` a single document contributes.
    ///
    /// Always a multiple of `chunk_length` long; empty when the
    /// document is shorter than both margins together.
    pub fn contribution<'t, T>(&self, source: &str, tokens: &'t [T]) -> &'t [T] {
        if tokens.len() < self.threshold() {
            // Advisory: the document is still used below.
            tracing::warn!(
                "File {} has < {} words ({} tokens)",
                source,
                self.threshold(),
                tokens.len()
            );
        }

        if tokens.len() <= self.trim_margin.saturating_mul(2) {
            return &[];
        }

        let body = &tokens[self.trim_margin..tokens.len() - self.trim_margin];
        let keep = (body.len() / self.chunk_length) * self.chunk_length;
        &body[..keep]
    }

    /// Concatenate the contributions of all `documents`, in order.
    pub fn aggregate(&self, author: &str, documents: &[Document]) -> Vec<String> {
        let mut author_text = Vec::new();

        for doc in documents {
            let tokens = doc.tokens();
            tracing::info!(
                "Length of content (# tokens) for {}: {}",
                doc.source,
                tokens.len()
            );

            let kept = self.contribution(&doc.source, &tokens);
            tracing::debug!("{} contributes {} tokens", doc.source, kept.len());
            author_text.extend(kept.iter().map(|t| t.to_string()));
        }

        tracing::info!(
            "Aggregated text has {} tokens (author {})",
            author_text.len(),
            author
        );
        author_text
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    /// A document of `n` distinct tokens: "w0 w1 w2 ..."
    fn numbered_doc(name: &str, n: usize) -> Document {
        let text: Vec<String> = (0..n).map(|i| format!("w{i}")).collect();
        Document::new(name, text.join(" "))
    }

    fn expected_contribution(n: usize) -> usize {
        (n.saturating_sub(600) / 150) * 150
    }

    #[test]
    fn test_single_document_of_1650_tokens() {
        let agg    = Aggregator::new(300, 150);
        let tokens = agg.aggregate("Mark_Twain", &[numbered_doc("a.txt", 1650)]);

        assert_eq!(tokens.len(), 1050);
        // Front matter is gone: first kept token is the 301st
        assert_eq!(tokens.first().map(String::as_str), Some("w300"));
        assert_eq!(tokens.last().map(String::as_str), Some("w1349"));
    }

    #[test]
    fn test_short_document_contributes_nothing() {
        let agg = Aggregator::new(300, 150);
        assert!(agg.aggregate("Homer", &[numbered_doc("a.txt", 500)]).is_empty());
        assert!(agg.aggregate("Homer", &[numbered_doc("b.txt", 600)]).is_empty());
        assert!(agg.aggregate("Homer", &[numbered_doc("c.txt", 0)]).is_empty());
    }

    #[test]
    fn test_contribution_formula_holds_for_many_lengths() {
        let agg = Aggregator::new(300, 150);
        for n in [0, 1, 599, 600, 601, 749, 750, 751, 1199, 1200, 1650, 2000, 10_007] {
            let tokens: Vec<usize> = (0..n).collect();
            assert_eq!(
                agg.contribution("doc.txt", &tokens).len(),
                expected_contribution(n),
                "length {n}"
            );
        }
    }

    #[test]
    fn test_remainder_is_dropped_from_the_end() {
        let agg    = Aggregator::new(300, 150);
        let tokens: Vec<usize> = (0..1000).collect();
        let kept   = agg.contribution("doc.txt", &tokens);

        // 1000 - 600 = 400 → 300 kept, starting at token 300
        assert_eq!(kept.len(), 300);
        assert_eq!(kept[0], 300);
        assert_eq!(kept[299], 599);
    }

    #[test]
    fn test_documents_are_concatenated_in_order() {
        let agg  = Aggregator::new(1, 2);
        let docs = vec![
            Document::new("a.txt", "x a b c y"),
            Document::new("b.txt", "x d e f g h y"),
        ];

        // a: "a b c" → "a b"; b: "d e f g h" → "d e f g"
        assert_eq!(agg.aggregate("Homer", &docs), vec!["a", "b", "d", "e", "f", "g"]);
    }

    #[test]
    fn test_aggregate_is_always_chunk_aligned() {
        let agg  = Aggregator::new(300, 150);
        let docs: Vec<Document> = [1650, 500, 999, 4321, 750]
            .iter()
            .enumerate()
            .map(|(i, n)| numbered_doc(&format!("{i}.txt"), *n))
            .collect();

        let tokens = agg.aggregate("Jane_Austen", &docs);
        let expected: usize = [1650, 500, 999, 4321, 750]
            .iter()
            .map(|n| expected_contribution(*n))
            .sum();

        assert_eq!(tokens.len() % 150, 0);
        assert_eq!(tokens.len(), expected);
    }

    #[test]
    fn test_huge_trim_margin_does_not_overflow() {
        let agg = Aggregator::new(usize::MAX / 2 + 1, 150);
        assert_eq!(agg.threshold(), usize::MAX);
        assert!(agg.aggregate("Homer", &[Document::new("a.txt", "a b c")]).is_empty());
    }
}

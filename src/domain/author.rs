// ============================================================
// Layer 3 — Author Names
// ============================================================
// An author is identified by the name of its directory in the
// source corpus: alphabetic words joined by a delimiter, e.g.
//
//   Mark_Twain        ✓
//   Jane_Austen       ✓
//   Mary_Shelley_2    ✗  (digit in a segment)
//   _Anonymous        ✗  (empty leading segment)
//   .cache            ✗
//
// Anything that does not follow the convention is not an
// author and is ignored by discovery.
//
// Reference: Rust Book §8 (Strings), std::primitive::char

/// Delimiter between the words of an author directory name.
pub const AUTHOR_NAME_SEPARATOR: char = '_';

/// Returns true if every `sep`-separated segment of `name` is
/// non-empty and made only of alphabetic characters.
///
/// "Alphabetic" is the Unicode property, so accented names such
/// as `Honoré_de_Balzac` are accepted.
pub fn is_author_name(name: &str, sep: char) -> bool {
    name.split(sep)
        .all(|word| !word.is_empty() && word.chars().all(char::is_alphabetic))
}

//! src/tokenizer.rs
use crate::record::Pair;

/// Splits one line of raw text into words: maximal runs of ASCII letters and
/// digits, case-folded to lowercase, in order of appearance. Everything else
/// (punctuation, whitespace, non-ASCII) is a separator and is dropped.
///
/// Stateless across lines and infallible: malformed input cannot exist, any
/// character either extends a token or ends one. Single-character runs are
/// valid tokens.
pub fn tokenize(line: &str) -> impl Iterator<Item = String> + '_ {
    line.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| word.to_ascii_lowercase())
}

/// Maps one line to its unit emissions, `(word, 1)` per extracted token.
pub fn emit_pairs(line: &str) -> impl Iterator<Item = Pair> + '_ {
    tokenize(line).map(Pair::one)
}

//! src/record.rs
use crate::error::RecordError;
use std::fmt;

/// One key/count record of the intermediate and final streams.
///
/// The wire format between stages is one record per line, exactly
/// `<word>\t<count>` with a single horizontal tab and a base-10 integer.
/// `Display` and [`Pair::parse`] round-trip exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    pub word: String,
    pub count: i64,
}

impl Pair {
    pub fn new(word: impl Into<String>, count: i64) -> Self {
        Pair {
            word: word.into(),
            count,
        }
    }

    /// A unit emission, as produced by the tokenizer.
    pub fn one(word: impl Into<String>) -> Self {
        Pair::new(word, 1)
    }

    /// Parses one wire-format line. Lines without a tab separator or with a
    /// non-integer count field are rejected; callers decide whether that is
    /// fatal (the aggregator skips them).
    pub fn parse(line: &str) -> Result<Self, RecordError> {
        let (word, count) = line.split_once('\t').ok_or(RecordError::MissingSeparator)?;
        let count = count.parse::<i64>()?;
        Ok(Pair {
            word: word.to_string(),
            count,
        })
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.word, self.count)
    }
}

//! src/error.rs
use std::num::ParseIntError;

/// A line that does not match the `<word>\t<count>` wire format.
#[derive(thiserror::Error)]
pub enum RecordError {
    #[error("record has no tab separator")]
    MissingSeparator,
    #[error("count field is not a base-10 integer")]
    InvalidCount(#[from] ParseIntError),
}

impl std::fmt::Debug for RecordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(f, self)
    }
}

pub fn error_chain_fmt(
    f: &mut std::fmt::Formatter<'_>,
    e: &impl std::error::Error,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}

// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"

//! Errors raised by position-based access.

/// Failure of a positional lookup on a [`Sequence`](crate::list::Sequence).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The position was outside `1..=len`. An empty list has no valid position.
    #[error("an empty list or invalid position: {position} not in 1..={len}")]
    OutOfRange { position: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

//! Errors reported when configuring a search.

/// Invalid solver configuration, rejected at construction time.
///
/// The search itself never fails: running out of candidates is reported by
/// the step sequence ending without a `FoundSolution` step.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The board must have at least one row
    #[error("board size must be at least 1")]
    EmptyBoard,
    /// The first-row lock names a column that is not on the board
    #[error("first-row lock {lock} is outside the board (columns 0..{n})")]
    LockOutOfRange {
        /// The requested column
        lock: usize,
        /// The board size
        n: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

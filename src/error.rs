use thiserror::Error;

/// Reasons a grid cannot become a [`Board`](crate::Board).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The grid has no rows at all.
    #[error("board has no rows")]
    Empty,

    /// The grid is square but smaller than 2x2.
    #[error("board dimension {dimension} is too small, need at least 2")]
    TooSmall {
        /// The offending dimension.
        dimension: usize,
    },

    /// The board has more cells than `u32` tile values can number.
    #[error("board dimension {dimension} is too large")]
    TooLarge {
        /// The offending dimension.
        dimension: usize,
    },

    /// A row does not have exactly `dimension` entries.
    #[error("row {row} has {len} tiles, expected {dimension}")]
    NotSquare {
        /// Zero-based index of the bad row.
        row: usize,
        /// Number of entries found in that row.
        len: usize,
        /// Number of rows in the grid.
        dimension: usize,
    },

    /// The tiles are not a permutation of `0..n*n`.
    #[error("tiles of a {dimension}x{dimension} board must be each of 0..{} exactly once", dimension * dimension)]
    InvalidTiles {
        /// The board dimension.
        dimension: usize,
    },

    /// Textual input could not be read as a board.
    #[error("line {line}: {reason}")]
    Parse {
        /// One-based line of the input where reading failed.
        line: usize,
        /// What went wrong.
        reason: String,
    },
}

/// Failures of a configured search.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The expansion budget ran out before either lane reached its goal.
    #[error("search aborted after {expansions} expansions")]
    SearchAborted {
        /// Nodes dequeued across both lanes before giving up.
        expansions: usize,
    },
}

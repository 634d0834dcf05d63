//! Errors for building and restoring games.
//!
//! Rule violations during play (bad reveal, premature resolve) are ordinary
//! return values and never show up here. `GameError` covers inputs that
//! would produce an inconsistent `Game`: bad board configurations, malformed
//! symbol pools and snapshots that do not describe a reachable state.

use thiserror::Error;

use crate::core::Position;

/// Failure to construct or restore a [`Game`](crate::game::Game).
#[derive(Debug, Error)]
pub enum GameError {
    #[error("board has no cells ({rows}x{cols})")]
    ZeroSizedBoard { rows: usize, cols: usize },

    #[error("board {rows}x{cols} has more cells than fit in usize")]
    BoardTooLarge { rows: usize, cols: usize },

    #[error("board {rows}x{cols} has an odd number of cells")]
    OddCellCount { rows: usize, cols: usize },

    #[error("symbol pool holds {actual} symbols, board needs {expected}")]
    PoolSizeMismatch { expected: usize, actual: usize },

    #[error("symbol {symbol:?} appears {count} time(s), expected 2")]
    UnpairedSymbol { symbol: String, count: usize },

    #[error("board has {actual} rows, expected {expected}")]
    RowCountMismatch { expected: usize, actual: usize },

    #[error("row {row} has {actual} cards, expected {expected}")]
    ColumnCountMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("{count} pending positions, at most 2 allowed")]
    PendingOverflow { count: usize },

    #[error("pending position {position} is outside the board")]
    PendingOutOfBounds { position: Position },

    #[error("pending position {position} is listed twice")]
    DuplicatePending { position: Position },

    #[error("pending card at {position} is not visible")]
    PendingNotVisible { position: Position },

    #[error("card at {position} is visible but not pending")]
    StrayVisibleCard { position: Position },

    #[error("totalPairs is {actual}, board implies {expected}")]
    TotalPairsMismatch { expected: usize, actual: usize },

    #[error("{found} found cards recorded against {matches} matches")]
    FoundCountMismatch { found: usize, matches: usize },

    #[error("symbol {symbol:?} has {found} of {total} card(s) found")]
    SplitPair {
        symbol: String,
        found: usize,
        total: usize,
    },

    #[error("{moves} moves recorded against {matches} matches")]
    MovesBelowMatches { moves: usize, matches: usize },

    #[error("binary codec failure: {0}")]
    Codec(#[from] bincode::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_problem() {
        let err = GameError::OddCellCount { rows: 3, cols: 3 };
        assert_eq!(err.to_string(), "board 3x3 has an odd number of cells");

        let err = GameError::PendingOutOfBounds {
            position: Position::new(4, 0),
        };
        assert_eq!(err.to_string(), "pending position (4, 0) is outside the board");
    }
}

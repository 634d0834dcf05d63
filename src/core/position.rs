//! Board coordinates.

use serde::{Deserialize, Serialize};

/// A `(row, col)` cell on the board, zero-based.
///
/// Serializes as a two-element array so snapshots read like `[1, 0]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major index into a board with `cols` columns.
    #[must_use]
    pub const fn flat_index(self, cols: usize) -> usize {
        self.row * cols + self.col
    }

    /// Inverse of [`flat_index`](Self::flat_index).
    #[must_use]
    pub const fn from_flat_index(index: usize, cols: usize) -> Self {
        Self {
            row: index / cols,
            col: index % cols,
        }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl From<Position> for (usize, usize) {
    fn from(pos: Position) -> Self {
        (pos.row, pos.col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_index() {
        let pos = Position::new(2, 3);
        assert_eq!(pos.flat_index(4), 11);
        assert_eq!(Position::from_flat_index(11, 4), pos);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Position::new(1, 0)), "(1, 0)");
    }

    #[test]
    fn test_serde_as_pair() {
        let json = serde_json::to_string(&Position::new(1, 2)).unwrap();
        assert_eq!(json, "[1,2]");

        let pos: Position = serde_json::from_str("[0,3]").unwrap();
        assert_eq!(pos, Position::new(0, 3));
    }
}

//! Row-major card grid.

use std::ops::Index;

use crate::cards::{Card, CardState, Symbol};
use crate::core::config::cell_count;
use crate::core::Position;
use crate::error::GameError;

/// A `rows x cols` grid of cards stored row-major.
///
/// Dimensions are fixed at construction. Cell `(r, c)` lives at flat index
/// `r * cols + c`, the same order the symbol pool is laid down in.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Card>,
}

impl Board {
    /// Lay `symbols` down row-major as face-down cards.
    ///
    /// Panics if the symbol count does not fill the grid exactly.
    pub(crate) fn from_symbols(rows: usize, cols: usize, symbols: Vec<Symbol>) -> Self {
        assert_eq!(
            symbols.len(),
            cell_count(rows, cols),
            "symbol count must fill a {rows}x{cols} board"
        );

        Self {
            rows,
            cols,
            cells: symbols.into_iter().map(Card::hidden).collect(),
        }
    }

    /// Rebuild a board from nested rows, checking it is `rows x cols`.
    pub(crate) fn from_rows(grid: Vec<Vec<Card>>, rows: usize, cols: usize) -> Result<Self, GameError> {
        if grid.len() != rows {
            return Err(GameError::RowCountMismatch {
                expected: rows,
                actual: grid.len(),
            });
        }

        // No up-front reservation: `cols` may come from untrusted input.
        let mut cells = Vec::new();
        for (row, cards) in grid.into_iter().enumerate() {
            if cards.len() != cols {
                return Err(GameError::ColumnCountMismatch {
                    row,
                    expected: cols,
                    actual: cards.len(),
                });
            }
            cells.extend(cards);
        }

        Ok(Self { rows, cols, cells })
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Is `pos` inside the grid?
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Card at `pos`, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&Card> {
        if self.contains(pos) {
            self.cells.get(pos.flat_index(self.cols))
        } else {
            None
        }
    }

    pub(crate) fn get_mut(&mut self, pos: Position) -> Option<&mut Card> {
        if self.contains(pos) {
            self.cells.get_mut(pos.flat_index(self.cols))
        } else {
            None
        }
    }

    /// Cards of one row, left to right.
    ///
    /// Panics if `row` is out of range.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Card] {
        assert!(row < self.rows, "row {row} out of range for {} rows", self.rows);
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Iterate all cards with their positions, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Card)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, card)| (Position::from_flat_index(index, cols), card))
    }

    /// Number of cards currently in `state`.
    #[must_use]
    pub fn count_in_state(&self, state: CardState) -> usize {
        self.cells.iter().filter(|card| card.state == state).count()
    }

    /// Symbols in row-major order.
    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> + '_ {
        self.cells.iter().map(|card| &card.symbol)
    }

    /// Copy the grid out as nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<Card>> {
        (0..self.rows).map(|row| self.row(row).to_vec()).collect()
    }
}

impl Index<Position> for Board {
    type Output = Card;

    fn index(&self, pos: Position) -> &Card {
        match self.get(pos) {
            Some(card) => card,
            None => panic!("position {pos} outside {}x{} board", self.rows, self.cols),
        }
    }
}

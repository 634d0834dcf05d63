//! Board configuration.
//!
//! Hosts describe a match with a `BoardConfig`: board dimensions plus an
//! optional seed. The config is serde-loadable so it can live in whatever
//! settings file the host already reads.
//!
//! `Game` accepts any dimensions (odd-area boards get one unpaired card);
//! call [`BoardConfig::validate`] to reject those up front.

use serde::{Deserialize, Serialize};

use super::rng::GameRng;
use crate::error::GameError;

/// Number of cells on a `rows x cols` board.
///
/// Panics if the product overflows `usize`.
pub(crate) fn cell_count(rows: usize, cols: usize) -> usize {
    match rows.checked_mul(cols) {
        Some(cells) => cells,
        None => panic!("board {rows}x{cols} has more cells than fit in usize"),
    }
}

/// Dimensions and seed for a new match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of rows.
    pub rows: usize,

    /// Number of columns.
    pub cols: usize,

    /// Shuffle seed. `None` draws one from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: 4,
            cols: 4,
            seed: None,
        }
    }
}

impl BoardConfig {
    /// Create an unseeded configuration.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            seed: None,
        }
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Total number of cells.
    ///
    /// Panics if the product overflows; [`validate`](Self::validate) reports it instead.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        cell_count(self.rows, self.cols)
    }

    /// Number of pairs a board of this size holds (truncating).
    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.cell_count() / 2
    }

    /// Reject boards that cannot be fully paired.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.rows.checked_mul(self.cols).is_none() {
            return Err(GameError::BoardTooLarge {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.cell_count() == 0 {
            return Err(GameError::ZeroSizedBoard {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.cell_count() % 2 != 0 {
            return Err(GameError::OddCellCount {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Build the RNG for this configuration.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }
}

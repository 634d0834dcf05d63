//! Symbol pool builder.
//!
//! A pool holds `floor(rows * cols / 2)` distinct symbols, each exactly
//! twice, in uniformly random order. Every symbol on a generated board
//! therefore has exactly one partner and the board is always solvable.
//!
//! An odd cell count truncates: the pool comes out one symbol short of the
//! board. `Game::new` covers the leftover cell itself.

use rustc_hash::FxHashMap;

use crate::cards::Symbol;
use crate::core::config::cell_count;
use crate::core::GameRng;
use crate::error::GameError;

/// Build a shuffled pool of paired symbols for a `rows x cols` board.
///
/// ```
/// use memory_match::board::build_symbol_pool;
/// use memory_match::core::GameRng;
///
/// let pool = build_symbol_pool(2, 3, &mut GameRng::new(1));
/// assert_eq!(pool.len(), 6);
/// ```
///
/// Panics if `rows * cols` overflows `usize`.
pub fn build_symbol_pool(rows: usize, cols: usize, rng: &mut GameRng) -> Vec<Symbol> {
    let total_pairs = cell_count(rows, cols) / 2;

    let mut pool = Vec::with_capacity(total_pairs * 2);
    for index in 0..total_pairs {
        let symbol = Symbol::numbered(index);
        pool.push(symbol.clone());
        pool.push(symbol);
    }

    rng.shuffle(&mut pool);
    pool
}

/// Check that a pool can seed a board of `cell_count` cells.
///
/// Every symbol must occur exactly twice. An odd cell count allows a single
/// symbol to occur once (the board's unpaired card).
pub fn check_pairing(pool: &[Symbol], cell_count: usize) -> Result<(), GameError> {
    if pool.len() != cell_count {
        return Err(GameError::PoolSizeMismatch {
            expected: cell_count,
            actual: pool.len(),
        });
    }

    let mut counts: FxHashMap<&Symbol, usize> = FxHashMap::default();
    for symbol in pool {
        *counts.entry(symbol).or_insert(0) += 1;
    }

    let mut spare_single = cell_count % 2 == 1;
    for symbol in pool {
        let count = counts[symbol];
        if count == 2 {
            continue;
        }
        if count == 1 && spare_single {
            spare_single = false;
            continue;
        }
        return Err(GameError::UnpairedSymbol {
            symbol: symbol.to_string(),
            count,
        });
    }

    Ok(())
}

//! Board construction: symbol pools and the card grid.
//!
//! - `pool`: builds and checks shuffled pools where every symbol occurs twice
//! - `grid`: the row-major `Board` the game mutates

mod grid;
mod pool;

pub use grid::Board;
pub use pool::{build_symbol_pool, check_pairing};

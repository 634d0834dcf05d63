//! # memory-match
//!
//! Rules engine for a tile-matching memory game.
//!
//! A rectangular board of face-down cards, each symbol on exactly two cards.
//! Players turn up two cards at a time; matching pairs stay face up, other
//! pairs flip back down. The game is won when every pair is found.
//!
//! ## Design Principles
//!
//! 1. **Single entry point**: a `Game` only comes from its constructors (or
//!    a validated snapshot), so board and counters always agree.
//!
//! 2. **Rule violations are values**: a refused reveal returns `false`, an
//!    early resolve returns `ResolveOutcome::NOT_DUE`. Nothing panics during
//!    normal play.
//!
//! 3. **Injected randomness**: shuffling takes an explicit `GameRng`, so a
//!    seed reproduces a board exactly.
//!
//! ## Modules
//!
//! - `core`: positions, RNG, board configuration
//! - `cards`: symbols and card face state
//! - `board`: symbol pool builder and the card grid
//! - `game`: the `Game` aggregate, reveal/resolve/win, snapshots
//! - `error`: construction and restore errors
//!
//! ```
//! use memory_match::{Game, GameRng, Position};
//!
//! let mut game = Game::new(2, 2, &mut GameRng::new(7));
//! assert!(game.reveal(Position::new(0, 0)));
//! assert!(!game.reveal(Position::new(0, 0)));
//! ```

pub mod board;
pub mod cards;
pub mod core;
pub mod error;
pub mod game;

// Re-export commonly used types
pub use crate::board::{build_symbol_pool, Board};
pub use crate::cards::{Card, CardState, Symbol};
pub use crate::core::{BoardConfig, GameRng, GameRngState, Position};
pub use crate::error::GameError;
pub use crate::game::{Game, GameSnapshot, ResolveOutcome, RevealRejection};

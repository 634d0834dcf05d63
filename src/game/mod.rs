//! The game aggregate and its operations.
//!
//! A `Game` is built once per match and then driven by a single caller:
//!
//! 1. [`Game::reveal`] turns up to two hidden cards face up
//! 2. [`Game::resolve_pending`] commits the pair (found, or flipped back)
//! 3. [`Game::has_won`] reports when every pair is found
//!
//! Reveal and resolve are separate so the caller can keep both cards on
//! screen for as long as it likes before committing.

mod outcome;
mod snapshot;
mod state;

pub use outcome::{ResolveOutcome, RevealRejection};
pub use snapshot::GameSnapshot;
pub use state::Game;

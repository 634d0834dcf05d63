//! Cards: symbols and face state.
//!
//! A card never changes its symbol. Only its [`CardState`] moves between
//! `Hidden`, `Visible` and `Found` as the game reveals and resolves it.

mod card;

pub use card::{Card, CardState, Symbol};

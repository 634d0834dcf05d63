//! Core engine types: coordinates, RNG, configuration.
//!
//! These are the building blocks the board and game modules share.

pub mod config;
pub mod position;
pub mod rng;

pub use config::BoardConfig;
pub use position::Position;
pub use rng::{GameRng, GameRngState};

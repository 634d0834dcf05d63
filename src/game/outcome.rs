//! Results of reveal and resolve.

use thiserror::Error;

use crate::cards::CardState;

/// Why a reveal was refused. The game is left untouched in every case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RevealRejection {
    #[error("position is outside the board")]
    OutOfBounds,

    #[error("two cards are already pending")]
    PendingFull,

    #[error("card is already {0}")]
    NotHidden(CardState),
}

/// Result of [`Game::resolve_pending`](super::Game::resolve_pending).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResolveOutcome {
    /// Two pending cards were compared and committed.
    pub resolved: bool,

    /// The two cards shared a symbol. Always false when not resolved.
    pub matched: bool,
}

impl ResolveOutcome {
    /// Fewer than two cards pending; nothing happened.
    pub const NOT_DUE: Self = Self {
        resolved: false,
        matched: false,
    };

    #[must_use]
    pub const fn committed(matched: bool) -> Self {
        Self {
            resolved: true,
            matched,
        }
    }
}

impl From<ResolveOutcome> for (bool, bool) {
    fn from(outcome: ResolveOutcome) -> Self {
        (outcome.resolved, outcome.matched)
    }
}

//! Card and symbol types.

use serde::{Deserialize, Serialize};

/// Identifier shared by the two cards of a pair.
///
/// Generated boards use stringified sequential integers (`"0"`, `"1"`, ...),
/// but any string works when a pool is supplied by hand.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(pub String);

impl Symbol {
    /// Create a symbol from anything string-like.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Symbol for the `index`-th pair of a generated pool.
    #[must_use]
    pub fn numbered(index: usize) -> Self {
        Self(index.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for Symbol {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Face state of a card.
///
/// Serialized as `"hidden"`, `"visible"` or `"found"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardState {
    /// Face down. The only state a card can be revealed from.
    #[default]
    Hidden,
    /// Face up, waiting in the pending pair.
    Visible,
    /// Matched. Stays face up for the rest of the game.
    Found,
}

impl CardState {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CardState::Hidden => "hidden",
            CardState::Visible => "visible",
            CardState::Found => "found",
        }
    }
}

impl std::fmt::Display for CardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Symbol shared with exactly one other card.
    pub symbol: Symbol,

    /// Current face state.
    pub state: CardState,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub fn hidden(symbol: Symbol) -> Self {
        Self {
            symbol,
            state: CardState::Hidden,
        }
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.state == CardState::Hidden
    }

    #[must_use]
    pub fn is_found(&self) -> bool {
        self.state == CardState::Found
    }

    /// Does this card pair with `other`?
    #[must_use]
    pub fn matches(&self, other: &Card) -> bool {
        self.symbol == other.symbol
    }
}

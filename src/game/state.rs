//! Game state and the reveal / resolve / win operations.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info, trace, warn};

use super::outcome::{ResolveOutcome, RevealRejection};
use super::snapshot::GameSnapshot;
use crate::board::{build_symbol_pool, check_pairing, Board};
use crate::cards::{Card, CardState, Symbol};
use crate::core::config::cell_count;
use crate::core::{BoardConfig, GameRng, Position};
use crate::error::GameError;

/// Positions revealed and awaiting resolution, in reveal order.
pub(crate) type Pending = SmallVec<[Position; 2]>;

/// A single match: the board plus pending pair and counters.
///
/// Only the constructors here (and validated deserialization) produce a
/// `Game`, so the board, the pending list and the counters always agree.
///
/// ## Example
///
/// ```
/// use memory_match::core::Position;
/// use memory_match::game::Game;
///
/// let mut game = Game::from_pool(2, 2, ["A", "B", "B", "A"]).unwrap();
///
/// assert!(game.reveal(Position::new(0, 0)));
/// assert!(game.reveal(Position::new(1, 1)));
///
/// let outcome = game.resolve_pending();
/// assert!(outcome.resolved && outcome.matched);
/// assert_eq!(game.matches(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "GameSnapshot", try_from = "GameSnapshot")]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) pending: Pending,
    pub(crate) moves: usize,
    pub(crate) matches: usize,
    pub(crate) total_pairs: usize,
}

impl Game {
    /// Create a new game with a freshly shuffled `rows x cols` board.
    ///
    /// An odd cell count leaves one cell over after pairing; it receives a
    /// unique symbol at a random position and can never be matched.
    ///
    /// Panics if `rows * cols` overflows `usize`.
    pub fn new(rows: usize, cols: usize, rng: &mut GameRng) -> Self {
        let cells = cell_count(rows, cols);
        let mut symbols = build_symbol_pool(rows, cols, rng);

        if symbols.len() < cells {
            let at = rng.gen_range_usize(0..symbols.len() + 1);
            symbols.insert(at, Symbol::numbered(cells / 2));
            warn!(rows, cols, "odd cell count, one card has no partner");
        }

        Self::from_board(Board::from_symbols(rows, cols, symbols))
    }

    /// Create a new game from a seed.
    #[must_use]
    pub fn with_seed(rows: usize, cols: usize, seed: u64) -> Self {
        Self::new(rows, cols, &mut GameRng::new(seed))
    }

    /// Create a new game from a configuration.
    #[must_use]
    pub fn from_config(config: &BoardConfig) -> Self {
        let mut rng = config.rng();
        debug!(seed = rng.seed(), "seeding board");
        Self::new(config.rows, config.cols, &mut rng)
    }

    /// Create a game from a caller-chosen layout, laid down row-major.
    ///
    /// The pool must fill the board and pair every symbol; see
    /// [`check_pairing`].
    pub fn from_pool<I>(rows: usize, cols: usize, pool: I) -> Result<Self, GameError>
    where
        I: IntoIterator,
        I::Item: Into<Symbol>,
    {
        let cells = rows
            .checked_mul(cols)
            .ok_or(GameError::BoardTooLarge { rows, cols })?;
        let symbols: Vec<Symbol> = pool.into_iter().map(Into::into).collect();
        check_pairing(&symbols, cells)?;
        Ok(Self::from_board(Board::from_symbols(rows, cols, symbols)))
    }

    fn from_board(board: Board) -> Self {
        let total_pairs = board.len() / 2;
        info!(rows = board.rows(), cols = board.cols(), total_pairs, "new game");

        Self {
            board,
            pending: Pending::new(),
            moves: 0,
            matches: 0,
            total_pairs,
        }
    }

    // === Reveal ===

    /// Turn the card at `pos` face up.
    ///
    /// Returns `false` without changing anything if `pos` is off the board,
    /// two cards are already pending, or the card is not hidden.
    pub fn reveal(&mut self, pos: Position) -> bool {
        self.try_reveal(pos).is_ok()
    }

    /// [`reveal`](Self::reveal) taking separate coordinates.
    pub fn reveal_card(&mut self, row: usize, col: usize) -> bool {
        self.reveal(Position::new(row, col))
    }

    /// Like [`reveal`](Self::reveal), reporting why a reveal was refused.
    pub fn try_reveal(&mut self, pos: Position) -> Result<(), RevealRejection> {
        if let Err(reason) = self.check_reveal(pos) {
            debug!(%pos, %reason, "reveal rejected");
            return Err(reason);
        }

        if let Some(card) = self.board.get_mut(pos) {
            card.state = CardState::Visible;
        }
        self.pending.push(pos);
        trace!(%pos, pending = self.pending.len(), "card revealed");
        Ok(())
    }

    /// Would revealing `pos` succeed right now?
    pub fn check_reveal(&self, pos: Position) -> Result<(), RevealRejection> {
        let card = self.board.get(pos).ok_or(RevealRejection::OutOfBounds)?;
        if self.pending.len() >= 2 {
            return Err(RevealRejection::PendingFull);
        }
        if !card.is_hidden() {
            return Err(RevealRejection::NotHidden(card.state));
        }
        Ok(())
    }

    // === Resolve ===

    /// Commit the pending pair.
    ///
    /// With exactly two cards pending, both become `Found` on a match or go
    /// back to `Hidden` otherwise; `moves` always increments and the pending
    /// list empties. With fewer pending, returns [`ResolveOutcome::NOT_DUE`]
    /// and changes nothing.
    pub fn resolve_pending(&mut self) -> ResolveOutcome {
        let (first, second) = match self.pending.as_slice() {
            &[first, second] => (first, second),
            _ => return ResolveOutcome::NOT_DUE,
        };
        assert!(
            self.board.contains(first) && self.board.contains(second),
            "pending {first} / {second} outside {}x{} board",
            self.board.rows(),
            self.board.cols()
        );

        let matched = self.board[first].matches(&self.board[second]);
        let next = if matched { CardState::Found } else { CardState::Hidden };
        for pos in [first, second] {
            if let Some(card) = self.board.get_mut(pos) {
                card.state = next;
            }
        }

        if matched {
            self.matches += 1;
        }
        self.moves += 1;
        self.pending.clear();

        debug!(moves = self.moves, matches = self.matches, matched, "pair resolved");
        if matched && self.has_won() {
            info!(moves = self.moves, "all pairs found");
        }

        ResolveOutcome::committed(matched)
    }

    /// Are two cards waiting for [`resolve_pending`](Self::resolve_pending)?
    #[must_use]
    pub fn is_resolution_due(&self) -> bool {
        self.pending.len() == 2
    }

    // === Queries ===

    /// Has every pair been found?
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.matches == self.total_pairs
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Card at `pos`, or `None` off the board.
    #[must_use]
    pub fn card(&self, pos: Position) -> Option<&Card> {
        self.board.get(pos)
    }

    /// Revealed positions awaiting resolution, in reveal order.
    #[must_use]
    pub fn pending(&self) -> &[Position] {
        &self.pending
    }

    /// Resolutions attempted so far.
    #[must_use]
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Pairs found so far.
    #[must_use]
    pub fn matches(&self) -> usize {
        self.matches
    }

    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.total_pairs
    }

    #[must_use]
    pub fn remaining_pairs(&self) -> usize {
        self.total_pairs - self.matches
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.board.cols()
    }

    // === Checkpoints ===

    /// Encode as a compact binary checkpoint.
    pub fn to_bytes(&self) -> Result<Vec<u8>, GameError> {
        Ok(bincode::serialize(self)?)
    }

    /// Restore from [`to_bytes`](Self::to_bytes) output.
    ///
    /// The decoded state is validated like any other snapshot.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, GameError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

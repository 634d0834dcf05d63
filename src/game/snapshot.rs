//! Serialized form of a game.
//!
//! Field names (`board`, `pending`, `moves`, `matches`, `totalPairs`, `rows`,
//! `cols`) are what rendering layers and save files read, so they stay
//! fixed. Converting a snapshot back into a [`Game`] re-checks every
//! invariant the constructors guarantee; a snapshot that could not have
//! come from real play is rejected with a [`GameError`].

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::state::{Game, Pending};
use crate::board::{check_pairing, Board};
use crate::cards::{Card, CardState, Symbol};
use crate::core::Position;
use crate::error::GameError;

/// Plain-data view of a [`Game`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Cards as a list of rows.
    pub board: Vec<Vec<Card>>,
    /// Revealed positions awaiting resolution, in reveal order.
    pub pending: Vec<Position>,
    pub moves: usize,
    pub matches: usize,
    #[serde(rename = "totalPairs")]
    pub total_pairs: usize,
    pub rows: usize,
    pub cols: usize,
}

impl From<Game> for GameSnapshot {
    fn from(game: Game) -> Self {
        Self {
            board: game.board.to_rows(),
            pending: game.pending.to_vec(),
            moves: game.moves,
            matches: game.matches,
            total_pairs: game.total_pairs,
            rows: game.board.rows(),
            cols: game.board.cols(),
        }
    }
}

impl From<&Game> for GameSnapshot {
    fn from(game: &Game) -> Self {
        game.clone().into()
    }
}

impl TryFrom<GameSnapshot> for Game {
    type Error = GameError;

    fn try_from(snapshot: GameSnapshot) -> Result<Self, Self::Error> {
        let board = Board::from_rows(snapshot.board, snapshot.rows, snapshot.cols)?;

        let symbols: Vec<Symbol> = board.symbols().cloned().collect();
        check_pairing(&symbols, board.len())?;

        let expected_pairs = board.len() / 2;
        if snapshot.total_pairs != expected_pairs {
            return Err(GameError::TotalPairsMismatch {
                expected: expected_pairs,
                actual: snapshot.total_pairs,
            });
        }

        let pending = check_pending(&board, &snapshot.pending)?;

        let found = board.count_in_state(CardState::Found);
        if found != snapshot.matches * 2 {
            return Err(GameError::FoundCountMismatch {
                found,
                matches: snapshot.matches,
            });
        }
        check_found_pairs(&board)?;

        if snapshot.moves < snapshot.matches {
            return Err(GameError::MovesBelowMatches {
                moves: snapshot.moves,
                matches: snapshot.matches,
            });
        }

        Ok(Game {
            board,
            pending,
            moves: snapshot.moves,
            matches: snapshot.matches,
            total_pairs: snapshot.total_pairs,
        })
    }
}

/// Found cards come in whole pairs: each symbol has none or both found.
fn check_found_pairs(board: &Board) -> Result<(), GameError> {
    let mut tally: FxHashMap<&Symbol, (usize, usize)> = FxHashMap::default();
    for (_, card) in board.iter() {
        let (total, found) = tally.entry(&card.symbol).or_insert((0, 0));
        *total += 1;
        if card.is_found() {
            *found += 1;
        }
    }

    for (_, card) in board.iter() {
        let (total, found) = tally[&card.symbol];
        if found != 0 && found != 2 {
            return Err(GameError::SplitPair {
                symbol: card.symbol.to_string(),
                found,
                total,
            });
        }
    }

    Ok(())
}

/// Pending must list in-bounds, distinct, visible cards, and every visible
/// card must be pending.
fn check_pending(board: &Board, positions: &[Position]) -> Result<Pending, GameError> {
    if positions.len() > 2 {
        return Err(GameError::PendingOverflow {
            count: positions.len(),
        });
    }

    let mut pending = Pending::new();
    for &position in positions {
        let card = board
            .get(position)
            .ok_or(GameError::PendingOutOfBounds { position })?;
        if pending.contains(&position) {
            return Err(GameError::DuplicatePending { position });
        }
        if card.state != CardState::Visible {
            return Err(GameError::PendingNotVisible { position });
        }
        pending.push(position);
    }

    if let Some((position, _)) = board
        .iter()
        .find(|(pos, card)| card.state == CardState::Visible && !pending.contains(pos))
    {
        return Err(GameError::StrayVisibleCard { position });
    }

    Ok(pending)
}

//! Gameplay tests: reveal, resolve and win detection through the public API.

use memory_match::{CardState, Game, GameRng, Position, ResolveOutcome};

/// Positions of the two cards sharing each symbol.
fn pairs_of(game: &Game) -> Vec<(Position, Position)> {
    let mut pairs = Vec::new();
    let mut seen: Vec<(Position, &str)> = Vec::new();

    for (pos, card) in game.board().iter() {
        let symbol = card.symbol.as_str();
        match seen.iter().position(|(_, s)| *s == symbol) {
            Some(index) => pairs.push((seen.remove(index).0, pos)),
            None => seen.push((pos, symbol)),
        }
    }

    pairs
}

/// Create a game and check the starting state.
#[test]
fn test_create_game_initial_state() {
    for (rows, cols) in [(2, 2), (2, 3), (4, 4), (6, 5)] {
        let game = Game::new(rows, cols, &mut GameRng::new(42));

        assert_eq!(game.moves(), 0);
        assert_eq!(game.matches(), 0);
        assert!(game.pending().is_empty());
        assert_eq!(game.total_pairs(), rows * cols / 2);
        assert!(game.board().iter().all(|(_, card)| card.state == CardState::Hidden));
    }
}

/// Out-of-bounds reveal leaves the game deep-equal to before.
#[test]
fn test_out_of_bounds_reveal_changes_nothing() {
    let mut game = Game::with_seed(3, 4, 1);
    let before = game.clone();

    assert!(!game.reveal_card(3, 0));
    assert!(!game.reveal_card(0, 4));
    assert!(!game.reveal_card(usize::MAX, usize::MAX));
    assert_eq!(game, before);
}

/// A third reveal while two are pending is refused.
#[test]
fn test_third_reveal_refused() {
    let mut game = Game::with_seed(3, 4, 1);
    assert!(game.reveal_card(0, 0));
    assert!(game.reveal_card(0, 1));

    let before = game.clone();
    assert!(!game.reveal_card(2, 3));
    assert_eq!(game, before);
    assert_eq!(game.card(Position::new(2, 3)).unwrap().state, CardState::Hidden);
}

/// A card cannot be paired with itself.
#[test]
fn test_same_card_twice() {
    let mut game = Game::with_seed(2, 2, 8);
    assert!(game.reveal_card(1, 1));
    assert!(!game.reveal_card(1, 1));
    assert_eq!(game.pending(), &[Position::new(1, 1)]);
}

/// Matching pair becomes found.
#[test]
fn test_resolve_match() {
    let mut game = Game::with_seed(4, 4, 99);
    let (a, b) = pairs_of(&game)[0];

    assert!(game.reveal(a));
    assert!(game.reveal(b));
    assert_eq!(game.resolve_pending(), ResolveOutcome::committed(true));

    assert_eq!(game.card(a).unwrap().state, CardState::Found);
    assert_eq!(game.card(b).unwrap().state, CardState::Found);
    assert_eq!(game.matches(), 1);
    assert_eq!(game.moves(), 1);
    assert!(game.pending().is_empty());
}

/// Non-matching pair flips back.
#[test]
fn test_resolve_mismatch() {
    let mut game = Game::with_seed(4, 4, 99);
    let pairs = pairs_of(&game);
    let a = pairs[0].0;
    let b = pairs[1].0;

    game.reveal(a);
    game.reveal(b);
    let (resolved, matched): (bool, bool) = game.resolve_pending().into();

    assert!(resolved);
    assert!(!matched);
    assert_eq!(game.card(a).unwrap().state, CardState::Hidden);
    assert_eq!(game.card(b).unwrap().state, CardState::Hidden);
    assert_eq!(game.matches(), 0);
    assert_eq!(game.moves(), 1);
}

/// Resolve with zero or one pending does nothing.
#[test]
fn test_resolve_not_due() {
    let mut game = Game::with_seed(2, 4, 5);
    let before = game.clone();
    assert_eq!(game.resolve_pending(), ResolveOutcome::NOT_DUE);
    assert_eq!(game, before);

    game.reveal_card(0, 2);
    let before = game.clone();
    assert_eq!(game.resolve_pending(), ResolveOutcome::NOT_DUE);
    assert_eq!(game, before);
}

/// Seeded 2x2 scenario: A B / B A.
#[test]
fn test_seeded_two_by_two_scenario() {
    let mut game = Game::from_pool(2, 2, ["A", "B", "B", "A"]).unwrap();

    assert!(game.reveal_card(0, 0));
    assert!(game.reveal_card(1, 1));
    let outcome = game.resolve_pending();
    assert!(outcome.resolved);
    assert!(outcome.matched);
    assert_eq!(game.matches(), 1);
    assert!(!game.has_won());

    assert!(game.reveal_card(1, 0));
    assert!(game.reveal_card(0, 1));
    assert_eq!(game.resolve_pending(), ResolveOutcome::committed(true));
    assert_eq!(game.matches(), 2);
    assert!(game.has_won());
}

/// Solving every pair wins, whatever order the pairs are found in.
#[test]
fn test_full_solve_wins() {
    for seed in 0..10 {
        let mut game = Game::with_seed(4, 6, seed);
        let mut pairs = pairs_of(&game);
        if seed % 2 == 1 {
            pairs.reverse();
        }

        for (a, b) in pairs {
            assert!(!game.has_won());
            assert!(game.reveal(a));
            assert!(game.reveal(b));
            assert!(game.resolve_pending().matched);
        }

        assert!(game.has_won());
        assert_eq!(game.moves(), 12);
        assert_eq!(game.board().count_in_state(CardState::Found), 24);
    }
}

/// Misses count as moves but not matches.
#[test]
fn test_moves_count_misses() {
    let mut game = Game::with_seed(2, 2, 3);
    let pairs = pairs_of(&game);

    game.reveal(pairs[0].0);
    game.reveal(pairs[1].0);
    game.resolve_pending();

    for (a, b) in pairs {
        game.reveal(a);
        game.reveal(b);
        game.resolve_pending();
    }

    assert_eq!(game.moves(), 3);
    assert_eq!(game.matches(), 2);
    assert!(game.has_won());
}

/// Odd boards can still be won once every real pair is found.
#[test]
fn test_odd_board_unpaired_card() {
    let mut game = Game::with_seed(3, 3, 21);
    let pairs = pairs_of(&game);
    assert_eq!(pairs.len(), 4);

    for (a, b) in pairs {
        game.reveal(a);
        game.reveal(b);
        game.resolve_pending();
    }

    assert!(game.has_won());
    assert_eq!(game.board().count_in_state(CardState::Hidden), 1);
}

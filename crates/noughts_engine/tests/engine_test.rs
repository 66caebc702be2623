//! Integration tests for the game engine lifecycle.

use noughts_engine::{
    Coord, GameEngine, GameStatus, Line, Move, MoveError, Player, StrategyKind, Symbol,
};

fn engine() -> GameEngine {
    GameEngine::with_seed(3, 3, Player::defaults(), 5).unwrap()
}

fn play(engine: &mut GameEngine, moves: &[(usize, usize)]) {
    for &(row, col) in moves {
        let symbol = *engine.current_player().symbol();
        engine.apply_move(Move::new(row, col, symbol)).unwrap();
        engine.switch_player();
    }
}

#[test]
fn test_new_engine_starts_empty() {
    let engine = engine();
    assert_eq!(engine.current_index(), 0);
    assert_eq!(engine.status(), GameStatus::InProgress);
    assert!(!engine.game_won());
    assert_eq!(engine.board().empty_cells().count(), 9);
}

#[test]
fn test_full_board_without_line_is_tie() {
    let mut engine = engine();
    // X O X / X O O / O X X
    play(
        &mut engine,
        &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
    );
    assert!(engine.is_tie());
    assert_eq!(engine.has_winner(), None);
    assert_eq!(engine.status(), GameStatus::Tie);
    assert_eq!(engine.best_move(), None);
}

#[test]
fn test_won_board_rejects_moves() {
    let mut engine = engine();
    play(&mut engine, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

    assert!(engine.game_won());
    assert_eq!(engine.has_winner(), Some(Symbol::new('X')));
    assert_eq!(engine.winning_combination().map(|c| *c.line()), Some(Line::Row(0)));

    let blocked = Move::new(2, 2, 'O');
    assert!(!engine.is_valid_move(&blocked));
    assert_eq!(engine.apply_move(blocked), Err(MoveError::GameOver));
    assert!(engine.board().is_empty(Coord::new(2, 2)));
}

#[test]
fn test_is_valid_move() {
    let mut engine = engine();
    play(&mut engine, &[(1, 1)]);
    assert!(!engine.is_valid_move(&Move::new(1, 1, 'O')));
    assert!(!engine.is_valid_move(&Move::new(3, 0, 'O')));
    assert!(engine.is_valid_move(&Move::new(0, 0, 'O')));
    assert_eq!(
        engine.apply_move(Move::new(3, 0, 'O')),
        Err(MoveError::OutOfBounds(Coord::new(3, 0)))
    );
}

#[test]
fn test_apply_then_retract_restores_state() {
    let mut engine = engine();
    play(&mut engine, &[(0, 0), (1, 0), (0, 1), (1, 1)]);
    let board_before = engine.board().clone();

    engine.apply_move(Move::new(0, 2, 'X')).unwrap();
    assert!(engine.game_won());

    let retracted = engine.retract_move(Coord::new(0, 2)).unwrap();
    assert_eq!(retracted, Move::new(0, 2, 'X'));
    assert_eq!(engine.board(), &board_before);
    assert!(!engine.game_won());
    assert_eq!(engine.winning_combination(), None);
    assert_eq!(engine.status(), GameStatus::InProgress);
}

#[test]
fn test_reset_keeps_roster_and_assignments() {
    let mut engine = engine();
    engine.toggle_ai(1).unwrap();
    engine.set_strategy(1, StrategyKind::Greedy).unwrap();
    play(&mut engine, &[(0, 0), (1, 1), (2, 2)]);

    engine.reset();

    assert_eq!(engine.current_index(), 0);
    assert_eq!(engine.board().empty_cells().count(), 9);
    assert!(!engine.game_won());
    assert!(engine.players()[1].is_ai());
    assert_eq!(engine.strategy_for(1), Ok(StrategyKind::Greedy));
}

#[test]
fn test_toggle_current_player_is_visible_immediately() {
    let mut engine = engine();
    play(&mut engine, &[(0, 0)]);
    assert_eq!(engine.current_index(), 1);
    assert!(!engine.current_player().is_ai());
    engine.toggle_ai(1).unwrap();
    assert!(engine.current_player().is_ai());
    engine.toggle_ai(1).unwrap();
    assert!(!engine.current_player().is_ai());
}

#[test]
fn test_three_player_game_on_four_by_four() {
    let mut players = Player::defaults();
    players.push(Player::new('Z', "Green", "#1f9d3a"));
    let mut engine = GameEngine::with_seed(4, 4, players, 9).unwrap();

    // X fills the left column while O and Z play elsewhere.
    play(
        &mut engine,
        &[
            (0, 0), (0, 1), (0, 2),
            (1, 0), (1, 1), (1, 2),
            (2, 0), (2, 1), (3, 3),
            (3, 0),
        ],
    );
    assert_eq!(engine.status(), GameStatus::Won(Symbol::new('X')));
    assert_eq!(engine.winning_combination().map(|c| *c.line()), Some(Line::Column(0)));
}

#[test]
fn test_best_move_uses_assigned_strategy() {
    let mut engine = engine();
    // X . . / . . . / . . .  with O to move
    play(&mut engine, &[(0, 0)]);

    engine.set_strategy(1, StrategyKind::Greedy).unwrap();
    assert_eq!(engine.best_move(), Some(Coord::new(0, 1)));

    engine.set_strategy(1, StrategyKind::Minimax).unwrap();
    assert_eq!(engine.best_move(), Some(Coord::new(1, 1)));
}

#[test]
fn test_best_move_for_other_player() {
    let mut engine = engine();
    play(&mut engine, &[(0, 0), (1, 0), (0, 1)]);
    // O to move, but ask what X would play: the win at (0, 2).
    assert_eq!(engine.best_move_for(0), Ok(Some(Coord::new(0, 2))));
    // O blocks the same cell.
    assert_eq!(engine.best_move_for(1), Ok(Some(Coord::new(0, 2))));
    assert!(engine.best_move_for(2).is_err());
}

#[test]
fn test_best_move_leaves_engine_untouched() {
    let mut engine = engine();
    play(&mut engine, &[(1, 1), (0, 0)]);
    let before = engine.board().clone();
    engine.best_move();
    assert_eq!(engine.board(), &before);
    assert_eq!(engine.current_index(), 0);
}

#[test]
fn test_ai_versus_ai_minimax_ties() {
    let mut engine = engine();
    while !engine.status().is_over() {
        let coord = engine.best_move().unwrap();
        let symbol = *engine.current_player().symbol();
        engine.apply_move(Move::at(coord, symbol)).unwrap();
        engine.switch_player();
    }
    assert_eq!(engine.status(), GameStatus::Tie);
}

//! Game engine: board ownership, turn order, win/tie tracking and AI dispatch.

use crate::rules::WinningCombination;
use crate::strategy::{StrategyKind, StrategySet, Turn};
use crate::{Board, Coord, GameStatus, Move, MoveError, Player, SetupError, Symbol};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe engine for a square board and an ordered roster.
///
/// The current player is always looked up by index, so toggling a player's
/// AI flag is visible immediately through [`GameEngine::current_player`].
#[derive(Debug)]
pub struct GameEngine {
    board: Board,
    players: Vec<Player>,
    current: usize,
    winning_combination: Option<WinningCombination>,
    assignments: HashMap<Symbol, StrategyKind>,
    strategies: StrategySet,
}

impl GameEngine {
    /// Creates an engine whose random strategy is seeded from entropy.
    ///
    /// # Errors
    ///
    /// Returns a [`SetupError`] for an empty or non-square board, fewer than
    /// two players, a blank symbol, or a symbol used twice.
    #[instrument(skip(players), fields(player_count = players.len()))]
    pub fn new(rows: usize, cols: usize, players: Vec<Player>) -> Result<Self, SetupError> {
        Self::build(rows, cols, players, StrategySet::from_entropy())
    }

    /// Creates an engine whose random strategy uses `seed`.
    ///
    /// # Errors
    ///
    /// Same as [`GameEngine::new`].
    #[instrument(skip(players), fields(player_count = players.len()))]
    pub fn with_seed(rows: usize, cols: usize, players: Vec<Player>, seed: u64) -> Result<Self, SetupError> {
        Self::build(rows, cols, players, StrategySet::with_seed(seed))
    }

    /// The classic 3×3 game between Red (X) and Blue (O).
    pub fn classic() -> Self {
        let players = Player::defaults();
        Self {
            board: Board::classic(),
            assignments: players
                .iter()
                .map(|p| (*p.symbol(), StrategyKind::default()))
                .collect(),
            players,
            current: 0,
            winning_combination: None,
            strategies: StrategySet::from_entropy(),
        }
    }

    fn build(rows: usize, cols: usize, players: Vec<Player>, strategies: StrategySet) -> Result<Self, SetupError> {
        let board = Board::new(rows, cols)?;
        validate_roster(&players)?;

        let assignments = players
            .iter()
            .map(|p| (*p.symbol(), StrategyKind::default()))
            .collect();

        info!(rows, cols, players = players.len(), "Engine created");
        Ok(Self {
            board,
            players,
            current: 0,
            winning_combination: None,
            assignments,
            strategies,
        })
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The roster in turn order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Index of the player to move.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The player to move.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// The player at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::UnknownPlayer`] if the index is out of range.
    pub fn player(&self, index: usize) -> Result<&Player, SetupError> {
        self.players.get(index).ok_or(SetupError::UnknownPlayer(index))
    }

    /// Index of the player a search at `index` plays against.
    ///
    /// Player 0 plays against player 1; everyone else plays against player 0.
    pub fn opponent_of(&self, index: usize) -> usize {
        if index == 0 { 1 } else { 0 }
    }

    /// Whether a winning combination has been recorded.
    pub fn game_won(&self) -> bool {
        self.winning_combination.is_some()
    }

    /// The recorded winning combination, if any.
    pub fn winning_combination(&self) -> Option<&WinningCombination> {
        self.winning_combination.as_ref()
    }

    /// Checks if `mv` may be applied: the game is undecided, the cell is on
    /// the board and empty.
    pub fn is_valid_move(&self, mv: &Move) -> bool {
        !self.game_won() && self.board.is_empty(mv.coord)
    }

    /// Writes `mv` to the board and records the first completed combination.
    ///
    /// Does not advance the turn; call [`GameEngine::switch_player`].
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] once a combination is complete, or the
    /// board's placement error for an occupied or off-board cell. Nothing is
    /// written on error.
    #[instrument(skip(self, mv), fields(mv = %mv))]
    pub fn apply_move(&mut self, mv: Move) -> Result<(), MoveError> {
        if self.game_won() {
            warn!("Move rejected, game is already over");
            return Err(MoveError::GameOver);
        }
        self.board.place(mv.coord, mv.symbol).inspect_err(|e| {
            warn!(error = %e, "Move rejected");
        })?;
        debug!("Move applied");

        self.record_winner();
        Ok(())
    }

    /// Clears the placement at `coord` and re-derives the winning state.
    ///
    /// Applying a move and retracting it leaves the engine as it was.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] off the board and
    /// [`MoveError::NothingToRetract`] for an empty cell.
    #[instrument(skip(self))]
    pub fn retract_move(&mut self, coord: Coord) -> Result<Move, MoveError> {
        if self.board.is_empty(coord) {
            return Err(MoveError::NothingToRetract(coord));
        }
        let symbol = self
            .board
            .clear(coord)?
            .symbol()
            .ok_or(MoveError::NothingToRetract(coord))?;
        self.record_winner();
        debug!(%symbol, "Move retracted");
        Ok(Move::at(coord, symbol))
    }

    fn record_winner(&mut self) {
        self.winning_combination = self.board.winning_combination().cloned();
        if let Some(combination) = &self.winning_combination {
            info!(line = %combination.line(), winner = ?self.board.winner(), "Winning combination completed");
        }
    }

    /// Advances to the next player, wrapping around the roster.
    pub fn switch_player(&mut self) {
        self.current = (self.current + 1) % self.players.len();
        debug!(current = self.current, "Switched player");
    }

    /// Symbol owning the first completed combination, derived from the board.
    pub fn has_winner(&self) -> Option<Symbol> {
        self.board.winner()
    }

    /// Full board with no completed combination.
    pub fn is_tie(&self) -> bool {
        self.board.is_tie()
    }

    /// Status derived from the board.
    pub fn status(&self) -> GameStatus {
        match self.has_winner() {
            Some(symbol) => GameStatus::Won(symbol),
            None if self.board.is_full() => GameStatus::Tie,
            None => GameStatus::InProgress,
        }
    }

    /// Empties the board and hands the turn back to player 0.
    ///
    /// The roster, AI flags and strategy assignments are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.clear_all();
        self.winning_combination = None;
        self.current = 0;
        info!("Game reset");
    }

    /// Flips the AI flag of the player at `index`, returning the new value.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::UnknownPlayer`] if the index is out of range.
    #[instrument(skip(self))]
    pub fn toggle_ai(&mut self, index: usize) -> Result<bool, SetupError> {
        let player = self
            .players
            .get_mut(index)
            .ok_or(SetupError::UnknownPlayer(index))?;
        let is_ai = player.toggle_ai();
        info!(player = %player.name(), is_ai, "Toggled AI");
        Ok(is_ai)
    }

    /// Assigns a strategy to the player at `index`; used from their next move.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::UnknownPlayer`] if the index is out of range.
    #[instrument(skip(self))]
    pub fn set_strategy(&mut self, index: usize, kind: StrategyKind) -> Result<(), SetupError> {
        let symbol = *self.player(index)?.symbol();
        self.assignments.insert(symbol, kind);
        info!(%symbol, %kind, "Strategy assigned");
        Ok(())
    }

    /// The strategy assigned to the player at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::UnknownPlayer`] if the index is out of range.
    pub fn strategy_for(&self, index: usize) -> Result<StrategyKind, SetupError> {
        let symbol = self.player(index)?.symbol();
        Ok(self.assignments.get(symbol).copied().unwrap_or_default())
    }

    /// Move for the current player from their assigned strategy.
    ///
    /// Returns `None` when the board is full.
    pub fn best_move(&mut self) -> Option<Coord> {
        let index = self.current;
        self.choose_for(index)
    }

    /// Move for the player at `index` from their assigned strategy.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::UnknownPlayer`] if the index is out of range.
    pub fn best_move_for(&mut self, index: usize) -> Result<Option<Coord>, SetupError> {
        self.player(index)?;
        Ok(self.choose_for(index))
    }

    #[instrument(skip(self))]
    fn choose_for(&mut self, index: usize) -> Option<Coord> {
        let actor = *self.players[index].symbol();
        let opponent = *self.players[self.opponent_of(index)].symbol();
        let kind = self.assignments.get(&actor).copied().unwrap_or_default();

        let choice = self
            .strategies
            .get_mut(kind)
            .choose_move(&mut self.board, Turn { actor, opponent });
        debug!(%actor, %kind, ?choice, "Strategy chose move");
        choice
    }
}

fn validate_roster(players: &[Player]) -> Result<(), SetupError> {
    if players.len() < 2 {
        return Err(SetupError::TooFewPlayers(players.len()));
    }

    let mut seen = HashSet::new();
    for player in players {
        let symbol = *player.symbol();
        if symbol.is_blank() {
            return Err(SetupError::BlankSymbol);
        }
        if !seen.insert(symbol) {
            return Err(SetupError::DuplicateSymbol(symbol));
        }
    }
    Ok(())
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> GameEngine {
        GameEngine::with_seed(3, 3, Player::defaults(), 11).unwrap()
    }

    #[test]
    fn test_rejects_single_player() {
        let players = vec![Player::new('X', "Solo", "#000000")];
        assert_eq!(
            GameEngine::new(3, 3, players).unwrap_err(),
            SetupError::TooFewPlayers(1)
        );
    }

    #[test]
    fn test_rejects_duplicate_symbols() {
        let players = vec![
            Player::new('X', "Red", "#d31626"),
            Player::new('X', "Blue", "#0079c8"),
        ];
        assert_eq!(
            GameEngine::new(3, 3, players).unwrap_err(),
            SetupError::DuplicateSymbol(Symbol::new('X'))
        );
    }

    #[test]
    fn test_rejects_blank_symbol() {
        let players = vec![
            Player::new('X', "Red", "#d31626"),
            Player::new(' ', "Ghost", "#ffffff"),
        ];
        assert_eq!(GameEngine::new(3, 3, players).unwrap_err(), SetupError::BlankSymbol);
    }

    #[test]
    fn test_rejects_bad_board() {
        assert_eq!(
            GameEngine::new(0, 0, Player::defaults()).unwrap_err(),
            SetupError::EmptyBoard
        );
        assert_eq!(
            GameEngine::new(3, 4, Player::defaults()).unwrap_err(),
            SetupError::NonSquareBoard { rows: 3, cols: 4 }
        );
    }

    #[test]
    fn test_switch_player_wraps_for_three_players() {
        let mut players = Player::defaults();
        players.push(Player::new('Z', "Green", "#00a000"));
        let mut engine = GameEngine::with_seed(4, 4, players, 1).unwrap();
        let order: Vec<usize> = (0..4)
            .map(|_| {
                let i = engine.current_index();
                engine.switch_player();
                i
            })
            .collect();
        assert_eq!(order, vec![0, 1, 2, 0]);
    }

    #[test]
    fn test_toggle_ai_refreshes_current_player() {
        let mut engine = engine();
        assert!(!engine.current_player().is_ai());
        assert!(engine.toggle_ai(0).unwrap());
        assert!(engine.current_player().is_ai());
        assert_eq!(engine.toggle_ai(5), Err(SetupError::UnknownPlayer(5)));
    }

    #[test]
    fn test_opponent_of() {
        let engine = engine();
        assert_eq!(engine.opponent_of(0), 1);
        assert_eq!(engine.opponent_of(1), 0);
        assert_eq!(engine.opponent_of(2), 0);
    }

    #[test]
    fn test_default_strategy_is_minimax() {
        let engine = engine();
        assert_eq!(engine.strategy_for(0), Ok(StrategyKind::Minimax));
        assert_eq!(engine.strategy_for(1), Ok(StrategyKind::Minimax));
        assert_eq!(engine.strategy_for(2), Err(SetupError::UnknownPlayer(2)));
    }

    #[test]
    fn test_apply_rejects_occupied_without_writing() {
        let mut engine = engine();
        engine.apply_move(Move::new(0, 0, 'X')).unwrap();
        assert_eq!(
            engine.apply_move(Move::new(0, 0, 'O')),
            Err(MoveError::CellOccupied(Coord::new(0, 0)))
        );
        assert_eq!(
            engine.board().get(Coord::new(0, 0)),
            Some(crate::Square::Occupied(Symbol::new('X')))
        );
    }

    #[test]
    fn test_retract_empty_cell() {
        let mut engine = engine();
        assert_eq!(
            engine.retract_move(Coord::new(1, 1)),
            Err(MoveError::NothingToRetract(Coord::new(1, 1)))
        );
    }

    #[test]
    fn test_status_transitions() {
        let mut engine = engine();
        assert_eq!(engine.status(), GameStatus::InProgress);
        for (row, col, sym) in [(0, 0, 'X'), (1, 0, 'O'), (0, 1, 'X'), (1, 1, 'O'), (0, 2, 'X')] {
            engine.apply_move(Move::new(row, col, sym)).unwrap();
        }
        assert_eq!(engine.status(), GameStatus::Won(Symbol::new('X')));
        assert!(engine.status().is_over());
    }
}

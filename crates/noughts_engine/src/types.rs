//! Core domain types: symbols, coordinates, squares, moves and players.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// The mark a player leaves on the board.
///
/// A symbol is a single non-whitespace character and must be unique
/// within a roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(char);

impl Symbol {
    /// Creates a symbol from a character.
    pub const fn new(c: char) -> Self {
        Self(c)
    }

    /// Returns the underlying character.
    pub const fn as_char(self) -> char {
        self.0
    }

    /// Whether this symbol can actually be seen on a board.
    pub fn is_blank(self) -> bool {
        self.0.is_whitespace()
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Self(c)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A (row, column) coordinate, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Unoccupied square.
    #[default]
    Empty,
    /// Square holding a player's symbol.
    Occupied(Symbol),
}

impl Square {
    /// Returns the occupant, if any.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Square::Empty => None,
            Square::Occupied(symbol) => Some(symbol),
        }
    }

    /// Whether the square is unoccupied.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }
}

/// A player placing their symbol at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Target coordinate.
    pub coord: Coord,
    /// Symbol being placed.
    pub symbol: Symbol,
}

impl Move {
    /// Creates a new move.
    pub fn new(row: usize, col: usize, symbol: impl Into<Symbol>) -> Self {
        Self {
            coord: Coord::new(row, col),
            symbol: symbol.into(),
        }
    }

    /// Creates a move from a coordinate.
    pub fn at(coord: Coord, symbol: Symbol) -> Self {
        Self { coord, symbol }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.symbol, self.coord)
    }
}

/// A participant in the game.
///
/// Everything except the AI flag is fixed once the player is created.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Symbol placed on the board.
    symbol: Symbol,
    /// Display name.
    name: String,
    /// Display color as a hex string (`#rrggbb`).
    color: String,
    /// Whether moves are computed by a strategy.
    #[serde(default)]
    #[getter(skip)]
    is_ai: bool,
}

impl Player {
    /// Creates a human-controlled player.
    pub fn new(symbol: impl Into<Symbol>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            color: color.into(),
            is_ai: false,
        }
    }

    /// Whether moves are computed by a strategy.
    pub fn is_ai(&self) -> bool {
        self.is_ai
    }

    /// Returns this player with the AI flag set.
    pub fn with_ai(mut self, is_ai: bool) -> Self {
        self.is_ai = is_ai;
        self
    }

    /// Flips the AI flag and returns the new value.
    pub(crate) fn toggle_ai(&mut self) -> bool {
        self.is_ai = !self.is_ai;
        self.is_ai
    }

    /// The classic two-player roster: Red plays X, Blue plays O.
    pub fn defaults() -> Vec<Player> {
        vec![
            Player::new('X', "Red", "#d31626"),
            Player::new('O', "Blue", "#0079c8"),
        ]
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves can still be made.
    InProgress,
    /// A winning combination was completed.
    Won(Symbol),
    /// The board is full and nobody won.
    Tie,
}

impl GameStatus {
    /// Whether the game has ended.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_symbol() {
        assert_eq!(Square::Empty.symbol(), None);
        assert_eq!(Square::Occupied(Symbol::new('X')).symbol(), Some(Symbol::new('X')));
        assert!(Square::default().is_empty());
    }

    #[test]
    fn test_toggle_ai() {
        let mut player = Player::new('X', "Red", "#d31626");
        assert!(!player.is_ai());
        assert!(player.toggle_ai());
        assert!(!player.toggle_ai());
    }

    #[test]
    fn test_blank_symbol() {
        assert!(Symbol::new(' ').is_blank());
        assert!(!Symbol::new('X').is_blank());
    }

    #[test]
    fn test_player_deserializes_without_ai_flag() {
        let json = r##"{"symbol":"Z","name":"Green","color":"#00ff00"}"##;
        let player: Player = serde_json::from_str(json).unwrap();
        assert_eq!(*player.symbol(), Symbol::new('Z'));
        assert!(!player.is_ai());
    }
}

//! Fixed-size square grid of cells.

use crate::rules::{self, WinningCombination};
use crate::{Coord, MoveError, SetupError, Square, Symbol};
use std::ops::{Deref, DerefMut};
use tracing::instrument;

/// A square grid of cells stored in row-major order.
///
/// The winning combinations for the board's size are computed once at
/// construction and reused by every scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    squares: Vec<Square>,
    combinations: Vec<WinningCombination>,
}

impl Board {
    /// Creates an empty board.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::EmptyBoard`] for a zero dimension and
    /// [`SetupError::NonSquareBoard`] when `rows != cols`.
    #[instrument]
    pub fn new(rows: usize, cols: usize) -> Result<Self, SetupError> {
        if rows == 0 || cols == 0 {
            return Err(SetupError::EmptyBoard);
        }
        if rows != cols {
            return Err(SetupError::NonSquareBoard { rows, cols });
        }

        Ok(Self {
            rows,
            cols,
            squares: vec![Square::Empty; rows * cols],
            combinations: rules::winning_combinations(rows),
        })
    }

    /// The classic 3×3 board.
    pub fn classic() -> Self {
        Self {
            rows: 3,
            cols: 3,
            squares: vec![Square::Empty; 9],
            combinations: rules::winning_combinations(3),
        }
    }

    /// Builds a board from one string per row.
    ///
    /// `.`, `_` and spaces are empty cells; any other character is a symbol.
    ///
    /// ```
    /// use noughts_engine::{Board, Coord, Square, Symbol};
    ///
    /// let board = Board::parse(&["XX.", "OO.", "..."]).unwrap();
    /// assert_eq!(board.get(Coord::new(1, 0)), Some(Square::Occupied(Symbol::new('O'))));
    /// assert!(board.is_empty(Coord::new(1, 2)));
    /// ```
    ///
    /// # Errors
    ///
    /// Fails when rows differ in width or the result is not square.
    pub fn parse(rows: &[&str]) -> Result<Self, SetupError> {
        let expected = rows.first().map_or(0, |r| r.chars().count());
        let mut board = Self::new(rows.len(), expected)?;

        for (row, text) in rows.iter().enumerate() {
            let found = text.chars().count();
            if found != expected {
                return Err(SetupError::RaggedRow { row, found, expected });
            }
            for (col, c) in text.chars().enumerate() {
                let square = match c {
                    '.' | '_' | ' ' => Square::Empty,
                    other => Square::Occupied(Symbol::new(other)),
                };
                board.set(Coord::new(row, col), square);
            }
        }

        Ok(board)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether `coord` lies on the board.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// Returns the square at `coord`, or `None` off the board.
    pub fn get(&self, coord: Coord) -> Option<Square> {
        self.index_of(coord).map(|i| self.squares[i])
    }

    /// Checks if the square at `coord` is on the board and unoccupied.
    pub fn is_empty(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(Square::Empty))
    }

    /// All squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// The squares of one row.
    pub fn row(&self, row: usize) -> &[Square] {
        let start = row * self.cols;
        &self.squares[start..start + self.cols]
    }

    /// Coordinates of every empty cell in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, sq)| sq.is_empty())
            .map(|(i, _)| self.coord_of(i))
    }

    /// The winning combinations for this board's size, in scan order.
    pub fn combinations(&self) -> &[WinningCombination] {
        &self.combinations
    }

    /// First completed combination in scan order.
    pub fn winning_combination(&self) -> Option<&WinningCombination> {
        rules::winning_combination(self)
    }

    /// Symbol that completed a combination, if any.
    pub fn winner(&self) -> Option<Symbol> {
        rules::check_winner(self)
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Full board without a completed combination.
    pub fn is_tie(&self) -> bool {
        rules::is_tie(self)
    }

    /// Writes `symbol` into an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] or [`MoveError::CellOccupied`];
    /// an occupied cell is never overwritten.
    pub fn place(&mut self, coord: Coord, symbol: Symbol) -> Result<(), MoveError> {
        match self.get(coord) {
            None => Err(MoveError::OutOfBounds(coord)),
            Some(Square::Occupied(_)) => Err(MoveError::CellOccupied(coord)),
            Some(Square::Empty) => {
                self.set(coord, Square::Occupied(symbol));
                Ok(())
            }
        }
    }

    /// Empties a cell, returning what it held.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] off the board.
    pub fn clear(&mut self, coord: Coord) -> Result<Square, MoveError> {
        let previous = self.get(coord).ok_or(MoveError::OutOfBounds(coord))?;
        self.set(coord, Square::Empty);
        Ok(previous)
    }

    /// Empties every cell.
    pub fn clear_all(&mut self) {
        self.squares.fill(Square::Empty);
    }

    /// Temporarily places `symbol` at `coord`.
    ///
    /// The cell is emptied again when the returned guard is dropped, on every
    /// exit path. The guard dereferences to the board so searches can recurse
    /// through it.
    ///
    /// ```
    /// use noughts_engine::{Board, Coord, Symbol};
    ///
    /// let mut board = Board::new(3, 3).unwrap();
    /// {
    ///     let placed = board.simulate(Coord::new(1, 1), Symbol::new('X')).unwrap();
    ///     assert!(!placed.is_empty(Coord::new(1, 1)));
    /// }
    /// assert!(board.is_empty(Coord::new(1, 1)));
    /// ```
    ///
    /// # Errors
    ///
    /// Fails like [`Board::place`] when the cell is off the board or taken.
    pub fn simulate(&mut self, coord: Coord, symbol: Symbol) -> Result<Placement<'_>, MoveError> {
        self.place(coord, symbol)?;
        Ok(Placement { board: self, coord })
    }

    fn set(&mut self, coord: Coord, square: Square) {
        if let Some(i) = self.index_of(coord) {
            self.squares[i] = square;
        }
    }

    fn index_of(&self, coord: Coord) -> Option<usize> {
        self.contains(coord).then(|| coord.row * self.cols + coord.col)
    }

    fn coord_of(&self, index: usize) -> Coord {
        Coord::new(index / self.cols, index % self.cols)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.rows {
            let line: Vec<String> = self
                .row(row)
                .iter()
                .map(|sq| match sq {
                    Square::Empty => ".".to_string(),
                    Square::Occupied(symbol) => symbol.to_string(),
                })
                .collect();
            write!(f, "{}", line.join(" "))?;
            if row + 1 < self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// A simulated placement that is reverted on drop.
#[must_use = "the placement is reverted as soon as the guard is dropped"]
#[derive(Debug)]
pub struct Placement<'a> {
    board: &'a mut Board,
    coord: Coord,
}

impl Placement<'_> {
    /// The cell this placement occupies.
    pub fn coord(&self) -> Coord {
        self.coord
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.set(self.coord, Square::Empty);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(3, 3).unwrap();
        assert_eq!(board.empty_cells().count(), 9);
        assert!(!board.is_full());
        assert_eq!(board.combinations().len(), 8);
    }

    #[test]
    fn test_rejects_zero_size() {
        assert_eq!(Board::new(0, 0), Err(SetupError::EmptyBoard));
        assert_eq!(Board::new(3, 0), Err(SetupError::EmptyBoard));
    }

    #[test]
    fn test_rejects_non_square() {
        assert_eq!(
            Board::new(3, 4),
            Err(SetupError::NonSquareBoard { rows: 3, cols: 4 })
        );
    }

    #[test]
    fn test_parse_rejects_ragged_rows() {
        assert_eq!(
            Board::parse(&["XX.", "O.", "..."]),
            Err(SetupError::RaggedRow { row: 1, found: 2, expected: 3 })
        );
    }

    #[test]
    fn test_place_never_overwrites() {
        let mut board = Board::new(3, 3).unwrap();
        let c = Coord::new(0, 0);
        board.place(c, Symbol::new('X')).unwrap();
        assert_eq!(board.place(c, Symbol::new('O')), Err(MoveError::CellOccupied(c)));
        assert_eq!(board.get(c), Some(Square::Occupied(Symbol::new('X'))));
    }

    #[test]
    fn test_place_out_of_bounds() {
        let mut board = Board::new(3, 3).unwrap();
        let c = Coord::new(3, 0);
        assert_eq!(board.place(c, Symbol::new('X')), Err(MoveError::OutOfBounds(c)));
        assert!(!board.is_empty(c));
    }

    #[test]
    fn test_empty_cells_row_major() {
        let board = Board::parse(&["X.O", ".X.", "OO."]).unwrap();
        let cells: Vec<_> = board.empty_cells().collect();
        assert_eq!(
            cells,
            vec![Coord::new(0, 1), Coord::new(1, 0), Coord::new(1, 2), Coord::new(2, 2)]
        );
    }

    #[test]
    fn test_simulate_reverts_on_drop() {
        let mut board = Board::parse(&["X..", "...", "..."]).unwrap();
        let before = board.clone();
        {
            let mut placed = board.simulate(Coord::new(1, 1), Symbol::new('O')).unwrap();
            let nested = placed.simulate(Coord::new(2, 2), Symbol::new('X')).unwrap();
            assert_eq!(nested.empty_cells().count(), 6);
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_simulate_rejects_occupied() {
        let mut board = Board::parse(&["X..", "...", "..."]).unwrap();
        assert!(board.simulate(Coord::new(0, 0), Symbol::new('O')).is_err());
        assert_eq!(board.get(Coord::new(0, 0)), Some(Square::Occupied(Symbol::new('X'))));
    }

    #[test]
    fn test_display() {
        let board = Board::parse(&["X.O", "...", "..O"]).unwrap();
        assert_eq!(board.to_string(), "X . O\n. . .\n. . O");
    }
}

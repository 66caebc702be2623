//! Text rendering of the board and game status.

use crossterm::style::{Color, Stylize};
use noughts_engine::{Coord, GameEngine, GameStatus, Player, Square, Symbol};
use std::fmt::Write;

/// Parses a `#rrggbb` color, falling back to the terminal default.
pub fn parse_color(hex: &str) -> Color {
    let digits = hex.trim_start_matches('#');
    if digits.len() != 6 {
        return Color::Reset;
    }
    let channel = |range: std::ops::Range<usize>| {
        digits
            .get(range)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
    };
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Some(r), Some(g), Some(b)) => Color::Rgb { r, g, b },
        _ => Color::Reset,
    }
}

fn player_for(engine: &GameEngine, symbol: Symbol) -> Option<&Player> {
    engine.players().iter().find(|p| *p.symbol() == symbol)
}

/// Renders the board with column and row headers.
///
/// With `color` set, each symbol is drawn in its player's color and the
/// winning combination is bold.
pub fn render_board(engine: &GameEngine, color: bool) -> String {
    let board = engine.board();
    let winning = engine.winning_combination();
    let mut out = String::new();

    let _ = write!(out, "   ");
    for col in 0..board.cols() {
        let _ = write!(out, " {}", col);
    }
    out.push('\n');

    for row in 0..board.rows() {
        let _ = write!(out, "{:>3}", row);
        for col in 0..board.cols() {
            out.push(' ');
            let coord = Coord::new(row, col);
            match board.get(coord) {
                Some(Square::Occupied(symbol)) if color => {
                    let hex = player_for(engine, symbol).map_or("", |p| p.color().as_str());
                    let styled = symbol.as_char().with(parse_color(hex));
                    if winning.is_some_and(|w| w.contains(coord)) {
                        let _ = write!(out, "{}", styled.bold());
                    } else {
                        let _ = write!(out, "{}", styled);
                    }
                }
                Some(Square::Occupied(symbol)) => out.push(symbol.as_char()),
                _ => out.push('.'),
            }
        }
        out.push('\n');
    }
    out
}

/// One-line description of the game state.
pub fn render_status(engine: &GameEngine) -> String {
    match engine.status() {
        GameStatus::Won(symbol) => {
            let name = player_for(engine, symbol).map_or("Unknown", |p| p.name().as_str());
            format!("{} ({}) wins!", name, symbol)
        }
        GameStatus::Tie => "It's a tie.".to_string(),
        GameStatus::InProgress => {
            let index = engine.current_index();
            let player = engine.current_player();
            let control = match player.is_ai() {
                true => format!("computer, {}", engine.strategy_for(index).unwrap_or_default()),
                false => "human".to_string(),
            };
            format!("{} ({}) to move [{}]", player.name(), player.symbol(), control)
        }
    }
}

/// Numbered roster with control and strategy for each player.
pub fn render_roster(engine: &GameEngine) -> String {
    engine
        .players()
        .iter()
        .enumerate()
        .map(|(index, player)| {
            let control = if player.is_ai() { "computer" } else { "human" };
            format!(
                "  {}: {} ({}) {} / {}",
                index,
                player.name(),
                player.symbol(),
                control,
                engine.strategy_for(index).unwrap_or_default()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_engine::Move;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("#d31626"), Color::Rgb { r: 0xd3, g: 0x16, b: 0x26 });
        assert_eq!(parse_color("0079c8"), Color::Rgb { r: 0x00, g: 0x79, b: 0xc8 });
        assert_eq!(parse_color("#zzzzzz"), Color::Reset);
        assert_eq!(parse_color("red"), Color::Reset);
    }

    #[test]
    fn test_render_plain_board() {
        let mut engine = GameEngine::classic();
        engine.apply_move(Move::new(0, 0, 'X')).unwrap();
        engine.apply_move(Move::new(1, 2, 'O')).unwrap();
        assert_eq!(
            render_board(&engine, false),
            "    0 1 2\n  0 X . .\n  1 . . O\n  2 . . .\n"
        );
    }

    #[test]
    fn test_render_colored_board_contains_symbols() {
        let mut engine = GameEngine::classic();
        engine.apply_move(Move::new(1, 1, 'X')).unwrap();
        let out = render_board(&engine, true);
        assert!(out.contains('X'));
        assert_eq!(out.lines().count(), 4);
    }

    #[test]
    fn test_status_lines() {
        let mut engine = GameEngine::classic();
        assert_eq!(render_status(&engine), "Red (X) to move [human]");
        engine.toggle_ai(0).unwrap();
        assert_eq!(render_status(&engine), "Red (X) to move [computer, minimax]");

        for (row, col, sym) in [(0, 0, 'X'), (1, 0, 'O'), (0, 1, 'X'), (1, 1, 'O'), (0, 2, 'X')] {
            engine.apply_move(Move::new(row, col, sym)).unwrap();
        }
        assert_eq!(render_status(&engine), "Red (X) wins!");
    }

    #[test]
    fn test_roster_lists_every_player() {
        let engine = GameEngine::classic();
        assert_eq!(
            render_roster(&engine),
            "  0: Red (X) human / minimax\n  1: Blue (O) human / minimax"
        );
    }
}

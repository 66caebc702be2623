//! Interactive game loop between humans and computer players.

use crate::input::{Command, HELP};
use crate::render::{render_board, render_roster, render_status};
use anyhow::Result;
use noughts_engine::{GameEngine, Move};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// What the loop does after handling a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Redraw,
    Quit,
}

/// A terminal game session.
///
/// Reads commands line by line from `input` and writes the board and
/// messages to `output`. Computer players move without waiting for input.
pub struct Session<R, W> {
    engine: GameEngine,
    input: R,
    output: W,
    once: bool,
    color: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session around an engine.
    pub fn new(engine: GameEngine, input: R, output: W) -> Self {
        Self {
            engine,
            input,
            output,
            once: false,
            color: false,
        }
    }

    /// Ends the session as soon as a game finishes.
    pub fn once(mut self, once: bool) -> Self {
        self.once = once;
        self
    }

    /// Draws symbols in their players' colors.
    pub fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// The engine driving the session.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Runs until the player quits, input ends, or (with `once`) the game
    /// is decided.
    #[instrument(skip(self), fields(once = self.once))]
    pub fn run(&mut self) -> Result<()> {
        info!("Starting game session");
        writeln!(self.output, "Players:\n{}", render_roster(&self.engine))?;
        writeln!(self.output, "Type 'help' for commands.")?;
        self.draw()?;

        loop {
            let status = self.engine.status();

            if status.is_over() {
                info!(?status, "Game finished");
                if self.once {
                    return Ok(());
                }
            } else if self.engine.current_player().is_ai() {
                self.play_ai_turn()?;
                continue;
            }

            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                debug!("Input closed");
                return Ok(());
            }

            let flow = match line.parse::<Command>() {
                Ok(command) => self.handle(command)?,
                Err(e) => {
                    writeln!(self.output, "{}", e)?;
                    Flow::Continue
                }
            };

            match flow {
                Flow::Quit => return Ok(()),
                Flow::Redraw => self.draw()?,
                Flow::Continue => {}
            }
        }
    }

    fn draw(&mut self) -> Result<()> {
        write!(self.output, "\n{}", render_board(&self.engine, self.color))?;
        writeln!(self.output, "{}", render_status(&self.engine))?;
        if self.engine.status().is_over() && !self.once {
            writeln!(self.output, "Type 'reset' to play again or 'quit' to leave.")?;
        }
        Ok(())
    }

    fn play_ai_turn(&mut self) -> Result<()> {
        let player = self.engine.current_player().clone();
        let Some(coord) = self.engine.best_move() else {
            anyhow::bail!("No move available for {} on an undecided board", player.name());
        };

        self.engine.apply_move(Move::at(coord, *player.symbol()))?;
        writeln!(self.output, "{} plays {}", player.name(), coord)?;
        self.finish_turn();
        self.draw()
    }

    fn finish_turn(&mut self) {
        if !self.engine.status().is_over() {
            self.engine.switch_player();
        }
    }

    fn handle(&mut self, command: Command) -> Result<Flow> {
        debug!(?command, "Handling command");
        match command {
            Command::Quit => Ok(Flow::Quit),
            Command::Help => {
                writeln!(self.output, "{}", HELP)?;
                Ok(Flow::Continue)
            }
            Command::Reset => {
                self.engine.reset();
                writeln!(self.output, "New game.")?;
                Ok(Flow::Redraw)
            }
            Command::ToggleAi(index) => match self.engine.toggle_ai(index) {
                Ok(is_ai) => {
                    let name = self.engine.players()[index].name();
                    let control = if is_ai { "computer" } else { "human" };
                    writeln!(self.output, "{} is now {}.", name, control)?;
                    Ok(Flow::Redraw)
                }
                Err(e) => {
                    writeln!(self.output, "{}", e)?;
                    Ok(Flow::Continue)
                }
            },
            Command::Strategy(index, kind) => {
                match self.engine.set_strategy(index, kind) {
                    Ok(()) => writeln!(
                        self.output,
                        "{} now uses {}.",
                        self.engine.players()[index].name(),
                        kind
                    )?,
                    Err(e) => writeln!(self.output, "{}", e)?,
                }
                Ok(Flow::Continue)
            }
            Command::Place(coord) => {
                let symbol = *self.engine.current_player().symbol();
                match self.engine.apply_move(Move::at(coord, symbol)) {
                    Ok(()) => {
                        self.finish_turn();
                        Ok(Flow::Redraw)
                    }
                    Err(e) => {
                        warn!(%coord, error = %e, "Human move rejected");
                        writeln!(self.output, "{}", e)?;
                        Ok(Flow::Continue)
                    }
                }
            }
        }
    }
}

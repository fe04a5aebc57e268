//! Line-oriented terminal front end.
//!
//! Renders snapshots and forwards typed cell indices to the engine. It never
//! decides legality itself: every index, valid or not, goes to the engine and
//! the reply is shown as status text.

use crate::BridgeError;
use std::io::{BufRead, Write};
use std::str::FromStr;
use std::time::Duration;
use tictac_engine::{GameEngine, GameSnapshot, Winner};
use tracing::{debug, info, instrument};

const HELP: &str = "Type a cell number 0-8 to move, 'r' to reset, 'n' for a new game, 'q' to quit.";

/// Status line shown under the board.
pub fn status_text(snapshot: &GameSnapshot) -> String {
    match snapshot.winner {
        Some(Winner::Draw) => "It's a draw!".to_string(),
        Some(Winner::X) => "Player X wins!".to_string(),
        Some(Winner::O) => "Player O wins!".to_string(),
        None => format!("Player {}'s turn", snapshot.current_player),
    }
}

/// A parsed line of console input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Submit a move at this index.
    Move(i64),
    /// Reset the game.
    Reset,
    /// Start a new game.
    NewGame,
    /// Show usage.
    Help,
    /// Leave the console.
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(index) = s.parse::<i64>() {
            return Ok(Command::Move(index));
        }
        match s.to_lowercase().as_str() {
            "r" | "reset" => Ok(Command::Reset),
            "n" | "new" => Ok(Command::NewGame),
            "h" | "help" | "?" => Ok(Command::Help),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            _ => Err(format!("Unknown command {:?}", s)),
        }
    }
}

/// Interactive console bound to one engine.
pub struct Console<'a, R, W> {
    engine: &'a GameEngine,
    input: R,
    output: W,
    auto_reset: Option<Duration>,
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    /// Creates a console reading commands from `input`.
    pub fn new(engine: &'a GameEngine, input: R, output: W) -> Self {
        Self {
            engine,
            input,
            output,
            auto_reset: None,
        }
    }

    /// Starts a new game automatically `delay` after one ends.
    pub fn with_auto_reset(mut self, delay: Duration) -> Self {
        self.auto_reset = Some(delay);
        self
    }

    /// Plays until `q` or end of input.
    #[instrument(skip_all)]
    pub fn run(mut self) -> Result<(), BridgeError> {
        info!(auto_reset = ?self.auto_reset, "Console started");
        writeln!(self.output, "Tic-Tac-Toe")?;
        writeln!(self.output, "{}", HELP)?;
        let snapshot = self.engine.new_game();
        self.render(&snapshot)?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<Command>() {
                Ok(Command::Move(index)) => self.submit(index)?,
                Ok(Command::Reset) => {
                    let snapshot = self.engine.reset();
                    self.render(&snapshot)?;
                }
                Ok(Command::NewGame) => {
                    let snapshot = self.engine.new_game();
                    self.render(&snapshot)?;
                }
                Ok(Command::Help) => writeln!(self.output, "{}", HELP)?,
                Ok(Command::Quit) => break,
                Err(message) => writeln!(self.output, "{}", message)?,
            }
        }

        info!("Console closed");
        Ok(())
    }

    fn submit(&mut self, index: i64) -> Result<(), BridgeError> {
        match self.engine.submit_move(index) {
            Ok(snapshot) => {
                self.render(&snapshot)?;
                if snapshot.game_over {
                    if let Some(delay) = self.auto_reset {
                        debug!(?delay, "Auto-reset scheduled");
                        std::thread::sleep(delay);
                        let fresh = self.engine.reset();
                        writeln!(self.output, "Starting a new game.")?;
                        self.render(&fresh)?;
                    }
                }
            }
            // Status text only; the last rendered board is still current.
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(())
    }

    fn render(&mut self, snapshot: &GameSnapshot) -> Result<(), BridgeError> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", snapshot.board.display())?;
        writeln!(self.output, "{}", status_text(snapshot))?;
        Ok(())
    }
}

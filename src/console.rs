//! Line-oriented text controller.
//!
//! Plays the part of the input side: it owns a [`Game`], turns text
//! commands into selection changes, commits and passes, and lets the
//! computer sides answer after every human action.
//!
//! Responses follow a GTP-like framing: `=` for success, `?` for failure,
//! optionally followed by the numeric id the command was sent with.
//!
//! ## Supported Commands
//!
//! - `show` - Render the board
//! - `click <x> <y>` - Select the legal cell under a model-space point
//! - `select <layer> <index>` - Toggle the selection of a cell
//! - `commit` - Play the selected cell, then let computer sides move
//! - `pass` - Give up the turn
//! - `score` - Piece counts
//! - `legal` - Legal cells for the side to move, as `layer:index`
//! - `state` - Whose turn it is, or the result
//! - `list_commands` / `known_command <cmd>`
//! - `quit` - Exit the loop

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::error::ReversiError;
use crate::game::Game;
use crate::position::Position;

const KNOWN_COMMANDS: &[&str] = &[
    "click",
    "commit",
    "known_command",
    "legal",
    "list_commands",
    "pass",
    "quit",
    "score",
    "select",
    "show",
    "state",
];

pub struct Console {
    game: Game,
}

impl Console {
    pub fn new(game: Game) -> Self {
        Self { game }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run the command loop until `quit` or end of input.
    ///
    /// Computer sides get to move before the first command is read, so a
    /// game with an AI as black opens with its move.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        if let Err(e) = self.game.tick() {
            writeln!(output, "? {e}\n")?;
        }

        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();

            let (success, message) = self.execute(&command, args);
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            writeln!(output, "{prefix}{id_str} {message}\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Split an optional numeric command id off the front of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end > 0 {
            if let Ok(id) = trimmed[..end].parse::<u32>() {
                return (Some(id), trimmed[end..].trim());
            }
        }
        (None, trimmed)
    }

    fn failure(e: ReversiError) -> (bool, String) {
        (false, e.to_string())
    }

    /// Let computer sides answer, then report the state.
    fn advance(&mut self) -> (bool, String) {
        match self.game.tick() {
            Ok(plies) => {
                debug!(plies, "computer sides moved");
                (true, self.game.state().to_string())
            }
            Err(e) => Self::failure(e),
        }
    }

    /// Execute one command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(name) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&name.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "show" => (true, format!("\n{}", self.game.board())),

            "state" => (true, self.game.state().to_string()),

            "score" => {
                let (black, white) = self.game.score();
                (true, format!("black {black} white {white}"))
            }

            "legal" => {
                let board = self.game.board();
                let cells: Vec<String> = board
                    .legal_cells()
                    .into_iter()
                    .filter_map(|id| board.coordinates(id).ok())
                    .map(|(layer, index)| format!("{layer}:{index}"))
                    .collect();
                (true, cells.join(" "))
            }

            "click" => {
                let [x, y] = args else {
                    return (false, "usage: click <x> <y>".to_string());
                };
                let (Ok(x), Ok(y)) = (x.parse::<f64>(), y.parse::<f64>()) else {
                    return (false, "invalid coordinates".to_string());
                };
                match self.game.select_at(&Position::cartesian(x, y)) {
                    Some(id) => match self.game.preview_score(id) {
                        Ok(flips) => (true, format!("selected {id} flips {flips}")),
                        Err(e) => Self::failure(e),
                    },
                    None => (true, "cleared".to_string()),
                }
            }

            "select" => {
                let [layer, index] = args else {
                    return (false, "usage: select <layer> <index>".to_string());
                };
                let (Ok(layer), Ok(index)) = (layer.parse::<usize>(), index.parse::<usize>())
                else {
                    return (false, "invalid layer or index".to_string());
                };
                let toggled = self
                    .game
                    .board()
                    .cell_id(layer, index)
                    .and_then(|id| self.game.toggle_selection(id));
                match toggled {
                    Ok(true) => (true, "selected".to_string()),
                    Ok(false) => (true, "deselected".to_string()),
                    Err(e) => Self::failure(e),
                }
            }

            "commit" => {
                if self.game.selection().is_empty() {
                    return (false, "nothing selected".to_string());
                }
                self.advance()
            }

            "pass" => {
                if self.game.state().is_terminal() {
                    return (false, format!("the game is over ({})", self.game.state()));
                }
                self.game.pass();
                self.advance()
            }

            _ => (false, format!("unknown command: {command}")),
        }
    }
}

//! Player command parsing.
//!
//! The command surface is deliberately forgiving about phrasing ("up",
//! "go up", "move up", ...) but strict about anything it does not know:
//! unrecognized input is rejected with no state change.

use crate::error::GameError;
use crate::position::Direction;

/// One player turn's worth of intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Look,
    Inventory,
    Quit,
}

impl Command {
    /// Parse free-form input into a command.
    pub fn parse(input: &str) -> Result<Command, GameError> {
        let normalized = input.trim().to_lowercase();
        let command = match normalized.as_str() {
            "up" | "move up" | "go up" | "upwards" | "move upwards" | "forward"
            | "move forward" => Command::Move(Direction::Up),
            "down" | "move down" | "go down" | "below" | "go below" | "move below" | "behind"
            | "go behind" => Command::Move(Direction::Down),
            "left" | "move left" | "go left" => Command::Move(Direction::Left),
            "right" | "move right" | "go right" => Command::Move(Direction::Right),
            "look" | "look around" | "around" | "search" | "observe" => Command::Look,
            "inventory" | "bag" | "open inventory" | "open bag" | "look inventory" => {
                Command::Inventory
            }
            "exit" | "quit" => Command::Quit,
            _ => {
                return Err(GameError::InvalidCommand {
                    input: input.trim().to_string(),
                });
            }
        };
        Ok(command)
    }
}

//! dd-core: Core game logic for Delve
//!
//! This crate contains all game logic with no I/O dependencies.
//! The front-end feeds parsed commands and raw answers into a
//! [`GameState`] and renders the messages and pending prompts it exposes;
//! nothing in here reads stdin or writes stdout.

pub mod command;
pub mod dungeon;
pub mod encounter;
pub mod player;
pub mod position;
pub mod search;
pub mod transition;

mod consts;
mod error;
mod gameloop;
mod rng;

pub use command::Command;
pub use consts::*;
pub use error::GameError;
pub use gameloop::{GameLoopResult, GameState, Pending};
pub use rng::GameRng;

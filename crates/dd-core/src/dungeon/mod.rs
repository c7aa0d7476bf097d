//! Static dungeon content: cell kinds, grid levels, and the level table.

pub mod cell;
pub mod level;
pub mod maps;

pub use cell::CellKind;
pub use level::GridLevel;
pub use maps::{LEVEL_COUNT, LevelNumber};

//! dd-tui: console front-end for Delve
//!
//! A line-oriented prompt/response surface: paced text out, one line of
//! input back. Screen layout and menu texture live here; all game rules
//! live in `dd-core`.

pub mod console;
pub mod screens;

pub use console::Console;

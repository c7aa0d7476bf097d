//! Game screens: the room summary and the rendering of pending prompts.
//!
//! All game text that depends on state lives here or in the core's message
//! queue; the binary only sequences them.

use dd_core::dungeon::CellKind;
use dd_core::player::Item;
use dd_core::{CAKE_RESTORE, GameState, Pending, SANDWICH_RESTORE};

use crate::console::Console;

/// Describe the current room: location, surroundings, power.
pub fn room(console: &Console, state: &GameState) {
    console.header("Current Room");
    console.say(&format!(
        "You are in Level {} Room {}.",
        state.level_number(),
        state.room_label()
    ));
    console.say("You have a long way to go.");
    console.say(&surroundings_line(state));
    console.say(&format!(
        "Current Power Points: {}",
        state.player.power.points()
    ));
    console.say("What do you want to do?");
}

/// One compact line covering all four directions.
pub fn surroundings_line(state: &GameState) -> String {
    let pos = state.position();
    let looks = [
        ("left", 0isize, -1isize),
        ("right", 0, 1),
        ("ahead", -1, 0),
        ("behind", 1, 0),
    ]
    .map(|(label, dr, dc)| describe(state, pos.row as isize + dr, pos.col as isize + dc, label));
    format!("Surroundings: {}", looks.join(", "))
}

fn describe(state: &GameState, row: isize, col: isize, label: &str) -> String {
    let level = state.level();
    if !level.in_bounds(row, col) {
        return format!("Wall to the {label}");
    }
    // in_bounds above guarantees the lookup succeeds
    let what = match level.cell_at(row as usize, col as usize) {
        Ok(CellKind::Wall) | Err(_) => "Wall",
        Ok(CellKind::Exit) => "Exit",
        Ok(CellKind::Entrance) => "Entrance",
        Ok(CellKind::Floor) => "Room",
    };
    format!("{what} to the {label}")
}

/// Render whatever interaction the core is waiting on, returning the
/// prompt text the caller should read input with.
pub fn pending(console: &Console, state: &GameState, interaction: &Pending) -> String {
    match interaction {
        Pending::Encounter { kind, options } => {
            console.header(kind.title());
            for (i, option) in options.iter().enumerate() {
                console.say(&format!("{}. {}", i + 1, option.label()));
            }
            "\nWhat do you want to do? Enter the number: ".to_string()
        }
        Pending::Riddle { .. } => "Your Answer: ".to_string(),
        Pending::PickItem { found } => {
            console.header("Looking Around");
            for (i, discovery) in found.iter().enumerate() {
                console.say(&format!("{}. {}", i + 1, discovery.label()));
            }
            console.say(&format!("{}. Ignore", found.len() + 1));
            "\nWhat do you want to pick? Enter the number: ".to_string()
        }
        Pending::UseItem { usable } => {
            console.say("\nYou have usable items. Do you want to use one?");
            for (i, item) in usable.iter().enumerate() {
                console.say(&format!("{}. {}", i + 1, use_label(*item)));
            }
            console.say(&format!("{}. Exit Inventory", usable.len() + 1));
            "\nChoose an item to use (Enter the number): ".to_string()
        }
    }
}

fn use_label(item: Item) -> String {
    match item {
        Item::Cake => format!("Cake (+{CAKE_RESTORE} Power Points)"),
        Item::Sandwich => format!("Sandwich (+{SANDWICH_RESTORE} Power Points)"),
        other => other.to_string(),
    }
}

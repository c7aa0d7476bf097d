//! Delve — a turn-based dungeon crawl.
//!
//! Main entry point: wires the record store and the console front-end
//! around the core game state.

use std::path::PathBuf;

use clap::Parser;

use dd_core::{Command, GameError, GameLoopResult, GameRng, GameState, STARTING_POWER};
use dd_save::{PlayerRecord, RecordStore};
use dd_tui::{Console, screens};

#[derive(Debug, Parser)]
#[command(name = "delve", about = "A turn-based dungeon crawl", version)]
struct Args {
    /// Player name; prompted for when omitted
    name: Option<String>,

    /// Record store directory (defaults to the platform data dir)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// RNG seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Disable paced character printing
    #[arg(long)]
    no_delay: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let console = if args.no_delay {
        Console::instant()
    } else {
        Console::paced()
    };

    // A broken store downgrades to a session without persistence.
    let store_dir = args
        .data_dir
        .unwrap_or_else(RecordStore::default_location);
    let store = match RecordStore::open(&store_dir) {
        Ok(store) => Some(store),
        Err(e) => {
            log::warn!("record store unavailable at {}: {e}", store_dir.display());
            None
        }
    };

    let name = match args.name {
        Some(name) => name,
        None => console.prompt("Enter your name: ")?.trim().to_string(),
    };
    let rng = args.seed.map(GameRng::new).unwrap_or_else(GameRng::from_entropy);

    let record = store.as_ref().and_then(|store| {
        store.load(&name).unwrap_or_else(|e| {
            log::warn!("failed to load record for {name:?}, starting fresh: {e}");
            None
        })
    });

    let mut state = match record {
        Some(record) => {
            let state = record.into_state(rng)?;
            console.clear();
            console.header("Welcome back to Delve");
            console.say(&format!(
                "Welcome back, {}! You are on Level {}.",
                state.player.name,
                state.level_number()
            ));
            state
        }
        None => {
            let state = GameState::new(name, rng)?;
            console.clear();
            console.header("Welcome to Delve");
            console.say(&format!(
                "You start at the entrance of Level 1 with {STARTING_POWER} power points."
            ));
            if let Some(store) = &store {
                if let Err(e) = store.save(&PlayerRecord::from_state(&state)) {
                    log::warn!("could not create record: {e}");
                }
            }
            state
        }
    };

    screens::room(&console, &state);
    run(&console, store.as_ref(), &mut state)?;
    console.say("Thank you for playing Delve!");
    Ok(())
}

fn run(
    console: &Console,
    store: Option<&RecordStore>,
    state: &mut GameState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        let result = if let Some(interaction) = state.pending().cloned() {
            let prompt = screens::pending(console, state, &interaction);
            let input = console.prompt(&prompt)?;
            state.respond(&input)?
        } else {
            let input = console
                .prompt("\nEnter your move (up, down, left, right, look around, inventory, exit): ")?;
            match Command::parse(&input) {
                Ok(command) => {
                    console.clear();
                    state.tick(command)?
                }
                Err(GameError::InvalidCommand { .. }) => {
                    console.say("Invalid input!");
                    continue;
                }
                Err(other) => return Err(other.into()),
            }
        };

        for message in state.take_messages() {
            console.say(&message);
        }

        match result {
            GameLoopResult::Continue => {
                if state.pending().is_none() {
                    screens::room(console, state);
                }
            }
            GameLoopResult::SaveAndQuit => {
                match store.map(|s| s.save(&PlayerRecord::from_state(state))) {
                    Some(Ok(())) => console.say("Game saved. Exiting..."),
                    Some(Err(e)) => {
                        log::warn!("save skipped: {e}");
                        console.say("Save skipped. Exiting...");
                    }
                    None => console.say("Exiting..."),
                }
                return Ok(());
            }
            GameLoopResult::PlayerDied(_) => {
                console.header("Game Over");
                console.say("Better luck next time!");
                clear_record(store, &state.player.name);
                return Ok(());
            }
            GameLoopResult::PlayerWon => {
                console.header("Victory");
                clear_record(store, &state.player.name);
                return Ok(());
            }
        }
    }
}

/// Drop a finished player's record so the next session starts fresh.
fn clear_record(store: Option<&RecordStore>, name: &str) {
    if let Some(store) = store {
        if let Err(e) = store.delete(name) {
            log::warn!("could not remove record for {name:?}: {e}");
        }
    }
}

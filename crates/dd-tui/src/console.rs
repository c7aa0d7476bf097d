//! Low-level console output: paced printing, banners, screen clearing,
//! and line input.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

/// Default delay between printed characters
pub const DEFAULT_PRINT_DELAY: Duration = Duration::from_millis(15);

/// Console output with optional character pacing.
#[derive(Debug, Clone)]
pub struct Console {
    delay: Option<Duration>,
}

impl Console {
    /// A paced console, printing character by character.
    pub fn paced() -> Self {
        Self {
            delay: Some(DEFAULT_PRINT_DELAY),
        }
    }

    /// An instant console, for scripts and tests.
    pub fn instant() -> Self {
        Self { delay: None }
    }

    /// Print a line, paced when configured.
    pub fn say(&self, message: &str) {
        match self.delay {
            Some(delay) => {
                let mut stdout = io::stdout();
                for c in message.chars() {
                    print!("{c}");
                    stdout.flush().ok();
                    thread::sleep(delay);
                }
                println!();
            }
            None => println!("{message}"),
        }
    }

    /// Banner header in the game's house style.
    pub fn header(&self, title: &str) {
        println!("==========================================");
        println!("{}", title.to_uppercase());
        println!("==========================================");
    }

    /// Clear the screen, best-effort.
    pub fn clear(&self) {
        execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0)).ok();
    }

    /// Print a prompt (no newline) and read one line of input.
    pub fn prompt(&self, prompt: &str) -> io::Result<String> {
        print!("{prompt}");
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Block until the player presses Enter.
    pub fn wait_for_enter(&self) -> io::Result<()> {
        self.prompt("Press Enter to continue...")?;
        Ok(())
    }
}

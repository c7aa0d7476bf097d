//! Error types shared across the game core.

use thiserror::Error;

/// Game errors.
///
/// `Config` is fatal: it indicates corrupt static content or a level that
/// cannot host its encounters, and is only surfaced at startup or level
/// load. The other variants are per-turn rejections; the turn is re-prompted
/// with no state change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("level configuration error: {reason}")]
    Config { reason: String },

    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("invalid position: {reason}")]
    InvalidPosition { reason: String },

    #[error("unrecognized command: {input:?}")]
    InvalidCommand { input: String },
}

impl GameError {
    pub fn config(reason: impl Into<String>) -> Self {
        GameError::Config {
            reason: reason.into(),
        }
    }

    /// True for errors that should abort the session rather than re-prompt.
    pub fn is_fatal(&self) -> bool {
        matches!(self, GameError::Config { .. })
    }
}

//! dd-save: Player record store for Delve
//!
//! One JSON record per player, keyed by name. The store is deliberately
//! dumb: load on session start, save on exit. Callers treat every failure
//! as recoverable — a broken load is a fresh game, a broken save is a
//! skipped save — so nothing here ever takes the session down.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use dd_core::dungeon::{LEVEL_COUNT, LevelNumber};
use dd_core::player::{InventoryState, PowerPoints};
use dd_core::{GameRng, GameState};

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Player name {0:?} contains no usable characters")]
    UnusableName(String),
}

/// A saved player, in the fixed record schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub current_level: u32,
    pub power_points: u32,
    /// Room label such as `B2`; best-effort, may be stale
    pub current_room: String,
    /// Comma-joined item names
    pub inventory: String,
    /// RFC 3339 timestamp of the save
    #[serde(default)]
    pub saved_at: String,
}

impl PlayerRecord {
    /// Snapshot a running session into a record.
    pub fn from_state(state: &GameState) -> Self {
        Self {
            name: state.player.name.clone(),
            current_level: state.level_number().get(),
            power_points: state.player.power.points(),
            current_room: state.room_label(),
            inventory: state.player.inventory.to_csv(),
            saved_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Rehydrate a session from this record.
    ///
    /// The level number was already coerced by the loader; anything else
    /// that is off (room label, unknown items) degrades gracefully inside
    /// the core.
    pub fn into_state(self, rng: GameRng) -> Result<GameState, dd_core::GameError> {
        let level_number = LevelNumber::new(self.current_level)?;
        GameState::resume(
            self.name,
            level_number,
            PowerPoints::new(self.power_points),
            InventoryState::from_csv(&self.inventory),
            Some(&self.current_room),
            rng,
        )
    }
}

/// Directory of per-player JSON records.
#[derive(Debug, Clone)]
pub struct RecordStore {
    dir: PathBuf,
}

impl RecordStore {
    /// Open a store rooted at `dir`, creating it if needed.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// The default store location under the platform data directory.
    pub fn default_location() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("delve");
        path.push("records");
        path
    }

    /// Load a player's record. A missing record is `Ok(None)`, not an
    /// error. A persisted level outside 1..=LEVEL_COUNT is coerced to 1
    /// here, so the core never sees it.
    pub fn load(&self, name: &str) -> Result<Option<PlayerRecord>, StoreError> {
        let path = self.record_path(name)?;
        if !path.exists() {
            return Ok(None);
        }
        let file = File::open(&path)?;
        let reader = BufReader::new(file);
        let mut record: PlayerRecord = serde_json::from_reader(reader)?;
        if !(1..=LEVEL_COUNT).contains(&record.current_level) {
            log::warn!(
                "record for {name:?} has invalid level {}, resetting to 1",
                record.current_level
            );
            record.current_level = 1;
        }
        Ok(Some(record))
    }

    /// Write a player's record, replacing any previous one.
    pub fn save(&self, record: &PlayerRecord) -> Result<(), StoreError> {
        let path = self.record_path(&record.name)?;
        let file = File::create(&path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, record)?;
        log::info!("saved record for {:?} to {}", record.name, path.display());
        Ok(())
    }

    /// Remove a player's record, e.g. after death. Missing files are fine.
    pub fn delete(&self, name: &str) -> Result<(), StoreError> {
        let path = self.record_path(name)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// File path for a player, with the name sanitized down to a safe
    /// filename. Names that sanitize to nothing are rejected.
    fn record_path(&self, name: &str) -> Result<PathBuf, StoreError> {
        let safe: String = name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        if safe.chars().all(|c| c == '_') {
            return Err(StoreError::UnusableName(name.to_string()));
        }
        Ok(self.dir.join(format!("{safe}.json")))
    }
}

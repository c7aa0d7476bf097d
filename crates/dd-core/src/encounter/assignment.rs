//! Encounter placement.
//!
//! Every time a level becomes active, each applicable encounter kind gets a
//! random cell of its own. Placement is rejection sampling with a hard
//! attempt budget; a map too small or too walled to host its encounters is
//! a fatal configuration error, not an infinite loop.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::consts::PLACEMENT_ATTEMPTS;
use crate::dungeon::{CellKind, GridLevel, LevelNumber};
use crate::encounter::EncounterKind;
use crate::error::GameError;
use crate::position::Position;
use crate::rng::GameRng;

/// Where one encounter kind sits, and whether it already fired this
/// level activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub at: Position,
    pub triggered: bool,
}

/// One level activation's worth of encounter state.
///
/// Recreated whenever a level is (re)loaded, which is also what scopes the
/// Guardian's `resolved` flag: beating the Guardian silences it for the
/// rest of this activation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterRecord {
    placements: BTreeMap<EncounterKind, Placement>,
    guardian_resolved: bool,
}

impl EncounterRecord {
    /// Place every encounter kind applicable to `number` on a distinct
    /// valid cell of `level`.
    ///
    /// Valid cells are non-Wall, non-Entrance, non-Exit; the Guardian
    /// additionally requires plain Floor. Order is fixed: Trap, Mad
    /// Scientist, Lost Explorer, Guardian.
    pub fn assign(
        level: &GridLevel,
        number: LevelNumber,
        rng: &mut GameRng,
    ) -> Result<Self, GameError> {
        let mut placements = BTreeMap::new();
        for kind in EncounterKind::iter() {
            if !kind.applies_to(number) {
                continue;
            }
            let at = sample_cell(level, kind, &placements, rng)?;
            placements.insert(
                kind,
                Placement {
                    at,
                    triggered: false,
                },
            );
        }
        Ok(Self {
            placements,
            guardian_resolved: false,
        })
    }

    pub fn placement(&self, kind: EncounterKind) -> Option<Placement> {
        self.placements.get(&kind).copied()
    }

    pub fn kinds(&self) -> impl Iterator<Item = EncounterKind> + '_ {
        self.placements.keys().copied()
    }

    /// The encounter that should fire at `pos`, if any.
    ///
    /// One-shot kinds stop matching once triggered. The Guardian keeps
    /// matching until resolved — fleeing leaves it armed.
    pub fn active_at(&self, pos: Position) -> Option<EncounterKind> {
        self.placements.iter().find_map(|(&kind, placement)| {
            if placement.at != pos {
                return None;
            }
            let armed = match kind {
                EncounterKind::Guardian => !self.guardian_resolved,
                _ => !placement.triggered,
            };
            armed.then_some(kind)
        })
    }

    /// Flip a one-shot kind's fired flag. No-op for the Guardian, whose
    /// recurrence is governed by `resolve_guardian`.
    pub fn mark_triggered(&mut self, kind: EncounterKind) {
        if kind == EncounterKind::Guardian {
            return;
        }
        if let Some(placement) = self.placements.get_mut(&kind) {
            placement.triggered = true;
        }
    }

    pub fn guardian_resolved(&self) -> bool {
        self.guardian_resolved
    }

    /// Permanently silence the Guardian for this activation. Set only by a
    /// Relic victory.
    pub fn resolve_guardian(&mut self) {
        self.guardian_resolved = true;
    }
}

fn sample_cell(
    level: &GridLevel,
    kind: EncounterKind,
    taken: &BTreeMap<EncounterKind, Placement>,
    rng: &mut GameRng,
) -> Result<Position, GameError> {
    for _ in 0..PLACEMENT_ATTEMPTS {
        let pos = Position {
            row: rng.index(level.rows()),
            col: rng.index(level.cols()),
        };
        if is_valid_cell(level, kind, pos)? && !taken.values().any(|p| p.at == pos) {
            return Ok(pos);
        }
    }
    Err(GameError::config(format!(
        "no valid cell for {kind} after {PLACEMENT_ATTEMPTS} attempts"
    )))
}

fn is_valid_cell(level: &GridLevel, kind: EncounterKind, pos: Position) -> Result<bool, GameError> {
    let cell = level.cell(pos)?;
    let ok = match kind {
        // The Guardian must stand on open floor
        EncounterKind::Guardian => cell == CellKind::Floor,
        _ => !matches!(cell, CellKind::Wall | CellKind::Entrance | CellKind::Exit),
    };
    Ok(ok)
}

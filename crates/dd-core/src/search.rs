//! Looking around, potions, and teleportation.
//!
//! Searching a room turns up one or two distinct finds from a fixed pool.
//! The Relic joins the pool only on the final level, and only until it has
//! been found once.

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::consts::{LOOK_MAX_FINDS, TELEPORT_ATTEMPTS};
use crate::dungeon::{CellKind, GridLevel, LevelNumber};
use crate::player::Item;
use crate::position::Position;
use crate::rng::GameRng;

/// Something a look-around can turn up. Potions are not inventory items;
/// they are drunk on the spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Discovery {
    Item(Item),
    Potion,
}

impl Discovery {
    /// How the find is announced in the pick menu.
    pub fn label(self) -> String {
        match self {
            Discovery::Potion => "A mysterious potion".to_string(),
            Discovery::Item(Item::Relic) => "A strange glowing Relic".to_string(),
            Discovery::Item(item) => item.to_string(),
        }
    }
}

/// Potion effects, chosen at drinking time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "title_case")]
pub enum Potion {
    SleepingPotion,
    HealthPotion,
    VisionPotion,
}

impl Potion {
    pub fn random(rng: &mut GameRng) -> Potion {
        const POTIONS: [Potion; 3] = [
            Potion::SleepingPotion,
            Potion::HealthPotion,
            Potion::VisionPotion,
        ];
        POTIONS[rng.index(POTIONS.len())]
    }
}

/// Roll the finds for one look-around: 1..=LOOK_MAX_FINDS distinct entries.
pub fn discoveries(level: LevelNumber, relic_found: bool, rng: &mut GameRng) -> Vec<Discovery> {
    let mut pool: Vec<Discovery> = Item::grantable().map(Discovery::Item).collect();
    pool.push(Discovery::Potion);
    if level.is_final() && !relic_found {
        pool.push(Discovery::Item(Item::Relic));
    }

    let count = (1 + rng.rn2(LOOK_MAX_FINDS)) as usize;
    let mut found = Vec::with_capacity(count);
    while found.len() < count && !pool.is_empty() {
        found.push(pool.swap_remove(rng.index(pool.len())));
    }
    found
}

/// Pick a random teleport destination: in bounds, plain floor, and not the
/// cell the player is standing on.
///
/// Rejection sampling with a bounded budget; `None` means the spell
/// fizzles. On the shipped maps the budget is never exhausted in practice.
pub fn teleport_destination(
    level: &GridLevel,
    current: Position,
    rng: &mut GameRng,
) -> Option<Position> {
    for _ in 0..TELEPORT_ATTEMPTS {
        let pos = Position {
            row: rng.index(level.rows()),
            col: rng.index(level.cols()),
        };
        if pos == current {
            continue;
        }
        if level.cell(pos).ok()? == CellKind::Floor {
            return Some(pos);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::maps;

    #[test]
    fn discoveries_are_distinct_and_bounded() {
        let mut rng = GameRng::new(11);
        for _ in 0..64 {
            let found = discoveries(LevelNumber::FIRST, false, &mut rng);
            assert!((1..=LOOK_MAX_FINDS as usize).contains(&found.len()));
            let unique: std::collections::BTreeSet<_> =
                found.iter().map(|d| format!("{d:?}")).collect();
            assert_eq!(unique.len(), found.len());
            assert!(!found.contains(&Discovery::Item(Item::Relic)));
        }
    }

    #[test]
    fn relic_only_on_final_level_until_found() {
        let final_level = LevelNumber::new(3).unwrap();
        let mut rng = GameRng::new(0);
        let mut seen_relic = false;
        for _ in 0..256 {
            if discoveries(final_level, false, &mut rng).contains(&Discovery::Item(Item::Relic)) {
                seen_relic = true;
            }
            assert!(
                !discoveries(final_level, true, &mut rng).contains(&Discovery::Item(Item::Relic))
            );
        }
        assert!(seen_relic);
    }

    #[test]
    fn teleport_lands_on_open_floor_elsewhere() {
        let number = LevelNumber::new(2).unwrap();
        let level = maps::level(number).unwrap();
        let current = level.find_entrance().unwrap();
        let mut rng = GameRng::new(9);
        for _ in 0..64 {
            let dest = teleport_destination(&level, current, &mut rng).unwrap();
            assert_ne!(dest, current);
            assert_eq!(level.cell(dest).unwrap(), CellKind::Floor);
        }
    }

    #[test]
    fn teleport_fizzles_with_nowhere_to_go() {
        let level = GridLevel::from_rows(&["WEW", "W.W", "WXW"]).unwrap();
        let current = Position { row: 1, col: 1 };
        let mut rng = GameRng::new(3);
        assert_eq!(teleport_destination(&level, current, &mut rng), None);
    }
}

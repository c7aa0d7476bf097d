//! Items and the player's inventory.
//!
//! The inventory is a plain set: items do not stack, and picking up an
//! already-held item is a no-op the caller can report. The comma-joined
//! string form is the persisted representation.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::rng::GameRng;

/// Every item the game knows about.
///
/// Display names double as the persisted form, matching the record store's
/// comma-joined inventory field.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
pub enum Item {
    #[strum(serialize = "Teleportation Spell")]
    TeleportationSpell,
    #[strum(serialize = "Freeze Spell")]
    FreezeSpell,
    Cake,
    Sandwich,
    Hammer,
    Relic,
}

impl Item {
    /// Items that random grants (Lost Explorer loot) may draw from.
    /// The Relic is never granted; it is found, once, on the final level.
    pub fn grantable() -> impl Iterator<Item = Item> {
        Item::iter().filter(|item| *item != Item::Relic)
    }
}

/// The set of items the player holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryState {
    items: BTreeSet<Item>,
}

impl InventoryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item. Returns false (and changes nothing) when already held,
    /// so the caller can tell the player they left the duplicate behind.
    pub fn add(&mut self, item: Item) -> bool {
        self.items.insert(item)
    }

    /// Remove an item, returning whether it was held. Consuming an item on
    /// use and probing for a missing one are the same operation.
    pub fn remove(&mut self, item: Item) -> bool {
        self.items.remove(&item)
    }

    pub fn contains(&self, item: Item) -> bool {
        self.items.contains(&item)
    }

    /// Drop everything. Encounter-loss penalty.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Item> + '_ {
        self.items.iter().copied()
    }

    /// Grant up to `count` distinct items the player does not already own,
    /// drawn uniformly without replacement from the grantable pool.
    ///
    /// When fewer than `count` items remain grantable, all of them are
    /// granted and the grant stops short; there is no retry loop.
    pub fn grant_random(&mut self, count: usize, rng: &mut GameRng) -> Vec<Item> {
        let mut pool: Vec<Item> = Item::grantable()
            .filter(|item| !self.contains(*item))
            .collect();

        let mut granted = Vec::new();
        while granted.len() < count && !pool.is_empty() {
            let item = pool.swap_remove(rng.index(pool.len()));
            self.items.insert(item);
            granted.push(item);
        }
        granted
    }

    /// Comma-joined display names, the persisted form.
    pub fn to_csv(&self) -> String {
        self.items
            .iter()
            .map(|item| item.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Parse the persisted form. Unknown names are skipped with a warning
    /// rather than failing the whole load.
    pub fn from_csv(csv: &str) -> Self {
        let mut inventory = Self::new();
        for name in csv.split(',') {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            match name.parse::<Item>() {
                Ok(item) => {
                    inventory.add(item);
                }
                Err(_) => log::warn!("skipping unknown inventory item {name:?}"),
            }
        }
        inventory
    }
}

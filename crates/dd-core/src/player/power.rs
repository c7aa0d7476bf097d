//! Power points
//!
//! The player's vitality pool. Deductions floor at zero; zero is death.

use serde::{Deserialize, Serialize};

use crate::consts::STARTING_POWER;

/// Bounded-below vitality pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PowerPoints(u32);

impl Default for PowerPoints {
    fn default() -> Self {
        PowerPoints(STARTING_POWER)
    }
}

impl PowerPoints {
    pub fn new(points: u32) -> Self {
        PowerPoints(points)
    }

    pub fn points(self) -> u32 {
        self.0
    }

    /// Increase the pool. There is no ceiling.
    pub fn add(&mut self, amount: u32) {
        self.0 += amount;
    }

    /// Decrease the pool, never below zero.
    pub fn deduct(&mut self, amount: u32) {
        self.0 = self.0.saturating_sub(amount);
    }

    /// The player dies when the pool reaches zero.
    pub fn is_alive(self) -> bool {
        self.0 > 0
    }
}

impl std::fmt::Display for PowerPoints {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

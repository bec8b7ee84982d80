//! The player/tank model.
//!
//! Players are owned exclusively by the match and referenced by projectiles
//! via a stable index. They are never destroyed mid-match — elimination
//! flips the `alive` flag instead.

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_HEALTH, STARTING_REROLLS};
use crate::enums::Controller;
use crate::types::Position;
use crate::weapons::WeaponId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub position: Position,
    /// 0–100, clamped non-negative.
    pub health: f64,
    pub alive: bool,
    /// Weapon assigned for the current turn, cleared after firing.
    pub weapon: Option<WeaponId>,
    /// Starts at 1, decrements, never replenishes within a match.
    pub rerolls_remaining: u32,
    pub controller: Controller,
}

impl Player {
    pub fn new(name: impl Into<String>, position: Position, controller: Controller) -> Self {
        Self {
            name: name.into(),
            position,
            health: MAX_HEALTH,
            alive: true,
            weapon: None,
            rerolls_remaining: STARTING_REROLLS,
            controller,
        }
    }

    /// Apply damage, clamping health at zero and flipping `alive`.
    /// Returns the damage actually dealt.
    pub fn apply_damage(&mut self, amount: f64) -> f64 {
        if !self.alive || amount <= 0.0 {
            return 0.0;
        }
        let dealt = amount.min(self.health);
        self.health -= dealt;
        if self.health <= 0.0 {
            self.health = 0.0;
            self.alive = false;
        }
        dealt
    }
}

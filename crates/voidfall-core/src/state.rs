//! Match state snapshot — the complete visible state produced each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Position, SimTime, Velocity};
use crate::weapons::WeaponId;

/// Complete match state broadcast to the presentation layer after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub time: SimTime,
    pub phase: TurnPhase,
    pub current_player: usize,
    pub turn_count: u32,
    /// Derived: floor(turn_count / player_count) + 1.
    pub round: u32,
    pub players: Vec<PlayerView>,
    pub projectiles: Vec<ProjectileView>,
    pub effects: Vec<EffectView>,
    pub lottery: Option<LotteryView>,
    pub aim: Option<AimView>,
    pub outcome: Option<MatchOutcome>,
    pub void_height: f64,
    /// Events emitted during this tick, drained each snapshot.
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub name: String,
    pub position: Position,
    pub health: f64,
    pub alive: bool,
    pub weapon: Option<WeaponId>,
    pub rerolls_remaining: u32,
    pub controller: Controller,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub kind: ProjectileKind,
    pub owner: usize,
    pub position: Position,
    pub velocity: Velocity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectView {
    pub kind: EffectKind,
    pub phase: EffectPhase,
    pub position: Position,
    pub phase_remaining_secs: f64,
}

/// One offered weapon card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub weapon: WeaponId,
    pub rarity: Rarity,
    /// Declared damage, shown on the card face and used by AI tie-breaking.
    pub damage_display: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LotteryView {
    pub cards: Vec<Card>,
    pub highlighted: usize,
    pub phase: LotteryPhase,
    pub pity_counter: u32,
}

/// Current aiming parameters of the active player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AimView {
    pub angle_radians: f64,
    pub charge: f64,
}

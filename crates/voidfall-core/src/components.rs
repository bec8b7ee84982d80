//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic; systems in the sim
//! crate own the behavior. `Position` and `Velocity` from `types` are used
//! as components directly.

use serde::{Deserialize, Serialize};

use crate::enums::{EffectKind, EffectPhase, ProjectileKind};
use crate::types::Position;
use crate::weapons::WeaponId;

/// Behavior-specific per-projectile state. A closed variant set so the
/// per-kind handlers can match exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BehaviorState {
    /// No extra state (standard shots, bomblets, fragments, bullets).
    Inert,
    /// Remaining tunneling budget and whether currently below the surface.
    Drill { depth_remaining: f64, tunneling: bool },
    /// Player index the seeker steers toward.
    Seeker { target: usize },
    /// Roller surface-contact state.
    Roller { grounded: bool },
    /// Seconds until the next random jink.
    Anomaly { jink_in_secs: f64 },
}

/// A ballistic entity in the projectile registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub kind: ProjectileKind,
    /// Weapon whose stats (damage, blast radius) resolve this projectile.
    pub weapon: WeaponId,
    /// Owning player index. Lookup only — damage flows through the
    /// termination processor, never through this reference directly.
    pub owner: usize,
    pub bounces_left: u32,
    pub age_secs: f64,
    /// Hard lifetime ceiling: the safety valve guaranteeing termination.
    pub lifetime_ceiling_secs: f64,
    pub behavior: BehaviorState,
    /// Strafing-run id this bullet belongs to, if any.
    pub strafe_run: Option<u32>,
}

/// An entity that resolves asynchronously on a timer after landing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DelayedEffect {
    /// Stable id, used by strafing runs to claim their bullets.
    pub id: u32,
    pub kind: EffectKind,
    /// Weapon whose stats parametrize the payoff (damage, blast radius).
    pub weapon: WeaponId,
    pub phase: EffectPhase,
    /// Monotonically decreasing time left in the current sub-phase.
    pub phase_remaining_secs: f64,
    pub position: Position,
    pub owner: usize,
    /// Bullets released so far (strafing runs only).
    pub bullets_spawned: u32,
}

impl DelayedEffect {
    /// Unresolved effects hold the turn open (quiescence oracle input).
    pub fn is_resolved(&self) -> bool {
        self.phase == EffectPhase::Done
    }
}

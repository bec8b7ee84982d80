//! ECS systems that operate on the match world each tick.
//!
//! Systems are free functions over `&mut World` plus whatever match state
//! they need. They do not own state — all state lives in components or on
//! the engine.

pub mod ballistics;
pub mod behavior;
pub mod damage;
pub mod effects;
pub mod quiescence;
pub mod snapshot;
pub mod termination;

use voidfall_core::components::BehaviorState;
use voidfall_core::enums::{EffectKind, ProjectileKind};
use voidfall_core::types::{Position, Velocity};
use voidfall_core::weapons::WeaponId;

/// A deferred entity creation, queued during termination/effect processing
/// and flushed into the world in the same tick, before the quiescence
/// oracle is evaluated.
#[derive(Debug, Clone)]
pub enum SpawnRequest {
    Projectile {
        kind: ProjectileKind,
        weapon: WeaponId,
        owner: usize,
        position: Position,
        velocity: Velocity,
        behavior: BehaviorState,
        /// Strafing-run id claiming this bullet, if any.
        strafe_run: Option<u32>,
    },
    Effect {
        kind: EffectKind,
        weapon: WeaponId,
        owner: usize,
        position: Position,
    },
}

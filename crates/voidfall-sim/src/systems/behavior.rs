//! Per-kind in-flight behavior updates: seeker steering, anomaly jinks,
//! drill tunneling budget, airburst apex detection.
//!
//! Behaviors that decide a projectile must resolve this tick (apex burst,
//! spent drill) push a forced termination; the termination scan owns the
//! actual resolution so every projectile still gets exactly one
//! explosion-resolution call.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use voidfall_core::components::{BehaviorState, Projectile};
use voidfall_core::constants::{ANOMALY_JINK_INTERVAL, HOMING_STEER_ACCEL};
use voidfall_core::enums::TerminationReason;
use voidfall_core::player::Player;
use voidfall_core::types::{Position, Velocity};
use voidfall_core::weapons::Behavior;

/// Run behavior updates. Appends `(entity, reason)` pairs for projectiles
/// whose behavior forces resolution this tick.
pub fn run(
    world: &mut World,
    players: &[Player],
    rng: &mut ChaCha8Rng,
    dt: f64,
    forced: &mut Vec<(Entity, TerminationReason)>,
) {
    for (entity, (projectile, position, velocity)) in
        world.query_mut::<(&mut Projectile, &Position, &mut Velocity)>()
    {
        match &mut projectile.behavior {
            BehaviorState::Inert => {
                // Airburst shells carry no extra state; the apex check keys
                // off the weapon's behavior tag.
                if matches!(
                    projectile.weapon.spec().behavior,
                    Behavior::Airburst { .. }
                ) && projectile.kind == voidfall_core::enums::ProjectileKind::PrimaryShot
                    && velocity.y <= 0.0
                {
                    forced.push((entity, TerminationReason::ApexBurst));
                }
            }
            BehaviorState::Drill {
                depth_remaining,
                tunneling,
            } => {
                if *tunneling {
                    *depth_remaining -= velocity.speed() * dt;
                    if *depth_remaining <= 0.0 {
                        forced.push((entity, TerminationReason::TerrainContact));
                    }
                }
            }
            BehaviorState::Seeker { target } => {
                if let Some(target_player) = players.get(*target).filter(|p| p.alive) {
                    steer_toward(position, velocity, &target_player.position, dt);
                }
            }
            BehaviorState::Roller { .. } => {
                // Surface interaction is handled by the termination scan's
                // contact path; nothing to do mid-air.
            }
            BehaviorState::Anomaly { jink_in_secs } => {
                *jink_in_secs -= dt;
                if *jink_in_secs <= 0.0 {
                    *jink_in_secs = ANOMALY_JINK_INTERVAL;
                    let speed = velocity.speed();
                    let heading = rng.gen_range(-std::f64::consts::PI..std::f64::consts::PI);
                    velocity.x = speed * heading.cos();
                    velocity.y = speed * heading.sin();
                }
            }
        }
    }
}

/// Accelerate toward the target, capped at the homing steer budget.
fn steer_toward(position: &Position, velocity: &mut Velocity, target: &Position, dt: f64) {
    let to_target = target.as_dvec2() - position.as_dvec2();
    let distance = to_target.length();
    if distance < f64::EPSILON {
        return;
    }
    let steer = to_target / distance * HOMING_STEER_ACCEL * dt;
    velocity.x += steer.x;
    velocity.y += steer.y;
}

//! Delayed-effect registry: entities that resolve on timers after landing.
//!
//! Landing never ends a turn. Each kind walks its own sub-phase sequence
//! and is counted as unresolved by the quiescence oracle until it reaches
//! `Done`; the turn state machine is the only component that acts on that.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use voidfall_core::components::{BehaviorState, DelayedEffect, Projectile};
use voidfall_core::constants::*;
use voidfall_core::enums::{EffectKind, EffectPhase, ProjectileKind, TerminationReason};
use voidfall_core::events::GameEvent;
use voidfall_core::player::Player;
use voidfall_core::types::{Position, Velocity};

use crate::systems::{damage, SpawnRequest};
use crate::terrain::Terrain;

/// Advance all delayed effects by one step.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    players: &mut [Player],
    terrain: &mut dyn Terrain,
    rng: &mut ChaCha8Rng,
    pending: &mut Vec<SpawnRequest>,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
    dt: f64,
) {
    despawn_buffer.clear();

    // Count surviving bullets per strafing run before mutating effects, so
    // a run cannot report Done while its bullets are still in the registry.
    let mut live_bullets: Vec<u32> = Vec::new();
    for (_entity, projectile) in world.query::<&Projectile>().iter() {
        if let Some(run_id) = projectile.strafe_run {
            live_bullets.push(run_id);
        }
    }

    for (entity, effect) in world.query_mut::<&mut DelayedEffect>() {
        effect.phase_remaining_secs -= dt;

        match effect.kind {
            EffectKind::Nuke => advance_nuke(effect, players, terrain, events),
            EffectKind::OrbitalBeacon => advance_beacon(effect, players, terrain, events),
            EffectKind::StrafingRun => {
                advance_strafing_run(effect, &live_bullets, rng, pending, events)
            }
        }

        if effect.phase == EffectPhase::Done {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Nuke: Landed(fuse) → Detonating(cinematic) → Done. All damage lands at
/// the detonation transition, not at touchdown.
fn advance_nuke(
    effect: &mut DelayedEffect,
    players: &mut [Player],
    terrain: &mut dyn Terrain,
    events: &mut Vec<GameEvent>,
) {
    if effect.phase_remaining_secs > 0.0 {
        return;
    }
    match effect.phase {
        EffectPhase::Landed => {
            let spec = effect.weapon.spec();
            terrain.destroy_circle(effect.position.x, effect.position.y, spec.blast_radius);
            damage::apply_blast(
                players,
                &effect.position,
                spec.blast_radius,
                spec.damage,
                events,
            );
            events.push(GameEvent::ExplosionAt {
                x: effect.position.x,
                y: effect.position.y,
                radius: spec.blast_radius,
                kind: ProjectileKind::PrimaryShot,
                reason: TerminationReason::TerrainContact,
            });
            transition(effect, EffectPhase::Detonating, NUKE_DETONATION_SECS, events);
        }
        EffectPhase::Detonating => transition(effect, EffectPhase::Done, 0.0, events),
        _ => {}
    }
}

/// Orbital beacon: Landed → Charging(telegraph) → BeamFiring → Done.
/// The beam damages everything in a vertical column over the beacon.
fn advance_beacon(
    effect: &mut DelayedEffect,
    players: &mut [Player],
    terrain: &mut dyn Terrain,
    events: &mut Vec<GameEvent>,
) {
    if effect.phase_remaining_secs > 0.0 {
        return;
    }
    match effect.phase {
        EffectPhase::Landed => transition(effect, EffectPhase::Charging, BEACON_CHARGE_SECS, events),
        EffectPhase::Charging => {
            let spec = effect.weapon.spec();
            for (index, player) in players.iter_mut().enumerate() {
                if !player.alive {
                    continue;
                }
                let dx = (player.position.x - effect.position.x).abs();
                let dealt = player.apply_damage(damage::blast_damage(
                    spec.damage,
                    BEACON_BEAM_HALF_WIDTH,
                    dx,
                ));
                if dealt > 0.0 {
                    events.push(GameEvent::DamageDealt {
                        player: index,
                        amount: dealt,
                        remaining_health: player.health,
                    });
                }
            }
            terrain.destroy_circle(effect.position.x, effect.position.y, spec.blast_radius);
            transition(effect, EffectPhase::BeamFiring, BEACON_BEAM_SECS, events);
        }
        EffectPhase::BeamFiring => transition(effect, EffectPhase::Done, 0.0, events),
        _ => {}
    }
}

/// Strafing run: Incoming → Strafing (bullets released on a fixed cadence)
/// → Done. Done is reached only once the phase has elapsed AND every bullet
/// this run spawned has left the projectile registry — each bullet carries
/// its own hard lifetime ceiling, so the run cannot stall forever.
fn advance_strafing_run(
    effect: &mut DelayedEffect,
    live_bullets: &[u32],
    rng: &mut ChaCha8Rng,
    pending: &mut Vec<SpawnRequest>,
    events: &mut Vec<GameEvent>,
) {
    match effect.phase {
        EffectPhase::Incoming => {
            if effect.phase_remaining_secs <= 0.0 {
                transition(effect, EffectPhase::Strafing, STRAFE_ACTIVE_SECS, events);
            }
        }
        EffectPhase::Strafing => {
            let total = match effect.weapon.spec().behavior {
                voidfall_core::weapons::Behavior::StrafingRun { bullets } => bullets,
                _ => 0,
            };
            let elapsed = (STRAFE_ACTIVE_SECS - effect.phase_remaining_secs).max(0.0);
            let due = if effect.phase_remaining_secs <= 0.0 {
                total
            } else {
                ((elapsed / STRAFE_ACTIVE_SECS) * total as f64).floor() as u32
            };
            while effect.bullets_spawned < due {
                effect.bullets_spawned += 1;
                let x = effect.position.x + rng.gen_range(-STRAFE_SPREAD..STRAFE_SPREAD);
                pending.push(SpawnRequest::Projectile {
                    kind: ProjectileKind::StrafeBullet,
                    weapon: effect.weapon,
                    owner: effect.owner,
                    position: Position::new(x, effect.position.y + STRAFE_SPAWN_ALTITUDE),
                    velocity: Velocity::new(rng.gen_range(-30.0..30.0), -STRAFE_BULLET_SPEED),
                    behavior: BehaviorState::Inert,
                    strafe_run: Some(effect.id),
                });
            }
            let all_spawned = effect.bullets_spawned >= total;
            let bullets_gone = !live_bullets.contains(&effect.id);
            if effect.phase_remaining_secs <= 0.0 && all_spawned && bullets_gone {
                transition(effect, EffectPhase::Done, 0.0, events);
            }
        }
        _ => {}
    }
}

fn transition(
    effect: &mut DelayedEffect,
    phase: EffectPhase,
    duration_secs: f64,
    events: &mut Vec<GameEvent>,
) {
    effect.phase = phase;
    effect.phase_remaining_secs = duration_secs;
    events.push(GameEvent::EffectPhaseChanged {
        kind: effect.kind,
        x: effect.position.x,
        y: effect.position.y,
    });
}

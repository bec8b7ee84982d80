//! Termination detection and explosion resolution.
//!
//! Conditions are evaluated per projectile in strict priority order — first
//! match wins: terrain contact, void contact, out of bounds, behavior-forced
//! resolution, lifetime ceiling. Every terminated projectile gets exactly
//! one explosion-resolution call, and split-spawned children are queued in
//! the same tick so the quiescence oracle can never see a half-resolved
//! world.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use voidfall_core::components::{BehaviorState, Projectile};
use voidfall_core::constants::*;
use voidfall_core::enums::{EffectKind, ProjectileKind, TerminationReason};
use voidfall_core::events::GameEvent;
use voidfall_core::player::Player;
use voidfall_core::types::{Position, Velocity};
use voidfall_core::weapons::Behavior;

use crate::systems::{damage, SpawnRequest};
use crate::terrain::Terrain;

enum ContactOutcome {
    Terminated(TerminationReason),
    Survived,
}

/// Detect and resolve all terminations for this tick.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    players: &mut [Player],
    terrain: &mut dyn Terrain,
    rng: &mut ChaCha8Rng,
    forced: &[(Entity, TerminationReason)],
    pending: &mut Vec<SpawnRequest>,
    events: &mut Vec<GameEvent>,
) {
    let mut terminated: Vec<(Entity, TerminationReason)> = Vec::new();

    for (entity, (projectile, position, velocity)) in
        world.query_mut::<(&mut Projectile, &mut Position, &mut Velocity)>()
    {
        // 1. Destructible terrain surface.
        if terrain.is_below_surface(position.x, position.y) {
            match handle_contact(projectile, position, velocity, terrain) {
                ContactOutcome::Terminated(reason) => {
                    terminated.push((entity, reason));
                    continue;
                }
                ContactOutcome::Survived => {}
            }
        }

        // 2. The rising void boundary.
        if position.y <= terrain.void_height() {
            terminated.push((entity, TerminationReason::VoidContact));
            continue;
        }

        // 3. Arena bounds. A drill that exits while still tunneling is
        //    terminated here too — the resolution call below prevents
        //    silent loss.
        if position.x < 0.0
            || position.x > ARENA_WIDTH
            || position.y > ARENA_CEILING
            || position.y < ARENA_FLOOR
        {
            terminated.push((entity, TerminationReason::OutOfBounds));
            continue;
        }

        // 4. Behavior-forced resolution (apex burst, spent drill budget).
        if let Some((_, reason)) = forced.iter().find(|(e, _)| *e == entity) {
            terminated.push((entity, *reason));
            continue;
        }

        // 5. Hard lifetime ceiling — the safety valve guaranteeing every
        //    projectile kind terminates.
        if projectile.age_secs >= projectile.lifetime_ceiling_secs {
            terminated.push((entity, TerminationReason::LifetimeCeiling));
        }
    }

    for (entity, reason) in terminated {
        let snapshot = {
            let projectile = world.get::<&Projectile>(entity).map(|p| (*p).clone());
            let position = world.get::<&Position>(entity).map(|p| *p);
            let velocity = world.get::<&Velocity>(entity).map(|v| *v);
            match (projectile, position, velocity) {
                (Ok(p), Ok(pos), Ok(vel)) => Some((p, pos, vel)),
                _ => None,
            }
        };
        let Some((projectile, position, velocity)) = snapshot else {
            // Termination event for an id not present: drop, don't stall.
            log::debug!("termination for missing projectile entity {entity:?}");
            continue;
        };
        let _ = world.despawn(entity);
        resolve_explosion(
            &projectile, &position, &velocity, reason, players, terrain, rng, pending, events,
        );
    }
}

/// Behavior-specific terrain contact handling. Drills tunnel, bouncers and
/// rollers bounce against their budget, everything else terminates.
fn handle_contact(
    projectile: &mut Projectile,
    position: &mut Position,
    velocity: &mut Velocity,
    terrain: &dyn Terrain,
) -> ContactOutcome {
    match &mut projectile.behavior {
        BehaviorState::Drill { tunneling, .. } => {
            // Entering the surface starts the tunneling budget; the drill
            // keeps flying through ground until behavior::run spends it.
            *tunneling = true;
            ContactOutcome::Survived
        }
        BehaviorState::Roller { grounded } => {
            if velocity.speed() < ROLLER_REST_SPEED {
                return ContactOutcome::Terminated(TerminationReason::SpentRoller);
            }
            if projectile.bounces_left == 0 {
                return ContactOutcome::Terminated(TerminationReason::BounceLimit);
            }
            projectile.bounces_left -= 1;
            *grounded = true;
            // Settle onto the surface and follow its slope downhill.
            position.y = terrain.height_at(position.x) + 0.5;
            let slope = (terrain.height_at(position.x + 1.0)
                - terrain.height_at(position.x - 1.0))
                / 2.0;
            velocity.x *= ROLLER_FRICTION;
            velocity.y = velocity.x * slope;
            ContactOutcome::Survived
        }
        _ => {
            let is_bouncer = matches!(
                projectile.weapon.spec().behavior,
                Behavior::Bounce { .. }
            ) && projectile.kind == ProjectileKind::Bouncer;
            if !is_bouncer {
                return ContactOutcome::Terminated(TerminationReason::TerrainContact);
            }
            // Final bounce forces the explosion unconditionally; no early
            // return elsewhere may skip it.
            if projectile.bounces_left == 0 {
                return ContactOutcome::Terminated(TerminationReason::BounceLimit);
            }
            projectile.bounces_left -= 1;
            position.y = terrain.height_at(position.x) + 0.5;
            velocity.y = velocity.y.abs() * BOUNCE_RESTITUTION;
            velocity.x *= 0.95;
            ContactOutcome::Survived
        }
    }
}

/// The single explosion-resolution call every termination triggers:
/// presentation event, terrain carving, blast damage, split spawns, and
/// delayed-effect spawns.
#[allow(clippy::too_many_arguments)]
fn resolve_explosion(
    projectile: &Projectile,
    position: &Position,
    velocity: &Velocity,
    reason: TerminationReason,
    players: &mut [Player],
    terrain: &mut dyn Terrain,
    rng: &mut ChaCha8Rng,
    pending: &mut Vec<SpawnRequest>,
    events: &mut Vec<GameEvent>,
) {
    let spec = projectile.weapon.spec();
    let delayed_payload = matches!(
        spec.behavior,
        Behavior::Nuke | Behavior::OrbitalBeacon | Behavior::StrafingRun { .. }
    ) && projectile.kind == ProjectileKind::PrimaryShot;

    // A delayed-payload landing is only an impact mark: the damage comes
    // later, from the effect registry. Ending anything here was the old
    // nuke-lands-too-early defect.
    let blast_radius = if delayed_payload {
        8.0
    } else {
        spec.blast_radius
    };

    events.push(GameEvent::ExplosionAt {
        x: position.x,
        y: position.y,
        radius: blast_radius,
        kind: projectile.kind,
        reason,
    });

    // Ordinary out-of-bounds exits fizzle, but a drill still tunneling when
    // it leaves the arena detonates for real — it must not be silently lost.
    let tunneling_exit = matches!(
        projectile.behavior,
        BehaviorState::Drill {
            tunneling: true,
            ..
        }
    );
    if reason != TerminationReason::OutOfBounds || tunneling_exit {
        terrain.destroy_circle(position.x, position.y, blast_radius);
        if !delayed_payload {
            damage::apply_blast(players, position, spec.blast_radius, spec.damage, events);
        }
    }

    if delayed_payload && reason == TerminationReason::TerrainContact {
        let kind = match spec.behavior {
            Behavior::Nuke => EffectKind::Nuke,
            Behavior::OrbitalBeacon => EffectKind::OrbitalBeacon,
            _ => EffectKind::StrafingRun,
        };
        pending.push(SpawnRequest::Effect {
            kind,
            weapon: projectile.weapon,
            owner: projectile.owner,
            position: Position::new(position.x, terrain.height_at(position.x)),
        });
    }

    // Stage splits are queued before the registry's emptiness is ever
    // re-checked, so a cascading turn can't end between stages.
    if reason != TerminationReason::OutOfBounds {
        queue_splits(projectile, position, velocity, rng, pending);
    }
}

/// Queue the split-spawn children a terminating projectile produces.
fn queue_splits(
    projectile: &Projectile,
    position: &Position,
    velocity: &Velocity,
    rng: &mut ChaCha8Rng,
    pending: &mut Vec<SpawnRequest>,
) {
    let spec = projectile.weapon.spec();
    match (projectile.kind, spec.behavior) {
        // Stage 1: cluster shell scatters bomblets upward.
        (ProjectileKind::PrimaryShot, Behavior::Cluster { bomblets }) => {
            for _ in 0..bomblets {
                let angle: f64 = rng.gen_range(0.6..2.5); // upward fan
                let speed = rng.gen_range(70.0..140.0);
                pending.push(child(
                    projectile,
                    ProjectileKind::ClusterBomblet,
                    position,
                    Velocity::new(speed * angle.cos(), speed * angle.sin()),
                ));
            }
        }
        // Stage 2: each bomblet splits again on landing.
        (ProjectileKind::ClusterBomblet, Behavior::Cluster { .. }) => {
            for _ in 0..CLUSTER_STAGE2_FRAGMENTS {
                let angle: f64 = rng.gen_range(0.8..2.3);
                let speed = rng.gen_range(50.0..100.0);
                pending.push(child(
                    projectile,
                    ProjectileKind::AirburstFragment,
                    position,
                    Velocity::new(speed * angle.cos(), speed * angle.sin()),
                ));
            }
        }
        (ProjectileKind::PrimaryShot, Behavior::Airburst { fragments }) => {
            for _ in 0..fragments {
                // Downward cone from the apex.
                let vx = rng.gen_range(-90.0..90.0);
                let vy = rng.gen_range(-160.0..-40.0);
                pending.push(child(
                    projectile,
                    ProjectileKind::AirburstFragment,
                    position,
                    Velocity::new(vx, vy),
                ));
            }
        }
        (ProjectileKind::PrimaryShot, Behavior::VoidSplit { fragments }) => {
            for _ in 0..fragments {
                // Fragments inherit a fraction of parent momentum plus spread.
                let vx = velocity.x * SPLIT_MOMENTUM_FRACTION + rng.gen_range(-50.0..50.0);
                let vy = velocity.y.abs() * SPLIT_MOMENTUM_FRACTION + rng.gen_range(20.0..90.0);
                pending.push(child(
                    projectile,
                    ProjectileKind::VoidSplitterFragment,
                    position,
                    Velocity::new(vx, vy),
                ));
            }
        }
        _ => {}
    }
}

fn child(
    parent: &Projectile,
    kind: ProjectileKind,
    position: &Position,
    velocity: Velocity,
) -> SpawnRequest {
    SpawnRequest::Projectile {
        kind,
        weapon: parent.weapon,
        owner: parent.owner,
        position: Position::new(position.x, position.y + 2.0),
        velocity,
        behavior: BehaviorState::Inert,
        strafe_run: None,
    }
}

//! The quiescence oracle: "has everything from this turn finished resolving?"
//!
//! A pure query over the registries, evaluated fresh every tick while in
//! RESOLVING — never cached, because new entities can appear mid-resolution
//! (splits, delayed-effect spawns). No component other than the turn state
//! machine acts on its answer.

use hecs::World;

use voidfall_core::components::{DelayedEffect, Projectile};

use crate::systems::SpawnRequest;

/// True iff no projectile is in flight, no delayed effect is unresolved,
/// and no split-spawn is still queued for the current tick.
pub fn is_world_quiet(world: &World, pending_spawns: &[SpawnRequest]) -> bool {
    if !pending_spawns.is_empty() {
        return false;
    }
    if world.query::<&Projectile>().iter().next().is_some() {
        return false;
    }
    world
        .query::<&DelayedEffect>()
        .iter()
        .all(|(_entity, effect)| effect.is_resolved())
}

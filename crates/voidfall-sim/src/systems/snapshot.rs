//! Snapshot builder — flattens the world + match state into the serializable
//! view the presentation layer consumes each tick.

use hecs::World;

use voidfall_core::components::{DelayedEffect, Projectile};
use voidfall_core::player::Player;
use voidfall_core::state::{EffectView, MatchSnapshot, PlayerView, ProjectileView};
use voidfall_core::types::{Position, SimTime, Velocity};

use crate::terrain::Terrain;
use crate::turn::TurnState;

pub fn build(
    world: &World,
    time: &SimTime,
    players: &[Player],
    turn: &TurnState,
    terrain: &dyn Terrain,
    events: Vec<voidfall_core::events::GameEvent>,
) -> MatchSnapshot {
    let players_view = players
        .iter()
        .map(|p| PlayerView {
            name: p.name.clone(),
            position: p.position,
            health: p.health,
            alive: p.alive,
            weapon: p.weapon,
            rerolls_remaining: p.rerolls_remaining,
            controller: p.controller,
        })
        .collect();

    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &Position, &Velocity)>()
        .iter()
        .map(|(_entity, (projectile, position, velocity))| ProjectileView {
            kind: projectile.kind,
            owner: projectile.owner,
            position: *position,
            velocity: *velocity,
        })
        .collect();
    // Stable order for deterministic serialization.
    projectiles.sort_by(|a, b| {
        a.position
            .x
            .total_cmp(&b.position.x)
            .then(a.position.y.total_cmp(&b.position.y))
    });

    let mut effects: Vec<EffectView> = world
        .query::<&DelayedEffect>()
        .iter()
        .map(|(_entity, effect)| EffectView {
            kind: effect.kind,
            phase: effect.phase,
            position: effect.position,
            phase_remaining_secs: effect.phase_remaining_secs,
        })
        .collect();
    effects.sort_by(|a, b| a.position.x.total_cmp(&b.position.x));

    MatchSnapshot {
        time: *time,
        phase: turn.phase,
        current_player: turn.current_player,
        turn_count: turn.turn_count,
        round: turn.round(players.len()),
        players: players_view,
        projectiles,
        effects,
        lottery: turn.lottery_view(),
        aim: turn.aim_view(),
        outcome: turn.outcome,
        void_height: terrain.void_height(),
        events,
    }
}

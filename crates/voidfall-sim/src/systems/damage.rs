//! Blast damage model: linear falloff from the explosion center.

use voidfall_core::events::GameEvent;
use voidfall_core::player::Player;
use voidfall_core::types::Position;

/// Damage at `distance` from a blast of `max_damage`/`radius`.
/// Non-increasing in distance, never negative.
pub fn blast_damage(max_damage: f64, radius: f64, distance: f64) -> f64 {
    if radius <= 0.0 {
        return 0.0;
    }
    (max_damage * (1.0 - distance / radius)).max(0.0)
}

/// Apply a blast to every player within radius. Self-damage is allowed and
/// intentional — the owner gets no exemption.
pub fn apply_blast(
    players: &mut [Player],
    center: &Position,
    radius: f64,
    max_damage: f64,
    events: &mut Vec<GameEvent>,
) {
    for (index, player) in players.iter_mut().enumerate() {
        if !player.alive {
            continue;
        }
        let distance = player.position.range_to(center);
        if distance > radius {
            continue;
        }
        let dealt = player.apply_damage(blast_damage(max_damage, radius, distance));
        if dealt > 0.0 {
            events.push(GameEvent::DamageDealt {
                player: index,
                amount: dealt,
                remaining_health: player.health,
            });
        }
    }
}

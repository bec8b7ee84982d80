//! Parabolic flight integration: gravity, wind, position update, aging.

use hecs::World;

use voidfall_core::components::{BehaviorState, Projectile};
use voidfall_core::constants::GRAVITY;
use voidfall_core::types::{Position, Velocity};

/// Integrate all projectiles by one step. `wind_accel` is the per-match
/// horizontal wind acceleration (signed).
pub fn run(world: &mut World, wind_accel: f64, dt: f64) {
    for (_entity, (projectile, position, velocity)) in
        world.query_mut::<(&mut Projectile, &mut Position, &mut Velocity)>()
    {
        projectile.age_secs += dt;

        // A tunneling drill bores in a straight line; gravity and wind act
        // only on airborne projectiles.
        let tunneling = matches!(
            projectile.behavior,
            BehaviorState::Drill {
                tunneling: true,
                ..
            }
        );
        if !tunneling {
            velocity.y -= GRAVITY * dt;
            // A grounded roller is held by the surface; wind only pushes
            // airborne projectiles.
            let grounded = matches!(
                projectile.behavior,
                BehaviorState::Roller { grounded: true }
            );
            if !grounded {
                velocity.x += wind_accel * dt;
            }
        }

        position.x += velocity.x * dt;
        position.y += velocity.y * dt;
    }
}

//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Arena bounds ---

/// Arena width in meters.
pub const ARENA_WIDTH: f64 = 1200.0;

/// Vertical ceiling above which projectiles are considered out of bounds.
/// Generous so high lobs are not cut off mid-arc.
pub const ARENA_CEILING: f64 = 2000.0;

/// Floor below which projectiles are out of bounds (under the void).
pub const ARENA_FLOOR: f64 = -200.0;

// --- Physics ---

/// Downward gravitational acceleration (m/s²).
pub const GRAVITY: f64 = 120.0;

/// Maximum magnitude of the per-match horizontal wind (m/s²).
pub const WIND_MAX_ACCEL: f64 = 18.0;

/// Fraction of speed retained by a bounce.
pub const BOUNCE_RESTITUTION: f64 = 0.65;

/// Horizontal speed multiplier applied to a roller each surface contact.
pub const ROLLER_FRICTION: f64 = 0.80;

/// Speed below which a roller is considered spent and detonates (m/s).
pub const ROLLER_REST_SPEED: f64 = 12.0;

/// Seconds between anomaly direction jinks.
pub const ANOMALY_JINK_INTERVAL: f64 = 0.6;

/// Homing seeker steering acceleration toward its target (m/s²).
pub const HOMING_STEER_ACCEL: f64 = 220.0;

// --- Projectile lifetime ceilings (seconds) ---
// Safety valves guaranteeing termination even under physics edge cases.

/// Lifetime ceiling for strafe bullets.
pub const STRAFE_BULLET_LIFETIME: f64 = 5.0;

/// Lifetime ceiling for ordinary shots, bomblets and fragments.
pub const SHOT_LIFETIME: f64 = 20.0;

/// Lifetime ceiling for long-lived behaviors (bouncer, roller, seeker).
pub const LONG_LIFETIME: f64 = 30.0;

// --- Turn resolution ---

/// Minimum time the world must stay quiet before the turn advances (seconds).
pub const SETTLE_DURATION: f64 = 0.4;

/// Hard ceiling on one FIRING/RESOLVING span (seconds of simulated time).
/// Exceeding it force-clears the registries and force-advances the turn.
pub const RESOLUTION_SAFETY_CEILING: f64 = 30.0;

// --- Players ---

/// Starting and maximum health.
pub const MAX_HEALTH: f64 = 100.0;

/// Reroll budget each player starts the match with. Never replenished.
pub const STARTING_REROLLS: u32 = 1;

/// Amount the void rises at the start of each new round (meters).
pub const VOID_RISE_PER_ROUND: f64 = 12.0;

// --- Aiming ---

/// Minimum and maximum charge (muzzle-speed multiplier).
pub const CHARGE_MIN: f64 = 0.15;
pub const CHARGE_MAX: f64 = 1.0;

// --- Lottery ---

/// Cards offered per draw.
pub const LOTTERY_CARD_COUNT: usize = 3;

/// Pity threshold: draws without a rare-or-better card before one is forced.
pub const PITY_THRESHOLD: u32 = 5;

/// Card reveal animation window before selection input is accepted (seconds).
/// AI turns skip this entirely.
pub const LOTTERY_REVEAL_SECS: f64 = 0.5;

/// Rarity weights (common, uncommon, rare, epic, legendary), summing to 100.
pub const RARITY_WEIGHTS: [u32; 5] = [50, 30, 15, 4, 1];

// --- Delayed effects (phase durations, seconds) ---

/// Nuke fuse between landing and detonation.
pub const NUKE_FUSE_SECS: f64 = 1.5;

/// Nuke detonation (cinematic) duration.
pub const NUKE_DETONATION_SECS: f64 = 2.5;

/// Orbital beacon telegraph (charge) duration.
pub const BEACON_CHARGE_SECS: f64 = 2.0;

/// Orbital beacon beam duration.
pub const BEACON_BEAM_SECS: f64 = 1.5;

/// Strafing run approach duration before bullets start.
pub const STRAFE_INCOMING_SECS: f64 = 1.0;

/// Strafing run active (bullet-spawning) duration.
pub const STRAFE_ACTIVE_SECS: f64 = 1.2;

/// Width of the orbital beam damage column (meters).
pub const BEACON_BEAM_HALF_WIDTH: f64 = 25.0;

/// Altitude above the landing point at which strafe bullets spawn.
pub const STRAFE_SPAWN_ALTITUDE: f64 = 350.0;

/// Downward speed of spawned strafe bullets (m/s).
pub const STRAFE_BULLET_SPEED: f64 = 420.0;

/// Horizontal half-spread of strafe bullet spawn points (meters).
pub const STRAFE_SPREAD: f64 = 70.0;

/// Fragments each cluster bomblet splits into on landing (stage 2).
pub const CLUSTER_STAGE2_FRAGMENTS: u32 = 3;

/// Fraction of parent momentum inherited by split fragments.
pub const SPLIT_MOMENTUM_FRACTION: f64 = 0.6;

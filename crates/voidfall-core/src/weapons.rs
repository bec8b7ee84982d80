//! Static weapon data tables.
//!
//! Read-only: the engine parametrizes spawned projectiles from these specs
//! and never mutates them. Behavior is a closed tagged enum so dispatch is
//! exhaustive and compiler-checked.

use serde::{Deserialize, Serialize};

use crate::enums::{ProjectileKind, Rarity};

/// Every weapon the lottery can offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponId {
    Mortar,
    HeavyShell,
    BouncingBetty,
    BoulderRoller,
    TunnelDrill,
    ClusterBomb,
    AirburstShell,
    SeekerMissile,
    VoidSplitter,
    TacticalNuke,
    OrbitalBeacon,
    StrafeSignal,
    AnomalyOrb,
}

/// Closed set of weapon behaviors the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Behavior {
    /// Plain parabolic shot, explodes on first contact.
    Standard,
    /// Explodes on contact and scatters bomblets.
    Cluster { bomblets: u32 },
    /// Bursts at apex of flight into downward fragments.
    Airburst { fragments: u32 },
    /// Tunnels through terrain until its depth budget is spent.
    Drill { depth: f64 },
    /// Bounces off terrain, exploding on its final bounce.
    Bounce { max_bounces: u32 },
    /// Steers toward the nearest living enemy.
    Homing,
    /// Rolls along the surface until it runs out of speed.
    Roll { max_bounces: u32 },
    /// Splits on contact into fragments inheriting parent momentum.
    VoidSplit { fragments: u32 },
    /// Lands, then detonates after a fuse (delayed effect).
    Nuke,
    /// Lands, telegraphs, then fires an orbital beam (delayed effect).
    OrbitalBeacon,
    /// Lands, then calls in a strafing run of bullets (delayed effect).
    StrafingRun { bullets: u32 },
    /// Jinks unpredictably mid-flight, explodes on contact.
    Anomaly,
}

/// Static stats for one weapon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeaponSpec {
    pub damage: f64,
    pub blast_radius: f64,
    /// Muzzle speed at full charge (m/s).
    pub muzzle_speed: f64,
    pub behavior: Behavior,
    pub rarity: Rarity,
}

impl WeaponId {
    pub const ALL: [WeaponId; 13] = [
        WeaponId::Mortar,
        WeaponId::HeavyShell,
        WeaponId::BouncingBetty,
        WeaponId::BoulderRoller,
        WeaponId::TunnelDrill,
        WeaponId::ClusterBomb,
        WeaponId::AirburstShell,
        WeaponId::SeekerMissile,
        WeaponId::VoidSplitter,
        WeaponId::TacticalNuke,
        WeaponId::OrbitalBeacon,
        WeaponId::StrafeSignal,
        WeaponId::AnomalyOrb,
    ];

    /// Look up the static spec for this weapon.
    pub fn spec(&self) -> &'static WeaponSpec {
        match self {
            WeaponId::Mortar => &WeaponSpec {
                damage: 25.0,
                blast_radius: 40.0,
                muzzle_speed: 320.0,
                behavior: Behavior::Standard,
                rarity: Rarity::Common,
            },
            WeaponId::HeavyShell => &WeaponSpec {
                damage: 38.0,
                blast_radius: 50.0,
                muzzle_speed: 300.0,
                behavior: Behavior::Standard,
                rarity: Rarity::Common,
            },
            WeaponId::BouncingBetty => &WeaponSpec {
                damage: 30.0,
                blast_radius: 45.0,
                muzzle_speed: 310.0,
                behavior: Behavior::Bounce { max_bounces: 4 },
                rarity: Rarity::Uncommon,
            },
            WeaponId::BoulderRoller => &WeaponSpec {
                damage: 34.0,
                blast_radius: 48.0,
                muzzle_speed: 280.0,
                behavior: Behavior::Roll { max_bounces: 12 },
                rarity: Rarity::Uncommon,
            },
            WeaponId::TunnelDrill => &WeaponSpec {
                damage: 32.0,
                blast_radius: 42.0,
                muzzle_speed: 340.0,
                behavior: Behavior::Drill { depth: 120.0 },
                rarity: Rarity::Uncommon,
            },
            WeaponId::ClusterBomb => &WeaponSpec {
                damage: 16.0,
                blast_radius: 30.0,
                muzzle_speed: 300.0,
                behavior: Behavior::Cluster { bomblets: 5 },
                rarity: Rarity::Rare,
            },
            WeaponId::AirburstShell => &WeaponSpec {
                damage: 14.0,
                blast_radius: 28.0,
                muzzle_speed: 330.0,
                behavior: Behavior::Airburst { fragments: 6 },
                rarity: Rarity::Rare,
            },
            WeaponId::SeekerMissile => &WeaponSpec {
                damage: 42.0,
                blast_radius: 38.0,
                muzzle_speed: 260.0,
                behavior: Behavior::Homing,
                rarity: Rarity::Rare,
            },
            WeaponId::VoidSplitter => &WeaponSpec {
                damage: 20.0,
                blast_radius: 34.0,
                muzzle_speed: 310.0,
                behavior: Behavior::VoidSplit { fragments: 3 },
                rarity: Rarity::Epic,
            },
            WeaponId::TacticalNuke => &WeaponSpec {
                damage: 70.0,
                blast_radius: 110.0,
                muzzle_speed: 280.0,
                behavior: Behavior::Nuke,
                rarity: Rarity::Legendary,
            },
            WeaponId::OrbitalBeacon => &WeaponSpec {
                damage: 55.0,
                blast_radius: 60.0,
                muzzle_speed: 300.0,
                behavior: Behavior::OrbitalBeacon,
                rarity: Rarity::Epic,
            },
            WeaponId::StrafeSignal => &WeaponSpec {
                damage: 8.0,
                blast_radius: 18.0,
                muzzle_speed: 300.0,
                behavior: Behavior::StrafingRun { bullets: 10 },
                rarity: Rarity::Epic,
            },
            WeaponId::AnomalyOrb => &WeaponSpec {
                damage: 36.0,
                blast_radius: 46.0,
                muzzle_speed: 290.0,
                behavior: Behavior::Anomaly,
                rarity: Rarity::Legendary,
            },
        }
    }

    /// Projectile kind the weapon's primary shot is registered as.
    pub fn primary_kind(&self) -> ProjectileKind {
        match self.spec().behavior {
            Behavior::Drill { .. } => ProjectileKind::Drill,
            Behavior::Bounce { .. } => ProjectileKind::Bouncer,
            Behavior::Homing => ProjectileKind::HomingSeeker,
            Behavior::Roll { .. } => ProjectileKind::Roller,
            Behavior::Anomaly => ProjectileKind::Anomaly,
            _ => ProjectileKind::PrimaryShot,
        }
    }
}

/// All weapons of the given rarity, in declaration order.
pub fn rarity_pool(rarity: Rarity) -> &'static [WeaponId] {
    match rarity {
        Rarity::Common => &[WeaponId::Mortar, WeaponId::HeavyShell],
        Rarity::Uncommon => &[
            WeaponId::BouncingBetty,
            WeaponId::BoulderRoller,
            WeaponId::TunnelDrill,
        ],
        Rarity::Rare => &[
            WeaponId::ClusterBomb,
            WeaponId::AirburstShell,
            WeaponId::SeekerMissile,
        ],
        Rarity::Epic => &[
            WeaponId::VoidSplitter,
            WeaponId::OrbitalBeacon,
            WeaponId::StrafeSignal,
        ],
        Rarity::Legendary => &[WeaponId::TacticalNuke, WeaponId::AnomalyOrb],
    }
}

//! Enumeration types used throughout the engine.

use serde::{Deserialize, Serialize};

/// High-level turn phase driven by the turn state machine.
///
/// FIRING and RESOLVING are one continuous simulation; RESOLVING is
/// distinguished only by "turn-end is now eligible to be evaluated".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Weapon cards are on offer; waiting for a selection.
    #[default]
    Lottery,
    /// Active player is adjusting angle and charge.
    Aiming,
    /// Primary projectile in flight, not yet terminated.
    Firing,
    /// Primary terminated; waiting for the world to go quiet.
    Resolving,
    /// Match decided. Terminal.
    GameOver,
}

/// Kind tag for every ballistic entity the projectile registry can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectileKind {
    PrimaryShot,
    ClusterBomblet,
    AirburstFragment,
    StrafeBullet,
    Drill,
    Bouncer,
    HomingSeeker,
    Roller,
    VoidSplitterFragment,
    Anomaly,
}

/// Kind tag for entities that resolve on a timer after landing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    Nuke,
    OrbitalBeacon,
    StrafingRun,
}

/// Sub-phase of a delayed effect. Each kind walks its own legal sequence:
/// nuke: Landed → Detonating → Done;
/// beacon: Landed → Charging → BeamFiring → Done;
/// strafing run: Incoming → Strafing → Done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectPhase {
    Landed,
    Charging,
    Detonating,
    BeamFiring,
    Incoming,
    Strafing,
    Done,
}

/// Weapon card rarity tier. Ordering is the draw/AI ranking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];

    /// Rare-or-above counts toward the pity guarantee.
    pub fn is_rare_or_better(&self) -> bool {
        *self >= Rarity::Rare
    }
}

/// Who drives a player's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Controller {
    Human,
    Ai,
}

/// Why a projectile left the simulation. First matching condition wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminationReason {
    /// Contact with the destructible terrain surface.
    TerrainContact,
    /// Contact with the rising void boundary.
    VoidContact,
    /// Left the horizontal/vertical arena bounds.
    OutOfBounds,
    /// Exceeded the behavior's bounce budget (final bounce).
    BounceLimit,
    /// Roller slowed below its rest speed.
    SpentRoller,
    /// Airburst shell reached the apex of its arc.
    ApexBurst,
    /// Hit the hard per-kind lifetime ceiling.
    LifetimeCeiling,
    /// Cleared by the resolution safety-ceiling path.
    ForcedTimeout,
}

/// Final result of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// Index of the last player standing.
    Winner(usize),
    /// Everyone was eliminated in the same resolution window.
    Draw,
}

/// Lottery presentation sub-phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LotteryPhase {
    /// Cards are being revealed (animation window for the frontend).
    #[default]
    Revealing,
    /// All cards visible; selection input is accepted.
    Selecting,
}

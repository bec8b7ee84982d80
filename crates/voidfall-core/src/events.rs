//! Events emitted by the engine for the presentation collaborator.
//!
//! The engine has no dependency on how (or whether) these are rendered.

use serde::{Deserialize, Serialize};

use crate::enums::{EffectKind, ProjectileKind, TerminationReason};
use crate::weapons::WeaponId;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A ballistic entity entered the projectile registry.
    ProjectileSpawned {
        kind: ProjectileKind,
        owner: usize,
        x: f64,
        y: f64,
    },
    /// A projectile resolved with an explosion.
    ExplosionAt {
        x: f64,
        y: f64,
        radius: f64,
        kind: ProjectileKind,
        reason: TerminationReason,
    },
    /// A delayed effect entered a new sub-phase.
    EffectPhaseChanged { kind: EffectKind, x: f64, y: f64 },
    /// A lottery card was revealed to the active player.
    CardRevealed {
        slot: usize,
        weapon: WeaponId,
        forced_by_pity: bool,
    },
    /// A player took damage.
    DamageDealt {
        player: usize,
        amount: f64,
        remaining_health: f64,
    },
    /// Control passed to the next player.
    TurnAdvanced { next_player: usize, turn: u32 },
    /// The match ended. `winner` is None on a draw.
    MatchOver { winner: Option<usize> },
    /// Non-fatal engine diagnostic (liveness timeout, dropped inconsistency).
    Diagnostic { code: DiagnosticCode, detail: String },
}

/// Machine-readable diagnostic categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticCode {
    /// Quiescence was never reached; the safety ceiling force-advanced.
    SafetyCeilingForcedAdvance,
    /// A spawn request referenced an eliminated owner and was dropped.
    SpawnForEliminatedOwner,
    /// A selection command was rejected (bad index / unknown weapon).
    InvalidSelection,
}

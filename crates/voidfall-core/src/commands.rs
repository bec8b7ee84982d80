//! Player commands sent from the input collaborator to the engine.
//!
//! Commands are queued and processed at the next tick boundary. The engine
//! enforces strict phase gating: a command arriving outside the phase that
//! legitimately accepts it is ignored.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start the match (first lottery draw for player 0).
    StartMatch,

    // --- Lottery (accepted only in the selecting sub-phase) ---
    /// Pick the offered card at `index`.
    SelectCard { index: usize },
    /// Spend one reroll to redraw the offered cards. No-op at zero budget.
    RerollLottery,

    // --- Aiming ---
    /// Adjust the aim angle (radians, positive = counter-clockwise).
    Aim { delta_radians: f64 },
    /// Adjust the shot charge (muzzle-speed fraction).
    Charge { delta: f64 },
    /// Release: fire the assigned weapon with the current angle/charge.
    Fire,
}

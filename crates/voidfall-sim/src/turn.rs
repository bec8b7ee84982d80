//! Turn phase state machine state.
//!
//! `LOTTERY → AIMING → FIRING → RESOLVING → (next player) → LOTTERY`, with
//! `GAMEOVER` reachable from RESOLVING. The quiescence oracle plus the
//! settle timer decide when RESOLVING may advance; the `ending_turn` guard
//! makes the advance logic run at most once per resolution window, whether
//! it is reached organically or through the safety-ceiling path.

use voidfall_core::constants::*;
use voidfall_core::enums::{LotteryPhase, MatchOutcome, TurnPhase};
use voidfall_core::state::{AimView, Card, LotteryView};
use voidfall_core::types::Position;

/// Lottery sub-state, recreated at the start of every turn and cleared once
/// a card is selected.
#[derive(Debug, Clone)]
pub struct LotteryState {
    pub cards: Vec<Card>,
    pub highlighted: usize,
    pub phase: LotteryPhase,
    pub reveal_remaining_secs: f64,
    /// Pity value that parametrized this draw, reused verbatim by rerolls.
    pub pity_input: u32,
}

/// All turn/match bookkeeping outside the ECS world.
#[derive(Debug, Clone)]
pub struct TurnState {
    pub phase: TurnPhase,
    pub current_player: usize,
    pub turn_count: u32,
    pub aim_angle: f64,
    pub charge: f64,
    pub lottery: Option<LotteryState>,
    pub pity_counter: u32,
    /// Continuous seconds the world has been observed quiet.
    pub settle_secs: f64,
    /// Re-entrancy guard: the advance logic runs at most once per
    /// resolution window while this is set.
    pub ending_turn: bool,
    /// Wall-clock (simulated) length of the current FIRING/RESOLVING span.
    pub resolution_clock_secs: f64,
    pub outcome: Option<MatchOutcome>,
}

impl Default for TurnState {
    fn default() -> Self {
        Self {
            phase: TurnPhase::Lottery,
            current_player: 0,
            turn_count: 0,
            aim_angle: std::f64::consts::FRAC_PI_3,
            charge: 0.6,
            lottery: None,
            pity_counter: 0,
            settle_secs: 0.0,
            ending_turn: false,
            resolution_clock_secs: 0.0,
            outcome: None,
        }
    }
}

impl TurnState {
    /// Derived round number: floor(turn_count / player_count) + 1.
    pub fn round(&self, player_count: usize) -> u32 {
        if player_count == 0 {
            return 1;
        }
        self.turn_count / player_count as u32 + 1
    }

    /// Begin a FIRING span: reset the settle and safety clocks.
    pub fn begin_firing(&mut self) {
        self.phase = TurnPhase::Firing;
        self.settle_secs = 0.0;
        self.resolution_clock_secs = 0.0;
        self.ending_turn = false;
    }

    /// Record one tick's quiescence observation while RESOLVING. Returns
    /// true once quiet has held for the full settle duration. Losing
    /// quiescence (a new entity appeared) resets the timer.
    pub fn observe_quiescence(&mut self, quiet: bool, dt: f64) -> bool {
        if quiet {
            self.settle_secs += dt;
        } else {
            self.settle_secs = 0.0;
        }
        self.settle_secs >= SETTLE_DURATION
    }

    /// Whether the FIRING/RESOLVING span has outlived the hard ceiling.
    pub fn past_safety_ceiling(&self) -> bool {
        self.resolution_clock_secs >= RESOLUTION_SAFETY_CEILING
    }

    pub fn lottery_view(&self) -> Option<LotteryView> {
        self.lottery.as_ref().map(|l| LotteryView {
            cards: l.cards.clone(),
            highlighted: l.highlighted,
            phase: l.phase,
            pity_counter: self.pity_counter,
        })
    }

    pub fn aim_view(&self) -> Option<AimView> {
        matches!(self.phase, TurnPhase::Aiming).then_some(AimView {
            angle_radians: self.aim_angle,
            charge: self.charge,
        })
    }
}

/// Deterministic AI firing solution: aim at the target with a fixed 60°
/// elevation and solve flat-ground range for charge. Crude on purpose —
/// the AI is a collaborator, not a marksman.
pub fn ai_aim(own: &Position, target: &Position, muzzle_speed: f64) -> (f64, f64) {
    let dx = target.x - own.x;
    let elevation = std::f64::consts::FRAC_PI_3;
    let angle = if dx >= 0.0 {
        elevation
    } else {
        std::f64::consts::PI - elevation
    };
    // v² sin(2θ) / g = range  ⇒  v = sqrt(range · g / sin(2θ))
    let needed = (dx.abs() * GRAVITY / (2.0 * elevation).sin()).sqrt();
    let charge = (needed / muzzle_speed).clamp(CHARGE_MIN, CHARGE_MAX);
    (angle, charge)
}

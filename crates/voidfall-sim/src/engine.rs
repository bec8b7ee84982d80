//! Match engine — the core of the game.
//!
//! `MatchEngine` owns the hecs ECS world, the player roster, the terrain
//! collaborator, and the turn phase state machine. It processes player
//! commands, runs all systems in a fixed order each tick, and produces
//! `MatchSnapshot`s. Completely headless, enabling deterministic testing.
//!
//! Within one tick, all registry updates (behavior, physics, termination
//! processing, effect stepping, split-spawn flushing) complete before the
//! quiescence oracle is consulted — evaluating quiescence earlier produces
//! the false "world is quiet" readings this engine exists to prevent.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use voidfall_core::commands::PlayerCommand;
use voidfall_core::components::{BehaviorState, DelayedEffect, Projectile};
use voidfall_core::constants::*;
use voidfall_core::enums::*;
use voidfall_core::events::{DiagnosticCode, GameEvent};
use voidfall_core::player::Player;
use voidfall_core::state::MatchSnapshot;
use voidfall_core::types::{Position, SimTime, Velocity};
use voidfall_core::weapons::{Behavior, WeaponId};
use voidfall_lottery::{ai_select, draw, LotteryConfig};

use crate::systems::{self, SpawnRequest};
use crate::terrain::{Heightfield, Terrain};
use crate::turn::{ai_aim, LotteryState, TurnState};

/// One entry in the match roster.
#[derive(Debug, Clone)]
pub struct PlayerSetup {
    pub name: String,
    pub controller: Controller,
}

impl PlayerSetup {
    pub fn ai(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            controller: Controller::Ai,
        }
    }

    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            controller: Controller::Human,
        }
    }
}

/// Configuration for starting a new match.
pub struct MatchConfig {
    /// RNG seed for determinism. Same seed = same match.
    pub seed: u64,
    pub players: Vec<PlayerSetup>,
    pub lottery: LotteryConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            players: vec![PlayerSetup::ai("RUST-1"), PlayerSetup::ai("RUST-2")],
            lottery: LotteryConfig::default(),
        }
    }
}

/// The match engine. Owns the ECS world and all match state.
pub struct MatchEngine {
    world: World,
    time: SimTime,
    players: Vec<Player>,
    turn: TurnState,
    terrain: Box<dyn Terrain>,
    lottery_config: LotteryConfig,
    rng: ChaCha8Rng,
    wind_accel: f64,
    command_queue: VecDeque<PlayerCommand>,
    pending_spawns: Vec<SpawnRequest>,
    despawn_buffer: Vec<Entity>,
    forced_terminations: Vec<(Entity, TerminationReason)>,
    events: Vec<GameEvent>,
    next_effect_id: u32,
    /// The turn's primary shot, watched for its first termination.
    primary_in_flight: Option<Entity>,
    started: bool,
    last_round: u32,
}

impl MatchEngine {
    /// Create a new engine over a generated heightfield.
    pub fn new(config: MatchConfig) -> Self {
        let terrain = Box::new(Heightfield::generate(config.seed));
        Self::with_terrain(config, terrain)
    }

    /// Create a new engine over a caller-supplied terrain collaborator.
    pub fn with_terrain(config: MatchConfig, terrain: Box<dyn Terrain>) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let wind_accel = rng.gen_range(-WIND_MAX_ACCEL..WIND_MAX_ACCEL);

        let count = config.players.len().max(1);
        let players = config
            .players
            .into_iter()
            .enumerate()
            .map(|(i, setup)| {
                let x = ARENA_WIDTH * (i as f64 + 1.0) / (count as f64 + 1.0);
                let position = Position::new(x, terrain.height_at(x));
                Player::new(setup.name, position, setup.controller)
            })
            .collect();

        Self {
            world: World::new(),
            time: SimTime::default(),
            players,
            turn: TurnState::default(),
            terrain,
            lottery_config: config.lottery,
            rng,
            wind_accel,
            command_queue: VecDeque::new(),
            pending_spawns: Vec::new(),
            despawn_buffer: Vec::new(),
            forced_terminations: Vec::new(),
            events: Vec::new(),
            next_effect_id: 0,
            primary_in_flight: None,
            started: false,
            last_round: 1,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the match by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> MatchSnapshot {
        self.process_commands();

        if self.started && self.turn.phase != TurnPhase::GameOver {
            self.step_idle_phases();
            if matches!(self.turn.phase, TurnPhase::Firing | TurnPhase::Resolving) {
                self.run_resolution_step();
                self.evaluate_turn_end();
            }
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build(
            &self.world,
            &self.time,
            &self.players,
            &self.turn,
            self.terrain.as_ref(),
            events,
        )
    }

    /// Current turn phase.
    pub fn phase(&self) -> TurnPhase {
        self.turn.phase
    }

    /// Current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Read-only access to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Read-only access to the player roster.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Process all queued commands, phase-gated.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartMatch => {
                if !self.started {
                    self.started = true;
                    self.start_lottery();
                }
            }
            PlayerCommand::SelectCard { index } => {
                if self.selection_open() {
                    self.assign_weapon(index);
                }
            }
            PlayerCommand::RerollLottery => {
                if self.selection_open() {
                    self.reroll_lottery();
                }
            }
            PlayerCommand::Aim { delta_radians } => {
                if self.aiming_open() {
                    self.turn.aim_angle =
                        (self.turn.aim_angle + delta_radians).clamp(0.0, std::f64::consts::PI);
                }
            }
            PlayerCommand::Charge { delta } => {
                if self.aiming_open() {
                    self.turn.charge = (self.turn.charge + delta).clamp(CHARGE_MIN, CHARGE_MAX);
                }
            }
            PlayerCommand::Fire => {
                if self.aiming_open() {
                    self.fire_weapon();
                }
            }
        }
    }

    /// Card selection input is legal only in LOTTERY's selecting sub-phase,
    /// for a human-controlled active player.
    fn selection_open(&self) -> bool {
        self.turn.phase == TurnPhase::Lottery
            && self.players[self.turn.current_player].controller == Controller::Human
            && self
                .turn
                .lottery
                .as_ref()
                .is_some_and(|l| l.phase == LotteryPhase::Selecting)
    }

    fn aiming_open(&self) -> bool {
        self.turn.phase == TurnPhase::Aiming
            && self.players[self.turn.current_player].controller == Controller::Human
    }

    /// Advance the non-simulating phases: lottery reveal animation and AI
    /// turns (AI picks and fires without animation delay).
    fn step_idle_phases(&mut self) {
        if self.turn.phase == TurnPhase::Lottery {
            if let Some(lottery) = &mut self.turn.lottery {
                if lottery.phase == LotteryPhase::Revealing {
                    lottery.reveal_remaining_secs -= DT;
                    if lottery.reveal_remaining_secs <= 0.0 {
                        lottery.phase = LotteryPhase::Selecting;
                    }
                }
            }
        }

        if self.turn.phase == TurnPhase::Aiming
            && self.players[self.turn.current_player].controller == Controller::Ai
        {
            self.ai_take_aim();
            self.fire_weapon();
        }
    }

    /// One resolution step: behavior, physics, terminations, delayed
    /// effects, then the same-tick spawn flush. Order matters — see the
    /// module docs.
    fn run_resolution_step(&mut self) {
        self.forced_terminations.clear();
        systems::behavior::run(
            &mut self.world,
            &self.players,
            &mut self.rng,
            DT,
            &mut self.forced_terminations,
        );
        systems::ballistics::run(&mut self.world, self.wind_accel, DT);
        systems::termination::run(
            &mut self.world,
            &mut self.players,
            self.terrain.as_mut(),
            &mut self.rng,
            &self.forced_terminations,
            &mut self.pending_spawns,
            &mut self.events,
        );
        systems::effects::run(
            &mut self.world,
            &mut self.players,
            self.terrain.as_mut(),
            &mut self.rng,
            &mut self.pending_spawns,
            &mut self.events,
            &mut self.despawn_buffer,
            DT,
        );
        self.flush_pending_spawns();
        self.turn.resolution_clock_secs += DT;
    }

    /// Post-step turn machine update: FIRING→RESOLVING on the primary's
    /// first termination, then the quiescence/settle/ceiling decision.
    fn evaluate_turn_end(&mut self) {
        if self.turn.phase == TurnPhase::Firing {
            if let Some(primary) = self.primary_in_flight {
                if !self.world.contains(primary) {
                    self.primary_in_flight = None;
                    self.turn.phase = TurnPhase::Resolving;
                }
            }
        }

        // Last-resort liveness guarantee, not normal-path behavior.
        if self.turn.past_safety_ceiling() {
            self.force_clear_registries();
            self.end_turn(true);
            return;
        }

        if self.turn.phase == TurnPhase::Resolving {
            let quiet = systems::quiescence::is_world_quiet(&self.world, &self.pending_spawns);
            if self.turn.observe_quiescence(quiet, DT) {
                self.end_turn(false);
            }
        }
    }

    /// Advance to the next player (or end the match). Guarded by the
    /// `ending_turn` flag: at most one advance per resolution window, no
    /// matter how many paths reach this in one tick.
    fn end_turn(&mut self, forced: bool) {
        if self.turn.ending_turn {
            return;
        }
        match self.turn.phase {
            TurnPhase::Resolving => {}
            TurnPhase::Firing if forced => {}
            _ => return,
        }
        self.turn.ending_turn = true;

        // Win check before advancing: void-consumed players are eliminated.
        let void = self.terrain.void_height();
        for player in &mut self.players {
            if player.alive && player.position.y < void {
                player.health = 0.0;
                player.alive = false;
            }
        }
        let alive: Vec<usize> = self
            .players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.alive)
            .map(|(i, _)| i)
            .collect();

        match alive.len() {
            0 => {
                self.turn.outcome = Some(MatchOutcome::Draw);
                self.turn.phase = TurnPhase::GameOver;
                self.turn.lottery = None;
                self.events.push(GameEvent::MatchOver { winner: None });
            }
            1 => {
                self.turn.outcome = Some(MatchOutcome::Winner(alive[0]));
                self.turn.phase = TurnPhase::GameOver;
                self.turn.lottery = None;
                self.events.push(GameEvent::MatchOver {
                    winner: Some(alive[0]),
                });
            }
            _ => {
                self.turn.turn_count += 1;
                let count = self.players.len();
                let mut next = (self.turn.current_player + 1) % count;
                while !self.players[next].alive {
                    next = (next + 1) % count;
                }
                self.turn.current_player = next;
                self.events.push(GameEvent::TurnAdvanced {
                    next_player: next,
                    turn: self.turn.turn_count,
                });

                // The void rises at each new round.
                let round = self.turn.round(count);
                if round > self.last_round {
                    self.terrain
                        .raise_void(VOID_RISE_PER_ROUND * (round - self.last_round) as f64);
                    self.last_round = round;
                }

                self.turn.ending_turn = false;
                self.start_lottery();
            }
        }
    }

    /// (Re)create the lottery sub-state for the active player's turn.
    fn start_lottery(&mut self) {
        self.turn.phase = TurnPhase::Lottery;
        self.turn.settle_secs = 0.0;
        self.turn.resolution_clock_secs = 0.0;

        let pity_input = self.turn.pity_counter;
        let round = self.turn.round(self.players.len());
        let result = draw(&self.lottery_config, pity_input, round, &mut self.rng);
        self.turn.pity_counter = result.pity_after;

        for (slot, card) in result.cards.iter().enumerate() {
            self.events.push(GameEvent::CardRevealed {
                slot,
                weapon: card.weapon,
                forced_by_pity: result.pity_upgraded_slot == Some(slot),
            });
        }

        let is_ai = self.players[self.turn.current_player].controller == Controller::Ai;
        self.turn.lottery = Some(LotteryState {
            cards: result.cards,
            highlighted: 0,
            phase: if is_ai {
                LotteryPhase::Selecting
            } else {
                LotteryPhase::Revealing
            },
            reveal_remaining_secs: LOTTERY_REVEAL_SECS,
            pity_input,
        });

        if is_ai {
            // Instant best-pick, no animation delay: AIMING is entered
            // within the same tick the lottery was generated.
            let cards = self
                .turn
                .lottery
                .as_ref()
                .map(|l| l.cards.clone())
                .unwrap_or_default();
            self.assign_weapon(ai_select(&cards));
        }
    }

    /// Validate a card pick and move to AIMING. A bad index re-prompts the
    /// lottery rather than corrupting state.
    fn assign_weapon(&mut self, index: usize) {
        let Some(lottery) = &self.turn.lottery else {
            return;
        };
        let Some(card) = lottery.cards.get(index) else {
            self.events.push(GameEvent::Diagnostic {
                code: DiagnosticCode::InvalidSelection,
                detail: format!("card index {index} out of range"),
            });
            return;
        };
        self.players[self.turn.current_player].weapon = Some(card.weapon);
        self.turn.lottery = None;
        self.turn.phase = TurnPhase::Aiming;
    }

    /// Spend one reroll and redraw with the same pity/round parameters.
    /// Zero budget is a no-op, not an error.
    fn reroll_lottery(&mut self) {
        let player = &mut self.players[self.turn.current_player];
        if player.rerolls_remaining == 0 {
            return;
        }
        player.rerolls_remaining -= 1;

        let Some(lottery) = &self.turn.lottery else {
            return;
        };
        let pity_input = lottery.pity_input;
        let round = self.turn.round(self.players.len());
        let result = draw(&self.lottery_config, pity_input, round, &mut self.rng);
        self.turn.pity_counter = result.pity_after;

        for (slot, card) in result.cards.iter().enumerate() {
            self.events.push(GameEvent::CardRevealed {
                slot,
                weapon: card.weapon,
                forced_by_pity: result.pity_upgraded_slot == Some(slot),
            });
        }
        self.turn.lottery = Some(LotteryState {
            cards: result.cards,
            highlighted: 0,
            phase: LotteryPhase::Selecting,
            reveal_remaining_secs: 0.0,
            pity_input,
        });
    }

    fn ai_take_aim(&mut self) {
        let own = self.players[self.turn.current_player].position;
        let target = self
            .players
            .iter()
            .enumerate()
            .filter(|(i, p)| *i != self.turn.current_player && p.alive)
            .min_by(|(_, a), (_, b)| {
                a.position.range_to(&own).total_cmp(&b.position.range_to(&own))
            })
            .map(|(_, p)| p.position);
        let Some(target) = target else {
            return;
        };
        let weapon = self.players[self.turn.current_player]
            .weapon
            .unwrap_or(WeaponId::Mortar);
        let (mut angle, charge) = ai_aim(&own, &target, weapon.spec().muzzle_speed);
        // Small deterministic scatter so AI duels don't loop forever on
        // mirrored misses.
        angle += self.rng.gen_range(-0.06..0.06);
        self.turn.aim_angle = angle;
        self.turn.charge = charge;
    }

    /// AIMING → FIRING: spawn the primary projectile with the selected
    /// weapon's parameters.
    fn fire_weapon(&mut self) {
        let index = self.turn.current_player;
        let Some(weapon) = self.players[index].weapon else {
            return;
        };
        // Defensive: should not occur in normal play.
        if !self.players[index].alive {
            self.drop_for_eliminated_owner(index);
            return;
        }

        let spec = weapon.spec();
        let speed = spec.muzzle_speed * self.turn.charge;
        let origin = self.players[index].position;
        let position = Position::new(origin.x, origin.y + 6.0);
        let velocity = Velocity::new(
            speed * self.turn.aim_angle.cos(),
            speed * self.turn.aim_angle.sin(),
        );
        let behavior = self.initial_behavior_state(weapon, index);

        let entity = self.spawn_projectile(
            weapon.primary_kind(),
            weapon,
            index,
            position,
            velocity,
            behavior,
            None,
        );
        self.players[index].weapon = None;
        self.primary_in_flight = Some(entity);
        self.turn.begin_firing();
    }

    fn initial_behavior_state(&self, weapon: WeaponId, owner: usize) -> BehaviorState {
        match weapon.spec().behavior {
            Behavior::Drill { depth } => BehaviorState::Drill {
                depth_remaining: depth,
                tunneling: false,
            },
            Behavior::Homing => {
                let own = self.players[owner].position;
                let target = self
                    .players
                    .iter()
                    .enumerate()
                    .filter(|(i, p)| *i != owner && p.alive)
                    .min_by(|(_, a), (_, b)| {
                        a.position.range_to(&own).total_cmp(&b.position.range_to(&own))
                    })
                    .map(|(i, _)| i)
                    .unwrap_or(owner);
                BehaviorState::Seeker { target }
            }
            Behavior::Roll { .. } => BehaviorState::Roller { grounded: false },
            Behavior::Anomaly => BehaviorState::Anomaly {
                jink_in_secs: ANOMALY_JINK_INTERVAL,
            },
            _ => BehaviorState::Inert,
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn spawn_projectile(
        &mut self,
        kind: ProjectileKind,
        weapon: WeaponId,
        owner: usize,
        position: Position,
        velocity: Velocity,
        behavior: BehaviorState,
        strafe_run: Option<u32>,
    ) -> Entity {
        let bounces_left = match weapon.spec().behavior {
            Behavior::Bounce { max_bounces } if kind == ProjectileKind::Bouncer => max_bounces,
            Behavior::Roll { max_bounces } if kind == ProjectileKind::Roller => max_bounces,
            _ => 0,
        };
        let lifetime_ceiling_secs = lifetime_ceiling(kind);

        self.events.push(GameEvent::ProjectileSpawned {
            kind,
            owner,
            x: position.x,
            y: position.y,
        });
        self.world.spawn((
            Projectile {
                kind,
                weapon,
                owner,
                bounces_left,
                age_secs: 0.0,
                lifetime_ceiling_secs,
                behavior,
                strafe_run,
            },
            position,
            velocity,
        ))
    }

    /// Flush the same-tick spawn queue into the world. This runs before the
    /// quiescence oracle is consulted, so a turn can never look quiet while
    /// children are pending creation.
    fn flush_pending_spawns(&mut self) {
        let requests = std::mem::take(&mut self.pending_spawns);
        for request in requests {
            match request {
                SpawnRequest::Projectile {
                    kind,
                    weapon,
                    owner,
                    position,
                    velocity,
                    behavior,
                    strafe_run,
                } => {
                    if !self.players.get(owner).is_some_and(|p| p.alive) {
                        self.drop_for_eliminated_owner(owner);
                        continue;
                    }
                    self.spawn_projectile(
                        kind, weapon, owner, position, velocity, behavior, strafe_run,
                    );
                }
                SpawnRequest::Effect {
                    kind,
                    weapon,
                    owner,
                    position,
                } => {
                    if !self.players.get(owner).is_some_and(|p| p.alive) {
                        self.drop_for_eliminated_owner(owner);
                        continue;
                    }
                    let (phase, duration) = match kind {
                        EffectKind::Nuke => (EffectPhase::Landed, NUKE_FUSE_SECS),
                        EffectKind::OrbitalBeacon => (EffectPhase::Landed, 0.2),
                        EffectKind::StrafingRun => (EffectPhase::Incoming, STRAFE_INCOMING_SECS),
                    };
                    let id = self.next_effect_id;
                    self.next_effect_id += 1;
                    self.world.spawn((DelayedEffect {
                        id,
                        kind,
                        weapon,
                        phase,
                        phase_remaining_secs: duration,
                        position,
                        owner,
                        bullets_spawned: 0,
                    },));
                }
            }
        }
    }

    fn drop_for_eliminated_owner(&mut self, owner: usize) {
        log::debug!("dropping spawn request for eliminated player {owner}");
        self.events.push(GameEvent::Diagnostic {
            code: DiagnosticCode::SpawnForEliminatedOwner,
            detail: format!("spawn request for eliminated player {owner} dropped"),
        });
    }

    /// Safety-ceiling cleanup: despawn every projectile and delayed effect
    /// and drop any queued spawns.
    fn force_clear_registries(&mut self) {
        log::warn!(
            "resolution safety ceiling hit after {:.1}s; force-clearing registries",
            self.turn.resolution_clock_secs
        );
        self.events.push(GameEvent::Diagnostic {
            code: DiagnosticCode::SafetyCeilingForcedAdvance,
            detail: format!(
                "quiescence not reached within {RESOLUTION_SAFETY_CEILING}s; turn force-advanced"
            ),
        });

        self.despawn_buffer.clear();
        for (entity, (projectile, position)) in
            self.world.query_mut::<(&Projectile, &Position)>()
        {
            // Fizzle marker, no damage or carving.
            self.events.push(GameEvent::ExplosionAt {
                x: position.x,
                y: position.y,
                radius: 0.0,
                kind: projectile.kind,
                reason: TerminationReason::ForcedTimeout,
            });
            self.despawn_buffer.push(entity);
        }
        for (entity, _) in self.world.query_mut::<&DelayedEffect>() {
            self.despawn_buffer.push(entity);
        }
        for entity in self.despawn_buffer.drain(..) {
            let _ = self.world.despawn(entity);
        }
        self.pending_spawns.clear();
        self.primary_in_flight = None;
    }
}

/// Hard per-kind lifetime ceiling (seconds).
fn lifetime_ceiling(kind: ProjectileKind) -> f64 {
    match kind {
        ProjectileKind::StrafeBullet => STRAFE_BULLET_LIFETIME,
        ProjectileKind::Bouncer | ProjectileKind::Roller | ProjectileKind::HomingSeeker => {
            LONG_LIFETIME
        }
        _ => SHOT_LIFETIME,
    }
}

// --- Test support -----------------------------------------------------------

#[cfg(test)]
impl MatchEngine {
    pub(crate) fn turn(&self) -> &TurnState {
        &self.turn
    }

    pub(crate) fn players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }

    pub(crate) fn is_quiet(&self) -> bool {
        systems::quiescence::is_world_quiet(&self.world, &self.pending_spawns)
    }

    pub(crate) fn projectile_count(&self) -> usize {
        self.world.query::<&Projectile>().iter().count()
    }

    pub(crate) fn effect_count(&self) -> usize {
        self.world.query::<&DelayedEffect>().iter().count()
    }

    /// Spawn a projectile directly, bypassing the aiming phase.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn spawn_test_projectile(
        &mut self,
        kind: ProjectileKind,
        weapon: WeaponId,
        owner: usize,
        position: Position,
        velocity: Velocity,
        bounces_left: u32,
        lifetime_ceiling_secs: f64,
        behavior: BehaviorState,
    ) -> Entity {
        self.world.spawn((
            Projectile {
                kind,
                weapon,
                owner,
                bounces_left,
                age_secs: 0.0,
                lifetime_ceiling_secs,
                behavior,
                strafe_run: None,
            },
            position,
            velocity,
        ))
    }

    /// Spawn a delayed effect directly, as if its parent just landed.
    pub(crate) fn spawn_test_effect(
        &mut self,
        kind: EffectKind,
        weapon: WeaponId,
        owner: usize,
        position: Position,
    ) -> Entity {
        let (phase, duration) = match kind {
            EffectKind::Nuke => (EffectPhase::Landed, NUKE_FUSE_SECS),
            EffectKind::OrbitalBeacon => (EffectPhase::Landed, 0.2),
            EffectKind::StrafingRun => (EffectPhase::Incoming, STRAFE_INCOMING_SECS),
        };
        let id = self.next_effect_id;
        self.next_effect_id += 1;
        self.world.spawn((DelayedEffect {
            id,
            kind,
            weapon,
            phase,
            phase_remaining_secs: duration,
            position,
            owner,
            bullets_spawned: 0,
        },))
    }

    /// Put the machine straight into RESOLVING, as if a primary already
    /// terminated.
    pub(crate) fn force_resolving(&mut self) {
        self.started = true;
        self.turn.phase = TurnPhase::Resolving;
        self.turn.settle_secs = 0.0;
        self.turn.resolution_clock_secs = 0.0;
        self.turn.ending_turn = false;
    }

    /// Direct access to the guarded advance, for re-entrancy tests.
    pub(crate) fn try_end_turn(&mut self, forced: bool) {
        self.end_turn(forced);
    }

    pub(crate) fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

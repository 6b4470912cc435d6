//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! holds the latest control input, runs all systems, and produces
//! `GameStateSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use outbreak_core::camera::Camera;
use outbreak_core::commands::{ControlInput, PlayerCommand};
use outbreak_core::constants::MAX_FRAME_DT;
use outbreak_core::enums::GamePhase;
use outbreak_core::events::SimEvent;
use outbreak_core::state::{GameStateSnapshot, RunStats};
use outbreak_core::types::{Position, SimTime};

use crate::clock::{Clock, FixedStepClock};
use crate::systems;
use crate::systems::wave_spawner::DirectorState;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Wave a fresh run begins on.
    pub starting_wave: u32,
    /// When false, no unit is spawned by the director (waves still advance).
    pub director_enabled: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            starting_wave: 1,
            director_enabled: true,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    config: SimConfig,
    rng: ChaCha8Rng,
    clock: Box<dyn Clock>,
    /// Last clock sample; deltas are measured from here.
    clock_base: f64,
    command_queue: VecDeque<PlayerCommand>,
    input: ControlInput,
    camera: Camera,
    director: DirectorState,
    stats: RunStats,
    last_hazard_damage_secs: Option<f64>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine driven by a fixed-step clock.
    pub fn new(config: SimConfig) -> Self {
        Self::with_clock(config, Box::new(FixedStepClock::default()))
    }

    /// Create a new simulation engine driven by `clock`.
    pub fn with_clock(config: SimConfig, clock: Box<dyn Clock>) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            clock,
            clock_base: 0.0,
            command_queue: VecDeque::new(),
            input: ControlInput::default(),
            camera: Camera::default(),
            director: DirectorState::default(),
            stats: RunStats::default(),
            last_hazard_damage_secs: None,
            despawn_buffer: Vec::new(),
            events: Vec::new(),
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

    /// Replace the held control input. Read by every running tick until replaced.
    pub fn apply_input(&mut self, input: ControlInput) {
        self.input = input;
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Running {
            self.advance_clock();
            self.run_systems();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.camera,
            &self.stats,
            events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Stats of the current (or just-ended) run.
    pub fn stats(&self) -> RunStats {
        self.stats
    }

    pub fn camera(&self) -> Camera {
        self.camera
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Player position, if a run has been started.
    pub fn player_position(&self) -> Option<Position> {
        let player = world_setup::find_player(&self.world)?;
        self.world.get::<&Position>(player).ok().map(|pos| *pos)
    }

    /// Get a mutable reference to the ECS world (for test setup).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Spawn a unit at an exact position, scaled for the current wave.
    #[cfg(test)]
    pub fn spawn_test_zombie(
        &mut self,
        variant: outbreak_core::enums::ZombieVariant,
        position: Position,
    ) -> hecs::Entity {
        world_setup::spawn_zombie(&mut self.world, variant, position, self.stats.wave)
    }

    /// Run one extra director pass at the current time.
    #[cfg(test)]
    pub fn run_director(&mut self) {
        let player_pos = self.player_position().unwrap_or_default();
        systems::wave_spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.director,
            &self.camera,
            player_pos,
            &mut self.stats,
            self.time.elapsed_secs,
            &mut self.events,
        );
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command. Commands invalid for the current
    /// phase are ignored.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartRun => {
                if self.phase == GamePhase::NotStarted {
                    self.start_run();
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Running {
                    self.phase = GamePhase::Paused;
                    log::debug!("paused at t={:.2}", self.time.elapsed_secs);
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.clock_base = self.clock.sample();
                    self.phase = GamePhase::Running;
                    log::debug!("resumed at t={:.2}", self.time.elapsed_secs);
                }
            }
            PlayerCommand::ReturnToMenu => {
                if matches!(self.phase, GamePhase::Paused | GamePhase::Ended) {
                    self.world.clear();
                    self.stats = RunStats::default();
                    self.camera = Camera::default();
                    self.time = SimTime::default();
                    self.phase = GamePhase::NotStarted;
                }
            }
        }
    }

    /// Reset the world and begin a fresh run.
    fn start_run(&mut self) {
        let player = world_setup::setup_run(&mut self.world);
        let focus = self
            .world
            .get::<&Position>(player)
            .map(|pos| *pos)
            .unwrap_or_default();

        self.camera = Camera::centered_on(focus);
        self.time = SimTime::default();
        self.stats = RunStats {
            wave: self.config.starting_wave.max(1),
            ..RunStats::default()
        };
        self.director = DirectorState::new(self.time.elapsed_secs);
        self.last_hazard_damage_secs = None;
        self.clock_base = self.clock.sample();
        self.phase = GamePhase::Running;

        log::info!(
            "run started: seed={} wave={}",
            self.config.seed,
            self.stats.wave
        );
        self.events.push(SimEvent::RunStarted {
            seed: self.config.seed,
        });
    }

    /// Player died: freeze stats and report once.
    fn end_run(&mut self) {
        self.stats.survival_secs = self.time.elapsed_secs;
        self.phase = GamePhase::Ended;
        log::info!(
            "game over: wave={} kills={} score={} survived={:.1}s",
            self.stats.wave,
            self.stats.kills,
            self.stats.score,
            self.stats.survival_secs
        );
        self.events.push(SimEvent::GameOver { stats: self.stats });
    }

    /// Sample the clock once and advance sim time by the clamped delta.
    fn advance_clock(&mut self) {
        let sample = self.clock.sample();
        let delta = (sample - self.clock_base).clamp(0.0, MAX_FRAME_DT);
        self.clock_base = sample;
        self.time.advance(delta);
    }

    /// Run all systems in order. Every step reads the same `now`.
    fn run_systems(&mut self) {
        let now = self.time.elapsed_secs;

        // 1. Player movement (control vector, clamped to world)
        systems::movement::move_player(&mut self.world, &self.input);
        let Some(player_pos) = self.player_position() else {
            return;
        };
        // 2. Camera follows the moved player
        self.camera.follow(player_pos);
        // 3. Fire control (reload progress, reload request, fire intent)
        systems::fire_control::run(
            &mut self.world,
            &self.input,
            &self.camera,
            now,
            &mut self.stats,
            &mut self.events,
        );
        // 4. Director (wave advance, horde, boss, ambient spawn)
        if self.config.director_enabled {
            systems::wave_spawner::run(
                &mut self.world,
                &mut self.rng,
                &mut self.director,
                &self.camera,
                player_pos,
                &mut self.stats,
                now,
                &mut self.events,
            );
        } else {
            systems::wave_spawner::advance_wave(&mut self.stats, &mut self.events);
        }
        // 5. Acid damage (shared cooldown)
        systems::hazards::run(&mut self.world, now, &mut self.last_hazard_damage_secs);
        // 6. Combat (pursuit, projectiles, hits, deaths, contact damage)
        systems::combat::run(
            &mut self.world,
            &mut self.rng,
            &mut self.stats,
            now,
            &mut self.despawn_buffer,
            &mut self.events,
        );
        if systems::combat::player_defeated(&self.world) {
            self.end_run();
            return;
        }
        // 7. Ammo pickups
        systems::loot::collect(&mut self.world, &mut self.despawn_buffer, &mut self.events);
        // 8. Particles, then expiry of hazards and particles
        systems::particles::run(&mut self.world);
        systems::cleanup::run(&mut self.world, now, &mut self.despawn_buffer);

        self.stats.survival_secs = now;
    }
}

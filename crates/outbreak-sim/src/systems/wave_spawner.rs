//! Spawn & wave director: ambient spawning, wave progression, bosses and hordes.

use std::collections::BTreeSet;
use std::f64::consts::TAU;

use glam::DVec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use outbreak_core::camera::{in_world, Camera};
use outbreak_core::constants::*;
use outbreak_core::enums::{SpawnEdge, ZombieVariant};
use outbreak_core::events::SimEvent;
use outbreak_core::profiles::get_profile;
use outbreak_core::state::RunStats;
use outbreak_core::types::Position;

use crate::world_setup::spawn_zombie;

/// Director bookkeeping for the current run.
#[derive(Debug, Clone, Default)]
pub struct DirectorState {
    /// Time of the last ambient spawn.
    pub last_spawn_secs: f64,
    /// Time of the last horde (run start counts as one).
    pub last_horde_secs: f64,
    /// Boss-eligible waves whose boss has already been spawned.
    pub boss_waves: BTreeSet<u32>,
}

impl DirectorState {
    pub fn new(now: f64) -> Self {
        Self {
            last_spawn_secs: now,
            last_horde_secs: now,
            boss_waves: BTreeSet::new(),
        }
    }
}

/// Ambient spawn interval for `wave`, floored.
pub fn spawn_interval(wave: u32) -> f64 {
    (SPAWN_INTERVAL_BASE_SECS - SPAWN_INTERVAL_STEP_SECS * wave as f64)
        .max(SPAWN_INTERVAL_FLOOR_SECS)
}

/// Kill count that must be exceeded to leave `wave`.
pub fn kills_to_advance(wave: u32) -> u32 {
    WAVE_KILLS_QUADRATIC * wave * wave + WAVE_KILLS_LINEAR * wave
}

/// Tiered variant draw. Checks run in a fixed order against the same `roll`
/// and a later match overwrites an earlier one.
pub fn select_variant(wave: u32, roll: f64) -> ZombieVariant {
    let mut variant = ZombieVariant::Ordinary;

    let fast_chance = (FAST_BASE_CHANCE + FAST_CHANCE_PER_WAVE * wave as f64).min(FAST_MAX_CHANCE);
    if wave >= FAST_MIN_WAVE && roll < fast_chance {
        variant = ZombieVariant::Fast;
    }
    if wave >= VOLATILE_MIN_WAVE && roll > VOLATILE_DRAW_ABOVE {
        variant = ZombieVariant::Volatile;
    }
    if wave >= CORROSIVE_MIN_WAVE && roll > CORROSIVE_DRAW_ABOVE {
        variant = ZombieVariant::Corrosive;
    }
    let heavy_chance = (HEAVY_CHANCE_PER_WAVE * wave as f64).min(HEAVY_MAX_CHANCE);
    if wave >= HEAVY_MIN_WAVE && roll < heavy_chance {
        variant = ZombieVariant::Heavy;
    }

    variant
}

/// Whether `wave` is owed a boss that has not yet appeared.
pub fn boss_due(director: &DirectorState, wave: u32) -> bool {
    wave > 0 && wave % BOSS_WAVE_PERIOD == 0 && !director.boss_waves.contains(&wave)
}

/// Point `SPAWN_EDGE_PADDING` outside the given viewport edge.
pub fn edge_spawn_point(camera: &Camera, edge: SpawnEdge, along: f64) -> Position {
    let along = along.clamp(0.0, 1.0);
    match edge {
        SpawnEdge::Top => Position::new(
            camera.x + camera.width * along,
            camera.y - SPAWN_EDGE_PADDING,
        ),
        SpawnEdge::Right => Position::new(
            camera.x + camera.width + SPAWN_EDGE_PADDING,
            camera.y + camera.height * along,
        ),
        SpawnEdge::Bottom => Position::new(
            camera.x + camera.width * along,
            camera.y + camera.height + SPAWN_EDGE_PADDING,
        ),
        SpawnEdge::Left => Position::new(
            camera.x - SPAWN_EDGE_PADDING,
            camera.y + camera.height * along,
        ),
    }
}

/// Advance the wave once kills exceed the current wave's threshold.
pub fn advance_wave(stats: &mut RunStats, events: &mut Vec<SimEvent>) {
    if stats.kills > kills_to_advance(stats.wave) {
        stats.wave += 1;
        log::info!("wave {} reached at {} kills", stats.wave, stats.kills);
        events.push(SimEvent::WaveChanged { wave: stats.wave });
    }
}

/// Run the director for one tick.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    director: &mut DirectorState,
    camera: &Camera,
    player_pos: Position,
    stats: &mut RunStats,
    now: f64,
    events: &mut Vec<SimEvent>,
) {
    advance_wave(stats, events);
    let wave = stats.wave;

    maybe_trigger_horde(world, rng, director, player_pos, wave, now, events);

    if boss_due(director, wave) {
        spawn_boss(world, rng, director, player_pos, wave, events);
        return;
    }

    if now - director.last_spawn_secs >= spawn_interval(wave) {
        let edge = SpawnEdge::ALL[rng.gen_range(0..SpawnEdge::ALL.len())];
        let along: f64 = rng.gen();
        let variant = select_variant(wave, rng.gen());
        let position = edge_spawn_point(camera, edge, along);
        spawn_zombie(world, variant, position, wave);
        director.last_spawn_secs = now;
        log::debug!("ambient spawn: {variant:?} on {edge:?} edge");
    }
}

/// Spawn the boss for `wave` and mark the wave as handled.
pub fn spawn_boss(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    director: &mut DirectorState,
    player_pos: Position,
    wave: u32,
    events: &mut Vec<SimEvent>,
) {
    if !director.boss_waves.insert(wave) {
        return;
    }
    let angle: f64 = rng.gen_range(0.0..TAU);
    let position = Position::from(player_pos.as_vec() + DVec2::from_angle(angle) * BOSS_SPAWN_DISTANCE);
    spawn_zombie(world, ZombieVariant::Boss, position, wave);
    log::info!("boss spawned for wave {wave}");
    events.push(SimEvent::BossSpawned { wave });
}

/// Roll for a horde and, on success, ring the player with units.
fn maybe_trigger_horde(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    director: &mut DirectorState,
    player_pos: Position,
    wave: u32,
    now: f64,
    events: &mut Vec<SimEvent>,
) {
    if wave < HORDE_MIN_WAVE || now - director.last_horde_secs < HORDE_COOLDOWN_SECS {
        return;
    }
    if !rng.gen_bool(HORDE_CHANCE_PER_TICK) {
        return;
    }

    let spawned = spawn_horde_ring(world, rng, player_pos, wave);
    director.last_horde_secs = now;
    log::info!("horde triggered on wave {wave}: {spawned} units");
    events.push(SimEvent::HordeTriggered { wave });
}

/// Place 15–24 units evenly on a ring around the player, skipping ring
/// positions outside the world. Returns how many were placed.
pub fn spawn_horde_ring(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    player_pos: Position,
    wave: u32,
) -> u32 {
    let count = rng.gen_range(HORDE_MIN_SIZE..=HORDE_MAX_SIZE);
    let mut spawned = 0;
    for i in 0..count {
        let angle = TAU * i as f64 / count as f64;
        let position =
            Position::from(player_pos.as_vec() + DVec2::from_angle(angle) * HORDE_RING_RADIUS);
        let variant = select_variant(wave, rng.gen());
        if !in_world(&position, get_profile(variant).radius) {
            continue;
        }
        spawn_zombie(world, variant, position, wave);
        spawned += 1;
    }
    spawned
}

//! Simulation constants and tuning parameters.
//!
//! Distances are world units, speeds are world units per tick,
//! durations are seconds of simulation time.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Largest clock delta a single tick may consume (seconds).
/// Keeps a stalled host from fast-forwarding every timer at once.
pub const MAX_FRAME_DT: f64 = 0.25;

// --- World bounds ---

/// Arena width.
pub const WORLD_WIDTH: f64 = 3000.0;

/// Arena height.
pub const WORLD_HEIGHT: f64 = 3000.0;

// --- Camera ---

/// Visible window width.
pub const VIEWPORT_WIDTH: f64 = 1280.0;

/// Visible window height.
pub const VIEWPORT_HEIGHT: f64 = 720.0;

/// Extra margin around the viewport when culling renderables.
pub const CULL_MARGIN: f64 = 64.0;

// --- Player ---

pub const PLAYER_RADIUS: f64 = 15.0;

/// Movement per tick at full input deflection.
pub const PLAYER_SPEED: f64 = 4.0;

pub const PLAYER_MAX_HP: f64 = 100.0;

pub const PLAYER_COLOR: u32 = 0x4169e1;

// --- Weapon ---

/// Rounds a full clip holds.
pub const CLIP_CAPACITY: u32 = 30;

/// Reserve rounds at the start of a run.
pub const STARTING_RESERVE: u32 = 90;

/// Time for a reload to go from 0 to 1 progress.
pub const RELOAD_DURATION_SECS: f64 = 1.5;

/// Minimum time between two successful shots.
pub const FIRE_INTERVAL_SECS: f64 = 0.1;

// --- Projectiles ---

pub const PROJECTILE_SPEED: f64 = 15.0;

pub const PROJECTILE_RADIUS: f64 = 3.0;

pub const PROJECTILE_DAMAGE: f64 = 25.0;

pub const PROJECTILE_COLOR: u32 = 0xffd700;

// --- Spawn & wave director ---

/// HP/contact-damage multiplier gained per wave (`1 + WAVE_SCALING * wave`).
pub const WAVE_SCALING: f64 = 0.1;

/// Ambient spawn interval at wave 0.
pub const SPAWN_INTERVAL_BASE_SECS: f64 = 2.0;

/// Ambient spawn interval reduction per wave.
pub const SPAWN_INTERVAL_STEP_SECS: f64 = 0.15;

/// Ambient spawn interval never drops below this.
pub const SPAWN_INTERVAL_FLOOR_SECS: f64 = 0.35;

/// Distance outside the viewport edge where ambient units appear.
pub const SPAWN_EDGE_PADDING: f64 = 50.0;

/// Waves divisible by this get exactly one boss.
pub const BOSS_WAVE_PERIOD: u32 = 10;

/// Boss spawn distance from the player.
pub const BOSS_SPAWN_DISTANCE: f64 = 400.0;

/// First wave on which hordes may trigger.
pub const HORDE_MIN_WAVE: u32 = 3;

/// Minimum time between two hordes.
pub const HORDE_COOLDOWN_SECS: f64 = 30.0;

/// Chance per eligible tick that a horde fires.
pub const HORDE_CHANCE_PER_TICK: f64 = 0.002;

pub const HORDE_MIN_SIZE: u32 = 15;

pub const HORDE_MAX_SIZE: u32 = 24;

/// Ring radius around the player for horde placement.
pub const HORDE_RING_RADIUS: f64 = 350.0;

/// Wave `w` advances once kills exceed `Q * w^2 + L * w`.
pub const WAVE_KILLS_QUADRATIC: u32 = 5;
pub const WAVE_KILLS_LINEAR: u32 = 10;

// --- Variant gating (tiered draw) ---

pub const FAST_MIN_WAVE: u32 = 2;
pub const FAST_BASE_CHANCE: f64 = 0.1;
pub const FAST_CHANCE_PER_WAVE: f64 = 0.02;
pub const FAST_MAX_CHANCE: f64 = 0.3;

pub const VOLATILE_MIN_WAVE: u32 = 3;
/// Draws above this become volatile.
pub const VOLATILE_DRAW_ABOVE: f64 = 0.85;

pub const CORROSIVE_MIN_WAVE: u32 = 4;
/// Draws above this become corrosive.
pub const CORROSIVE_DRAW_ABOVE: f64 = 0.93;

pub const HEAVY_MIN_WAVE: u32 = 5;
pub const HEAVY_CHANCE_PER_WAVE: f64 = 0.01;
pub const HEAVY_MAX_CHANCE: f64 = 0.15;

// --- Zombie variant base stats ---

pub const ORDINARY_SPEED: f64 = 1.5;
pub const ORDINARY_HP: f64 = 30.0;
pub const ORDINARY_DAMAGE: f64 = 0.5;
pub const ORDINARY_RADIUS: f64 = 15.0;
pub const ORDINARY_SCORE: u64 = 10;

pub const FAST_SPEED: f64 = 3.0;
pub const FAST_HP: f64 = 15.0;
pub const FAST_DAMAGE: f64 = 0.3;
pub const FAST_RADIUS: f64 = 12.0;
pub const FAST_SCORE: u64 = 15;

pub const HEAVY_SPEED: f64 = 0.8;
pub const HEAVY_HP: f64 = 120.0;
pub const HEAVY_DAMAGE: f64 = 1.0;
pub const HEAVY_RADIUS: f64 = 25.0;
pub const HEAVY_SCORE: u64 = 30;

pub const BOSS_SPEED: f64 = 1.0;
pub const BOSS_HP: f64 = 800.0;
pub const BOSS_DAMAGE: f64 = 2.0;
pub const BOSS_RADIUS: f64 = 50.0;
pub const BOSS_SCORE: u64 = 500;

pub const VOLATILE_SPEED: f64 = 2.0;
pub const VOLATILE_HP: f64 = 25.0;
pub const VOLATILE_DAMAGE: f64 = 0.5;
pub const VOLATILE_RADIUS: f64 = 16.0;
pub const VOLATILE_SCORE: u64 = 20;

pub const CORROSIVE_SPEED: f64 = 1.2;
pub const CORROSIVE_HP: f64 = 40.0;
pub const CORROSIVE_DAMAGE: f64 = 0.5;
pub const CORROSIVE_RADIUS: f64 = 16.0;
pub const CORROSIVE_SCORE: u64 = 20;

// --- Death effects ---

/// Volatile blast radius.
pub const EXPLOSION_RADIUS: f64 = 100.0;

/// Damage dealt to the player inside the blast.
pub const EXPLOSION_PLAYER_DAMAGE: f64 = 20.0;

/// Flat damage dealt to every other unit inside the blast.
pub const EXPLOSION_UNIT_DAMAGE: f64 = 50.0;

pub const HAZARD_RADIUS: f64 = 60.0;

pub const HAZARD_DURATION_SECS: f64 = 8.0;

/// Damage per application while the player stands in acid.
pub const HAZARD_DAMAGE: f64 = 5.0;

/// Shared cooldown between two acid damage applications.
pub const HAZARD_DAMAGE_COOLDOWN_SECS: f64 = 0.5;

pub const HAZARD_COLOR: u32 = 0x32cd32;

// --- Loot ---

pub const AMMO_DROP_CHANCE: f64 = 0.15;

/// Reserve rounds granted by one pickup.
pub const AMMO_DROP_AMOUNT: u32 = 15;

pub const PICKUP_RADIUS: f64 = 12.0;

pub const PICKUP_COLOR: u32 = 0xdaa520;

// --- Particles ---

/// Life lost per tick (life starts at 1.0).
pub const PARTICLE_DECAY_PER_TICK: f64 = 0.03;

/// Hard cap on live particles.
pub const MAX_PARTICLES: usize = 600;

pub const HIT_SPARK_COUNT: usize = 3;
pub const HIT_SPARK_COLOR: u32 = 0xffff66;

pub const DEATH_BURST_COUNT: usize = 10;
pub const BOSS_BURST_COUNT: usize = 30;
pub const EXPLOSION_BURST_COUNT: usize = 25;
pub const ACID_BURST_COUNT: usize = 15;

/// Maximum initial particle speed (units per tick).
pub const PARTICLE_MAX_SPEED: f64 = 4.0;

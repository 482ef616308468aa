//! Balance defaults and tuning parameters.

// --- Wave timing ---

/// Base wave duration in seconds (wave 1).
pub const WAVE_DURATION: f64 = 30.0;

/// Per-wave duration growth factor.
pub const WAVE_GROWTH_RATE: f64 = 1.05;

/// Floor below which wave duration never drops.
pub const MIN_WAVE_DURATION: f64 = 20.0;

/// Rest period between waves (seconds of engine time).
pub const WAVE_REST_DELAY: f64 = 3.0;

// --- Spawn budget ---

/// Enemy budget for wave 1.
pub const BASE_ENEMY_COUNT: f64 = 25.0;

/// Per-wave enemy budget growth factor.
pub const ENEMY_COUNT_GROWTH: f64 = 1.3;

/// Hard cap on enemies budgeted for a single wave.
pub const MAX_ENEMY_COUNT: u32 = 300;

// --- Spawn cadence ---

/// Spawns per second on wave 1.
pub const BASE_SPAWN_RATE: f64 = 5.0;

/// Additional spawns per second gained each wave.
pub const SPAWN_RATE_GROWTH: f64 = 0.5;

/// Hard cap on spawns per second.
pub const MAX_SPAWN_RATE: f64 = 15.0;

// --- Boss waves ---

/// Every Nth wave is a boss wave.
pub const BOSS_WAVE_INTERVAL: u32 = 5;

/// Enemy budget multiplier on boss waves (applied before the max clamp).
pub const BOSS_WAVE_MULTIPLIER: f64 = 1.5;

/// Per-draw probability that a boss-wave spawn is the boss archetype,
/// bypassing the weight table.
pub const BOSS_TYPE_BIAS: f64 = 0.3;

// --- Difficulty curves ---

/// Externally visible difficulty multiplier gained per wave past the first.
pub const DIFFICULTY_STEP: f64 = 0.15;

/// Elite promotion chance gained per wave past the first.
pub const ELITE_CHANCE_STEP: f64 = 0.03;

/// Elite promotion chance cap.
pub const ELITE_CHANCE_MAX: f64 = 0.4;

/// Per-wave health growth factor.
pub const HEALTH_GROWTH: f64 = 1.2;

/// Per-wave damage growth factor.
pub const DAMAGE_GROWTH: f64 = 1.15;

/// Linear speed gain per wave past the first.
pub const SPEED_GROWTH: f64 = 0.05;

/// Linear reward gain per wave past the first.
pub const REWARD_GROWTH: f64 = 0.1;

// --- Elite multipliers ---

pub const ELITE_HEALTH_MULT: f64 = 1.5;
pub const ELITE_DAMAGE_MULT: f64 = 1.3;
pub const ELITE_SPEED_MULT: f64 = 1.2;
pub const ELITE_EXP_MULT: f64 = 1.5;
pub const ELITE_GOLD_MULT: f64 = 2.0;

// --- Wave rewards ---

/// Experience granted per wave number on completion.
pub const WAVE_EXP_REWARD: u32 = 10;

/// Gold granted per wave number on completion.
pub const WAVE_GOLD_REWARD: u32 = 5;

// --- Spawn ring ---

/// Minimum distance from the player at which enemies may spawn (units).
pub const SPAWN_SAFE_RADIUS: f32 = 100.0;

/// Number of candidate points on the spawn ring.
pub const SPAWN_RING_POINTS: usize = 16;

/// Distance past the viewport half-diagonal at which the ring sits.
pub const SPAWN_RING_MARGIN: f32 = 60.0;

//! Per-wave parameter computation.
//!
//! Pure functions of the wave number and the balance source; no
//! engine state involved, so every growth curve and clamp is directly
//! testable.

use hordefall_core::balance::{SpecialWave, WaveBalance};
use hordefall_core::constants::{DIFFICULTY_STEP, ELITE_CHANCE_MAX, ELITE_CHANCE_STEP};
use hordefall_core::enums::SpecialWaveKind;

/// Parameters derived once at wave start and read-only afterward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveParams {
    pub duration_secs: f64,
    pub total_to_spawn: u32,
    pub spawn_rate_per_sec: f64,
    pub is_boss: bool,
    pub difficulty_multiplier: f64,
    pub elite_chance: f64,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            duration_secs: 0.0,
            total_to_spawn: 0,
            spawn_rate_per_sec: 0.0,
            is_boss: false,
            difficulty_multiplier: 1.0,
            elite_chance: 0.0,
        }
    }
}

impl WaveParams {
    /// Compute the parameters for wave `n` (1-indexed; callers clamp).
    ///
    /// The boss and swarm multipliers inflate the enemy budget before
    /// the max-clamp is reapplied, so the cap holds unconditionally.
    pub fn compute(n: u32, balance: &WaveBalance, special: Option<SpecialWave>) -> Self {
        let n = n.max(1);
        let steps = (n - 1) as f64;
        let is_boss = is_boss_wave(n, balance.boss_wave_interval);

        let duration_secs = balance
            .min_wave_duration
            .max(balance.wave_duration * balance.wave_growth_rate.powf(steps));

        let mut budget = (balance.base_enemy_count * balance.enemy_count_growth.powf(steps)).floor();
        if is_boss {
            budget *= balance.boss_wave_multiplier;
        }
        if let Some(sw) = special {
            if sw.kind == SpecialWaveKind::Swarm {
                budget *= sw.multiplier;
            }
        }
        let total_to_spawn = budget.min(f64::from(balance.max_enemy_count)).floor() as u32;

        let spawn_rate_per_sec = balance
            .max_spawn_rate
            .min(balance.base_spawn_rate + steps * balance.spawn_rate_growth);

        Self {
            duration_secs,
            total_to_spawn,
            spawn_rate_per_sec,
            is_boss,
            difficulty_multiplier: 1.0 + steps * DIFFICULTY_STEP,
            elite_chance: ELITE_CHANCE_MAX.min(steps * ELITE_CHANCE_STEP),
        }
    }
}

/// Whether wave `n` is a boss wave. A zero interval disables boss waves.
pub fn is_boss_wave(n: u32, interval: u32) -> bool {
    interval != 0 && n % interval == 0
}

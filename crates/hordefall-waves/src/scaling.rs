//! Per-spawn stat scaling: wave curves, elite promotion, and special
//! wave overrides.
//!
//! Pure functions on plain data — no RNG, no engine state — so each
//! step of the pipeline is testable in isolation. Health, damage, and
//! rewards are floored to whole numbers after every multiplicative
//! step; speed stays fractional throughout.

use glam::Vec2;

use hordefall_core::balance::SpecialWave;
use hordefall_core::constants::*;
use hordefall_core::enemy::{EnemyArchetype, ScaledEnemySpec};
use hordefall_core::enums::SpecialWaveKind;

/// Working stats flowing through the scaling pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledStats {
    pub health: f64,
    pub damage: f64,
    pub speed: f64,
    pub exp_reward: f64,
    pub gold_reward: f64,
    pub is_elite: bool,
}

impl ScaledStats {
    fn floor_integers(&mut self) {
        self.health = self.health.floor();
        self.damage = self.damage.floor();
        self.exp_reward = self.exp_reward.floor();
        self.gold_reward = self.gold_reward.floor();
    }
}

/// Step 1: apply the wave-indexed growth curves to an archetype's
/// base stats. `n` is the 1-indexed wave number.
pub fn scale_for_wave(arch: &EnemyArchetype, n: u32) -> ScaledStats {
    let steps = (n.max(1) - 1) as f64;
    let mut stats = ScaledStats {
        health: arch.health * HEALTH_GROWTH.powf(steps),
        damage: arch.damage * DAMAGE_GROWTH.powf(steps),
        speed: arch.speed * (1.0 + SPEED_GROWTH * steps),
        exp_reward: arch.exp_reward * (1.0 + REWARD_GROWTH * steps),
        gold_reward: arch.gold_reward * (1.0 + REWARD_GROWTH * steps),
        is_elite: false,
    };
    stats.floor_integers();
    stats
}

/// Step 2: promote a spawn to elite. Promotion is rolled per spawn,
/// never wave-wide.
pub fn apply_elite(stats: &mut ScaledStats) {
    stats.health *= ELITE_HEALTH_MULT;
    stats.damage *= ELITE_DAMAGE_MULT;
    stats.speed *= ELITE_SPEED_MULT;
    stats.exp_reward *= ELITE_EXP_MULT;
    stats.gold_reward *= ELITE_GOLD_MULT;
    stats.is_elite = true;
    stats.floor_integers();
}

/// Step 3: apply the wave's special modifier, after elite scaling.
/// `Swarm` affects only the wave budget and is handled at wave start.
pub fn apply_special(stats: &mut ScaledStats, special: SpecialWave) {
    match special.kind {
        SpecialWaveKind::Speed => stats.speed *= special.multiplier,
        SpecialWaveKind::Health => {
            stats.health = (stats.health * special.multiplier).floor();
        }
        SpecialWaveKind::Swarm => {}
    }
}

/// Finalize the pipeline into the spec handed to the enemy sink.
/// Spawns at full health.
pub fn into_spec(stats: ScaledStats, arch: &EnemyArchetype, position: Vec2, wave: u32) -> ScaledEnemySpec {
    let health = stats.health.max(1.0) as u64;
    ScaledEnemySpec {
        archetype: arch.id.clone(),
        position,
        health,
        max_health: health,
        damage: stats.damage.max(0.0) as u64,
        speed: stats.speed,
        exp_reward: stats.exp_reward.max(0.0) as u32,
        gold_reward: stats.gold_reward.max(0.0) as u32,
        is_elite: stats.is_elite,
        wave,
    }
}

//! Balance configuration — the read-only numeric source the engine
//! derives every wave from.
//!
//! All fields and sections carry serde defaults so a partial balance
//! file (or none at all) degrades to the tuning in [`crate::constants`]
//! rather than failing an active session.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::enemy::EnemyArchetype;
use crate::enums::SpecialWaveKind;

/// Error loading a balance file.
#[derive(Debug, Error)]
pub enum BalanceError {
    #[error("failed to read balance file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse balance file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Wave pacing and budget parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveBalance {
    pub wave_duration: f64,
    pub wave_growth_rate: f64,
    pub min_wave_duration: f64,
    pub base_enemy_count: f64,
    pub enemy_count_growth: f64,
    pub max_enemy_count: u32,
    pub base_spawn_rate: f64,
    pub spawn_rate_growth: f64,
    pub max_spawn_rate: f64,
    pub boss_wave_interval: u32,
    pub boss_wave_multiplier: f64,
    pub rest_delay_secs: f64,
}

impl Default for WaveBalance {
    fn default() -> Self {
        Self {
            wave_duration: WAVE_DURATION,
            wave_growth_rate: WAVE_GROWTH_RATE,
            min_wave_duration: MIN_WAVE_DURATION,
            base_enemy_count: BASE_ENEMY_COUNT,
            enemy_count_growth: ENEMY_COUNT_GROWTH,
            max_enemy_count: MAX_ENEMY_COUNT,
            base_spawn_rate: BASE_SPAWN_RATE,
            spawn_rate_growth: SPAWN_RATE_GROWTH,
            max_spawn_rate: MAX_SPAWN_RATE,
            boss_wave_interval: BOSS_WAVE_INTERVAL,
            boss_wave_multiplier: BOSS_WAVE_MULTIPLIER,
            rest_delay_secs: WAVE_REST_DELAY,
        }
    }
}

/// A designer-authored one-off modifier for a single wave.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpecialWave {
    pub kind: SpecialWaveKind,
    pub multiplier: f64,
}

/// The complete balance source: wave pacing, enemy archetypes, and the
/// sparse special-wave table. Consulted read-only by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Balance {
    pub waves: WaveBalance,
    pub enemies: Vec<EnemyArchetype>,
    /// Sparse map: wave number → modifier.
    pub special_waves: HashMap<u32, SpecialWave>,
}

impl Default for Balance {
    fn default() -> Self {
        Self {
            waves: WaveBalance::default(),
            enemies: default_roster(),
            special_waves: HashMap::new(),
        }
    }
}

impl Balance {
    /// Parse a balance file from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, BalanceError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a balance file from disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, BalanceError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// The special-wave entry for a wave number, if any.
    pub fn special_wave(&self, wave: u32) -> Option<SpecialWave> {
        self.special_waves.get(&wave).copied()
    }
}

/// Default enemy roster used when the balance file supplies none.
fn default_roster() -> Vec<EnemyArchetype> {
    vec![
        EnemyArchetype::fallback(),
        EnemyArchetype {
            id: "stalker".into(),
            health: 14.0,
            damage: 4.0,
            speed: 95.0,
            exp_reward: 6.0,
            gold_reward: 2.0,
            spawn_weight: 0.6,
            min_wave: 3,
            is_boss: false,
        },
        EnemyArchetype {
            id: "bulwark".into(),
            health: 60.0,
            damage: 9.0,
            speed: 35.0,
            exp_reward: 12.0,
            gold_reward: 5.0,
            spawn_weight: 0.35,
            min_wave: 6,
            is_boss: false,
        },
        EnemyArchetype {
            id: "dreadmaw".into(),
            health: 250.0,
            damage: 20.0,
            speed: 45.0,
            exp_reward: 50.0,
            gold_reward: 25.0,
            spawn_weight: 0.1,
            min_wave: 5,
            is_boss: true,
        },
    ]
}

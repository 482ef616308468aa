//! Enemy archetypes and the scaled spawn specification.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Base stats for one enemy archetype, as authored in the balance file.
///
/// Archetypes unlock progressively: an archetype is only eligible for
/// the weight table once the wave number reaches `min_wave`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyArchetype {
    pub id: String,
    pub health: f64,
    pub damage: f64,
    pub speed: f64,
    #[serde(default)]
    pub exp_reward: f64,
    #[serde(default)]
    pub gold_reward: f64,
    #[serde(default = "default_spawn_weight")]
    pub spawn_weight: f64,
    /// First wave on which this archetype may spawn.
    #[serde(default = "default_min_wave")]
    pub min_wave: u32,
    /// Marks the archetype favored by the boss-wave bias draw.
    #[serde(default)]
    pub is_boss: bool,
}

fn default_spawn_weight() -> f64 {
    1.0
}

fn default_min_wave() -> u32 {
    1
}

impl EnemyArchetype {
    /// Defensive default used when the balance source supplies no
    /// archetype eligible for the current wave.
    pub fn fallback() -> Self {
        Self {
            id: "grunt".into(),
            health: 20.0,
            damage: 5.0,
            speed: 60.0,
            exp_reward: 5.0,
            gold_reward: 2.0,
            spawn_weight: 1.0,
            min_wave: 1,
            is_boss: false,
        }
    }
}

/// A fully scaled enemy specification, handed to the enemy sink at the
/// moment of spawning. The engine retains no reference afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaledEnemySpec {
    pub archetype: String,
    pub position: Vec2,
    /// Current health; equals `max_health` at spawn.
    pub health: u64,
    pub max_health: u64,
    pub damage: u64,
    /// Movement speed stays fractional through every scaling step.
    pub speed: f64,
    pub exp_reward: u32,
    pub gold_reward: u32,
    pub is_elite: bool,
    /// Wave number that produced this spawn, for carry-over attribution.
    pub wave: u32,
}

//! Wave state snapshot — the engine's visible state after each update.

use serde::{Deserialize, Serialize};

use crate::enums::WavePhase;
use crate::events::WaveEvent;

/// Snapshot of the wave scheduler, built once per update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WaveSnapshot {
    /// Current wave number; 0 means no wave has started.
    pub wave: u32,
    pub phase: WavePhase,
    pub is_boss: bool,
    pub spawned: u32,
    pub total_to_spawn: u32,
    /// Alive count reported by the enemy sink, if one is attached.
    pub alive: Option<u32>,
    /// Seconds until the wave deadline; 0 when not active.
    pub time_remaining_secs: f64,
    pub difficulty_multiplier: f64,
    pub elite_chance: f64,
    /// Events emitted since the previous snapshot.
    pub events: Vec<WaveEvent>,
}

//! Events emitted by the engine for UI and audio feedback.
//!
//! Fire-and-forget: the engine buffers events during an update and
//! drains them into the snapshot; it never waits on a consumer.

use serde::{Deserialize, Serialize};

use crate::enums::SpecialWaveKind;

/// Wave lifecycle notifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WaveEvent {
    /// A new wave has begun.
    WaveStarted {
        wave: u32,
        duration_secs: f64,
        enemy_count: u32,
        is_boss: bool,
    },
    /// A wave finished, either cleared or timed out.
    WaveCompleted {
        wave: u32,
        time_taken_secs: f64,
        enemies_spawned: u32,
    },
    /// The wave deadline passed with enemies still alive. Those
    /// enemies carry over into the next wave.
    WaveTimedOut { wave: u32, alive_remaining: u32 },
    /// The starting wave has a designer-authored modifier.
    SpecialWave {
        wave: u32,
        kind: SpecialWaveKind,
        multiplier: f64,
    },
}

//! Enumeration types used throughout the wave engine.

use serde::{Deserialize, Serialize};

/// Wave lifecycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WavePhase {
    /// No wave has started yet (wave number 0).
    #[default]
    Idle,
    /// Enemies may still be spawning or alive.
    Active,
    /// Terminal for the current wave number; the next wave is pending.
    Completed,
}

/// Designer-authored modifier kind for a special wave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecialWaveKind {
    /// Multiplies each spawn's already-scaled speed.
    Speed,
    /// Multiplies each spawn's already-scaled health.
    Health,
    /// Inflates the wave's enemy budget; per-spawn stats untouched.
    Swarm,
}

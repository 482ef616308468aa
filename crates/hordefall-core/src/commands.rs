//! Operator and debug commands sent to the engine.
//!
//! Commands are queued and processed at the next update boundary.

use serde::{Deserialize, Serialize};

/// All operator/debug actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DebugCommand {
    /// Start a wave. `wave = None` increments the current number;
    /// an explicit number is clamped to at least 1 (skip tooling).
    StartWave { wave: Option<u32> },
    /// End the active wave early, or start the next one if idle.
    ForceNextWave,
    /// Alias for [`DebugCommand::ForceNextWave`] semantics on the
    /// operator surface.
    SkipCurrentWave,
    /// Override the externally visible difficulty multiplier. Does not
    /// rescale already-spawned enemies.
    SetDifficulty { multiplier: f64 },
    /// Return to idle, wave 0, cancelling any pending wave start.
    Reset,
}

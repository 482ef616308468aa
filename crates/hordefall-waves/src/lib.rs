//! Wave scheduling and difficulty scaling engine.
//!
//! `WaveEngine` owns the wave lifecycle state machine, the spawn
//! cadence, weighted archetype selection, spawn-ring placement, and
//! the per-spawn scaling pipeline. Completely headless (no rendering,
//! audio, or ECS dependency), enabling deterministic testing: the
//! surrounding game drives it with `update(dt, hooks)` once per tick
//! and receives fully scaled enemy specifications through the hooks.

pub mod engine;
pub mod hooks;
pub mod scaling;
pub mod spawn_points;
pub mod wave;
pub mod weights;

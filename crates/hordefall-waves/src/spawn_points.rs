//! Spawn ring — the fixed set of off-screen candidate spawn positions.

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use hordefall_core::constants::{SPAWN_RING_MARGIN, SPAWN_RING_POINTS, SPAWN_SAFE_RADIUS};

/// A fixed ring of candidate spawn positions enclosing the play area.
/// Computed once from the viewport size; recomputed wholesale on resize.
#[derive(Debug, Clone)]
pub struct SpawnRing {
    points: Vec<Vec2>,
}

impl SpawnRing {
    /// Evenly spaced points on a circle just outside the viewport's
    /// half-diagonal, centered on the viewport.
    pub fn compute(viewport: Vec2) -> Self {
        let center = viewport * 0.5;
        let radius = center.length() + SPAWN_RING_MARGIN;

        let points = (0..SPAWN_RING_POINTS)
            .map(|i| {
                let angle = std::f32::consts::TAU * i as f32 / SPAWN_RING_POINTS as f32;
                center + Vec2::from_angle(angle) * radius
            })
            .collect();

        Self { points }
    }

    /// Replace the ring after a viewport resize.
    pub fn resize(&mut self, viewport: Vec2) {
        *self = Self::compute(viewport);
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Pick a uniformly random point farther than the safety radius
    /// from the player. Falls back to the full ring when every point
    /// is inside the radius (small arenas, screen-edge players).
    pub fn select(&self, rng: &mut ChaCha8Rng, player: Vec2) -> Vec2 {
        let safe: Vec<Vec2> = self
            .points
            .iter()
            .copied()
            .filter(|p| p.distance(player) > SPAWN_SAFE_RADIUS)
            .collect();

        let pool = if safe.is_empty() { &self.points } else { &safe };
        pool[rng.gen_range(0..pool.len())]
    }
}

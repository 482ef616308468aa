//! Weighted archetype selection with progressive unlocks.
//!
//! The table is rebuilt at every wave start as an explicit ordered
//! list of cumulative weights, never a live map traversal, so draw
//! behavior is deterministic for a given RNG state.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use hordefall_core::constants::BOSS_TYPE_BIAS;
use hordefall_core::enemy::EnemyArchetype;

/// Spawn-probability table for one wave.
#[derive(Debug, Clone, Default)]
pub struct WeightTable {
    /// (index into the roster, cumulative weight), in roster order.
    entries: Vec<(usize, f64)>,
    total_weight: f64,
    /// First boss archetype in the roster, for the boss-wave bias draw.
    boss_index: Option<usize>,
}

impl WeightTable {
    /// Build the table for wave `n` from archetypes with
    /// `min_wave <= n` and a positive weight.
    pub fn build(roster: &[EnemyArchetype], n: u32) -> Self {
        let mut entries = Vec::new();
        let mut total_weight = 0.0;
        let mut boss_index = None;

        for (index, arch) in roster.iter().enumerate() {
            if arch.is_boss && boss_index.is_none() {
                boss_index = Some(index);
            }
            if arch.min_wave <= n && arch.spawn_weight > 0.0 {
                total_weight += arch.spawn_weight;
                entries.push((index, total_weight));
            }
        }

        Self {
            entries,
            total_weight,
            boss_index,
        }
    }

    /// Whether no archetype is eligible this wave.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Draw one archetype index. On a boss wave the boss archetype is
    /// returned unconditionally with probability [`BOSS_TYPE_BIAS`],
    /// bypassing the weights. Returns `None` only when the table is
    /// empty (misconfigured balance; callers substitute the fallback
    /// archetype).
    pub fn select(&self, rng: &mut ChaCha8Rng, is_boss_wave: bool) -> Option<usize> {
        if is_boss_wave && rng.gen::<f64>() < BOSS_TYPE_BIAS {
            if let Some(boss) = self.boss_index {
                return Some(boss);
            }
        }

        if self.entries.is_empty() {
            return None;
        }

        let r = rng.gen_range(0.0..self.total_weight);
        for &(index, cumulative) in &self.entries {
            if r < cumulative {
                return Some(index);
            }
        }
        // Unreachable for r < total_weight; guard against fp edge.
        self.entries.last().map(|&(index, _)| index)
    }
}

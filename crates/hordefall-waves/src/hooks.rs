//! Collaborator seam between the engine and the surrounding game.
//!
//! The engine never owns enemies, the player, or the economy; it
//! reaches them through this trait, injected per update call. Query
//! methods return `Option` so a partially-initialized game (sink or
//! player locator not yet attached) degrades to an inert tick instead
//! of an error.

use glam::Vec2;

use hordefall_core::enemy::ScaledEnemySpec;

/// The surrounding game session, as seen by the wave engine.
pub trait WaveHooks {
    /// Hand a finished, fully scaled enemy to the enemy sink.
    /// Ownership transfers; the engine retains no reference.
    fn add_enemy(&mut self, spec: ScaledEnemySpec);

    /// Enemies currently alive in the sink. `None` means the sink is
    /// not attached yet; the completion check is skipped that tick.
    fn alive_count(&self) -> Option<u32>;

    /// Current player position, for spawn-point exclusion. `None`
    /// means the locator is not attached yet; spawning is skipped
    /// that tick.
    fn player_position(&self) -> Option<Vec2>;

    /// Grant experience on wave completion.
    fn add_experience(&mut self, amount: u32);

    /// Grant gold on wave completion.
    fn add_gold(&mut self, amount: u32);
}

//! Wave engine — the central state machine.
//!
//! `WaveEngine` owns the wave lifecycle (`Idle → Active → Completed →
//! next Active → …`), the spawn cadence, and all RNG draws. It is
//! single-threaded and cooperative: the surrounding game loop calls
//! `update(dt, hooks)` once per tick; nothing here blocks or spawns
//! threads. The rest period between waves is a data-driven deadline
//! guarded by a generation counter, so a reset can never be resurrected
//! by a stale pending start.

use std::collections::VecDeque;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use hordefall_core::balance::{Balance, SpecialWave};
use hordefall_core::commands::DebugCommand;
use hordefall_core::constants::{WAVE_EXP_REWARD, WAVE_GOLD_REWARD};
use hordefall_core::enemy::EnemyArchetype;
use hordefall_core::enums::WavePhase;
use hordefall_core::events::WaveEvent;
use hordefall_core::state::WaveSnapshot;

use crate::hooks::WaveHooks;
use crate::scaling;
use crate::spawn_points::SpawnRing;
use crate::wave::WaveParams;
use crate::weights::WeightTable;

/// Configuration for constructing a wave engine.
pub struct EngineConfig {
    /// RNG seed for determinism. Same seed = same session.
    pub seed: u64,
    /// Read-only balance source.
    pub balance: Balance,
    /// Viewport size, for the spawn ring.
    pub viewport: Vec2,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            balance: Balance::default(),
            viewport: Vec2::new(1280.0, 720.0),
        }
    }
}

/// A scheduled wave start, guarded against stale firing.
#[derive(Debug, Clone, Copy)]
struct PendingStart {
    /// Engine-clock deadline at which the next wave starts.
    at: f64,
    /// Generation the schedule belongs to; a reset bumps the engine
    /// generation, invalidating this record.
    generation: u64,
}

/// The wave scheduling and difficulty scaling engine.
pub struct WaveEngine {
    balance: Balance,
    rng: ChaCha8Rng,
    /// Monotonic engine clock, seconds since construction.
    now: f64,

    phase: WavePhase,
    wave: u32,
    params: WaveParams,
    special: Option<SpecialWave>,
    start_time: f64,
    end_deadline: f64,
    spawned: u32,
    spawn_accumulator: f64,

    weight_table: WeightTable,
    spawn_ring: SpawnRing,
    fallback_archetype: EnemyArchetype,
    difficulty_override: Option<f64>,

    command_queue: VecDeque<DebugCommand>,
    events: Vec<WaveEvent>,
    pending_start: Option<PendingStart>,
    generation: u64,
}

impl WaveEngine {
    /// Create an idle engine at wave 0.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            spawn_ring: SpawnRing::compute(config.viewport),
            balance: config.balance,
            now: 0.0,
            phase: WavePhase::Idle,
            wave: 0,
            params: WaveParams::default(),
            special: None,
            start_time: 0.0,
            end_deadline: 0.0,
            spawned: 0,
            spawn_accumulator: 0.0,
            weight_table: WeightTable::default(),
            fallback_archetype: EnemyArchetype::fallback(),
            difficulty_override: None,
            command_queue: VecDeque::new(),
            events: Vec::new(),
            pending_start: None,
            generation: 0,
        }
    }

    /// Queue a debug/operator command for the next update boundary.
    pub fn queue_command(&mut self, command: DebugCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance the engine by `dt` seconds and return the resulting
    /// snapshot. The only external entry point during normal play.
    pub fn update(&mut self, dt: f64, hooks: &mut dyn WaveHooks) -> WaveSnapshot {
        self.process_commands(hooks);

        let dt = dt.max(0.0);
        self.now += dt;

        if let Some(pending) = self.pending_start {
            if pending.generation == self.generation && self.now >= pending.at {
                self.pending_start = None;
                self.start_wave(None);
            }
        }

        if self.phase == WavePhase::Active {
            self.run_spawns(dt, hooks);
            self.check_completion(hooks);
            self.check_timeout(hooks);
        }

        self.build_snapshot(hooks)
    }

    /// Start a wave. `explicit = None` increments the wave number;
    /// an explicit number supports skip tooling and clamps to 1.
    pub fn start_wave(&mut self, explicit: Option<u32>) {
        self.wave = match explicit {
            Some(n) => n.max(1),
            None => self.wave + 1,
        };

        self.special = self.balance.special_wave(self.wave);
        self.params = WaveParams::compute(self.wave, &self.balance.waves, self.special);
        if let Some(multiplier) = self.difficulty_override {
            self.params.difficulty_multiplier = multiplier;
        }

        self.weight_table = WeightTable::build(&self.balance.enemies, self.wave);
        if self.weight_table.is_empty() {
            log::warn!(
                "no archetype eligible for wave {}; falling back to '{}'",
                self.wave,
                self.fallback_archetype.id
            );
        }

        self.spawned = 0;
        self.spawn_accumulator = 0.0;
        self.phase = WavePhase::Active;
        self.start_time = self.now;
        self.end_deadline = self.now + self.params.duration_secs;
        self.pending_start = None;

        log::info!(
            "wave {} started: {} enemies over {:.1}s{}",
            self.wave,
            self.params.total_to_spawn,
            self.params.duration_secs,
            if self.params.is_boss { " (boss wave)" } else { "" }
        );

        self.events.push(WaveEvent::WaveStarted {
            wave: self.wave,
            duration_secs: self.params.duration_secs,
            enemy_count: self.params.total_to_spawn,
            is_boss: self.params.is_boss,
        });
        if let Some(sw) = self.special {
            self.events.push(WaveEvent::SpecialWave {
                wave: self.wave,
                kind: sw.kind,
                multiplier: sw.multiplier,
            });
        }
    }

    /// Complete the current wave: grant rewards, notify, and schedule
    /// the next wave after the rest delay. No-op unless Active, so a
    /// second call (e.g. timeout racing a clear) changes nothing.
    pub fn complete_wave(&mut self, hooks: &mut dyn WaveHooks) {
        if self.phase != WavePhase::Active {
            return;
        }
        self.phase = WavePhase::Completed;

        let mut exp = WAVE_EXP_REWARD * self.wave;
        let mut gold = WAVE_GOLD_REWARD * self.wave;
        if self.params.is_boss {
            exp *= 2;
            gold *= 2;
        }
        hooks.add_experience(exp);
        hooks.add_gold(gold);

        self.events.push(WaveEvent::WaveCompleted {
            wave: self.wave,
            time_taken_secs: self.now - self.start_time,
            enemies_spawned: self.spawned,
        });
        log::info!("wave {} complete ({} spawned)", self.wave, self.spawned);

        self.pending_start = Some(PendingStart {
            at: self.now + self.balance.waves.rest_delay_secs,
            generation: self.generation,
        });
    }

    /// Force-complete a wave whose deadline has passed. Enemies still
    /// alive are NOT removed; they persist into the next wave,
    /// escalating difficulty. Intentional, not a cleanup bug.
    pub fn end_wave(&mut self, hooks: &mut dyn WaveHooks) {
        if self.phase != WavePhase::Active {
            return;
        }
        let alive_remaining = hooks.alive_count().unwrap_or(0);
        log::warn!(
            "wave {} timed out with {} enemies alive; they carry over",
            self.wave,
            alive_remaining
        );
        self.events.push(WaveEvent::WaveTimedOut {
            wave: self.wave,
            alive_remaining,
        });
        self.complete_wave(hooks);
    }

    /// Operator surface: end the active wave early, or start the next
    /// one if no wave is running.
    pub fn force_next_wave(&mut self, hooks: &mut dyn WaveHooks) {
        if self.phase == WavePhase::Active {
            self.end_wave(hooks);
        } else {
            self.start_wave(None);
        }
    }

    /// Override the externally visible difficulty multiplier. Applies
    /// to the current wave's reported value and to subsequent waves;
    /// already-spawned enemies are not rescaled.
    pub fn set_difficulty(&mut self, multiplier: f64) {
        self.difficulty_override = Some(multiplier);
        self.params.difficulty_multiplier = multiplier;
    }

    /// Return to idle at wave 0. Bumps the generation so any pending
    /// wave start scheduled before the reset can never fire.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.phase = WavePhase::Idle;
        self.wave = 0;
        self.params = WaveParams::default();
        self.special = None;
        self.start_time = 0.0;
        self.end_deadline = 0.0;
        self.spawned = 0;
        self.spawn_accumulator = 0.0;
        self.weight_table = WeightTable::default();
        self.difficulty_override = None;
        self.pending_start = None;
        self.events.clear();
    }

    /// Recompute the spawn ring after a viewport resize.
    pub fn resize_viewport(&mut self, viewport: Vec2) {
        self.spawn_ring.resize(viewport);
    }

    pub fn phase(&self) -> WavePhase {
        self.phase
    }

    pub fn wave(&self) -> u32 {
        self.wave
    }

    pub fn spawned(&self) -> u32 {
        self.spawned
    }

    pub fn params(&self) -> &WaveParams {
        &self.params
    }

    pub fn spawn_ring(&self) -> &SpawnRing {
        &self.spawn_ring
    }

    /// Drain and handle all queued commands.
    fn process_commands(&mut self, hooks: &mut dyn WaveHooks) {
        while let Some(command) = self.command_queue.pop_front() {
            match command {
                DebugCommand::StartWave { wave } => self.start_wave(wave),
                DebugCommand::ForceNextWave | DebugCommand::SkipCurrentWave => {
                    self.force_next_wave(hooks);
                }
                DebugCommand::SetDifficulty { multiplier } => self.set_difficulty(multiplier),
                DebugCommand::Reset => self.reset(),
            }
        }
    }

    /// Spawn cadence: accumulate elapsed time and emit one spawn per
    /// interval, catching up under large `dt` without ever exceeding
    /// the wave budget.
    fn run_spawns(&mut self, dt: f64, hooks: &mut dyn WaveHooks) {
        if self.spawned >= self.params.total_to_spawn {
            return;
        }
        if self.params.spawn_rate_per_sec <= 0.0 {
            return;
        }
        // Locator not attached: the tick is inert for spawning.
        let Some(player) = hooks.player_position() else {
            return;
        };

        self.spawn_accumulator += dt;
        let interval = 1.0 / self.params.spawn_rate_per_sec;
        while self.spawn_accumulator >= interval && self.spawned < self.params.total_to_spawn {
            self.spawn_accumulator -= interval;
            self.spawn_one(player, hooks);
        }
    }

    /// Produce one fully scaled enemy and hand it to the sink.
    fn spawn_one(&mut self, player: Vec2, hooks: &mut dyn WaveHooks) {
        let index = self.weight_table.select(&mut self.rng, self.params.is_boss);
        let arch = match index {
            Some(i) => &self.balance.enemies[i],
            None => &self.fallback_archetype,
        };

        let position = self.spawn_ring.select(&mut self.rng, player);

        let mut stats = scaling::scale_for_wave(arch, self.wave);
        if self.rng.gen::<f64>() < self.params.elite_chance {
            scaling::apply_elite(&mut stats);
        }
        if let Some(sw) = self.special {
            scaling::apply_special(&mut stats, sw);
        }

        hooks.add_enemy(scaling::into_spec(stats, arch, position, self.wave));
        self.spawned += 1;
    }

    /// Cleared-wave check: budget exhausted and the sink reports no
    /// enemies alive. Skipped while the sink is not attached.
    fn check_completion(&mut self, hooks: &mut dyn WaveHooks) {
        if self.phase != WavePhase::Active || self.spawned < self.params.total_to_spawn {
            return;
        }
        if hooks.alive_count() == Some(0) {
            self.complete_wave(hooks);
        }
    }

    /// Deadline check: time-based forced completion.
    fn check_timeout(&mut self, hooks: &mut dyn WaveHooks) {
        if self.phase == WavePhase::Active && self.now >= self.end_deadline {
            self.end_wave(hooks);
        }
    }

    fn build_snapshot(&mut self, hooks: &dyn WaveHooks) -> WaveSnapshot {
        WaveSnapshot {
            wave: self.wave,
            phase: self.phase,
            is_boss: self.params.is_boss,
            spawned: self.spawned,
            total_to_spawn: self.params.total_to_spawn,
            alive: hooks.alive_count(),
            time_remaining_secs: if self.phase == WavePhase::Active {
                (self.end_deadline - self.now).max(0.0)
            } else {
                0.0
            },
            difficulty_multiplier: self.params.difficulty_multiplier,
            elite_chance: self.params.elite_chance,
            events: std::mem::take(&mut self.events),
        }
    }
}

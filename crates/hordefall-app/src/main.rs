//! hordefall: headless demo runner for the wave engine.
//!
//! Drives the engine at a fixed timestep against a toy arena where
//! enemies expire on scripted lifetimes and the player drifts in a
//! slow circle. Prints every wave event; useful for balance tuning
//! without a frontend.
//!
//! Usage:
//!   hordefall [--balance <path>] [--seed <n>] [--duration <secs>] [--dt <secs>]

use std::process;

use glam::Vec2;

use hordefall_core::balance::Balance;
use hordefall_core::commands::DebugCommand;
use hordefall_core::enemy::ScaledEnemySpec;
use hordefall_core::events::WaveEvent;
use hordefall_waves::engine::{EngineConfig, WaveEngine};
use hordefall_waves::hooks::WaveHooks;

const VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);

/// Toy arena: enemies die after `health / DPS` seconds of notional
/// focus fire. No movement or collision; just enough lifecycle for
/// the engine's completion checks to mean something.
struct DemoArena {
    /// (spec, remaining seconds until it dies).
    enemies: Vec<(ScaledEnemySpec, f64)>,
    player: Vec2,
    elapsed: f64,
    exp: u32,
    gold: u32,
    total_spawned: u64,
    elites_seen: u64,
}

/// Notional player damage per second against a single enemy.
const DEMO_DPS: f64 = 40.0;

impl DemoArena {
    fn new() -> Self {
        Self {
            enemies: Vec::new(),
            player: VIEWPORT * 0.5,
            elapsed: 0.0,
            exp: 0,
            gold: 0,
            total_spawned: 0,
            elites_seen: 0,
        }
    }

    fn advance(&mut self, dt: f64) {
        self.elapsed += dt;
        // Drift the player so spawn-point exclusion actually varies.
        let angle = (self.elapsed * 0.2) as f32;
        self.player = VIEWPORT * 0.5 + Vec2::from_angle(angle) * 150.0;

        for (_, ttl) in &mut self.enemies {
            *ttl -= dt;
        }
        self.enemies.retain(|(_, ttl)| *ttl > 0.0);
    }
}

impl WaveHooks for DemoArena {
    fn add_enemy(&mut self, spec: ScaledEnemySpec) {
        self.total_spawned += 1;
        if spec.is_elite {
            self.elites_seen += 1;
        }
        let ttl = spec.health as f64 / DEMO_DPS;
        self.enemies.push((spec, ttl));
    }

    fn alive_count(&self) -> Option<u32> {
        Some(self.enemies.len() as u32)
    }

    fn player_position(&self) -> Option<Vec2> {
        Some(self.player)
    }

    fn add_experience(&mut self, amount: u32) {
        self.exp += amount;
    }

    fn add_gold(&mut self, amount: u32) {
        self.gold += amount;
    }
}

struct Options {
    balance: Option<String>,
    seed: u64,
    duration_secs: f64,
    dt: f64,
}

fn main() {
    env_logger::init();

    let options = match parse_args(&std::env::args().collect::<Vec<_>>()[1..]) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            print_usage();
            process::exit(1);
        }
    };

    let balance = match &options.balance {
        Some(path) => match Balance::from_json_file(path) {
            Ok(balance) => balance,
            Err(err) => {
                eprintln!("{path}: {err}");
                process::exit(1);
            }
        },
        None => Balance::default(),
    };

    let mut engine = WaveEngine::new(EngineConfig {
        seed: options.seed,
        balance,
        viewport: VIEWPORT,
    });
    let mut arena = DemoArena::new();

    engine.queue_command(DebugCommand::StartWave { wave: None });

    let steps = (options.duration_secs / options.dt).ceil() as u64;
    for _ in 0..steps {
        arena.advance(options.dt);
        let snapshot = engine.update(options.dt, &mut arena);
        for event in &snapshot.events {
            print_event(event);
        }
    }

    println!("--- session summary ---");
    println!("reached wave:   {}", engine.wave());
    println!("enemies total:  {}", arena.total_spawned);
    println!("elites total:   {}", arena.elites_seen);
    println!("still alive:    {}", arena.enemies.len());
    println!("exp earned:     {}", arena.exp);
    println!("gold earned:    {}", arena.gold);
}

fn print_event(event: &WaveEvent) {
    match event {
        WaveEvent::WaveStarted {
            wave,
            duration_secs,
            enemy_count,
            is_boss,
        } => {
            println!(
                "wave {wave} started: {enemy_count} enemies, {duration_secs:.0}s{}",
                if *is_boss { " [BOSS]" } else { "" }
            );
        }
        WaveEvent::WaveCompleted {
            wave,
            time_taken_secs,
            enemies_spawned,
        } => {
            println!("wave {wave} complete in {time_taken_secs:.1}s ({enemies_spawned} spawned)");
        }
        WaveEvent::WaveTimedOut {
            wave,
            alive_remaining,
        } => {
            println!("wave {wave} TIMED OUT, {alive_remaining} enemies carry over");
        }
        WaveEvent::SpecialWave {
            wave,
            kind,
            multiplier,
        } => {
            println!("wave {wave} is special: {kind:?} x{multiplier}");
        }
    }
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        balance: None,
        seed: 42,
        duration_secs: 300.0,
        dt: 0.1,
    };

    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        match flag.as_str() {
            "--balance" => {
                options.balance = Some(take_value(&mut iter, flag)?);
            }
            "--seed" => {
                options.seed = parse_number(&take_value(&mut iter, flag)?, flag)?;
            }
            "--duration" => {
                options.duration_secs = parse_number(&take_value(&mut iter, flag)?, flag)?;
            }
            "--dt" => {
                options.dt = parse_number(&take_value(&mut iter, flag)?, flag)?;
            }
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other => return Err(format!("Unknown flag: {other}")),
        }
    }

    if options.dt <= 0.0 {
        return Err("--dt must be positive".into());
    }
    Ok(options)
}

fn take_value(iter: &mut std::slice::Iter<'_, String>, flag: &str) -> Result<String, String> {
    iter.next()
        .cloned()
        .ok_or_else(|| format!("{flag} requires a value"))
}

fn parse_number<T: std::str::FromStr>(value: &str, flag: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("{flag}: invalid value '{value}'"))
}

fn print_usage() {
    eprintln!(
        "hordefall: headless wave-engine demo runner\n\
         \n\
         Options:\n\
           --balance <path>    Balance JSON file (default: built-in tuning)\n\
           --seed <n>          RNG seed (default: 42)\n\
           --duration <secs>   Simulated session length (default: 300)\n\
           --dt <secs>         Fixed timestep (default: 0.1)\n"
    );
}

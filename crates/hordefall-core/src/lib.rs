//! Core types and definitions for the HORDEFALL wave engine.
//!
//! This crate defines the vocabulary shared across all other crates:
//! balance configuration, enemy archetypes, debug commands, events,
//! snapshots, and constants. It has no dependency on any runtime
//! framework.

pub mod balance;
pub mod commands;
pub mod constants;
pub mod enemy;
pub mod enums;
pub mod events;
pub mod state;

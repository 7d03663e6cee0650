//! Test-only library interface for scorer.
//!
//! This crate splits into pure game logic (this library, testable on the
//! host with no embedded hardware) and the embedded binary in `main.rs`
//! (`#![no_std]`, `#![no_main]`, behind the `embedded` feature).
//!
//! Usage: `cargo test --lib`
//!
//! The library itself is `no_std`; only the test harness links std.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod display;
pub mod game;

pub use display::segments::Digit;
pub use game::{CycleOutput, GameState, PlayerFrame, PlayerId};

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════

//! Application-wide constants and compile-time configuration.
//!
//! All timing parameters, game rules, and display polarity live here so
//! they can be tuned in one place. Pin assignments are selected in
//! `main.rs`; the logical wiring plan is documented below.

// Game rules

/// Score to play up to.
pub const TARGET_SCORE: u8 = 21;

/// A player must lead by at least this many points to win.
pub const WIN_MARGIN: u8 = 2;

// Button timing

/// Hold a button this long (ms) to request a full board reset.
pub const BUTTON_HOLD_MS: u64 = 3000;

/// Settle window (ms) after a press edge. Samples inside the window are
/// treated as still-pressed, which doubles as a crude debounce without
/// stalling the control loop.
pub const BUTTON_SETTLE_MS: u64 = 200;

// Display timing

/// Blank/shown interval (ms) for the winning score blink.
pub const SCORE_BLINK_MS: u64 = 500;

/// Control-loop tick period (ms). Well below every timing threshold, so
/// edge classification jitter stays within one tick.
pub const LOOP_TICK_MS: u64 = 5;

// 7-segment hardware

/// Segments per digit position (A through G).
pub const SEGMENT_COUNT: usize = 7;

/// Common-anode displays sink current through the MCU pin, so a segment
/// is lit by driving its line low. Set to `false` for common-cathode.
pub const SEGMENT_ACTIVE_LOW: bool = true;

/// Buttons are wired active-high with an external/internal pull-down,
/// pressed = line high.
pub const BUTTON_ACTIVE_HIGH: bool = true;

// GPIO wiring plan (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` pins are
// selected in `main.rs`. Adjust for your custom PCB.
//
//   Player 1 tens, segments A-G  → P0.02-P0.08  (7 lines)
//   Player 1 ones, segments A-G  → P0.11-P0.17  (7 lines)
//   Player 2 tens, segments A-G  → P0.19-P0.25  (7 lines)
//   Player 2 ones, segments A-G  → P1.08-P1.14  (7 lines)
//   Player 1 button              → P1.01
//   Player 2 button              → P1.02
//   Reset line (to nRF RESET)    → P1.03

//! Button event classification.
//!
//! One [`ButtonTracker`] per player, fed one fresh input sample plus the
//! monotonic clock each control-loop cycle. Edges are detected from the
//! two most recent samples, so a press observed one cycle and released
//! the next still produces exactly one `Pressed`/`Released` pair.
//!
//! After a press edge the tracker enters a short settle window during
//! which the line is treated as still-active regardless of what the pin
//! reads. That gives a crude press-length debounce without ever
//! stalling the loop.

use crate::config::{BUTTON_HOLD_MS, BUTTON_SETTLE_MS};

/// Classified button event for one cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Not pressed, no edge.
    Idle,
    /// Press edge this cycle.
    Pressed,
    /// Still pressed. `reset_requested` is true on every cycle the hold
    /// duration meets the reset threshold, not just the first - the
    /// reset line is idempotent and the repetition is intentional.
    Held { reset_requested: bool },
    /// Release edge this cycle.
    Released,
}

/// Per-player button state machine.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonTracker {
    /// Press-edge timestamp, cleared on release.
    held_since: Option<u64>,
    /// Samples before this instant are forced to "pressed".
    settle_until: u64,
    /// Previous cycle's (post-settle) level.
    prev_level: bool,
}

impl ButtonTracker {
    pub const fn new() -> Self {
        Self {
            held_since: None,
            settle_until: 0,
            prev_level: false,
        }
    }

    /// Classify one input sample taken at `now_ms`.
    pub fn update(&mut self, level: bool, now_ms: u64) -> ButtonEvent {
        // Settle lockout: within the window the line counts as pressed.
        let level = level || now_ms < self.settle_until;

        let event = match (level, self.prev_level) {
            (true, false) => {
                self.held_since = Some(now_ms);
                self.settle_until = now_ms + BUTTON_SETTLE_MS;
                ButtonEvent::Pressed
            }
            (true, true) => {
                let reset_requested = match self.held_since {
                    Some(since) => now_ms - since >= BUTTON_HOLD_MS,
                    None => false,
                };
                ButtonEvent::Held { reset_requested }
            }
            (false, true) => {
                self.held_since = None;
                ButtonEvent::Released
            }
            (false, false) => ButtonEvent::Idle,
        };

        // Unconditional, every cycle.
        self.prev_level = level;
        event
    }
}

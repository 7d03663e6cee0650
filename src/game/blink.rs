//! Winner score blink - a two-phase, non-blocking animation.
//!
//! The phase toggles on a monotonic-clock comparison rather than a
//! blocking delay, so button polling (and the hold-to-reset gesture)
//! stays live throughout the animation.

use crate::config::SCORE_BLINK_MS;

/// Current half of the blink cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlinkPhase {
    /// Winner's digits blanked.
    Blank,
    /// Winner's digits showing their true values.
    Shown,
}

/// Phase machine for the winning player's display.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Blink {
    phase: BlinkPhase,
    phase_started_ms: u64,
}

impl Blink {
    /// Start a blink cycle. The blank half comes first.
    pub const fn start(now_ms: u64) -> Self {
        Self {
            phase: BlinkPhase::Blank,
            phase_started_ms: now_ms,
        }
    }

    pub const fn phase(&self) -> BlinkPhase {
        self.phase
    }

    /// Toggle the phase once the interval has elapsed.
    ///
    /// At most one toggle per call, so the sequence is strictly
    /// blank/shown alternating no matter how much time passed between
    /// calls.
    pub fn advance(&mut self, now_ms: u64) {
        if now_ms - self.phase_started_ms >= SCORE_BLINK_MS {
            self.phase = match self.phase {
                BlinkPhase::Blank => BlinkPhase::Shown,
                BlinkPhase::Shown => BlinkPhase::Blank,
            };
            self.phase_started_ms = now_ms;
        }
    }
}

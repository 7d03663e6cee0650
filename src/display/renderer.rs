//! GPIO renderer for one or two digit positions.
//!
//! Generic over the `embedded-hal` `OutputPin` trait so callers pass in
//! their HAL's GPIO outputs (embassy-nrf on target, mock pins in host
//! tests). Each [`DigitDisplay`] owns exactly seven segment lines.

use embedded_hal::digital::{OutputPin, PinState};

use crate::config::{SEGMENT_ACTIVE_LOW, SEGMENT_COUNT};
use crate::display::segments::{pattern, Digit};
use crate::game::PlayerFrame;

/// Physical line state for a logical segment on/off.
fn line_state(lit: bool) -> PinState {
    if lit != SEGMENT_ACTIVE_LOW {
        PinState::High
    } else {
        PinState::Low
    }
}

/// One 7-segment digit position.
pub struct DigitDisplay<P: OutputPin> {
    segments: [P; SEGMENT_COUNT],
}

impl<P: OutputPin> DigitDisplay<P> {
    /// Take ownership of the seven segment lines, ordered A through G.
    pub fn new(segments: [P; SEGMENT_COUNT]) -> Self {
        Self { segments }
    }

    /// Drive all seven lines to show `digit`.
    pub fn show(&mut self, digit: Digit) -> Result<(), P::Error> {
        let lit = pattern(digit);
        for (pin, &on) in self.segments.iter_mut().zip(lit.iter()) {
            pin.set_state(line_state(on))?;
        }
        Ok(())
    }
}

/// Both digit positions for one player's score.
pub struct PlayerDisplay<P: OutputPin> {
    tens: DigitDisplay<P>,
    ones: DigitDisplay<P>,
}

impl<P: OutputPin> PlayerDisplay<P> {
    pub fn new(tens: DigitDisplay<P>, ones: DigitDisplay<P>) -> Self {
        Self { tens, ones }
    }

    /// Render one frame produced by the game controller.
    pub fn show(&mut self, frame: PlayerFrame) -> Result<(), P::Error> {
        self.tens.show(frame.tens)?;
        self.ones.show(frame.ones)
    }
}

//! Per-player score split into display place values.

/// One player's score as tens/ones digits.
///
/// Combined scores of 100 or more are not representable on a two-digit
/// display and are unsupported: `increment` past 99 carries `tens` out
/// of the renderable 0..=9 range and the tens position goes blank.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Score {
    tens: u8,
    ones: u8,
}

impl Score {
    pub const fn zero() -> Self {
        Self { tens: 0, ones: 0 }
    }

    /// Add one point, carrying from the ones place into the tens place.
    ///
    /// There is deliberately no winner guard here; the game controller
    /// decides whether an increment applies.
    pub fn increment(&mut self) {
        self.ones += 1;
        if self.ones >= 10 {
            self.ones = 0;
            self.tens += 1;
        }
    }

    pub const fn tens(&self) -> u8 {
        self.tens
    }

    pub const fn ones(&self) -> u8 {
        self.ones
    }

    /// Combined point total, `tens * 10 + ones`.
    pub const fn combined(&self) -> u8 {
        self.tens * 10 + self.ones
    }
}

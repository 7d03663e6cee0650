//! 7-segment digit patterns.
//!
//! Segment layout (logical, polarity-free):
//! ```text
//!       A
//!     +---+
//!   F | G | B
//!     +---+
//!   E |   | C
//!     +---+
//!       D
//! ```
//!
//! Patterns are `[A, B, C, D, E, F, G]` with `true` = segment lit. The
//! physical active-low translation for common-anode hardware happens in
//! the renderer, not here.

use crate::config::SEGMENT_COUNT;

/// Value shown at one digit position.
///
/// `Blank` is a first-class sentinel rather than an out-of-range magic
/// number; `Value(n)` with `n > 9` also renders blank.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Digit {
    /// All segments off.
    Blank,
    /// A decimal digit, 0..=9.
    Value(u8),
}

/// Segment states for digits 0-9, `[A, B, C, D, E, F, G]`.
const PATTERNS: [[bool; SEGMENT_COUNT]; 10] = [
    [true, true, true, true, true, true, false],    // 0
    [false, true, true, false, false, false, false], // 1
    [true, true, false, true, true, false, true],   // 2
    [true, true, true, true, false, false, true],   // 3
    [false, true, true, false, false, true, true],  // 4
    [true, false, true, true, false, true, true],   // 5
    [true, false, true, true, true, true, true],    // 6
    [true, true, true, false, false, false, false], // 7
    [true, true, true, true, true, true, true],     // 8
    [true, true, true, true, false, true, true],    // 9
];

/// Look up the segment pattern for a digit.
///
/// Anything unrenderable (blank, or a value past 9) yields all segments
/// off.
pub const fn pattern(digit: Digit) -> [bool; SEGMENT_COUNT] {
    match digit {
        Digit::Value(n) if n <= 9 => PATTERNS[n as usize],
        _ => [false; SEGMENT_COUNT],
    }
}

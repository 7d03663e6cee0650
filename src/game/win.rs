//! Win-condition evaluation.

use crate::config::{TARGET_SCORE, WIN_MARGIN};
use crate::game::PlayerId;

fn wins(score: u8, opponent: u8) -> bool {
    score >= TARGET_SCORE && score >= opponent + WIN_MARGIN
}

/// Evaluate the win-by-two rule for the current scores.
///
/// Player one is checked first as a defined, deterministic order; the
/// two-point margin makes simultaneous qualification impossible anyway.
pub fn evaluate(score_one: u8, score_two: u8) -> Option<PlayerId> {
    if wins(score_one, score_two) {
        Some(PlayerId::One)
    } else if wins(score_two, score_one) {
        Some(PlayerId::Two)
    } else {
        None
    }
}

//! Game state machine - scores, button classification, win detection,
//! winner blink.
//!
//! [`GameState`] is the single owner of all mutable game data. The
//! control loop calls [`GameState::tick`] once per cycle with fresh
//! button samples and the monotonic clock; the returned [`CycleOutput`]
//! says what to put on the displays and whether the reset line should be
//! driven. No I/O happens in here, which is what keeps the whole game
//! host-testable.

pub mod blink;
pub mod button;
pub mod score;
pub mod win;

use crate::display::segments::Digit;
use blink::{Blink, BlinkPhase};
use button::{ButtonEvent, ButtonTracker};
use score::Score;

/// Player identity. Also indexes the `players` array.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub const fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

const PLAYER_IDS: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

/// One contestant's console state: score plus button tracking.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Player {
    pub score: Score,
    pub button: ButtonTracker,
}

/// Digits to present for one player this cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PlayerFrame {
    pub tens: Digit,
    pub ones: Digit,
}

/// Result of one control-loop cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleOutput {
    /// Display content, indexed by player.
    pub frames: [PlayerFrame; 2],
    /// True whenever a hold gesture is past the reset threshold. Fires
    /// every such cycle until release; the reset line tolerates that.
    pub reset_requested: bool,
}

/// Whole-game state for one run. Created zeroed at startup and only ever
/// reset by the hardware reset line restarting the controller.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GameState {
    players: [Player; 2],
    winner: Option<PlayerId>,
    blink: Blink,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub const fn new() -> Self {
        Self {
            players: [
                Player {
                    score: Score::zero(),
                    button: ButtonTracker::new(),
                },
                Player {
                    score: Score::zero(),
                    button: ButtonTracker::new(),
                },
            ],
            winner: None,
            blink: Blink::start(0),
        }
    }

    pub const fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    pub fn score(&self, player: PlayerId) -> Score {
        self.players[player.index()].score
    }

    /// Run one cycle: compute display frames from the current state,
    /// classify both buttons, then either evaluate the win condition or
    /// advance the winner blink.
    ///
    /// `levels` are the sampled button lines (true = pressed), player
    /// one first.
    pub fn tick(&mut self, levels: [bool; 2], now_ms: u64) -> CycleOutput {
        let frames = [
            self.frame_for(PlayerId::One),
            self.frame_for(PlayerId::Two),
        ];

        let mut reset_requested = false;
        for id in PLAYER_IDS {
            let player = &mut self.players[id.index()];
            match player.button.update(levels[id.index()], now_ms) {
                ButtonEvent::Held { reset_requested: r } => reset_requested |= r,
                ButtonEvent::Released => {
                    // Buttons are inert for scoring once the game ends;
                    // only the hold gesture stays meaningful.
                    if self.winner.is_none() {
                        player.score.increment();
                    }
                }
                ButtonEvent::Idle | ButtonEvent::Pressed => {}
            }
        }

        match self.winner {
            None => {
                self.winner = win::evaluate(
                    self.players[PlayerId::One.index()].score.combined(),
                    self.players[PlayerId::Two.index()].score.combined(),
                );
                if self.winner.is_some() {
                    self.blink = Blink::start(now_ms);
                }
            }
            Some(_) => self.blink.advance(now_ms),
        }

        CycleOutput {
            frames,
            reset_requested,
        }
    }

    /// Display content for one player: true digits, or blanks during the
    /// blank half of the winner blink.
    fn frame_for(&self, id: PlayerId) -> PlayerFrame {
        let blanked = self.winner == Some(id) && self.blink.phase() == BlinkPhase::Blank;
        if blanked {
            PlayerFrame {
                tens: Digit::Blank,
                ones: Digit::Blank,
            }
        } else {
            let score = self.players[id.index()].score;
            PlayerFrame {
                tens: Digit::Value(score.tens()),
                ones: Digit::Value(score.ones()),
            }
        }
    }
}

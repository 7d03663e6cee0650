//! Embedded entry point - nRF52840 control loop.
//!
//! Wires the host-testable game core to real GPIO: 28 segment lines
//! (2 players × 2 digits × 7 segments), 2 button inputs, and one output
//! tied to the MCU's reset input for the hold-to-reset gesture.
//!
//! The loop never blocks on game events: every tick it samples both
//! buttons, runs one `GameState::tick`, renders the returned frames, and
//! drives the reset line if a hold gesture crossed the threshold.

#![no_std]
#![no_main]

use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_nrf::gpio::{AnyPin, Input, Level, Output, OutputDrive, Pin, Pull};
use embassy_time::{Instant, Timer};
use panic_probe as _;

use scorer::config::LOOP_TICK_MS;
use scorer::display::renderer::{DigitDisplay, PlayerDisplay};
use scorer::game::GameState;

/// Segment output line, inactive (high, common anode) at boot.
fn seg(pin: AnyPin) -> Output<'static> {
    Output::new(pin, Level::High, OutputDrive::Standard)
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("scorer: two-player scoreboard starting");

    // Player 1 display, segments A-G per digit.
    let mut p1_display = PlayerDisplay::new(
        DigitDisplay::new([
            seg(p.P0_02.degrade()),
            seg(p.P0_03.degrade()),
            seg(p.P0_04.degrade()),
            seg(p.P0_05.degrade()),
            seg(p.P0_06.degrade()),
            seg(p.P0_07.degrade()),
            seg(p.P0_08.degrade()),
        ]),
        DigitDisplay::new([
            seg(p.P0_11.degrade()),
            seg(p.P0_12.degrade()),
            seg(p.P0_13.degrade()),
            seg(p.P0_14.degrade()),
            seg(p.P0_15.degrade()),
            seg(p.P0_16.degrade()),
            seg(p.P0_17.degrade()),
        ]),
    );

    // Player 2 display.
    let mut p2_display = PlayerDisplay::new(
        DigitDisplay::new([
            seg(p.P0_19.degrade()),
            seg(p.P0_20.degrade()),
            seg(p.P0_21.degrade()),
            seg(p.P0_22.degrade()),
            seg(p.P0_23.degrade()),
            seg(p.P0_24.degrade()),
            seg(p.P0_25.degrade()),
        ]),
        DigitDisplay::new([
            seg(p.P1_08.degrade()),
            seg(p.P1_09.degrade()),
            seg(p.P1_10.degrade()),
            seg(p.P1_11.degrade()),
            seg(p.P1_12.degrade()),
            seg(p.P1_13.degrade()),
            seg(p.P1_14.degrade()),
        ]),
    );

    // Buttons are active-high with a pull-down.
    let p1_button = Input::new(p.P1_01.degrade(), Pull::Down);
    let p2_button = Input::new(p.P1_02.degrade(), Pull::Down);

    // Wired to the nRF RESET input; driving it low restarts the board,
    // which is the only way a finished game starts over.
    let mut reset_line = Output::new(p.P1_03.degrade(), Level::High, OutputDrive::Standard);

    let mut game = GameState::new();
    let mut winner_announced = false;
    let mut reset_announced = false;

    loop {
        let now_ms = Instant::now().as_millis();
        let levels = [p1_button.is_high(), p2_button.is_high()];

        let out = game.tick(levels, now_ms);

        let _ = p1_display.show(out.frames[0]);
        let _ = p2_display.show(out.frames[1]);

        if out.reset_requested {
            if !reset_announced {
                info!("hold gesture past threshold, driving reset line");
                reset_announced = true;
            }
            // Re-driven every cycle while the hold continues; the line
            // is level-triggered so the repetition is harmless.
            reset_line.set_low();
        }

        if !winner_announced {
            if let Some(winner) = game.winner() {
                info!(
                    "winner: {} ({}-{})",
                    winner,
                    game.score(scorer::game::PlayerId::One).combined(),
                    game.score(scorer::game::PlayerId::Two).combined()
                );
                winner_announced = true;
            }
        }

        Timer::after_millis(LOOP_TICK_MS).await;
    }
}

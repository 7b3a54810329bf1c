//! The two display sessions the outer loop alternates between
//!
//! A life session seeds a random board and runs it until it fades out; a
//! message session scrolls one not-recently-seen quote. Both return when
//! the display is dark again.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::Timer;

use lifelight_core::buttons::{ButtonPoller, BUTTON_LEFT, BUTTON_RIGHT};
use lifelight_core::frame::Color;
use lifelight_core::quotes::QuotePicker;
use lifelight_core::session::{LifeSession, SessionStatus, TICK_MS};

use crate::channels::{SharedDimmer, FRAME};
use crate::config::QUOTE_TRAILER;
use crate::entropy::NoiseSource;
use crate::quotes::QUOTES;
use crate::text::scroll_text;

/// Fold the active-low button pins into the logical down pattern
fn down_pattern(left: &Input<'static>, right: &Input<'static>) -> u8 {
    let mut down = 0;
    if left.is_low() {
        down |= BUTTON_LEFT;
    }
    if right.is_low() {
        down |= BUTTON_RIGHT;
    }
    down
}

/// One automaton playthrough: seed, run, fade out
pub async fn run_life(
    noise: &mut NoiseSource,
    buttons: &mut ButtonPoller,
    left: &Input<'static>,
    right: &Input<'static>,
) {
    let seed = noise.board().await;
    let mut dimmer = SharedDimmer;
    let mut session = LifeSession::start(&seed, &FRAME, &mut dimmer);
    debug!("life session seeded");

    loop {
        Timer::after_millis(TICK_MS).await;
        let down = down_pattern(left, right);
        if session.tick(down, &FRAME, buttons, &mut dimmer) == SessionStatus::Finished {
            break;
        }
    }

    info!(
        "life session finished after {} generations",
        session.generations()
    );
}

/// One scrolled quote, no repeats until all 64 have been shown
pub async fn run_message(noise: &mut NoiseSource, picker: &mut QuotePicker) {
    let index = picker.pick(noise.byte().await);
    let color = Color::from_noise(noise.byte().await);
    debug!("scrolling quote {}", index);

    FRAME.clear_all();
    scroll_text(QUOTES[index as usize], color).await;
    scroll_text(QUOTE_TRAILER, color).await;
}

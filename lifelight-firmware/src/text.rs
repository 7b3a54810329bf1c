//! Scroll driver for the text path
//!
//! Scrolls text in from the right, one column per step: write the incoming
//! column word into the first back-buffer slot, then rotate the visible
//! window onto it. Existing frame contents walk off the left edge first,
//! and the call returns once the last character has fully entered the
//! display, so callers can chain runs in different colors.

use embassy_time::Timer;

use lifelight_core::frame::{Color, VISIBLE_COLS};
use lifelight_text::ColumnStream;

use crate::channels::FRAME;
use crate::config::SCROLL_STEP_MS;

pub async fn scroll_text(text: &str, color: Color) {
    for word in ColumnStream::new(text, color) {
        // The slot entering view next holds stale ring data; overwrite it
        // before the rotate makes it visible
        let incoming = (FRAME.base() + VISIBLE_COLS) & 0x0F;
        FRAME.set_column(incoming, word);
        FRAME.rotate(1);
        Timer::after_millis(SCROLL_STEP_MS).await;
    }
}

//! Column scanner - the real-time heartbeat of the display
//!
//! Every scan period this task serializes one visible column to the
//! cascaded 74HC595 pair, latches it, and energizes that column's driver
//! line, rotating through all 8 columns at 796 Hz. The drivers are blanked
//! between un-latching and latching so a slow latch never ghosts a column's
//! bits onto its neighbor.
//!
//! Fading is an early blank partway through the column window: when the
//! session controller has a fade engaged, the scanner waits out the fade
//! level's share of the window and then cuts the drivers, PWM-ing the whole
//! display. The scanner never writes the frame; its column index is local
//! state no one else sees.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_time::{Duration, Ticker, Timer};
use portable_atomic::Ordering;

use crate::channels::{FADE_ACTIVE, FADE_LEVEL, FRAME};
use crate::config::{FADE_SLICE_US, SCAN_PERIOD_US};

/// Bits in one column word (8 rows x 2 colors)
const COLUMN_BITS: u8 = 16;

#[embassy_executor::task]
pub async fn scanner_task(
    mut data: Output<'static>,
    mut clock: Output<'static>,
    mut latch: Output<'static>,
    mut drivers: [Output<'static>; 8],
) {
    info!("Column scanner started, period {}us", SCAN_PERIOD_US);

    let mut ticker = Ticker::every(Duration::from_micros(SCAN_PERIOD_US));
    let mut col: u8 = 0;

    loop {
        ticker.next().await;

        let word = FRAME.visible_column(col);

        // Shift MSB-first; the serial line is active low (0 = LED on)
        latch.set_low();
        for bit in (0..COLUMN_BITS).rev() {
            clock.set_low();
            if word & (1 << bit) != 0 {
                data.set_low();
            } else {
                data.set_high();
            }
            clock.set_high();
        }
        clock.set_low();

        // Blank before latching so the new bits never overlap the old column
        for driver in drivers.iter_mut() {
            driver.set_low();
        }
        latch.set_high();

        // One-hot column select; driver 7 is the leftmost column
        drivers[(7 - col) as usize].set_high();

        // Early blank for brightness fading: cut the drivers after the fade
        // level's share of this column's window
        if FADE_ACTIVE.load(Ordering::Relaxed) {
            let level = FADE_LEVEL.load(Ordering::Relaxed);
            Timer::after_micros(level as u64 * FADE_SLICE_US).await;
            for driver in drivers.iter_mut() {
                driver.set_low();
            }
        }

        col = (col + 1) & 0x07;
    }
}

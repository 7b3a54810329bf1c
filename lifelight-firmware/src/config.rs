//! Compile-time tunables
//!
//! There is no persistent configuration on this board; everything worth
//! adjusting lives here.

use lifelight_core::fade::REFRESH;

/// Column scan period: 796 Hz, just under 100 Hz per column
pub const SCAN_PERIOD_US: u64 = 1256;

/// One fade-level step of the column window (the 125 kHz timebase tick the
/// early-blank threshold is expressed in)
pub const FADE_SLICE_US: u64 = SCAN_PERIOD_US / REFRESH as u64;

/// Settle delay between noise samples; the floating pin has little analog
/// bandwidth, so consecutive reads correlate without this
pub const NOISE_SETTLE_MS: u64 = 2;

/// Delay per one-column scroll step of the text path
pub const SCROLL_STEP_MS: u64 = 35;

/// Pause between a life session fading out and the next quote
pub const SESSION_PAUSE_MS: u64 = 26;

/// Scrolled after each quote so the tail clears the display edge
pub const QUOTE_TRAILER: &str = "   ";

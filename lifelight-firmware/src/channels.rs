//! State shared between the scanner task and the session controller
//!
//! The scanner runs every column period and must never block on the session
//! side, so everything it reads lives in lock-free statics: the frame ring
//! itself and the two fade words. The session controller is the only
//! writer of all three.

use portable_atomic::{AtomicBool, AtomicU8, Ordering};

use lifelight_core::fade::{Dimmer, FADE_BRIGHT, FADE_DARK};
use lifelight_core::frame::FrameBuffer;

/// The display frame ring; visible half read by the scanner
pub static FRAME: FrameBuffer = FrameBuffer::new();

/// Early-blank threshold within the column window (higher = brighter)
pub static FADE_LEVEL: AtomicU8 = AtomicU8::new(FADE_BRIGHT);

/// Whether the scanner should blank columns early at all
pub static FADE_ACTIVE: AtomicBool = AtomicBool::new(false);

/// `Dimmer` implementation over the fade statics
///
/// Zero-sized handle; the session controller owns the only instance that
/// ever writes.
pub struct SharedDimmer;

impl Dimmer for SharedDimmer {
    fn set_level(&mut self, level: u8) {
        debug_assert!((FADE_DARK..=FADE_BRIGHT).contains(&level));
        FADE_LEVEL.store(level, Ordering::Relaxed);
    }

    fn enable(&mut self) {
        FADE_ACTIVE.store(true, Ordering::Relaxed);
    }

    fn disable(&mut self) {
        FADE_ACTIVE.store(false, Ordering::Relaxed);
    }
}

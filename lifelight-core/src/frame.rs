//! Double-buffered frame store shared between the scanner and the session
//!
//! The display holds 16 column words arranged as a ring. Eight consecutive
//! slots starting at the `base` selector are visible and scanned out; the
//! other eight are the back buffer, written by the session controller and
//! made visible with a single atomic `flip`. The base may sit at any of the
//! 16 positions, which also gives the text path a one-column rotate for
//! scrolling.
//!
//! Cross-context discipline: the scanner only loads, the session only
//! stores, and the release store of `base` publishes every column written
//! before it. Column words themselves are accessed relaxed; the base
//! selector carries the ordering.

use portable_atomic::{AtomicU16, AtomicU8, Ordering};

/// Total column slots in the ring (two 8-column halves)
pub const SLOT_COUNT: usize = 16;

/// Columns visible to the scanner at any time
pub const VISIBLE_COLS: u8 = 8;

/// Rows on the matrix
pub const ROWS: u8 = 8;

/// Cell colors as stored in a column word
///
/// Each row occupies two bits: bit `2r` drives the green die, bit `2r + 1`
/// the red die. Both bits lit reads as orange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Color {
    Green = 1,
    Red = 2,
    Orange = 3,
}

impl Color {
    /// Two-bit cell value for this color
    pub const fn value(self) -> u16 {
        self as u16
    }

    /// Map a raw byte onto a color, the way the message session picks one
    pub const fn from_noise(r: u8) -> Self {
        match r % 3 {
            0 => Color::Green,
            1 => Color::Red,
            _ => Color::Orange,
        }
    }
}

/// The shared frame store
///
/// Lives in a `static` in the firmware; the scanner task reads the visible
/// half while the session controller owns the back half.
pub struct FrameBuffer {
    slots: [AtomicU16; SLOT_COUNT],
    base: AtomicU8,
}

impl FrameBuffer {
    /// A cleared frame with the visible half at slot 0
    pub const fn new() -> Self {
        Self {
            slots: [const { AtomicU16::new(0) }; SLOT_COUNT],
            base: AtomicU8::new(0),
        }
    }

    /// Current base slot of the visible half
    pub fn base(&self) -> u8 {
        self.base.load(Ordering::Acquire)
    }

    /// Place the visible half at an absolute slot
    pub fn set_base(&self, base: u8) {
        debug_assert!((base as usize) < SLOT_COUNT);
        self.base.store(base, Ordering::Release);
    }

    /// Swap the visible and back halves
    ///
    /// Single release store; the session is the only writer, so there is no
    /// read-modify-write race to guard against.
    pub fn flip(&self) {
        let base = self.base.load(Ordering::Relaxed);
        self.base
            .store((base + VISIBLE_COLS) & 0x0F, Ordering::Release);
    }

    /// Advance the visible window by `n` slots (text scrolling)
    pub fn rotate(&self, n: u8) {
        let base = self.base.load(Ordering::Relaxed);
        self.base.store(base.wrapping_add(n) & 0x0F, Ordering::Release);
    }

    /// Read visible column `col` (0 = leftmost), scanner side
    pub fn visible_column(&self, col: u8) -> u16 {
        debug_assert!(col < VISIBLE_COLS);
        let base = self.base.load(Ordering::Acquire);
        self.slots[((base + col) & 0x0F) as usize].load(Ordering::Relaxed)
    }

    /// Read back-buffer column `col`
    pub fn back_column(&self, col: u8) -> u16 {
        debug_assert!(col < VISIBLE_COLS);
        let base = self.base.load(Ordering::Relaxed);
        self.slots[((base + VISIBLE_COLS + col) & 0x0F) as usize].load(Ordering::Relaxed)
    }

    /// Write back-buffer column `col`
    ///
    /// Published to the scanner by the next `flip`.
    pub fn set_back_column(&self, col: u8, bits: u16) {
        debug_assert!(col < VISIBLE_COLS);
        let base = self.base.load(Ordering::Relaxed);
        self.slots[((base + VISIBLE_COLS + col) & 0x0F) as usize].store(bits, Ordering::Relaxed);
    }

    /// Read an absolute slot
    pub fn column(&self, slot: u8) -> u16 {
        debug_assert!((slot as usize) < SLOT_COUNT);
        self.slots[slot as usize].load(Ordering::Relaxed)
    }

    /// Write an absolute slot
    pub fn set_column(&self, slot: u8, bits: u16) {
        debug_assert!((slot as usize) < SLOT_COUNT);
        self.slots[slot as usize].store(bits, Ordering::Relaxed);
    }

    /// Zero `count` slots starting at `start`, wrapping around the ring
    pub fn clear(&self, start: u8, count: u8) {
        for k in 0..count {
            self.slots[((start + k) & 0x0F) as usize].store(0, Ordering::Relaxed);
        }
    }

    /// Zero every slot
    pub fn clear_all(&self) {
        self.clear(0, SLOT_COUNT as u8);
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

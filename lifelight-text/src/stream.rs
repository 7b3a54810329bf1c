//! Text to packed column words
//!
//! `ColumnStream` walks a string byte by byte and yields one frame-column
//! word per scroll step: five glyph columns and a blank separator per
//! character, each font bit expanded into the two-bit cell encoding of the
//! chosen color. Text sits on rows 0..6; row 7 stays dark.

use heapless::Vec;
use lifelight_core::frame::Color;

use crate::font::{self, GLYPH_COLS};

/// Scroll steps per character (glyph plus separator)
pub const CHAR_COLS: usize = GLYPH_COLS + 1;

/// Expand one font column byte into a frame column word
fn expand(column: u8, color: Color) -> u16 {
    let mut word = 0u16;
    for row in 0..7 {
        if column & (1 << row) != 0 {
            word |= color.value() << (row * 2);
        }
    }
    word
}

/// Iterator over the column words of a text run
pub struct ColumnStream<'a> {
    text: &'a [u8],
    color: Color,
    next_char: usize,
    pending: Vec<u16, CHAR_COLS>,
}

impl<'a> ColumnStream<'a> {
    pub fn new(text: &'a str, color: Color) -> Self {
        Self {
            text: text.as_bytes(),
            color,
            next_char: 0,
            pending: Vec::new(),
        }
    }

    /// Total scroll steps this stream will yield
    pub fn len_columns(&self) -> usize {
        self.text.len() * CHAR_COLS
    }
}

impl Iterator for ColumnStream<'_> {
    type Item = u16;

    fn next(&mut self) -> Option<u16> {
        if self.pending.is_empty() {
            let &c = self.text.get(self.next_char)?;
            self.next_char += 1;
            // Queue in reverse so pop() hands columns out left to right
            let _ = self.pending.push(0);
            for &col in font::glyph(c).iter().rev() {
                let _ = self.pending.push(expand(col, self.color));
            }
        }
        self.pending.pop()
    }
}

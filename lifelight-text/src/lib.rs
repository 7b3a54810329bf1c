//! Font and glyph column stream for the Lifelight display
//!
//! This crate is the text half of the firmware: it turns a string and a
//! color into the sequence of packed column words the scroll driver feeds
//! into the frame ring, one column per scroll step. It knows nothing about
//! timing or hardware; the firmware owns the scrolling pace.

#![no_std]
#![deny(unsafe_code)]

pub mod font;
pub mod stream;

pub use stream::{ColumnStream, CHAR_COLS};

//! Assembly of noise bits into bytes and seed boards
//!
//! The bits come from the least significant bit of a floating analog input,
//! sampled by the firmware with a settle delay in between. Quality is
//! deliberately weak - this is visual-variety seeding, nothing more. This
//! module only does the pure assembly so it stays host-testable.

use crate::life::{Board, Cell, GRID};

/// MSB-first bit-to-byte accumulator
///
/// Transient: feed it eight bits, take the byte, state resets itself.
#[derive(Debug, Default)]
pub struct BitAccumulator {
    byte: u8,
    count: u8,
}

impl BitAccumulator {
    pub const fn new() -> Self {
        Self { byte: 0, count: 0 }
    }

    /// Shift in one bit; returns the finished byte every eighth push
    pub fn push(&mut self, bit: bool) -> Option<u8> {
        self.byte = (self.byte << 1) | bit as u8;
        self.count += 1;
        if self.count == 8 {
            let byte = self.byte;
            *self = Self::new();
            Some(byte)
        } else {
            None
        }
    }
}

/// Build a seed board from one noise byte per column
///
/// Bit 7 of a byte maps to row 0 of its column. Every seeded live cell
/// starts `Mature`, never `Young`.
pub fn board_from_noise(bytes: [u8; GRID as usize]) -> Board {
    let mut board = Board::new();
    for (col, byte) in bytes.iter().enumerate() {
        for row in 0..GRID {
            if byte & (0x80 >> row) != 0 {
                board.set(col as u8, row, Cell::Mature);
            }
        }
    }
    board
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulator_assembles_msb_first() {
        let mut acc = BitAccumulator::new();
        // 0b1010_0001
        let bits = [true, false, true, false, false, false, false, true];
        let mut out = None;
        for (i, &bit) in bits.iter().enumerate() {
            out = acc.push(bit);
            if i < 7 {
                assert_eq!(out, None);
            }
        }
        assert_eq!(out, Some(0xA1));
    }

    #[test]
    fn accumulator_resets_between_bytes() {
        let mut acc = BitAccumulator::new();
        for _ in 0..8 {
            acc.push(true);
        }
        let mut out = None;
        for _ in 0..8 {
            out = acc.push(false);
        }
        assert_eq!(out, Some(0x00));
    }

    #[test]
    fn seeded_cells_are_mature_only() {
        let board = board_from_noise([0xFF, 0x00, 0xA5, 0, 0, 0, 0, 0x01]);
        for col in 0..GRID {
            for row in 0..GRID {
                let cell = board.get(col, row);
                assert!(cell == Cell::Dead || cell == Cell::Mature);
            }
        }
        // bit 7 -> row 0, bit 0 -> row 7
        assert_eq!(board.get(2, 0), Cell::Mature);
        assert_eq!(board.get(2, 1), Cell::Dead);
        assert_eq!(board.get(7, 7), Cell::Mature);
        assert_eq!(board.get(7, 0), Cell::Dead);
    }

    #[test]
    fn zero_noise_seeds_an_empty_board() {
        assert!(board_from_noise([0; 8]).is_empty());
    }
}

//! Two-color Game of Life on a closed 8x8 torus
//!
//! Cells age: a newborn is green, a green cell that survives turns orange,
//! and anything older that survives is red. The survivor's new color depends
//! only on its previous color; the neighbor count decides life and death
//! only. Any non-dead cell counts as one neighbor regardless of color.
//!
//! `next_generation` also classifies the new board so the session controller
//! can fade out boards that have gone dead, static, or boring.

/// Board edge length; row and column indices wrap mod this
pub const GRID: u8 = 8;

/// One cell, as packed into two bits of a column word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Cell {
    #[default]
    Dead = 0,
    /// Newborn (green)
    Young = 1,
    /// Survived at least two generations (red)
    Mature = 2,
    /// Young cell that survived once (orange)
    Turning = 3,
}

impl Cell {
    /// Decode a two-bit pair
    pub const fn from_bits(bits: u16) -> Self {
        match bits & 0x03 {
            0 => Cell::Dead,
            1 => Cell::Young,
            2 => Cell::Mature,
            _ => Cell::Turning,
        }
    }

    /// Two-bit encoding of this cell
    pub const fn bits(self) -> u16 {
        self as u16
    }

    pub const fn is_alive(self) -> bool {
        !matches!(self, Cell::Dead)
    }
}

/// Activity classification of a freshly computed generation
///
/// Ordered: a board is as active as its most active column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Activity {
    /// Every cell dead
    Dead,
    /// Bit-identical to the previous generation, or boringly close to dead
    Steady,
    /// Still changing
    Active,
}

/// One full board state: eight packed column words
///
/// Accessors wrap both indices mod 8, so neighbor arithmetic never needs to
/// special-case the edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cols: [u16; GRID as usize],
}

/// Toroidal neighbor offsets (col, row), expressed as +7 == -1 mod 8
const NEIGHBOR_OFFSETS: [(u8, u8); 8] = [
    (7, 7),
    (7, 0),
    (7, 1),
    (0, 7),
    (0, 1),
    (1, 7),
    (1, 0),
    (1, 1),
];

impl Board {
    pub const fn new() -> Self {
        Self {
            cols: [0; GRID as usize],
        }
    }

    pub const fn from_columns(cols: [u16; GRID as usize]) -> Self {
        Self { cols }
    }

    /// Packed word for column `col`
    pub const fn column(&self, col: u8) -> u16 {
        self.cols[(col & 0x07) as usize]
    }

    /// Cell at (col, row), indices wrapping mod 8
    pub const fn get(&self, col: u8, row: u8) -> Cell {
        Cell::from_bits(self.column(col) >> ((row & 0x07) * 2))
    }

    /// Store a cell at (col, row), indices wrapping mod 8
    pub fn set(&mut self, col: u8, row: u8, cell: Cell) {
        let slot = &mut self.cols[(col & 0x07) as usize];
        let shift = (row & 0x07) * 2;
        *slot = (*slot & !(0x03 << shift)) | (cell.bits() << shift);
    }

    /// Live cells among the eight toroidal neighbors of (col, row)
    pub fn live_neighbors(&self, col: u8, row: u8) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|(dc, dr)| self.get(col + dc, row + dr).is_alive())
            .count() as u8
    }

    pub fn is_empty(&self) -> bool {
        self.cols.iter().all(|&c| c == 0)
    }
}

/// Compute the next generation and classify it
///
/// Rules, applied independently per cell:
/// - a live cell survives with 2 or 3 live neighbors, otherwise dies;
/// - a surviving `Young` becomes `Turning`, any other survivor `Mature`;
/// - a dead cell with exactly 3 live neighbors is born `Young`.
///
/// Classification is the maximum per-column activity, except that a board
/// with exactly 7 fully dead columns reads `Steady` outright: lone spinners
/// are not worth watching, and this forces the session to fade them out.
pub fn next_generation(src: &Board) -> (Board, Activity) {
    let mut next = Board::new();
    let mut activity = Activity::Dead;
    let mut dead_cols = 0u8;

    for col in 0..GRID {
        for row in 0..GRID {
            let neighbors = src.live_neighbors(col, row);
            let cell = match src.get(col, row) {
                Cell::Dead if neighbors == 3 => Cell::Young,
                Cell::Dead => Cell::Dead,
                _ if !(2..=3).contains(&neighbors) => Cell::Dead,
                Cell::Young => Cell::Turning,
                Cell::Mature | Cell::Turning => Cell::Mature,
            };
            next.set(col, row, cell);
        }

        let col_activity = if next.column(col) == 0 {
            Activity::Dead
        } else if next.column(col) == src.column(col) {
            Activity::Steady
        } else {
            Activity::Active
        };
        if col_activity == Activity::Dead {
            dead_cols += 1;
        }
        activity = activity.max(col_activity);
    }

    // 8 dead columns is a dead board and must classify Dead, so this is an
    // exact match, not >=.
    if dead_cols == 7 {
        activity = Activity::Steady;
    }
    (next, activity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn board_with(cells: &[(u8, u8, Cell)]) -> Board {
        let mut b = Board::new();
        for &(col, row, cell) in cells {
            b.set(col, row, cell);
        }
        b
    }

    #[test]
    fn empty_board_stays_dead() {
        let (next, activity) = next_generation(&Board::new());
        assert!(next.is_empty());
        assert_eq!(activity, Activity::Dead);
    }

    #[test]
    fn mature_block_is_a_steady_still_life() {
        let block = board_with(&[
            (2, 2, Cell::Mature),
            (2, 3, Cell::Mature),
            (3, 2, Cell::Mature),
            (3, 3, Cell::Mature),
        ]);
        let (next, activity) = next_generation(&block);
        assert_eq!(next, block);
        assert_eq!(activity, Activity::Steady);
    }

    #[test]
    fn birth_needs_exactly_three_neighbors() {
        // (4, 4) is dead with three live neighbors
        let src = board_with(&[
            (3, 3, Cell::Mature),
            (3, 4, Cell::Mature),
            (3, 5, Cell::Mature),
        ]);
        assert_eq!(src.live_neighbors(4, 4), 3);

        let (next, _) = next_generation(&src);
        assert_eq!(next.get(4, 4), Cell::Young);
        // two neighbors is not enough
        assert_eq!(src.live_neighbors(4, 3), 2);
        assert_eq!(next.get(4, 3), Cell::Dead);
    }

    #[test]
    fn lonely_and_crowded_cells_die() {
        // one neighbor
        let sparse = board_with(&[(1, 1, Cell::Mature), (1, 2, Cell::Mature)]);
        let (next, _) = next_generation(&sparse);
        assert_eq!(next.get(1, 1), Cell::Dead);
        assert_eq!(next.get(1, 2), Cell::Dead);

        // four neighbors around the center of a plus shape
        let crowded = board_with(&[
            (4, 4, Cell::Mature),
            (3, 4, Cell::Mature),
            (5, 4, Cell::Mature),
            (4, 3, Cell::Mature),
            (4, 5, Cell::Mature),
        ]);
        let (next, _) = next_generation(&crowded);
        assert_eq!(next.get(4, 4), Cell::Dead);
    }

    #[test]
    fn survivor_color_depends_only_on_previous_color() {
        // Block survives with 3 neighbors each; mix the starting colors.
        let block = board_with(&[
            (2, 2, Cell::Young),
            (2, 3, Cell::Mature),
            (3, 2, Cell::Turning),
            (3, 3, Cell::Mature),
        ]);
        let (next, _) = next_generation(&block);
        assert_eq!(next.get(2, 2), Cell::Turning);
        assert_eq!(next.get(2, 3), Cell::Mature);
        assert_eq!(next.get(3, 2), Cell::Mature);
        assert_eq!(next.get(3, 3), Cell::Mature);
    }

    #[test]
    fn neighbors_count_across_the_row_seam() {
        // Sole neighbors on the far side of the row 7 / row 0 seam
        let src = board_with(&[
            (3, 0, Cell::Mature),
            (4, 0, Cell::Mature),
            (4, 7, Cell::Mature),
        ]);
        assert_eq!(src.live_neighbors(3, 7), 3);

        let (next, _) = next_generation(&src);
        assert_eq!(next.get(3, 7), Cell::Young);
    }

    #[test]
    fn neighbors_count_across_the_column_seam() {
        let src = board_with(&[
            (0, 3, Cell::Mature),
            (0, 4, Cell::Mature),
            (7, 4, Cell::Mature),
        ]);
        assert_eq!(src.live_neighbors(7, 3), 3);
    }

    #[test]
    fn lone_spinner_reads_steady_despite_changing() {
        // Horizontal blinker collapses into a single column next generation;
        // 7 dead columns trip the boredom heuristic even though the board
        // is still oscillating.
        let spinner = board_with(&[
            (2, 4, Cell::Mature),
            (3, 4, Cell::Mature),
            (4, 4, Cell::Mature),
        ]);
        let (next, activity) = next_generation(&spinner);

        let live_cols = (0..GRID).filter(|&c| next.column(c) != 0).count();
        assert_eq!(live_cols, 1);
        assert_ne!(next, spinner);
        assert_eq!(activity, Activity::Steady);
    }

    #[test]
    fn two_column_oscillator_stays_active() {
        // Toad-like fixture spanning enough columns to dodge the heuristic
        let toad = board_with(&[
            (2, 3, Cell::Mature),
            (3, 3, Cell::Mature),
            (4, 3, Cell::Mature),
            (1, 4, Cell::Mature),
            (2, 4, Cell::Mature),
            (3, 4, Cell::Mature),
        ]);
        let (next, activity) = next_generation(&toad);
        assert!(!next.is_empty());
        assert_eq!(activity, Activity::Active);
    }

    #[test]
    fn cell_roundtrips_through_bits() {
        for cell in [Cell::Dead, Cell::Young, Cell::Mature, Cell::Turning] {
            assert_eq!(Cell::from_bits(cell.bits()), cell);
        }
    }

    proptest! {
        #[test]
        fn births_always_have_three_neighbors(cols in proptest::array::uniform8(any::<u16>())) {
            let src = Board::from_columns(cols);
            let (next, _) = next_generation(&src);
            for col in 0..GRID {
                for row in 0..GRID {
                    if next.get(col, row) == Cell::Young {
                        prop_assert_eq!(src.get(col, row), Cell::Dead);
                        prop_assert_eq!(src.live_neighbors(col, row), 3);
                    }
                }
            }
        }

        #[test]
        fn dead_classification_means_empty_board(cols in proptest::array::uniform8(any::<u16>())) {
            let src = Board::from_columns(cols);
            let (next, activity) = next_generation(&src);
            if activity == Activity::Dead {
                prop_assert!(next.is_empty());
            }
        }
    }
}

use ambe_core::{AMBE72_BITS, Ambe72Frame, BitBuffer};

use crate::components::matrix::{FrameMatrix, MATRIX_COLS};

/// Number of output bit pairs per frame
pub const INTERL_PAIRS: usize = AMBE72_BITS / 2;

/// DMR AMBE+2 interleave tables. Output pair i carries cell (RW[i], RX[i]) as its
/// first bit and cell (RY[i], RZ[i]) as its second bit.
#[rustfmt::skip]
pub const RW: [u8; INTERL_PAIRS] = [
    0, 1, 0, 1, 0, 1,
    0, 1, 0, 1, 0, 1,
    0, 1, 0, 1, 0, 1,
    0, 1, 0, 1, 0, 2,
    0, 2, 0, 2, 0, 2,
    0, 2, 0, 2, 0, 2,
];

#[rustfmt::skip]
pub const RX: [u8; INTERL_PAIRS] = [
    23, 10, 22, 9, 21, 8,
    20, 7, 19, 6, 18, 5,
    17, 4, 16, 3, 15, 2,
    14, 1, 13, 0, 12, 10,
    11, 9, 10, 8, 9, 7,
    8, 6, 7, 5, 6, 4,
];

#[rustfmt::skip]
pub const RY: [u8; INTERL_PAIRS] = [
    0, 2, 0, 2, 0, 2,
    0, 2, 0, 3, 0, 3,
    1, 3, 1, 3, 1, 3,
    1, 3, 1, 3, 1, 3,
    1, 3, 1, 3, 1, 3,
    1, 3, 1, 3, 1, 3,
];

#[rustfmt::skip]
pub const RZ: [u8; INTERL_PAIRS] = [
    5, 3, 4, 2, 3, 1,
    2, 0, 1, 13, 0, 12,
    22, 11, 21, 10, 20, 9,
    19, 8, 18, 7, 17, 6,
    16, 5, 15, 4, 14, 3,
    13, 2, 12, 1, 11, 0,
];

/// Fold the four tables into flat matrix indices, [first bit, second bit] per pair
pub const fn compute_interl_cells() -> [[usize; 2]; INTERL_PAIRS] {
    let mut out = [[0usize; 2]; INTERL_PAIRS];
    let mut i = 0;
    while i < INTERL_PAIRS {
        out[i][0] = RW[i] as usize * MATRIX_COLS + RX[i] as usize;
        out[i][1] = RY[i] as usize * MATRIX_COLS + RZ[i] as usize;
        i += 1;
    }
    out
}

pub const INTERL_CELLS: [[usize; 2]; INTERL_PAIRS] = compute_interl_cells();

/// Matrix -> 72-bit frame, bits appended MSB-first.
pub fn ambe_interleave(matrix: &FrameMatrix) -> Ambe72Frame {
    let mut buf = BitBuffer::new(AMBE72_BITS);
    for &[first, second] in INTERL_CELLS.iter() {
        buf.write_bit(matrix.get_flat(first));
        buf.write_bit(matrix.get_flat(second));
    }

    let mut frame = [0u8; 9];
    frame.copy_from_slice(&buf.into_bytes());
    frame
}

/// 72-bit frame -> matrix. Cells not carried by the frame (row 1 col 23, row 2 cols 11..,
/// row 3 cols 14..) are left zero.
pub fn ambe_deinterleave(frame: &Ambe72Frame) -> FrameMatrix {
    let mut bits = [0u8; AMBE72_BITS];
    BitBuffer::from_bytes(frame).to_bitarr(&mut bits);

    let mut matrix = FrameMatrix::new();
    for (pair, &[first, second]) in INTERL_CELLS.iter().enumerate() {
        matrix.set_flat(first, bits[2 * pair]);
        matrix.set_flat(second, bits[2 * pair + 1]);
    }
    matrix
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::components::matrix::MATRIX_CELLS;

    /// The cells that carry field bits: row 0 full, row 1 minus the pad column, C2 and C3 left-aligned
    fn populated_cells() -> BTreeSet<usize> {
        let mut cells = BTreeSet::new();
        for (row, width) in [(0usize, 24usize), (1, 23), (2, 11), (3, 14)] {
            for col in 0..width {
                cells.insert(row * MATRIX_COLS + col);
            }
        }
        cells
    }

    #[test]
    fn test_tables_cover_populated_cells_once() {
        let mut seen = BTreeSet::new();
        for &[first, second] in INTERL_CELLS.iter() {
            assert!(first < MATRIX_CELLS && second < MATRIX_CELLS);
            assert!(seen.insert(first), "cell {} read twice", first);
            assert!(seen.insert(second), "cell {} read twice", second);
        }
        assert_eq!(seen.len(), AMBE72_BITS);
        assert_eq!(seen, populated_cells());
        // Row 1 pad column is never transmitted
        assert!(!seen.contains(&(MATRIX_COLS + 23)));
    }

    #[test]
    fn test_matrix_roundtrip() {
        let mut matrix = FrameMatrix::new();
        for (n, &cell) in populated_cells().iter().enumerate() {
            matrix.set_flat(cell, ((n * 7 + n / 3) % 2) as u8);
        }
        let frame = ambe_interleave(&matrix);
        assert_eq!(ambe_deinterleave(&frame), matrix);
    }

    #[test]
    fn test_frame_roundtrip() {
        let frame: Ambe72Frame = [0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDE, 0xF0, 0x0F];
        assert_eq!(ambe_interleave(&ambe_deinterleave(&frame)), frame);
    }

    #[test]
    fn test_single_cell_position() {
        // Pair 0 first bit is row 0 col 23, the MSB of the frame
        let mut matrix = FrameMatrix::new();
        matrix.set(0, 23, 1);
        assert_eq!(ambe_interleave(&matrix), [0x80, 0, 0, 0, 0, 0, 0, 0, 0]);

        // Pair 35 second bit is row 3 col 0, the LSB of the frame
        let mut matrix = FrameMatrix::new();
        matrix.set(3, 0, 1);
        assert_eq!(ambe_interleave(&matrix), [0, 0, 0, 0, 0, 0, 0, 0, 0x01]);
    }

    #[test]
    fn test_unread_cells_ignored() {
        let mut matrix = FrameMatrix::new();
        matrix.set(1, 23, 1);
        matrix.set(2, 11, 1);
        matrix.set(3, 23, 1);
        assert_eq!(ambe_interleave(&matrix), [0u8; 9]);
    }
}

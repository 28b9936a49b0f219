//! 4x24 bit grid between FEC field encoding and interleaving.
//! Flat storage, cell index is `row * MATRIX_COLS + col`, one bit per byte.

pub const MATRIX_ROWS: usize = 4;
pub const MATRIX_COLS: usize = 24;
pub const MATRIX_CELLS: usize = MATRIX_ROWS * MATRIX_COLS;

#[derive(Clone, PartialEq, Eq)]
pub struct FrameMatrix {
    cells: [u8; MATRIX_CELLS],
}

impl FrameMatrix {
    pub fn new() -> Self {
        FrameMatrix { cells: [0; MATRIX_CELLS] }
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row * MATRIX_COLS + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, bit: u8) {
        debug_assert!(bit <= 1);
        self.cells[row * MATRIX_COLS + col] = bit;
    }

    #[inline]
    pub fn xor(&mut self, row: usize, col: usize, bit: u8) {
        self.cells[row * MATRIX_COLS + col] ^= bit;
    }

    /// Cell access by flat index, as addressed by the interleaver tables
    #[inline]
    pub fn get_flat(&self, index: usize) -> u8 {
        self.cells[index]
    }

    #[inline]
    pub fn set_flat(&mut self, index: usize, bit: u8) {
        self.cells[index] = bit;
    }

    /// Read `len` cells of `row` starting at `start_col` as an integer, `start_col` most significant.
    pub fn read_row_bits(&self, row: usize, start_col: usize, len: usize) -> u32 {
        assert!(len <= 32 && start_col + len <= MATRIX_COLS);
        (start_col..start_col + len).fold(0, |acc, col| (acc << 1) | self.get(row, col) as u32)
    }

    /// Write the low `len` bits of `value` into `row` starting at `start_col`, most significant bit first.
    pub fn write_row_bits(&mut self, row: usize, start_col: usize, len: usize, value: u32) {
        assert!(len <= 32 && start_col + len <= MATRIX_COLS);
        for i in 0..len {
            let bit = (value >> (len - 1 - i)) & 1;
            self.set(row, start_col + i, bit as u8);
        }
    }
}

impl Default for FrameMatrix {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FrameMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "FrameMatrix {{")?;
        for row in 0..MATRIX_ROWS {
            let line: String = (0..MATRIX_COLS)
                .map(|col| if self.get(row, col) == 1 { '1' } else { '0' })
                .collect();
            writeln!(f, "  {}: {}", row, line)?;
        }
        write!(f, "}}")
    }
}

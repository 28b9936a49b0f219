use ambe_codec::components::interleaver::INTERL_CELLS;
use ambe_codec::components::matrix::MATRIX_COLS;
use ambe_core::Ambe72Frame;
use rand::Rng;
use rand::seq::SliceRandom;

/// Frame bit positions that carry matrix cells of `row` within `cols`
pub fn frame_positions(row: usize, cols: std::ops::Range<usize>) -> Vec<usize> {
    let mut positions = Vec::new();
    for (pair, cells) in INTERL_CELLS.iter().enumerate() {
        for (half, &cell) in cells.iter().enumerate() {
            if cell / MATRIX_COLS == row && cols.contains(&(cell % MATRIX_COLS)) {
                positions.push(2 * pair + half);
            }
        }
    }
    positions
}

pub fn flip_frame_bit(frame: &mut Ambe72Frame, position: usize) {
    frame[position / 8] ^= 0x80 >> (position % 8);
}

/// Flip `count` distinct bits picked from `positions`
pub fn inject_errors<R: Rng>(rng: &mut R, frame: &mut Ambe72Frame, positions: &[usize], count: usize) {
    let mut positions = positions.to_vec();
    positions.shuffle(rng);
    for &p in positions.iter().take(count) {
        flip_frame_bit(frame, p);
    }
}

/// Random 7-byte parameter block with the unused trailing bits cleared
pub fn random_ambe49<R: Rng>(rng: &mut R) -> [u8; 7] {
    let mut block: [u8; 7] = rng.random();
    block[6] &= 0x80;
    block
}

//! Whitening of the C1 field (matrix row 1) with a keystream derived from C0 (row 0).
//! Scrambling and descrambling are the same operation.

use crate::components::matrix::FrameMatrix;

/// Number of keystream bits, one per C1 codeword column
pub const SCRAMB_LEN: usize = 23;

/// One step of the linear congruential generator, mod 2^16.
#[inline]
fn next_prng(prev: u16) -> u16 {
    prev.wrapping_mul(173).wrapping_add(13849)
}

/// Seed from the 12 data bits of the encoded C0 field, row 0 cols 23 down to 12 (col 23 most significant)
pub fn ambe_scramb_get_init(matrix: &FrameMatrix) -> u16 {
    let mut seed = 0u16;
    for col in (12..24).rev() {
        seed = (seed << 1) | matrix.get(0, col) as u16;
    }
    seed << 4
}

/// Fill `out` with keystream bits, out[0] being keystream element 1.
pub fn ambe_scramb_get_bits(init: u16, out: &mut [u8; SCRAMB_LEN]) {
    let mut state = init;
    for slot in out.iter_mut() {
        state = next_prng(state);
        *slot = (state >> 15) as u8;
    }
}

/// XOR the keystream into row 1, keystream element k landing on column 23 - k.
/// Column 23 (pad) is left untouched. Row 0 must hold the encoded C0 field.
pub fn ambe_scramb_bits(matrix: &mut FrameMatrix) {
    let mut keystream = [0u8; SCRAMB_LEN];
    ambe_scramb_get_bits(ambe_scramb_get_init(matrix), &mut keystream);
    for (k, &bit) in keystream.iter().enumerate() {
        matrix.xor(1, SCRAMB_LEN - 1 - k, bit);
    }
}

use ambe_core::Ambe49Bits;

use crate::components::golay;
use crate::components::matrix::{FrameMatrix, MATRIX_COLS};

/// AMBE49 field boundaries: (first bit, number of bits)
pub const C0_FIELD: (usize, usize) = (0, 12);
pub const C1_FIELD: (usize, usize) = (12, 12);
pub const C2_FIELD: (usize, usize) = (24, 11);
pub const C3_FIELD: (usize, usize) = (35, 14);

/// Matrix row 1 holds the 23-bit C1 codeword in cols 0..23, col 23 is padding
pub const C1_PAD_COL: usize = MATRIX_COLS - 1;

/// Field bits as an integer, the last bit of the field most significant
fn field_value(bits: &Ambe49Bits, (start, len): (usize, usize)) -> u16 {
    bits[start..start + len].iter().rev().fold(0u16, |acc, &bit| (acc << 1) | bit as u16)
}

fn set_field_value(bits: &mut Ambe49Bits, (start, len): (usize, usize), value: u16) {
    for i in 0..len {
        bits[start + i] = ((value >> i) & 1) as u8;
    }
}

/// Place the four AMBE49 fields into a fresh frame matrix.
///
/// Row 0: `[P e10..e0 d11..d0]`, C0 Golay codeword with its parity bit at col 0
/// Row 1: `[e10..e0 d11..d0 x]`, C1 Golay codeword, no parity
/// Row 2: bits 34 down to 24 at cols 0..11
/// Row 3: bits 48 down to 35 at cols 0..14
pub fn ambe_encode_fields(bits: &Ambe49Bits) -> FrameMatrix {
    let mut matrix = FrameMatrix::new();

    // C0: 12 data bits + 11 check bits + 1 parity bit
    let c0 = golay::golay2312_encode(field_value(bits, C0_FIELD));
    let c0 = c0 | (golay::golay_parity(c0) << 23);
    matrix.write_row_bits(0, 0, 24, c0);

    // C1: 12 data bits + 11 check bits
    let c1 = golay::golay2312_encode(field_value(bits, C1_FIELD));
    matrix.write_row_bits(1, 0, 23, c1);

    // C2, C3: unprotected
    for col in 0..C2_FIELD.1 {
        matrix.set(2, col, bits[C2_FIELD.0 + C2_FIELD.1 - 1 - col]);
    }
    for col in 0..C3_FIELD.1 {
        matrix.set(3, col, bits[C3_FIELD.0 + C3_FIELD.1 - 1 - col]);
    }

    matrix
}

/// Correct the C0 codeword in row 0 and write the corrected field back, so the
/// descrambler seeds from it. Returns the C0 data and the number of errors, a
/// parity mismatch on the corrected codeword counting as one.
pub fn ambe_decode_c0(matrix: &mut FrameMatrix) -> (u16, u32) {
    let received = matrix.read_row_bits(0, 0, 24);
    let (corrected, mut errors) = golay::golay2312_correct(received);

    let parity = golay::golay_parity(corrected);
    if parity != received >> 23 {
        tracing::trace!("ambe_decode_c0: parity mismatch on {:06x}", corrected);
        errors += 1;
    }

    matrix.write_row_bits(0, 0, 24, corrected | (parity << 23));
    ((corrected & golay::GOLAY_DATA_MASK) as u16, errors)
}

/// Decode the C1 codeword from row 1. Row 1 must be descrambled already.
pub fn ambe_decode_c1(matrix: &FrameMatrix) -> (u16, u32) {
    golay::golay2312_decode(matrix.read_row_bits(1, 0, 23))
}

/// Reassemble the AMBE49 bit vector from decoded C0/C1 data and the raw C2/C3 rows.
pub fn ambe_extract_fields(matrix: &FrameMatrix, c0: u16, c1: u16) -> Ambe49Bits {
    let mut bits = [0u8; 49];
    set_field_value(&mut bits, C0_FIELD, c0);
    set_field_value(&mut bits, C1_FIELD, c1);
    for col in 0..C2_FIELD.1 {
        bits[C2_FIELD.0 + C2_FIELD.1 - 1 - col] = matrix.get(2, col);
    }
    for col in 0..C3_FIELD.1 {
        bits[C3_FIELD.0 + C3_FIELD.1 - 1 - col] = matrix.get(3, col);
    }
    bits
}

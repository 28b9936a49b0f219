//! Binary Golay(23,12) code as used for the protected AMBE fields.
//! Codeword layout is [checkbits(11), data(12)], data in the low 12 bits.

/// Generator polynomial, LSB-first division form
pub const GOLAY_POLY: u32 = 0xAE3;
pub const GOLAY23_MASK: u32 = 0x7F_FFFF;
pub const GOLAY_DATA_MASK: u32 = 0x0FFF;

/// Compute the 23-bit codeword for the low 12 bits of `data`.
pub const fn golay2312_encode(data: u16) -> u32 {
    let data = data as u32 & GOLAY_DATA_MASK;
    let mut cw = data;
    let mut i = 0;
    while i < 12 {
        if cw & 1 != 0 {
            cw ^= GOLAY_POLY;
        }
        cw >>= 1;
        i += 1;
    }
    (cw << 12) | data
}

/// Even parity over the low 24 bits of a codeword
pub const fn golay_parity(cw: u32) -> u32 {
    let mut p = cw & 0xFF;
    p ^= (cw >> 8) & 0xFF;
    p ^= (cw >> 16) & 0xFF;
    p ^= p >> 4;
    p ^= p >> 2;
    p ^= p >> 1;
    p & 1
}

/// 11-bit syndrome of a received 23-bit word. Zero for valid codewords.
const fn syndrome(received: u32) -> usize {
    let received = received & GOLAY23_MASK;
    (((golay2312_encode((received & GOLAY_DATA_MASK) as u16) ^ received) >> 12) & 0x7FF) as usize
}

/// Minimum weight error pattern for every syndrome. The code is perfect, so each of the
/// 2048 syndromes belongs to exactly one pattern of weight 0..=3.
const fn build_syndrome_table() -> [u32; 2048] {
    let mut table = [0u32; 2048];
    let mut a = 0;
    while a < 23 {
        let ea = 1u32 << a;
        table[syndrome(ea)] = ea;
        let mut b = a + 1;
        while b < 23 {
            let eb = ea | (1u32 << b);
            table[syndrome(eb)] = eb;
            let mut c = b + 1;
            while c < 23 {
                let ec = eb | (1u32 << c);
                table[syndrome(ec)] = ec;
                c += 1;
            }
            b += 1;
        }
        a += 1;
    }
    table
}

pub const GOLAY_SYNDROME_TABLE: [u32; 2048] = build_syndrome_table();

/// Correct up to 3 bit errors in a received 23-bit word.
/// Returns the corrected codeword and the number of flipped bits.
/// Words with 4 or more errors decode to the nearest codeword, which is wrong.
pub fn golay2312_correct(received: u32) -> (u32, u32) {
    let received = received & GOLAY23_MASK;
    let error = GOLAY_SYNDROME_TABLE[syndrome(received)];
    (received ^ error, error.count_ones())
}

/// Decode a received 23-bit word into its 12 data bits and the number of corrected errors.
pub fn golay2312_decode(received: u32) -> (u16, u32) {
    let (corrected, errors) = golay2312_correct(received);
    ((corrected & GOLAY_DATA_MASK) as u16, errors)
}

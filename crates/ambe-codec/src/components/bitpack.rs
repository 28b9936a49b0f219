use ambe_core::{AMBE49_BITS, AMBE49_BYTES, Ambe49Bits, AmbeErr, BitBuffer, assert_warn, expect_len};

/// Expand a packed 7-byte AMBE parameter block into 49 bits, MSB first.
/// The low 7 bits of the last byte are not part of the block and are ignored.
pub fn unpack_ambe49(packed: &[u8]) -> Result<Ambe49Bits, AmbeErr> {
    expect_len!(packed, AMBE49_BYTES)?;
    assert_warn!(packed[AMBE49_BYTES - 1] & 0x7F == 0, "unpack_ambe49: unused trailing bits not zero");

    let mut bits = [0u8; AMBE49_BITS];
    BitBuffer::from_bytes(packed).to_bitarr(&mut bits);
    Ok(bits)
}

/// Pack 49 bits into 7 bytes, MSB first, unused trailing bits zero.
pub fn pack_ambe49(bits: &Ambe49Bits) -> [u8; AMBE49_BYTES] {
    let mut buf = BitBuffer::new(AMBE49_BYTES * 8);
    for &bit in bits.iter() {
        buf.write_bit(bit);
    }

    let mut packed = [0u8; AMBE49_BYTES];
    packed.copy_from_slice(&buf.into_bytes());
    packed
}

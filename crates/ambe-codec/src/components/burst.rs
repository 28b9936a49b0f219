use ambe_core::{AMBE72_BITS, AMBE72_BYTES, Ambe72Frame, AmbeErr, BitBuffer, SyncPattern, expect_len};

/// DMR voice burst payload: 108 voice bits, 48-bit centre field, 108 voice bits.
/// Three AMBE72 frames fill the voice bits back to back.
pub const BURST_BITS: usize = 264;
pub const BURST_BYTES: usize = BURST_BITS / 8;
pub const BURST_HALF_BITS: usize = 108;
pub const BURST_CENTRE_BITS: usize = 48;
pub const FRAMES_PER_BURST: usize = 3;

/// Pack three AMBE72 frames around the given centre field.
pub fn build_voice_burst(frames: &[Ambe72Frame; FRAMES_PER_BURST], sync: SyncPattern) -> [u8; BURST_BYTES] {
    let mut voice = BitBuffer::new(FRAMES_PER_BURST * AMBE72_BITS);
    for frame in frames.iter() {
        for &byte in frame.iter() {
            voice.write_bits(byte as u64, 8);
        }
    }
    voice.seek(0);

    let mut burst = BitBuffer::new(BURST_BITS);
    burst.copy_bits(&mut voice, BURST_HALF_BITS);
    burst.write_bits(sync.bits(), BURST_CENTRE_BITS);
    burst.copy_bits(&mut voice, BURST_HALF_BITS);
    tracing::trace!("build_voice_burst {:?}: {}", sync, burst.dump_hex());

    let mut out = [0u8; BURST_BYTES];
    out.copy_from_slice(&burst.into_bytes());
    out
}

/// Take the three AMBE72 frames out of a 33-byte voice burst. The centre field is skipped.
pub fn split_voice_burst(burst: &[u8]) -> Result<[Ambe72Frame; FRAMES_PER_BURST], AmbeErr> {
    expect_len!(burst, BURST_BYTES)?;

    let mut src = BitBuffer::from_bytes(burst);
    let mut voice = BitBuffer::new(FRAMES_PER_BURST * AMBE72_BITS);
    voice.copy_bits(&mut src, BURST_HALF_BITS);
    src.seek_rel(BURST_CENTRE_BITS as isize);
    voice.copy_bits(&mut src, BURST_HALF_BITS);

    let bytes = voice.into_bytes();
    let mut frames = [[0u8; AMBE72_BYTES]; FRAMES_PER_BURST];
    for (frame, chunk) in frames.iter_mut().zip(bytes.chunks_exact(AMBE72_BYTES)) {
        frame.copy_from_slice(chunk);
    }
    Ok(frames)
}

/// The 48-bit centre field of a voice burst, right-aligned
pub fn voice_burst_centre(burst: &[u8; BURST_BYTES]) -> u64 {
    let mut buf = BitBuffer::from_bytes(burst);
    buf.seek(BURST_HALF_BITS);
    buf.read_bits(BURST_CENTRE_BITS).unwrap_or(0)
}

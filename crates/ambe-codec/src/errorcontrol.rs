use ambe_core::{AMBE49_BYTES, AMBE72_BYTES, Ambe49Bits, Ambe72Frame, AmbeErr, BitBuffer, SyncPattern, expect_len};

use crate::components::burst::{self, BURST_BYTES, FRAMES_PER_BURST};
use crate::components::{bitpack, fec_fields, interleaver, scrambler};

/// Encodes a packed 49-bit AMBE parameter block (7 bytes) into an interleaved 72-bit frame (9 bytes).
/// Fails only if the input is not exactly 7 bytes long, before anything is computed.
pub fn encode_ambe49(ambe49: &[u8]) -> Result<Ambe72Frame, AmbeErr> {
    let bits = bitpack::unpack_ambe49(ambe49)?;
    tracing::trace!("encode_ambe49 ambe49: {}", BitBuffer::from_bitarr(&bits).dump_bin());

    // FEC, ambe49 -> matrix. C0 and C1 must be encoded before scrambling, which seeds from row 0
    let mut matrix = fec_fields::ambe_encode_fields(&bits);
    tracing::trace!("encode_ambe49 matrix: {:?}", matrix);

    // Scrambling of C1
    scrambler::ambe_scramb_bits(&mut matrix);

    // Interleaving, matrix -> ambe72
    let frame = interleaver::ambe_interleave(&matrix);
    tracing::trace!("encode_ambe49 ambe72: {}", BitBuffer::from_bytes(&frame).dump_hex());

    Ok(frame)
}

/// Result of decoding one 72-bit frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedAmbe {
    /// One bit per byte
    pub bits: Ambe49Bits,
    /// Same bits packed MSB-first into 7 bytes
    pub ambe49: [u8; AMBE49_BYTES],
    /// Bits corrected by the Golay decoders, plus one for a C0 parity mismatch
    pub errors: u32,
}

/// Inverse direction of the codec: 72-bit frame in, 49 parameter bits and an FEC error count out.
pub trait Ambe72Decoder {
    fn decode(&self, ambe72: &[u8]) -> Result<DecodedAmbe, AmbeErr>;
}

/// Syndrome-table Golay decoder, bit-layout compatible with encode_ambe49
#[derive(Debug, Default, Clone, Copy)]
pub struct GolayAmbeDecoder;

impl Ambe72Decoder for GolayAmbeDecoder {
    fn decode(&self, ambe72: &[u8]) -> Result<DecodedAmbe, AmbeErr> {
        decode_ambe72(ambe72)
    }
}

/// Decodes a 72-bit frame (9 bytes) back into its 49-bit parameter block, correcting
/// up to 3 bit errors in each protected field.
pub fn decode_ambe72(ambe72: &[u8]) -> Result<DecodedAmbe, AmbeErr> {
    expect_len!(ambe72, AMBE72_BYTES)?;
    let mut frame = [0u8; AMBE72_BYTES];
    frame.copy_from_slice(ambe72);
    tracing::trace!("decode_ambe72 ambe72: {}", BitBuffer::from_bytes(&frame).dump_hex());

    // De-interleaving, ambe72 -> matrix
    let mut matrix = interleaver::ambe_deinterleave(&frame);

    // C0 first, the descrambler seeds from the corrected row 0
    let (c0, c0_errors) = fec_fields::ambe_decode_c0(&mut matrix);
    scrambler::ambe_scramb_bits(&mut matrix);
    let (c1, c1_errors) = fec_fields::ambe_decode_c1(&matrix);
    tracing::trace!("decode_ambe72 matrix: {:?}", matrix);

    let bits = fec_fields::ambe_extract_fields(&matrix, c0, c1);
    let errors = c0_errors + c1_errors;
    if errors > 0 {
        tracing::debug!("decode_ambe72: corrected {} errors (c0 {}, c1 {})", errors, c0_errors, c1_errors);
    }

    Ok(DecodedAmbe {
        bits,
        ambe49: bitpack::pack_ambe49(&bits),
        errors,
    })
}

/// Like decode_ambe72, but rejects frames that needed more than `max_errors` corrections.
pub fn decode_ambe72_strict(decoder: &impl Ambe72Decoder, ambe72: &[u8], max_errors: u32) -> Result<DecodedAmbe, AmbeErr> {
    let decoded = decoder.decode(ambe72)?;
    if decoded.errors > max_errors {
        tracing::warn!("decode_ambe72_strict: {} errors exceeds limit {}", decoded.errors, max_errors);
        return Err(AmbeErr::TooManyErrors {
            errors: decoded.errors,
            limit: max_errors,
        });
    }
    Ok(decoded)
}

/// Encodes three AMBE parameter blocks and packs them into a 33-byte DMR voice burst.
/// All three blocks are validated before any encoding takes place.
pub fn encode_voice_burst(ambe49: [&[u8]; FRAMES_PER_BURST], sync: SyncPattern) -> Result<[u8; BURST_BYTES], AmbeErr> {
    for block in ambe49.iter() {
        expect_len!(block, AMBE49_BYTES)?;
    }

    let mut frames = [[0u8; AMBE72_BYTES]; FRAMES_PER_BURST];
    for (frame, block) in frames.iter_mut().zip(ambe49.iter()) {
        *frame = encode_ambe49(block)?;
    }
    Ok(burst::build_voice_burst(&frames, sync))
}

/// Decodes the three frames of a 33-byte DMR voice burst.
pub fn decode_voice_burst(decoder: &impl Ambe72Decoder, burst: &[u8]) -> Result<[DecodedAmbe; FRAMES_PER_BURST], AmbeErr> {
    let [f1, f2, f3] = burst::split_voice_burst(burst)?;
    Ok([decoder.decode(&f1)?, decoder.decode(&f2)?, decoder.decode(&f3)?])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_rejects_bad_length() {
        assert_eq!(encode_ambe49(&[0u8; 6]), Err(AmbeErr::InvalidInputLength { expected: 7, found: 6 }));
        assert_eq!(encode_ambe49(&[]), Err(AmbeErr::InvalidInputLength { expected: 7, found: 0 }));
    }

    #[test]
    fn test_decode_rejects_bad_length() {
        assert_eq!(
            decode_ambe72(&[0u8; 7]).unwrap_err(),
            AmbeErr::InvalidInputLength { expected: 9, found: 7 }
        );
    }

    #[test]
    fn test_encode_decode() {
        let input = [0xDE, 0xAD, 0xBE, 0xEF, 0x01, 0x23, 0x80];
        let frame = encode_ambe49(&input).unwrap();
        let decoded = GolayAmbeDecoder.decode(&frame).unwrap();
        assert_eq!(decoded.ambe49, input);
        assert_eq!(decoded.errors, 0);
    }

    #[test]
    fn test_decoder_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GolayAmbeDecoder>();
        assert_eq!(std::mem::size_of::<GolayAmbeDecoder>(), 0);
    }

    #[test]
    fn test_strict_decode_limit() {
        let input = [0x0F, 0x1E, 0x2D, 0x3C, 0x4B, 0x5A, 0x00];
        let mut frame = encode_ambe49(&input).unwrap();
        // Frame bit 0 is row 0 col 23, inside the C0 codeword
        frame[0] ^= 0x80;

        let decoded = decode_ambe72_strict(&GolayAmbeDecoder, &frame, 1).unwrap();
        assert_eq!(decoded.ambe49, input);
        assert_eq!(decoded.errors, 1);
        assert_eq!(
            decode_ambe72_strict(&GolayAmbeDecoder, &frame, 0),
            Err(AmbeErr::TooManyErrors { errors: 1, limit: 0 })
        );
    }

    #[test]
    fn test_voice_burst_roundtrip() {
        let blocks: [[u8; 7]; 3] = [
            [0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x80],
            [0x66, 0x77, 0x88, 0x99, 0xAA, 0xBB, 0x00],
            [0xCC, 0xDD, 0xEE, 0xFF, 0x01, 0x02, 0x80],
        ];
        let burst = encode_voice_burst([&blocks[0], &blocks[1], &blocks[2]], SyncPattern::MsVoice).unwrap();
        let decoded = decode_voice_burst(&GolayAmbeDecoder, &burst).unwrap();
        for (d, block) in decoded.iter().zip(blocks.iter()) {
            assert_eq!(&d.ambe49, block);
            assert_eq!(d.errors, 0);
        }
    }

    #[test]
    fn test_voice_burst_validates_all_blocks_first() {
        let good = [0u8; 7];
        let bad = [0u8; 8];
        assert_eq!(
            encode_voice_burst([&good, &good, &bad], SyncPattern::BsVoice),
            Err(AmbeErr::InvalidInputLength { expected: 7, found: 8 })
        );
    }
}

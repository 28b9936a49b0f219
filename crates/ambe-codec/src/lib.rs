//! AMBE 49-bit to 72-bit frame codec for DMR voice
//!
//! Encoding runs four stages on one vocoder frame:
//! - bit unpacking of the 7-byte parameter block
//! - FEC field encoding into a 4x24 matrix (Golay(23,12) with and without parity, raw fields)
//! - scrambling of the second protected field
//! - interleaving into the 9-byte transmission frame
//!
//! The reverse direction is provided by [`GolayAmbeDecoder`], and three frames can be
//! placed into a DMR voice burst.

pub mod components;
pub mod errorcontrol;

pub use errorcontrol::{
    Ambe72Decoder, DecodedAmbe, GolayAmbeDecoder, decode_ambe72, decode_ambe72_strict, decode_voice_burst, encode_ambe49,
    encode_voice_burst,
};

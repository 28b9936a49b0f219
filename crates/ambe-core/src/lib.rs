//! Core utilities for the AMBE frame codec
//!
//! This crate provides fundamental types and utilities used across the workspace:
//! - BitBuffer for bit-level frame manipulation
//! - AmbeErr, the error type shared by all crates
//! - DMR voice burst types (SyncPattern)
//! - Logging setup and debug utilities

pub mod ambe_err;
pub mod bitbuffer;
pub mod debug;
pub mod dmr_types;

// Re-export commonly used items
pub use ambe_err::AmbeErr;
pub use bitbuffer::BitBuffer;
pub use dmr_types::*;

/// Number of AMBE parameter bits carried by one vocoder frame
pub const AMBE49_BITS: usize = 49;
/// Packed size of an AMBE parameter block, last byte carries 1 bit
pub const AMBE49_BYTES: usize = 7;
/// Number of bits in an interleaved, FEC protected AMBE frame
pub const AMBE72_BITS: usize = 72;
pub const AMBE72_BYTES: usize = 9;

/// One bit per byte, as produced by BitBuffer::to_bitarr
pub type Ambe49Bits = [u8; AMBE49_BITS];
pub type Ambe72Frame = [u8; AMBE72_BYTES];

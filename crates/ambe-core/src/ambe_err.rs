use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AmbeErr {
    /// Input buffer does not have the fixed size required by the operation
    #[error("invalid input length: expected {expected} bytes, found {found}")]
    InvalidInputLength { expected: usize, found: usize },

    #[error("invalid hex digit at position {position}")]
    InvalidHex { position: usize },

    /// Frame decoded, but more FEC corrections were needed than the caller allows
    #[error("frame decoded with {errors} bit errors, limit is {limit}")]
    TooManyErrors { errors: u32, limit: u32 },
}

/// Checks whether a buffer has the expected length. If not, returns AmbeErr::InvalidInputLength
#[macro_export]
macro_rules! expect_len {
    ($buf:expr, $expected:expr) => {{
        let found = $buf.len();
        if found == $expected {
            Ok(())
        } else {
            Err($crate::AmbeErr::InvalidInputLength {
                expected: $expected,
                found,
            })
        }
    }};
}

//! Error types for the SNOW 3G algorithms

use thiserror::Error;

/// SNOW 3G / UEA2 / UIA2 error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Snow3gError {
    /// Key slice is not 128 bits
    #[error("Invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength {
        /// Required length in bytes
        expected: usize,
        /// Supplied length in bytes
        actual: usize,
    },
    /// BEARER does not fit in 5 bits
    #[error("Invalid bearer {0}: must be in 0..=31")]
    InvalidBearer(u32),
    /// Input buffer is shorter than the declared bit length
    #[error("Insufficient data: {bit_length} bits need {needed} bytes, got {actual}")]
    InsufficientData {
        /// Declared message length in bits
        bit_length: u64,
        /// Bytes required to hold `bit_length` bits
        needed: u64,
        /// Bytes supplied
        actual: usize,
    },
}

/// Result type for SNOW 3G operations
pub type Snow3gResult<T> = Result<T, Snow3gError>;

impl From<Snow3gError> for snow3g_common::Error {
    fn from(err: Snow3gError) -> Self {
        snow3g_common::Error::Crypto(err.to_string())
    }
}

/// Checks that `data` holds at least `bit_length` bits.
pub(crate) fn check_data_length(data: &[u8], bit_length: u64) -> Snow3gResult<usize> {
    let needed = bit_length.div_ceil(8);
    if (data.len() as u64) < needed {
        return Err(Snow3gError::InsufficientData {
            bit_length,
            needed,
            actual: data.len(),
        });
    }
    // needed <= data.len(), so it fits in usize
    Ok(needed as usize)
}

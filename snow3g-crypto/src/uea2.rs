//! UEA2 - the 3GPP confidentiality algorithm f8 built on SNOW 3G
//!
//! Reference: ETSI/SAGE UEA2 & UIA2 specification, Version 2.1, §3

use snow3g_common::config::MAX_BEARER;
use snow3g_common::{CipheringConfig, Direction};

use crate::error::{check_data_length, Snow3gError, Snow3gResult};
use crate::field::mask8bit;
use crate::snow3g::{load_key, Snow3g};
use crate::KEY_SIZE;

/// A UEA2 ciphering context bound to one (CK, COUNT, BEARER, DIRECTION).
///
/// Encryption and decryption are the same operation. Each call to [`Uea2::f8`]
/// consumes fresh keystream, so a context must not be reused for a second
/// message under the same COUNT.
#[derive(Debug, Clone)]
pub struct Uea2 {
    snow3g: Snow3g,
}

impl Uea2 {
    /// Create a ciphering context.
    ///
    /// # Arguments
    /// * `ck` - 128-bit confidentiality key
    /// * `count` - 32-bit COUNT-C, frame dependent input
    /// * `bearer` - 5-bit bearer identity
    /// * `direction` - direction of transmission
    pub fn new(ck: &[u8; KEY_SIZE], count: u32, bearer: u32, direction: Direction) -> Snow3gResult<Self> {
        if bearer > u32::from(MAX_BEARER) {
            return Err(Snow3gError::InvalidBearer(bearer));
        }

        let k = load_key(ck);
        let iv = build_iv(count, bearer, direction);
        tracing::debug!(count, bearer, %direction, "UEA2 context initialized");

        Ok(Self {
            snow3g: Snow3g::new(&k, &iv),
        })
    }

    /// Create a ciphering context from a key slice, which must be 16 bytes.
    pub fn from_slice(ck: &[u8], count: u32, bearer: u32, direction: Direction) -> Snow3gResult<Self> {
        let ck: &[u8; KEY_SIZE] = ck.try_into().map_err(|_| Snow3gError::InvalidKeyLength {
            expected: KEY_SIZE,
            actual: ck.len(),
        })?;
        Self::new(ck, count, bearer, direction)
    }

    /// Create a ciphering context from configuration.
    pub fn from_config(config: &CipheringConfig) -> Snow3gResult<Self> {
        Self::new(&config.key, config.count, u32::from(config.bearer), config.direction)
    }

    /// Apply f8 to the first `bit_length` bits of `data`.
    ///
    /// Returns `ceil(bit_length / 8)` bytes. Bits past `bit_length` in the
    /// last byte are cleared.
    pub fn f8(&mut self, data: &[u8], bit_length: u32) -> Snow3gResult<Vec<u8>> {
        let byte_length = check_data_length(data, u64::from(bit_length))?;

        tracing::trace!(bit_length, "UEA2 f8");
        let mut output = data[..byte_length].to_vec();
        self.apply_keystream(&mut output);

        let trailing_bits = bit_length % 8;
        if trailing_bits > 0 {
            if let Some(last) = output.last_mut() {
                *last &= mask8bit(trailing_bits);
            }
        }

        Ok(output)
    }

    /// XOR the next `data.len()` bytes of keystream into `data` in place.
    pub fn apply_keystream(&mut self, data: &mut [u8]) {
        let keystream = self.snow3g.generate_keystream(data.len().div_ceil(4));
        for (byte, ks) in data.iter_mut().zip(keystream.iter().flat_map(|w| w.to_be_bytes())) {
            *byte ^= ks;
        }
    }

    /// Encrypt `bit_length` bits of `data` (alias of [`Uea2::f8`]).
    pub fn encrypt(&mut self, data: &[u8], bit_length: u32) -> Snow3gResult<Vec<u8>> {
        self.f8(data, bit_length)
    }

    /// Decrypt `bit_length` bits of `data` (alias of [`Uea2::f8`]).
    pub fn decrypt(&mut self, data: &[u8], bit_length: u32) -> Snow3gResult<Vec<u8>> {
        self.f8(data, bit_length)
    }
}

/// Build the f8 IV.
///
/// ```text
/// IV[3] = COUNT
/// IV[2] = BEARER || DIRECTION || 0 (26 bits)
/// IV[1] = IV[3]
/// IV[0] = IV[2]
/// ```
fn build_iv(count: u32, bearer: u32, direction: Direction) -> [u32; 4] {
    let upper = (bearer << 27) | (direction.bit() << 26);
    [upper, count, upper, count]
}

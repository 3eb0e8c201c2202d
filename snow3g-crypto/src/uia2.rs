//! UIA2 - the 3GPP integrity algorithm f9 built on SNOW 3G
//!
//! Reference: ETSI/SAGE UEA2 & UIA2 specification, Version 2.1, §4

use std::fmt;

use snow3g_common::{Direction, HexDump, IntegrityConfig};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{check_data_length, Snow3gError, Snow3gResult};
use crate::field::{mul64, F9_POLY};
use crate::snow3g::{load_key, Snow3g};
use crate::KEY_SIZE;

/// MAC size in bytes (32 bits)
pub const MAC_SIZE: usize = 4;

/// A UIA2 integrity context bound to one (IK, COUNT, FRESH, DIRECTION).
///
/// The five keystream words f9 needs are derived once at construction, so
/// the same context can hash any number of messages. The derived values are
/// wiped when the context is dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Uia2 {
    p: u64,
    q: u64,
    z5: u32,
    #[zeroize(skip)]
    count: u32,
    #[zeroize(skip)]
    fresh: u32,
    #[zeroize(skip)]
    direction: Direction,
}

impl Uia2 {
    /// Create an integrity context.
    ///
    /// # Arguments
    /// * `ik` - 128-bit integrity key
    /// * `count` - 32-bit COUNT-I
    /// * `fresh` - 32-bit random value chosen by the network
    /// * `direction` - direction of transmission
    pub fn new(ik: &[u8; KEY_SIZE], count: u32, fresh: u32, direction: Direction) -> Self {
        let k = load_key(ik);
        let iv = build_iv(count, fresh, direction);

        let mut snow3g = Snow3g::new(&k, &iv);
        let mut z = [0u32; 5];
        snow3g.fill_keystream(&mut z);

        let uia2 = Self {
            p: (u64::from(z[0]) << 32) | u64::from(z[1]),
            q: (u64::from(z[2]) << 32) | u64::from(z[3]),
            z5: z[4],
            count,
            fresh,
            direction,
        };
        z.zeroize();

        tracing::debug!(count, fresh, %direction, "UIA2 context initialized");
        uia2
    }

    /// Create an integrity context from a key slice, which must be 16 bytes.
    pub fn from_slice(ik: &[u8], count: u32, fresh: u32, direction: Direction) -> Snow3gResult<Self> {
        let ik: &[u8; KEY_SIZE] = ik.try_into().map_err(|_| Snow3gError::InvalidKeyLength {
            expected: KEY_SIZE,
            actual: ik.len(),
        })?;
        Ok(Self::new(ik, count, fresh, direction))
    }

    /// Create an integrity context from configuration.
    pub fn from_config(config: &IntegrityConfig) -> Snow3gResult<Self> {
        Ok(Self::new(&config.key, config.count, config.fresh, config.direction))
    }

    /// Compute MAC-I over the first `bit_length` bits of `data`.
    ///
    /// Bits past `bit_length` never influence the result.
    pub fn f9(&self, data: &[u8], bit_length: u64) -> Snow3gResult<[u8; MAC_SIZE]> {
        check_data_length(data, bit_length)?;

        // D counts the message blocks plus the length block
        let d = if bit_length % 64 == 0 {
            bit_length / 64 + 1
        } else {
            bit_length / 64 + 2
        };

        let mut eval = 0u64;
        for i in 0..d - 1 {
            let block_bits = (bit_length - 64 * i).min(64) as u32;
            let m = message_block(data, i as usize, block_bits);
            eval = mul64(eval ^ m, self.p, F9_POLY);
        }

        eval ^= bit_length;
        eval = mul64(eval, self.q, F9_POLY);

        let mac = (((eval >> 32) as u32) ^ self.z5).to_be_bytes();
        tracing::trace!(bit_length, blocks = d - 1, mac = %HexDump(&mac), "UIA2 f9");
        Ok(mac)
    }

    /// Compute MAC-I (alias of [`Uia2::f9`]).
    pub fn hash(&self, data: &[u8], bit_length: u64) -> Snow3gResult<[u8; MAC_SIZE]> {
        self.f9(data, bit_length)
    }

    /// Check a received MAC-I against the one computed over `data`.
    ///
    /// The comparison runs in constant time. A tag that is not
    /// [`MAC_SIZE`] bytes long never matches.
    pub fn verify(&self, data: &[u8], bit_length: u64, tag: &[u8]) -> Snow3gResult<bool> {
        let expected = self.f9(data, bit_length)?;
        let valid: bool = expected[..].ct_eq(tag).into();
        if !valid {
            tracing::debug!(count = self.count, bit_length, "UIA2 MAC mismatch");
        }
        Ok(valid)
    }
}

impl fmt::Debug for Uia2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Uia2")
            .field("count", &self.count)
            .field("fresh", &self.fresh)
            .field("direction", &self.direction)
            .finish_non_exhaustive()
    }
}

/// Build the f9 IV.
///
/// ```text
/// IV[3] = COUNT
/// IV[2] = FRESH
/// IV[1] = COUNT ^ (DIRECTION << 31)
/// IV[0] = FRESH ^ (DIRECTION << 15)
/// ```
fn build_iv(count: u32, fresh: u32, direction: Direction) -> [u32; 4] {
    let dir = direction.bit();
    [fresh ^ (dir << 15), count ^ (dir << 31), fresh, count]
}

/// Read message block `index` as a big-endian word, keeping only its first
/// `bits` bits (1..=64).
fn message_block(data: &[u8], index: usize, bits: u32) -> u64 {
    let start = index * 8;
    let len = bits.div_ceil(8) as usize;

    let mut block = [0u8; 8];
    block[..len].copy_from_slice(&data[start..start + len]);
    u64::from_be_bytes(block) & (u64::MAX << (64 - bits))
}

//! NEA1 (128-EEA1) ciphering
//!
//! 128-EEA1 is UEA2 applied to whole octets with the BEARER and DIRECTION
//! of the 5G/LTE security context.
//!
//! Reference: 3GPP TS 33.401 Annex B.1.2, TS 33.501 Annex D.2.2

use snow3g_common::Direction;

use crate::error::Snow3gResult;
use crate::uea2::Uea2;
use crate::KEY_SIZE;

/// NEA1 encryption of `data` in place.
///
/// # Parameters
/// - `count`: 32-bit counter value (NAS COUNT or PDCP COUNT)
/// - `bearer`: 5-bit bearer identity (0-31)
/// - `direction`: direction of transmission
/// - `key`: 128-bit encryption key (KNASenc or KUPenc)
/// - `data`: Data to encrypt/decrypt (modified in place)
pub fn nea1_encrypt(
    count: u32,
    bearer: u8,
    direction: Direction,
    key: &[u8; KEY_SIZE],
    data: &mut [u8],
) -> Snow3gResult<()> {
    let mut uea2 = Uea2::new(key, count, u32::from(bearer), direction)?;
    uea2.apply_keystream(data);
    Ok(())
}

/// NEA1 decryption (same as encryption).
#[inline]
pub fn nea1_decrypt(
    count: u32,
    bearer: u8,
    direction: Direction,
    key: &[u8; KEY_SIZE],
    data: &mut [u8],
) -> Snow3gResult<()> {
    nea1_encrypt(count, bearer, direction, key, data)
}

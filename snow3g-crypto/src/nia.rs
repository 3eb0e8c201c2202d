//! NIA1 (128-EIA1) integrity
//!
//! 128-EIA1 is UIA2 with FRESH built from BEARER: `FRESH = BEARER || 0^27`.
//!
//! Reference: 3GPP TS 33.401 Annex B.2.2, TS 33.501 Annex D.3.2

use snow3g_common::config::MAX_BEARER;
use snow3g_common::Direction;

use crate::error::{Snow3gError, Snow3gResult};
use crate::uia2::{Uia2, MAC_SIZE};
use crate::KEY_SIZE;

/// NIA1 MAC over every bit of `data`.
///
/// # Parameters
/// - `count`: 32-bit counter value (NAS COUNT or PDCP COUNT)
/// - `bearer`: 5-bit bearer identity (0-31)
/// - `direction`: direction of transmission
/// - `key`: 128-bit integrity key (`KNASint` or `KUPint`)
/// - `data`: Message data to authenticate
pub fn nia1_compute_mac(
    count: u32,
    bearer: u8,
    direction: Direction,
    key: &[u8; KEY_SIZE],
    data: &[u8],
) -> Snow3gResult<[u8; MAC_SIZE]> {
    let bit_length = data.len() as u64 * 8;
    nia1_compute_mac_bits(count, bearer, direction, key, data, bit_length)
}

/// NIA1 MAC over the first `bit_length` bits of `data`.
pub fn nia1_compute_mac_bits(
    count: u32,
    bearer: u8,
    direction: Direction,
    key: &[u8; KEY_SIZE],
    data: &[u8],
    bit_length: u64,
) -> Snow3gResult<[u8; MAC_SIZE]> {
    if bearer > MAX_BEARER {
        return Err(Snow3gError::InvalidBearer(u32::from(bearer)));
    }
    let fresh = u32::from(bearer) << 27;
    Uia2::new(key, count, fresh, direction).f9(data, bit_length)
}

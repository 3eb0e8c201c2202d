//! SNOW 3G and the 3GPP confidentiality and integrity algorithms built on it
//!
//! - [`Snow3g`]: the word-oriented keystream generator
//! - [`Uea2`]: f8 confidentiality (UEA2, 128-EEA1 via [`nea`])
//! - [`Uia2`]: f9 integrity (UIA2, 128-EIA1 via [`nia`])
//!
//! Reference: ETSI/SAGE SNOW 3G specification, Version 1.1 and
//! UEA2 & UIA2 specification, Version 2.1

pub mod error;
pub mod field;
pub mod nea;
pub mod nia;
pub mod sbox;
pub mod snow3g;
pub mod uea2;
pub mod uia2;

pub use error::{Snow3gError, Snow3gResult};
pub use snow3g::Snow3g;
pub use snow3g_common::Direction;
pub use uea2::Uea2;
pub use uia2::{Uia2, MAC_SIZE};

/// Key size in bytes (128 bits)
pub const KEY_SIZE: usize = 16;

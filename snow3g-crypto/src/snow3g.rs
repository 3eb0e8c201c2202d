//! SNOW 3G stream cipher
//!
//! SNOW 3G is a word-oriented stream cipher used in the 3GPP confidentiality
//! and integrity algorithms (UEA2/UIA2 for UMTS, 128-EEA1/128-EIA1 for LTE/5G).
//! The generator consists of a 16-cell LFSR over GF(2^32) and a 3-register FSM.
//!
//! Reference: ETSI/SAGE SNOW 3G specification, Version 1.1 (3GPP TS 35.216)

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::field::{div_alpha, mul_alpha};
use crate::sbox::{s1, s2};

/// Number of 32-bit cells in the LFSR
pub const LFSR_SIZE: usize = 16;

/// Number of clocks run by [`Snow3g::initialize`]
pub const INIT_ROUNDS: usize = 32;

/// Linear feedback shift register, S0 oldest and S15 newest.
#[derive(Clone, Default, Zeroize)]
struct Lfsr {
    cells: [u32; LFSR_SIZE],
}

impl Lfsr {
    /// Feedback word for the next S15, without the FSM contribution.
    #[inline]
    fn feedback(&self) -> u32 {
        let s0 = self.cells[0];
        let s11 = self.cells[11];
        ((s0 << 8) & 0xffff_ff00)
            ^ mul_alpha((s0 >> 24) as u8)
            ^ self.cells[2]
            ^ ((s11 >> 8) & 0x00ff_ffff)
            ^ div_alpha((s11 & 0xff) as u8)
    }

    /// Shift every cell down one index and append `v` as the new S15.
    #[inline]
    fn shift_in(&mut self, v: u32) {
        self.cells.copy_within(1.., 0);
        self.cells[LFSR_SIZE - 1] = v;
    }

    /// Clock in initialization mode, folding the FSM output `f` into the feedback.
    fn clock_initialization_mode(&mut self, f: u32) {
        let v = self.feedback() ^ f;
        self.shift_in(v);
    }

    /// Clock in keystream mode.
    fn clock_keystream_mode(&mut self) {
        let v = self.feedback();
        self.shift_in(v);
    }
}

/// Finite state machine registers R1, R2, R3.
#[derive(Clone, Default, Zeroize)]
struct Fsm {
    r1: u32,
    r2: u32,
    r3: u32,
}

impl Fsm {
    /// Clock the FSM against LFSR cells S15 and S5 and return F.
    ///
    /// All three registers are updated from their previous values.
    #[inline]
    fn clock(&mut self, s15: u32, s5: u32) -> u32 {
        let f = s15.wrapping_add(self.r1) ^ self.r2;
        let r = self.r2.wrapping_add(self.r3 ^ s5);
        self.r3 = s2(self.r2);
        self.r2 = s1(self.r1);
        self.r1 = r;
        f
    }
}

/// Lifecycle of an initialized engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Initialization clocks done, the discard clock is still pending
    Initialized,
    /// At least one keystream request has been served
    Streaming,
}

/// SNOW 3G keystream generator.
///
/// One instance serves exactly one (key, IV) pair. The state is wiped on drop.
///
/// ```
/// use snow3g_crypto::Snow3g;
///
/// let key = [0x2BD6459F, 0x82C5B300, 0x952C4910, 0x4881FF48];
/// let iv = [0xEA024714, 0xAD5C4D84, 0xDF1F9B25, 0x1C0BF45F];
/// let mut snow = Snow3g::new(&key, &iv);
/// assert_eq!(snow.generate_keystream(2), vec![0xABEE9704, 0x7AC31373]);
/// ```
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Snow3g {
    lfsr: Lfsr,
    fsm: Fsm,
    #[zeroize(skip)]
    phase: Phase,
}

impl Snow3g {
    /// Create a SNOW 3G instance initialized with `key` and `iv`.
    pub fn new(key: &[u32; 4], iv: &[u32; 4]) -> Self {
        let mut snow = Snow3g {
            lfsr: Lfsr::default(),
            fsm: Fsm::default(),
            phase: Phase::Initialized,
        };
        snow.initialize(key, iv);
        snow
    }

    /// Create an instance from a 16-byte key and a 16-byte IV.
    ///
    /// Word 0 of each is taken from the first four bytes, big-endian, which
    /// is how the SNOW 3G test data lists K and IV.
    pub fn from_bytes(key: &[u8; 16], iv: &[u8; 16]) -> Self {
        Self::new(&be_words(key), &be_words(iv))
    }

    /// (Re)initialize with `key` and `iv`, discarding all previous state.
    pub fn initialize(&mut self, key: &[u32; 4], iv: &[u32; 4]) {
        let [k0, k1, k2, k3] = *key;
        let one = 0xffff_ffff;

        self.lfsr.cells = [
            k0 ^ one,
            k1 ^ one,
            k2 ^ one,
            k3 ^ one,
            k0,
            k1,
            k2,
            k3,
            k0 ^ one,
            k1 ^ one ^ iv[3],
            k2 ^ one ^ iv[2],
            k3 ^ one,
            k0 ^ iv[1],
            k1,
            k2,
            k3 ^ iv[0],
        ];
        self.fsm = Fsm::default();

        for _ in 0..INIT_ROUNDS {
            let f = self.clock_fsm();
            self.lfsr.clock_initialization_mode(f);
        }
        self.phase = Phase::Initialized;
    }

    #[inline]
    fn clock_fsm(&mut self) -> u32 {
        self.fsm.clock(self.lfsr.cells[15], self.lfsr.cells[5])
    }

    /// Produce the next keystream word.
    ///
    /// The first request after initialization performs the mandatory
    /// discard clock before any word is emitted.
    pub fn next_word(&mut self) -> u32 {
        if self.phase == Phase::Initialized {
            self.clock_fsm();
            self.lfsr.clock_keystream_mode();
            self.phase = Phase::Streaming;
        }

        let f = self.clock_fsm();
        let z = f ^ self.lfsr.cells[0];
        self.lfsr.clock_keystream_mode();
        z
    }

    /// Fill `keystream` with the next words of keystream.
    pub fn fill_keystream(&mut self, keystream: &mut [u32]) {
        tracing::trace!(words = keystream.len(), "generating SNOW 3G keystream");
        for ks in keystream.iter_mut() {
            *ks = self.next_word();
        }
    }

    /// Generate the next `n` keystream words.
    ///
    /// Consecutive calls continue the same stream: `a` words followed by `b`
    /// words equal `a + b` words from a fresh instance.
    pub fn generate_keystream(&mut self, n: usize) -> Vec<u32> {
        let mut keystream = vec![0u32; n];
        self.fill_keystream(&mut keystream);
        keystream
    }

    /// Current FSM registers as `[R1, R2, R3]`.
    pub fn fsm_registers(&self) -> [u32; 3] {
        [self.fsm.r1, self.fsm.r2, self.fsm.r3]
    }
}

impl Iterator for Snow3g {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_word())
    }
}

impl fmt::Debug for Snow3g {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Snow3g")
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

/// Split 16 bytes into four big-endian words, word 0 first.
pub(crate) fn be_words(bytes: &[u8; 16]) -> [u32; 4] {
    std::array::from_fn(|i| {
        u32::from_be_bytes([bytes[4 * i], bytes[4 * i + 1], bytes[4 * i + 2], bytes[4 * i + 3]])
    })
}

/// Load a 128-bit CK/IK for SNOW 3G.
///
/// The first four key bytes become `k[3]`, the last four `k[0]`.
pub fn load_key(key: &[u8; 16]) -> [u32; 4] {
    let mut k = be_words(key);
    k.reverse();
    k
}

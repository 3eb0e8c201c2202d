//! Protocol types shared by the UEA2 and UIA2 contexts

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Direction of transmission.
///
/// Only the least significant bit reaches the IV: uplink is `0`, downlink is `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// UE to network
    #[default]
    Uplink,
    /// Network to UE
    Downlink,
}

impl Direction {
    /// Returns the 1-bit DIRECTION value.
    #[inline]
    pub fn bit(self) -> u32 {
        match self {
            Direction::Uplink => 0,
            Direction::Downlink => 1,
        }
    }

    /// Builds a direction from the least significant bit of `value`.
    pub fn from_bit(value: u32) -> Self {
        if value & 0x1 == 0 {
            Direction::Uplink
        } else {
            Direction::Downlink
        }
    }
}

impl From<Direction> for u32 {
    fn from(direction: Direction) -> Self {
        direction.bit()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Uplink => write!(f, "uplink"),
            Direction::Downlink => write!(f, "downlink"),
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "uplink" | "ul" | "0" => Ok(Direction::Uplink),
            "downlink" | "dl" | "1" => Ok(Direction::Downlink),
            _ => Err(format!("unknown direction: {s}")),
        }
    }
}

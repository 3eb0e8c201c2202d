//! Security context configuration
//!
//! YAML-backed descriptions of a ciphering (UEA2) context and an integrity
//! (UIA2) context. Keys are written as hex strings. The crypto crate turns
//! these into live contexts with `Uea2::from_config` / `Uia2::from_config`.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::types::Direction;

/// Largest BEARER value that fits the 5-bit field.
pub const MAX_BEARER: u8 = 0x1F;

/// Parameters of a UEA2 (f8) ciphering context.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipheringConfig {
    /// 128-bit confidentiality key CK
    #[serde(with = "hex::serde")]
    pub key: [u8; 16],
    /// 32-bit frame dependent COUNT-C
    pub count: u32,
    /// 5-bit bearer identity
    pub bearer: u8,
    /// Direction of transmission
    #[serde(default)]
    pub direction: Direction,
}

/// Parameters of a UIA2 (f9) integrity context.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrityConfig {
    /// 128-bit integrity key IK
    #[serde(with = "hex::serde")]
    pub key: [u8; 16],
    /// 32-bit frame dependent COUNT-I
    pub count: u32,
    /// 32-bit per-connection random value
    pub fresh: u32,
    /// Direction of transmission
    #[serde(default)]
    pub direction: Direction,
}

// Key bytes stay out of Debug output so configs can be logged safely.
impl fmt::Debug for CipheringConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipheringConfig")
            .field("key", &"<redacted>")
            .field("count", &format_args!("{:#010x}", self.count))
            .field("bearer", &self.bearer)
            .field("direction", &self.direction)
            .finish()
    }
}

impl fmt::Debug for IntegrityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntegrityConfig")
            .field("key", &"<redacted>")
            .field("count", &format_args!("{:#010x}", self.count))
            .field("fresh", &format_args!("{:#010x}", self.fresh))
            .field("direction", &self.direction)
            .finish()
    }
}

/// A pair of optional ciphering and integrity contexts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// UEA2 context, if ciphering is enabled
    #[serde(default)]
    pub ciphering: Option<CipheringConfig>,
    /// UIA2 context, if integrity protection is enabled
    #[serde(default)]
    pub integrity: Option<IntegrityConfig>,
}

impl SecurityConfig {
    /// Loads a security configuration from a YAML string.
    ///
    /// # Example
    ///
    /// ```
    /// use snow3g_common::{Direction, SecurityConfig};
    ///
    /// let yaml = r#"
    /// ciphering:
    ///   key: 2bd6459f82c5b300952c49104881ff48
    ///   count: 0x72A4F20F
    ///   bearer: 12
    ///   direction: downlink
    /// "#;
    /// let config = SecurityConfig::from_yaml(yaml).unwrap();
    /// let ciphering = config.ciphering.unwrap();
    /// assert_eq!(ciphering.direction, Direction::Downlink);
    /// assert!(config.integrity.is_none());
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self, Error> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a security configuration from a YAML file.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Serializes the configuration to YAML.
    pub fn to_yaml(&self) -> Result<String, Error> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Checks field ranges that the type system cannot express.
    pub fn validate(&self) -> Result<(), Error> {
        if let Some(ciphering) = &self.ciphering {
            if ciphering.bearer > MAX_BEARER {
                return Err(Error::Config(format!(
                    "bearer {} exceeds 5-bit range (max {MAX_BEARER})",
                    ciphering.bearer
                )));
            }
        }
        Ok(())
    }
}

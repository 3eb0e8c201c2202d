//! Error types for the SNOW 3G crates

use thiserror::Error;

/// Error types shared across the workspace.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Cryptographic operation errors.
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// File I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors.
    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Hex decoding errors.
    #[error("Hex decode error: {0}")]
    HexDecode(#[from] hex::FromHexError),
}

//! Logging infrastructure for the SNOW 3G crates
//!
//! Configurable logging on top of the `tracing` crate, plus hex formatting
//! helpers for tags, keystream words and test vector diagnostics.
//! Key material must never be passed to these helpers.

use std::fmt;

use tracing::Level;
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use crate::error::Error;

/// Log level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Trace level - keystream and tag details
    Trace,
    /// Debug level - context lifecycle
    Debug,
    /// Info level (default)
    #[default]
    Info,
    /// Warn level
    Warn,
    /// Error level - least verbose
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("unknown log level: {s}")),
        }
    }
}

/// Install a global tracing subscriber at the given level.
///
/// The `RUST_LOG` environment variable overrides `level` when set. Returns
/// [`Error::Config`] if a global subscriber is already installed.
///
/// # Example
///
/// ```
/// use snow3g_common::logging::{init_logging, LogLevel};
///
/// let _ = init_logging(LogLevel::Debug);
/// ```
pub fn init_logging(level: LogLevel) -> Result<(), Error> {
    init_logging_with_filter(&level.to_string())
}

/// Install a global tracing subscriber with a custom filter string.
///
/// # Example
///
/// ```
/// use snow3g_common::logging::init_logging_with_filter;
///
/// // Keystream-level detail from the crypto crate only
/// let _ = init_logging_with_filter("info,snow3g_crypto=trace");
/// ```
pub fn init_logging_with_filter(filter: &str) -> Result<(), Error> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_span_events(FmtSpan::NONE)
        .try_init()
        .map_err(|e| Error::Config(format!("logging already initialized: {e}")))
}

/// Wrapper for lazy hex formatting in log fields
pub struct HexDump<'a>(pub &'a [u8]);

impl fmt::Display for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Debug for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Format bytes as upper-case hex grouped into 32-bit words.
///
/// This is the layout the ETSI/SAGE test data uses, which makes mismatches
/// easy to line up against the published vectors.
///
/// ```
/// use snow3g_common::logging::format_hex_words;
///
/// assert_eq!(format_hex_words(&[0x8c, 0xeb, 0xa6, 0x29, 0x43]), "8CEBA629 43");
/// ```
pub fn format_hex_words(data: &[u8]) -> String {
    data.chunks(4)
        .map(hex::encode_upper)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse hex that may contain whitespace, as copied from published test data.
pub fn parse_hex_words(text: &str) -> Result<Vec<u8>, Error> {
    let compact: String = text.split_whitespace().collect();
    Ok(hex::decode(compact)?)
}

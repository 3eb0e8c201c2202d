//! Common types and utilities for the SNOW 3G crates
//!
//! This crate provides the error type, logging bootstrap, security context
//! configuration and protocol types shared by `snow3g-crypto` and its tests.

pub mod config;
pub mod error;
pub mod logging;
pub mod types;

pub use config::{CipheringConfig, IntegrityConfig, SecurityConfig};
pub use error::Error;
pub use logging::{init_logging, init_logging_with_filter, HexDump, LogLevel};
pub use types::Direction;

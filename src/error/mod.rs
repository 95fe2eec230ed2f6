//! Error handling module for tabtree.
//!
//! This module provides error handling for the completion system with:
//! - A single top-level error type wrapping specific kinds
//! - A crate-wide [`Result`] alias
//! - Conversions from the error kinds and from `std::io::Error`
//!
//! Completion is a one-shot, latency-sensitive request; nothing in this
//! crate retries. A failed request fails fast and returns no hints rather
//! than hang the shell.

pub mod kinds;

// Re-export commonly used types
pub use kinds::{
    ConfigError, DiscoveryError, InstallError, ProtocolError, Result, TabtreeError,
};

//! Shared error type across chronostat crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, ChronostatError>;

/// Unified error type used by core and monitor.
///
/// Counter operations never produce it; it covers the ambient surfaces that
/// can actually fail (config loading, taxonomy decoding, reporter startup).
#[derive(Debug, Error)]
pub enum ChronostatError {
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("unknown message type: {0:#x}")]
    UnknownMessageType(u8),
    #[error("internal: {0}")]
    Internal(String),
}

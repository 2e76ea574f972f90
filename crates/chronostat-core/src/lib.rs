//! chronostat core: message-type taxonomy, counter tables, and the stats
//! registry for a PTP time server.
//!
//! This crate defines the concurrency-safe counter store shared by the
//! server's handler threads and the reporting loop. It intentionally carries
//! no transport or runtime dependencies so it can be embedded in the server
//! process, the monitor binary, and tests alike.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Counter mutators and reads are infallible by construction; the few
//! fallible paths (taxonomy decoding) surface as `ChronostatError`/`Result`
//! so instrumentation never crashes the message hot path.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod proto;
pub mod stats;

/// Shared result type.
pub use error::{ChronostatError, Result};

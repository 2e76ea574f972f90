//! chronostat monitor library entry.
//!
//! This crate wires the config layer, the JSON reporter, and the HTTP router
//! into the concrete [`Stats`](chronostat_core::stats::Stats) implementation.
//! It is intended to be consumed by the binary (`main.rs`), by the server
//! process embedding the reporter, and by integration tests.

pub mod config;
pub mod json;
pub mod router;

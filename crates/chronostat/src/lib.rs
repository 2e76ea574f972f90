//! Top-level facade crate for chronostat.
//!
//! Re-exports the counter core and the monitor so users can depend on a single crate.

pub mod core {
    pub use chronostat_core::*;
}

pub mod monitor {
    pub use chronostat_monitor::*;
}

//! Statistics collection for the time server.
//!
//! Handler threads call the typed mutators on [`Counters`]; a reporting loop
//! drives the [`Stats`] surface (snapshot, reset, start) and serves or
//! pushes the flattened export. Each counter category lives in its own
//! lock-guarded [`CounterMap`], so unrelated metrics never contend.

pub mod counter_map;
pub mod counters;

pub use counter_map::CounterMap;
pub use counters::Counters;

use crate::proto::MessageType;

/// Metric collection surface driven by an external reporting loop.
///
/// All mutators are infallible and safe to call from any number of handler
/// threads. `snapshot` must produce a stable, reportable copy of current
/// state without blocking mutators longer than the per-table critical
/// sections require.
pub trait Stats: Send + Sync {
    /// Start an out-of-band reporting activity on the given port.
    /// Use this for passive reporters.
    fn start(&self, monitoring_port: u16);

    /// Snapshot the values so they can be reported atomically.
    fn snapshot(&self);

    /// Reset all counters to 0 (keys retained).
    fn reset(&self);

    /// Atomically add 1 to the subscription counter.
    fn inc_subscription(&self, t: MessageType);

    /// Atomically add 1 to the received-message counter.
    fn inc_rx(&self, t: MessageType);

    /// Atomically add 1 to the transmitted-message counter.
    fn inc_tx(&self, t: MessageType);

    /// Atomically add 1 to the received-signaling counter.
    fn inc_rx_signaling(&self, t: MessageType);

    /// Atomically add 1 to the transmitted-signaling counter.
    fn inc_tx_signaling(&self, t: MessageType);

    /// Atomically add 1 to the worker subscription counter.
    fn inc_worker_subs(&self, worker: usize);

    /// Atomically remove 1 from the subscription counter.
    fn dec_subscription(&self, t: MessageType);

    /// Atomically remove 1 from the received-message counter.
    fn dec_rx(&self, t: MessageType);

    /// Atomically remove 1 from the transmitted-message counter.
    fn dec_tx(&self, t: MessageType);

    /// Atomically remove 1 from the received-signaling counter.
    fn dec_rx_signaling(&self, t: MessageType);

    /// Atomically remove 1 from the transmitted-signaling counter.
    fn dec_tx_signaling(&self, t: MessageType);

    /// Atomically remove 1 from the worker subscription counter.
    fn dec_worker_subs(&self, worker: usize);

    /// Atomically set the worker queue length.
    fn set_max_worker_queue(&self, worker: usize, queue: i64);

    /// Atomically set the number of retries for the latest TX timestamp.
    fn set_max_tx_ts_attempts(&self, worker: usize, attempts: i64);

    /// Atomically set the UTC offset.
    fn set_utc_offset(&self, offset: i64);
}

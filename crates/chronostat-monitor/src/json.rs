//! JSON stats reporter.
//!
//! The concrete [`Stats`] implementation: live counters mutated by handler
//! threads, plus a report copy refreshed by `snapshot()`. The monitoring
//! endpoint only ever reads the report copy, so what it serves is a stable
//! point-in-time view rather than a moving target.

use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::sync::Arc;

use chronostat_core::proto::MessageType;
use chronostat_core::stats::{Counters, Stats};

use crate::router;

/// HTTP/JSON reporter over a pair of counter registries.
///
/// Cheap to clone; all clones share the same counters.
#[derive(Clone, Default)]
pub struct JsonStats {
    inner: Arc<JsonStatsInner>,
}

#[derive(Default)]
struct JsonStatsInner {
    counters: Counters,
    report: Counters,
}

impl JsonStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flattened report map served by the monitoring endpoint.
    ///
    /// Reflects the last `snapshot()`, not the live counters.
    pub fn report_map(&self) -> BTreeMap<String, i64> {
        self.inner.report.export()
    }
}

impl Stats for JsonStats {
    /// Spawn the HTTP listener serving `GET /counters` on the given port.
    ///
    /// Must be called from within a tokio runtime. Startup failures are
    /// logged, not propagated: a dead monitoring endpoint must never take
    /// the server down with it.
    fn start(&self, monitoring_port: u16) {
        let app = router::build_router(self.clone());
        tokio::spawn(async move {
            let listen = SocketAddr::from(([0, 0, 0, 0], monitoring_port));
            let listener = match tokio::net::TcpListener::bind(listen).await {
                Ok(l) => l,
                Err(e) => {
                    tracing::error!(%listen, error = %e, "failed to bind monitoring endpoint");
                    return;
                }
            };
            tracing::info!(%listen, "monitoring endpoint listening");
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(error = %e, "monitoring endpoint failed");
            }
        });
    }

    /// Copy the live counters into the report copy.
    fn snapshot(&self) {
        self.inner.counters.copy_into(&self.inner.report);
    }

    /// Reset the live counters (values to 0, keys retained).
    fn reset(&self) {
        self.inner.counters.reset();
    }

    fn inc_subscription(&self, t: MessageType) {
        self.inner.counters.inc_subscription(t);
    }

    fn inc_rx(&self, t: MessageType) {
        self.inner.counters.inc_rx(t);
    }

    fn inc_tx(&self, t: MessageType) {
        self.inner.counters.inc_tx(t);
    }

    fn inc_rx_signaling(&self, t: MessageType) {
        self.inner.counters.inc_rx_signaling(t);
    }

    fn inc_tx_signaling(&self, t: MessageType) {
        self.inner.counters.inc_tx_signaling(t);
    }

    fn inc_worker_subs(&self, worker: usize) {
        self.inner.counters.inc_worker_subs(worker);
    }

    fn dec_subscription(&self, t: MessageType) {
        self.inner.counters.dec_subscription(t);
    }

    fn dec_rx(&self, t: MessageType) {
        self.inner.counters.dec_rx(t);
    }

    fn dec_tx(&self, t: MessageType) {
        self.inner.counters.dec_tx(t);
    }

    fn dec_rx_signaling(&self, t: MessageType) {
        self.inner.counters.dec_rx_signaling(t);
    }

    fn dec_tx_signaling(&self, t: MessageType) {
        self.inner.counters.dec_tx_signaling(t);
    }

    fn dec_worker_subs(&self, worker: usize) {
        self.inner.counters.dec_worker_subs(worker);
    }

    fn set_max_worker_queue(&self, worker: usize, queue: i64) {
        self.inner.counters.set_max_worker_queue(worker, queue);
    }

    fn set_max_tx_ts_attempts(&self, worker: usize, attempts: i64) {
        self.inner.counters.set_max_tx_ts_attempts(worker, attempts);
    }

    fn set_utc_offset(&self, offset: i64) {
        self.inner.counters.set_utc_offset(offset);
    }
}

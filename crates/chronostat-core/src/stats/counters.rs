//! The counter registry: one table per metric category plus the UTC offset
//! scalar, and the flattened export consumed by monitoring.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::proto::MessageType;
use crate::stats::CounterMap;

/// All server counters, one lock-guarded table per category.
///
/// Four message-traffic tables and the subscription table are keyed by
/// [`MessageType`]; the three worker tables are keyed by worker id. The two
/// keyspaces are distinct types, so categories cannot be conflated. Callers
/// only ever go through the typed operations below.
///
/// Construction is the only initialization; there is no separate `init`
/// step, so accidental re-initialization (and the counter loss it would
/// cause) is structurally impossible.
#[derive(Debug, Default)]
pub struct Counters {
    rx: CounterMap<MessageType>,
    rx_signaling: CounterMap<MessageType>,
    subscriptions: CounterMap<MessageType>,
    tx: CounterMap<MessageType>,
    tx_signaling: CounterMap<MessageType>,
    tx_ts_attempts: CounterMap<usize>,
    worker_queue: CounterMap<usize>,
    worker_subs: CounterMap<usize>,
    utc_offset: AtomicI64,
}

impl Counters {
    /// New registry: all tables empty, UTC offset 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset every table (values to 0, keys retained) and the UTC offset.
    ///
    /// Eight independent per-table resets plus one scalar write, in a fixed
    /// order. A concurrent reader may observe some categories already reset
    /// and others not; there is no cross-category atomicity.
    pub fn reset(&self) {
        self.subscriptions.reset_all();
        self.rx.reset_all();
        self.tx.reset_all();
        self.rx_signaling.reset_all();
        self.tx_signaling.reset_all();
        self.worker_queue.reset_all();
        self.worker_subs.reset_all();
        self.tx_ts_attempts.reset_all();
        self.utc_offset.store(0, Ordering::Relaxed);
    }

    pub fn inc_subscription(&self, t: MessageType) {
        self.subscriptions.inc(t);
    }

    pub fn dec_subscription(&self, t: MessageType) {
        self.subscriptions.dec(t);
    }

    pub fn inc_rx(&self, t: MessageType) {
        self.rx.inc(t);
    }

    pub fn dec_rx(&self, t: MessageType) {
        self.rx.dec(t);
    }

    pub fn inc_tx(&self, t: MessageType) {
        self.tx.inc(t);
    }

    pub fn dec_tx(&self, t: MessageType) {
        self.tx.dec(t);
    }

    pub fn inc_rx_signaling(&self, t: MessageType) {
        self.rx_signaling.inc(t);
    }

    pub fn dec_rx_signaling(&self, t: MessageType) {
        self.rx_signaling.dec(t);
    }

    pub fn inc_tx_signaling(&self, t: MessageType) {
        self.tx_signaling.inc(t);
    }

    pub fn dec_tx_signaling(&self, t: MessageType) {
        self.tx_signaling.dec(t);
    }

    pub fn inc_worker_subs(&self, worker: usize) {
        self.worker_subs.inc(worker);
    }

    pub fn dec_worker_subs(&self, worker: usize) {
        self.worker_subs.dec(worker);
    }

    /// Overwrite the recorded queue length for `worker`.
    pub fn set_max_worker_queue(&self, worker: usize, queue: i64) {
        self.worker_queue.set(worker, queue);
    }

    /// Overwrite the recorded TX-timestamp retry count for `worker`.
    pub fn set_max_tx_ts_attempts(&self, worker: usize, attempts: i64) {
        self.tx_ts_attempts.set(worker, attempts);
    }

    /// Overwrite the UTC offset scalar.
    pub fn set_utc_offset(&self, offset: i64) {
        self.utc_offset.store(offset, Ordering::Relaxed);
    }

    /// Current UTC offset scalar.
    pub fn utc_offset(&self) -> i64 {
        self.utc_offset.load(Ordering::Relaxed)
    }

    /// Copy every table plus the scalar into `dst`.
    ///
    /// This is the snapshot mechanism: per-key copies hold each table's lock
    /// only briefly, so mutators are never blocked longer than a single
    /// table operation. The result is a point-in-time approximation across
    /// categories, not a globally atomic snapshot.
    pub fn copy_into(&self, dst: &Counters) {
        self.subscriptions.copy_into(&dst.subscriptions);
        self.rx.copy_into(&dst.rx);
        self.tx.copy_into(&dst.tx);
        self.rx_signaling.copy_into(&dst.rx_signaling);
        self.tx_signaling.copy_into(&dst.tx_signaling);
        self.worker_queue.copy_into(&dst.worker_queue);
        self.worker_subs.copy_into(&dst.worker_subs);
        self.tx_ts_attempts.copy_into(&dst.tx_ts_attempts);
        dst.utc_offset
            .store(self.utc_offset.load(Ordering::Relaxed), Ordering::Relaxed);
    }

    /// Flatten every table into a single name -> value mapping.
    ///
    /// The naming scheme is the wire contract with downstream monitoring and
    /// must not change:
    /// `subscriptions.<messagetype>`, `rx.<messagetype>`, `tx.<messagetype>`,
    /// `rx.signaling.<messagetype>`, `tx.signaling.<messagetype>`,
    /// `worker.<workerid>.queue`, `worker.<workerid>.subscriptions`,
    /// `worker.<workerid>.txtsattempts`, and `utcoffset` (always present).
    /// Keys never written to a table produce no entry.
    pub fn export(&self) -> BTreeMap<String, i64> {
        let mut res = BTreeMap::new();

        for t in self.subscriptions.keys() {
            let name = format!("subscriptions.{}", t.export_name());
            res.insert(name, self.subscriptions.get(t));
        }

        for t in self.rx.keys() {
            res.insert(format!("rx.{}", t.export_name()), self.rx.get(t));
        }

        for t in self.tx.keys() {
            res.insert(format!("tx.{}", t.export_name()), self.tx.get(t));
        }

        for t in self.rx_signaling.keys() {
            let name = format!("rx.signaling.{}", t.export_name());
            res.insert(name, self.rx_signaling.get(t));
        }

        for t in self.tx_signaling.keys() {
            let name = format!("tx.signaling.{}", t.export_name());
            res.insert(name, self.tx_signaling.get(t));
        }

        for w in self.worker_queue.keys() {
            res.insert(format!("worker.{w}.queue"), self.worker_queue.get(w));
        }

        for w in self.worker_subs.keys() {
            let name = format!("worker.{w}.subscriptions");
            res.insert(name, self.worker_subs.get(w));
        }

        for w in self.tx_ts_attempts.keys() {
            let name = format!("worker.{w}.txtsattempts");
            res.insert(name, self.tx_ts_attempts.get(w));
        }

        res.insert("utcoffset".to_string(), self.utc_offset());

        res
    }
}

//! Export naming tests. These names are the wire contract with downstream
//! monitoring; every assertion here is bit-for-bit intentional.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use chronostat_core::proto::MessageType;
use chronostat_core::stats::Counters;

#[test]
fn fresh_registry_exports_only_utcoffset() {
    let c = Counters::new();
    let export = c.export();
    assert_eq!(export.len(), 1);
    assert_eq!(export["utcoffset"], 0);
}

#[test]
fn subscription_names() {
    let c = Counters::new();
    c.inc_subscription(MessageType::Sync);
    c.inc_subscription(MessageType::Sync);
    c.inc_subscription(MessageType::Sync);

    let export = c.export();
    assert_eq!(export["subscriptions.sync"], 3);
}

#[test]
fn traffic_names_by_direction() {
    let c = Counters::new();
    c.inc_rx(MessageType::DelayReq);
    c.inc_tx(MessageType::DelayResp);
    c.inc_rx_signaling(MessageType::Signaling);
    c.inc_tx_signaling(MessageType::Announce);

    let export = c.export();
    assert_eq!(export["rx.delay_req"], 1);
    assert_eq!(export["tx.delay_resp"], 1);
    assert_eq!(export["rx.signaling.signaling"], 1);
    assert_eq!(export["tx.signaling.announce"], 1);
    // Directions are independent tables: no cross-talk.
    assert!(!export.contains_key("rx.delay_resp"));
    assert!(!export.contains_key("tx.delay_req"));
}

#[test]
fn worker_names() {
    let c = Counters::new();
    c.set_max_worker_queue(7, 42);
    c.inc_worker_subs(7);
    c.set_max_tx_ts_attempts(7, 5);

    let export = c.export();
    assert_eq!(export["worker.7.queue"], 42);
    assert_eq!(export["worker.7.subscriptions"], 1);
    assert_eq!(export["worker.7.txtsattempts"], 5);
}

#[test]
fn utc_offset_round_trip() {
    let c = Counters::new();
    c.set_utc_offset(-18000);
    assert_eq!(c.export()["utcoffset"], -18000);
}

#[test]
fn reset_keeps_names_with_zero_values() {
    let c = Counters::new();
    c.inc_rx(MessageType::Sync);
    c.set_max_worker_queue(3, 9);
    c.set_utc_offset(37);

    c.reset();

    let export = c.export();
    assert_eq!(export["rx.sync"], 0);
    assert_eq!(export["worker.3.queue"], 0);
    assert_eq!(export["utcoffset"], 0);
}

#[test]
fn registry_copy_preserves_every_export_entry() {
    let live = Counters::new();
    live.inc_rx(MessageType::Sync);
    live.inc_tx(MessageType::FollowUp);
    live.dec_subscription(MessageType::Announce);
    live.inc_worker_subs(0);
    live.set_max_tx_ts_attempts(1, 12);
    live.set_utc_offset(-37);

    let report = Counters::new();
    live.copy_into(&report);

    assert_eq!(report.export(), live.export());
}

#[test]
fn export_serializes_to_flat_json_object() {
    let c = Counters::new();
    c.inc_rx(MessageType::Sync);
    c.set_utc_offset(-18000);

    let v = serde_json::to_value(c.export()).unwrap();
    assert_eq!(v["rx.sync"], 1);
    assert_eq!(v["utcoffset"], -18000);
}

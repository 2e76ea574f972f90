//! Counter table behavior tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use chronostat_core::stats::CounterMap;

#[test]
fn inc_dec_algebra() {
    let m: CounterMap<u8> = CounterMap::new();
    for _ in 0..5 {
        m.inc(1);
    }
    for _ in 0..2 {
        m.dec(1);
    }
    assert_eq!(m.get(1), 3);
}

#[test]
fn unwritten_key_reads_zero() {
    let m: CounterMap<u8> = CounterMap::new();
    assert_eq!(m.get(42), 0);
    assert!(m.keys().is_empty());
}

#[test]
fn unbalanced_dec_goes_negative() {
    let m: CounterMap<u8> = CounterMap::new();
    m.dec(9);
    m.dec(9);
    assert_eq!(m.get(9), -2);
}

#[test]
fn reset_zeroes_values_and_retains_keys() {
    let m: CounterMap<u8> = CounterMap::new();
    m.inc(1);
    m.set(2, 77);
    m.dec(3);

    let mut before = m.keys();
    before.sort_unstable();

    m.reset_all();

    let mut after = m.keys();
    after.sort_unstable();

    assert_eq!(before, after);
    for k in after {
        assert_eq!(m.get(k), 0);
    }
}

#[test]
fn copy_into_matches_source() {
    let src: CounterMap<u8> = CounterMap::new();
    src.inc(1);
    src.set(2, -5);
    src.set(3, 1000);

    let dst: CounterMap<u8> = CounterMap::new();
    src.copy_into(&dst);

    for k in src.keys() {
        assert_eq!(dst.get(k), src.get(k));
    }
    assert_eq!(dst.keys().len(), src.keys().len());
}

#[test]
fn copy_into_overwrites_stale_destination_values() {
    let src: CounterMap<u8> = CounterMap::new();
    src.set(1, 10);

    let dst: CounterMap<u8> = CounterMap::new();
    dst.set(1, 3);
    src.copy_into(&dst);

    assert_eq!(dst.get(1), 10);
}

//! Integration tests for Timestamp and EntityId

use hbnb_foundation::{EntityId, TIMESTAMP_FORMAT, Timestamp};

#[test]
fn persisted_format() {
    assert_eq!(TIMESTAMP_FORMAT, "%Y-%m-%dT%H:%M:%S%.6f");
    let ts = Timestamp::parse("2017-09-28T21:05:54.119427").unwrap();
    assert_eq!(ts.to_string(), "2017-09-28T21:05:54.119427");
}

#[test]
fn parse_pads_short_fractions() {
    let ts = Timestamp::parse("2017-09-28T21:05:54.1").unwrap();
    assert_eq!(ts.to_string(), "2017-09-28T21:05:54.100000");
}

#[test]
fn refresh_is_strictly_monotonic() {
    let mut ts = Timestamp::now();
    for _ in 0..100 {
        let next = Timestamp::now_after(ts);
        assert!(next > ts);
        ts = next;
    }
}

#[test]
fn ids_are_unique_uuids() {
    let ids: std::collections::HashSet<_> = (0..100).map(|_| EntityId::generate()).collect();
    assert_eq!(ids.len(), 100);
    assert!(ids.iter().all(|id| id.as_str().len() == 36));
}

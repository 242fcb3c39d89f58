//! Tests for utility functions

use std::time::Duration;

use hotel_sim::config::TimingConfig;
use hotel_sim::util::DelayRange;

#[test]
fn test_delay_range_bounds() {
    let range = DelayRange::up_to(50);
    for _ in 0..500 {
        assert!(range.sample() < Duration::from_millis(50));
    }
}

#[test]
fn test_delay_range_fixed() {
    assert_eq!(DelayRange::fixed(30).sample(), Duration::from_millis(30));
}

#[test]
fn test_timing_arrival_range() {
    let timing = TimingConfig {
        arrival_max_ms: 10,
        ..TimingConfig::default()
    };
    assert_eq!(timing.arrival(), DelayRange::up_to(10));
    assert_eq!(timing.stay(), DelayRange::up_to(5000));
}
